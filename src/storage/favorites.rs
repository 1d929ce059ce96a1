//! Favorite repository

use std::collections::HashMap;

use crate::models::{Favorite, FavoriteId};

/// In-memory favorite storage, creation order
#[derive(Debug, Clone, Default)]
pub struct FavoriteRepository {
    favorites: Vec<Favorite>,
    by_id: HashMap<FavoriteId, usize>,
}

impl FavoriteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: FavoriteId) -> Option<&Favorite> {
        self.by_id.get(&id).map(|&idx| &self.favorites[idx])
    }

    pub fn get_all(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn exists(&self, id: FavoriteId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub(crate) fn insert(&mut self, favorite: Favorite) {
        debug_assert!(!self.exists(favorite.id));

        self.by_id.insert(favorite.id, self.favorites.len());
        self.favorites.push(favorite);
    }

    pub fn count(&self) -> usize {
        self.favorites.len()
    }
}
