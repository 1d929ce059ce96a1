//! Thread-safe ledger handle
//!
//! Wraps a [`Ledger`] in a single mutex. Each call runs as one critical
//! section over the whole ledger. The codec helpers in `export` copy what
//! they need under the lock and do their file I/O after releasing it.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{WalletError, WalletResult};

use super::Ledger;

/// Cloneable handle to a ledger shared between threads
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    fn lock(&self) -> WalletResult<MutexGuard<'_, Ledger>> {
        self.inner
            .lock()
            .map_err(|e| WalletError::Storage(format!("Failed to acquire ledger lock: {}", e)))
    }

    /// Run one operation with exclusive access to the ledger
    ///
    /// ```
    /// use wallet_cli::services::AccountService;
    /// use wallet_cli::storage::SharedLedger;
    ///
    /// let shared = SharedLedger::default();
    /// let account = shared
    ///     .with(|ledger| AccountService::new(ledger).register("+992000000001"))
    ///     .unwrap();
    /// assert_eq!(account.id.get(), 1);
    /// ```
    pub fn with<T, F>(&self, f: F) -> WalletResult<T>
    where
        F: FnOnce(&mut Ledger) -> WalletResult<T>,
    {
        let mut guard = self.lock()?;
        f(&mut guard)
    }

    /// Clone the current state
    pub fn snapshot(&self) -> WalletResult<Ledger> {
        Ok(self.lock()?.clone())
    }

    /// Take the ledger back out if this is the last handle
    pub fn try_into_inner(self) -> Result<Ledger, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(|e| e.into_inner())),
            Err(inner) => Err(Self { inner }),
        }
    }
}
