//! Rules for free-text fields
//!
//! Phones, categories and favorite names are written unescaped into the
//! flat files, so they may not contain the separators those files use.

/// Field separator shared by the compact form and the dump files
pub const FIELD_SEPARATOR: char = ';';

/// Record separator of the compact form
pub const RECORD_SEPARATOR: char = '|';

/// Characters no stored text field may contain
pub const RESERVED_CHARS: [char; 4] = [FIELD_SEPARATOR, RECORD_SEPARATOR, '\n', '\r'];

/// Why `value` cannot be stored, or `None` if it can
///
/// `required` fields must also be non-empty.
pub fn text_problem(value: &str, required: bool) -> Option<String> {
    if required && value.is_empty() {
        return Some("must not be empty".to_string());
    }
    value
        .chars()
        .find(|c| RESERVED_CHARS.contains(c))
        .map(|c| format!("{:?} contains reserved character {:?}", value, c))
}
