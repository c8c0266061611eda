//! Logged consumption entries.

/// One logged consumption record.
///
/// Entries are immutable once created. Construction does not validate the
/// name; the ledger rejects blank names before an entry is created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry {
    name: String,
    amount: u64,
}

impl Entry {
    /// Creates an entry.
    #[must_use]
    pub fn new(name: impl Into<String>, amount: u64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Returns the label of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quantity in the tracker's unit.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }
}

/// Returns `true` if `name` is empty or consists only of whitespace.
///
/// ```
/// use intake_core::is_blank_name;
///
/// assert!(is_blank_name(""));
/// assert!(is_blank_name(" \t "));
/// assert!(!is_blank_name(" Toast "));
/// ```
#[must_use]
pub fn is_blank_name(name: &str) -> bool {
    name.trim().is_empty()
}
