use intake_core::{Entry, is_blank_name};

/// Ordered list of logged entries with a running total.
///
/// The running total starts at a seeded baseline and grows by exactly the
/// amount of each accepted entry. Entries are never edited, removed or
/// reordered.
///
/// # Example
///
/// ```
/// use intake_core::Entry;
/// use intake_tracker::EntryLedger;
///
/// let mut ledger = EntryLedger::with_seed(vec![Entry::new("Soda", 30)], 30);
/// ledger.add_entry("Juice", 25).unwrap();
///
/// assert_eq!(ledger.running_total(), 55);
/// assert_eq!(ledger.entries().len(), 2);
/// assert!(ledger.add_entry("  ", 10).is_err());
/// assert_eq!(ledger.running_total(), 55);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryLedger {
    entries: Vec<Entry>,
    initial_total: u64,
    running_total: u64,
}

/// Entry names must contain at least one non-whitespace character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("entry name is blank")]
pub struct BlankNameError;

impl EntryLedger {
    /// Creates a ledger pre-filled with `entries` whose total starts at `initial_total`.
    ///
    /// `initial_total` is taken as given and is not recomputed from `entries`.
    #[must_use]
    pub fn with_seed(entries: Vec<Entry>, initial_total: u64) -> Self {
        Self {
            entries,
            initial_total,
            running_total: initial_total,
        }
    }

    /// Appends an entry and adds `quantity` to the running total.
    ///
    /// # Errors
    ///
    /// Returns [`BlankNameError`] if `name` is empty or whitespace only. The
    /// ledger is left untouched in that case.
    pub fn add_entry(&mut self, name: &str, quantity: u64) -> Result<Entry, BlankNameError> {
        if is_blank_name(name) {
            return Err(BlankNameError);
        }
        let entry = Entry::new(name, quantity);
        self.entries.push(entry.clone());
        self.running_total = self.running_total.saturating_add(quantity);
        Ok(entry)
    }

    /// Returns the cumulative consumption, baseline included.
    #[must_use]
    pub fn running_total(&self) -> u64 {
        self.running_total
    }

    /// Returns the seeded baseline the running total started from.
    #[must_use]
    pub fn initial_total(&self) -> u64 {
        self.initial_total
    }

    /// Returns all entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}
