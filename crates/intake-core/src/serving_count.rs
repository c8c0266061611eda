//! Serving count accumulated from keypad presses.

use std::fmt::{self, Display};

use crate::KeypadDigit;

/// Number of servings entered through the keypad.
///
/// Digit presses append to the current value as if the decimal strings were
/// concatenated, so a fresh count of `1` followed by `2` reads `12` rather
/// than `2`. Deleting drops the last decimal digit and bottoms out at zero.
///
/// The count has no policy limit. It saturates at [`u64::MAX`] instead of
/// wrapping.
///
/// # Examples
///
/// ```
/// use intake_core::{KeypadDigit, ServingCount};
///
/// let mut count = ServingCount::default();
/// assert_eq!(count.value(), 1);
///
/// count.press_digit(KeypadDigit::D2);
/// count.press_digit(KeypadDigit::D5);
/// assert_eq!(count.value(), 125);
///
/// count.press_delete();
/// assert_eq!(count.value(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServingCount(u64);

impl ServingCount {
    /// Count shown when the entry form opens.
    pub const INITIAL: Self = Self(1);

    /// Creates a count with the given value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the current count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Appends `digit` to the decimal representation of the count.
    pub fn press_digit(&mut self, digit: KeypadDigit) {
        self.0 = self
            .0
            .saturating_mul(10)
            .saturating_add(u64::from(digit.value()));
    }

    /// Drops the last decimal digit of the count.
    pub fn press_delete(&mut self) {
        self.0 /= 10;
    }
}

impl Default for ServingCount {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Display for ServingCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl From<ServingCount> for u64 {
    fn from(count: ServingCount) -> u64 {
        count.value()
    }
}
