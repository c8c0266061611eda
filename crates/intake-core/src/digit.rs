//! Keypad digit representation.

use std::fmt::{self, Display};

/// A keypad digit in the range 0-9.
///
/// Each variant corresponds to exactly one key on the serving-count keypad, so
/// values outside the decimal digit range cannot reach the accumulator.
///
/// # Examples
///
/// ```
/// use intake_core::KeypadDigit;
///
/// let digit = KeypadDigit::D5;
/// assert_eq!(digit.value(), 5);
///
/// assert_eq!(KeypadDigit::try_from_value(7), Some(KeypadDigit::D7));
/// assert_eq!(KeypadDigit::try_from_value(10), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum KeypadDigit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl KeypadDigit {
    /// All digits in ascending order.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Digits in the order they appear on the keypad: 1-9, then 0.
    pub const KEYPAD_ORDER: [Self; 10] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
        Self::D0,
    ];

    /// Creates a digit from a value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    ///
    /// ```should_panic
    /// use intake_core::KeypadDigit;
    ///
    /// let _ = KeypadDigit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a value, returning `None` if it is greater than 9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        let digit = match value {
            0 => Self::D0,
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => return None,
        };
        Some(digit)
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for KeypadDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<KeypadDigit> for u8 {
    fn from(digit: KeypadDigit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::KeypadDigit;

    #[test]
    fn value_round_trips_for_every_digit() {
        for (i, digit) in (0..).zip(KeypadDigit::ALL) {
            assert_eq!(digit.value(), i);
            assert_eq!(KeypadDigit::from_value(i), digit);
        }
    }

    #[test]
    fn keypad_order_ends_with_zero() {
        assert_eq!(KeypadDigit::KEYPAD_ORDER[0], KeypadDigit::D1);
        assert_eq!(KeypadDigit::KEYPAD_ORDER[9], KeypadDigit::D0);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(KeypadDigit::try_from_value(10), None);
        assert_eq!(KeypadDigit::try_from_value(u8::MAX), None);
    }
}
