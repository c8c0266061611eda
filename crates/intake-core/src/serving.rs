//! Serving sizes, the multiplier table and the quantity calculation.

use std::{
    fmt::{self, Display},
    num::NonZero,
    str::FromStr,
};

use crate::ServingCount;

/// A serving size choice on the entry form.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant,
)]
pub enum ServingSize {
    /// Single serving.
    #[default]
    Small,
    /// Double serving.
    Medium,
    /// Triple serving.
    Large,
}

impl ServingSize {
    /// All sizes in display order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Returns the label shown on the size button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ServingSize::Small => "Small",
            ServingSize::Medium => "Medium",
            ServingSize::Large => "Large",
        }
    }

    /// Looks up a size by its label.
    ///
    /// Labels are matched exactly.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if `label` is not `Small`, `Medium` or `Large`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intake_core::ServingSize;
    ///
    /// assert_eq!(ServingSize::from_label("Medium"), Ok(ServingSize::Medium));
    /// assert!(ServingSize::from_label("Huge").is_err());
    /// ```
    pub fn from_label(label: &str) -> Result<Self, InvalidSizeError> {
        Self::ALL
            .into_iter()
            .find(|size| size.label() == label)
            .ok_or_else(|| InvalidSizeError {
                label: label.to_owned(),
            })
    }
}

impl Display for ServingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServingSize {
    type Err = InvalidSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// A serving size label that is not part of the table.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown serving size: {label:?}")]
pub struct InvalidSizeError {
    /// The rejected label.
    pub label: String,
}

/// Per-size serving multipliers.
///
/// # Examples
///
/// ```
/// use intake_core::{ServingSize, ServingSizeTable};
///
/// let table = ServingSizeTable::STANDARD;
/// assert_eq!(table.multiplier(ServingSize::Small), 1);
/// assert_eq!(table.multiplier(ServingSize::Large), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServingSizeTable {
    small: NonZero<u64>,
    medium: NonZero<u64>,
    large: NonZero<u64>,
}

impl ServingSizeTable {
    /// Small = 1, Medium = 2, Large = 3.
    pub const STANDARD: Self = Self::new(NonZero::<u64>::MIN, nonzero(2), nonzero(3));

    /// Creates a table from the three multipliers.
    #[must_use]
    pub const fn new(small: NonZero<u64>, medium: NonZero<u64>, large: NonZero<u64>) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }

    /// Returns the multiplier for `size`.
    #[must_use]
    pub const fn multiplier(&self, size: ServingSize) -> u64 {
        match size {
            ServingSize::Small => self.small.get(),
            ServingSize::Medium => self.medium.get(),
            ServingSize::Large => self.large.get(),
        }
    }

    /// Returns the multiplier for the size named `label`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if the label is not recognized.
    pub fn multiplier_for_label(&self, label: &str) -> Result<u64, InvalidSizeError> {
        ServingSize::from_label(label).map(|size| self.multiplier(size))
    }

    /// Iterates over `(size, multiplier)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (ServingSize, u64)> + '_ {
        ServingSize::ALL
            .into_iter()
            .map(|size| (size, self.multiplier(size)))
    }
}

impl Default for ServingSizeTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

const fn nonzero(value: u64) -> NonZero<u64> {
    match NonZero::new(value) {
        Some(value) => value,
        None => panic!("multiplier must be positive"),
    }
}

/// Converts a serving choice into a quantity in the tracker's unit.
///
/// The quantity is `unit_base * multiplier(size) * count`, saturating at
/// [`u64::MAX`].
///
/// # Examples
///
/// ```
/// use intake_core::{ServingCalculator, ServingCount, ServingSize, ServingSizeTable};
///
/// let calories = ServingCalculator::new(100, ServingSizeTable::STANDARD);
/// let quantity = calories.quantity(ServingSize::Medium, ServingCount::new(2));
/// assert_eq!(quantity, 400);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServingCalculator {
    unit_base: u64,
    table: ServingSizeTable,
}

impl ServingCalculator {
    /// Creates a calculator for a unit whose single small serving is `unit_base`.
    #[must_use]
    pub const fn new(unit_base: u64, table: ServingSizeTable) -> Self {
        Self { unit_base, table }
    }

    /// Returns the per-small-serving base quantity.
    #[must_use]
    pub const fn unit_base(&self) -> u64 {
        self.unit_base
    }

    /// Returns the multiplier table.
    #[must_use]
    pub const fn table(&self) -> &ServingSizeTable {
        &self.table
    }

    /// Returns the quantity for `count` servings of `size`.
    #[must_use]
    pub fn quantity(&self, size: ServingSize, count: ServingCount) -> u64 {
        self.unit_base
            .saturating_mul(self.table.multiplier(size))
            .saturating_mul(count.value())
    }

    /// Returns the quantity for `count` servings of the size named `label`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if the label is not recognized. No
    /// multiplier is assumed in that case.
    pub fn quantity_for_label(
        &self,
        label: &str,
        count: ServingCount,
    ) -> Result<u64, InvalidSizeError> {
        let size = ServingSize::from_label(label)?;
        Ok(self.quantity(size, count))
    }
}
