//! Core types for the Intake nutrition tracker.
//!
//! This crate holds the small, self-contained value types that both tracker
//! screens share:
//!
//! - [`digit`]: keypad digits 0-9
//! - [`serving_count`]: the serving count accumulated from keypad presses
//! - [`serving`]: serving sizes, the multiplier table and the quantity calculation
//! - [`entry`]: logged consumption entries
//! - [`unit`]: the unit a tracker counts in
//!
//! # Examples
//!
//! ```
//! use intake_core::{
//!     KeypadDigit, ServingCalculator, ServingCount, ServingSize, ServingSizeTable,
//! };
//!
//! let mut count = ServingCount::default();
//! count.press_delete();
//! count.press_digit(KeypadDigit::D2);
//!
//! let calculator = ServingCalculator::new(100, ServingSizeTable::STANDARD);
//! assert_eq!(calculator.quantity(ServingSize::Medium, count), 400);
//! ```

pub mod digit;
pub mod entry;
pub mod serving;
pub mod serving_count;
pub mod unit;

pub use self::{
    digit::KeypadDigit,
    entry::{Entry, is_blank_name},
    serving::{InvalidSizeError, ServingCalculator, ServingSize, ServingSizeTable},
    serving_count::ServingCount,
    unit::Unit,
};
