use std::num::NonZero;

use intake_core::{Entry, ServingSizeTable, Unit};

use crate::BarClamp;

/// Parameters of one tracker screen.
///
/// The two presets, [`TrackerConfig::calories`] and [`TrackerConfig::sugar`],
/// reproduce the seeded state of the two screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Unit the tracker counts in.
    pub unit: Unit,
    /// Quantity of one small serving.
    pub unit_base: u64,
    /// Daily goal. Must be positive.
    pub goal: u64,
    /// Per-size serving multipliers.
    pub serving_sizes: ServingSizeTable,
    /// Entries listed when the session starts.
    pub initial_entries: Vec<Entry>,
    /// Consumption already counted when the session starts.
    pub initial_total: u64,
    /// Progress bar policy.
    pub bar_clamp: BarClamp,
}

/// Invalid tracker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The goal is zero, so progress is undefined.
    #[display("daily goal must be positive")]
    ZeroGoal,
}

impl TrackerConfig {
    /// Calorie tracking: 100 kcal per small serving, 2200 kcal goal, unclamped bar.
    #[must_use]
    pub fn calories() -> Self {
        Self {
            unit: Unit::Kilocalories,
            unit_base: 100,
            goal: 2200,
            serving_sizes: ServingSizeTable::STANDARD,
            initial_entries: vec![
                Entry::new("Breakfast", 520),
                Entry::new("Lunch", 680),
                Entry::new("Dinner", 450),
                Entry::new("Snacks", 200),
            ],
            initial_total: 1850,
            bar_clamp: BarClamp::Unclamped,
        }
    }

    /// Sugar tracking: 10 g per small serving, 50 g limit, bar clamped to full.
    #[must_use]
    pub fn sugar() -> Self {
        Self {
            unit: Unit::Grams,
            unit_base: 10,
            goal: 50,
            serving_sizes: ServingSizeTable::STANDARD,
            initial_entries: vec![
                Entry::new("Breakfast cereal", 25),
                Entry::new("Soda", 30),
            ],
            initial_total: 55,
            bar_clamp: BarClamp::ClampToUnit,
        }
    }

    /// Returns the goal as a non-zero value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGoal`] if the goal is zero.
    pub fn validated_goal(&self) -> Result<NonZero<u64>, ConfigError> {
        NonZero::new(self.goal).ok_or(ConfigError::ZeroGoal)
    }
}

#[cfg(test)]
mod tests {
    use intake_core::Entry;

    use super::{ConfigError, TrackerConfig};

    #[test]
    fn presets_seed_totals_match_entries() {
        for config in [TrackerConfig::calories(), TrackerConfig::sugar()] {
            let sum: u64 = config.initial_entries.iter().map(Entry::amount).sum();
            assert_eq!(sum, config.initial_total);
        }
    }

    #[test]
    fn zero_goal_is_rejected() {
        let config = TrackerConfig {
            goal: 0,
            ..TrackerConfig::calories()
        };
        assert_eq!(config.validated_goal(), Err(ConfigError::ZeroGoal));
    }
}
