use intake_tracker::{ConfigError, ConsumptionTracker, TrackerConfig};

/// The two tracker screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub(crate) enum ScreenId {
    #[display("calories")]
    Calories,
    #[display("sugar")]
    Sugar,
}

impl ScreenId {
    pub(crate) const ALL: [Self; 2] = [Self::Calories, Self::Sugar];
}

// AppState holds one independent tracker per screen. Nothing is persisted.
#[derive(Debug)]
pub(crate) struct AppState {
    calories: ConsumptionTracker,
    sugar: ConsumptionTracker,
    pub(crate) active_screen: ScreenId,
}

impl AppState {
    pub(crate) fn new() -> Result<Self, ConfigError> {
        Self::from_configs(TrackerConfig::calories(), TrackerConfig::sugar())
    }

    pub(crate) fn from_configs(
        calories: TrackerConfig,
        sugar: TrackerConfig,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            calories: ConsumptionTracker::new(calories)?,
            sugar: ConsumptionTracker::new(sugar)?,
            active_screen: ScreenId::Calories,
        })
    }

    #[must_use]
    pub(crate) fn tracker(&self, screen: ScreenId) -> &ConsumptionTracker {
        match screen {
            ScreenId::Calories => &self.calories,
            ScreenId::Sugar => &self.sugar,
        }
    }

    pub(crate) fn tracker_mut(&mut self, screen: ScreenId) -> &mut ConsumptionTracker {
        match screen {
            ScreenId::Calories => &mut self.calories,
            ScreenId::Sugar => &mut self.sugar,
        }
    }

    #[must_use]
    pub(crate) fn active_tracker(&self) -> &ConsumptionTracker {
        self.tracker(self.active_screen)
    }

    pub(crate) fn active_tracker_mut(&mut self) -> &mut ConsumptionTracker {
        self.tracker_mut(self.active_screen)
    }
}

#[cfg(test)]
mod tests {
    use intake_core::Unit;
    use intake_tracker::{ConfigError, TrackerConfig};

    use super::{AppState, ScreenId};

    #[test]
    fn starts_on_calories_with_both_presets() {
        let state = AppState::new().unwrap();
        assert_eq!(state.active_screen, ScreenId::Calories);
        assert_eq!(state.active_tracker().unit(), Unit::Kilocalories);
        assert_eq!(state.tracker(ScreenId::Sugar).unit(), Unit::Grams);
    }

    #[test]
    fn invalid_config_is_reported() {
        let sugar = TrackerConfig {
            goal: 0,
            ..TrackerConfig::sugar()
        };
        let err = AppState::from_configs(TrackerConfig::calories(), sugar).unwrap_err();
        assert_eq!(err, ConfigError::ZeroGoal);
    }
}
