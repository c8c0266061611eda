use std::num::NonZero;

/// How the progress bar fraction is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum BarClamp {
    /// The bar fraction equals the raw progress fraction.
    #[default]
    Unclamped,
    /// The bar fraction is clamped to `[0, 1]`; percentage text is not.
    ClampToUnit,
}

/// Progress of a running total against a fixed daily goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalTracker {
    goal: NonZero<u64>,
    bar_clamp: BarClamp,
}

impl GoalTracker {
    /// Creates a tracker for `goal` with the given bar policy.
    #[must_use]
    pub const fn new(goal: NonZero<u64>, bar_clamp: BarClamp) -> Self {
        Self { goal, bar_clamp }
    }

    /// Returns the daily goal.
    #[must_use]
    pub const fn goal(&self) -> u64 {
        self.goal.get()
    }

    /// Returns the bar policy.
    #[must_use]
    pub const fn bar_clamp(&self) -> BarClamp {
        self.bar_clamp
    }

    /// Returns `goal - total`. Negative once the goal is exceeded.
    #[must_use]
    pub fn remaining(&self, total: u64) -> i64 {
        let diff = i128::from(self.goal.get()) - i128::from(total);
        i64::try_from(diff).unwrap_or(if diff < 0 { i64::MIN } else { i64::MAX })
    }

    /// Returns `total / goal` without any clamping.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self, total: u64) -> f64 {
        total as f64 / self.goal.get() as f64
    }

    /// Returns the fraction the progress bar is drawn with.
    #[must_use]
    pub fn bar_fraction(&self, total: u64) -> f64 {
        let fraction = self.progress_fraction(total);
        match self.bar_clamp {
            BarClamp::Unclamped => fraction,
            BarClamp::ClampToUnit => fraction.clamp(0.0, 1.0),
        }
    }

    /// Returns the progress as a whole percentage, rounding halves up.
    ///
    /// Computed in integer arithmetic so values such as 102.5% round
    /// consistently.
    #[must_use]
    pub fn percentage(&self, total: u64) -> u64 {
        let goal = u128::from(self.goal.get());
        let rounded = (u128::from(total) * 200 + goal) / (goal * 2);
        u64::try_from(rounded).unwrap_or(u64::MAX)
    }

    /// Returns [`percentage`](Self::percentage) as decimal text, e.g. `"109"`.
    #[must_use]
    pub fn percentage_text(&self, total: u64) -> String {
        self.percentage(total).to_string()
    }
}
