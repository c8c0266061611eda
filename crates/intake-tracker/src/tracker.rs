use intake_core::{
    Entry, InvalidSizeError, KeypadDigit, ServingCalculator, ServingSize, Unit,
};

use crate::{
    BlankNameError, ConfigError, EntryForm, EntryLedger, GoalTracker, PendingEntryDraft,
    TrackerConfig,
};

/// Reasons a submission leaves the tracker unchanged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum SubmitError {
    /// The entry form is not open.
    #[display("entry form is not open")]
    FormClosed,
    /// The draft name is empty or whitespace only. The form stays open.
    #[display("entry name is blank")]
    BlankName,
}

impl From<BlankNameError> for SubmitError {
    fn from(_: BlankNameError) -> Self {
        SubmitError::BlankName
    }
}

/// Consumption tracking for one unit: ledger, goal progress and the add-entry form.
///
/// Both screens of the app are instances of this type with different
/// [`TrackerConfig`]s.
///
/// # Example
///
/// ```
/// use intake_core::{KeypadDigit, ServingSize};
/// use intake_tracker::{ConsumptionTracker, TrackerConfig};
///
/// let mut tracker = ConsumptionTracker::new(TrackerConfig::calories()).unwrap();
/// tracker.open_entry_form();
/// tracker.set_name("Toast");
/// tracker.select_serving_size(ServingSize::Medium);
/// tracker.press_delete();
/// tracker.press_digit(KeypadDigit::D2);
///
/// let entry = tracker.submit_entry().unwrap();
/// assert_eq!(entry.amount(), 400);
///
/// let snapshot = tracker.snapshot();
/// assert_eq!(snapshot.running_total, 2250);
/// assert_eq!(snapshot.remaining, -50);
/// assert_eq!(snapshot.percentage_text, "102");
/// assert!(snapshot.form.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumptionTracker {
    unit: Unit,
    calculator: ServingCalculator,
    goal: GoalTracker,
    ledger: EntryLedger,
    form: EntryForm,
}

/// Read model of a tracker for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSnapshot<'a> {
    /// Logged entries in insertion order.
    pub entries: &'a [Entry],
    /// Cumulative consumption.
    pub running_total: u64,
    /// `goal - running_total`; negative when over goal.
    pub remaining: i64,
    /// Daily goal.
    pub goal: u64,
    /// Unit of all amounts.
    pub unit: Unit,
    /// Unclamped `running_total / goal`.
    pub progress_fraction: f64,
    /// Fraction the progress bar is drawn with.
    pub bar_fraction: f64,
    /// Rounded percentage of the goal.
    pub percentage: u64,
    /// [`percentage`](Self::percentage) as text.
    pub percentage_text: String,
    /// The draft when the entry form is open.
    pub form: Option<&'a PendingEntryDraft>,
}

impl ConsumptionTracker {
    /// Creates a tracker from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroGoal`] if the configured goal is zero.
    pub fn new(config: TrackerConfig) -> Result<Self, ConfigError> {
        let goal = config.validated_goal()?;
        let TrackerConfig {
            unit,
            unit_base,
            goal: _,
            serving_sizes,
            initial_entries,
            initial_total,
            bar_clamp,
        } = config;
        Ok(Self {
            unit,
            calculator: ServingCalculator::new(unit_base, serving_sizes),
            goal: GoalTracker::new(goal, bar_clamp),
            ledger: EntryLedger::with_seed(initial_entries, initial_total),
            form: EntryForm::Closed,
        })
    }

    /// Returns the unit amounts are counted in.
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the serving calculator.
    #[must_use]
    pub fn calculator(&self) -> &ServingCalculator {
        &self.calculator
    }

    /// Returns the goal tracker.
    #[must_use]
    pub fn goal(&self) -> &GoalTracker {
        &self.goal
    }

    /// Returns the ledger.
    #[must_use]
    pub fn ledger(&self) -> &EntryLedger {
        &self.ledger
    }

    /// Returns the state of the add-entry form.
    #[must_use]
    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    /// Returns the read model.
    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot<'_> {
        let total = self.ledger.running_total();
        TrackerSnapshot {
            entries: self.ledger.entries(),
            running_total: total,
            remaining: self.goal.remaining(total),
            goal: self.goal.goal(),
            unit: self.unit,
            progress_fraction: self.goal.progress_fraction(total),
            bar_fraction: self.goal.bar_fraction(total),
            percentage: self.goal.percentage(total),
            percentage_text: self.goal.percentage_text(total),
            form: self.form.draft(),
        }
    }

    /// Opens the add-entry form with a fresh draft.
    ///
    /// An already open form keeps its draft.
    pub fn open_entry_form(&mut self) {
        if self.form.is_closed() {
            self.form = EntryForm::Open(PendingEntryDraft::default());
        }
    }

    /// Closes the form and discards the draft.
    pub fn cancel_entry(&mut self) {
        self.form = EntryForm::Closed;
    }

    /// Sets the draft name. No-op while the form is closed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(draft) = self.form.draft_mut() {
            draft.set_name(name);
        }
    }

    /// Selects the serving size named `label`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSizeError`] if the label is not recognized; the draft
    /// keeps its previous size.
    pub fn select_size(&mut self, label: &str) -> Result<(), InvalidSizeError> {
        let size = ServingSize::from_label(label)?;
        self.select_serving_size(size);
        Ok(())
    }

    /// Selects a serving size. No-op while the form is closed.
    pub fn select_serving_size(&mut self, size: ServingSize) {
        if let Some(draft) = self.form.draft_mut() {
            draft.select_size(size);
        }
    }

    /// Appends a digit to the serving count. No-op while the form is closed.
    pub fn press_digit(&mut self, digit: KeypadDigit) {
        if let Some(draft) = self.form.draft_mut() {
            draft.press_digit(digit);
        }
    }

    /// Removes the last digit of the serving count. No-op while the form is closed.
    pub fn press_delete(&mut self) {
        if let Some(draft) = self.form.draft_mut() {
            draft.press_delete();
        }
    }

    /// Commits the draft as a new entry and closes the form.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::FormClosed`] if no form is open.
    /// - [`SubmitError::BlankName`] if the draft name is blank. The form
    ///   stays open and the draft is kept.
    pub fn submit_entry(&mut self) -> Result<Entry, SubmitError> {
        let EntryForm::Open(draft) = &self.form else {
            return Err(SubmitError::FormClosed);
        };
        let quantity = self
            .calculator
            .quantity(draft.selected_size(), draft.serving_count());
        let entry = self.ledger.add_entry(draft.name(), quantity)?;
        self.form = EntryForm::Closed;
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use intake_core::{KeypadDigit, ServingSize, Unit};

    use super::{ConsumptionTracker, SubmitError};
    use crate::{ConfigError, TrackerConfig};

    fn calories() -> ConsumptionTracker {
        ConsumptionTracker::new(TrackerConfig::calories()).unwrap()
    }

    fn sugar() -> ConsumptionTracker {
        ConsumptionTracker::new(TrackerConfig::sugar()).unwrap()
    }

    #[test]
    fn initial_calorie_snapshot() {
        let tracker = calories();
        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.entries.len(), 4);
        assert_eq!(snapshot.running_total, 1850);
        assert_eq!(snapshot.remaining, 350);
        assert_eq!(snapshot.goal, 2200);
        assert_eq!(snapshot.unit, Unit::Kilocalories);
        assert_eq!(snapshot.percentage_text, "84");
        assert!(snapshot.form.is_none());
    }

    #[test]
    fn calorie_toast_scenario() {
        let mut tracker = calories();
        tracker.open_entry_form();
        tracker.set_name("Toast");
        tracker.select_size("Medium").unwrap();
        tracker.press_delete();
        tracker.press_digit(KeypadDigit::D2);

        let entry = tracker.submit_entry().unwrap();
        assert_eq!(entry.name(), "Toast");
        assert_eq!(entry.amount(), 400);

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.running_total, 2250);
        assert_eq!(snapshot.remaining, -50);
        assert_eq!(snapshot.percentage_text, "102");
        assert!(snapshot.bar_fraction > 1.0);
        assert_eq!(snapshot.entries.last(), Some(&entry));
        assert!(tracker.form().is_closed());
    }

    #[test]
    fn sugar_juice_scenario() {
        let mut tracker = sugar();
        tracker.open_entry_form();
        tracker.set_name("Juice");
        tracker.press_delete();
        tracker.press_digit(KeypadDigit::D3);

        let entry = tracker.submit_entry().unwrap();
        assert_eq!(entry.amount(), 30);

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.running_total, 85);
        assert_eq!(snapshot.remaining, -35);
        assert!((snapshot.bar_fraction - 1.0).abs() < f64::EPSILON);
        assert!(snapshot.progress_fraction > 1.0);
        assert_eq!(snapshot.percentage_text, "170");
    }

    #[test]
    fn default_count_concatenates() {
        let mut tracker = calories();
        tracker.open_entry_form();
        tracker.set_name("Pasta");
        tracker.press_digit(KeypadDigit::D2);

        let entry = tracker.submit_entry().unwrap();
        // "1" then "2" reads 12 servings
        assert_eq!(entry.amount(), 1200);
    }

    #[test]
    fn blank_submit_keeps_form_open() {
        let mut tracker = calories();
        tracker.open_entry_form();
        tracker.set_name("   ");
        tracker.select_serving_size(ServingSize::Large);
        let before = tracker.clone();

        assert_eq!(tracker.submit_entry(), Err(SubmitError::BlankName));
        assert_eq!(tracker, before);
        let draft = tracker.form().draft().unwrap();
        assert_eq!(draft.selected_size(), ServingSize::Large);
    }

    #[test]
    fn submit_without_form_is_rejected() {
        let mut tracker = sugar();
        let before = tracker.clone();
        assert_eq!(tracker.submit_entry(), Err(SubmitError::FormClosed));
        assert_eq!(tracker, before);
    }

    #[test]
    fn cancel_discards_draft_and_keeps_ledger() {
        let mut tracker = calories();
        tracker.open_entry_form();
        tracker.set_name("Cake");
        tracker.press_digit(KeypadDigit::D9);
        tracker.cancel_entry();

        assert!(tracker.form().is_closed());
        assert_eq!(tracker.ledger().running_total(), 1850);

        tracker.open_entry_form();
        let draft = tracker.form().draft().unwrap();
        assert_eq!(draft.name(), "");
        assert_eq!(draft.serving_count().value(), 1);
    }

    #[test]
    fn successful_submit_resets_draft() {
        let mut tracker = calories();
        tracker.open_entry_form();
        tracker.set_name("Soup");
        tracker.select_serving_size(ServingSize::Large);
        tracker.submit_entry().unwrap();

        tracker.open_entry_form();
        let draft = tracker.form().draft().unwrap();
        assert_eq!(draft.name(), "");
        assert_eq!(draft.selected_size(), ServingSize::Small);
        assert_eq!(draft.serving_count().value(), 1);
    }

    #[test]
    fn reopening_keeps_current_draft() {
        let mut tracker = calories();
        tracker.open_entry_form();
        tracker.set_name("Rice");
        tracker.open_entry_form();
        assert_eq!(tracker.form().draft().unwrap().name(), "Rice");
    }

    #[test]
    fn edits_while_closed_are_ignored() {
        let mut tracker = calories();
        let before = tracker.clone();
        tracker.set_name("Ghost");
        tracker.press_digit(KeypadDigit::D4);
        tracker.press_delete();
        tracker.select_size("Large").unwrap();
        assert_eq!(tracker, before);
    }

    #[test]
    fn unknown_size_label_keeps_selection() {
        let mut tracker = calories();
        tracker.open_entry_form();
        tracker.select_size("Medium").unwrap();

        let err = tracker.select_size("Venti").unwrap_err();
        assert_eq!(err.label, "Venti");
        assert_eq!(
            tracker.form().draft().unwrap().selected_size(),
            ServingSize::Medium
        );
    }

    #[test]
    fn zero_goal_config_is_rejected() {
        let config = TrackerConfig {
            goal: 0,
            ..TrackerConfig::sugar()
        };
        assert_eq!(
            ConsumptionTracker::new(config).unwrap_err(),
            ConfigError::ZeroGoal
        );
    }

    #[test]
    fn trackers_are_independent() {
        let mut calories = calories();
        let sugar = sugar();
        calories.open_entry_form();
        calories.set_name("Toast");
        calories.submit_entry().unwrap();

        assert_eq!(sugar.ledger().running_total(), 55);
        assert_eq!(sugar.ledger().entries().len(), 2);
    }
}
