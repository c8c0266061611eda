use intake_core::{KeypadDigit, ServingCount, ServingSize};

/// Uncommitted state of the add-entry form.
///
/// A fresh draft has an empty name, [`ServingSize::Small`] selected and a
/// serving count of one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingEntryDraft {
    name: String,
    selected_size: ServingSize,
    serving_count: ServingCount,
}

impl PendingEntryDraft {
    /// Returns the name typed so far.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the selected serving size.
    #[must_use]
    pub fn selected_size(&self) -> ServingSize {
        self.selected_size
    }

    /// Selects a serving size.
    pub fn select_size(&mut self, size: ServingSize) {
        self.selected_size = size;
    }

    /// Returns the serving count entered on the keypad.
    #[must_use]
    pub fn serving_count(&self) -> ServingCount {
        self.serving_count
    }

    /// Forwards a digit key press to the serving count.
    pub fn press_digit(&mut self, digit: KeypadDigit) {
        self.serving_count.press_digit(digit);
    }

    /// Forwards a delete key press to the serving count.
    pub fn press_delete(&mut self) {
        self.serving_count.press_delete();
    }
}

/// State of the add-entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum EntryForm {
    /// The form is hidden.
    #[default]
    Closed,
    /// The form is shown and being edited.
    Open(PendingEntryDraft),
}

impl EntryForm {
    /// Returns the draft if the form is open.
    #[must_use]
    pub fn draft(&self) -> Option<&PendingEntryDraft> {
        match self {
            EntryForm::Closed => None,
            EntryForm::Open(draft) => Some(draft),
        }
    }

    /// Returns the draft mutably if the form is open.
    pub fn draft_mut(&mut self) -> Option<&mut PendingEntryDraft> {
        match self {
            EntryForm::Closed => None,
            EntryForm::Open(draft) => Some(draft),
        }
    }
}

#[cfg(test)]
mod tests {
    use intake_core::{KeypadDigit, ServingSize};

    use super::{EntryForm, PendingEntryDraft};

    #[test]
    fn default_draft() {
        let draft = PendingEntryDraft::default();
        assert_eq!(draft.name(), "");
        assert_eq!(draft.selected_size(), ServingSize::Small);
        assert_eq!(draft.serving_count().value(), 1);
    }

    #[test]
    fn keypad_presses_update_count() {
        let mut draft = PendingEntryDraft::default();
        draft.press_delete();
        draft.press_digit(KeypadDigit::D3);
        assert_eq!(draft.serving_count().value(), 3);
    }

    #[test]
    fn closed_form_has_no_draft() {
        let mut form = EntryForm::default();
        assert!(form.is_closed());
        assert!(form.draft().is_none());
        assert!(form.draft_mut().is_none());
    }
}
