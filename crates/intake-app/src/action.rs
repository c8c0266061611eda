use std::mem;

use intake_core::{KeypadDigit, ServingSize};

use crate::state::ScreenId;

pub(crate) mod handler;

/// User intents collected during a frame, applied to the active screen's tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    SelectScreen(ScreenId),
    OpenEntryForm,
    CancelEntry,
    SetName(String),
    SelectSize(ServingSize),
    PressDigit(KeypadDigit),
    PressDelete,
    SubmitEntry,
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}

#[cfg(test)]
mod tests {
    use intake_core::KeypadDigit;

    use super::{Action, ActionRequestQueue};

    #[test]
    fn take_all_returns_actions_in_order_and_clears_queue() {
        let mut queue = ActionRequestQueue::default();
        queue.request(Action::OpenEntryForm);
        queue.request(Action::PressDigit(KeypadDigit::D4));
        queue.request(Action::SubmitEntry);

        let drained = queue.take_all();
        assert_eq!(
            drained,
            [
                Action::OpenEntryForm,
                Action::PressDigit(KeypadDigit::D4),
                Action::SubmitEntry,
            ]
        );

        let drained_again = queue.take_all();
        assert!(drained_again.is_empty());
    }
}
