use crate::{
    action::{Action, ActionRequestQueue},
    state::AppState,
};

pub(crate) fn handle_all(app_state: &mut AppState, action_queue: &mut ActionRequestQueue) {
    for action in action_queue.take_all() {
        handle(app_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, action: Action) {
    log::debug!("{}: {action:?}", app_state.active_screen);

    let screen = app_state.active_screen;
    let tracker = app_state.active_tracker_mut();
    match action {
        Action::SelectScreen(next) => app_state.active_screen = next,
        Action::OpenEntryForm => tracker.open_entry_form(),
        Action::CancelEntry => tracker.cancel_entry(),
        Action::SetName(name) => tracker.set_name(name),
        Action::SelectSize(size) => tracker.select_serving_size(size),
        Action::PressDigit(digit) => tracker.press_digit(digit),
        Action::PressDelete => tracker.press_delete(),
        Action::SubmitEntry => match tracker.submit_entry() {
            Ok(entry) => log::info!(
                "{screen}: added {:?} ({} {}), total={}",
                entry.name(),
                entry.amount(),
                tracker.unit(),
                tracker.ledger().running_total(),
            ),
            // Blank names are ignored without feedback; the form stays open.
            Err(e) => log::debug!("{screen}: submission ignored: {e}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use intake_core::{KeypadDigit, ServingSize};

    use super::{handle, handle_all};
    use crate::{
        action::{Action, ActionRequestQueue},
        state::{AppState, ScreenId},
    };

    fn run(app_state: &mut AppState, actions: impl IntoIterator<Item = Action>) {
        let mut queue = ActionRequestQueue::default();
        for action in actions {
            queue.request(action);
        }
        handle_all(app_state, &mut queue);
    }

    #[test]
    fn calorie_entry_through_actions() {
        let mut app_state = AppState::new().unwrap();
        run(
            &mut app_state,
            [
                Action::OpenEntryForm,
                Action::SetName("Toast".to_owned()),
                Action::SelectSize(ServingSize::Medium),
                Action::PressDelete,
                Action::PressDigit(KeypadDigit::D2),
                Action::SubmitEntry,
            ],
        );

        let tracker = app_state.tracker(ScreenId::Calories);
        assert!(tracker.form().is_closed());
        assert_eq!(tracker.ledger().running_total(), 2250);
        assert_eq!(tracker.ledger().entries().last().unwrap().name(), "Toast");
    }

    #[test]
    fn blank_submit_leaves_form_open() {
        let mut app_state = AppState::new().unwrap();
        run(
            &mut app_state,
            [
                Action::OpenEntryForm,
                Action::SetName("  ".to_owned()),
                Action::SubmitEntry,
            ],
        );

        let tracker = app_state.active_tracker();
        assert!(tracker.form().is_open());
        assert_eq!(tracker.ledger().entries().len(), 4);
        assert_eq!(tracker.ledger().running_total(), 1850);
    }

    #[test]
    fn submit_with_closed_form_is_noop() {
        let mut app_state = AppState::new().unwrap();
        handle(&mut app_state, Action::SubmitEntry);
        assert_eq!(app_state.active_tracker().ledger().entries().len(), 4);
    }

    #[test]
    fn actions_apply_to_selected_screen_only() {
        let mut app_state = AppState::new().unwrap();
        run(
            &mut app_state,
            [
                Action::SelectScreen(ScreenId::Sugar),
                Action::OpenEntryForm,
                Action::SetName("Juice".to_owned()),
                Action::PressDelete,
                Action::PressDigit(KeypadDigit::D3),
                Action::SubmitEntry,
            ],
        );

        assert_eq!(app_state.active_screen, ScreenId::Sugar);
        assert_eq!(app_state.tracker(ScreenId::Sugar).ledger().running_total(), 85);
        assert_eq!(
            app_state.tracker(ScreenId::Calories).ledger().running_total(),
            1850
        );
    }

    #[test]
    fn cancel_closes_form_without_entry() {
        let mut app_state = AppState::new().unwrap();
        run(
            &mut app_state,
            [
                Action::OpenEntryForm,
                Action::SetName("Cake".to_owned()),
                Action::CancelEntry,
            ],
        );

        let tracker = app_state.active_tracker();
        assert!(tracker.form().is_closed());
        assert_eq!(tracker.ledger().entries().len(), 4);
    }
}
