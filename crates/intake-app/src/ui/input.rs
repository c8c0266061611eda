use eframe::egui::{InputState, Key};
use intake_core::KeypadDigit;

use crate::action::{Action, ActionRequestQueue};

struct Shortcut {
    key: Key,
    action: Action,
}

impl Shortcut {
    const fn new(key: Key, action: Action) -> Self {
        Self { key, action }
    }

    const fn digit(key: Key, digit: KeypadDigit) -> Self {
        Self::new(key, Action::PressDigit(digit))
    }
}

// Active only while the entry form is open and no text field has focus.
// Escape is left to the modal, which reports it as a close request.
const SHORTCUTS: [Shortcut; 12] = [
    Shortcut::digit(Key::Num0, KeypadDigit::D0),
    Shortcut::digit(Key::Num1, KeypadDigit::D1),
    Shortcut::digit(Key::Num2, KeypadDigit::D2),
    Shortcut::digit(Key::Num3, KeypadDigit::D3),
    Shortcut::digit(Key::Num4, KeypadDigit::D4),
    Shortcut::digit(Key::Num5, KeypadDigit::D5),
    Shortcut::digit(Key::Num6, KeypadDigit::D6),
    Shortcut::digit(Key::Num7, KeypadDigit::D7),
    Shortcut::digit(Key::Num8, KeypadDigit::D8),
    Shortcut::digit(Key::Num9, KeypadDigit::D9),
    Shortcut::new(Key::Backspace, Action::PressDelete),
    Shortcut::new(Key::Enter, Action::SubmitEntry),
];

pub(crate) fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    if i.modifiers.command || i.modifiers.alt {
        return;
    }
    for shortcut in SHORTCUTS {
        if i.key_pressed(shortcut.key) {
            action_queue.request(shortcut.action);
        }
    }
}
