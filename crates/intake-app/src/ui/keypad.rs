use eframe::egui::{Button, Grid, RichText, Ui, Vec2};
use intake_core::KeypadDigit;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::icon,
};

enum KeyType {
    Digit(KeypadDigit),
    Delete,
    Enter,
}

const COLUMNS: usize = 3;

const KEYS: [KeyType; 12] = [
    KeyType::Digit(KeypadDigit::D1),
    KeyType::Digit(KeypadDigit::D2),
    KeyType::Digit(KeypadDigit::D3),
    KeyType::Digit(KeypadDigit::D4),
    KeyType::Digit(KeypadDigit::D5),
    KeyType::Digit(KeypadDigit::D6),
    KeyType::Digit(KeypadDigit::D7),
    KeyType::Digit(KeypadDigit::D8),
    KeyType::Digit(KeypadDigit::D9),
    KeyType::Digit(KeypadDigit::D0),
    KeyType::Delete,
    KeyType::Enter,
];

pub(crate) fn show(ui: &mut Ui, action_queue: &mut ActionRequestQueue) {
    let x_padding = 6.0;
    let y_padding = 6.0;
    #[expect(clippy::cast_precision_loss)]
    let columns = COLUMNS as f32;
    let key_size = ((ui.available_width() - (columns - 1.0) * x_padding) / columns).min(72.0);

    Grid::new(ui.id().with("keypad_grid"))
        .spacing((x_padding, y_padding))
        .show(ui, |ui| {
            for row in KEYS.chunks(COLUMNS) {
                for key in row {
                    let (label, hover, action) = match key {
                        KeyType::Digit(digit) => {
                            (digit.to_string(), "Add digit", Action::PressDigit(*digit))
                        }
                        KeyType::Delete => {
                            (icon::BACKSPACE.to_owned(), "Delete digit", Action::PressDelete)
                        }
                        KeyType::Enter => (icon::CHECK.to_owned(), "Add entry", Action::SubmitEntry),
                    };
                    let text = RichText::new(label).size(key_size * 0.4).strong();
                    let button = ui
                        .add(Button::new(text).min_size(Vec2::splat(key_size)))
                        .on_hover_text(hover);
                    if button.clicked() {
                        action_queue.request(action);
                    }
                }
                ui.end_row();
            }
        });
}
