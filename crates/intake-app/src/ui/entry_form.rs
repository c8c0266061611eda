use eframe::egui::{Button, Context, Id, Modal, RichText, TextEdit, Ui, Vec2};
use intake_core::ServingSize;

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{icon, keypad, palette::Palette},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SizeOption {
    pub(crate) size: ServingSize,
    pub(crate) selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EntryFormViewModel<'a> {
    pub(crate) name: &'a str,
    pub(crate) name_placeholder: &'static str,
    pub(crate) sizes: Vec<SizeOption>,
    pub(crate) serving_count: String,
    pub(crate) submit_label: &'static str,
}

const FORM_WIDTH: f32 = 320.0;

fn section_title(ui: &mut Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text).strong().size(16.0));
}

fn show_name_field(ui: &mut Ui, vm: &EntryFormViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    let mut name = vm.name.to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut name)
            .hint_text(vm.name_placeholder)
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        action_queue.request(Action::SetName(name));
    }
}

fn show_size_buttons(
    ui: &mut Ui,
    vm: &EntryFormViewModel<'_>,
    palette: &Palette,
    action_queue: &mut ActionRequestQueue,
) {
    ui.horizontal(|ui| {
        for option in &vm.sizes {
            let fill = if option.selected {
                palette.button_selected
            } else {
                palette.button
            };
            let button = Button::new(
                RichText::new(option.size.label())
                    .strong()
                    .color(palette.on_accent),
            )
            .fill(fill)
            .selected(option.selected);
            if ui.add(button).clicked() {
                action_queue.request(Action::SelectSize(option.size));
            }
        }
    });
}

pub(crate) fn show(ctx: &Context, vm: &EntryFormViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    let modal = Modal::new(Id::new("entry_form")).show(ctx, |ui| {
        let palette = Palette::from_visuals(ui.visuals());
        ui.set_width(FORM_WIDTH);

        if ui
            .button(RichText::new(icon::ARROW_BACK).size(20.0))
            .on_hover_text("Back")
            .clicked()
        {
            action_queue.request(Action::CancelEntry);
        }

        ui.vertical_centered(|ui| {
            ui.heading("Enter food / drink name");
        });
        show_name_field(ui, vm, action_queue);

        section_title(ui, "Serving size");
        show_size_buttons(ui, vm, &palette, action_queue);

        section_title(ui, "Number of servings");
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&vm.serving_count).strong().size(20.0));
        });
        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            keypad::show(ui, action_queue);
        });

        ui.add_space(8.0);
        let submit = Button::new(
            RichText::new(vm.submit_label)
                .strong()
                .size(16.0)
                .color(palette.on_accent),
        )
        .fill(palette.button)
        .min_size(Vec2::new(ui.available_width(), 40.0));
        if ui.add(submit).clicked() {
            action_queue.request(Action::SubmitEntry);
        }

        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            if ui
                .button(RichText::new("Close").color(palette.destructive))
                .clicked()
            {
                action_queue.request(Action::CancelEntry);
            }
        });
    });

    // Only Escape closes from outside the form; backdrop clicks keep the draft.
    if modal.should_close() && !modal.backdrop_response.clicked() {
        action_queue.request(Action::CancelEntry);
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{
        Context, Event, Key, Modifiers, PointerButton, Pos2, RawInput, Rect, vec2,
    };
    use intake_core::ServingSize;

    use super::{EntryFormViewModel, SizeOption, show};
    use crate::action::{Action, ActionRequestQueue};

    fn form_vm() -> EntryFormViewModel<'static> {
        EntryFormViewModel {
            name: "Toast",
            name_placeholder: "e.g. Macaroni and Cheese",
            sizes: ServingSize::ALL
                .into_iter()
                .map(|size| SizeOption {
                    size,
                    selected: size == ServingSize::Small,
                })
                .collect(),
            serving_count: "1".to_owned(),
            submit_label: "Calculate calories",
        }
    }

    fn run_frames(frames: Vec<Vec<Event>>) -> Vec<Action> {
        let ctx = Context::default();
        let vm = form_vm();
        let mut action_queue = ActionRequestQueue::default();
        let mut actions = Vec::new();
        for events in [Vec::new(), Vec::new()].into_iter().chain(frames) {
            let raw_input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(420.0, 800.0))),
                events,
                ..Default::default()
            };
            let _ = ctx.run(raw_input, |ctx| show(ctx, &vm, &mut action_queue));
            actions.extend(action_queue.take_all());
        }
        actions
    }

    fn pointer_button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn backdrop_click_keeps_form_open() {
        let corner = Pos2::new(10.0, 10.0);
        let actions = run_frames(vec![
            vec![Event::PointerMoved(corner), pointer_button(corner, true)],
            vec![pointer_button(corner, false)],
            Vec::new(),
        ]);
        assert!(!actions.contains(&Action::CancelEntry), "{actions:?}");
    }

    #[test]
    fn escape_cancels_form() {
        let actions = run_frames(vec![vec![Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }]]);
        assert_eq!(actions, [Action::CancelEntry]);
    }
}
