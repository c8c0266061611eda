use eframe::egui::{Button, RichText, ScrollArea, Ui, Vec2};
use egui_extras::{Size, StripBuilder};

use super::{entry_list, summary_card};
use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        entry_list::EntryListViewModel, icon, palette::Palette,
        summary_card::SummaryViewModel,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScreenViewModel<'a> {
    pub(crate) title: &'static str,
    pub(crate) summary: SummaryViewModel,
    pub(crate) entries: EntryListViewModel<'a>,
    pub(crate) add_label: &'static str,
}

pub(crate) fn show(ui: &mut Ui, vm: &ScreenViewModel<'_>, action_queue: &mut ActionRequestQueue) {
    let palette = Palette::from_visuals(ui.visuals());
    let header_height = 32.0;

    StripBuilder::new(ui)
        .size(Size::exact(header_height))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new(vm.title).strong());
                });
            });
            strip.cell(|ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    summary_card::show(ui, &vm.summary);
                    ui.add_space(12.0);
                    entry_list::show(ui, &vm.entries);
                    ui.add_space(16.0);

                    let add = Button::new(
                        RichText::new(format!("{} {}", icon::PLUS, vm.add_label))
                            .strong()
                            .color(palette.on_accent),
                    )
                    .fill(palette.accent)
                    .min_size(Vec2::new(ui.available_width(), 44.0));
                    if ui.add(add).clicked() {
                        action_queue.request(Action::OpenEntryForm);
                    }
                });
            });
        });
}
