use eframe::egui::{RichText, Sides, Ui};

use crate::ui::palette::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EntryRow<'a> {
    pub(crate) name: &'a str,
    pub(crate) amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EntryListViewModel<'a> {
    pub(crate) heading: &'static str,
    pub(crate) rows: Vec<EntryRow<'a>>,
}

pub(crate) fn show(ui: &mut Ui, vm: &EntryListViewModel<'_>) {
    let palette = Palette::from_visuals(ui.visuals());
    ui.label(RichText::new(vm.heading).strong().size(16.0));
    for row in &vm.rows {
        ui.group(|ui| {
            Sides::new().show(
                ui,
                |ui| {
                    ui.label(RichText::new(row.name).strong());
                },
                |ui| {
                    ui.label(RichText::new(&row.amount).color(palette.muted_text));
                },
            );
        });
    }
}
