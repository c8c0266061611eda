use eframe::egui::{Align, Layout, ProgressBar, RichText, Ui};

use crate::ui::palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SummaryViewModel {
    pub(crate) consumed: String,
    pub(crate) remaining: String,
    pub(crate) goal: String,
    pub(crate) bar_fraction: f32,
    pub(crate) caption: String,
}

pub(crate) fn show(ui: &mut Ui, vm: &SummaryViewModel) {
    let palette = Palette::from_visuals(ui.visuals());
    ui.group(|ui| {
        ui.columns(3, |columns| {
            let items = [
                ("Consumed", &vm.consumed),
                ("Remaining", &vm.remaining),
                ("Goal", &vm.goal),
            ];
            for (ui, (label, value)) in columns.iter_mut().zip(items) {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(label).color(palette.muted_text));
                    ui.label(RichText::new(value.as_str()).strong().size(18.0));
                });
            }
        });
        ui.add_space(6.0);

        ui.add(ProgressBar::new(vm.bar_fraction).fill(palette.accent));
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            ui.label(
                RichText::new(&vm.caption)
                    .small()
                    .color(palette.muted_text),
            );
        });
    });
}
