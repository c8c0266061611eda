use eframe::egui::{Button, RichText, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    state::ScreenId,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavTab {
    pub(crate) screen: ScreenId,
    pub(crate) label: &'static str,
    pub(crate) selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NavBarViewModel {
    pub(crate) tabs: Vec<NavTab>,
}

pub(crate) fn show(ui: &mut Ui, vm: &NavBarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.columns(vm.tabs.len(), |columns| {
        for (ui, tab) in columns.iter_mut().zip(&vm.tabs) {
            ui.vertical_centered_justified(|ui| {
                let button = Button::new(RichText::new(tab.label).strong())
                    .selected(tab.selected)
                    .min_size(Vec2::new(0.0, 36.0));
                if ui.add(button).clicked() && !tab.selected {
                    action_queue.request(Action::SelectScreen(tab.screen));
                }
            });
        }
    });
}
