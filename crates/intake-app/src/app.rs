//! Intake application shell.
//!
//! # Design Notes
//! - Two tracker screens (calories, sugar) switched from a bottom navigation bar.
//! - Each frame collects user intents into an [`ActionRequestQueue`] and drains it
//!   through a single handler, so every action is applied before the next.
//! - The entry form is a modal; while it is open, number keys, Backspace and Enter
//!   drive the keypad unless a text field has focus.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, Theme, TopBottomPanel},
};
use intake_tracker::ConfigError;

use crate::{
    action::{self, ActionRequestQueue},
    state::AppState,
    ui, view_model_builder,
};

#[derive(Debug)]
pub struct IntakeApp {
    app_state: AppState,
}

impl IntakeApp {
    pub fn new(cc: &CreationContext<'_>) -> Result<Self, ConfigError> {
        cc.egui_ctx.set_theme(Theme::Light);
        let app_state = AppState::new()?;
        Ok(Self { app_state })
    }
}

impl App for IntakeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        if self.app_state.active_tracker().form().is_open() && !ctx.wants_keyboard_input() {
            ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
            action::handler::handle_all(&mut self.app_state, &mut action_queue);
        }

        let nav_bar_vm = view_model_builder::build_nav_bar_vm(&self.app_state);
        TopBottomPanel::bottom("nav_bar").show(ctx, |ui| {
            ui::nav_bar::show(ui, &nav_bar_vm, &mut action_queue);
        });

        let screen_vm = view_model_builder::build_screen_vm(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::screen::show(ui, &screen_vm, &mut action_queue);
        });

        if let Some(entry_form_vm) = view_model_builder::build_entry_form_vm(&self.app_state) {
            ui::entry_form::show(ctx, &entry_form_vm, &mut action_queue);
        }

        action::handler::handle_all(&mut self.app_state, &mut action_queue);
    }
}
