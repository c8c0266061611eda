//! Shared library module for the Intake app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod action;
mod app;
mod state;
mod ui;
pub mod version;
mod view_model_builder;

pub use self::app::IntakeApp;
