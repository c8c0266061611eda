//! Consumption tracking state for the Intake app.
//!
//! A [`ConsumptionTracker`] combines:
//!
//! - an [`EntryLedger`] holding logged entries and the running total,
//! - a [`GoalTracker`] deriving remaining amount and progress from the total,
//! - the add-entry [`EntryForm`], whose [`PendingEntryDraft`] collects a name,
//!   a serving size and a keypad-entered serving count.
//!
//! Each screen of the app owns one tracker built from a [`TrackerConfig`].
//!
//! # Add-entry workflow
//!
//! ```text
//! Closed --open--> Open(default draft) --edit--> Open(draft)
//! Open --cancel--> Closed                     (ledger unchanged)
//! Open --submit, blank name--> Open           (silently rejected)
//! Open --submit--> Closed                     (entry appended, draft reset)
//! ```

mod config;
mod draft;
mod goal;
mod ledger;
mod tracker;

pub use self::{
    config::{ConfigError, TrackerConfig},
    draft::{EntryForm, PendingEntryDraft},
    goal::{BarClamp, GoalTracker},
    ledger::{BlankNameError, EntryLedger},
    tracker::{ConsumptionTracker, SubmitError, TrackerSnapshot},
};
