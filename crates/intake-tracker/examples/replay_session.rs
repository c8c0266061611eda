//! Replays one add-entry session against a tracker preset and prints the summary.
//!
//! # Usage
//!
//! Add two medium servings of toast to the calorie tracker (`<` deletes the
//! initial `1` before typing `2`):
//!
//! ```sh
//! cargo run -p intake-tracker --example replay_session -- --name Toast --size Medium --keys "<2"
//! ```
//!
//! Add juice to the sugar tracker:
//!
//! ```sh
//! cargo run -p intake-tracker --example replay_session -- --tracker sugar --name Juice --keys "<3"
//! ```
//!
//! Key presses are digits `0`-`9` and `<` for delete. Other characters are rejected.

use std::process;

use clap::{Parser, ValueEnum};
use intake_core::KeypadDigit;
use intake_tracker::{ConsumptionTracker, SubmitError, TrackerConfig, TrackerSnapshot};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TrackerKind {
    Calories,
    Sugar,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Tracker preset to replay against.
    #[arg(long, value_name = "KIND", default_value = "calories")]
    tracker: TrackerKind,

    /// Name of the new entry.
    #[arg(long, default_value = "")]
    name: String,

    /// Serving size label (Small, Medium or Large).
    #[arg(long, value_name = "LABEL", default_value = "Small")]
    size: String,

    /// Keypad presses: digits, or `<` for delete.
    #[arg(long, value_name = "KEYS", default_value = "")]
    keys: String,
}

enum KeyPress {
    Digit(KeypadDigit),
    Delete,
}

fn parse_keys(keys: &str) -> Result<Vec<KeyPress>, char> {
    keys.chars()
        .map(|c| match c {
            '<' => Ok(KeyPress::Delete),
            _ => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(KeypadDigit::try_from_value)
                .map(KeyPress::Digit)
                .ok_or(c),
        })
        .collect()
}

fn print_summary(snapshot: &TrackerSnapshot<'_>) {
    let unit = snapshot.unit;
    println!(
        "Consumed: {} {unit}  Remaining: {} {unit}  Goal: {} {unit}",
        snapshot.running_total, snapshot.remaining, snapshot.goal
    );
    println!(
        "{}% of daily goal (bar {:.2})",
        snapshot.percentage_text, snapshot.bar_fraction
    );
    for entry in snapshot.entries {
        println!("  {:<20} {:>6} {unit}", entry.name(), entry.amount());
    }
}

fn main() {
    let args = Args::parse();
    let config = match args.tracker {
        TrackerKind::Calories => TrackerConfig::calories(),
        TrackerKind::Sugar => TrackerConfig::sugar(),
    };
    let mut tracker = match ConsumptionTracker::new(config) {
        Ok(tracker) => tracker,
        Err(e) => {
            eprintln!("invalid tracker configuration: {e}");
            process::exit(1);
        }
    };

    let presses = match parse_keys(&args.keys) {
        Ok(presses) => presses,
        Err(c) => {
            eprintln!("unsupported key: {c:?}");
            process::exit(2);
        }
    };

    tracker.open_entry_form();
    tracker.set_name(args.name);
    if let Err(e) = tracker.select_size(&args.size) {
        eprintln!("{e}");
        process::exit(2);
    }
    for press in presses {
        match press {
            KeyPress::Digit(digit) => tracker.press_digit(digit),
            KeyPress::Delete => tracker.press_delete(),
        }
    }

    match tracker.submit_entry() {
        Ok(entry) => println!("Added {} ({} {})", entry.name(), entry.amount(), tracker.unit()),
        Err(SubmitError::BlankName) => println!("Name is blank; nothing added."),
        Err(SubmitError::FormClosed) => unreachable!("form was opened above"),
    }
    println!();
    print_summary(&tracker.snapshot());
}
