use intake_core::{ServingSize, Unit};
use intake_tracker::TrackerSnapshot;

use crate::{
    state::{AppState, ScreenId},
    ui::{
        entry_form::{EntryFormViewModel, SizeOption},
        entry_list::{EntryListViewModel, EntryRow},
        nav_bar::{NavBarViewModel, NavTab},
        screen::ScreenViewModel,
        summary_card::SummaryViewModel,
    },
};

struct ScreenText {
    title: &'static str,
    list_heading: &'static str,
    add_label: &'static str,
    name_placeholder: &'static str,
    submit_label: &'static str,
}

impl ScreenId {
    fn text(self) -> ScreenText {
        match self {
            ScreenId::Calories => ScreenText {
                title: "Calories",
                list_heading: "Today's Meals",
                add_label: "Add calories",
                name_placeholder: "e.g. Macaroni and Cheese",
                submit_label: "Calculate calories",
            },
            ScreenId::Sugar => ScreenText {
                title: "Sugar Intake",
                list_heading: "Today's Foods",
                add_label: "Add food",
                name_placeholder: "e.g. Chocolate Bar",
                submit_label: "Add Sugar",
            },
        }
    }
}

// Summary figures carry a glued suffix for grams ("55g") and none for kcal.
fn summary_value(value: impl std::fmt::Display, unit: Unit) -> String {
    match unit {
        Unit::Kilocalories => value.to_string(),
        Unit::Grams => format!("{value}{}", unit.symbol()),
    }
}

#[must_use]
pub(crate) fn build_summary_vm(snapshot: &TrackerSnapshot<'_>) -> SummaryViewModel {
    #[expect(clippy::cast_possible_truncation)]
    let bar_fraction = snapshot.bar_fraction as f32;
    SummaryViewModel {
        consumed: summary_value(snapshot.running_total, snapshot.unit),
        remaining: summary_value(snapshot.remaining, snapshot.unit),
        goal: summary_value(snapshot.goal, snapshot.unit),
        bar_fraction,
        caption: format!("{}% of daily goal", snapshot.percentage_text),
    }
}

#[must_use]
pub(crate) fn build_entry_list_vm<'a>(
    screen: ScreenId,
    snapshot: &TrackerSnapshot<'a>,
) -> EntryListViewModel<'a> {
    let unit = snapshot.unit;
    EntryListViewModel {
        heading: screen.text().list_heading,
        rows: snapshot
            .entries
            .iter()
            .map(|entry| EntryRow {
                name: entry.name(),
                amount: format!("{} {unit}", entry.amount()),
            })
            .collect(),
    }
}

#[must_use]
pub(crate) fn build_screen_vm(app_state: &AppState) -> ScreenViewModel<'_> {
    let screen = app_state.active_screen;
    let snapshot = app_state.active_tracker().snapshot();
    let text = screen.text();
    ScreenViewModel {
        title: text.title,
        summary: build_summary_vm(&snapshot),
        entries: build_entry_list_vm(screen, &snapshot),
        add_label: text.add_label,
    }
}

#[must_use]
pub(crate) fn build_nav_bar_vm(app_state: &AppState) -> NavBarViewModel {
    NavBarViewModel {
        tabs: ScreenId::ALL
            .into_iter()
            .map(|screen| NavTab {
                screen,
                label: screen.text().title,
                selected: screen == app_state.active_screen,
            })
            .collect(),
    }
}

#[must_use]
pub(crate) fn build_entry_form_vm(app_state: &AppState) -> Option<EntryFormViewModel<'_>> {
    let screen = app_state.active_screen;
    let draft = app_state.active_tracker().form().draft()?;
    let text = screen.text();
    Some(EntryFormViewModel {
        name: draft.name(),
        name_placeholder: text.name_placeholder,
        sizes: ServingSize::ALL
            .into_iter()
            .map(|size| SizeOption {
                size,
                selected: size == draft.selected_size(),
            })
            .collect(),
        serving_count: draft.serving_count().to_string(),
        submit_label: text.submit_label,
    })
}
