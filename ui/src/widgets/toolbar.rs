//! Toolbar above the users table: row colors, country sort toggle, reset and the filter.

use egui::{TextEdit, Ui};
use roster_business::SortBy;

/// Something the user asked for from the toolbar this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarAction {
    ToggleColors,
    ToggleSortByCountry,
    Reset,
    /// The filter field changed; carries the full new text.
    Filter(String),
}

pub const COLOR_ROWS_LABEL: &str = "Color rows";
pub const SORT_BY_COUNTRY_LABEL: &str = "Sort by country";
pub const UNSORT_BY_COUNTRY_LABEL: &str = "Don't sort by country";
pub const RESET_LABEL: &str = "Reset state";
pub const FILTER_HINT: &str = "Filter by country";

/// Label of the sort toggle for the current criterion.
#[inline]
pub fn sort_toggle_label(sorting: SortBy) -> &'static str {
    if sorting == SortBy::Country {
        UNSORT_BY_COUNTRY_LABEL
    } else {
        SORT_BY_COUNTRY_LABEL
    }
}

/// Renders the toolbar. Returns this frame's actions in click order, with a filter edit last.
pub fn toolbar(ui: &mut Ui, sorting: SortBy, filter_draft: &mut String) -> Vec<ToolbarAction> {
    ui.horizontal(|ui| {
        let mut actions = Vec::new();

        if ui.button(COLOR_ROWS_LABEL).clicked() {
            actions.push(ToolbarAction::ToggleColors);
        }
        if ui.button(sort_toggle_label(sorting)).clicked() {
            actions.push(ToolbarAction::ToggleSortByCountry);
        }
        if ui.button(RESET_LABEL).clicked() {
            actions.push(ToolbarAction::Reset);
        }

        let filter = ui.add(
            TextEdit::singleline(filter_draft)
                .hint_text(FILTER_HINT)
                .desired_width(180.0),
        );
        if filter.changed() {
            actions.push(ToolbarAction::Filter(filter_draft.clone()));
        }

        actions
    })
    .inner
}
