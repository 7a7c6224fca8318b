//! Header row of the users table.

use egui::{Button, Ui};
use roster_business::SortBy;

use super::cells::{header_cell, header_text};
use super::columns::COLUMNS;

/// Renders the header row. Returns the criterion of the clicked sortable header, if any.
pub fn render_table_header(ui: &mut Ui) -> Option<SortBy> {
    let mut clicked = None;

    for column in COLUMNS {
        header_cell(ui, |ui| match column.sort {
            Some(sort) => {
                let response = ui
                    .add(Button::new(header_text(column.label)).frame(false))
                    .on_hover_text(format!("Sort by {}", column.label.to_lowercase()));
                if response.clicked() {
                    clicked = Some(sort);
                }
            }
            None => {
                ui.label(header_text(column.label));
            }
        });
    }
    ui.end_row();

    clicked
}
