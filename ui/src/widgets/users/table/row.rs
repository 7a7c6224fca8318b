//! Data rows of the users table.

use egui::Ui;
use roster_business::User;

use super::cells::{render_delete_cell, render_text_cell, render_thumbnail_cell};

/// Renders one user. Returns `true` if the row's delete button was clicked.
///
/// The actions cell is scoped by email so button ids follow the user, not the row index.
pub fn render_user_row(ui: &mut Ui, user: &User) -> bool {
    render_thumbnail_cell(ui, &user.picture.thumbnail);
    render_text_cell(ui, &user.name.first);
    render_text_cell(ui, &user.name.last);
    render_text_cell(ui, &user.location.country);
    let delete = ui.push_id(&user.email, render_delete_cell).inner;
    ui.end_row();

    delete
}
