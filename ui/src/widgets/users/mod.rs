//! Users panel: status line, loading indicator and the users table.

pub mod table;

use egui::{Frame, Grid, Margin, ScrollArea, Stroke, Ui};
use roster_business::{LoadUsersCompute, User, UserListActions, UserListIntent};
use roster_states::StateCtx;
use ustr::Ustr;

use crate::utils::colors::{TABLE_BORDER_COLOR, colored_row};
use table::columns::{COLUMN_SPACING, MIN_COL_WIDTH, NUM_COLUMNS};
use table::header::render_table_header;
use table::row::render_user_row;

pub use table::DELETE_LABEL;

/// Shown next to the spinner while the initial fetch is in flight.
pub const LOADING_LABEL: &str = "Loading users...";

/// "Showing N of M users".
#[inline]
pub fn status_line(visible: usize, total: usize) -> String {
    format!("Showing {visible} of {total} users")
}

/// Renders the rows in the given order.
///
/// Pure: reads nothing but its arguments and returns at most one intent per frame.
/// `show_colors` only switches the row style.
pub fn users_table(ui: &mut Ui, users: &[User], show_colors: bool) -> Option<UserListIntent> {
    let mut intent = None;

    Frame::NONE
        .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
        .inner_margin(Margin::ZERO)
        .show(ui, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let mut grid = Grid::new("users_table")
                    .num_columns(NUM_COLUMNS)
                    .spacing([COLUMN_SPACING, 0.0])
                    .min_col_width(MIN_COL_WIDTH);
                if show_colors {
                    grid = grid.with_row_color(colored_row);
                }

                grid.show(ui, |ui| {
                    if let Some(sort) = render_table_header(ui) {
                        intent = Some(UserListIntent::Sort(sort));
                    }
                    for user in users {
                        if render_user_row(ui, user) {
                            let email = Ustr::from(user.email.as_str());
                            intent = Some(UserListIntent::Delete(email));
                        }
                    }
                });
            });
        });

    intent
}

/// Status line, loading indicator and table for the context's current view.
pub fn users_panel(state_ctx: &StateCtx, ui: &mut Ui) -> Option<UserListIntent> {
    let list = state_ctx.user_list();
    let visible = state_ctx.visible_users();

    ui.horizontal(|ui| {
        ui.label(status_line(visible.len(), list.users().len()));
        if state_ctx
            .cached::<LoadUsersCompute>()
            .is_some_and(LoadUsersCompute::is_pending)
        {
            ui.spinner();
            ui.label(LOADING_LABEL);
        }
    });
    ui.add_space(8.0);

    users_table(ui, visible, list.show_colors())
}
