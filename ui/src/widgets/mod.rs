mod toolbar;
mod users;

pub use toolbar::{
    COLOR_ROWS_LABEL, FILTER_HINT, RESET_LABEL, SORT_BY_COUNTRY_LABEL, ToolbarAction,
    UNSORT_BY_COUNTRY_LABEL, sort_toggle_label, toolbar,
};
pub use users::{DELETE_LABEL, LOADING_LABEL, status_line, users_panel, users_table};
