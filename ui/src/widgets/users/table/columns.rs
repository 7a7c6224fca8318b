//! Column definitions for the users table.

use roster_business::SortBy;

pub const NUM_COLUMNS: usize = 5;
pub const THUMBNAIL_SIZE: f32 = 36.0;
pub const MIN_COL_WIDTH: f32 = 60.0;
pub const COLUMN_SPACING: f32 = 16.0;

/// One column of the users table. `sort` is set for the clickable headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserColumn {
    pub label: &'static str,
    pub sort: Option<SortBy>,
}

/// Columns in display order.
pub const COLUMNS: [UserColumn; NUM_COLUMNS] = [
    UserColumn {
        label: "Photo",
        sort: None,
    },
    UserColumn {
        label: "First name",
        sort: Some(SortBy::Name),
    },
    UserColumn {
        label: "Last name",
        sort: Some(SortBy::Last),
    },
    UserColumn {
        label: "Country",
        sort: Some(SortBy::Country),
    },
    UserColumn {
        label: "Actions",
        sort: None,
    },
];
