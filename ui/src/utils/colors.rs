//! Shared color constants for the UI.

use egui::{Color32, Style};

/// Border color for the users table (subtle gray).
pub const TABLE_BORDER_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

/// Header background of the users table.
pub const HEADER_BG_COLOR: Color32 = Color32::from_rgb(245, 245, 245);

/// Header text, dark enough to read on `HEADER_BG_COLOR` in both themes.
pub const HEADER_TEXT_COLOR: Color32 = Color32::from_rgb(40, 40, 40);

/// Even data rows when row coloring is on.
pub const ROW_EVEN_COLOR: Color32 = Color32::from_rgba_premultiplied(62, 152, 199, 90);

/// Odd data rows when row coloring is on.
pub const ROW_ODD_COLOR: Color32 = Color32::from_rgba_premultiplied(136, 201, 234, 90);

/// Grid row color for the colored style. Row 0 is the header and keeps its own fill.
pub fn colored_row(row: usize, _style: &Style) -> Option<Color32> {
    match row {
        0 => None,
        row if row % 2 == 1 => Some(ROW_EVEN_COLOR),
        _ => Some(ROW_ODD_COLOR),
    }
}
