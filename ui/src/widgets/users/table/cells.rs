//! Cell helpers for the users table.

use egui::{Frame, Image, InnerResponse, Margin, RichText, Ui, vec2};

use super::columns::THUMBNAIL_SIZE;
use crate::utils::colors::{HEADER_BG_COLOR, HEADER_TEXT_COLOR};

/// Label of the per-row delete button.
pub const DELETE_LABEL: &str = "Delete";

/// Header cell with background.
pub fn header_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding.
pub fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Header text, bold and readable on the header fill.
#[inline]
pub fn header_text(label: &str) -> RichText {
    RichText::new(label).strong().color(HEADER_TEXT_COLOR)
}

/// Renders the thumbnail, or a placeholder when the user has none.
#[inline]
pub fn render_thumbnail_cell(ui: &mut Ui, thumbnail: &str) {
    data_cell(ui, |ui| {
        if thumbnail.is_empty() {
            ui.label("-");
        } else {
            ui.add(
                Image::new(thumbnail)
                    .fit_to_exact_size(vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE))
                    .corner_radius(4),
            );
        }
    });
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    data_cell(ui, |ui| {
        ui.label(text);
    });
}

/// Renders the delete button. Returns `true` if it was clicked.
#[inline]
pub fn render_delete_cell(ui: &mut Ui) -> bool {
    data_cell(ui, |ui| ui.button(DELETE_LABEL).clicked()).inner
}
