//! Panel layout: sizes the HUD from text and content metrics and places it in
//! the viewport.
//!
//! All functions here are pure so the geometry can be tested without an egui
//! context. Positions are in logical points; the panel is centered
//! horizontally and sits at 45% of the keyboard-adjusted visible height.

use egui::{Pos2, Rect, Vec2};

pub(crate) const HORIZONTAL_SPACING: f32 = 12.0;
pub(crate) const VERTICAL_SPACING: f32 = 12.0;
pub(crate) const LABEL_SPACING: f32 = 8.0;

/// Resolved geometry for one frame, all in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct HudLayout {
    pub panel_rect: Rect,
    /// Center of the spinner / ring / icon
    pub content_center: Pos2,
    /// Center of the status label
    pub label_center: Pos2,
}

/// Panel size from label and content extents, clamped to the minimum size.
pub(crate) fn panel_size(
    label_size: Vec2,
    content_size: Vec2,
    has_label: bool,
    has_content: bool,
    minimum_size: Vec2,
) -> Vec2 {
    let width = HORIZONTAL_SPACING + label_size.x.max(content_size.x) + HORIZONTAL_SPACING;
    let mut height = VERTICAL_SPACING + label_size.y + content_size.y + VERTICAL_SPACING;
    if has_label && has_content {
        height += LABEL_SPACING;
    }
    Vec2::new(width.max(minimum_size.x), height.max(minimum_size.y))
}

/// Where the panel center goes: horizontally centered, 45% down the visible
/// height after subtracting keyboard occlusion, plus the configured offset.
pub(crate) fn panel_center(viewport: Rect, keyboard_height: f32, offset: Vec2) -> Pos2 {
    let active_height = viewport.height() - keyboard_height;
    Pos2::new(
        viewport.center().x + offset.x,
        viewport.min.y + (active_height * 0.45).floor() + offset.y,
    )
}

/// Positions content and label inside a panel of `size` centered at `center`.
pub(crate) fn resolve(
    center: Pos2,
    size: Vec2,
    label_size: Vec2,
    content_size: Vec2,
    has_label: bool,
    has_content: bool,
    minimum_size: Vec2,
) -> HudLayout {
    let panel_rect = Rect::from_center_size(center, size);

    // Content sits above the label, or alone in the middle
    let content_y = if has_label {
        let y_offset = VERTICAL_SPACING.max(
            (minimum_size.y - content_size.y - LABEL_SPACING - label_size.y) / 2.0,
        );
        panel_rect.min.y + y_offset + content_size.y / 2.0
    } else {
        panel_rect.center().y
    };
    let content_center = Pos2::new(panel_rect.center().x, content_y);

    let label_y = if has_content {
        content_center.y + content_size.y / 2.0 + LABEL_SPACING + label_size.y / 2.0
    } else {
        panel_rect.center().y
    };
    let label_center = Pos2::new(panel_rect.center().x, label_y);

    HudLayout {
        panel_rect,
        content_center,
        label_center,
    }
}
