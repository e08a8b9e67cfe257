//! Stacking rules for toasts on screen.
//!
//! Given display-ordered ids and an anchor position, computes one rectangle
//! per toast. The first id sits closest to the anchor edge; top anchors grow
//! downward and bottom anchors grow upward. Toasts that no longer fit inside
//! the area are left out.

use ratatui::layout::Rect;

use crate::config::{HorizontalAnchor, ToastPosition};
use crate::toast::ToastId;

/// Toast box dimensions and spacing, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementStyle {
    pub width: u16,
    pub height: u16,
    /// Space between stacked toasts
    pub gap: u16,
    /// Distance from the area edges
    pub margin: u16,
}

impl Default for PlacementStyle {
    fn default() -> Self {
        Self {
            width: 32,
            height: 3,
            gap: 1,
            margin: 2,
        }
    }
}

pub fn stack(
    ids: &[ToastId],
    position: ToastPosition,
    area: Rect,
    style: PlacementStyle,
) -> Vec<(ToastId, Rect)> {
    let width = style.width.min(area.width);
    let height = style.height.min(area.height);
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let x = match position.horizontal() {
        HorizontalAnchor::Left => area.left().saturating_add(style.margin),
        HorizontalAnchor::Right => area
            .right()
            .saturating_sub(width.saturating_add(style.margin))
            .max(area.left()),
        HorizontalAnchor::Center => area.left() + (area.width - width) / 2,
    };
    let x = x.min(area.right() - width);

    let mut placed = Vec::with_capacity(ids.len());
    for (index, &id) in ids.iter().enumerate() {
        let Some(y) = slot_y(position, area, height, index, style) else {
            break;
        };
        placed.push((id, Rect::new(x, y, width, height)));
    }
    placed
}

/// Top edge of the `index`th slot, or `None` once the stack runs out of room
fn slot_y(
    position: ToastPosition,
    area: Rect,
    height: u16,
    index: usize,
    style: PlacementStyle,
) -> Option<u16> {
    let index = u16::try_from(index).ok()?;
    let offset = index.checked_mul(height.checked_add(style.gap)?)?;
    let reach = style.margin.checked_add(offset)?.checked_add(height)?;
    if reach > area.height {
        return None;
    }

    if position.is_bottom() {
        Some(area.bottom() - reach)
    } else {
        Some(area.top() + style.margin + offset)
    }
}
