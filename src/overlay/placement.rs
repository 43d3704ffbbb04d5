//! Overlay placement
//!
//! Pure geometry: where the overlay goes for a given anchor. Kept apart from
//! rendering so it can be checked without a terminal.

use ratatui::layout::Rect;

use crate::config::OverlayConfig;

/// The on-screen geometry of the surface the overlay belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub rect: Rect,
    /// Text line height reported by the surface, if it knows one
    pub line_height: Option<u16>,
    /// Vertical scroll of the host view
    pub scroll_y: u16,
}

impl Anchor {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            line_height: None,
            scroll_y: 0,
        }
    }
}

/// Top-left corner and width of the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub top: u16,
    pub left: u16,
    pub width: u16,
}

impl Placement {
    pub fn to_rect(self, height: u16) -> Rect {
        Rect {
            x: self.left,
            y: self.top,
            width: self.width,
            height,
        }
    }
}

/// Place the overlay one text line plus padding below the anchor's top edge,
/// left-aligned with it and at least `min_width` wide
pub fn compute_placement(anchor: &Anchor, config: &OverlayConfig) -> Placement {
    let line_height = anchor
        .line_height
        .filter(|&h| h > 0)
        .unwrap_or(config.line_height);

    Placement {
        top: anchor
            .rect
            .y
            .saturating_add(anchor.scroll_y)
            .saturating_add(line_height)
            .saturating_add(config.padding),
        left: anchor.rect.x,
        width: anchor.rect.width.max(config.min_width),
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod placement_tests;
