//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where each component was last rendered, and
//! `region_at()` says which component is at a given screen position.

use ratatui::layout::{Position, Rect};

/// Clickable UI components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    TaskField,
    StatusField,
    Feed,
}

/// Screen areas of the components from the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub task_field: Option<Rect>,
    pub status_field: Option<Rect>,
    pub feed: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Component under the cell at (`column`, `row`)
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    [
        (regions.task_field, Region::TaskField),
        (regions.status_field, Region::StatusField),
        (regions.feed, Region::Feed),
    ]
    .into_iter()
    .find_map(|(area, region)| area.filter(|a| a.contains(position)).map(|_| region))
}
