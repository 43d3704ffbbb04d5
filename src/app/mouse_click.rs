//! Mouse click handling
//!
//! Handles click events to move focus between the composer fields.

use super::state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::TaskField) => click_field(app, Focus::Task),
        Some(Region::StatusField) => click_field(app, Focus::Status),
        // Feed is read-only
        _ => {}
    }
}

fn click_field(app: &mut App, focus: Focus) {
    if app.focus() != focus {
        app.set_focus(focus);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
