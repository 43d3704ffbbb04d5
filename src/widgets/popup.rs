use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Shrink `area` so it lies within `bounds`, keeping its top-left corner
///
/// An area starting outside `bounds` collapses to zero size.
pub fn clamp_to(area: Rect, bounds: Rect) -> Rect {
    let x = area.x.max(bounds.x);
    let y = area.y.max(bounds.y);
    let right = area.right().min(bounds.right());
    let bottom = area.bottom().min(bounds.bottom());

    Rect {
        x,
        y,
        width: right.saturating_sub(x),
        height: bottom.saturating_sub(y),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
