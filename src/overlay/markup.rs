//! HTML rendering of the overlay rows, for hosts that draw into a web page

use super::{Overlay, escape_html};

/// Render the visible overlay as one `div` per candidate
///
/// Returns an empty string while the overlay is hidden.
pub fn render_markup(overlay: &Overlay) -> String {
    let active = overlay.active_index();
    overlay
        .candidates()
        .iter()
        .enumerate()
        .map(|(i, candidate)| {
            let class = if i == active {
                "mention-item active"
            } else {
                "mention-item"
            };
            format!(
                "<div class=\"{}\" data-index=\"{}\"><strong>{}</strong></div>",
                class,
                i,
                escape_html(&candidate.name)
            )
        })
        .collect()
}
