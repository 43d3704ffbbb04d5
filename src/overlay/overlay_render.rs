//! Overlay rendering
//!
//! Draws the suggestion list as a bordered popup at the overlay's placement.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthChar;

use super::{Overlay, display_safe};
use crate::widgets::popup;

const ACTIVE_MARKER: &str = "► ";
const INACTIVE_MARKER: &str = "  ";
const MARKER_WIDTH: usize = 2;

/// Render the overlay if it is visible
pub fn render_overlay(overlay: &Overlay, frame: &mut Frame) {
    let Some(area) = overlay.area() else {
        return;
    };
    let popup_area = popup::clamp_to(area, frame.area());
    if popup_area.width < 3 || popup_area.height < 3 {
        return;
    }

    // Inner width minus borders and the row marker
    let text_width = (popup_area.width as usize).saturating_sub(2 + MARKER_WIDTH);
    let matcher = SkimMatcherV2::default();
    let active = overlay.active_index();
    let candidates = overlay.candidates();

    let items: Vec<ListItem> = overlay
        .visible_window()
        .map(|i| {
            let name = truncate_to_width(&display_safe(&candidates[i].name), text_width);
            let matched = match_positions(&matcher, &name, overlay.highlight());
            ListItem::new(row_line(&name, &matched, i == active))
        })
        .collect();

    popup::clear_area(frame, popup_area);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Mention ")
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
}

fn row_line(name: &str, matched: &[usize], active: bool) -> Line<'static> {
    let (marker, base) = if active {
        (
            ACTIVE_MARKER,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (INACTIVE_MARKER, Style::default().fg(Color::White).bg(Color::Black))
    };
    let hit = if active {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(marker.to_string(), base)];
    for (i, ch) in name.chars().enumerate() {
        let style = if matched.contains(&i) { hit } else { base };
        spans.push(Span::styled(ch.to_string(), style));
    }
    Line::from(spans)
}

/// Character positions of `query` inside `name`, empty when nothing matches
fn match_positions(matcher: &SkimMatcherV2, name: &str, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return Vec::new();
    }
    matcher
        .fuzzy_indices(name, query)
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}

/// Cut `text` so it fits in `max_width` terminal columns
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "overlay_render_tests.rs"]
mod overlay_render_tests;
