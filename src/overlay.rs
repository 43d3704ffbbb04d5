//! Suggestion overlay
//!
//! The floating list of candidates shown below the surface being edited.
//! Its visibility, rows and highlighted row are driven entirely by the
//! coordinator; this module only keeps that state consistent and knows where
//! the list sits on screen.

mod escape;
mod markup;
mod overlay_render;
mod placement;

use std::ops::Range;

use ratatui::layout::Rect;

pub use escape::{display_safe, escape_html};
pub use markup::render_markup;
pub use overlay_render::render_overlay;
pub use placement::{Anchor, Placement, compute_placement};

use crate::config::OverlayConfig;
use crate::fetcher::Candidate;
use crate::widgets::popup;

/// Rows taken by the top and bottom border
pub const BORDER_ROWS: u16 = 2;

/// Smallest width or height that still shows a row inside the border
const MIN_DRAWN: u16 = BORDER_ROWS + 1;

/// Overlay visibility state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible {
        candidates: Vec<Candidate>,
        active_index: usize,
    },
}

/// The overlay element, created on first show and reused afterwards
#[derive(Debug, Clone)]
pub struct Overlay {
    state: OverlayState,
    config: OverlayConfig,
    /// Screen area of the list; `None` until the first show
    area: Option<Rect>,
    /// Screen the list is clipped to, when the host has reported one
    bounds: Option<Rect>,
    /// First candidate inside the visible window
    scroll_offset: usize,
    /// Query typed so far, used to highlight matching characters
    highlight: String,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            state: OverlayState::Hidden,
            config,
            area: None,
            bounds: None,
            scroll_offset: 0,
            highlight: String::new(),
        }
    }

    /// Show `candidates` below `anchor` with the first row active
    ///
    /// An empty list hides the overlay instead.
    pub fn show(&mut self, candidates: Vec<Candidate>, anchor: &Anchor) {
        if candidates.is_empty() {
            self.hide();
            return;
        }

        let placement = compute_placement(anchor, &self.config);
        let rows = candidates.len().min(self.max_visible()) as u16;
        self.area = Some(placement.to_rect(rows + BORDER_ROWS));
        self.scroll_offset = 0;
        self.state = OverlayState::Visible {
            candidates,
            active_index: 0,
        };
    }

    /// Hide the overlay and forget its rows
    ///
    /// The element itself is kept for the next show.
    pub fn hide(&mut self) {
        self.state = OverlayState::Hidden;
        self.scroll_offset = 0;
    }

    /// Highlight the row at `index`; out of range indices are ignored
    pub fn set_active(&mut self, index: usize) {
        if let OverlayState::Visible {
            candidates,
            active_index,
        } = &mut self.state
            && index < candidates.len()
        {
            *active_index = index;
            self.scroll_to(index);
        }
    }

    /// Move the highlight by `delta` rows, stopping at either end
    pub fn move_active(&mut self, delta: isize) {
        if let OverlayState::Visible {
            candidates,
            active_index,
        } = &self.state
        {
            let last = candidates.len() - 1;
            let target = active_index.saturating_add_signed(delta).min(last);
            self.set_active(target);
        }
    }

    pub fn set_highlight(&mut self, query: &str) {
        self.highlight = query.to_string();
    }

    pub fn highlight(&self) -> &str {
        &self.highlight
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, OverlayState::Visible { .. })
    }

    /// Whether the overlay element has ever been shown
    pub fn is_created(&self) -> bool {
        self.area.is_some()
    }

    pub fn candidates(&self) -> &[Candidate] {
        match &self.state {
            OverlayState::Visible { candidates, .. } => candidates,
            OverlayState::Hidden => &[],
        }
    }

    /// Highlighted row, 0 when hidden
    pub fn active_index(&self) -> usize {
        match &self.state {
            OverlayState::Visible { active_index, .. } => *active_index,
            OverlayState::Hidden => 0,
        }
    }

    pub fn active_candidate(&self) -> Option<&Candidate> {
        self.candidates().get(self.active_index())
    }

    /// Clip the list to `bounds` from now on
    ///
    /// Rows pushed off screen are no longer on the list, so the window and
    /// hit testing only cover what is actually drawn.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
        let active = self.active_index();
        self.scroll_to(active);
    }

    /// Screen area while visible and big enough to show a row
    pub fn area(&self) -> Option<Rect> {
        if !self.is_visible() {
            return None;
        }
        let area = self.area?;
        let area = match self.bounds {
            Some(bounds) => popup::clamp_to(area, bounds),
            None => area,
        };
        (area.width >= MIN_DRAWN && area.height >= MIN_DRAWN).then_some(area)
    }

    /// Indices of the candidates currently on screen
    pub fn visible_window(&self) -> Range<usize> {
        let len = self.candidates().len();
        let end = (self.scroll_offset + self.rows_on_screen()).min(len);
        self.scroll_offset.min(end)..end
    }

    /// Whether a screen cell lies on the visible overlay, borders included
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area()
            .is_some_and(|area| area.contains(ratatui::layout::Position::new(column, row)))
    }

    /// Candidate index under a screen cell, if that cell is on a row
    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.area()?;
        if !self.contains(column, row) || row <= area.y {
            return None;
        }
        let index = self.scroll_offset + (row - area.y - 1) as usize;
        self.visible_window().contains(&index).then_some(index)
    }

    fn max_visible(&self) -> usize {
        self.config.max_visible.max(1) as usize
    }

    /// Rows that fit inside the drawn area
    fn rows_on_screen(&self) -> usize {
        self.area()
            .map(|area| (area.height - BORDER_ROWS) as usize)
            .unwrap_or_else(|| self.max_visible())
    }

    fn scroll_to(&mut self, index: usize) {
        let max = self.rows_on_screen();
        if index < self.scroll_offset {
            self.scroll_offset = index;
        } else if index >= self.scroll_offset + max {
            self.scroll_offset = index + 1 - max;
        }
    }
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}
