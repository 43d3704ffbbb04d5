//! Input coordination
//!
//! [`MentionWidget`] is the attached behavior: it watches input, key and
//! pointer events from registered surfaces, runs trigger detection, issues
//! lookups, drives the overlay and splices the chosen mention into the text.
//!
//! One widget owns one cycle at a time. A cycle starts when an `@` context is
//! detected and ends on selection, Escape, an empty or failed lookup, a click
//! outside the overlay, or when the cursor leaves the mention.

mod surface;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;

pub use surface::{MentionSurface, SurfaceId, SurfaceRegistry};

use crate::config::OverlayConfig;
use crate::fetcher::{FetchResponse, SuggestionFetcher};
use crate::overlay::{Anchor, Overlay};
use crate::trigger::{self, format_mention};

/// State of the mention being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionCycle {
    pub surface: SurfaceId,
    /// Character offset of the `@`
    pub mention_start: usize,
    pub query: String,
    /// Lookup whose answer may still be shown; older answers are stale
    pub request_id: Option<u64>,
    pub anchor: Anchor,
}

/// The mention autocomplete behavior for a set of surfaces
pub struct MentionWidget {
    registry: SurfaceRegistry,
    active_surface: Option<SurfaceId>,
    cycle: Option<MentionCycle>,
    overlay: Overlay,
    fetcher: SuggestionFetcher,
}

impl MentionWidget {
    pub fn new(fetcher: SuggestionFetcher, config: OverlayConfig) -> Self {
        Self {
            registry: SurfaceRegistry::new(),
            active_surface: None,
            cycle: None,
            overlay: Overlay::new(config),
            fetcher,
        }
    }

    /// Start observing `surface` if it is mention-enabled
    pub fn attach(&mut self, surface: &dyn MentionSurface) -> bool {
        self.registry.attach(surface)
    }

    /// Stop observing a surface, ending its cycle if it has one
    pub fn detach(&mut self, id: SurfaceId) {
        self.registry.detach(id);
        if self.cycle.as_ref().is_some_and(|c| c.surface == id) {
            self.dismiss();
        }
        if self.active_surface == Some(id) {
            self.active_surface = None;
        }
    }

    /// Text changed in `surface`
    pub fn handle_input(&mut self, surface: &dyn MentionSurface) {
        let id = surface.id();
        if !self.registry.is_observed(id) {
            return;
        }
        self.active_surface = Some(id);

        let Some(context) = trigger::detect(&surface.text(), surface.cursor()) else {
            self.dismiss();
            return;
        };

        // Rows listed for an earlier '@' must not be picked for this one
        if self
            .cycle
            .as_ref()
            .is_some_and(|c| c.surface != id || c.mention_start != context.start)
        {
            self.overlay.hide();
        }

        let request_id = self.fetcher.fetch(&context.query);
        if request_id.is_none() {
            // Nothing will ever answer; same as a failed lookup
            self.dismiss();
            return;
        }

        self.cycle = Some(MentionCycle {
            surface: id,
            mention_start: context.start,
            query: context.query,
            request_id,
            anchor: surface.anchor(),
        });
    }

    /// Key pressed in `surface`
    ///
    /// Returns `true` when the key was consumed and must not reach the
    /// surface (caret movement, newline, focus change).
    pub fn handle_key(&mut self, surface: &mut dyn MentionSurface, key: KeyEvent) -> bool {
        if self.overlay.area().is_none() || !self.is_cycle_surface(surface.id()) {
            return false;
        }

        match key.code {
            KeyCode::Down => {
                self.overlay.move_active(1);
                true
            }
            KeyCode::Up => {
                self.overlay.move_active(-1);
                true
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab
                if !self.overlay.candidates().is_empty() =>
            {
                let index = self.overlay.active_index();
                self.select(surface, index)
            }
            KeyCode::Esc => {
                self.dismiss();
                false
            }
            _ => false,
        }
    }

    /// Pointer pressed at a screen cell
    ///
    /// Selects the row under the pointer and returns `true`, in which case the
    /// host must not move focus away from `surface`.
    pub fn handle_pointer_down(
        &mut self,
        surface: &mut dyn MentionSurface,
        column: u16,
        row: u16,
    ) -> bool {
        let Some(index) = self.overlay.row_at(column, row) else {
            return false;
        };
        self.select(surface, index)
    }

    /// Click anywhere on screen; outside the overlay ends the cycle
    pub fn handle_click(&mut self, column: u16, row: u16) {
        if !self.overlay.contains(column, row) {
            self.dismiss();
        }
    }

    /// Apply every lookup answer that has arrived
    ///
    /// Returns whether the overlay may have changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for response in self.fetcher.poll() {
            changed |= self.apply_response(response);
        }
        changed
    }

    /// Apply one lookup answer if it belongs to the live cycle
    pub fn apply_response(&mut self, response: FetchResponse) -> bool {
        let Some(cycle) = &self.cycle else {
            log::debug!("Dropping lookup {}: no active mention", response.request_id);
            return false;
        };
        if cycle.request_id != Some(response.request_id) {
            log::debug!(
                "Dropping stale lookup {} (waiting for {:?})",
                response.request_id,
                cycle.request_id
            );
            return false;
        }

        let anchor = cycle.anchor;
        let query = cycle.query.clone();
        match response.result {
            Ok(candidates) if !candidates.is_empty() => {
                self.overlay.set_highlight(&query);
                self.overlay.show(candidates, &anchor);
            }
            Ok(_) => self.dismiss(),
            Err(e) => {
                log::debug!("Lookup for {:?} failed: {}", query, e);
                self.dismiss();
            }
        }
        true
    }

    /// Replace the typed mention with candidate `index`
    ///
    /// Writes `@"<name>" ` over the text from the `@` to the cursor, puts the
    /// cursor after it, focuses the surface and ends the cycle. Does nothing
    /// without a cycle on `surface` or for an index out of range.
    pub fn select(&mut self, surface: &mut dyn MentionSurface, index: usize) -> bool {
        let Some(mention_start) = self
            .cycle
            .as_ref()
            .filter(|c| c.surface == surface.id())
            .map(|c| c.mention_start)
        else {
            return false;
        };
        let Some(candidate) = self.overlay.candidates().get(index) else {
            return false;
        };

        let insert = format_mention(&candidate.name);
        let text = surface.text();
        // A cursor left of the '@' would duplicate text; splice from the '@' instead
        let cursor = surface.cursor().max(mention_start);

        let before: String = text.chars().take(mention_start).collect();
        let after: String = text.chars().skip(cursor).collect();
        let new_cursor = before.chars().count() + insert.chars().count();

        surface.replace_text(&format!("{}{}{}", before, insert, after), new_cursor);
        surface.focus();
        self.dismiss();
        true
    }

    /// End the current cycle and hide the overlay
    pub fn dismiss(&mut self) {
        self.overlay.hide();
        self.cycle = None;
    }

    /// Screen the overlay has to fit on
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.overlay.set_bounds(bounds);
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn cycle(&self) -> Option<&MentionCycle> {
        self.cycle.as_ref()
    }

    /// Offset of the `@` of the live mention
    pub fn mention_start(&self) -> Option<usize> {
        self.cycle.as_ref().map(|c| c.mention_start)
    }

    /// Surface that last received input
    pub fn active_surface(&self) -> Option<SurfaceId> {
        self.active_surface
    }

    pub fn registry(&self) -> &SurfaceRegistry {
        &self.registry
    }

    fn is_cycle_surface(&self, id: SurfaceId) -> bool {
        self.registry.is_observed(id) && self.cycle.as_ref().is_some_and(|c| c.surface == id)
    }
}
