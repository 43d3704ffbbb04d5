//! Editable surfaces the widget can attach to

use std::collections::HashSet;

use crate::overlay::Anchor;

/// Stable handle for a surface; the widget never owns the surface itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u32);

/// A text input the mention widget can observe and edit
pub trait MentionSurface {
    fn id(&self) -> SurfaceId;

    /// Whether the surface carries the mention-enabled marker
    fn is_mention_enabled(&self) -> bool;

    /// Full text, lines joined with `\n`
    fn text(&self) -> String;

    /// Cursor as a character offset into [`MentionSurface::text`]
    fn cursor(&self) -> usize;

    /// Replace the whole text and put the cursor at `cursor` (characters)
    fn replace_text(&mut self, text: &str, cursor: usize);

    fn focus(&mut self);

    /// Where the surface is on screen
    fn anchor(&self) -> Anchor;
}

/// The set of surfaces the widget observes
#[derive(Debug, Clone, Default)]
pub struct SurfaceRegistry {
    observed: HashSet<SurfaceId>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe `surface` if it is mention-enabled; returns whether it is observed
    pub fn attach(&mut self, surface: &dyn MentionSurface) -> bool {
        if !surface.is_mention_enabled() {
            return false;
        }
        self.observed.insert(surface.id());
        true
    }

    pub fn detach(&mut self, id: SurfaceId) -> bool {
        self.observed.remove(&id)
    }

    pub fn is_observed(&self, id: SurfaceId) -> bool {
        self.observed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}
