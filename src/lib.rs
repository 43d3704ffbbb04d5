//! `@mention` autocomplete for text inputs
//!
//! Typing `@` in a mention-enabled surface starts a lookup; the matching
//! candidates appear in an overlay below the surface and the chosen one is
//! written back into the text as `@"<name>" `.
//!
//! - [`trigger`] decides whether a mention is being typed
//! - [`fetcher`] runs lookups off the UI thread
//! - [`overlay`] holds the suggestion list and its geometry
//! - [`coordinator`] wires events from surfaces to the other three

pub mod app;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod fetcher;
pub mod layout;
pub mod overlay;
pub mod trigger;
pub mod widgets;


pub use coordinator::{MentionSurface, MentionWidget, SurfaceId};
pub use error::AtMentionError;
pub use fetcher::{Candidate, CandidateSource, HttpLookup, SuggestionFetcher};
pub use overlay::Overlay;
