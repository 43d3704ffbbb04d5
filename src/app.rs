//! Status update composer
//!
//! A small two-field form that hosts the mention widget: a plain task
//! title and a multi-line status update with `@mention` autocomplete.
//! Posted updates are listed in a feed with the people they mention.

mod composer;
mod events;
mod mouse_click;
mod render;
mod state;

pub use composer::ComposerField;
pub use state::{App, Focus, PostedUpdate, STATUS_FIELD, TASK_FIELD};
