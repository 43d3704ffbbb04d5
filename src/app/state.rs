use crate::config::Config;
use crate::coordinator::{MentionSurface, MentionWidget, SurfaceId};
use crate::fetcher::SuggestionFetcher;
use crate::layout::LayoutRegions;
use crate::trigger::extract_mentions;

use super::composer::ComposerField;

pub const TASK_FIELD: SurfaceId = SurfaceId(1);
pub const STATUS_FIELD: SurfaceId = SurfaceId(2);

/// Which field has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Task,
    Status,
}

impl Focus {
    pub(crate) fn index(self) -> usize {
        match self {
            Focus::Task => 0,
            Focus::Status => 1,
        }
    }

    pub fn of_surface(id: SurfaceId) -> Option<Self> {
        match id {
            TASK_FIELD => Some(Focus::Task),
            STATUS_FIELD => Some(Focus::Status),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Focus::Task => Focus::Status,
            Focus::Status => Focus::Task,
        }
    }
}

/// A status update that was posted to the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedUpdate {
    pub task: String,
    pub content: String,
    pub mentions: Vec<String>,
}

/// Application state
pub struct App {
    /// Task title then status update, in focus order
    pub fields: Vec<ComposerField>,
    pub mention: MentionWidget,
    pub posted: Vec<PostedUpdate>,
    pub layout_regions: LayoutRegions,
    should_quit: bool,
}

impl App {
    pub fn new(fetcher: SuggestionFetcher, config: &Config) -> Self {
        let fields = vec![
            ComposerField::new(TASK_FIELD, "Task", false, false),
            ComposerField::new(STATUS_FIELD, "Status update", true, true),
        ];

        let mut mention = MentionWidget::new(fetcher, config.overlay);
        for field in &fields {
            mention.attach(field);
        }

        let mut app = Self {
            fields,
            mention,
            posted: Vec::new(),
            layout_regions: LayoutRegions::new(),
            should_quit: false,
        };
        app.set_focus(Focus::Status);
        app
    }

    pub fn focus(&self) -> Focus {
        if self.fields[Focus::Task.index()].is_focused() {
            Focus::Task
        } else {
            Focus::Status
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(i == focus.index());
        }
    }

    pub fn field(&self, focus: Focus) -> &ComposerField {
        &self.fields[focus.index()]
    }

    pub fn field_mut(&mut self, focus: Focus) -> &mut ComposerField {
        &mut self.fields[focus.index()]
    }

    /// Post the status update to the feed and clear it
    ///
    /// Blank updates are ignored.
    pub fn post_update(&mut self) -> bool {
        let content = self.field(Focus::Status).text().trim().to_string();
        if content.is_empty() {
            return false;
        }

        let mentions = extract_mentions(&content)
            .into_iter()
            .map(|m| m.name)
            .collect::<Vec<_>>();
        log::debug!("Posting update with {} mention(s)", mentions.len());

        self.posted.push(PostedUpdate {
            task: self.field(Focus::Task).text().trim().to_string(),
            content,
            mentions,
        });
        self.mention.dismiss();
        self.field_mut(Focus::Status).clear();
        true
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
