use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::{App, Focus};
use crate::overlay::render_overlay;

const HELP_TEXT: &str = " Ctrl+S post · Tab next field · ↑/↓ Enter pick mention · Esc close · Ctrl+Q quit";

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Task title
            Constraint::Length(6), // Status update
            Constraint::Min(3),    // Posted updates
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

        self.layout_regions.clear();
        self.layout_regions.task_field = Some(layout[0]);
        self.layout_regions.status_field = Some(layout[1]);
        self.layout_regions.feed = Some(layout[2]);

        self.render_field(frame, Focus::Task, layout[0]);
        self.render_field(frame, Focus::Status, layout[1]);
        self.render_feed(frame, layout[2]);
        frame.render_widget(
            Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
            layout[3],
        );

        // Overlay last so it floats above everything
        self.mention.set_bounds(frame.area());
        render_overlay(self.mention.overlay(), frame);
    }

    fn render_field(&mut self, frame: &mut Frame, focus: Focus, area: Rect) {
        let field = self.field_mut(focus);
        field.set_area(area);
        frame.render_widget(&field.textarea, area);
    }

    fn render_feed(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Feed ({}) ", self.posted.len()))
            .border_style(Style::default().fg(Color::DarkGray));

        let mut lines = Vec::new();
        for update in self.posted.iter().rev() {
            let task = if update.task.is_empty() {
                "(no task)"
            } else {
                update.task.as_str()
            };
            lines.push(Line::from(Span::styled(
                task.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.extend(
                update
                    .content
                    .lines()
                    .map(|l| Line::from(format!("  {}", l))),
            );
            if !update.mentions.is_empty() {
                lines.push(Line::from(Span::styled(
                    format!("  mentions: {}", update.mentions.join(", ")),
                    Style::default().fg(Color::Cyan),
                )));
            }
        }

        let content = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(content, area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
