//! Text fields of the composer
//!
//! Wraps a `tui-textarea` so the mention widget can read and rewrite it as
//! one flat string with a character cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::coordinator::{MentionSurface, SurfaceId};
use crate::overlay::Anchor;

/// A titled text field
pub struct ComposerField {
    id: SurfaceId,
    title: &'static str,
    mention_enabled: bool,
    multi_line: bool,
    focused: bool,
    area: Rect,
    pub textarea: TextArea<'static>,
}

impl ComposerField {
    pub fn new(id: SurfaceId, title: &'static str, mention_enabled: bool, multi_line: bool) -> Self {
        Self {
            id,
            title,
            mention_enabled,
            multi_line,
            focused: false,
            area: Rect::default(),
            textarea: new_textarea(vec![String::new()], placeholder(mention_enabled)),
        }
    }

    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Record where the field was drawn and refresh its border
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", self.title))
                .border_style(Style::default().fg(border_color)),
        );
    }

    pub fn clear(&mut self) {
        self.replace_text("", 0);
    }
}

impl MentionSurface for ComposerField {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn is_mention_enabled(&self) -> bool {
        self.mention_enabled
    }

    fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    fn cursor(&self) -> usize {
        let (row, col) = self.textarea.cursor();
        flat_offset(self.textarea.lines(), row, col)
    }

    fn replace_text(&mut self, text: &str, cursor: usize) {
        let lines: Vec<String> = text.split('\n').map(String::from).collect();
        let (row, col) = row_col(&lines, cursor);
        let block = self.textarea.block().cloned();

        self.textarea = new_textarea(lines, placeholder(self.mention_enabled));
        if let Some(block) = block {
            self.textarea.set_block(block);
        }
        self.textarea
            .move_cursor(CursorMove::Jump(saturate_u16(row), saturate_u16(col)));
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn anchor(&self) -> Anchor {
        Anchor::new(self.area)
    }
}

fn placeholder(mention_enabled: bool) -> &'static str {
    if mention_enabled {
        "Type @ to mention someone"
    } else {
        ""
    }
}

fn new_textarea(lines: Vec<String>, placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(lines);
    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    if !placeholder.is_empty() {
        textarea.set_placeholder_text(placeholder);
    }
    textarea
}

/// Cursor coordinate for `CursorMove::Jump`, pinned at `u16::MAX`
fn saturate_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Character offset of (row, col) in the lines joined with `\n`
pub fn flat_offset(lines: &[String], row: usize, col: usize) -> usize {
    lines
        .iter()
        .take(row)
        .map(|line| line.chars().count() + 1)
        .sum::<usize>()
        + col
}

/// Row and column of a character offset, clamped to the end of the text
pub fn row_col(lines: &[String], offset: usize) -> (usize, usize) {
    let mut remaining = offset;
    for (row, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if remaining <= len {
            return (row, remaining);
        }
        remaining -= len + 1;
    }
    let last = lines.len().saturating_sub(1);
    (last, lines.last().map(|l| l.chars().count()).unwrap_or(0))
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod composer_tests;
