use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click;
use super::state::{App, Focus};
use crate::coordinator::MentionSurface;
use crate::layout::region_at;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(&text),
            _ => {}
        }
    }

    /// Apply lookup answers that arrived since the last tick
    pub fn tick(&mut self) -> bool {
        self.mention.poll()
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        let focus = self.focus();
        let field = &mut self.fields[focus.index()];

        // The overlay gets first pick
        if self.mention.handle_key(field, key) {
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.set_focus(focus.next());
                return;
            }
            KeyCode::Enter if !field.is_multi_line() => return,
            _ => {}
        }

        if field.textarea.input(key) {
            self.mention.handle_input(&*field);
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Char('s') => {
                self.post_update();
                true
            }
            _ => false,
        }
    }

    /// Handle mouse events
    ///
    /// A press on an overlay row selects it without moving focus. Any other
    /// press moves focus to the field under it and ends the mention if it
    /// landed outside the overlay.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (column, row) = (mouse.column, mouse.row);

        if let Some(id) = self.mention.active_surface()
            && let Some(field) = self.fields.iter_mut().find(|f| f.id() == id)
            && self.mention.handle_pointer_down(field, column, row)
        {
            // The field took focus back when the mention was written
            if let Some(focus) = Focus::of_surface(id) {
                self.set_focus(focus);
            }
            return;
        }

        let region = region_at(&self.layout_regions, column, row);
        mouse_click::handle_click(self, region);
        self.mention.handle_click(column, row);
    }

    fn handle_paste_event(&mut self, text: &str) {
        let focus = self.focus();
        let field = &mut self.fields[focus.index()];

        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let pasted = if field.is_multi_line() {
            normalized
        } else {
            normalized.replace('\n', " ")
        };

        field.textarea.insert_str(pasted);
        self.mention.handle_input(&*field);
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
