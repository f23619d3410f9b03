use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::palette::{PaletteEvent, PaletteOutcome};
use crate::session::Message;

use super::state::App;

impl App {
    /// Handle a key press and update application state
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events to avoid duplicates
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.engine.palette().is_visible() && self.handle_palette_key(key) {
            return;
        }

        match key.code {
            KeyCode::Tab => self.accept_ghost(),
            KeyCode::Enter => self.send_message(),
            KeyCode::Esc => self.should_quit = true,
            _ => self.edit(key),
        }
    }

    /// Palette navigation keys while the palette is open. Returns false for
    /// keys the palette does not claim, which then edit the draft as usual.
    fn handle_palette_key(&mut self, key: KeyEvent) -> bool {
        let event = match key.code {
            KeyCode::Up => PaletteEvent::NavigateUp,
            KeyCode::Down => PaletteEvent::NavigateDown,
            KeyCode::Enter => PaletteEvent::Commit,
            KeyCode::Esc => PaletteEvent::Cancel,
            _ => return false,
        };
        match self.engine.palette_event(event) {
            Some(PaletteOutcome::Committed(body)) => self.set_input(&body),
            Some(PaletteOutcome::Dismissed) => self.set_input(""),
            None => {}
        }
        true
    }

    /// Append the ghost suggestion to the draft, if one is showing
    fn accept_ghost(&mut self) {
        if let Some(suffix) = self.engine.accept_ghost() {
            let text = format!("{}{suffix}", self.input());
            self.set_input(&text);
            self.engine.input_changed(&text);
        }
    }

    fn send_message(&mut self) {
        let text = self.input().trim().to_string();
        if text.is_empty() {
            return;
        }
        self.engine.message_sent(Message::agent(&text));
        self.set_input("");
        self.engine.input_changed("");
    }

    fn edit(&mut self, key: KeyEvent) {
        if self.textarea.input(key) {
            let text = self.input().to_string();
            self.engine.input_changed(&text);
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
