use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::engine::{AssistEngine, AssistEvent};

/// Application state
pub struct App {
    pub engine: AssistEngine,
    pub textarea: TextArea<'static>,
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: AssistEngine) -> Self {
        App {
            engine,
            textarea: single_line_textarea(""),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current composer draft
    pub fn input(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the composer draft, leaving the cursor at the end
    pub fn set_input(&mut self, text: &str) {
        self.textarea = single_line_textarea(text);
    }

    /// Feed a completed piece of background work into the engine
    pub fn handle_assist(&mut self, event: AssistEvent) {
        self.engine.handle_event(event);
    }
}

fn single_line_textarea(text: &str) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text.to_string()]);
    // Remove default underline from the cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.move_cursor(CursorMove::End);
    textarea
}
