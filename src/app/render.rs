use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::App;

/// Widest the palette popup will grow, borders included
const PALETTE_MAX_WIDTH: u16 = 70;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        // Conversation on top, composer fixed at the bottom
        let layout =
            Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(frame.area());
        let conversation_area = layout[0];
        let input_area = layout[1];

        self.render_conversation(frame, conversation_area);
        self.render_composer(frame, input_area);

        if self.engine.palette().is_visible() {
            self.render_palette(frame, conversation_area, input_area);
        }
    }

    fn render_conversation(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .border_style(Style::default().fg(Color::DarkGray));

        let lines: Vec<Line> = self
            .engine
            .session()
            .history()
            .iter()
            .map(|message| {
                let (who, style) = if message.from_agent {
                    ("You: ", Style::default().fg(Color::Cyan))
                } else {
                    ("Customer: ", Style::default().fg(Color::Yellow))
                };
                Line::from(vec![
                    Span::styled(who, style.add_modifier(Modifier::BOLD)),
                    Span::raw(message.text.as_str()),
                ])
            })
            .collect();

        // Pin the tail of the conversation into view
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = lines.len().saturating_sub(visible) as u16;
        let content = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(content, area);
    }

    /// The composer input, with the ghost suggestion appended as dim text.
    /// While a ghost is showing the textarea widget is bypassed so the
    /// suggestion can share the line; the cursor is positioned manually.
    fn render_composer(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Message ")
            .border_style(Style::default().fg(Color::Cyan));

        match self.engine.ghost_suggestion() {
            Some(ghost) => {
                let typed = self.input().to_string();
                let line = Line::from(vec![
                    Span::raw(typed.clone()),
                    Span::styled(
                        ghost.to_string(),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::ITALIC),
                    ),
                ]);
                frame.render_widget(Paragraph::new(line).block(block), area);
                frame.set_cursor_position(Position::new(
                    area.x + 1 + typed.width() as u16,
                    area.y + 1,
                ));
            }
            None => {
                self.textarea.set_block(block);
                frame.render_widget(&self.textarea, area);
            }
        }
    }

    /// Candidate popup, anchored directly above the composer
    fn render_palette(&self, frame: &mut Frame, conversation_area: Rect, input_area: Rect) {
        let palette = self.engine.palette();

        let items: Vec<ListItem> = if palette.candidates().is_empty() {
            let placeholder = if palette.is_loading() {
                "Loading suggestions..."
            } else {
                "No matches"
            };
            vec![ListItem::new(Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ))]
        } else {
            palette
                .candidates()
                .iter()
                .map(|candidate| {
                    let mut spans = vec![Span::raw(candidate.title.as_str())];
                    if let Some(label) = &candidate.source_label {
                        spans.push(Span::raw("  "));
                        spans.push(Span::styled(
                            label.as_str(),
                            Style::default().fg(Color::Magenta),
                        ));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect()
        };

        let width = popup_width(palette.candidates().iter().map(|c| {
            let label_width = c.source_label.as_deref().map_or(0, |l| l.width() + 2);
            c.title.width() + label_width
        }))
        .min(conversation_area.width);
        let height = (items.len() as u16 + 2).min(conversation_area.height);
        let area = Rect {
            x: input_area.x + 1,
            y: input_area.y.saturating_sub(height),
            width,
            height,
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Suggestions ")
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Cyan)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );
        let mut state = ListState::default().with_selected(Some(palette.selected_index()));

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Popup width sized to the widest row, clamped to a sane maximum
fn popup_width(rows: impl Iterator<Item = usize>) -> u16 {
    let content = rows.max().unwrap_or(0).max("Loading suggestions...".len());
    (content as u16 + 2).min(PALETTE_MAX_WIDTH)
}
