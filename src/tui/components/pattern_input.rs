//! # PatternInput Component
//!
//! Single-line box where the user types the 2–4 letter pattern.
//!
//! The buffer is internal state. Submitting hands the buffer to the parent
//! and clears it, so every find attempt starts from an empty box.
//! Validation is not done here; the core decides what a valid pattern is.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// High-level events emitted by the PatternInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternEvent {
    /// User asked to search for the buffered text (Enter / F1)
    Submit(String),
}

#[derive(Debug, Default)]
pub struct PatternInput {
    pub buffer: String,
}

impl PatternInput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for PatternInput {
    type Event = PatternEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PatternEvent> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                None
            }
            TuiEvent::Paste(text) => {
                // Patterns are one line; keep only the first
                self.buffer.push_str(text.lines().next().unwrap_or(""));
                None
            }
            TuiEvent::Backspace => {
                self.buffer.pop();
                None
            }
            TuiEvent::Find => Some(PatternEvent::Submit(std::mem::take(&mut self.buffer))),
            _ => None,
        }
    }
}

impl Component for PatternInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let input = Paragraph::new(self.buffer.as_str())
            .style(Style::default().fg(Color::White))
            .centered()
            .block(
                Block::bordered()
                    .title(" Enter 2–4 letter pattern ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(input, area);

        // Centered text: cursor sits just after it
        let inner_width = area.width.saturating_sub(2);
        let text_width = (self.buffer.width() as u16).min(inner_width);
        let x = area.x + 1 + (inner_width - text_width) / 2 + text_width;
        frame.set_cursor_position(Position::new(
            x.min(area.right().saturating_sub(2)),
            area.y + 1,
        ));
    }
}
