//! # ResultView Component
//!
//! Shows the outcome of the last action: the matched word, a removal
//! confirmation, or why nothing happened.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::session::{Outcome, SessionError};
use crate::tui::component::Component;

const MATCH_COLOR: Color = Color::Rgb(0x00, 0xb0, 0xf0);
const MUTED_COLOR: Color = Color::Rgb(0xd0, 0xd0, 0xd0);
const REMOVED_COLOR: Color = Color::Rgb(0xff, 0x66, 0x66);

pub struct ResultView<'a> {
    /// None before the first action
    pub outcome: Option<&'a Outcome>,
}

impl<'a> ResultView<'a> {
    pub fn new(outcome: Option<&'a Outcome>) -> Self {
        Self { outcome }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let Some(outcome) = self.outcome else {
            return vec![Line::from(Span::styled(
                "Type a pattern and press Enter",
                Style::default().fg(Color::DarkGray),
            ))];
        };

        let headline = Style::default().add_modifier(Modifier::BOLD);
        match outcome {
            Outcome::Found(entry) => vec![Line::from(Span::styled(
                entry.clone(),
                headline.fg(MATCH_COLOR),
            ))],
            Outcome::Removed { entry, warning } => {
                let mut lines = vec![
                    Line::from(Span::styled("Entry removed.", headline.fg(REMOVED_COLOR))),
                    Line::from(Span::styled(entry.clone(), Style::default().fg(MUTED_COLOR))),
                ];
                if let Some(w) = warning {
                    lines.push(Line::from(Span::styled(
                        w.to_string(),
                        Style::default().fg(Color::Yellow),
                    )));
                }
                lines
            }
            Outcome::Failed(e @ SessionError::InvalidPattern(_)) => vec![Line::from(
                Span::styled(e.to_string(), headline.fg(Color::LightRed)),
            )],
            Outcome::Failed(e) => vec![Line::from(Span::styled(
                e.to_string(),
                headline.fg(MUTED_COLOR),
            ))],
        }
    }
}

impl Component for ResultView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.lines())
            .centered()
            .wrap(Wrap { trim: true })
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(paragraph, area);
    }
}
