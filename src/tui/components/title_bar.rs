//! # TitleBar Component
//!
//! Top status line: which word list is loaded and how much of it is left.
//!
//! Stateless. All three props come from the core session; the title bar
//! just renders what it's given:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("words.txt".into(), 118, 2);
//! title_bar.render(frame, title_area);
//! ```

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// File name of the loaded word list
    pub list_name: String,
    /// Entries not yet handed out this session
    pub remaining: usize,
    /// Entries handed out this session
    pub used: usize,
}

impl TitleBar {
    pub fn new(list_name: String, remaining: usize, used: usize) -> Self {
        Self {
            list_name,
            remaining,
            used,
        }
    }

    pub fn text(&self) -> String {
        format!(
            "Wordfinder ({}) | {} left | {} used",
            self.list_name, self.remaining, self.used
        )
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
