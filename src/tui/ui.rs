use crate::core::session::SessionController;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ResultView, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const KEY_HINTS: &str = "Enter/F1 find · F2/Ctrl+D not registered as word · Esc quit";

pub fn draw_ui(frame: &mut Frame, session: &SessionController, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(3), Length(1)]);
    let [title_area, input_area, result_area, hint_area] = layout.areas(frame.area());

    let list_name = session
        .store()
        .path()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| session.store().path().display().to_string());
    TitleBar::new(list_name, session.remaining(), session.used_count()).render(frame, title_area);

    tui.pattern_input.render(frame, input_area);

    ResultView::new(tui.last_outcome.as_ref()).render(frame, result_area);

    let hints = Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))).centered();
    frame.render_widget(hints, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::Outcome;
    use crate::core::word_store::WordStore;
    use crate::notify::NoopSink;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn session() -> SessionController {
        let store = WordStore::from_entries(
            "/lists/words.txt",
            vec!["apple".into(), "apply".into(), "app".into()],
        );
        SessionController::new(store, Box::new(NoopSink)).unwrap()
    }

    #[test]
    fn test_draw_ui_initial_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let session = session();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &session, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Wordfinder (words.txt) | 3 left | 0 used"));
        assert!(text.contains("Type a pattern and press Enter"));
        assert!(text.contains("Esc quit"));
    }

    #[test]
    fn test_draw_ui_shows_found_word_and_counts() {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        let mut session = session();
        let mut tui = TuiState::new();
        tui.last_outcome = Some(session.on_find("app"));
        terminal.draw(|f| draw_ui(f, &session, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("2 left | 1 used"));
        assert!(text.contains("apple"));
        assert_eq!(tui.last_outcome, Some(Outcome::Found("apple".into())));
    }

    #[test]
    fn test_draw_ui_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let session = session();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &session, &mut tui)).unwrap();
    }
}
