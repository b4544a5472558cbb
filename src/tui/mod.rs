//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. It holds
//! presentation state only (the pattern being typed, the last outcome);
//! everything about words lives in the `SessionController`.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only redraws after an event (key press,
//! paste, resize) and otherwise sleeps in `poll`.

mod component;
mod components;
mod event;
mod ui;

use log::info;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::session::{Outcome, SessionController};
use crate::tui::component::EventHandler;
use crate::tui::components::{PatternEvent, PatternInput};
use crate::tui::event::{TuiEvent, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub pattern_input: PatternInput,
    /// Outcome of the most recent action, shown in the result area
    pub last_outcome: Option<Outcome>,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for pattern editing
            SetCursorStyle::SteadyBlock, // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Turn a terminal event into a core action, feeding text edits to the
/// pattern input along the way.
fn action_for(tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::UndoRemove => Some(Action::UndoRemove),
        TuiEvent::Resize => None,
        other => tui
            .pattern_input
            .handle_event(&other)
            .map(|PatternEvent::Submit(pattern)| Action::Find(pattern)),
    }
}

pub fn run(mut session: SessionController) -> io::Result<()> {
    let mut terminal = ratatui::init();
    let mode_guard = TerminalModeGuard::new();
    let mut tui = TuiState::new();

    let result = event_loop(&mut terminal, &mut session, &mut tui);

    drop(mode_guard);
    ratatui::restore();
    info!(
        "Session ended: {} entries left in {}",
        session.store().len(),
        session.store().path().display()
    );
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    session: &mut SessionController,
    tui: &mut TuiState,
) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, session, tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        let Some(action) = action_for(tui, event) else {
            continue;
        };
        match update(session, action) {
            Effect::Quit => return Ok(()),
            Effect::Display(outcome) => tui.last_outcome = Some(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_pattern_becomes_find_action() {
        let mut tui = TuiState::new();
        assert_eq!(action_for(&mut tui, TuiEvent::InputChar('a')), None);
        assert_eq!(action_for(&mut tui, TuiEvent::InputChar('p')), None);
        assert_eq!(
            action_for(&mut tui, TuiEvent::Find),
            Some(Action::Find("ap".to_string()))
        );
        assert!(tui.pattern_input.buffer.is_empty());
    }

    #[test]
    fn test_undo_and_quit_bypass_input() {
        let mut tui = TuiState::new();
        action_for(&mut tui, TuiEvent::InputChar('x'));
        assert_eq!(action_for(&mut tui, TuiEvent::UndoRemove), Some(Action::UndoRemove));
        assert_eq!(action_for(&mut tui, TuiEvent::Quit), Some(Action::Quit));
        // Pending text is untouched
        assert_eq!(tui.pattern_input.buffer, "x");
    }

    #[test]
    fn test_resize_is_not_an_action() {
        let mut tui = TuiState::new();
        assert_eq!(action_for(&mut tui, TuiEvent::Resize), None);
    }
}
