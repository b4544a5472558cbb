//! # Actions
//!
//! Everything the user can ask for becomes an `Action`.
//! Typing a pattern and pressing Enter? That's `Action::Find(pattern)`.
//! Pressing the "not registered as word" key? That's `Action::UndoRemove`.
//!
//! `update()` applies an action to the session and returns an `Effect`
//! telling the front end what to do next.
//!
//! ```text
//! Session + Action  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::session::{Outcome, SessionController};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Find(String),
    UndoRemove,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Show the outcome in the result area.
    Display(Outcome),
    Quit,
}

pub fn update(session: &mut SessionController, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::Find(pattern) => Effect::Display(session.on_find(&pattern)),
        Action::UndoRemove => Effect::Display(session.on_undo()),
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::SessionError;
    use crate::core::word_store::WordStore;
    use crate::notify::NoopSink;

    fn session() -> SessionController {
        let store = WordStore::from_entries("unused.txt", vec!["ocean".into(), "cane".into()]);
        SessionController::new(store, Box::new(NoopSink)).unwrap()
    }

    #[test]
    fn test_find_action_displays_match() {
        let mut s = session();
        assert_eq!(
            update(&mut s, Action::Find("an".into())),
            Effect::Display(Outcome::Found("ocean".into()))
        );
    }

    #[test]
    fn test_undo_action_without_match() {
        let mut s = session();
        assert_eq!(
            update(&mut s, Action::UndoRemove),
            Effect::Display(Outcome::Failed(SessionError::NoUndoAvailable))
        );
    }

    #[test]
    fn test_quit_action() {
        let mut s = session();
        assert_eq!(update(&mut s, Action::Quit), Effect::Quit);
    }
}
