//! # TUI Components
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: word list name plus remaining/used counts
//! - `ResultView`: outcome of the last find or removal
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `PatternInput`: the pattern text box; emits `PatternEvent::Submit`
//!
//! Components receive external data as props (struct fields), never by
//! reaching into the session directly, so each one renders and tests on its
//! own.

mod title_bar;
pub use title_bar::TitleBar;

pub mod pattern_input;
pub use pattern_input::{PatternEvent, PatternInput};

pub mod result_view;
pub use result_view::ResultView;
