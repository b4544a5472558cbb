//! # Core Application Logic
//!
//! This module contains Wordfinder's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • WordStore (file)     │
//!                    │  • UsageTracker         │
//!                    │  • matcher::find()      │
//!                    │  • SessionController    │
//!                    │  • Action / update()    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  notify    │
//!     │  Adapter   │                          │ (webhook)  │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`word_store`]: the word list and its backing file
//! - [`usage`]: used entries and the single undo slot
//! - [`matcher`]: longest-unused-match lookup
//! - [`session`]: `SessionController`, the find/undo state machine
//! - [`action`]: the `Action` enum and `update()` dispatcher
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod matcher;
pub mod session;
pub mod usage;
pub mod word_store;

pub use action::{Action, Effect, update};
pub use session::{Outcome, SessionController, SessionError, SessionState};
pub use word_store::{StoreError, WordStore};
