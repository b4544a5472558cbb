//! Wordfinder library exports for testing

pub mod core;
pub mod notify;
pub mod tui;

#[cfg(test)]
pub mod test_support;
