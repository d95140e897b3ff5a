//! Reorder game server library.
//!
//! Players join named rooms over WebSocket and race to put a shuffled set of category
//! images back into a hidden order. The first exact match wins the round.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod app;
