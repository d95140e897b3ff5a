//! Utilities shared by the Reorder game server binary and its tests.

pub mod logger;
pub mod time;
