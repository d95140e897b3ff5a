//! Cleanup timer implementations.

pub mod tokio_timer;

pub use tokio_timer::TokioRoomCleanupScheduler;
