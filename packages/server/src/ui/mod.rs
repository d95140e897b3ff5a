//! Game server UI layer: transport endpoints and the command dispatcher.

pub mod dispatcher;
mod handler;
mod server;
mod signal;
pub mod state;

pub use dispatcher::{DispatcherUseCases, GameCommand, GameDispatcher, GameDispatcherHandle};
pub use server::Server;
pub use state::AppState;
