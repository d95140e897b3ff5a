//! Infrastructure layer: concrete implementations of the domain ports.

pub mod catalog_file;
pub mod dto;
pub mod message_pusher;
pub mod repository;
pub mod scheduler;
