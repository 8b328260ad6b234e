//! Request handlers.

pub mod chat;
pub mod config;
pub mod root;
pub mod sessions;
