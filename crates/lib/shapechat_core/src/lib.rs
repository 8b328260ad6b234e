//! # shapechat_core
//!
//! Core domain logic for Shapechat: keyword classification, shaped sample
//! content generation, in-memory chat sessions and the MCP server config file.

pub mod classifier;
pub mod config;
pub mod generators;
pub mod session;
pub mod shape;

pub use shape::{Shape, ShapedResponse};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Classify `message` and generate a randomized response of the matching shape.
///
/// Uses the thread-local RNG and the current wall clock. Use
/// [`generators::generate`] directly to inject either.
pub fn respond(message: &str) -> ShapedResponse {
    let shape = classifier::classify(message);
    let mut rng = rand::rng();
    generators::generate(shape, message, chrono::Utc::now(), &mut rng)
}
