//! Shared types for the menu server
//!
//! Wire-format data models used by the server and its tests.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
