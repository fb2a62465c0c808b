//! Data models
//!
//! Shared between the server and frontend (via API).
//! All wire field names are camelCase to match the existing frontend payloads.

pub mod menu;
pub mod order;

// Re-exports
pub use menu::*;
pub use order::*;
