//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`menu`] - aggregated menu catalog
//! - [`orders`] - order history and intake

pub mod health;
pub mod menu;
pub mod orders;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
