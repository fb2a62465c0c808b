//! Core module - server configuration, state and lifecycle
//!
//! # Module Structure
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared application state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{build_app, Server};
pub use state::ServerState;
