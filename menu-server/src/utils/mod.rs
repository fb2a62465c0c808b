//! Utility module - errors and logging
//!
//! # Contents
//!
//! - [`AppError`] - application error type
//! - [`AppResult`] - handler Result alias
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
