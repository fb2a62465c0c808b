//! Order Module
//!
//! Order intake and durable history:
//!
//! - **validator**: acceptance-time rules
//! - **store**: mutex-guarded in-memory history, newest first
//! - **snapshot**: whole-history file persistence
//!
//! # Data Flow
//!
//! 1. Caller POSTs an order draft
//! 2. Validator checks it (non-empty items)
//! 3. Store assigns id + date, prepends to history
//! 4. Full history is written to the snapshot file before returning
//!
//! Persistence is best-effort relative to memory: a failed save is logged
//! and the in-memory append still stands. On startup the snapshot is loaded
//! once; a missing or corrupt file yields an empty history, never a crash.

pub mod snapshot;
pub mod store;
pub mod validator;

// Re-exports
pub use snapshot::{SnapshotError, SnapshotStore};
pub use store::OrderStore;
pub use validator::{validate_draft, OrderError};
