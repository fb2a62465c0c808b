//! Menu Aggregation Module
//!
//! Builds the catalog served by `GET /api/menu`:
//!
//! - **client**: upstream HTTP client + raw item shape ([`SourceMenuItem`])
//! - **format**: category slug → display name
//! - **aggregator**: concurrent fan-out across all configured categories
//!
//! # Data Flow
//!
//! ```text
//! slug ── MenuFetcher::fetch ──> Vec<SourceMenuItem>
//!              │ (one task per category, joined in submission order)
//!              └── normalize + format ──> Category ──> Vec<Category>
//! ```
//!
//! The catalog is transient: recomputed on every request, never persisted.

pub mod aggregator;
pub mod client;
pub mod format;

// Re-exports
pub use aggregator::MenuService;
pub use client::{FetchError, HttpMenuClient, MenuFetcher, SourceMenuItem};
pub use format::format_category_name;
