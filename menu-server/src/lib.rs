//! Menu Server - menu aggregation and order intake backend
//!
//! # Architecture Overview
//!
//! - **Menu aggregation** (`menu`): concurrent fan-out to the upstream
//!   category endpoints, normalization into the internal model
//! - **Orders** (`orders`): validated intake, in-memory history,
//!   whole-snapshot file persistence with load-on-start recovery
//! - **HTTP API** (`api`): RESTful API surface
//!
//! # Module Structure
//!
//! ```text
//! menu-server/src/
//! ├── core/          # Config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── menu/          # Upstream client, normalization, aggregation
//! ├── orders/        # Store, validator, snapshot persistence
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod core;
pub mod menu;
pub mod orders;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use menu::{HttpMenuClient, MenuFetcher, MenuService};
pub use orders::{OrderStore, SnapshotStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Call once, before anything logs.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    __  ___                  _____
   /  |/  /__  ____  __  __ / ___/___  ______   _____  _____
  / /|_/ / _ \/ __ \/ / / / \__ \/ _ \/ ___/ | / / _ \/ ___/
 / /  / /  __/ / / / /_/ / ___/ /  __/ /   | |/ /  __/ /
/_/  /_/\___/_/ /_/\__,_/ /____/\___/_/    |___/\___/_/
    "#
    );
}
