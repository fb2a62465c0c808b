//! Menu API Handlers

use axum::{extract::State, Json};

use crate::core::ServerState;
use shared::models::Category;

/// GET /api/menu - aggregate the full catalog
///
/// Recomputed on every request. Categories whose upstream fetch failed are
/// omitted, so this handler itself never fails.
pub async fn get_menu(State(state): State<ServerState>) -> Json<Vec<Category>> {
    Json(state.menu.get_menu().await)
}
