//! Orders API Handlers

use axum::{extract::State, Json};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{Order, OrderDraft};

/// GET /api/orders - full order history, newest first
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.orders.history().await)
}

/// POST /api/orders - place an order
///
/// Caller-supplied `id`/`date` are ignored (the draft has no such fields);
/// the returned order carries the server-assigned values. An empty item
/// list is rejected with 400 before anything is stored.
pub async fn place(
    State(state): State<ServerState>,
    Json(draft): Json<OrderDraft>,
) -> AppResult<Json<Order>> {
    let order = state.orders.place_order(draft).await?;
    Ok(Json(order))
}
