//! Order store
//!
//! Holds the in-memory order history (newest first) behind a single mutex.
//! The same critical section covers id assignment, the prepend, and the
//! snapshot save, so concurrent placements serialize their writes in the
//! same total order in memory and on disk, and readers never observe a
//! torn state.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::orders::snapshot::{SnapshotError, SnapshotStore};
use crate::orders::validator::{validate_draft, OrderError};
use shared::models::{Order, OrderDraft};

/// Timestamp format of `Order::date` (local time, millisecond precision).
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Concurrency-safe order history with snapshot persistence.
#[derive(Clone)]
pub struct OrderStore {
    history: Arc<Mutex<Vec<Order>>>,
    snapshot: SnapshotStore,
}

impl OrderStore {
    /// Build the store from the snapshot file.
    ///
    /// Any load failure falls back to an empty history: persistence must
    /// never block startup. NotFound is the normal first run.
    pub async fn load(snapshot: SnapshotStore) -> Self {
        let history = match snapshot.load().await {
            Ok(orders) => {
                tracing::info!(orders = orders.len(), "Loaded order history from snapshot");
                orders
            }
            Err(SnapshotError::NotFound) => {
                tracing::info!("No order snapshot found, starting with an empty history");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Order snapshot unreadable, starting with an empty history");
                Vec::new()
            }
        };

        Self {
            history: Arc::new(Mutex::new(history)),
            snapshot,
        }
    }

    /// Read-only view of the history, newest first.
    pub async fn history(&self) -> Vec<Order> {
        self.history.lock().await.clone()
    }

    /// Validate, finalize, and store an order.
    ///
    /// On success the returned order carries the server-assigned `id` and
    /// `date` and is the new front of the history. On validation failure
    /// nothing is mutated and nothing is persisted.
    ///
    /// A snapshot save failure is logged and swallowed; the in-memory
    /// history stays authoritative.
    pub async fn place_order(&self, draft: OrderDraft) -> Result<Order, OrderError> {
        validate_draft(&draft)?;

        let mut history = self.history.lock().await;

        let order = Order {
            id: Self::next_id(&history),
            date: chrono::Local::now().format(DATE_FORMAT).to_string(),
            total: draft.total,
            items: draft.items,
            customer: draft.customer,
        };

        history.insert(0, order.clone());

        if let Err(e) = self.snapshot.save(&history).await {
            tracing::warn!(error = %e, order_id = order.id, "Failed to persist order snapshot");
        }

        tracing::info!(order_id = order.id, total = order.total, "Order placed");
        Ok(order)
    }

    /// Derive the next order id from the current time.
    ///
    /// Two placements in the same millisecond would collide, so the id is
    /// bumped past the newest stored order. Callers hold the history lock,
    /// which makes ids strictly increasing across concurrent placements.
    fn next_id(history: &[Order]) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match history.first() {
            Some(front) if now <= front.id => front.id + 1,
            _ => now,
        }
    }
}
