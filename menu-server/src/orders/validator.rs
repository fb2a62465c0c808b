//! Order acceptance validation

use thiserror::Error;

use crate::utils::AppError;
use shared::models::OrderDraft;

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order must contain at least one item.")]
    EmptyItems,
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::EmptyItems => AppError::validation(e.to_string()),
        }
    }
}

/// Check the single acceptance-time business rule: a non-empty item list.
///
/// Everything else in the draft is taken as-is; id and date are assigned
/// by the store downstream regardless of what the caller sent.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), OrderError> {
    if draft.items.is_empty() {
        return Err(OrderError::EmptyItems);
    }
    Ok(())
}
