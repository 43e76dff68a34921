//! Error types for order validation
//!
//! Rejections surface at construction, before any book mutation. Crossing
//! and resting are total over valid orders, so the engine itself has no
//! runtime error path.

use crate::numeric::Price;
use thiserror::Error;

/// Order construction errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderError {
    /// Orders must carry strictly positive quantity
    #[error("invalid quantity: orders must have positive quantity")]
    InvalidQuantity,

    /// Limit price at or beyond the reserved market-order sentinels
    #[error("price overflow: {price} is at or beyond the market sentinels")]
    PriceOverflow { price: Price },
}
