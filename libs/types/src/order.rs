//! Order lifecycle types
//!
//! An order resolves its pricing at construction: limit orders carry their
//! own price, market orders take the side's sentinel. Downstream matching
//! never branches on order type again.

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

/// Order pricing at submission time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "price")]
pub enum OrderType {
    /// Execute at the given price or better; any remainder rests
    #[serde(rename = "LIMIT")]
    Limit(Price),
    /// Execute against resting opposite liquidity at any price
    #[serde(rename = "MARKET")]
    Market,
}

/// An order being matched against the book or resting on it
///
/// `quantity` is the remaining quantity: strictly positive while the order
/// is alive, decremented in place as fills occur. An order whose quantity
/// reaches zero is removed from its queue in the same step and ceases to
/// exist as a book entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    /// Effective price: the limit price, or the side's market sentinel
    pub price: Price,
    pub quantity: Quantity,
}

impl Order {
    /// Create a validated order
    ///
    /// A market order's effective price is the side's sentinel: the lowest
    /// representable price for a SELL, the highest for a BUY, guaranteeing
    /// it crosses all resting opposite liquidity before it would rest.
    pub fn new(
        order_id: OrderId,
        side: Side,
        order_type: OrderType,
        quantity: Quantity,
    ) -> Result<Self, OrderError> {
        if quantity.is_zero() {
            return Err(OrderError::InvalidQuantity);
        }

        let price = match order_type {
            OrderType::Limit(price) => {
                if !price.is_valid_limit() {
                    return Err(OrderError::PriceOverflow { price });
                }
                price
            }
            OrderType::Market => match side {
                Side::BUY => Price::max_price(),
                Side::SELL => Price::min_price(),
            },
        };

        Ok(Self {
            order_id,
            side,
            price,
            quantity,
        })
    }

    /// Check if the order is completely filled
    pub fn is_filled(&self) -> bool {
        self.quantity.is_zero()
    }

    /// Decrement the remaining quantity by a fill
    ///
    /// # Panics
    /// Panics if the fill exceeds the remaining quantity.
    pub fn fill(&mut self, fill_quantity: Quantity) {
        assert!(
            fill_quantity <= self.quantity,
            "Fill would exceed order quantity"
        );
        self.quantity = self.quantity.saturating_sub(fill_quantity);
    }
}
