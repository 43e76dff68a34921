//! Trade record types
//!
//! One record exists per maker order consumed or partially decremented, in
//! execution order.

use crate::ids::{OrderId, TradeId};
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single fill between a resting (maker) order and an incoming (taker) order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    /// Engine-wide monotonic sequence
    pub sequence: u64,

    // Order references
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,

    /// Taker (aggressor) side
    pub side: Side,
    /// Execution price: always the maker's level price
    pub price: Price,
    pub quantity: Quantity,

    /// Unix nanos
    pub executed_at: i64,
}

impl Trade {
    /// Create a new trade record
    pub fn new(
        sequence: u64,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        executed_at: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::new(),
            sequence,
            maker_order_id,
            taker_order_id,
            side,
            price,
            quantity,
            executed_at,
        }
    }

    /// Calculate trade value (price × quantity)
    pub fn trade_value(&self) -> Decimal {
        self.price.as_decimal() * Decimal::from(self.quantity.as_u64())
    }
}
