//! Event structures for the matching engine
//!
//! Serde-serializable mirrors of engine outputs, consumed by feed and
//! reporting collaborators rather than by the engine itself.

use serde::{Deserialize, Serialize};
use types::ids::{OrderId, TradeId};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

/// Trade executed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeExecutedEvent {
    pub trade_id: TradeId,
    pub sequence: u64,
    pub maker_order_id: OrderId,
    pub taker_order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
    pub executed_at: i64,
}

impl From<&Trade> for TradeExecutedEvent {
    fn from(trade: &Trade) -> Self {
        Self {
            trade_id: trade.trade_id,
            sequence: trade.sequence,
            maker_order_id: trade.maker_order_id.clone(),
            taker_order_id: trade.taker_order_id.clone(),
            side: trade.side,
            price: trade.price,
            quantity: trade.quantity,
            executed_at: trade.executed_at,
        }
    }
}

/// Order rested event: an unfilled remainder joined the book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRestedEvent {
    pub order_id: OrderId,
    pub side: Side,
    pub price: Price,
    pub quantity: Quantity,
}

impl OrderRestedEvent {
    /// Build the event for an order about to rest with `remaining` quantity
    pub fn new(order: &Order, remaining: Quantity) -> Self {
        Self {
            order_id: order.order_id.clone(),
            side: order.side,
            price: order.price,
            quantity: remaining,
        }
    }
}
