//! Matching engine core
//!
//! Owns both book sides and orchestrates submission: cross the opposite
//! side, then rest any remainder on the order's own side.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use crate::book::BookSide;
use crate::matching::executor::MatchExecutor;

/// Single-instrument limit order book
///
/// All matching for one submission happens inside `submit`, which runs to
/// completion with no internal suspension point. Concurrent callers must
/// serialize whole `submit` calls: crossing relinks levels that a
/// same-side rest would also touch, so per-level locking is unsafe.
#[derive(Debug, Clone)]
pub struct OrderBook {
    bids: BookSide,
    asks: BookSide,
    /// Trade minting with sequence generation
    executor: MatchExecutor,
}

/// Result of submitting an order
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// No trades; the whole order now rests on its side
    Resting,
    /// Some trades; the remainder now rests on the order's side
    PartiallyFilled {
        trades: Vec<Trade>,
        remaining_quantity: Quantity,
    },
    /// Taker fully consumed; nothing rests
    Filled { trades: Vec<Trade> },
}

impl OrderBook {
    /// Create an empty book with a starting trade sequence
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            bids: BookSide::new(Side::BUY),
            asks: BookSide::new(Side::SELL),
            executor: MatchExecutor::new(starting_sequence),
        }
    }

    /// Submit an order to the book
    ///
    /// This is the engine's single entry point: the order crosses the
    /// opposite side first, and any remaining quantity rests on its own
    /// side (ownership moves into the book). A single deterministic pass
    /// with no failure path for a validly constructed order; trades come
    /// back in execution order. Callers must not resubmit an order object.
    pub fn submit(&mut self, mut order: Order, timestamp: i64) -> SubmitResult {
        let mut trades = Vec::new();
        let (opposite, own) = match order.side {
            Side::BUY => (&mut self.asks, &mut self.bids),
            Side::SELL => (&mut self.bids, &mut self.asks),
        };

        opposite.cross(&mut order, &mut self.executor, timestamp, &mut trades);

        if order.is_filled() {
            debug!(order_id = %order.order_id, fills = trades.len(), "taker fully filled");
            return SubmitResult::Filled { trades };
        }

        let remaining_quantity = order.quantity;
        debug!(
            order_id = %order.order_id,
            price = %order.price,
            quantity = %remaining_quantity,
            "order resting"
        );
        own.rest(order);

        if trades.is_empty() {
            SubmitResult::Resting
        } else {
            SubmitResult::PartiallyFilled {
                trades,
                remaining_quantity,
            }
        }
    }

    /// Get the best bid price (highest resting buy)
    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_price()
    }

    /// Get the best ask price (lowest resting sell)
    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_price()
    }

    /// Spread (best ask − best bid); `None` unless both sides are populated
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
            _ => None,
        }
    }

    /// Mid-market price; `None` unless both sides are populated
    pub fn mid(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => {
                Some((ask.as_decimal() + bid.as_decimal()) / Decimal::from(2))
            }
            _ => None,
        }
    }

    /// Build a depth snapshot with up to `max_levels` levels per side
    ///
    /// Both sides come back best-first: bids descending, asks ascending.
    /// Never mutates state.
    pub fn depth_snapshot(&self, max_levels: usize) -> BookSnapshot {
        BookSnapshot {
            bids: Self::side_depth(&self.bids, max_levels),
            asks: Self::side_depth(&self.asks, max_levels),
        }
    }

    fn side_depth(side: &BookSide, max_levels: usize) -> Vec<LevelDepth> {
        side.depth()
            .into_iter()
            .take(max_levels)
            .map(|(price, quantity, order_count)| LevelDepth {
                price,
                quantity,
                order_count,
            })
            .collect()
    }

    /// Total quantity resting across both sides
    pub fn resting_quantity(&self) -> Quantity {
        self.bids.total_quantity() + self.asks.total_quantity()
    }
}

/// Order book depth snapshot for reporting collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub bids: Vec<LevelDepth>,
    pub asks: Vec<LevelDepth>,
}

/// One aggregated price level in a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDepth {
    pub price: Price,
    pub quantity: Quantity,
    pub order_count: usize,
}
