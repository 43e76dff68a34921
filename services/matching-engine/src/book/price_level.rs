//! Price level implementation with FIFO queue
//!
//! A price level owns every order resting at one price. Orders are kept in
//! FIFO (First-In-First-Out) order to enforce time priority: a resting
//! order's place in line is permanent until it fills.

use std::collections::VecDeque;

use types::numeric::{Price, Quantity};
use types::order::Order;
use types::trade::Trade;

use crate::matching::executor::MatchExecutor;

/// A price level containing orders at a specific price
///
/// The price is fixed at creation from the first order added and never
/// changes. `next`/`prev` are arena indices maintained by the owning
/// [`BookSide`](crate::book::BookSide); they encode position among the
/// side's levels, not ownership.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    price: Price,
    /// Queue of resting orders at this level (FIFO order)
    orders: VecDeque<Order>,
    /// Total quantity resting at this level
    total_quantity: Quantity,
    /// Arena index of the next-worse level on this side
    pub(crate) next: Option<usize>,
    /// Arena index of the next-better level on this side
    pub(crate) prev: Option<usize>,
}

impl PriceLevel {
    /// Create a level seeded with its first order
    pub fn new(order: Order) -> Self {
        let price = order.price;
        let total_quantity = order.quantity;
        let mut orders = VecDeque::new();
        orders.push_back(order);
        Self {
            price,
            orders,
            total_quantity,
            next: None,
            prev: None,
        }
    }

    /// Append an order at the back of the queue (time priority)
    pub fn add(&mut self, order: Order) {
        debug_assert_eq!(order.price, self.price, "level accepts only its own price");
        self.total_quantity += order.quantity;
        self.orders.push_back(order);
    }

    /// Match an incoming (taker) order against this level's queue
    ///
    /// Repeatedly fills the head-of-queue (maker) order until the taker is
    /// exhausted or the queue empties. Each iteration mints exactly one
    /// trade at this level's price: the resting order arrived first at the
    /// price, so it sets the execution price. A maker left with quantity
    /// stays at the head; a maker filled to zero is popped and ceases to
    /// exist.
    ///
    /// Emptiness afterwards is the caller's concern: the owning side unlinks
    /// a drained level in the same step.
    pub fn execute(
        &mut self,
        taker: &mut Order,
        executor: &mut MatchExecutor,
        timestamp: i64,
        trades: &mut Vec<Trade>,
    ) {
        while let Some(maker) = self.orders.front_mut() {
            if taker.is_filled() {
                break;
            }

            let fill = maker.quantity.min(taker.quantity);
            trades.push(executor.execute_trade(
                maker.order_id.clone(),
                taker.order_id.clone(),
                taker.side,
                self.price,
                fill,
                timestamp,
            ));

            taker.fill(fill);
            self.total_quantity = self.total_quantity.saturating_sub(fill);
            if maker.quantity > fill {
                maker.fill(fill);
            } else {
                self.orders.pop_front();
            }
        }
    }

    /// The fixed price of this level
    pub fn price(&self) -> Price {
        self.price
    }

    /// Get the total quantity resting at this level
    pub fn total_quantity(&self) -> Quantity {
        self.total_quantity
    }

    /// Get the number of orders at this level
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Check if the level has no resting orders
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterate resting orders in time priority
    pub fn orders(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}
