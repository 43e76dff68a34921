//! One side of the book: an ordered chain of price levels
//!
//! Levels live in a slab arena and are doubly linked through `Option<usize>`
//! indices; the head index is the best level. A BUY side runs from highest
//! price to lowest, a SELL side from lowest to highest. Splice and unlink
//! are O(1); the insertion scan is linear in the number of live levels,
//! which stays small at this system's target scale.

use slab::Slab;

use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

use super::price_level::PriceLevel;
use crate::matching::crossing::{crosses, ranks_ahead};
use crate::matching::executor::MatchExecutor;

/// One side (BUY or SELL) of the order book
///
/// Exclusively owns its levels; each level exclusively owns its resting
/// orders. Neighbor links are plain arena indices, so no reference cycles
/// exist.
#[derive(Debug, Clone)]
pub struct BookSide {
    side: Side,
    /// Arena of levels; chain order lives in the levels' links
    levels: Slab<PriceLevel>,
    /// Arena index of the best level, if any
    head: Option<usize>,
}

impl BookSide {
    /// Create an empty side
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: Slab::new(),
            head: None,
        }
    }

    /// The side this book half holds
    pub fn side(&self) -> Side {
        self.side
    }

    /// Price of the best level (highest bid / lowest ask)
    pub fn best_price(&self) -> Option<Price> {
        self.head.map(|ix| self.levels[ix].price())
    }

    /// Match an incoming opposite-side (taker) order against this side
    ///
    /// Walks levels from the best while the taker has quantity and its price
    /// still crosses the level. An emptied level is unlinked in the same
    /// step its last order fills; the traversal cursor is captured before
    /// the unlink so it survives the splice.
    pub fn cross(
        &mut self,
        taker: &mut Order,
        executor: &mut MatchExecutor,
        timestamp: i64,
        trades: &mut Vec<Trade>,
    ) {
        debug_assert_eq!(taker.side, self.side.opposite(), "taker must oppose this side");

        let mut cursor = self.head;
        while let Some(ix) = cursor {
            if taker.is_filled() || !crosses(self.side, taker.price, self.levels[ix].price()) {
                break;
            }

            let level = &mut self.levels[ix];
            level.execute(taker, executor, timestamp, trades);
            let next = level.next;
            let emptied = level.is_empty();
            if emptied {
                self.unlink(ix);
            }
            cursor = next;
        }

        self.check_invariants();
    }

    /// Rest an unfilled or partially filled order on this side
    ///
    /// Joins the level at the order's price when one exists; otherwise a new
    /// level is spliced in at the position the ranking predicate selects.
    /// Ownership of the order moves into the level's queue.
    pub fn rest(&mut self, order: Order) {
        debug_assert_eq!(order.side, self.side, "order must rest on its own side");
        debug_assert!(!order.is_filled(), "filled orders never rest");

        let Some(mut ix) = self.head else {
            let first = self.levels.insert(PriceLevel::new(order));
            self.head = Some(first);
            self.check_invariants();
            return;
        };

        loop {
            if self.levels[ix].price() == order.price {
                // Equal price joins the existing queue, keeping time priority
                self.levels[ix].add(order);
                break;
            }
            if ranks_ahead(self.side, order.price, self.levels[ix].price()) {
                let new_ix = self.levels.insert(PriceLevel::new(order));
                self.insert_before(ix, new_ix);
                break;
            }
            match self.levels[ix].next {
                Some(next) => ix = next,
                None => {
                    let new_ix = self.levels.insert(PriceLevel::new(order));
                    self.insert_after(ix, new_ix);
                    break;
                }
            }
        }

        self.check_invariants();
    }

    /// Splice `new_ix` immediately before `at_ix`, repairing the head index
    /// when `at_ix` was the best level
    fn insert_before(&mut self, at_ix: usize, new_ix: usize) {
        let prev = self.levels[at_ix].prev;
        self.levels[new_ix].prev = prev;
        self.levels[new_ix].next = Some(at_ix);
        self.levels[at_ix].prev = Some(new_ix);
        match prev {
            Some(p) => self.levels[p].next = Some(new_ix),
            None => self.head = Some(new_ix),
        }
    }

    /// Splice `new_ix` immediately after `at_ix`
    fn insert_after(&mut self, at_ix: usize, new_ix: usize) {
        let next = self.levels[at_ix].next;
        self.levels[new_ix].next = next;
        self.levels[new_ix].prev = Some(at_ix);
        self.levels[at_ix].next = Some(new_ix);
        if let Some(n) = next {
            self.levels[n].prev = Some(new_ix);
        }
    }

    /// Unlink a level from the chain and release its arena slot, repairing
    /// both neighbors' cross-links and the head index
    fn unlink(&mut self, ix: usize) {
        let level = self.levels.remove(ix);
        match level.prev {
            Some(p) => self.levels[p].next = level.next,
            None => self.head = level.next,
        }
        if let Some(n) = level.next {
            self.levels[n].prev = level.prev;
        }
    }

    /// Best-first depth: `(price, resting quantity, order count)` per level
    pub fn depth(&self) -> Vec<(Price, Quantity, usize)> {
        let mut out = Vec::with_capacity(self.levels.len());
        let mut cursor = self.head;
        while let Some(ix) = cursor {
            let level = &self.levels[ix];
            out.push((level.price(), level.total_quantity(), level.order_count()));
            cursor = level.next;
        }
        out
    }

    /// Total quantity resting across all levels on this side
    pub fn total_quantity(&self) -> Quantity {
        let mut total = Quantity::zero();
        let mut cursor = self.head;
        while let Some(ix) = cursor {
            total += self.levels[ix].total_quantity();
            cursor = self.levels[ix].next;
        }
        total
    }

    /// Get the number of live price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Check if the side holds no levels
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Development-time structural check: every level non-empty, prices
    /// strictly improving toward the head, links and head consistent
    fn check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        let mut visited = 0;
        let mut prev_ix: Option<usize> = None;
        let mut cursor = self.head;
        while let Some(ix) = cursor {
            let level = &self.levels[ix];
            debug_assert!(!level.is_empty(), "empty level left linked");
            debug_assert_eq!(level.prev, prev_ix, "broken prev link");
            if let Some(p) = prev_ix {
                debug_assert!(
                    ranks_ahead(self.side, self.levels[p].price(), level.price()),
                    "levels out of price order"
                );
            }
            visited += 1;
            prev_ix = Some(ix);
            cursor = level.next;
        }
        debug_assert_eq!(visited, self.levels.len(), "orphaned arena slot");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::ToPrimitive;
    use types::ids::OrderId;
    use types::order::OrderType;

    fn order(id: &str, side: Side, price: u64, qty: u64) -> Order {
        Order::new(
            OrderId::new(id),
            side,
            OrderType::Limit(Price::from_u64(price)),
            Quantity::new(qty),
        )
        .unwrap()
    }

    fn prices(side: &BookSide) -> Vec<u64> {
        side.depth()
            .iter()
            .map(|(p, _, _)| p.as_decimal().to_u64().unwrap())
            .collect()
    }

    #[test]
    fn test_rest_on_empty_side_becomes_head() {
        let mut side = BookSide::new(Side::SELL);
        side.rest(order("1", Side::SELL, 103, 500));

        assert_eq!(side.best_price(), Some(Price::from_u64(103)));
        assert_eq!(side.level_count(), 1);
    }

    #[test]
    fn test_sell_side_orders_levels_ascending() {
        let mut side = BookSide::new(Side::SELL);
        side.rest(order("1", Side::SELL, 105, 100));
        side.rest(order("2", Side::SELL, 103, 100));
        side.rest(order("3", Side::SELL, 104, 100));

        assert_eq!(prices(&side), vec![103, 104, 105]);
        assert_eq!(side.best_price(), Some(Price::from_u64(103)));
    }

    #[test]
    fn test_buy_side_orders_levels_descending() {
        let mut side = BookSide::new(Side::BUY);
        side.rest(order("1", Side::BUY, 98, 100));
        side.rest(order("2", Side::BUY, 100, 100));
        side.rest(order("3", Side::BUY, 92, 100));
        side.rest(order("4", Side::BUY, 97, 100));

        assert_eq!(prices(&side), vec![100, 98, 97, 92]);
        assert_eq!(side.best_price(), Some(Price::from_u64(100)));
    }

    #[test]
    fn test_equal_price_joins_existing_level() {
        let mut side = BookSide::new(Side::BUY);
        side.rest(order("1", Side::BUY, 98, 100));
        side.rest(order("2", Side::BUY, 98, 200));

        assert_eq!(side.level_count(), 1);
        let depth = side.depth();
        assert_eq!(depth[0].1, Quantity::new(300));
        assert_eq!(depth[0].2, 2);
    }

    #[test]
    fn test_rest_at_tail() {
        let mut side = BookSide::new(Side::SELL);
        side.rest(order("1", Side::SELL, 103, 100));
        side.rest(order("2", Side::SELL, 110, 100));

        assert_eq!(prices(&side), vec![103, 110]);
    }

    #[test]
    fn test_cross_walks_best_levels_first() {
        let mut side = BookSide::new(Side::SELL);
        side.rest(order("a", Side::SELL, 103, 500));
        side.rest(order("b", Side::SELL, 104, 600));

        let mut taker = order("t", Side::BUY, 104, 700);
        let mut executor = MatchExecutor::new(0);
        let mut trades = Vec::new();
        side.cross(&mut taker, &mut executor, 0, &mut trades);

        assert!(taker.is_filled());
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].price, Price::from_u64(103));
        assert_eq!(trades[0].quantity, Quantity::new(500));
        assert_eq!(trades[1].price, Price::from_u64(104));
        assert_eq!(trades[1].quantity, Quantity::new(200));

        // level 103 emptied and unlinked; 104 keeps the residual
        assert_eq!(prices(&side), vec![104]);
        assert_eq!(side.total_quantity(), Quantity::new(400));
    }

    #[test]
    fn test_cross_stops_at_non_crossing_level() {
        let mut side = BookSide::new(Side::SELL);
        side.rest(order("a", Side::SELL, 103, 100));
        side.rest(order("b", Side::SELL, 105, 100));

        let mut taker = order("t", Side::BUY, 104, 500);
        let mut executor = MatchExecutor::new(0);
        let mut trades = Vec::new();
        side.cross(&mut taker, &mut executor, 0, &mut trades);

        assert_eq!(trades.len(), 1);
        assert_eq!(taker.quantity, Quantity::new(400));
        assert_eq!(prices(&side), vec![105]);
    }

    #[test]
    fn test_cross_drains_whole_side() {
        let mut side = BookSide::new(Side::BUY);
        side.rest(order("a", Side::BUY, 100, 100));
        side.rest(order("b", Side::BUY, 99, 100));

        let mut taker = Order::new(
            OrderId::new("t"),
            Side::SELL,
            OrderType::Market,
            Quantity::new(500),
        )
        .unwrap();
        let mut executor = MatchExecutor::new(0);
        let mut trades = Vec::new();
        side.cross(&mut taker, &mut executor, 0, &mut trades);

        assert!(side.is_empty());
        assert_eq!(side.level_count(), 0);
        assert_eq!(taker.quantity, Quantity::new(300));
        assert_eq!(trades[0].price, Price::from_u64(100));
        assert_eq!(trades[1].price, Price::from_u64(99));
    }

    #[test]
    fn test_head_repaired_after_best_level_drains() {
        let mut side = BookSide::new(Side::SELL);
        side.rest(order("a", Side::SELL, 103, 100));
        side.rest(order("b", Side::SELL, 104, 100));
        side.rest(order("c", Side::SELL, 105, 100));

        let mut taker = order("t", Side::BUY, 103, 100);
        let mut executor = MatchExecutor::new(0);
        let mut trades = Vec::new();
        side.cross(&mut taker, &mut executor, 0, &mut trades);

        assert_eq!(side.best_price(), Some(Price::from_u64(104)));
        assert_eq!(prices(&side), vec![104, 105]);
    }

    #[test]
    fn test_better_price_becomes_new_head() {
        let mut side = BookSide::new(Side::SELL);
        side.rest(order("a", Side::SELL, 105, 100));
        side.rest(order("b", Side::SELL, 103, 100));

        assert_eq!(side.best_price(), Some(Price::from_u64(103)));
    }
}
