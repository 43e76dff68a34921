//! Trade record minting
//!
//! Assigns each fill a monotonically increasing sequence number and a
//! time-sortable trade id.

use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::Side;
use types::trade::Trade;

/// Mints trade records with engine-wide monotonic sequencing
#[derive(Debug, Clone)]
pub struct MatchExecutor {
    sequence_counter: u64,
}

impl MatchExecutor {
    /// Create a new executor with a starting sequence number
    pub fn new(starting_sequence: u64) -> Self {
        Self {
            sequence_counter: starting_sequence,
        }
    }

    /// Get next sequence number (monotonically increasing)
    fn next_sequence(&mut self) -> u64 {
        let seq = self.sequence_counter;
        self.sequence_counter += 1;
        seq
    }

    /// Mint the record for one fill between a maker and a taker
    ///
    /// `price` is the maker's level price per price-time priority; `side` is
    /// the taker's side.
    pub fn execute_trade(
        &mut self,
        maker_order_id: OrderId,
        taker_order_id: OrderId,
        side: Side,
        price: Price,
        quantity: Quantity,
        timestamp: i64,
    ) -> Trade {
        let sequence = self.next_sequence();
        Trade::new(
            sequence,
            maker_order_id,
            taker_order_id,
            side,
            price,
            quantity,
            timestamp,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_trade() {
        let mut executor = MatchExecutor::new(1000);

        let trade = executor.execute_trade(
            OrderId::new("maker"),
            OrderId::new("taker"),
            Side::BUY,
            Price::from_u64(103),
            Quantity::new(500),
            1708123456789000000,
        );

        assert_eq!(trade.sequence, 1000);
        assert_eq!(trade.price, Price::from_u64(103));
        assert_eq!(trade.quantity, Quantity::new(500));
        assert_eq!(trade.executed_at, 1708123456789000000);
    }

    #[test]
    fn test_sequence_monotonic() {
        let mut executor = MatchExecutor::new(1000);

        let trade1 = executor.execute_trade(
            OrderId::new("m1"),
            OrderId::new("t1"),
            Side::BUY,
            Price::from_u64(103),
            Quantity::new(1),
            1708123456789000000,
        );
        let trade2 = executor.execute_trade(
            OrderId::new("m2"),
            OrderId::new("t2"),
            Side::SELL,
            Price::from_u64(104),
            Quantity::new(2),
            1708123456790000000,
        );

        assert_eq!(trade1.sequence, 1000);
        assert_eq!(trade2.sequence, 1001);
    }

    #[test]
    fn test_trade_ids_unique() {
        let mut executor = MatchExecutor::new(0);
        let a = executor.execute_trade(
            OrderId::new("m"),
            OrderId::new("t"),
            Side::BUY,
            Price::from_u64(1),
            Quantity::new(1),
            0,
        );
        let b = executor.execute_trade(
            OrderId::new("m"),
            OrderId::new("t"),
            Side::BUY,
            Price::from_u64(1),
            Quantity::new(1),
            0,
        );
        assert_ne!(a.trade_id, b.trade_id);
    }
}
