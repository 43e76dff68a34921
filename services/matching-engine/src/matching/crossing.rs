//! Crossing and ranking predicates
//!
//! Both predicates are parameterized by the side of the book that holds the
//! resting levels. Crossing decides whether an incoming taker may trade
//! against a level; ranking decides where a same-side order inserts.

use types::numeric::Price;
use types::order::Side;

/// Check whether a taker's price is marketable against a level of `book_side`
///
/// True exactly when trading at the level's price would violate neither
/// party's limit: a taker crosses a SELL level when its price is at or above
/// the level, and a BUY level when its price is at or below it. Equal prices
/// cross: a buy at exactly the ask fills rather than resting a crossed book.
pub fn crosses(book_side: Side, taker_price: Price, level_price: Price) -> bool {
    match book_side {
        Side::SELL => taker_price >= level_price,
        Side::BUY => taker_price <= level_price,
    }
}

/// Check whether a same-side order outranks a level for insertion
///
/// True iff the order's price is strictly better than the level's in the
/// side's direction: higher for BUY, lower for SELL. Used only to find the
/// insertion point, never to trigger a trade.
pub fn ranks_ahead(book_side: Side, order_price: Price, level_price: Price) -> bool {
    match book_side {
        Side::BUY => order_price > level_price,
        Side::SELL => order_price < level_price,
    }
}
