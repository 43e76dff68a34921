//! Matching logic module
//!
//! Implements price-time priority matching: the crossing and ranking
//! predicates plus trade record minting.

pub mod crossing;
pub mod executor;

pub use crossing::{crosses, ranks_ahead};
pub use executor::MatchExecutor;
