//! Fixed-point numeric types for prices and quantities
//!
//! Prices use rust_decimal for deterministic arithmetic (no floating-point
//! errors). Quantities are whole units of the instrument.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Price of one unit of the instrument
///
/// Backed by `Decimal` for exact comparison and arithmetic. The endpoints of
/// the band `(MIN, MAX)` are reserved as market-order sentinels: a SELL
/// market order carries the lowest representable price, a BUY market order
/// the highest, so either crosses all resting opposite liquidity before it
/// would rest. Valid limit prices lie strictly inside the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Lowest representable price; the effective price of a SELL market order
    pub fn min_price() -> Self {
        Self(Decimal::ZERO)
    }

    /// Highest representable price; the effective price of a BUY market order
    pub fn max_price() -> Self {
        Self(Decimal::from(100_000_000_u64))
    }

    /// Create a price from an integer number of quote units
    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Create a price from an exact decimal value
    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Parse a price from its decimal string form
    pub fn from_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Decimal::from_str(s).map(Self)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Check whether this price lies strictly inside the valid limit band
    pub fn is_valid_limit(&self) -> bool {
        *self > Self::min_price() && *self < Self::max_price()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity of the instrument, in whole units
///
/// Strictly positive for a live order; monotonically non-increasing while
/// matching decrements it in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Create a quantity from a unit count
    pub fn new(units: u64) -> Self {
        Self(units)
    }

    /// The zero quantity
    pub fn zero() -> Self {
        Self(0)
    }

    /// Check whether this quantity is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Get the unit count
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The smaller of two quantities
    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    /// Subtract, clamping at zero
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
