//! Token holdings of a position at a given price.

use core::fmt;

use super::Price;

/// The pair of token amounts a position holds at a particular price.
///
/// Produced by [`position_amounts`](crate::position::position_amounts);
/// recomputed fresh on every projection and never cached.  At or below
/// the range's lower bound `token1` is exactly zero, at or above the upper
/// bound `token0` is exactly zero.
///
/// # Examples
///
/// ```
/// use range_amm::domain::{Liquidity, Price, PriceRange};
/// use range_amm::position::position_amounts;
///
/// let range = PriceRange::from_bounds(1000.0, 1500.0).expect("valid range");
/// let l = Liquidity::new(2679.1246264404454).expect("valid liquidity");
/// let edge = Price::new(1500.0).expect("valid price");
///
/// let amounts = position_amounts(l, edge, range).expect("projection succeeds");
/// assert_eq!(amounts.token0(), 0.0);
/// assert!(amounts.token1() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenAmounts {
    token0: f64,
    token1: f64,
}

impl TokenAmounts {
    pub(crate) const fn new(token0: f64, token1: f64) -> Self {
        Self { token0, token1 }
    }

    /// Returns the amount of token0 (the asset priced by [`Price`]).
    #[must_use]
    pub const fn token0(&self) -> f64 {
        self.token0
    }

    /// Returns the amount of token1 (the quote asset).
    #[must_use]
    pub const fn token1(&self) -> f64 {
        self.token1
    }

    /// Returns the total value of the holdings in token1 units at the
    /// given price: `(token0 * price) + token1`.
    ///
    /// The multiply-then-add grouping is part of the reproducibility
    /// contract (see [`crate::math`]); realized-loss style comparisons
    /// depend on it bit for bit.
    #[must_use]
    pub fn value_at(&self, price: Price) -> f64 {
        (self.token0 * price.get()) + self.token1
    }
}

impl fmt::Display for TokenAmounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(token0={}, token1={})", self.token0, self.token1)
    }
}
