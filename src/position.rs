//! Validated position-level API over the raw kernel.
//!
//! The kernel in [`crate::math`] trusts its inputs.  The functions here are
//! the recommended library boundary: they validate arguments through the
//! [`crate::domain`] newtypes, delegate to the kernel verbatim, and reject
//! non-finite results.  For valid inputs every value returned is
//! bit-identical to what the kernel produces: validation guards the call,
//! it never re-derives or post-processes the number.
//!
//! Positions stay bare argument tuples; nothing here holds state between
//! calls, so all functions are safely callable from any number of threads.
//!
//! # Examples
//!
//! ```
//! use range_amm::domain::{Price, PriceRange};
//! use range_amm::position::{position_amounts, position_liquidity};
//!
//! let range = PriceRange::from_bounds(1000.0, 1500.0).expect("valid range");
//! let creation = Price::new(1250.0).expect("valid price");
//!
//! let l = position_liquidity(7.302967433402214, 10_000.0, creation, range)
//!     .expect("valid position");
//!
//! // Price drops close to the lower bound: holdings shift towards token0.
//! let later = Price::new(1001.0).expect("valid price");
//! let amounts = position_amounts(l, later, range).expect("projection succeeds");
//! assert!(amounts.token0() > 7.302967433402214);
//! assert!(amounts.token1() < 10_000.0);
//! ```

use crate::domain::{Liquidity, Price, PriceRange, TokenAmounts};
use crate::error::MathError;
use crate::math;

/// Returns the liquidity constant of a position created with `x` token0 and
/// `y` token1 at `price`, over `range`.
///
/// Equivalent to [`math::liquidity`] with validated arguments.
///
/// # Errors
///
/// Returns [`MathError::InvalidQuantity`] if `x` or `y` is negative or
/// non-finite, and [`MathError::Overflow`] if the formula result exceeds
/// the finite `f64` range (possible for extreme quantities or near-degenerate
/// ranges whose bounds share a square root).
pub fn position_liquidity(
    x: f64,
    y: f64,
    price: Price,
    range: PriceRange,
) -> crate::error::Result<Liquidity> {
    if !x.is_finite() || x < 0.0 {
        return Err(MathError::InvalidQuantity(
            "token0 quantity must be finite and non-negative",
        ));
    }
    if !y.is_finite() || y < 0.0 {
        return Err(MathError::InvalidQuantity(
            "token1 quantity must be finite and non-negative",
        ));
    }

    let l = math::liquidity(x, y, price.get(), range.lower().get(), range.upper().get());
    if !l.is_finite() {
        return Err(MathError::Overflow(
            "liquidity formula produced a non-finite value",
        ));
    }
    Liquidity::new(l)
}

/// Returns the amount of token0 held by `liquidity` at `price`.
///
/// Equivalent to [`math::amount_of_x`] with validated arguments; `price`
/// may lie outside `range` and is clamped by the kernel.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the result is not finite.
pub fn token0_amount(
    liquidity: Liquidity,
    price: Price,
    range: PriceRange,
) -> crate::error::Result<f64> {
    let x = math::amount_of_x(
        liquidity.get(),
        price.get(),
        range.lower().get(),
        range.upper().get(),
    );
    if !x.is_finite() {
        return Err(MathError::Overflow(
            "token0 projection produced a non-finite value",
        ));
    }
    Ok(x)
}

/// Returns the amount of token1 held by `liquidity` at `price`.
///
/// Equivalent to [`math::amount_of_y`] with validated arguments; `price`
/// may lie outside `range` and is clamped by the kernel.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if the result is not finite.
pub fn token1_amount(
    liquidity: Liquidity,
    price: Price,
    range: PriceRange,
) -> crate::error::Result<f64> {
    let y = math::amount_of_y(
        liquidity.get(),
        price.get(),
        range.lower().get(),
        range.upper().get(),
    );
    if !y.is_finite() {
        return Err(MathError::Overflow(
            "token1 projection produced a non-finite value",
        ));
    }
    Ok(y)
}

/// Returns both token holdings of `liquidity` at `price` as a pair.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if either projection is not finite.
pub fn position_amounts(
    liquidity: Liquidity,
    price: Price,
    range: PriceRange,
) -> crate::error::Result<TokenAmounts> {
    let x = token0_amount(liquidity, price, range)?;
    let y = token1_amount(liquidity, price, range)?;
    Ok(TokenAmounts::new(x, y))
}

/// Returns the token1-denominated value of `liquidity` at `price`:
/// the holdings are projected, then combined as `(token0 · price) + token1`.
///
/// This is the quantity compared before and after a price move to measure
/// a position's realized loss; the loss ratio itself is left to the caller
/// since the choice of baseline is a portfolio-level decision.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] if either projection is not finite.
pub fn position_value(
    liquidity: Liquidity,
    price: Price,
    range: PriceRange,
) -> crate::error::Result<f64> {
    let amounts = position_amounts(liquidity, price, range)?;
    Ok(amounts.value_at(price))
}

#[cfg(test)]
#[allow(clippy::panic, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math;

    const X: f64 = 7.302967433402214;
    const Y: f64 = 10_000.0;

    fn price(v: f64) -> Price {
        let Ok(p) = Price::new(v) else {
            panic!("valid price expected");
        };
        p
    }

    fn range() -> PriceRange {
        let Ok(r) = PriceRange::from_bounds(1000.0, 1500.0) else {
            panic!("valid range expected");
        };
        r
    }

    // -- agreement with the kernel ------------------------------------------

    #[test]
    fn liquidity_matches_kernel_bit_for_bit() {
        let Ok(l) = position_liquidity(X, Y, price(1250.0), range()) else {
            panic!("expected Ok");
        };
        assert_eq!(l.get(), math::liquidity(X, Y, 1250.0, 1000.0, 1500.0));
    }

    #[test]
    fn amounts_match_kernel_bit_for_bit() {
        let Ok(l) = position_liquidity(X, Y, price(1250.0), range()) else {
            panic!("expected Ok");
        };
        let Ok(amounts) = position_amounts(l, price(1001.0), range()) else {
            panic!("expected Ok");
        };
        assert_eq!(
            amounts.token0(),
            math::amount_of_x(l.get(), 1001.0, 1000.0, 1500.0)
        );
        assert_eq!(
            amounts.token1(),
            math::amount_of_y(l.get(), 1001.0, 1000.0, 1500.0)
        );
    }

    #[test]
    fn out_of_range_price_is_accepted_and_clamped() {
        let Ok(l) = position_liquidity(X, Y, price(1250.0), range()) else {
            panic!("expected Ok");
        };
        let Ok(below) = position_amounts(l, price(500.0), range()) else {
            panic!("expected Ok");
        };
        let Ok(at_lower) = position_amounts(l, price(1000.0), range()) else {
            panic!("expected Ok");
        };
        assert_eq!(below, at_lower);
        assert_eq!(below.token1(), 0.0);
    }

    #[test]
    fn value_uses_clamped_holdings_at_the_given_price() {
        let Ok(l) = position_liquidity(X, Y, price(1250.0), range()) else {
            panic!("expected Ok");
        };
        let c = price(1500.0);
        let Ok(value) = position_value(l, c, range()) else {
            panic!("expected Ok");
        };
        // All holdings are token1 at the upper bound, so the value is the
        // token1 amount itself.
        assert_eq!(value, 19040.69105618437);
    }

    // -- validation ---------------------------------------------------------

    #[test]
    fn negative_token0_rejected() {
        let Err(err) = position_liquidity(-1.0, Y, price(1250.0), range()) else {
            panic!("expected Err");
        };
        assert!(matches!(err, MathError::InvalidQuantity(_)));
    }

    #[test]
    fn negative_token1_rejected() {
        let Err(err) = position_liquidity(X, -1.0, price(1250.0), range()) else {
            panic!("expected Err");
        };
        assert!(matches!(err, MathError::InvalidQuantity(_)));
    }

    #[test]
    fn nan_quantity_rejected() {
        assert!(position_liquidity(f64::NAN, Y, price(1250.0), range()).is_err());
    }

    #[test]
    fn zero_quantities_are_valid() {
        let Ok(l) = position_liquidity(0.0, 0.0, price(1250.0), range()) else {
            panic!("expected Ok");
        };
        assert!(l.is_zero());
    }

    #[test]
    fn overflowing_liquidity_reported() {
        let Ok(r) = PriceRange::from_bounds(1.0, 4.0) else {
            panic!("valid range expected");
        };
        let Err(err) = position_liquidity(f64::MAX, 0.0, Price::ONE, r) else {
            panic!("expected Err");
        };
        assert!(matches!(err, MathError::Overflow(_)));
    }
}
