//! Property-based tests using `proptest` for the numeric kernel.
//!
//! Covers the kernel's testable properties across randomized input space:
//!
//! 1. **Edge totality** — token0 vanishes exactly at the upper bound,
//!    token1 exactly at the lower bound.
//! 2. **Clamp idempotence** — projecting at any price equals projecting at
//!    its clamped value, bit for bit.
//! 3. **Monotonicity** — token0 holdings never increase and token1
//!    holdings never decrease as the price rises through the range.
//! 4. **Round trip** — projecting the liquidity of a freshly created
//!    position at its creation price recovers the binding token balance.
//! 5. **Checked-layer agreement** — the validated API in `crate::position`
//!    returns bit-identical values to the kernel.
//!
//! Properties pinned by the reproducibility contract are asserted with
//! exact equality.  The round trip is not: it runs the formulas forwards
//! and backwards, so it accumulates a few ulps of legitimate rounding and
//! is compared with a relative tolerance instead.

use approx::relative_eq;
use proptest::prelude::*;

use super::liquidity_math::clamp;
use super::{amount_of_x, amount_of_y, liquidity, liquidity0, liquidity1};
use crate::domain::{Price, PriceRange};
use crate::position::{position_amounts, position_liquidity};

/// Relative tolerance for round-trip properties.
const ROUND_TRIP_TOLERANCE: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn quantity_strategy() -> impl Strategy<Value = f64> {
    1e-3..1e9f64
}

fn liquidity_strategy() -> impl Strategy<Value = f64> {
    0.0..1e12f64
}

/// A valid price range `(a, b)`: lower bound plus a multiplicative width.
fn range_strategy() -> impl Strategy<Value = (f64, f64)> {
    (1e-3..1e9f64, 1.001..1000.0f64).prop_map(|(a, factor)| (a, a * factor))
}

/// Interpolation parameter for a price strictly inside a range.
fn interior_strategy() -> impl Strategy<Value = f64> {
    0.001..0.999f64
}

fn price_between(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

// ---------------------------------------------------------------------------
// Edge totality and clamping
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    #[allow(clippy::float_cmp)]
    fn prop_edge_totality((a, b) in range_strategy(), l in liquidity_strategy()) {
        prop_assert_eq!(amount_of_x(l, b, a, b), 0.0);
        prop_assert_eq!(amount_of_y(l, a, a, b), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn prop_projection_at_clamped_price_is_identical(
        (a, b) in range_strategy(),
        l in liquidity_strategy(),
        p in 1e-4..1e12f64,
    ) {
        let clamped = clamp(p, a, b);
        prop_assert_eq!(amount_of_x(l, p, a, b), amount_of_x(l, clamped, a, b));
        prop_assert_eq!(amount_of_y(l, p, a, b), amount_of_y(l, clamped, a, b));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn prop_out_of_range_prices_are_fully_converted(
        (a, b) in range_strategy(),
        l in liquidity_strategy(),
    ) {
        // Below the range all value is token0, above it all token1.
        prop_assert_eq!(amount_of_y(l, a * 0.5, a, b), 0.0);
        prop_assert_eq!(amount_of_x(l, b * 2.0, a, b), 0.0);
    }
}

// ---------------------------------------------------------------------------
// Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_token0_non_increasing_in_price(
        (a, b) in range_strategy(),
        l in liquidity_strategy(),
        t1 in interior_strategy(),
        t2 in interior_strategy(),
    ) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let x_low = amount_of_x(l, price_between(a, b, lo), a, b);
        let x_high = amount_of_x(l, price_between(a, b, hi), a, b);
        prop_assert!(
            x_low >= x_high,
            "token0 grew with price: {} < {}",
            x_low, x_high
        );
    }

    #[test]
    fn prop_token1_non_decreasing_in_price(
        (a, b) in range_strategy(),
        l in liquidity_strategy(),
        t1 in interior_strategy(),
        t2 in interior_strategy(),
    ) {
        let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        let y_low = amount_of_y(l, price_between(a, b, lo), a, b);
        let y_high = amount_of_y(l, price_between(a, b, hi), a, b);
        prop_assert!(
            y_low <= y_high,
            "token1 shrank with price: {} > {}",
            y_low, y_high
        );
    }

    #[test]
    fn prop_amounts_in_range_are_non_negative(
        (a, b) in range_strategy(),
        l in liquidity_strategy(),
        t in interior_strategy(),
    ) {
        let p = price_between(a, b, t);
        prop_assert!(amount_of_x(l, p, a, b) >= 0.0);
        prop_assert!(amount_of_y(l, p, a, b) >= 0.0);
    }
}

// ---------------------------------------------------------------------------
// Round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_round_trip_recovers_binding_side(
        (a, b) in range_strategy(),
        x in quantity_strategy(),
        y in quantity_strategy(),
        t in interior_strategy(),
    ) {
        let p = price_between(a, b, t);
        let l = liquidity(x, y, p, a, b);
        prop_assert!(l >= 0.0);

        // Only the side that constrained the min is recovered exactly; the
        // other side was over-supplied at creation.
        if liquidity0(x, p, b) <= liquidity1(y, a, p) {
            let x_back = amount_of_x(l, p, a, b);
            prop_assert!(
                relative_eq!(x_back, x, max_relative = ROUND_TRIP_TOLERANCE),
                "token0 not recovered: {} vs {}",
                x_back, x
            );
        } else {
            let y_back = amount_of_y(l, p, a, b);
            prop_assert!(
                relative_eq!(y_back, y, max_relative = ROUND_TRIP_TOLERANCE),
                "token1 not recovered: {} vs {}",
                y_back, y
            );
        }
    }

    #[test]
    fn prop_projected_amounts_never_exceed_deposits(
        (a, b) in range_strategy(),
        x in quantity_strategy(),
        y in quantity_strategy(),
        t in interior_strategy(),
    ) {
        let p = price_between(a, b, t);
        let l = liquidity(x, y, p, a, b);
        let x_back = amount_of_x(l, p, a, b);
        let y_back = amount_of_y(l, p, a, b);
        prop_assert!(x_back <= x * (1.0 + ROUND_TRIP_TOLERANCE));
        prop_assert!(y_back <= y * (1.0 + ROUND_TRIP_TOLERANCE));
    }
}

// ---------------------------------------------------------------------------
// Checked layer agreement
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    #[allow(clippy::float_cmp)]
    fn prop_checked_layer_matches_kernel(
        (a, b) in range_strategy(),
        x in quantity_strategy(),
        y in quantity_strategy(),
        t in interior_strategy(),
    ) {
        let p = price_between(a, b, t);
        let Ok(range) = PriceRange::from_bounds(a, b) else {
            return Ok(());
        };
        let Ok(price) = Price::new(p) else {
            return Ok(());
        };

        let Ok(l) = position_liquidity(x, y, price, range) else {
            return Ok(());
        };
        prop_assert_eq!(l.get(), liquidity(x, y, p, a, b));

        let Ok(amounts) = position_amounts(l, price, range) else {
            return Ok(());
        };
        prop_assert_eq!(amounts.token0(), amount_of_x(l.get(), p, a, b));
        prop_assert_eq!(amounts.token1(), amount_of_y(l.get(), p, a, b));
    }
}
