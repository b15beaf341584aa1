//! # Range AMM
//!
//! Concentrated-liquidity position math for Uniswap v3-style pools:
//! derive a position's liquidity constant from its capital and price
//! range, then project its token holdings at any later price.
//!
//! The whole library is a pure numeric core with no pool state and no
//! I/O: every operation is a side-effect-free function of its arguments,
//! safely callable from any number of threads.
//!
//! # The math
//!
//! A position deposits `x` token0 and `y` token1 at price `p` into the
//! range `[a, b]` (prices of token0 in token1 units).  Its liquidity
//! constant is
//!
//! ```text
//! L = x·(√a·√b)/(√b−√a)                    p ≤ a   (all token0)
//! L = y/(√b−√a)                            p ≥ b   (all token1)
//! L = min(x·(√p·√b)/(√b−√p), y/(√p−√a))    a < p < b
//! ```
//!
//! and at any later price `c`, clamped into `[a, b]`, the holdings are
//!
//! ```text
//! amount of token0 = L·(√b−√c)/(√c·√b)
//! amount of token1 = L·(√c−√a)
//! ```
//!
//! Outside the range the position is fully converted: below `a` it is all
//! token0, above `b` all token1.
//!
//! # Two API layers
//!
//! | Layer | Module | Contract |
//! |-------|--------|----------|
//! | Raw kernel | [`math`] | Bare `f64`, no validation, bit-exact against reference vectors |
//! | Checked API | [`position`] | Validated arguments, `Result` returns, identical numerics |
//!
//! The kernel is compared to reference data by exact equality, so it
//! commits to a fixed evaluation order (see [`math`]); the checked layer
//! only guards calls and never alters a valid result.
//!
//! # Quick Start
//!
//! ```rust
//! use range_amm::domain::{Price, PriceRange};
//! use range_amm::position::{position_amounts, position_liquidity};
//!
//! // A position created at price 1250 over the range [1000, 1500].
//! let range = PriceRange::from_bounds(1000.0, 1500.0).expect("valid range");
//! let creation = Price::new(1250.0).expect("valid price");
//! let l = position_liquidity(7.302967433402214, 10_000.0, creation, range)
//!     .expect("valid position");
//!
//! // The price falls to 1001: holdings have rotated towards token0.
//! let later = Price::new(1001.0).expect("valid price");
//! let amounts = position_amounts(l, later, range).expect("projection succeeds");
//! assert!(amounts.token0() > 15.5);
//! assert!(amounts.token1() < 43.0);
//!
//! // At the upper bound the position is all token1.
//! let upper = Price::new(1500.0).expect("valid price");
//! let amounts = position_amounts(l, upper, range).expect("projection succeeds");
//! assert_eq!(amounts.token0(), 0.0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  raw f64 in/out, or validated domain types
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │   position    │  validates and delegates, never re-derives
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │     math      │  liquidity / amount formulas, fixed evaluation order
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    domain     │  Price, PriceRange, Liquidity, TokenAmounts
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`math`] | Raw `f64` kernel: [`liquidity`](math::liquidity), [`amount_of_x`](math::amount_of_x), [`amount_of_y`](math::amount_of_y) |
//! | [`position`] | Checked API: [`position_liquidity`](position::position_liquidity), [`position_amounts`](position::position_amounts) |
//! | [`domain`] | Newtype value types: [`Price`](domain::Price), [`PriceRange`](domain::PriceRange), [`Liquidity`](domain::Liquidity), [`TokenAmounts`](domain::TokenAmounts) |
//! | [`error`] | [`MathError`](error::MathError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod domain;
pub mod error;
pub mod math;
pub mod position;
pub mod prelude;
