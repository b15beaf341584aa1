//! Convenience re-exports for common types and functions.
//!
//! The prelude provides a single import to bring the whole library surface
//! into scope:
//!
//! ```rust
//! use range_amm::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the error types, the raw kernel
//! functions, and the checked position API.

// Re-export domain types
pub use crate::domain::{Liquidity, Price, PriceRange, TokenAmounts};

// Re-export error types
pub use crate::error::{MathError, Result};

// Re-export the raw kernel
pub use crate::math::{amount_of_x, amount_of_y, liquidity, liquidity0, liquidity1};

// Re-export the checked position API
pub use crate::position::{
    position_amounts, position_liquidity, position_value, token0_amount, token1_amount,
};
