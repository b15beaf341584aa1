//! Unified error types for the range-amm library.
//!
//! All fallible operations across the crate return [`MathError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//!
//! Only the validated layer ([`crate::position`] and the constructors in
//! [`crate::domain`]) produces these errors.  The raw kernel in
//! [`crate::math`] is a trusted-input layer that never signals: out-of-contract
//! arguments propagate as IEEE 754 special values (NaN, ±∞) instead.

use thiserror::Error;

/// Convenience alias used by all fallible operations in the crate.
pub type Result<T> = core::result::Result<T, MathError>;

/// Unified error enum for validated position-math operations.
///
/// Each variant carries a static description of the rule that was violated.
///
/// # Examples
///
/// ```
/// use range_amm::domain::Price;
/// use range_amm::error::MathError;
///
/// let err = Price::new(-1.0).unwrap_err();
/// assert!(matches!(err, MathError::InvalidPrice(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MathError {
    /// A price was non-finite or non-positive.
    #[error("invalid price: {0}")]
    InvalidPrice(&'static str),

    /// Range bounds were not ordered `lower < upper`.
    #[error("invalid price range: {0}")]
    InvalidRange(&'static str),

    /// A token quantity was negative or non-finite.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A liquidity value was negative or non-finite.
    #[error("invalid liquidity: {0}")]
    InvalidLiquidity(&'static str),

    /// A formula produced a value outside the finite `f64` range.
    #[error("overflow: {0}")]
    Overflow(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = MathError::InvalidRange("lower bound must be less than upper bound");
        assert_eq!(
            err.to_string(),
            "invalid price range: lower bound must be less than upper bound"
        );
    }

    #[test]
    fn errors_are_comparable() {
        assert_eq!(
            MathError::Overflow("too large"),
            MathError::Overflow("too large")
        );
        assert_ne!(
            MathError::InvalidPrice("x"),
            MathError::InvalidQuantity("x")
        );
    }
}
