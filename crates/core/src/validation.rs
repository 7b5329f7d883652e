//! Construction-time validation rules for money, quantity and grade fields.
//!
//! Every check is pure: it returns the value unchanged on success so callers can
//! validate inline (`let qty = Rule::NonNegative.check("quantity", qty)?;`).

use rust_decimal::Decimal;

use crate::error::{DomainError, DomainResult};

/// Named validation rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rule {
    /// `value > 0` (deposit and withdrawal amounts).
    Positive,
    /// `value >= 0` (quantities, prices, opening balances).
    NonNegative,
    /// `0 <= value <= 100` (academic grades).
    Percentage,
}

/// Numeric types the validator understands.
pub trait Checkable: Copy + PartialOrd + core::fmt::Display {
    fn zero() -> Self;
    fn hundred() -> Self;
}

macro_rules! impl_checkable {
    ($t:ty, $zero:expr, $hundred:expr) => {
        impl Checkable for $t {
            fn zero() -> Self {
                $zero
            }

            fn hundred() -> Self {
                $hundred
            }
        }
    };
}

impl_checkable!(Decimal, Decimal::ZERO, Decimal::ONE_HUNDRED);
impl_checkable!(i64, 0, 100);
impl_checkable!(f64, 0.0, 100.0);

impl Rule {
    /// Check `value` against this rule.
    ///
    /// Comparisons are written so that unordered values (NaN) fail every rule.
    pub fn check<N: Checkable>(self, field: &str, value: N) -> DomainResult<N> {
        match self {
            Rule::Positive => {
                if value > N::zero() {
                    Ok(value)
                } else {
                    Err(DomainError::invalid_amount(field, value))
                }
            }
            Rule::NonNegative => {
                if value >= N::zero() {
                    Ok(value)
                } else {
                    Err(DomainError::validation(
                        field,
                        format!("{value} cannot be negative"),
                    ))
                }
            }
            Rule::Percentage => {
                if value >= N::zero() && value <= N::hundred() {
                    Ok(value)
                } else {
                    Err(DomainError::validation(
                        field,
                        format!("{value} is outside 0..=100"),
                    ))
                }
            }
        }
    }
}

/// Reject empty or whitespace-only text.
pub fn non_blank(field: &str, value: impl Into<String>) -> DomainResult<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(DomainError::validation(field, "cannot be empty"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn positive_rejects_zero_as_invalid_amount() {
        let err = Rule::Positive.check("deposit", dec!(0)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAmount { ref field, .. } if field == "deposit"));
    }

    #[test]
    fn non_negative_accepts_zero() {
        assert_eq!(Rule::NonNegative.check("quantity", 0i64).unwrap(), 0);
        assert_eq!(Rule::NonNegative.check("price", dec!(0.00)).unwrap(), dec!(0.00));
    }

    #[test]
    fn non_negative_failure_is_a_validation_error() {
        let err = Rule::NonNegative.check("quantity", -5i64).unwrap_err();
        match err {
            DomainError::Validation { field, .. } => assert_eq!(field, "quantity"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn percentage_bounds_are_inclusive() {
        assert!(Rule::Percentage.check("grade", 0.0).is_ok());
        assert!(Rule::Percentage.check("grade", 100.0).is_ok());
        assert!(Rule::Percentage.check("grade", 100.5).is_err());
        assert!(Rule::Percentage.check("grade", -0.1).is_err());
    }

    #[test]
    fn nan_fails_every_rule() {
        assert!(Rule::Positive.check("x", f64::NAN).is_err());
        assert!(Rule::NonNegative.check("x", f64::NAN).is_err());
        assert!(Rule::Percentage.check("x", f64::NAN).is_err());
    }

    #[test]
    fn non_blank_rejects_whitespace() {
        assert!(non_blank("name", "   ").is_err());
        assert_eq!(non_blank("name", "Ama").unwrap(), "Ama");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a passing check hands back exactly the input.
        #[test]
        fn check_returns_value_unchanged(v in 1i64..1_000_000i64) {
            prop_assert_eq!(Rule::Positive.check("amount", v).unwrap(), v);
            prop_assert_eq!(Rule::NonNegative.check("amount", v).unwrap(), v);
        }

        #[test]
        fn non_positive_is_always_invalid_amount(v in -1_000_000i64..=0i64) {
            let is_invalid_amount = matches!(
                Rule::Positive.check("amount", v),
                Err(DomainError::InvalidAmount { .. })
            );
            prop_assert!(is_invalid_amount);
        }
    }
}
