//! Quantity validation for order entry
//!
//! These are the only fallible operations in the engine: resolution misses
//! and incomplete selections are plain absent values, but a quantity outside
//! the sellable range is a real error the form has to show the user.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::OrderLine;

/// Why a requested quantity was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("requested quantity must be at least 1")]
    BelowMinimum,
    #[error("requested quantity exceeds available stock")]
    ExceedsAvailable,
}

/// Why an order line was rejected at submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OrderLineError {
    #[error(transparent)]
    Quantity(#[from] QuantityError),
    #[error("unit price cannot be negative")]
    NegativeUnitPrice,
}

/// Check a requested quantity against the available quantity computed from
/// the current ledger snapshot.
pub fn validate_requested_quantity(requested: i64, available: i64) -> Result<(), QuantityError> {
    if requested < 1 {
        return Err(QuantityError::BelowMinimum);
    }
    if requested > available {
        return Err(QuantityError::ExceedsAvailable);
    }
    Ok(())
}

/// Full order-line check, applied again at submission time.
///
/// Availability can change between selection and submission, so the caller
/// passes the figure from whichever snapshot it currently trusts.
pub fn validate_order_line(line: &OrderLine, available: i64) -> Result<(), OrderLineError> {
    validate_requested_quantity(line.quantity, available)?;
    if line.unit_price < Decimal::ZERO {
        return Err(OrderLineError::NegativeUnitPrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderItemRef;
    use chrono::NaiveDate;

    #[test]
    fn test_below_minimum() {
        assert_eq!(
            validate_requested_quantity(0, 10),
            Err(QuantityError::BelowMinimum)
        );
        assert_eq!(
            validate_requested_quantity(-3, 10),
            Err(QuantityError::BelowMinimum)
        );
    }

    #[test]
    fn test_exceeds_available() {
        assert_eq!(
            validate_requested_quantity(11, 10),
            Err(QuantityError::ExceedsAvailable)
        );
    }

    #[test]
    fn test_exact_available_is_ok() {
        assert!(validate_requested_quantity(10, 10).is_ok());
        assert!(validate_requested_quantity(1, 10).is_ok());
    }

    #[test]
    fn test_zero_available_rejects_everything_positive() {
        assert_eq!(
            validate_requested_quantity(1, 0),
            Err(QuantityError::ExceedsAvailable)
        );
    }

    fn line(quantity: i64, unit_price: Decimal) -> OrderLine {
        OrderLine {
            item: OrderItemRef::Ledger {
                id: "MAT-1".to_string(),
            },
            quantity,
            unit_price,
            order_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        }
    }

    #[test]
    fn test_order_line_quantity_recheck() {
        assert_eq!(
            validate_order_line(&line(5, Decimal::ONE), 3),
            Err(OrderLineError::Quantity(QuantityError::ExceedsAvailable))
        );
        assert!(validate_order_line(&line(3, Decimal::ONE), 3).is_ok());
    }

    #[test]
    fn test_order_line_negative_price() {
        assert_eq!(
            validate_order_line(&line(1, Decimal::NEGATIVE_ONE), 10),
            Err(OrderLineError::NegativeUnitPrice)
        );
    }
}
