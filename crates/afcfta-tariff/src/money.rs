//! Rounding conventions shared by every stage.
//!
//! Amounts and percentage rates are both carried to 2 decimal places,
//! midpoint away from zero (commercial rounding).

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use afcfta_core::{EngineError, EngineResult};

/// Percent denominator.
pub const HUNDRED: Decimal = dec!(100);

/// Largest merchandise value accepted by default.
pub const MAX_TRADE_VALUE: Decimal = dec!(1000000000000);

/// Round a monetary amount to cents.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a percentage rate to 2 decimal places.
pub fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `amount × rate / 100`, rounded to cents. `None` when the product
/// overflows.
pub fn percent_of(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount
        .checked_mul(rate)?
        .checked_div(HUNDRED)
        .map(round_money)
}

/// Round a merchandise value to cents and check it lies in `(0, max]`.
///
/// The check runs on the rounded value, so sub-cent inputs are rejected
/// rather than becoming zero downstream.
pub fn checked_trade_value(value: Decimal, max: Decimal) -> EngineResult<Decimal> {
    let rounded = round_money(value);
    if rounded <= Decimal::ZERO {
        return Err(EngineError::InvalidTradeValue {
            field: "value",
            value,
            reason: "must be at least 0.01".to_string(),
        });
    }
    if rounded > max {
        return Err(EngineError::InvalidTradeValue {
            field: "value",
            value,
            reason: format!("exceeds maximum of {max}"),
        });
    }
    Ok(rounded)
}
