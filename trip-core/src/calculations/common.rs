//! Shared helpers for the budget and payment calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to exactly two decimal places, half-up.
///
/// Values at exactly 0.005 round away from zero, per standard financial
/// convention.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use trip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1199.994)), dec!(1199.99));
/// assert_eq!(round_half_up(dec!(1199.995)), dec!(1200.00));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Treats an absent amount as zero.
///
/// Form fields arrive as `None` when the operator never touched them; every
/// calculation coerces them silently instead of erroring.
pub fn or_zero(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO)
}

/// Returns the larger of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use trip_core::calculations::common::max;
///
/// assert_eq!(max(dec!(500.00), dec!(0.00)), dec!(500.00));
/// assert_eq!(max(dec!(-200.00), dec!(0.00)), dec!(0.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}
