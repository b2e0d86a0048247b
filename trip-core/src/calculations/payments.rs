//! Passenger payment plan reconciliation.
//!
//! A passenger either pays the trip price in one lump sum or spreads it
//! over a schedule of twelve dated slots: the deposit (slot 0) followed by
//! installments numbered 2 through 12 (slot `i` is installment `i + 1`; the
//! off-by-one numbering is historical and stored rows depend on it).
//!
//! The outstanding balance is the trip price minus everything recorded on
//! the schedule, floored at zero; in lump-sum mode it is always zero.
//! Installment dates are informational and never affect the balance.
//!
//! Every operation takes a plan by reference and returns an updated copy
//! with the balance already reconciled, so callers can never observe a
//! stale balance.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use trip_core::PaymentPlan;
//! use trip_core::calculations::payments;
//!
//! let plan = PaymentPlan {
//!     lump_sum: false,
//!     ..PaymentPlan::new(dec!(1200.00))
//! };
//!
//! let plan = payments::set_installment(&plan, 0, dec!(400.00)).unwrap();
//! let plan = payments::set_installment(&plan, 1, dec!(300.00)).unwrap();
//!
//! assert_eq!(plan.outstanding_balance, dec!(500.00));
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{max, or_zero, round_half_up};
use crate::models::{INSTALLMENT_SLOTS, Installment, PaymentPlan};

/// Errors that can occur while editing a payment plan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentPlanError {
    /// Installment slot index outside the deposit plus installments 2–12.
    /// A contract violation by the caller; the write is not attempted.
    #[error("installment slot {0} is out of range (valid slots are 0 through 11)")]
    InvalidIndex(usize),
}

/// Outstanding balance for a trip price and a set of recorded payments.
///
/// Lump-sum mode short-circuits to zero. Otherwise the balance is the trip
/// price minus the sum of recorded amounts (absent amounts count as zero),
/// floored at zero. Installment dates are ignored.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use trip_core::Installment;
/// use trip_core::calculations::payments::outstanding_balance;
///
/// let installments = [
///     Installment { date: None, amount: Some(dec!(400.00)) },
///     Installment { date: None, amount: Some(dec!(300.00)) },
/// ];
///
/// assert_eq!(
///     outstanding_balance(dec!(1200.00), false, &installments),
///     dec!(500.00)
/// );
/// assert_eq!(
///     outstanding_balance(dec!(1200.00), true, &installments),
///     dec!(0)
/// );
/// ```
pub fn outstanding_balance(
    trip_price: Decimal,
    lump_sum: bool,
    installments: &[Installment],
) -> Decimal {
    if lump_sum {
        return Decimal::ZERO;
    }

    let paid: Decimal = installments
        .iter()
        .map(|installment| or_zero(installment.amount))
        .sum();

    max(round_half_up(trip_price - paid), Decimal::ZERO)
}

/// Records one installment amount and reconciles the balance.
///
/// Slot 0 is the deposit; slots 1–11 are installments 2–12.
///
/// # Errors
///
/// Returns [`PaymentPlanError::InvalidIndex`] for a slot outside the
/// schedule; the plan is left untouched.
pub fn set_installment(
    plan: &PaymentPlan,
    index: usize,
    amount: Decimal,
) -> Result<PaymentPlan, PaymentPlanError> {
    check_slot(index)?;

    let mut updated = plan.clone();
    updated.installments[index].amount = Some(amount);
    updated.outstanding_balance =
        outstanding_balance(updated.trip_price, updated.lump_sum, &updated.installments);

    Ok(updated)
}

/// Records one installment date. Dates are informational; the balance is
/// not affected.
///
/// # Errors
///
/// Returns [`PaymentPlanError::InvalidIndex`] for a slot outside the
/// schedule.
pub fn set_installment_date(
    plan: &PaymentPlan,
    index: usize,
    date: Option<NaiveDate>,
) -> Result<PaymentPlan, PaymentPlanError> {
    check_slot(index)?;

    let mut updated = plan.clone();
    updated.installments[index].date = date;

    Ok(updated)
}

/// Switches lump-sum mode on or off.
///
/// Enabling zeroes the balance and stamps `today` as the lump-sum payment
/// date; the stamp is a default the caller may overwrite on the returned
/// plan. Disabling clears the stamp and immediately recomputes the balance
/// from whatever installment amounts are recorded, so the zero balance of
/// lump-sum mode never lingers.
///
/// The current date is a parameter; the engine never reads the clock.
pub fn toggle_lump_sum(
    plan: &PaymentPlan,
    enabled: bool,
    today: NaiveDate,
) -> PaymentPlan {
    let mut updated = plan.clone();
    updated.lump_sum = enabled;

    if enabled {
        updated.lump_sum_date = Some(today);
        updated.outstanding_balance = Decimal::ZERO;
    } else {
        updated.lump_sum_date = None;
        updated.outstanding_balance =
            outstanding_balance(updated.trip_price, false, &updated.installments);
    }

    updated
}

/// Re-links the plan to a new trip price and reconciles the balance.
///
/// Used when a passenger is moved to a different trip (the price follows
/// the target trip's suggested price); the recorded installments stay.
pub fn set_trip_price(
    plan: &PaymentPlan,
    trip_price: Decimal,
) -> PaymentPlan {
    let mut updated = plan.clone();
    updated.trip_price = trip_price;
    updated.outstanding_balance =
        outstanding_balance(trip_price, updated.lump_sum, &updated.installments);

    updated
}

/// Display label for a slot, preserving the historical numbering: slot 0
/// is the deposit, slot `i` is "installment `i + 1`".
///
/// # Errors
///
/// Returns [`PaymentPlanError::InvalidIndex`] for a slot outside the
/// schedule.
pub fn slot_label(index: usize) -> Result<String, PaymentPlanError> {
    check_slot(index)?;

    if index == 0 {
        Ok("deposit".to_string())
    } else {
        Ok(format!("installment {}", index + 1))
    }
}

fn check_slot(index: usize) -> Result<(), PaymentPlanError> {
    if index >= INSTALLMENT_SLOTS {
        return Err(PaymentPlanError::InvalidIndex(index));
    }
    Ok(())
}
