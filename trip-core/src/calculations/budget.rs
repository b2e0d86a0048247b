//! Trip budget calculation: category totals, capacity, pricing and profit.
//!
//! This module derives a complete financial snapshot from the raw line items
//! of one trip. Every category total is an independent closed-form sum:
//!
//! | category        | formula |
//! |-----------------|---------|
//! | Fees            | city fee + local guide fee + other fees + parking |
//! | Drivers         | (lunches + dinners) × meal unit price × driver count, plus transfer count × transfer unit price |
//! | Transfers       | Σ over 3 slots of quantity × unit price |
//! | Transport       | freight + drivers + transfers |
//! | Lodging         | nights × unit price × (seats + drivers) + other services |
//! | Tours           | Σ over 3 slots of quantity × unit price |
//! | Gifts & extras  | seat count × gift unit price + three extra amounts |
//! | Raffles         | Σ over 3 slots of quantity × unit price |
//! | Misc expenses   | passthrough |
//! | Other revenue   | two flat amounts, added to revenue, never to expense |
//!
//! On top of the expense total, the seat capacity of the selected vehicle
//! yields the paying headcount, which drives the break-even price, the
//! suggested sale price (break-even plus margin, unless the operator has
//! set a price by hand), total revenue and gross profit.
//!
//! The calculation is a pure function of its inputs: it holds no state
//! between calls and may be re-invoked on every keystroke of the owning
//! form. The caller decides when the operator's hand-edited price wins via
//! [`PricingMode`]; passing [`PricingMode::Computed`] is the explicit
//! "recompute" escape hatch.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use trip_core::{TripBudget, VehicleType};
//! use trip_core::calculations::{BudgetCalculator, BudgetConfig, PricingMode};
//!
//! let budget = TripBudget {
//!     vehicle_type: Some(VehicleType::Bus),
//!     misc_expenses: Some(dec!(43000.00)),
//!     ..TripBudget::default()
//! };
//!
//! let calculator = BudgetCalculator::new(BudgetConfig::default());
//! let financials = calculator.calculate(&budget, PricingMode::Computed).unwrap();
//!
//! // 46 seats, 2 guide-reserved, 1 promotional: 43 paying.
//! assert_eq!(financials.paying_count, 43);
//! assert_eq!(financials.break_even_price, dec!(1000.00));
//! assert_eq!(financials.suggested_price, dec!(1200.00));
//! assert_eq!(financials.total_revenue, dec!(51600.00));
//! assert_eq!(financials.gross_profit, dec!(8600.00));
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::capacity::resolve_capacity;
use crate::calculations::common::{or_zero, round_half_up};
use crate::models::{LineItem, TripBudget};

/// Errors that can occur during budget calculations.
///
/// All numeric edge cases (missing fields, zero capacity, zero paying
/// seats) resolve to defined zero outputs; only an invalid calculator
/// configuration is an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BudgetError {
    /// The pricing margin must be non-negative.
    #[error("pricing margin must be non-negative, got {0}")]
    InvalidMargin(Decimal),

    /// The default driver meal price must be non-negative.
    #[error("default driver meal price must be non-negative, got {0}")]
    InvalidDefaultMealPrice(Decimal),
}

/// Configuration for the budget calculator.
///
/// The defaults match the operator's long-standing conventions: a 20% sale
/// margin over break-even, a 30-per-meal driver allowance and a single
/// driver when the form does not say otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Margin applied over the break-even price for the suggested price,
    /// as a fraction (0.20 = 20%).
    pub margin: Decimal,

    /// Meal allowance per driver meal when the budget leaves the unit
    /// price blank.
    pub default_driver_meal_price: Decimal,

    /// Driver headcount assumed when the budget leaves it blank.
    pub default_driver_count: u32,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            margin: Decimal::new(20, 2),
            default_driver_meal_price: Decimal::from(30),
            default_driver_count: 1,
        }
    }
}

impl BudgetConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError`] if `margin` or `default_driver_meal_price`
    /// is negative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use trip_core::calculations::{BudgetConfig, BudgetError};
    ///
    /// let config = BudgetConfig {
    ///     margin: dec!(-0.20),
    ///     ..BudgetConfig::default()
    /// };
    ///
    /// assert_eq!(config.validate(), Err(BudgetError::InvalidMargin(dec!(-0.20))));
    /// ```
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.margin < Decimal::ZERO {
            return Err(BudgetError::InvalidMargin(self.margin));
        }
        if self.default_driver_meal_price < Decimal::ZERO {
            return Err(BudgetError::InvalidDefaultMealPrice(
                self.default_driver_meal_price,
            ));
        }
        Ok(())
    }
}

/// How the suggested price is determined for one calculation pass.
///
/// The caller states, per call, whether the stored price is an operator
/// edit that must survive recomputation. There is no ambient "price was
/// hand-edited" signal anywhere else; this parameter is the whole channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingMode {
    /// Derive the suggested price from break-even plus margin.
    Computed,
    /// Pass the operator's hand-edited price through unchanged. A
    /// non-positive value is ignored and the price is computed instead.
    ManualOverride(Decimal),
}

impl PricingMode {
    /// Derives the mode from the stored budget: a positive stored
    /// suggested price is an operator edit and stays authoritative.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use trip_core::TripBudget;
    /// use trip_core::calculations::PricingMode;
    ///
    /// let untouched = TripBudget::default();
    /// assert_eq!(PricingMode::for_budget(&untouched), PricingMode::Computed);
    ///
    /// let edited = TripBudget {
    ///     suggested_price: Some(dec!(1500.00)),
    ///     ..TripBudget::default()
    /// };
    /// assert_eq!(
    ///     PricingMode::for_budget(&edited),
    ///     PricingMode::ManualOverride(dec!(1500.00))
    /// );
    /// ```
    pub fn for_budget(budget: &TripBudget) -> Self {
        match budget.suggested_price {
            Some(price) if price > Decimal::ZERO => Self::ManualOverride(price),
            _ => Self::Computed,
        }
    }
}

/// Complete financial snapshot derived from one [`TripBudget`].
///
/// Carries the per-category totals plus the intermediate values the trip
/// form displays alongside them. `drivers` and `transfers` are already
/// bundled into `transport`; they are kept for transparency only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripFinancials {
    // Per-category expense totals
    pub fees: Decimal,
    pub transport: Decimal,
    pub drivers: Decimal,
    pub transfers: Decimal,
    pub lodging: Decimal,
    pub tours: Decimal,
    pub gifts_and_extras: Decimal,
    pub raffles: Decimal,
    pub misc_expenses: Decimal,
    pub other_revenue: Decimal,

    // Intermediate values kept for display transparency
    pub driver_meals_total: Decimal,
    pub driver_transfers_total: Decimal,
    pub night_count: u32,
    pub lodging_daily_total: Decimal,
    pub gift_count: u32,
    pub gifts_total: Decimal,

    // Headcounts
    pub seat_count: u32,
    pub guide_reserved_seats: u32,
    pub promotional_seats: u32,
    pub guest_count: u32,
    pub non_paying_count: u32,
    pub paying_count: u32,

    // Financial summary
    pub total_expense: Decimal,
    pub break_even_price: Decimal,
    pub suggested_price: Decimal,
    pub total_revenue: Decimal,
    pub gross_profit: Decimal,
}

/// Calculator for the trip budget.
///
/// Encapsulates the pricing configuration and derives a [`TripFinancials`]
/// snapshot from a [`TripBudget`]. Stateless between calls; safe to invoke
/// from any thread on every form change.
#[derive(Debug, Clone)]
pub struct BudgetCalculator {
    config: BudgetConfig,
}

impl BudgetCalculator {
    /// Creates a new budget calculator with the given configuration.
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    /// Derives the complete financial snapshot for one budget.
    ///
    /// This is the main entry point. It validates the configuration, sums
    /// each expense category, resolves the vehicle capacity and computes
    /// the pricing block. Missing numeric inputs count as zero throughout;
    /// a budget with no vehicle selected produces an all-zero snapshot
    /// rather than failing.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError`] if the configuration is invalid. With
    /// [`BudgetConfig::default()`] this cannot happen.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use trip_core::{TripBudget, VehicleType};
    /// use trip_core::calculations::{BudgetCalculator, BudgetConfig, PricingMode};
    ///
    /// let budget = TripBudget {
    ///     vehicle_type: Some(VehicleType::Van),
    ///     freight: Some(dec!(2800.00)),
    ///     ..TripBudget::default()
    /// };
    ///
    /// let calculator = BudgetCalculator::new(BudgetConfig::default());
    /// let financials = calculator.calculate(&budget, PricingMode::Computed).unwrap();
    ///
    /// // 15 seats, 1 guide-reserved: 14 paying.
    /// assert_eq!(financials.paying_count, 14);
    /// assert_eq!(financials.break_even_price, dec!(200.00));
    /// assert_eq!(financials.suggested_price, dec!(240.00));
    /// ```
    pub fn calculate(
        &self,
        budget: &TripBudget,
        pricing: PricingMode,
    ) -> Result<TripFinancials, BudgetError> {
        self.config.validate()?;

        let capacity = resolve_capacity(budget.vehicle_type);
        let non_paying_count = capacity.non_paying_count();
        let paying_count = capacity.paying_count();

        let driver_count = budget
            .driver_count
            .unwrap_or(self.config.default_driver_count);

        // Category totals; each one is an independent closed-form sum.
        let fees = self.fees_total(budget);

        let driver_meals_total = self.driver_meals_total(budget, driver_count);
        let driver_transfers_total = self.driver_transfers_total(budget);
        let drivers = round_half_up(driver_meals_total + driver_transfers_total);

        let transfers = self.slot_total(&budget.transfers);

        // Transport bundles freight, driver costs and transfers.
        let transport = round_half_up(or_zero(budget.freight) + drivers + transfers);

        let night_count = self.night_count(budget.departure_date, budget.return_date);
        let lodging_daily_total =
            self.lodging_daily_total(budget, night_count, capacity.seat_count, driver_count);
        let lodging = round_half_up(lodging_daily_total + or_zero(budget.other_services));

        let tours = self.slot_total(&budget.tours);

        // Gifts scale with seating; the quantity is never entered directly.
        let gift_count = capacity.seat_count;
        let gifts_total =
            round_half_up(Decimal::from(gift_count) * or_zero(budget.gift_unit_price));
        let gifts_and_extras = round_half_up(
            gifts_total
                + or_zero(budget.extra_1)
                + or_zero(budget.extra_2)
                + or_zero(budget.extra_3),
        );

        let raffles = self.slot_total(&budget.raffles);

        let misc_expenses = or_zero(budget.misc_expenses);

        let other_revenue =
            round_half_up(or_zero(budget.other_revenue_1) + or_zero(budget.other_revenue_2));

        let total_expense = round_half_up(
            fees + transport + lodging + tours + gifts_and_extras + raffles + misc_expenses,
        );

        // Pricing block: break-even, suggested price, revenue, profit.
        let break_even_price = self.break_even_price(total_expense, paying_count);
        let suggested_price = self.suggested_price(break_even_price, pricing);
        let total_revenue =
            round_half_up(suggested_price * Decimal::from(paying_count) + other_revenue);
        let gross_profit = round_half_up(total_revenue - total_expense);

        Ok(TripFinancials {
            fees,
            transport,
            drivers,
            transfers,
            lodging,
            tours,
            gifts_and_extras,
            raffles,
            misc_expenses,
            other_revenue,
            driver_meals_total,
            driver_transfers_total,
            night_count,
            lodging_daily_total,
            gift_count,
            gifts_total,
            seat_count: capacity.seat_count,
            guide_reserved_seats: capacity.guide_reserved_seats,
            promotional_seats: capacity.promotional_seats,
            // Headline guest count excludes drivers even though the lodging
            // dailies bill for them.
            guest_count: capacity.seat_count,
            non_paying_count,
            paying_count,
            total_expense,
            break_even_price,
            suggested_price,
            total_revenue,
            gross_profit,
        })
    }

    /// City fee + local guide fee + other fees + parking.
    fn fees_total(
        &self,
        budget: &TripBudget,
    ) -> Decimal {
        round_half_up(
            or_zero(budget.city_fee)
                + or_zero(budget.local_guide_fee)
                + or_zero(budget.other_fees)
                + or_zero(budget.parking),
        )
    }

    /// Driver meals: (lunches + dinners) × meal unit price × driver count.
    ///
    /// The meal unit price falls back to the configured allowance when the
    /// budget leaves it blank.
    fn driver_meals_total(
        &self,
        budget: &TripBudget,
        driver_count: u32,
    ) -> Decimal {
        let meal_count = Decimal::from(
            budget.driver_lunch_count.unwrap_or(0) + budget.driver_dinner_count.unwrap_or(0),
        );
        let meal_unit_price = budget
            .driver_meal_unit_price
            .unwrap_or(self.config.default_driver_meal_price);

        round_half_up(meal_count * meal_unit_price * Decimal::from(driver_count))
    }

    /// Driver displacements: trip count × unit price.
    fn driver_transfers_total(
        &self,
        budget: &TripBudget,
    ) -> Decimal {
        let count = Decimal::from(budget.driver_transfer_count.unwrap_or(0));

        round_half_up(count * or_zero(budget.driver_transfer_unit_price))
    }

    /// Sums three quantity × unit-price slots (transfers, tours, raffles).
    fn slot_total(
        &self,
        slots: &[LineItem; 3],
    ) -> Decimal {
        round_half_up(slots.iter().map(|slot| slot.amount()).sum())
    }

    /// Nights between departure and return: the day difference minus one,
    /// floored at zero. Zero when either date is missing or the return does
    /// not fall after the departure.
    fn night_count(
        &self,
        departure_date: Option<NaiveDate>,
        return_date: Option<NaiveDate>,
    ) -> u32 {
        let (Some(departure), Some(ret)) = (departure_date, return_date) else {
            return 0;
        };

        let days = ret.signed_duration_since(departure).num_days();
        if days < 0 {
            warn!(
                departure = %departure,
                return_date = %ret,
                "return date precedes departure; night count is zero"
            );
            return 0;
        }

        u32::try_from((days - 1).max(0)).unwrap_or(0)
    }

    /// Lodging dailies: nights × unit price × (seats + drivers).
    ///
    /// Drivers sleep at the same lodging, so they bill a daily even though
    /// they are not counted as guests.
    fn lodging_daily_total(
        &self,
        budget: &TripBudget,
        night_count: u32,
        seat_count: u32,
        driver_count: u32,
    ) -> Decimal {
        let beds = Decimal::from(seat_count + driver_count);

        round_half_up(
            Decimal::from(night_count) * or_zero(budget.lodging_unit_price) * beds,
        )
    }

    /// Break-even price per paying seat, guarded against empty vehicles.
    fn break_even_price(
        &self,
        total_expense: Decimal,
        paying_count: u32,
    ) -> Decimal {
        if paying_count == 0 {
            warn!(
                total_expense = %total_expense,
                "no paying seats; break-even price is zero"
            );
            return Decimal::ZERO;
        }

        round_half_up(total_expense / Decimal::from(paying_count))
    }

    /// Suggested sale price: break-even plus margin, unless a positive
    /// manual override is active, which passes through unchanged.
    fn suggested_price(
        &self,
        break_even_price: Decimal,
        pricing: PricingMode,
    ) -> Decimal {
        match pricing {
            PricingMode::ManualOverride(price) if price > Decimal::ZERO => price,
            PricingMode::ManualOverride(price) => {
                warn!(
                    price = %price,
                    "manual price override is not positive; computing the price instead"
                );
                round_half_up(break_even_price * (Decimal::ONE + self.config.margin))
            }
            PricingMode::Computed => {
                round_half_up(break_even_price * (Decimal::ONE + self.config.margin))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::VehicleType;

    use super::*;

    fn date(
        year: i32,
        month: u32,
        day: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn calculator() -> BudgetCalculator {
        BudgetCalculator::new(BudgetConfig::default())
    }

    /// A fully-populated bus trip used by the integration tests.
    ///
    /// Expense breakdown: fees 500, transport 5750 (freight 5000 + drivers
    /// 400 + transfers 350), lodging 9000 (2 nights × 90 × 48 beds + 360),
    /// tours 1300, gifts & extras 350 (46 × 5 + 120), raffles 250, misc
    /// 850. Total expense 18000; other revenue 600.
    fn test_budget() -> TripBudget {
        TripBudget {
            departure_date: Some(date(2024, 3, 10)),
            return_date: Some(date(2024, 3, 13)),
            vehicle_type: Some(VehicleType::Bus),
            city_fee: Some(dec!(100.00)),
            local_guide_fee: Some(dec!(200.00)),
            other_fees: Some(dec!(50.00)),
            parking: Some(dec!(150.00)),
            freight: Some(dec!(5000.00)),
            driver_count: Some(2),
            driver_lunch_count: Some(3),
            driver_dinner_count: Some(2),
            driver_meal_unit_price: Some(dec!(30.00)),
            driver_transfer_count: Some(4),
            driver_transfer_unit_price: Some(dec!(25.00)),
            transfers: [
                LineItem::new(2, dec!(100.00)),
                LineItem::new(1, dec!(150.00)),
                LineItem::default(),
            ],
            lodging_unit_price: Some(dec!(90.00)),
            other_services: Some(dec!(360.00)),
            tours: [
                LineItem::new(40, dec!(25.00)),
                LineItem::new(10, dec!(30.00)),
                LineItem::default(),
            ],
            gift_unit_price: Some(dec!(5.00)),
            extra_1: Some(dec!(70.00)),
            extra_2: Some(dec!(50.00)),
            extra_3: None,
            raffles: [
                LineItem::new(3, dec!(50.00)),
                LineItem::new(1, dec!(100.00)),
                LineItem::default(),
            ],
            other_revenue_1: Some(dec!(400.00)),
            other_revenue_2: Some(dec!(200.00)),
            misc_expenses: Some(dec!(850.00)),
            suggested_price: None,
        }
    }

    // =========================================================================
    // BudgetConfig tests
    // =========================================================================

    #[test]
    fn default_config_is_valid() {
        let result = BudgetConfig::default().validate();

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn config_rejects_negative_margin() {
        let config = BudgetConfig {
            margin: dec!(-0.10),
            ..BudgetConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(BudgetError::InvalidMargin(dec!(-0.10)))
        );
    }

    #[test]
    fn config_rejects_negative_default_meal_price() {
        let config = BudgetConfig {
            default_driver_meal_price: dec!(-30.00),
            ..BudgetConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(BudgetError::InvalidDefaultMealPrice(dec!(-30.00)))
        );
    }

    // =========================================================================
    // PricingMode tests
    // =========================================================================

    #[test]
    fn pricing_mode_is_computed_for_untouched_budget() {
        let budget = TripBudget::default();

        assert_eq!(PricingMode::for_budget(&budget), PricingMode::Computed);
    }

    #[test]
    fn pricing_mode_is_computed_for_zero_stored_price() {
        let budget = TripBudget {
            suggested_price: Some(dec!(0.00)),
            ..TripBudget::default()
        };

        assert_eq!(PricingMode::for_budget(&budget), PricingMode::Computed);
    }

    #[test]
    fn pricing_mode_is_override_for_positive_stored_price() {
        let budget = TripBudget {
            suggested_price: Some(dec!(1500.00)),
            ..TripBudget::default()
        };

        assert_eq!(
            PricingMode::for_budget(&budget),
            PricingMode::ManualOverride(dec!(1500.00))
        );
    }

    // =========================================================================
    // category total tests
    // =========================================================================

    #[test]
    fn fees_total_sums_the_four_fee_fields() {
        let result = calculator().fees_total(&test_budget());

        assert_eq!(result, dec!(500.00));
    }

    #[test]
    fn driver_meals_scale_with_driver_count() {
        // 3 lunches + 2 dinners at 30 each, for 2 drivers.
        let result = calculator().driver_meals_total(&test_budget(), 2);

        assert_eq!(result, dec!(300.00));
    }

    #[test]
    fn driver_meal_price_falls_back_to_the_configured_allowance() {
        let budget = TripBudget {
            driver_lunch_count: Some(1),
            ..TripBudget::default()
        };

        let result = calculator().driver_meals_total(&budget, 1);

        assert_eq!(result, dec!(30.00));
    }

    #[test]
    fn driver_transfers_multiply_count_by_unit_price() {
        let result = calculator().driver_transfers_total(&test_budget());

        assert_eq!(result, dec!(100.00));
    }

    #[test]
    fn slot_total_sums_three_slots() {
        let result = calculator().slot_total(&test_budget().transfers);

        assert_eq!(result, dec!(350.00));
    }

    #[test]
    fn slot_total_of_empty_slots_is_zero() {
        let result = calculator().slot_total(&TripBudget::default().transfers);

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // night_count tests
    // =========================================================================

    #[test]
    fn night_count_is_days_between_minus_one() {
        let result =
            calculator().night_count(Some(date(2024, 3, 10)), Some(date(2024, 3, 13)));

        assert_eq!(result, 2);
    }

    #[test]
    fn night_count_is_zero_without_dates() {
        let result = calculator().night_count(None, Some(date(2024, 3, 13)));

        assert_eq!(result, 0);
    }

    #[test]
    fn night_count_is_zero_for_same_day_return() {
        let result =
            calculator().night_count(Some(date(2024, 3, 10)), Some(date(2024, 3, 10)));

        assert_eq!(result, 0);
    }

    #[test]
    fn night_count_is_zero_for_next_day_return() {
        let result =
            calculator().night_count(Some(date(2024, 3, 10)), Some(date(2024, 3, 11)));

        assert_eq!(result, 0);
    }

    #[test]
    fn night_count_is_zero_when_return_precedes_departure() {
        let result =
            calculator().night_count(Some(date(2024, 3, 13)), Some(date(2024, 3, 10)));

        assert_eq!(result, 0);
    }

    // =========================================================================
    // lodging tests
    // =========================================================================

    #[test]
    fn lodging_dailies_bill_seats_plus_drivers() {
        // 2 nights × 90 × (46 seats + 2 drivers).
        let result = calculator().lodging_daily_total(&test_budget(), 2, 46, 2);

        assert_eq!(result, dec!(8640.00));
    }

    #[test]
    fn lodging_daily_total_is_zero_without_nights() {
        let result = calculator().lodging_daily_total(&test_budget(), 0, 46, 2);

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // pricing tests
    // =========================================================================

    #[test]
    fn break_even_divides_expense_by_paying_seats() {
        let result = calculator().break_even_price(dec!(43000.00), 43);

        assert_eq!(result, dec!(1000.00));
    }

    #[test]
    fn break_even_is_zero_with_no_paying_seats() {
        let result = calculator().break_even_price(dec!(43000.00), 0);

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn break_even_rounds_half_up() {
        // 100 / 3 = 33.333...
        let result = calculator().break_even_price(dec!(100.00), 3);

        assert_eq!(result, dec!(33.33));
    }

    #[test]
    fn suggested_price_applies_the_margin() {
        let result = calculator().suggested_price(dec!(1000.00), PricingMode::Computed);

        assert_eq!(result, dec!(1200.00));
    }

    #[test]
    fn suggested_price_passes_a_positive_override_through_unchanged() {
        let result = calculator()
            .suggested_price(dec!(1000.00), PricingMode::ManualOverride(dec!(1450.55)));

        assert_eq!(result, dec!(1450.55));
    }

    #[test]
    fn suggested_price_ignores_a_non_positive_override() {
        let result =
            calculator().suggested_price(dec!(1000.00), PricingMode::ManualOverride(dec!(0)));

        assert_eq!(result, dec!(1200.00));
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_full_bus_trip() {
        let financials = calculator()
            .calculate(&test_budget(), PricingMode::Computed)
            .unwrap();

        assert_eq!(financials.fees, dec!(500.00));
        assert_eq!(financials.driver_meals_total, dec!(300.00));
        assert_eq!(financials.driver_transfers_total, dec!(100.00));
        assert_eq!(financials.drivers, dec!(400.00));
        assert_eq!(financials.transfers, dec!(350.00));
        assert_eq!(financials.transport, dec!(5750.00));
        assert_eq!(financials.night_count, 2);
        assert_eq!(financials.lodging_daily_total, dec!(8640.00));
        assert_eq!(financials.lodging, dec!(9000.00));
        assert_eq!(financials.tours, dec!(1300.00));
        assert_eq!(financials.gift_count, 46);
        assert_eq!(financials.gifts_total, dec!(230.00));
        assert_eq!(financials.gifts_and_extras, dec!(350.00));
        assert_eq!(financials.raffles, dec!(250.00));
        assert_eq!(financials.misc_expenses, dec!(850.00));
        assert_eq!(financials.other_revenue, dec!(600.00));
        assert_eq!(financials.total_expense, dec!(18000.00));

        assert_eq!(financials.seat_count, 46);
        assert_eq!(financials.guide_reserved_seats, 2);
        assert_eq!(financials.promotional_seats, 1);
        assert_eq!(financials.guest_count, 46);
        assert_eq!(financials.non_paying_count, 3);
        assert_eq!(financials.paying_count, 43);

        // 18000 / 43 = 418.60; × 1.2 = 502.32.
        assert_eq!(financials.break_even_price, dec!(418.60));
        assert_eq!(financials.suggested_price, dec!(502.32));
        // 502.32 × 43 + 600 = 22199.76.
        assert_eq!(financials.total_revenue, dec!(22199.76));
        assert_eq!(financials.gross_profit, dec!(4199.76));
    }

    #[test]
    fn calculate_bus_with_flat_expense() {
        let budget = TripBudget {
            vehicle_type: Some(VehicleType::Bus),
            misc_expenses: Some(dec!(43000.00)),
            ..TripBudget::default()
        };

        let financials = calculator()
            .calculate(&budget, PricingMode::Computed)
            .unwrap();

        assert_eq!(financials.break_even_price, dec!(1000.00));
        assert_eq!(financials.suggested_price, dec!(1200.00));
        assert_eq!(financials.total_revenue, dec!(51600.00));
        assert_eq!(financials.gross_profit, dec!(8600.00));
    }

    #[test]
    fn calculate_without_vehicle_degrades_to_zero() {
        let budget = TripBudget {
            vehicle_type: None,
            ..test_budget()
        };

        let financials = calculator()
            .calculate(&budget, PricingMode::Computed)
            .unwrap();

        assert_eq!(financials.seat_count, 0);
        assert_eq!(financials.paying_count, 0);
        assert_eq!(financials.gift_count, 0);
        assert_eq!(financials.break_even_price, dec!(0));
        assert_eq!(financials.suggested_price, dec!(0));
        // Only other revenue remains on the revenue side.
        assert_eq!(financials.total_revenue, dec!(600.00));
    }

    #[test]
    fn calculate_empty_budget_is_all_zero() {
        let financials = calculator()
            .calculate(&TripBudget::default(), PricingMode::Computed)
            .unwrap();

        assert_eq!(financials.total_expense, dec!(0));
        assert_eq!(financials.break_even_price, dec!(0));
        assert_eq!(financials.suggested_price, dec!(0));
        assert_eq!(financials.total_revenue, dec!(0));
        assert_eq!(financials.gross_profit, dec!(0));
    }

    #[test]
    fn calculate_is_idempotent_for_identical_inputs() {
        let budget = test_budget();

        let first = calculator()
            .calculate(&budget, PricingMode::Computed)
            .unwrap();
        let second = calculator()
            .calculate(&budget, PricingMode::Computed)
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn calculate_keeps_other_revenue_out_of_expenses() {
        let budget = TripBudget {
            other_revenue_1: Some(dec!(10000.00)),
            ..test_budget()
        };

        let financials = calculator()
            .calculate(&budget, PricingMode::Computed)
            .unwrap();

        assert_eq!(financials.total_expense, dec!(18000.00));
        assert_eq!(financials.other_revenue, dec!(10200.00));
    }

    #[test]
    fn calculate_honors_a_manual_override() {
        let financials = calculator()
            .calculate(&test_budget(), PricingMode::ManualOverride(dec!(600.00)))
            .unwrap();

        assert_eq!(financials.suggested_price, dec!(600.00));
        // Break-even is still reported from the expense side.
        assert_eq!(financials.break_even_price, dec!(418.60));
        // 600 × 43 + 600 = 26400.
        assert_eq!(financials.total_revenue, dec!(26400.00));
        assert_eq!(financials.gross_profit, dec!(8400.00));
    }

    #[test]
    fn manual_override_survives_recalculation_until_cleared() {
        let budget = test_budget();
        let manual = PricingMode::ManualOverride(dec!(600.00));

        let first = calculator().calculate(&budget, manual).unwrap();
        let second = calculator().calculate(&budget, manual).unwrap();

        assert_eq!(first.suggested_price, dec!(600.00));
        assert_eq!(second.suggested_price, dec!(600.00));

        // Clearing the override recomputes from break-even.
        let recomputed = calculator()
            .calculate(&budget, PricingMode::Computed)
            .unwrap();

        assert_eq!(recomputed.suggested_price, dec!(502.32));
    }

    #[test]
    fn calculate_rejects_an_invalid_configuration() {
        let config = BudgetConfig {
            margin: dec!(-1.00),
            ..BudgetConfig::default()
        };
        let calculator = BudgetCalculator::new(config);

        let result = calculator.calculate(&TripBudget::default(), PricingMode::Computed);

        assert_eq!(result, Err(BudgetError::InvalidMargin(dec!(-1.00))));
    }
}
