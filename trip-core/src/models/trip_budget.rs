use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::VehicleType;

/// One quantity × unit-price slot (used for transfers, tours and raffles).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub quantity: Option<u32>,
    pub unit_price: Option<Decimal>,
}

impl LineItem {
    pub fn new(
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            quantity: Some(quantity),
            unit_price: Some(unit_price),
        }
    }

    /// Quantity × unit price; absent fields count as zero.
    pub fn amount(&self) -> Decimal {
        let quantity = Decimal::from(self.quantity.unwrap_or(0));
        let unit_price = self.unit_price.unwrap_or(Decimal::ZERO);
        quantity * unit_price
    }
}

/// Raw line-item inputs for one scheduled trip.
///
/// Every numeric field is optional; absent values are treated as zero by the
/// budget calculation (the form layer saves whatever subset the operator has
/// filled in). `suggested_price` doubles as an output: a positive stored value
/// is an operator edit that recomputation must not clobber.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripBudget {
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub vehicle_type: Option<VehicleType>,

    // Fees
    pub city_fee: Option<Decimal>,
    pub local_guide_fee: Option<Decimal>,
    pub other_fees: Option<Decimal>,
    pub parking: Option<Decimal>,

    // Transport
    pub freight: Option<Decimal>,

    // Drivers
    pub driver_count: Option<u32>,
    pub driver_lunch_count: Option<u32>,
    pub driver_dinner_count: Option<u32>,
    pub driver_meal_unit_price: Option<Decimal>,
    pub driver_transfer_count: Option<u32>,
    pub driver_transfer_unit_price: Option<Decimal>,

    // Transfers
    pub transfers: [LineItem; 3],

    // Lodging (unit price is per guest per night)
    pub lodging_unit_price: Option<Decimal>,
    pub other_services: Option<Decimal>,

    // Tours
    pub tours: [LineItem; 3],

    // Gifts and extras (gift quantity is derived from seat count, not entered)
    pub gift_unit_price: Option<Decimal>,
    pub extra_1: Option<Decimal>,
    pub extra_2: Option<Decimal>,
    pub extra_3: Option<Decimal>,

    // Raffles
    pub raffles: [LineItem; 3],

    // Other revenue
    pub other_revenue_1: Option<Decimal>,
    pub other_revenue_2: Option<Decimal>,

    // Miscellaneous expenses
    pub misc_expenses: Option<Decimal>,

    pub suggested_price: Option<Decimal>,
}
