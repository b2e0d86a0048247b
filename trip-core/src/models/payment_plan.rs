use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of payment slots on a plan: the deposit plus installments 2–12.
pub const INSTALLMENT_SLOTS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Credit,
    Debit,
    Pix,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Credit => "Credit",
            Self::Debit => "Debit",
            Self::Pix => "Pix",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Cash" => Some(Self::Cash),
            "Credit" => Some(Self::Credit),
            "Debit" => Some(Self::Debit),
            "Pix" => Some(Self::Pix),
            _ => None,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::Cash
    }
}

/// One dated partial payment toward a passenger's trip price.
///
/// The date is informational only; the balance calculation reads amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installment {
    pub date: Option<NaiveDate>,
    pub amount: Option<Decimal>,
}

/// A passenger's payment schedule for one trip.
///
/// Slot 0 is the deposit; slot `i` is installment number `i + 1` (the
/// historical numbering starts the installments at 2, right after the
/// deposit, and stored rows depend on it).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPlan {
    pub trip_price: Decimal,
    /// Paid-in-full mode: one transaction for the whole trip price,
    /// bypassing the installment schedule.
    pub lump_sum: bool,
    pub lump_sum_date: Option<NaiveDate>,
    pub payment_method: PaymentMethod,
    pub installments: [Installment; INSTALLMENT_SLOTS],
    pub outstanding_balance: Decimal,
}

impl PaymentPlan {
    /// A fresh plan for a trip sold at `trip_price`: lump-sum mode, cash,
    /// no payments recorded.
    pub fn new(trip_price: Decimal) -> Self {
        Self {
            trip_price,
            lump_sum: true,
            lump_sum_date: None,
            payment_method: PaymentMethod::default(),
            installments: [Installment::default(); INSTALLMENT_SLOTS],
            outstanding_balance: Decimal::ZERO,
        }
    }
}

impl Default for PaymentPlan {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}
