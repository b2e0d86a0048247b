mod payment_plan;
mod trip_budget;
mod vehicle_type;

pub use payment_plan::{INSTALLMENT_SLOTS, Installment, PaymentMethod, PaymentPlan};
pub use trip_budget::{LineItem, TripBudget};
pub use vehicle_type::VehicleType;
