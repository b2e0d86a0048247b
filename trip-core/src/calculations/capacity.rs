//! Vehicle seating capacity lookup.
//!
//! Maps a vehicle type to its seating capacity and to the seats that earn no
//! fare: seats reserved for guides and promotional (giveaway) seats. The
//! operator's fleet is a fixed catalog, so the table is closed:
//!
//! | vehicle     | seats | guide-reserved | promotional |
//! |-------------|-------|----------------|-------------|
//! | Van         | 15    | 1              | 0           |
//! | Bus         | 46    | 2              | 1           |
//! | Sleeper Bus | 44    | 2              | 1           |
//! | Minibus     | 28    | 2              | 1           |
//! | Car         | 7     | 1              | 0           |
//!
//! A missing vehicle type resolves to all-zero capacity rather than an
//! error; every downstream formula then degrades to zero.

use serde::{Deserialize, Serialize};

use crate::models::VehicleType;

/// Seating capacity breakdown for one vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCapacity {
    pub seat_count: u32,
    pub guide_reserved_seats: u32,
    pub promotional_seats: u32,
}

impl VehicleCapacity {
    /// Seats that earn no fare: guide-reserved plus promotional.
    pub fn non_paying_count(&self) -> u32 {
        self.guide_reserved_seats + self.promotional_seats
    }

    /// Fare-paying seats, floored at zero.
    pub fn paying_count(&self) -> u32 {
        self.seat_count.saturating_sub(self.non_paying_count())
    }
}

/// Resolves the capacity breakdown for a vehicle type.
///
/// # Example
///
/// ```
/// use trip_core::VehicleType;
/// use trip_core::calculations::resolve_capacity;
///
/// let capacity = resolve_capacity(Some(VehicleType::Bus));
///
/// assert_eq!(capacity.seat_count, 46);
/// assert_eq!(capacity.non_paying_count(), 3);
/// assert_eq!(capacity.paying_count(), 43);
///
/// // No vehicle selected yet: everything is zero, nothing fails.
/// assert_eq!(resolve_capacity(None).seat_count, 0);
/// ```
pub fn resolve_capacity(vehicle: Option<VehicleType>) -> VehicleCapacity {
    let (seat_count, guide_reserved_seats, promotional_seats) = match vehicle {
        Some(VehicleType::Van) => (15, 1, 0),
        Some(VehicleType::Bus) => (46, 2, 1),
        Some(VehicleType::SleeperBus) => (44, 2, 1),
        Some(VehicleType::Minibus) => (28, 2, 1),
        Some(VehicleType::Car) => (7, 1, 0),
        None => (0, 0, 0),
    };

    VehicleCapacity {
        seat_count,
        guide_reserved_seats,
        promotional_seats,
    }
}
