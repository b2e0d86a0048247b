use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Van,
    Bus,
    SleeperBus,
    Minibus,
    Car,
}

impl VehicleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Van => "Van",
            Self::Bus => "Bus",
            Self::SleeperBus => "Sleeper Bus",
            Self::Minibus => "Minibus",
            Self::Car => "Car",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Van" => Some(Self::Van),
            "Bus" => Some(Self::Bus),
            "Sleeper Bus" => Some(Self::SleeperBus),
            "Minibus" => Some(Self::Minibus),
            "Car" => Some(Self::Car),
            _ => None,
        }
    }
}
