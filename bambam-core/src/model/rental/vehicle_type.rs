use crate::model::request::TraverseMode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// category of a rental vehicle. used both as a request filter and as a
/// per-station attribute.
///
/// parsing never fails: unrecognized tokens become [`VehicleType::Unknown`],
/// which acts as a wildcard when comparing vehicle types.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum VehicleType {
    #[default]
    Unknown,
    Bicycle,
    Scooter,
    Car,
}

impl VehicleType {
    /// case-insensitive parse of the short vehicle tokens "bike", "scooter", "car".
    pub fn from_token(token: &str) -> VehicleType {
        match token.trim().to_lowercase().as_str() {
            "bike" => VehicleType::Bicycle,
            "scooter" => VehicleType::Scooter,
            "car" => VehicleType::Car,
            _ => VehicleType::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, VehicleType::Unknown)
    }

    /// two vehicle types are compatible if they match or if either is unknown.
    pub fn is_compatible_with(&self, other: &VehicleType) -> bool {
        self.is_unknown() || other.is_unknown() || self == other
    }

    /// the non-transit mode used while riding a vehicle of this type.
    pub fn traverse_mode(&self) -> TraverseMode {
        match self {
            VehicleType::Car => TraverseMode::Car,
            VehicleType::Unknown | VehicleType::Bicycle | VehicleType::Scooter => {
                TraverseMode::Micromobility
            }
        }
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleType::Unknown => "unknown",
            VehicleType::Bicycle => "bike",
            VehicleType::Scooter => "scooter",
            VehicleType::Car => "car",
        };
        write!(f, "{s}")
    }
}

impl From<&str> for VehicleType {
    fn from(value: &str) -> Self {
        VehicleType::from_token(value)
    }
}

impl From<String> for VehicleType {
    fn from(value: String) -> Self {
        VehicleType::from_token(&value)
    }
}

impl From<VehicleType> for String {
    fn from(value: VehicleType) -> Self {
        value.to_string()
    }
}
