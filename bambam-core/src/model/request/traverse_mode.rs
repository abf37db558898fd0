use super::RoutingRequestError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// travel modes known to the search core.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TraverseMode {
    Walk,
    Bicycle,
    Car,
    Micromobility,
    Transit,
}

impl TraverseMode {
    pub const ALL: [TraverseMode; 5] = [
        TraverseMode::Walk,
        TraverseMode::Bicycle,
        TraverseMode::Car,
        TraverseMode::Micromobility,
        TraverseMode::Transit,
    ];

    pub fn is_transit(&self) -> bool {
        matches!(self, TraverseMode::Transit)
    }

    /// bit used for this mode within a [`super::TraverseModeSet`]
    pub(crate) fn mask(&self) -> u8 {
        1 << (*self as u8)
    }
}

impl Display for TraverseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TraverseMode::Walk => "WALK",
            TraverseMode::Bicycle => "BICYCLE",
            TraverseMode::Car => "CAR",
            TraverseMode::Micromobility => "MICROMOBILITY",
            TraverseMode::Transit => "TRANSIT",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TraverseMode {
    type Err = RoutingRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "WALK" => Ok(TraverseMode::Walk),
            "BICYCLE" => Ok(TraverseMode::Bicycle),
            "CAR" => Ok(TraverseMode::Car),
            "MICROMOBILITY" => Ok(TraverseMode::Micromobility),
            "TRANSIT" => Ok(TraverseMode::Transit),
            _ => Err(RoutingRequestError::UnknownMode(s.to_string())),
        }
    }
}
