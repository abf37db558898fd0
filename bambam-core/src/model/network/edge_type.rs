use super::EdgeId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the kinds of edges a search state may have arrived through. rental logic
/// inspects the back edge type, for example to forbid two consecutive
/// street-to-station links.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    Street,
    Transit,
    StreetVehicleRentalLink,
    RentAVehicleOn,
    RentAVehicleOff,
}

impl EdgeType {
    pub fn is_rental_link(&self) -> bool {
        matches!(self, EdgeType::StreetVehicleRentalLink)
    }
}

impl Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EdgeType::Street => "street",
            EdgeType::Transit => "transit",
            EdgeType::StreetVehicleRentalLink => "street_vehicle_rental_link",
            EdgeType::RentAVehicleOn => "rent_a_vehicle_on",
            EdgeType::RentAVehicleOff => "rent_a_vehicle_off",
        };
        write!(f, "{s}")
    }
}

/// the edge most recently traversed to reach a state.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BackEdge {
    pub edge_id: EdgeId,
    pub edge_type: EdgeType,
}
