use super::{LocalizedName, RentalStation};
use bambam_core::model::rental::VehicleType;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashSet,
    fmt::Display,
    hash::{Hash, Hasher},
};

/// a rental station along with live availability.
///
/// stations are equal when their ids are equal, so a refreshed record of a
/// station replaces the old one even if it moved. availability counters of
/// `None` are untracked and never limit a rental.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VehicleRentalStation {
    #[serde(flatten)]
    pub station: RentalStation,
    #[serde(default)]
    pub vehicles_available: Option<u32>,
    #[serde(default)]
    pub spaces_available: Option<u32>,
    /// a single vehicle parked on a street rather than a dock
    #[serde(default)]
    pub is_floating_vehicle: bool,
    #[serde(default)]
    pub vehicle_type: VehicleType,
    /// a synthetic drop-off marking the boundary of a network's operating area
    #[serde(default, skip_serializing)]
    pub is_border_dropoff: bool,
}

impl VehicleRentalStation {
    pub fn new(station: RentalStation, vehicle_type: VehicleType) -> VehicleRentalStation {
        VehicleRentalStation {
            station,
            vehicles_available: None,
            spaces_available: None,
            is_floating_vehicle: false,
            vehicle_type,
            is_border_dropoff: false,
        }
    }

    pub fn with_availability(
        mut self,
        vehicles_available: u32,
        spaces_available: u32,
    ) -> VehicleRentalStation {
        self.vehicles_available = Some(vehicles_available);
        self.spaces_available = Some(spaces_available);
        self
    }

    pub fn id(&self) -> &str {
        &self.station.id
    }

    pub fn name(&self) -> &LocalizedName {
        &self.station.name
    }

    pub fn networks(&self) -> Option<&HashSet<String>> {
        self.station.networks.as_ref()
    }

    pub fn x(&self) -> f64 {
        self.station.x
    }

    pub fn y(&self) -> f64 {
        self.station.y
    }

    pub fn allow_pickup(&self) -> bool {
        self.station.allow_pickup
    }

    pub fn allow_dropoff(&self) -> bool {
        self.station.allow_dropoff
    }

    pub fn has_valid_coordinate(&self) -> bool {
        self.station.has_valid_coordinate()
    }

    /// network names in sorted order, or `None` for a wildcard station
    pub fn sorted_networks(&self) -> Option<Vec<String>> {
        self.networks()
            .map(|networks| networks.iter().sorted().cloned().collect())
    }
}

impl PartialEq for VehicleRentalStation {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for VehicleRentalStation {}

impl Hash for VehicleRentalStation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl Display for VehicleRentalStation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let networks = match self.sorted_networks() {
            Some(names) => format!("[{}]", names.join(", ")),
            None => String::from("unknown network"),
        };
        write!(
            f,
            "Vehicle rental station {} ({}) at {:.6}, {:.6}",
            self.name(),
            networks,
            self.y(),
            self.x()
        )
    }
}
