use geo::{Contains, MultiPolygon, Point};
use std::fmt::Display;

/// the operating area of a rental network. floating vehicles may only be left
/// inside it.
#[derive(Clone, Debug)]
pub struct VehicleRentalRegion {
    pub network: String,
    pub geometry: MultiPolygon<f64>,
}

impl VehicleRentalRegion {
    pub fn new(network: &str, geometry: MultiPolygon<f64>) -> VehicleRentalRegion {
        VehicleRentalRegion {
            network: network.to_string(),
            geometry,
        }
    }

    /// true if the longitude/latitude pair lies strictly inside the region
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.geometry.contains(&Point::new(x, y))
    }
}

impl PartialEq for VehicleRentalRegion {
    fn eq(&self, other: &Self) -> bool {
        self.network == other.network
    }
}

impl Display for VehicleRentalRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vehicle rental region for network {}", self.network)
    }
}
