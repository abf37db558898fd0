use bambam_core::model::rental::VehicleType;
use serde::{Deserialize, Serialize};

/// settings for reading a directory of GBFS feed files.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct GbfsDataSourceConfig {
    /// rental network name assigned to every station of the feed
    pub network: String,
    /// directory holding station_information.json, station_status.json and
    /// the optional free_bike_status.json and geofencing_zones.json
    pub directory: String,
    /// vehicle type assigned to stations, since these feeds do not carry one
    #[serde(default = "default_vehicle_type")]
    pub vehicle_type: VehicleType,
}

fn default_vehicle_type() -> VehicleType {
    VehicleType::Bicycle
}
