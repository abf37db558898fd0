use super::{QualifiedModeSet, RoutingRequest, RoutingRequestError, SearchDirection};
use crate::model::rental::VehicleType;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path, str::FromStr};
use uom::si::{
    f64::{Length, Time, Velocity},
    length::meter,
    time::second,
    velocity::meter_per_second,
};

/// serializable description of a [`RoutingRequest`]. optional fields fall back
/// to the [`RoutingRequest`] defaults.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct RoutingRequestConfig {
    /// comma-delimited qualified modes, for example "WALK,TRANSIT,MICROMOBILITY_RENT"
    pub modes: String,
    #[serde(default)]
    pub arrive_by: bool,
    #[serde(default)]
    pub use_vehicle_rental_availability_information: bool,
    pub white_listed_providers: Option<Vec<String>>,
    pub banned_providers: Option<Vec<String>>,
    /// vehicle tokens such as "bike", "scooter", "car"
    pub white_listed_vehicles: Option<Vec<String>>,
    pub banned_vehicles: Option<Vec<String>>,
    pub minimum_vehicle_rental_distance_meters: Option<f64>,
    pub vehicle_rental_pickup_cost: Option<f64>,
    pub vehicle_rental_pickup_time_seconds: Option<f64>,
    pub vehicle_rental_dropoff_cost: Option<f64>,
    pub vehicle_rental_dropoff_time_seconds: Option<f64>,
    pub walk_speed_meters_per_second: Option<f64>,
    pub micromobility_speed_meters_per_second: Option<f64>,
    pub walk_reluctance: Option<f64>,
}

impl RoutingRequestConfig {
    /// reads a request configuration from a TOML, JSON, or YAML file.
    pub fn from_file(filepath: &Path) -> Result<RoutingRequestConfig, RoutingRequestError> {
        let config = config::Config::builder()
            .add_source(config::File::from(filepath))
            .build()?;
        let request_config = config.try_deserialize::<RoutingRequestConfig>()?;
        Ok(request_config)
    }
}

impl TryFrom<&RoutingRequestConfig> for RoutingRequest {
    type Error = RoutingRequestError;

    fn try_from(value: &RoutingRequestConfig) -> Result<Self, Self::Error> {
        let defaults = RoutingRequest::default();
        let minimum_distance = value
            .minimum_vehicle_rental_distance_meters
            .map(|m| non_negative("minimum_vehicle_rental_distance_meters", m))
            .transpose()?
            .map(Length::new::<meter>);
        let pickup_cost = value
            .vehicle_rental_pickup_cost
            .map(|c| non_negative("vehicle_rental_pickup_cost", c))
            .transpose()?;
        let pickup_time = value
            .vehicle_rental_pickup_time_seconds
            .map(|t| non_negative("vehicle_rental_pickup_time_seconds", t))
            .transpose()?
            .map(Time::new::<second>);
        let dropoff_cost = value
            .vehicle_rental_dropoff_cost
            .map(|c| non_negative("vehicle_rental_dropoff_cost", c))
            .transpose()?;
        let dropoff_time = value
            .vehicle_rental_dropoff_time_seconds
            .map(|t| non_negative("vehicle_rental_dropoff_time_seconds", t))
            .transpose()?
            .map(Time::new::<second>);
        let walk_speed = value
            .walk_speed_meters_per_second
            .map(|v| positive("walk_speed_meters_per_second", v))
            .transpose()?
            .map(Velocity::new::<meter_per_second>);
        let micromobility_speed = value
            .micromobility_speed_meters_per_second
            .map(|v| positive("micromobility_speed_meters_per_second", v))
            .transpose()?
            .map(Velocity::new::<meter_per_second>);
        let walk_reluctance = value
            .walk_reluctance
            .map(|r| positive("walk_reluctance", r))
            .transpose()?;

        let mut request = RoutingRequest {
            direction: SearchDirection::from_arrive_by(value.arrive_by),
            use_vehicle_rental_availability_information: value
                .use_vehicle_rental_availability_information,
            white_listed_providers: value.white_listed_providers.as_deref().map(to_name_set),
            banned_providers: value.banned_providers.as_deref().map(to_name_set),
            white_listed_vehicles: value.white_listed_vehicles.as_deref().map(to_vehicle_set),
            banned_vehicles: value.banned_vehicles.as_deref().map(to_vehicle_set),
            minimum_vehicle_rental_distance: minimum_distance
                .unwrap_or(defaults.minimum_vehicle_rental_distance),
            vehicle_rental_pickup_cost: pickup_cost.unwrap_or(defaults.vehicle_rental_pickup_cost),
            vehicle_rental_pickup_time: pickup_time.unwrap_or(defaults.vehicle_rental_pickup_time),
            vehicle_rental_dropoff_cost: dropoff_cost
                .unwrap_or(defaults.vehicle_rental_dropoff_cost),
            vehicle_rental_dropoff_time: dropoff_time
                .unwrap_or(defaults.vehicle_rental_dropoff_time),
            walk_speed: walk_speed.unwrap_or(defaults.walk_speed),
            micromobility_speed: micromobility_speed.unwrap_or(defaults.micromobility_speed),
            walk_reluctance: walk_reluctance.unwrap_or(defaults.walk_reluctance),
            ..defaults
        };
        let modes = QualifiedModeSet::from_str(&value.modes)?;
        modes.apply_to_routing_request(&mut request);
        Ok(request)
    }
}

fn to_name_set(names: &[String]) -> HashSet<String> {
    names.iter().map(|n| n.trim().to_string()).collect()
}

fn to_vehicle_set(tokens: &[String]) -> HashSet<VehicleType> {
    tokens.iter().map(|t| VehicleType::from_token(t)).collect()
}

fn non_negative(name: &str, value: f64) -> Result<f64, RoutingRequestError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(RoutingRequestError::InvalidParameter {
            name: name.to_string(),
            message: format!("expected a finite value >= 0, found {value}"),
        })
    }
}

fn positive(name: &str, value: f64) -> Result<f64, RoutingRequestError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RoutingRequestError::InvalidParameter {
            name: name.to_string(),
            message: format!("expected a finite value > 0, found {value}"),
        })
    }
}

#[cfg(test)]
mod test {
    use super::RoutingRequestConfig;
    use crate::model::{
        rental::VehicleType,
        request::{RoutingRequest, RoutingRequestError, SearchDirection, TraverseMode},
    };
    use serde_json::json;
    use uom::si::{length::meter, time::second};

    #[test]
    fn test_request_from_json_config() {
        let config: RoutingRequestConfig = serde_json::from_value(json!({
            "modes": "WALK,TRANSIT,MICROMOBILITY_RENT",
            "arrive_by": true,
            "use_vehicle_rental_availability_information": true,
            "white_listed_providers": ["LIME"],
            "banned_vehicles": ["car"],
            "minimum_vehicle_rental_distance_meters": 250.0,
            "vehicle_rental_pickup_time_seconds": 90.0
        }))
        .expect("test invariant failed: config should deserialize");
        let request =
            RoutingRequest::try_from(&config).expect("config should produce a valid request");

        assert_eq!(request.direction, SearchDirection::ArriveBy);
        assert!(request.allow_vehicle_rental);
        assert!(request.use_vehicle_rental_availability_information);
        assert!(request.modes.contains(TraverseMode::Transit));
        let whitelist = request.white_listed_providers.expect("whitelist should be set");
        assert!(whitelist.contains("LIME"));
        let banned = request.banned_vehicles.expect("banned vehicles should be set");
        assert!(banned.contains(&VehicleType::Car));
        assert_eq!(request.minimum_vehicle_rental_distance.get::<meter>(), 250.0);
        assert_eq!(request.vehicle_rental_pickup_time.get::<second>(), 90.0);
        // untouched fields keep their defaults
        assert_eq!(request.vehicle_rental_dropoff_time.get::<second>(), 30.0);
    }

    #[test]
    fn test_bad_mode_fails_at_construction() {
        let config: RoutingRequestConfig = serde_json::from_value(json!({
            "modes": "WALK,TELEPORT"
        }))
        .expect("test invariant failed: config should deserialize");
        let result = RoutingRequest::try_from(&config);
        assert!(matches!(result, Err(RoutingRequestError::UnknownMode(_))));
    }

    #[test]
    fn test_negative_cost_fails_at_construction() {
        let config: RoutingRequestConfig = serde_json::from_value(json!({
            "modes": "WALK",
            "vehicle_rental_dropoff_cost": -1.0
        }))
        .expect("test invariant failed: config should deserialize");
        let result = RoutingRequest::try_from(&config);
        assert!(matches!(
            result,
            Err(RoutingRequestError::InvalidParameter { .. })
        ));
    }
}
