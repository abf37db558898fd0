use super::{SearchDirection, TraverseMode, TraverseModeSet};
use crate::model::rental::VehicleType;
use std::collections::HashSet;
use uom::{
    si::{
        f64::{Length, Time, Velocity},
        time::second,
        velocity::meter_per_second,
    },
    ConstZero,
};

/// the read-only query parameters consulted by edge traversals. a request is
/// shared by every state of a search via an `Arc`.
#[derive(Clone, Debug)]
pub struct RoutingRequest {
    /// modes enabled for this search
    pub modes: TraverseModeSet,
    /// depart-at or arrive-by
    pub direction: SearchDirection,
    /// enables the rental pickup, drop-off and station link edges
    pub allow_vehicle_rental: bool,
    /// when true, live vehicle and space counters gate pickups and drop-offs
    pub use_vehicle_rental_availability_information: bool,
    pub white_listed_providers: Option<HashSet<String>>,
    pub banned_providers: Option<HashSet<String>>,
    pub white_listed_vehicles: Option<HashSet<VehicleType>>,
    pub banned_vehicles: Option<HashSet<VehicleType>>,
    /// a rental must cover at least this distance before the vehicle is returned
    pub minimum_vehicle_rental_distance: Length,
    pub vehicle_rental_pickup_cost: f64,
    pub vehicle_rental_pickup_time: Time,
    pub vehicle_rental_dropoff_cost: f64,
    pub vehicle_rental_dropoff_time: Time,
    pub walk_speed: Velocity,
    pub bike_speed: Velocity,
    pub micromobility_speed: Velocity,
    pub car_speed: Velocity,
    pub walk_reluctance: f64,
}

impl Default for RoutingRequest {
    fn default() -> Self {
        Self {
            modes: TraverseModeSet::new(&[TraverseMode::Walk]),
            direction: SearchDirection::DepartAt,
            allow_vehicle_rental: false,
            use_vehicle_rental_availability_information: false,
            white_listed_providers: None,
            banned_providers: None,
            white_listed_vehicles: None,
            banned_vehicles: None,
            minimum_vehicle_rental_distance: Length::ZERO,
            vehicle_rental_pickup_cost: 120.0,
            vehicle_rental_pickup_time: Time::new::<second>(60.0),
            vehicle_rental_dropoff_cost: 30.0,
            vehicle_rental_dropoff_time: Time::new::<second>(30.0),
            walk_speed: Velocity::new::<meter_per_second>(1.33),
            bike_speed: Velocity::new::<meter_per_second>(5.0),
            micromobility_speed: Velocity::new::<meter_per_second>(5.0),
            car_speed: Velocity::new::<meter_per_second>(11.2),
            walk_reluctance: 2.0,
        }
    }
}

impl RoutingRequest {
    pub fn is_arrive_by(&self) -> bool {
        self.direction.is_arrive_by()
    }

    /// travel speed for a non-transit mode. transit speed comes from schedules
    /// so it is not modeled here.
    pub fn speed(&self, mode: TraverseMode) -> Option<Velocity> {
        match mode {
            TraverseMode::Walk => Some(self.walk_speed),
            TraverseMode::Bicycle => Some(self.bike_speed),
            TraverseMode::Micromobility => Some(self.micromobility_speed),
            TraverseMode::Car => Some(self.car_speed),
            TraverseMode::Transit => None,
        }
    }

    /// multiplier from seconds of travel to generalized cost for a mode
    pub fn reluctance(&self, mode: TraverseMode) -> f64 {
        match mode {
            TraverseMode::Walk => self.walk_reluctance,
            _ => 1.0,
        }
    }
}
