use crate::model::{
    rental::VehicleType,
    request::{RoutingRequest, TraverseMode},
};
use chrono::NaiveDate;
use std::{collections::HashSet, sync::Arc};

/// the rarely-changing portion of a search state.
///
/// a `StateData` is shared between a state and its successors through an
/// `Arc` until some successor needs to change it, at which point the editor
/// clones it with `Arc::make_mut`. the derived `Clone` copies every
/// collection, so one branch of the search never observes another branch's
/// rented stations.
#[derive(Clone, Debug)]
pub struct StateData {
    pub(crate) request: Arc<RoutingRequest>,
    pub(crate) start_time: i64,
    pub(crate) non_transit_mode: Option<TraverseMode>,
    pub(crate) back_mode: Option<TraverseMode>,
    /// mode in effect when the current rental began
    pub(crate) pre_rental_mode: Option<TraverseMode>,
    pub(crate) using_rented_vehicle: bool,
    pub(crate) has_rented_vehicle_pre_transit: bool,
    pub(crate) has_rented_vehicle_post_transit: bool,
    pub(crate) rented_vehicle_allows_floating_dropoffs: bool,
    pub(crate) vehicle_rental_networks: Option<HashSet<String>>,
    pub(crate) vehicle_type: VehicleType,
    /// ids of stations this path has already picked up a vehicle from
    pub(crate) rented_vehicles: HashSet<String>,
    pub(crate) ever_boarded: bool,
    pub(crate) num_boardings: u32,
    pub(crate) trip_id: Option<String>,
    pub(crate) route_id: Option<String>,
    pub(crate) pattern_id: Option<String>,
    pub(crate) service_day: Option<NaiveDate>,
    pub(crate) last_alighted_time: Option<i64>,
}

impl StateData {
    pub fn new(request: Arc<RoutingRequest>, start_time: i64) -> StateData {
        let non_transit_mode = initial_non_transit_mode(&request);
        StateData {
            request,
            start_time,
            non_transit_mode,
            back_mode: None,
            pre_rental_mode: None,
            using_rented_vehicle: false,
            has_rented_vehicle_pre_transit: false,
            has_rented_vehicle_post_transit: false,
            rented_vehicle_allows_floating_dropoffs: false,
            vehicle_rental_networks: None,
            vehicle_type: VehicleType::Unknown,
            rented_vehicles: HashSet::new(),
            ever_boarded: false,
            num_boardings: 0,
            trip_id: None,
            route_id: None,
            pattern_id: None,
            service_day: None,
            last_alighted_time: None,
        }
    }

    pub fn request(&self) -> &RoutingRequest {
        &self.request
    }

    pub fn start_time(&self) -> i64 {
        self.start_time
    }

    pub fn non_transit_mode(&self) -> Option<TraverseMode> {
        self.non_transit_mode
    }

    pub fn back_mode(&self) -> Option<TraverseMode> {
        self.back_mode
    }

    pub fn pre_rental_mode(&self) -> Option<TraverseMode> {
        self.pre_rental_mode
    }

    pub fn using_rented_vehicle(&self) -> bool {
        self.using_rented_vehicle
    }

    pub fn has_rented_vehicle_pre_transit(&self) -> bool {
        self.has_rented_vehicle_pre_transit
    }

    pub fn has_rented_vehicle_post_transit(&self) -> bool {
        self.has_rented_vehicle_post_transit
    }

    pub fn rented_vehicle_allows_floating_dropoffs(&self) -> bool {
        self.rented_vehicle_allows_floating_dropoffs
    }

    pub fn vehicle_rental_networks(&self) -> Option<&HashSet<String>> {
        self.vehicle_rental_networks.as_ref()
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    pub fn rented_vehicles(&self) -> &HashSet<String> {
        &self.rented_vehicles
    }

    pub fn ever_boarded(&self) -> bool {
        self.ever_boarded
    }

    pub fn num_boardings(&self) -> u32 {
        self.num_boardings
    }

    pub fn trip_id(&self) -> Option<&str> {
        self.trip_id.as_deref()
    }

    pub fn route_id(&self) -> Option<&str> {
        self.route_id.as_deref()
    }

    pub fn pattern_id(&self) -> Option<&str> {
        self.pattern_id.as_deref()
    }

    pub fn service_day(&self) -> Option<NaiveDate> {
        self.service_day
    }

    pub fn last_alighted_time(&self) -> Option<i64> {
        self.last_alighted_time
    }
}

/// the mode a search begins with, preferring a personal car when one is
/// requested.
fn initial_non_transit_mode(request: &RoutingRequest) -> Option<TraverseMode> {
    [
        TraverseMode::Car,
        TraverseMode::Walk,
        TraverseMode::Bicycle,
        TraverseMode::Micromobility,
    ]
    .into_iter()
    .find(|mode| request.modes.contains(*mode))
}
