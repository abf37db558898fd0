use super::{State, StateData, StateError};
use crate::model::{
    network::{BackEdge, Edge, EdgeId},
    rental::VehicleType,
    request::{RoutingRequest, TraverseMode},
};
use chrono::NaiveDate;
use std::{collections::HashSet, sync::Arc};
use uom::{
    si::{
        f64::{Length, Time},
        length::meter,
        time::second,
    },
    ConstZero,
};

/// builds the successor of one state across one edge.
///
/// the successor shares its predecessor's [`StateData`] until a setter needs
/// to change it. every such setter goes through [`StateEditor::state_data_mut`]
/// so the shared record is cloned exactly once and never mutated in place.
/// [`StateEditor::make_state`] consumes the editor.
#[derive(Debug)]
pub struct StateEditor {
    child: State,
    edge_id: EdgeId,
    defect: Option<StateError>,
}

impl StateEditor {
    pub(crate) fn new(parent: &Arc<State>, edge: &dyn Edge) -> StateEditor {
        let vertex = if parent.is_arrive_by() {
            edge.from_vertex()
        } else {
            edge.to_vertex()
        };
        let child = State {
            time: parent.time,
            weight: parent.weight,
            vertex,
            back_edge: Some(BackEdge {
                edge_id: edge.edge_id(),
                edge_type: edge.edge_type(),
            }),
            back_state: Some(Arc::clone(parent)),
            state_data: Arc::clone(&parent.state_data),
            walk_distance: parent.walk_distance,
            vehicle_rental_distance: parent.vehicle_rental_distance,
        };
        StateEditor {
            child,
            edge_id: edge.edge_id(),
            defect: None,
        }
    }

    /// finishes the successor. returns `None` if any increment was invalid.
    pub fn make_state(self) -> Option<State> {
        match self.try_make_state() {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("discarding defective traversal: {e}");
                None
            }
        }
    }

    /// finishes the successor, reporting the first invalid increment as an
    /// error.
    pub fn try_make_state(self) -> Result<State, StateError> {
        if let Some(defect) = self.defect {
            return Err(defect);
        }
        let child = self.child;
        debug_assert!(
            child.state_data.using_rented_vehicle
                || child.state_data.vehicle_rental_networks.is_none(),
            "rental networks recorded without an active rental"
        );
        debug_assert!(
            !(child.state_data.has_rented_vehicle_post_transit && !child.state_data.ever_boarded)
                || child.is_arrive_by(),
            "post-transit rental recorded before boarding"
        );
        if let Some(parent) = child.back_state.as_ref() {
            debug_assert!(child.weight >= parent.weight, "weight decreased");
            debug_assert!(
                if child.is_arrive_by() {
                    child.time <= parent.time
                } else {
                    child.time >= parent.time
                },
                "time moved against the search direction"
            );
        }
        Ok(child)
    }

    pub fn request(&self) -> &RoutingRequest {
        self.child.request()
    }

    pub fn is_arrive_by(&self) -> bool {
        self.child.is_arrive_by()
    }

    pub fn non_transit_mode(&self) -> Option<TraverseMode> {
        self.child.non_transit_mode()
    }

    pub fn time(&self) -> i64 {
        self.child.time
    }

    pub fn weight(&self) -> f64 {
        self.child.weight
    }

    pub fn increment_weight(&mut self, weight: f64) {
        if weight.is_nan() || weight < 0.0 {
            self.flag(StateError::InvalidWeightIncrement {
                edge_id: self.edge_id,
                value: weight,
            });
            return;
        }
        self.child.weight += weight;
    }

    /// advances the clock by `time`. under arrive-by the clock runs backward.
    pub fn increment_time(&mut self, time: Time) {
        let seconds = time.get::<second>();
        if !seconds.is_finite() || seconds < 0.0 {
            self.flag(StateError::InvalidTimeIncrement {
                edge_id: self.edge_id,
                value: seconds,
            });
            return;
        }
        let seconds = seconds.round() as i64;
        if self.is_arrive_by() {
            self.child.time -= seconds;
        } else {
            self.child.time += seconds;
        }
    }

    pub fn increment_walk_distance(&mut self, distance: Length) {
        if self.check_distance(distance) {
            self.child.walk_distance += distance;
        }
    }

    pub fn increment_vehicle_rental_distance(&mut self, distance: Length) {
        if self.check_distance(distance) {
            self.child.vehicle_rental_distance += distance;
        }
    }

    pub fn set_back_mode(&mut self, mode: Option<TraverseMode>) {
        if self.child.state_data.back_mode != mode {
            self.state_data_mut().back_mode = mode;
        }
    }

    pub fn set_non_transit_mode(&mut self, mode: Option<TraverseMode>) {
        if self.child.state_data.non_transit_mode != mode {
            self.state_data_mut().non_transit_mode = mode;
        }
    }

    pub fn set_vehicle_type(&mut self, vehicle_type: VehicleType) {
        if self.child.state_data.vehicle_type != vehicle_type {
            self.state_data_mut().vehicle_type = vehicle_type;
        }
    }

    /// opens a rental episode. the vehicle's mode becomes the non-transit mode
    /// and the rental distance starts over.
    pub fn begin_vehicle_renting(
        &mut self,
        networks: Option<HashSet<String>>,
        vehicle_type: VehicleType,
        allows_floating_dropoffs: bool,
    ) {
        self.child.vehicle_rental_distance = Length::ZERO;
        let data = self.state_data_mut();
        data.pre_rental_mode = data.non_transit_mode;
        data.using_rented_vehicle = true;
        data.vehicle_rental_networks = networks;
        data.vehicle_type = vehicle_type;
        data.rented_vehicle_allows_floating_dropoffs = allows_floating_dropoffs;
        data.non_transit_mode = Some(vehicle_type.traverse_mode());
    }

    /// closes the current rental episode, records which side of the first
    /// boarding it was completed on, and returns to the mode used before the
    /// rental. the vehicle type is kept.
    pub fn end_vehicle_renting(&mut self) {
        let post_transit = self.child.is_post_transit();
        self.child.vehicle_rental_distance = Length::ZERO;
        let data = self.state_data_mut();
        data.using_rented_vehicle = false;
        if post_transit {
            data.has_rented_vehicle_post_transit = true;
        } else {
            data.has_rented_vehicle_pre_transit = true;
        }
        data.non_transit_mode = data.pre_rental_mode.take().or(Some(TraverseMode::Walk));
        data.vehicle_rental_networks = None;
        data.rented_vehicle_allows_floating_dropoffs = false;
    }

    /// records that a vehicle was picked up at `station_id` on this path.
    pub fn add_rented_vehicle(&mut self, station_id: &str) {
        if !self.child.state_data.rented_vehicles.contains(station_id) {
            self.state_data_mut()
                .rented_vehicles
                .insert(station_id.to_string());
        }
    }

    pub fn board_trip(
        &mut self,
        trip_id: &str,
        route_id: &str,
        pattern_id: &str,
        service_day: NaiveDate,
    ) {
        let data = self.state_data_mut();
        data.ever_boarded = true;
        data.num_boardings += 1;
        data.trip_id = Some(trip_id.to_string());
        data.route_id = Some(route_id.to_string());
        data.pattern_id = Some(pattern_id.to_string());
        data.service_day = Some(service_day);
        data.back_mode = Some(TraverseMode::Transit);
    }

    pub fn alight_trip(&mut self) {
        let time = self.child.time;
        let data = self.state_data_mut();
        data.trip_id = None;
        data.route_id = None;
        data.pattern_id = None;
        data.last_alighted_time = Some(time);
    }

    /// the only path to a writable [`StateData`]. clones the shared record on
    /// first use.
    fn state_data_mut(&mut self) -> &mut StateData {
        Arc::make_mut(&mut self.child.state_data)
    }

    fn check_distance(&mut self, distance: Length) -> bool {
        let meters = distance.get::<meter>();
        if meters.is_finite() && meters >= 0.0 {
            true
        } else {
            self.flag(StateError::InvalidDistanceIncrement {
                edge_id: self.edge_id,
                value: meters,
            });
            false
        }
    }

    fn flag(&mut self, error: StateError) {
        log::warn!("{error}");
        if self.defect.is_none() {
            self.defect = Some(error);
        }
    }
}
