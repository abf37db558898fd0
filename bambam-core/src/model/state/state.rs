use super::{StateData, StateEditor};
use crate::model::{
    network::{BackEdge, Edge, VertexId},
    rental::VehicleType,
    request::{RoutingRequest, SearchDirection, TraverseMode},
};
use std::{collections::HashSet, sync::Arc};
use uom::{si::f64::Length, ConstZero};

/// an immutable node of the search tree.
///
/// states are created by [`State::new`] at the search origin and by
/// [`StateEditor::make_state`] everywhere else. each state points at the
/// state it was derived from, so a finished state carries the whole path
/// that reached it.
#[derive(Debug)]
pub struct State {
    pub(crate) time: i64,
    pub(crate) weight: f64,
    pub(crate) vertex: VertexId,
    pub(crate) back_edge: Option<BackEdge>,
    pub(crate) back_state: Option<Arc<State>>,
    pub(crate) state_data: Arc<StateData>,
    pub(crate) walk_distance: Length,
    pub(crate) vehicle_rental_distance: Length,
}

impl State {
    /// creates the origin state of a search. for an arrive-by search, `vertex`
    /// is the destination and `time` is the arrival time.
    pub fn new(vertex: VertexId, time: i64, request: Arc<RoutingRequest>) -> State {
        State {
            time,
            weight: 0.0,
            vertex,
            back_edge: None,
            back_state: None,
            state_data: Arc::new(StateData::new(request, time)),
            walk_distance: Length::ZERO,
            vehicle_rental_distance: Length::ZERO,
        }
    }

    /// begins building the successor of this state across `edge`.
    pub fn edit(self: &Arc<Self>, edge: &dyn Edge) -> StateEditor {
        StateEditor::new(self, edge)
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn back_edge(&self) -> Option<BackEdge> {
        self.back_edge
    }

    pub fn back_state(&self) -> Option<&Arc<State>> {
        self.back_state.as_ref()
    }

    pub fn state_data(&self) -> &StateData {
        &self.state_data
    }

    pub fn request(&self) -> &RoutingRequest {
        self.state_data.request()
    }

    pub fn direction(&self) -> SearchDirection {
        self.request().direction
    }

    pub fn is_arrive_by(&self) -> bool {
        self.request().is_arrive_by()
    }

    pub fn start_time(&self) -> i64 {
        self.state_data.start_time
    }

    /// seconds elapsed since the search origin, regardless of direction
    pub fn elapsed_time_seconds(&self) -> i64 {
        (self.time - self.state_data.start_time).abs()
    }

    pub fn walk_distance(&self) -> Length {
        self.walk_distance
    }

    /// distance covered on the vehicle of the current rental
    pub fn vehicle_rental_distance(&self) -> Length {
        self.vehicle_rental_distance
    }

    pub fn non_transit_mode(&self) -> Option<TraverseMode> {
        self.state_data.non_transit_mode
    }

    pub fn back_mode(&self) -> Option<TraverseMode> {
        self.state_data.back_mode
    }

    pub fn is_renting(&self) -> bool {
        self.state_data.using_rented_vehicle
    }

    pub fn vehicle_type(&self) -> VehicleType {
        self.state_data.vehicle_type
    }

    pub fn vehicle_rental_networks(&self) -> Option<&HashSet<String>> {
        self.state_data.vehicle_rental_networks()
    }

    pub fn rented_vehicle_allows_floating_dropoffs(&self) -> bool {
        self.state_data.rented_vehicle_allows_floating_dropoffs
    }

    pub fn rented_vehicles(&self) -> &HashSet<String> {
        &self.state_data.rented_vehicles
    }

    pub fn has_rented_vehicle_pre_transit(&self) -> bool {
        self.state_data.has_rented_vehicle_pre_transit
    }

    pub fn has_rented_vehicle_post_transit(&self) -> bool {
        self.state_data.has_rented_vehicle_post_transit
    }

    pub fn ever_boarded(&self) -> bool {
        self.state_data.ever_boarded
    }

    pub fn num_boardings(&self) -> u32 {
        self.state_data.num_boardings
    }

    /// whether this state sits on the real-world later side of the first
    /// transit boarding. an arrive-by search meets the boarding after the
    /// post-transit portion of the trip, so the answer is inverted there.
    pub fn is_post_transit(&self) -> bool {
        self.ever_boarded() != self.is_arrive_by()
    }

    /// true if a rental episode was already completed on the side of the first
    /// boarding this state currently sits on.
    pub fn has_completed_rental_on_current_side(&self) -> bool {
        if self.is_post_transit() {
            self.has_rented_vehicle_post_transit()
        } else {
            self.has_rented_vehicle_pre_transit()
        }
    }

    /// whether the rental sub-state permits a drop-off at a station from this
    /// state. border drop-off stations only accept vehicles whose rental
    /// allows floating drop-off, and are exempt from the minimum distance.
    pub fn is_vehicle_rental_dropoff_allowed(&self, is_border_dropoff: bool) -> bool {
        match self.direction() {
            SearchDirection::DepartAt => {
                if !self.is_renting() {
                    false
                } else if is_border_dropoff {
                    self.rented_vehicle_allows_floating_dropoffs()
                } else {
                    self.vehicle_rental_distance
                        >= self.request().minimum_vehicle_rental_distance
                }
            }
            SearchDirection::ArriveBy => {
                !self.is_renting() && !self.has_completed_rental_on_current_side()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::State;
    use crate::model::{
        network::VertexId,
        request::{RoutingRequest, SearchDirection},
    };
    use std::sync::Arc;
    use uom::si::{f64::Length, length::meter};

    #[test]
    fn test_origin_state() {
        let s0 = State::new(VertexId(3), 500, Arc::new(RoutingRequest::default()));
        assert_eq!(s0.vertex(), VertexId(3));
        assert_eq!(s0.start_time(), 500);
        assert_eq!(s0.elapsed_time_seconds(), 0);
        assert!(s0.back_state().is_none());
        assert!(s0.back_edge().is_none());
        assert!(!s0.is_renting());
        assert!(s0.rented_vehicles().is_empty());
    }

    #[test]
    fn test_dropoff_not_allowed_without_rental() {
        let s0 = State::new(VertexId(0), 0, Arc::new(RoutingRequest::default()));
        assert!(!s0.is_vehicle_rental_dropoff_allowed(false));
        assert!(!s0.is_vehicle_rental_dropoff_allowed(true));
    }

    #[test]
    fn test_arrive_by_dropoff_allowed_when_not_renting() {
        let request = RoutingRequest {
            direction: SearchDirection::ArriveBy,
            minimum_vehicle_rental_distance: Length::new::<meter>(500.0),
            ..Default::default()
        };
        let s0 = State::new(VertexId(0), 0, Arc::new(request));
        assert!(s0.is_vehicle_rental_dropoff_allowed(false));
        assert!(s0.is_vehicle_rental_dropoff_allowed(true));
        assert!(s0.is_post_transit());
    }
}
