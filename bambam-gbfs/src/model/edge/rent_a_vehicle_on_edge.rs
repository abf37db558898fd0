use super::rental_predicates::{has_vehicle_to_rent, station_permitted};
use crate::model::vehicle_rental::VehicleRentalStation;
use bambam_core::model::{
    network::{Edge, EdgeId, EdgeType, VertexId},
    rental::networks_compatible,
    request::SearchDirection,
    state::State,
};
use std::sync::Arc;

/// a loop edge at a station vertex that picks up a rental vehicle.
///
/// a depart-at search begins a rental here. an arrive-by search reaches the
/// pickup after the drop-off it already took, so here it closes the rental
/// instead, checking that the vehicle it has been riding could have come from
/// this station.
#[derive(Clone, Debug)]
pub struct RentAVehicleOnEdge {
    pub edge_id: EdgeId,
    pub vertex: VertexId,
    pub station: Arc<VehicleRentalStation>,
}

impl RentAVehicleOnEdge {
    pub fn new(
        edge_id: EdgeId,
        vertex: VertexId,
        station: Arc<VehicleRentalStation>,
    ) -> RentAVehicleOnEdge {
        RentAVehicleOnEdge {
            edge_id,
            vertex,
            station,
        }
    }
}

impl Edge for RentAVehicleOnEdge {
    fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    fn edge_type(&self) -> EdgeType {
        EdgeType::RentAVehicleOn
    }

    fn from_vertex(&self) -> VertexId {
        self.vertex
    }

    fn to_vertex(&self) -> VertexId {
        self.vertex
    }

    fn traverse(&self, s0: &Arc<State>) -> Option<State> {
        let request = s0.request();
        let station = self.station.as_ref();
        if !request.allow_vehicle_rental || !station.allow_pickup() {
            return None;
        }
        if !has_vehicle_to_rent(request, station) {
            return None;
        }
        // each station may be rented from once per path
        if s0.rented_vehicles().contains(station.id()) {
            return None;
        }
        if !station_permitted(request, station) {
            return None;
        }

        let mut s1 = s0.edit(self);
        match s0.direction() {
            SearchDirection::DepartAt => {
                if s0.is_renting() || s0.has_completed_rental_on_current_side() {
                    return None;
                }
                s1.begin_vehicle_renting(
                    station.networks().cloned(),
                    station.vehicle_type,
                    station.is_floating_vehicle,
                );
            }
            SearchDirection::ArriveBy => {
                if !s0.is_renting() {
                    return None;
                }
                if !s0.vehicle_type().is_compatible_with(&station.vehicle_type) {
                    return None;
                }
                if !networks_compatible(s0.vehicle_rental_networks(), station.networks()) {
                    return None;
                }
                // a rental entered at a border drop-off is exempt from the
                // minimum distance, as it is when a depart-at search ends there
                let began_at_border = s0.rented_vehicle_allows_floating_dropoffs();
                if !began_at_border
                    && s0.vehicle_rental_distance() < request.minimum_vehicle_rental_distance
                {
                    return None;
                }
                if s0.rented_vehicle_allows_floating_dropoffs() && !station.is_floating_vehicle {
                    return None;
                }
                s1.set_vehicle_type(station.vehicle_type);
                s1.end_vehicle_renting();
                s1.set_back_mode(s0.state_data().pre_rental_mode());
            }
        }
        s1.increment_weight(request.vehicle_rental_pickup_cost);
        s1.increment_time(request.vehicle_rental_pickup_time);
        s1.add_rented_vehicle(station.id());
        s1.make_state()
    }
}
