use super::rental_predicates::{has_space_to_park, station_permitted};
use crate::model::vehicle_rental::VehicleRentalStation;
use bambam_core::model::{
    network::{Edge, EdgeId, EdgeType, VertexId},
    rental::networks_compatible,
    request::SearchDirection,
    state::State,
};
use std::sync::Arc;

/// a loop edge at a station vertex that drops off a rental vehicle.
///
/// a depart-at search ends its rental here. an arrive-by search enters a
/// rental here, with the station's networks and vehicle type standing in for
/// the pickup it has not found yet.
#[derive(Clone, Debug)]
pub struct RentAVehicleOffEdge {
    pub edge_id: EdgeId,
    pub vertex: VertexId,
    pub station: Arc<VehicleRentalStation>,
}

impl RentAVehicleOffEdge {
    pub fn new(
        edge_id: EdgeId,
        vertex: VertexId,
        station: Arc<VehicleRentalStation>,
    ) -> RentAVehicleOffEdge {
        RentAVehicleOffEdge {
            edge_id,
            vertex,
            station,
        }
    }
}

impl Edge for RentAVehicleOffEdge {
    fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    fn edge_type(&self) -> EdgeType {
        EdgeType::RentAVehicleOff
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
        if !request.allow_vehicle_rental || !station.allow_dropoff() {
            return None;
        }
        if !station_permitted(request, station) {
            return None;
        }
        if !s0.is_vehicle_rental_dropoff_allowed(station.is_border_dropoff) {
            return None;
        }
        if !has_space_to_park(request, station) {
            return None;
        }

        let mut s1 = s0.edit(self);
        match s0.direction() {
            SearchDirection::DepartAt => {
                // a vehicle cannot be returned as a different type
                if !s0.vehicle_type().is_compatible_with(&station.vehicle_type) {
                    return None;
                }
                if !networks_compatible(s0.vehicle_rental_networks(), station.networks()) {
                    return None;
                }
                s1.end_vehicle_renting();
                s1.set_back_mode(s0.non_transit_mode());
            }
            SearchDirection::ArriveBy => {
                // a vehicle left at a border drop-off must have been a floating one
                s1.begin_vehicle_renting(
                    station.networks().cloned(),
                    station.vehicle_type,
                    station.is_border_dropoff,
                );
            }
        }
        s1.increment_weight(request.vehicle_rental_dropoff_cost);
        s1.increment_time(request.vehicle_rental_dropoff_time);
        s1.make_state()
    }
}
