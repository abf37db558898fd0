use crate::model::vehicle_rental::VehicleRentalStation;
use bambam_core::model::{
    network::{Edge, EdgeId, EdgeType, VertexId},
    request::RoutingRequest,
    state::State,
};
use std::sync::Arc;

/// connects a street vertex with a rental station vertex, in either
/// direction. crossing it changes nothing but the position.
#[derive(Clone, Debug)]
pub struct StreetVehicleRentalLink {
    pub edge_id: EdgeId,
    pub from_vertex: VertexId,
    pub to_vertex: VertexId,
    pub station: Arc<VehicleRentalStation>,
}

impl StreetVehicleRentalLink {
    pub fn new(
        edge_id: EdgeId,
        from_vertex: VertexId,
        to_vertex: VertexId,
        station: Arc<VehicleRentalStation>,
    ) -> StreetVehicleRentalLink {
        StreetVehicleRentalLink {
            edge_id,
            from_vertex,
            to_vertex,
            station,
        }
    }
}

impl Edge for StreetVehicleRentalLink {
    fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    fn edge_type(&self) -> EdgeType {
        EdgeType::StreetVehicleRentalLink
    }

    fn from_vertex(&self) -> VertexId {
        self.from_vertex
    }

    fn to_vertex(&self) -> VertexId {
        self.to_vertex
    }

    fn traverse(&self, s0: &Arc<State>) -> Option<State> {
        if !s0.request().allow_vehicle_rental {
            return None;
        }
        // two links in a row would let a station serve as a shortcut around
        // turn restrictions
        if s0.back_edge().is_some_and(|e| e.edge_type.is_rental_link()) {
            return None;
        }
        let mut s1 = s0.edit(self);
        s1.set_back_mode(s0.non_transit_mode());
        s1.make_state()
    }

    fn weight_lower_bound(&self, request: &RoutingRequest) -> f64 {
        if request
            .modes
            .contains(self.station.vehicle_type.traverse_mode())
        {
            0.0
        } else {
            f64::INFINITY
        }
    }
}
