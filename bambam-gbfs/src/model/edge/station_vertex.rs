use super::{
    RentAVehicleOffEdge, RentAVehicleOnEdge, StreetVehicleRentalLink, VehicleRentalEdge,
};
use crate::model::vehicle_rental::VehicleRentalStation;
use bambam_core::model::network::{EdgeId, VertexId};
use std::sync::Arc;

/// the graph vertex of a rental station.
#[derive(Clone, Debug)]
pub struct VehicleRentalStationVertex {
    pub vertex_id: VertexId,
    pub station: Arc<VehicleRentalStation>,
}

impl VehicleRentalStationVertex {
    pub fn new(vertex_id: VertexId, station: Arc<VehicleRentalStation>) -> Self {
        VehicleRentalStationVertex { vertex_id, station }
    }

    pub fn label(&self) -> String {
        format!("vehicle rental station {}", self.station.id())
    }

    /// builds the links to and from `street_vertex` plus the pickup and
    /// drop-off loop edges, numbered from `first_edge_id`.
    pub fn build_edges(
        &self,
        street_vertex: VertexId,
        first_edge_id: EdgeId,
    ) -> Vec<VehicleRentalEdge> {
        let id = |offset: usize| EdgeId(first_edge_id.0 + offset);
        let station = &self.station;
        vec![
            StreetVehicleRentalLink::new(id(0), street_vertex, self.vertex_id, station.clone())
                .into(),
            StreetVehicleRentalLink::new(id(1), self.vertex_id, street_vertex, station.clone())
                .into(),
            RentAVehicleOnEdge::new(id(2), self.vertex_id, station.clone()).into(),
            RentAVehicleOffEdge::new(id(3), self.vertex_id, station.clone()).into(),
        ]
    }
}
