use super::{RentAVehicleOffEdge, RentAVehicleOnEdge, StreetVehicleRentalLink};
use crate::model::vehicle_rental::VehicleRentalStation;
use bambam_core::model::{
    network::{Edge, EdgeId, EdgeType, VertexId},
    request::RoutingRequest,
    state::State,
};
use std::sync::Arc;
use uom::si::f64::{Length, Time};

/// the closed set of edges attached to a rental station.
#[derive(Clone, Debug)]
pub enum VehicleRentalEdge {
    RentOn(RentAVehicleOnEdge),
    RentOff(RentAVehicleOffEdge),
    Link(StreetVehicleRentalLink),
}

impl VehicleRentalEdge {
    pub fn station(&self) -> &Arc<VehicleRentalStation> {
        match self {
            VehicleRentalEdge::RentOn(e) => &e.station,
            VehicleRentalEdge::RentOff(e) => &e.station,
            VehicleRentalEdge::Link(e) => &e.station,
        }
    }

    fn inner(&self) -> &dyn Edge {
        match self {
            VehicleRentalEdge::RentOn(e) => e,
            VehicleRentalEdge::RentOff(e) => e,
            VehicleRentalEdge::Link(e) => e,
        }
    }
}

impl Edge for VehicleRentalEdge {
    fn edge_id(&self) -> EdgeId {
        self.inner().edge_id()
    }

    fn edge_type(&self) -> EdgeType {
        self.inner().edge_type()
    }

    fn from_vertex(&self) -> VertexId {
        self.inner().from_vertex()
    }

    fn to_vertex(&self) -> VertexId {
        self.inner().to_vertex()
    }

    fn distance(&self) -> Length {
        self.inner().distance()
    }

    fn traverse(&self, s0: &Arc<State>) -> Option<State> {
        self.inner().traverse(s0)
    }

    fn weight_lower_bound(&self, request: &RoutingRequest) -> f64 {
        self.inner().weight_lower_bound(request)
    }

    fn time_lower_bound(&self, request: &RoutingRequest) -> Time {
        self.inner().time_lower_bound(request)
    }
}

impl From<RentAVehicleOnEdge> for VehicleRentalEdge {
    fn from(value: RentAVehicleOnEdge) -> Self {
        VehicleRentalEdge::RentOn(value)
    }
}

impl From<RentAVehicleOffEdge> for VehicleRentalEdge {
    fn from(value: RentAVehicleOffEdge) -> Self {
        VehicleRentalEdge::RentOff(value)
    }
}

impl From<StreetVehicleRentalLink> for VehicleRentalEdge {
    fn from(value: StreetVehicleRentalLink) -> Self {
        VehicleRentalEdge::Link(value)
    }
}
