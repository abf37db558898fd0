use super::{Edge, EdgeId, EdgeType, VertexId};
use crate::model::{
    request::{RoutingRequest, TraverseMode, TraverseModeSet},
    state::State,
};
use std::sync::Arc;
use uom::si::{
    f64::{Length, Time},
    time::second,
};

/// a street segment traversable by the modes in `permission`.
///
/// the state's current non-transit mode decides the speed and reluctance used
/// to cost the segment. distance ridden on a rented vehicle counts toward the
/// minimum rental distance, distance on foot counts toward walk distance.
#[derive(Clone, Debug)]
pub struct StreetEdge {
    pub edge_id: EdgeId,
    pub from_vertex: VertexId,
    pub to_vertex: VertexId,
    pub length: Length,
    pub permission: TraverseModeSet,
}

impl StreetEdge {
    pub fn new(
        edge_id: EdgeId,
        from_vertex: VertexId,
        to_vertex: VertexId,
        length: Length,
        permission: TraverseModeSet,
    ) -> StreetEdge {
        StreetEdge {
            edge_id,
            from_vertex,
            to_vertex,
            length,
            permission,
        }
    }

    pub fn can_traverse(&self, mode: TraverseMode) -> bool {
        self.permission.contains(mode)
    }
}

impl Edge for StreetEdge {
    fn edge_id(&self) -> EdgeId {
        self.edge_id
    }

    fn edge_type(&self) -> EdgeType {
        EdgeType::Street
    }

    fn from_vertex(&self) -> VertexId {
        self.from_vertex
    }

    fn to_vertex(&self) -> VertexId {
        self.to_vertex
    }

    fn distance(&self) -> Length {
        self.length
    }

    fn traverse(&self, s0: &Arc<State>) -> Option<State> {
        let mode = s0.non_transit_mode()?;
        if !self.can_traverse(mode) {
            return None;
        }
        let request = s0.request();
        let speed = request.speed(mode)?;
        let travel_time: Time = self.length / speed;
        let weight = travel_time.get::<second>() * request.reluctance(mode);

        let mut s1 = s0.edit(self);
        s1.increment_time(travel_time);
        s1.increment_weight(weight);
        if s0.is_renting() {
            s1.increment_vehicle_rental_distance(self.length);
        } else if mode == TraverseMode::Walk {
            s1.increment_walk_distance(self.length);
        }
        s1.set_back_mode(Some(mode));
        s1.make_state()
    }

    fn time_lower_bound(&self, request: &RoutingRequest) -> Time {
        let fastest = self
            .permission
            .iter()
            .filter_map(|m| request.speed(m))
            .reduce(|a, b| if b > a { b } else { a });
        match fastest {
            Some(speed) => self.length / speed,
            None => Time::new::<second>(f64::INFINITY),
        }
    }
}
