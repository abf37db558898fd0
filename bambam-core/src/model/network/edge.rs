use super::{EdgeId, EdgeType, VertexId};
use crate::model::{request::RoutingRequest, state::State};
use std::{fmt::Debug, sync::Arc};
use uom::{
    si::f64::{Length, Time},
    ConstZero,
};

/// the traversal contract shared by every edge of the search graph.
///
/// a search driver pops a [`State`] from its frontier and calls
/// [`Edge::traverse`] on each outgoing edge. a result of `None` means the
/// transition is illegal from that state. this is the normal outcome for
/// most edges and is not an error.
///
/// traversal must be deterministic and must not mutate the predecessor state
/// or anything shared with it.
pub trait Edge: Debug + Send + Sync {
    fn edge_id(&self) -> EdgeId;

    fn edge_type(&self) -> EdgeType;

    fn from_vertex(&self) -> VertexId;

    fn to_vertex(&self) -> VertexId;

    fn distance(&self) -> Length {
        Length::ZERO
    }

    /// produce the successor of `s0` across this edge, or `None` if the
    /// transition is not permitted.
    fn traverse(&self, s0: &Arc<State>) -> Option<State>;

    /// an admissible lower bound on the weight added by traversing this edge.
    /// returning infinity prunes the edge from cost-bounded searches.
    fn weight_lower_bound(&self, _request: &RoutingRequest) -> f64 {
        0.0
    }

    /// an admissible lower bound on the time spent traversing this edge.
    fn time_lower_bound(&self, _request: &RoutingRequest) -> Time {
        Time::ZERO
    }
}
