mod edge;
mod edge_type;
mod graph_ids;
mod street_edge;

pub use edge::Edge;
pub use edge_type::{BackEdge, EdgeType};
pub use graph_ids::{EdgeId, VertexId};
pub use street_edge::StreetEdge;
