use crate::model::network::EdgeId;

/// programming errors detected while building a successor state. these are
/// distinct from an ordinary rejected traversal, which is simply `None`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("edge {edge_id} produced an invalid weight increment of {value}")]
    InvalidWeightIncrement { edge_id: EdgeId, value: f64 },
    #[error("edge {edge_id} produced an invalid time increment of {value} seconds")]
    InvalidTimeIncrement { edge_id: EdgeId, value: f64 },
    #[error("edge {edge_id} produced an invalid distance increment of {value} meters")]
    InvalidDistanceIncrement { edge_id: EdgeId, value: f64 },
}
