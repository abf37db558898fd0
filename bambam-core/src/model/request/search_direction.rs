use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// the chronological direction of a search. edges that change the rental state
/// swap their real-world roles when the search runs [`SearchDirection::ArriveBy`].
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SearchDirection {
    /// forward in time from a fixed departure time
    #[default]
    DepartAt,
    /// backward in time from a fixed arrival time
    ArriveBy,
}

impl SearchDirection {
    pub fn from_arrive_by(arrive_by: bool) -> SearchDirection {
        if arrive_by {
            SearchDirection::ArriveBy
        } else {
            SearchDirection::DepartAt
        }
    }

    pub fn is_arrive_by(&self) -> bool {
        matches!(self, SearchDirection::ArriveBy)
    }
}

impl Display for SearchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDirection::DepartAt => write!(f, "depart_at"),
            SearchDirection::ArriveBy => write!(f, "arrive_by"),
        }
    }
}
