use super::LocalizedName;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// a place where rental vehicles may be picked up or dropped off.
///
/// `networks` of `None` is a wildcard: the station is compatible with every
/// rental network. an empty set is compatible with none.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RentalStation {
    pub id: String,
    pub name: LocalizedName,
    /// longitude
    pub x: f64,
    /// latitude
    pub y: f64,
    #[serde(default = "default_allowed")]
    pub allow_dropoff: bool,
    #[serde(default = "default_allowed")]
    pub allow_pickup: bool,
    #[serde(default)]
    pub networks: Option<HashSet<String>>,
}

impl RentalStation {
    pub fn new(id: &str, name: LocalizedName, x: f64, y: f64) -> RentalStation {
        RentalStation {
            id: id.to_string(),
            name,
            x,
            y,
            allow_dropoff: true,
            allow_pickup: true,
            networks: None,
        }
    }

    pub fn with_networks<'a>(
        mut self,
        networks: impl IntoIterator<Item = &'a str>,
    ) -> RentalStation {
        self.networks = Some(networks.into_iter().map(String::from).collect());
        self
    }

    /// a coordinate of zero on either axis marks a station whose location
    /// was never set.
    pub fn has_valid_coordinate(&self) -> bool {
        self.x != 0.0 && self.y != 0.0
    }

    pub fn point(&self) -> geo::Point<f64> {
        geo::Point::new(self.x, self.y)
    }
}

fn default_allowed() -> bool {
    true
}
