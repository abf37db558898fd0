use super::State;
use crate::model::{
    network::{BackEdge, EdgeType},
    rental::VehicleType,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// a rental episode recovered from a finished path, in real-world time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RentalEpisode {
    pub pickup_station_id: Option<String>,
    pub vehicle_type: VehicleType,
    pub pickup_time: i64,
    pub dropoff_time: Option<i64>,
}

/// the states of a finished search path in chronological order.
#[derive(Debug, Clone)]
pub struct GraphPath {
    states: Vec<Arc<State>>,
}

impl GraphPath {
    /// walks the back-state chain from `last`. depart-at chains are built
    /// from the origin forward so they are reversed; arrive-by chains already
    /// end at the earliest state.
    pub fn new(last: Arc<State>) -> GraphPath {
        let arrive_by = last.is_arrive_by();
        let mut states = vec![];
        let mut current = Some(last);
        while let Some(state) = current {
            current = state.back_state().cloned();
            states.push(state);
        }
        if !arrive_by {
            states.reverse();
        }
        GraphPath { states }
    }

    pub fn states(&self) -> &[Arc<State>] {
        &self.states
    }

    pub fn start_time(&self) -> Option<i64> {
        self.states.first().map(|s| s.time())
    }

    pub fn end_time(&self) -> Option<i64> {
        self.states.last().map(|s| s.time())
    }

    pub fn duration_seconds(&self) -> i64 {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// total generalized cost, held by whichever state the search finished at
    pub fn weight(&self) -> f64 {
        self.states
            .iter()
            .map(|s| s.weight())
            .fold(0.0, f64::max)
    }

    pub fn back_edges(&self) -> Vec<BackEdge> {
        self.states.iter().filter_map(|s| s.back_edge()).collect()
    }

    /// pairs rental pickups with the next drop-off in chronological order.
    /// an episode still open at the end of the path has no drop-off time.
    pub fn rental_episodes(&self) -> Vec<RentalEpisode> {
        let mut episodes = vec![];
        let mut open: Option<RentalEpisode> = None;
        for state in self.states.iter() {
            let Some(back_edge) = state.back_edge() else {
                continue;
            };
            match back_edge.edge_type {
                EdgeType::RentAVehicleOn => {
                    if let Some(unfinished) = open.take() {
                        episodes.push(unfinished);
                    }
                    open = Some(RentalEpisode {
                        pickup_station_id: added_station_id(state),
                        vehicle_type: state.vehicle_type(),
                        pickup_time: state.time(),
                        dropoff_time: None,
                    });
                }
                EdgeType::RentAVehicleOff => {
                    if let Some(mut episode) = open.take() {
                        episode.dropoff_time = Some(state.time());
                        episodes.push(episode);
                    }
                }
                _ => {}
            }
        }
        if let Some(unfinished) = open {
            episodes.push(unfinished);
        }
        episodes
    }
}

/// the station id a pickup state added to the path's rented vehicles.
fn added_station_id(state: &State) -> Option<String> {
    let previous = state.back_state()?;
    state
        .rented_vehicles()
        .difference(previous.rented_vehicles())
        .next()
        .cloned()
}
