use super::VehicleRentalStation;
use crate::error::GbfsError;
use bambam_core::model::rental::VehicleType;
use geo::{Rect, coord};
use serde::{Deserialize, Serialize};

/// filters for listing rental stations.
#[derive(Clone, Debug, Default)]
pub struct StationQuery {
    /// only stations inside this longitude/latitude box. `None` is the whole world.
    pub envelope: Option<Rect<f64>>,
    /// only stations belonging to this network
    pub company: Option<String>,
    /// locale tag used to resolve station names
    pub locale: Option<String>,
}

impl StationQuery {
    /// builds a query from "lat,lon" lower-left and upper-right corners.
    pub fn from_corners(lower_left: &str, upper_right: &str) -> Result<StationQuery, GbfsError> {
        let envelope = parse_envelope(lower_left, upper_right)?;
        Ok(StationQuery {
            envelope: Some(envelope),
            ..Default::default()
        })
    }

    /// border drop-offs and stations without a coordinate are never listed.
    /// the envelope includes its boundary. a wildcard station belongs to
    /// every company.
    pub fn matches(&self, station: &VehicleRentalStation) -> bool {
        if station.is_border_dropoff || !station.has_valid_coordinate() {
            return false;
        }
        if let Some(envelope) = self.envelope.as_ref() {
            let (min, max) = (envelope.min(), envelope.max());
            let inside = min.x <= station.x()
                && station.x() <= max.x
                && min.y <= station.y()
                && station.y() <= max.y;
            if !inside {
                return false;
            }
        }
        match (self.company.as_deref(), station.networks()) {
            (Some(company), Some(networks)) => networks.contains(company),
            _ => true,
        }
    }
}

/// a station as presented to a listing, with its name resolved for a locale.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StationSummary {
    pub id: String,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub networks: Option<Vec<String>>,
    pub vehicle_type: VehicleType,
    pub vehicles_available: Option<u32>,
    pub spaces_available: Option<u32>,
    pub allow_pickup: bool,
    pub allow_dropoff: bool,
    pub is_floating_vehicle: bool,
}

impl StationSummary {
    pub fn new(station: &VehicleRentalStation, locale: Option<&str>) -> StationSummary {
        StationSummary {
            id: station.id().to_string(),
            name: station.name().resolve(locale).to_string(),
            x: station.x(),
            y: station.y(),
            networks: station.sorted_networks(),
            vehicle_type: station.vehicle_type,
            vehicles_available: station.vehicles_available,
            spaces_available: station.spaces_available,
            allow_pickup: station.allow_pickup(),
            allow_dropoff: station.allow_dropoff(),
            is_floating_vehicle: station.is_floating_vehicle,
        }
    }
}

/// parses an envelope from corner strings in "lat,lon" order.
pub fn parse_envelope(lower_left: &str, upper_right: &str) -> Result<Rect<f64>, GbfsError> {
    let (min_y, min_x) = parse_lat_lon(lower_left)?;
    let (max_y, max_x) = parse_lat_lon(upper_right)?;
    Ok(Rect::new(
        coord! { x: min_x, y: min_y },
        coord! { x: max_x, y: max_y },
    ))
}

fn parse_lat_lon(corner: &str) -> Result<(f64, f64), GbfsError> {
    let invalid = || GbfsError::Envelope(corner.to_string());
    let (lat, lon) = corner.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    if !lat.is_finite() || !lon.is_finite() {
        return Err(invalid());
    }
    Ok((lat, lon))
}
