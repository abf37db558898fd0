use super::{StationQuery, StationSummary, VehicleRentalRegion, VehicleRentalStation};
use itertools::Itertools;
use std::{collections::HashMap, sync::Arc};

/// the current set of rental stations and operating regions shared between
/// data updaters and searches.
///
/// stations are held as `Arc` snapshots. an update replaces a station's
/// `Arc` rather than changing it, so edges built from an earlier snapshot
/// keep reading consistent data.
#[derive(Default, Debug)]
pub struct VehicleRentalStationService {
    stations: HashMap<String, Arc<VehicleRentalStation>>,
    regions: HashMap<String, VehicleRentalRegion>,
}

impl VehicleRentalStationService {
    pub fn new() -> VehicleRentalStationService {
        Self::default()
    }

    /// adds a station, replacing any station with the same id. returns the
    /// replaced station.
    pub fn add_station(
        &mut self,
        station: Arc<VehicleRentalStation>,
    ) -> Option<Arc<VehicleRentalStation>> {
        self.stations.insert(station.id().to_string(), station)
    }

    pub fn remove_station(&mut self, station_id: &str) -> Option<Arc<VehicleRentalStation>> {
        self.stations.remove(station_id)
    }

    pub fn get_station(&self, station_id: &str) -> Option<&Arc<VehicleRentalStation>> {
        self.stations.get(station_id)
    }

    pub fn stations(&self) -> impl Iterator<Item = &Arc<VehicleRentalStation>> {
        self.stations.values()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// adds the operating region for a network, replacing any previous region
    /// of that network.
    pub fn add_region(&mut self, region: VehicleRentalRegion) {
        self.regions.insert(region.network.clone(), region);
    }

    pub fn remove_region(&mut self, network: &str) -> Option<VehicleRentalRegion> {
        self.regions.remove(network)
    }

    pub fn regions(&self) -> &HashMap<String, VehicleRentalRegion> {
        &self.regions
    }

    /// whether a floating vehicle of `network` may be left at a point. the
    /// street layer consults this before offering a floating drop-off. a
    /// network without a known region is unrestricted.
    pub fn region_allows_dropoff(&self, network: &str, x: f64, y: f64) -> bool {
        match self.regions.get(network) {
            Some(region) => region.contains(x, y),
            None => true,
        }
    }

    /// lists the stations matching a query, sorted by id.
    pub fn query_stations(&self, query: &StationQuery) -> Vec<StationSummary> {
        self.stations
            .values()
            .filter(|station| query.matches(station))
            .sorted_by(|a, b| a.id().cmp(b.id()))
            .map(|station| StationSummary::new(station, query.locale.as_deref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::VehicleRentalStationService;
    use crate::model::vehicle_rental::{
        LocalizedName, RentalStation, StationQuery, VehicleRentalRegion, VehicleRentalStation,
    };
    use bambam_core::model::rental::VehicleType;
    use geo::{MultiPolygon, polygon};
    use std::sync::Arc;

    fn station(id: &str, x: f64, y: f64, network: &str) -> VehicleRentalStation {
        VehicleRentalStation::new(
            RentalStation::new(id, LocalizedName::new(id), x, y).with_networks([network]),
            VehicleType::Bicycle,
        )
    }

    #[test]
    fn test_add_replaces_by_id() {
        let mut service = VehicleRentalStationService::new();
        let first = Arc::new(station("a", -122.6, 45.5, "LIME").with_availability(5, 6));
        assert!(service.add_station(first.clone()).is_none());

        let second = Arc::new(station("a", -122.7, 45.6, "LIME").with_availability(4, 7));
        let replaced = service
            .add_station(second)
            .expect("station with same id should be replaced");
        assert_eq!(service.station_count(), 1);
        assert_eq!(replaced.vehicles_available, Some(5));
        // the earlier snapshot is untouched
        assert_eq!(first.vehicles_available, Some(5));
        let current = service.get_station("a").expect("station should exist");
        assert_eq!(current.vehicles_available, Some(4));

        assert!(service.remove_station("a").is_some());
        assert_eq!(service.station_count(), 0);
    }

    #[test]
    fn test_query_filters() {
        let mut service = VehicleRentalStationService::new();
        service.add_station(Arc::new(station("inside", -122.65, 45.52, "LIME")));
        service.add_station(Arc::new(station("outside", -121.0, 44.0, "LIME")));
        service.add_station(Arc::new(station("unset", 0.0, 0.0, "LIME")));
        service.add_station(Arc::new(station("zip", -122.64, 45.53, "ZIP")));
        let mut border = station("border", -122.63, 45.51, "LIME");
        border.is_border_dropoff = true;
        service.add_station(Arc::new(border));

        let query = StationQuery::from_corners("45.0,-123.0", "46.0,-122.0")
            .expect("corners should parse");
        let ids: Vec<String> = service
            .query_stations(&query)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["inside".to_string(), "zip".to_string()]);

        let query = StationQuery {
            company: Some(String::from("LIME")),
            ..query
        };
        let ids: Vec<String> = service
            .query_stations(&query)
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["inside".to_string()]);

        let everywhere = StationQuery::default();
        assert_eq!(service.query_stations(&everywhere).len(), 3);
    }

    #[test]
    fn test_region_allows_dropoff() {
        let mut service = VehicleRentalStationService::new();
        let square = polygon![
            (x: 0.0, y: 0.0),
            (x: 2.0, y: 0.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 2.0),
            (x: 0.0, y: 0.0),
        ];
        service.add_region(VehicleRentalRegion::new(
            "LIME",
            MultiPolygon::new(vec![square]),
        ));
        assert!(service.region_allows_dropoff("LIME", 1.0, 1.0));
        assert!(!service.region_allows_dropoff("LIME", 3.0, 1.0));
        assert!(service.region_allows_dropoff("ZIP", 3.0, 1.0));

        assert!(service.remove_region("LIME").is_some());
        assert!(service.region_allows_dropoff("LIME", 3.0, 1.0));
    }
}
