use super::{
    FreeBikeStatusData, GbfsDataSourceConfig, GbfsFeed, GeofencingZonesData,
    StationInformationData, StationStatusData, StationStatusRecord, VehicleRentalDataSource,
};
use crate::{
    error::GbfsError,
    model::vehicle_rental::{
        LocalizedName, RentalStation, VehicleRentalRegion, VehicleRentalStation,
    },
};
use geo_types::{Geometry, MultiPolygon};
use serde::de::DeserializeOwned;
use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
};

const STATION_INFORMATION: &str = "station_information.json";
const STATION_STATUS: &str = "station_status.json";
const FREE_BIKE_STATUS: &str = "free_bike_status.json";
const GEOFENCING_ZONES: &str = "geofencing_zones.json";

/// `last_updated` of each station feed as of the most recent refresh
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct StationFeedVersions {
    information: Option<i64>,
    status: Option<i64>,
    free_bikes: Option<i64>,
}

/// reads rental stations and an operating region from a directory of GBFS
/// feed files.
///
/// docked stations come from station_information.json joined with
/// station_status.json. each free bike in free_bike_status.json becomes a
/// floating station that allows pickup of its one vehicle and no drop-off.
/// polygons in geofencing_zones.json become the network's operating region.
/// a feed counts as changed when its `last_updated` value changes.
pub struct GbfsFileDataSource {
    config: GbfsDataSourceConfig,
    stations: Vec<VehicleRentalStation>,
    regions: Vec<VehicleRentalRegion>,
    stations_version: Option<StationFeedVersions>,
    regions_version: Option<i64>,
    stations_changed: bool,
    regions_changed: bool,
}

impl GbfsFileDataSource {
    pub fn new(config: GbfsDataSourceConfig) -> Result<GbfsFileDataSource, GbfsError> {
        if config.network.trim().is_empty() {
            return Err(GbfsError::Configuration(String::from(
                "network name must not be empty",
            )));
        }
        if !Path::new(&config.directory).is_dir() {
            return Err(GbfsError::Configuration(format!(
                "GBFS directory {} does not exist",
                config.directory
            )));
        }
        Ok(GbfsFileDataSource {
            config,
            stations: vec![],
            regions: vec![],
            stations_version: None,
            regions_version: None,
            stations_changed: false,
            regions_changed: false,
        })
    }

    pub fn network(&self) -> &str {
        &self.config.network
    }

    fn feed_path(&self, filename: &str) -> PathBuf {
        Path::new(&self.config.directory).join(filename)
    }

    /// reads a feed file, or `None` if the file is absent.
    fn read_feed<T: DeserializeOwned>(
        &self,
        filename: &str,
    ) -> Result<Option<GbfsFeed<T>>, GbfsError> {
        let path = self.feed_path(filename);
        if !path.exists() {
            return Ok(None);
        }
        let path_str = path.to_string_lossy().to_string();
        let contents = std::fs::read_to_string(&path).map_err(|source| GbfsError::Io {
            path: path_str.clone(),
            source,
        })?;
        let feed = serde_json::from_str(&contents).map_err(|source| GbfsError::Json {
            path: path_str,
            source,
        })?;
        Ok(Some(feed))
    }

    fn networks(&self) -> Option<HashSet<String>> {
        Some(HashSet::from([self.config.network.clone()]))
    }

    fn docked_stations(
        &self,
        information: &StationInformationData,
        status: &StationStatusData,
    ) -> Vec<VehicleRentalStation> {
        let status_by_id: HashMap<&str, &StationStatusRecord> = status
            .stations
            .iter()
            .map(|s| (s.station_id.as_str(), s))
            .collect();
        information
            .stations
            .iter()
            .filter_map(|record| {
                let Some(status) = status_by_id.get(record.station_id.as_str()) else {
                    log::warn!(
                        "station {} of network {} has no entry in {STATION_STATUS}, skipping",
                        record.station_id,
                        self.config.network
                    );
                    return None;
                };
                let mut station = RentalStation::new(
                    &record.station_id,
                    LocalizedName::new(&record.name),
                    record.lon,
                    record.lat,
                );
                station.networks = self.networks();
                station.allow_pickup = status.is_renting;
                station.allow_dropoff = status.is_returning;
                let mut rental = VehicleRentalStation::new(station, self.config.vehicle_type);
                rental.vehicles_available = Some(status.num_bikes_available);
                rental.spaces_available = status.num_docks_available;
                Some(rental)
            })
            .collect()
    }

    fn floating_stations(&self, free_bikes: &FreeBikeStatusData) -> Vec<VehicleRentalStation> {
        free_bikes
            .bikes
            .iter()
            .filter(|bike| !bike.is_reserved && !bike.is_disabled)
            .map(|bike| {
                let mut station = RentalStation::new(
                    &bike.bike_id,
                    LocalizedName::new(&bike.bike_id),
                    bike.lon,
                    bike.lat,
                );
                station.networks = self.networks();
                station.allow_pickup = true;
                station.allow_dropoff = false;
                let mut rental = VehicleRentalStation::new(station, self.config.vehicle_type)
                    .with_availability(1, 0);
                rental.is_floating_vehicle = true;
                rental
            })
            .collect()
    }

    /// merges every polygonal zone into a single region for the network.
    fn build_region(
        &self,
        zones: GeofencingZonesData,
    ) -> Result<Option<VehicleRentalRegion>, GbfsError> {
        let mut polygons = vec![];
        for feature in zones.geofencing_zones.features {
            let Some(geometry) = feature.geometry else {
                continue;
            };
            let geometry = Geometry::<f64>::try_from(geometry).map_err(|e| {
                GbfsError::GeoJson {
                    network: self.config.network.clone(),
                    message: e.to_string(),
                }
            })?;
            match geometry {
                Geometry::Polygon(polygon) => polygons.push(polygon),
                Geometry::MultiPolygon(multi_polygon) => polygons.extend(multi_polygon.0),
                _ => {
                    return Err(GbfsError::GeoJson {
                        network: self.config.network.clone(),
                        message: String::from("geofencing zones must be polygons"),
                    });
                }
            }
        }
        if polygons.is_empty() {
            Ok(None)
        } else {
            let region = VehicleRentalRegion::new(&self.config.network, MultiPolygon::new(polygons));
            Ok(Some(region))
        }
    }

    fn refresh_stations(&mut self) -> Result<(), GbfsError> {
        let information = self.read_feed::<StationInformationData>(STATION_INFORMATION)?;
        let status = self.read_feed::<StationStatusData>(STATION_STATUS)?;
        let free_bikes = self.read_feed::<FreeBikeStatusData>(FREE_BIKE_STATUS)?;
        if information.is_some() && status.is_none() {
            return Err(GbfsError::Configuration(format!(
                "{} has {STATION_INFORMATION} but no {STATION_STATUS}",
                self.config.directory
            )));
        }
        if information.is_none() && free_bikes.is_none() {
            return Err(GbfsError::Configuration(format!(
                "{} has neither {STATION_INFORMATION} nor {FREE_BIKE_STATUS}",
                self.config.directory
            )));
        }

        let versions = StationFeedVersions {
            information: information.as_ref().map(|f| f.last_updated),
            status: status.as_ref().map(|f| f.last_updated),
            free_bikes: free_bikes.as_ref().map(|f| f.last_updated),
        };
        self.stations_changed = self.stations_version != Some(versions);
        if !self.stations_changed {
            log::debug!("station feeds of network {} unchanged", self.config.network);
            return Ok(());
        }

        let mut stations = vec![];
        if let (Some(information), Some(status)) = (information.as_ref(), status.as_ref()) {
            stations.extend(self.docked_stations(&information.data, &status.data));
        }
        if let Some(free_bikes) = free_bikes.as_ref() {
            stations.extend(self.floating_stations(&free_bikes.data));
        }
        log::info!(
            "loaded {} vehicle rental stations for network {}",
            stations.len(),
            self.config.network
        );
        self.stations = stations;
        self.stations_version = Some(versions);
        Ok(())
    }

    fn refresh_regions(&mut self) -> Result<(), GbfsError> {
        let zones = self.read_feed::<GeofencingZonesData>(GEOFENCING_ZONES)?;
        let version = zones.as_ref().map(|f| f.last_updated);
        self.regions_changed = version != self.regions_version;
        if !self.regions_changed {
            return Ok(());
        }
        self.regions = match zones {
            Some(feed) => self.build_region(feed.data)?.into_iter().collect(),
            None => vec![],
        };
        self.regions_version = version;
        Ok(())
    }
}

impl VehicleRentalDataSource for GbfsFileDataSource {
    fn refresh(&mut self) -> Result<(), GbfsError> {
        self.refresh_stations()?;
        self.refresh_regions()
    }

    fn stations_changed(&self) -> bool {
        self.stations_changed
    }

    fn regions_changed(&self) -> bool {
        self.regions_changed
    }

    fn stations(&self) -> &[VehicleRentalStation] {
        &self.stations
    }

    fn regions(&self) -> &[VehicleRentalRegion] {
        &self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::GbfsFileDataSource;
    use crate::{
        error::GbfsError,
        model::data_source::{GbfsDataSourceConfig, VehicleRentalDataSource},
    };
    use bambam_core::model::rental::VehicleType;

    fn fixture_config() -> GbfsDataSourceConfig {
        GbfsDataSourceConfig {
            network: String::from("LIME"),
            directory: format!("{}/test/gbfs", env!("CARGO_MANIFEST_DIR")),
            vehicle_type: VehicleType::Bicycle,
        }
    }

    #[test]
    fn test_parse_stations() {
        let mut source = GbfsFileDataSource::new(fixture_config())
            .expect("test invariant failed: fixture directory should exist");
        source.refresh().expect("fixture feeds should load");
        assert!(source.stations_changed());

        let stations = source.stations();
        assert_eq!(stations.len(), 4);

        let first = &stations[0];
        assert!(first.allow_pickup());
        assert!(first.allow_dropoff());
        assert_eq!(first.vehicles_available, Some(5));
        assert_eq!(first.spaces_available, Some(6));
        assert_eq!(first.id(), "portland");
        assert!(!first.is_floating_vehicle);
        assert_eq!(first.name().to_string(), "Portland");
        assert!(first.networks().is_some_and(|n| n.contains("LIME")));
        assert_eq!(first.x(), -122.627205);
        assert_eq!(first.y(), 45.543855);

        let second = &stations[1];
        assert!(second.allow_pickup());
        assert!(!second.allow_dropoff());
        assert_eq!(second.vehicles_available, Some(1));
        assert_eq!(second.spaces_available, Some(0));
        assert_eq!(second.id(), "TEST1");
        assert!(second.is_floating_vehicle);
        assert_eq!(second.name().to_string(), "TEST1");
        assert!(second.networks().is_some_and(|n| n.contains("LIME")));
        assert_eq!(second.x(), -122.65073);
        assert_eq!(second.y(), 45.519958);

        // reserved bikes are not offered
        assert!(stations.iter().all(|s| s.id() != "TEST4"));
    }

    #[test]
    fn test_unchanged_feeds_are_not_reported() {
        let mut source = GbfsFileDataSource::new(fixture_config())
            .expect("test invariant failed: fixture directory should exist");
        source.refresh().expect("fixture feeds should load");
        assert!(source.stations_changed());
        assert!(source.regions_changed());
        source.refresh().expect("fixture feeds should load");
        assert!(!source.stations_changed());
        assert!(!source.regions_changed());
        assert_eq!(source.stations().len(), 4);
    }

    #[test]
    fn test_parse_region() {
        let mut source = GbfsFileDataSource::new(fixture_config())
            .expect("test invariant failed: fixture directory should exist");
        source.refresh().expect("fixture feeds should load");
        let regions = source.regions();
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].network, "LIME");
        assert!(regions[0].contains(-122.627205, 45.543855));
        assert!(!regions[0].contains(-121.0, 45.543855));
    }

    #[test]
    fn test_missing_directory() {
        let config = GbfsDataSourceConfig {
            directory: String::from("/does/not/exist"),
            ..fixture_config()
        };
        let result = GbfsFileDataSource::new(config);
        assert!(matches!(result, Err(GbfsError::Configuration(_))));
    }
}
