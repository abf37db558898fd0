use crate::{
    error::GbfsError,
    model::{
        data_source::VehicleRentalDataSource, vehicle_rental::VehicleRentalStationService,
    },
};
use std::{
    collections::HashSet,
    sync::{Arc, RwLock},
};

/// counts of station changes applied by one update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub added: usize,
    pub replaced: usize,
    pub removed: usize,
    pub regions: usize,
    pub removed_regions: usize,
}

/// applies the data of one rental source to a shared station service.
///
/// searches only ever read the service; the updater is its only writer.
/// stations and regions the source stops reporting are removed, but only
/// those this updater added, so several updaters may share one service.
pub struct VehicleRentalUpdater<S: VehicleRentalDataSource> {
    source: S,
    service: Arc<RwLock<VehicleRentalStationService>>,
    known_station_ids: HashSet<String>,
    known_region_networks: HashSet<String>,
}

impl<S: VehicleRentalDataSource> VehicleRentalUpdater<S> {
    pub fn new(
        source: S,
        service: Arc<RwLock<VehicleRentalStationService>>,
    ) -> VehicleRentalUpdater<S> {
        VehicleRentalUpdater {
            source,
            service,
            known_station_ids: HashSet::new(),
            known_region_networks: HashSet::new(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// refreshes the source and writes any changes to the service.
    pub fn run_once(&mut self) -> Result<UpdateSummary, GbfsError> {
        self.source.refresh()?;
        let mut summary = UpdateSummary::default();
        if !self.source.stations_changed() && !self.source.regions_changed() {
            return Ok(summary);
        }

        let mut service = self.service.write().map_err(|_| GbfsError::LockPoisoned)?;

        if self.source.regions_changed() {
            let mut fresh_networks = HashSet::new();
            for region in self.source.regions() {
                fresh_networks.insert(region.network.clone());
                service.add_region(region.clone());
                summary.regions += 1;
            }
            for stale_network in self.known_region_networks.difference(&fresh_networks) {
                if service.remove_region(stale_network).is_some() {
                    summary.removed_regions += 1;
                }
            }
            self.known_region_networks = fresh_networks;
        }

        if self.source.stations_changed() {
            let mut fresh_ids = HashSet::new();
            for station in self.source.stations() {
                fresh_ids.insert(station.id().to_string());
                match service.add_station(Arc::new(station.clone())) {
                    Some(_) => summary.replaced += 1,
                    None => summary.added += 1,
                }
            }
            for stale_id in self.known_station_ids.difference(&fresh_ids) {
                if service.remove_station(stale_id).is_some() {
                    summary.removed += 1;
                }
            }
            self.known_station_ids = fresh_ids;
        }

        log::info!(
            "rental update: stations {} added, {} replaced, {} removed; regions {} set, {} removed",
            summary.added,
            summary.replaced,
            summary.removed,
            summary.regions,
            summary.removed_regions
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::{UpdateSummary, VehicleRentalUpdater};
    use crate::{
        error::GbfsError,
        model::{
            data_source::VehicleRentalDataSource,
            vehicle_rental::{
                LocalizedName, RentalStation, VehicleRentalRegion, VehicleRentalStation,
                VehicleRentalStationService,
            },
        },
    };
    use bambam_core::model::rental::VehicleType;
    use geo::{MultiPolygon, polygon};
    use std::sync::{Arc, RwLock};

    /// hands out scripted sequences of station and region lists, one per
    /// refresh
    #[derive(Default)]
    struct ScriptedSource {
        batches: Vec<Vec<VehicleRentalStation>>,
        current: Vec<VehicleRentalStation>,
        changed: bool,
        region_batches: Vec<Vec<VehicleRentalRegion>>,
        current_regions: Vec<VehicleRentalRegion>,
        regions_changed: bool,
    }

    impl VehicleRentalDataSource for ScriptedSource {
        fn refresh(&mut self) -> Result<(), GbfsError> {
            if self.batches.is_empty() {
                self.changed = false;
            } else {
                self.current = self.batches.remove(0);
                self.changed = true;
            }
            if self.region_batches.is_empty() {
                self.regions_changed = false;
            } else {
                self.current_regions = self.region_batches.remove(0);
                self.regions_changed = true;
            }
            Ok(())
        }

        fn stations_changed(&self) -> bool {
            self.changed
        }

        fn regions_changed(&self) -> bool {
            self.regions_changed
        }

        fn stations(&self) -> &[VehicleRentalStation] {
            &self.current
        }

        fn regions(&self) -> &[VehicleRentalRegion] {
            &self.current_regions
        }
    }

    fn station(id: &str, vehicles: u32) -> VehicleRentalStation {
        VehicleRentalStation::new(
            RentalStation::new(id, LocalizedName::new(id), -122.6, 45.5).with_networks(["LIME"]),
            VehicleType::Bicycle,
        )
        .with_availability(vehicles, 2)
    }

    #[test]
    fn test_run_once_replaces_and_removes() {
        let source = ScriptedSource {
            batches: vec![
                vec![station("a", 1), station("b", 1)],
                vec![station("a", 3)],
            ],
            ..Default::default()
        };
        let service = Arc::new(RwLock::new(VehicleRentalStationService::new()));
        let mut updater = VehicleRentalUpdater::new(source, service.clone());

        let first = updater.run_once().expect("update should succeed");
        assert_eq!(
            first,
            UpdateSummary {
                added: 2,
                ..Default::default()
            }
        );

        // a search holding the old snapshot keeps seeing it
        let snapshot = service
            .read()
            .expect("lock should not be poisoned")
            .get_station("a")
            .cloned()
            .expect("station a should exist");

        let second = updater.run_once().expect("update should succeed");
        assert_eq!(second.replaced, 1);
        assert_eq!(second.removed, 1);
        let guard = service.read().expect("lock should not be poisoned");
        assert_eq!(guard.station_count(), 1);
        let current = guard.get_station("a").expect("station a should exist");
        assert_eq!(current.vehicles_available, Some(3));
        assert_eq!(snapshot.vehicles_available, Some(1));
        drop(guard);

        let third = updater.run_once().expect("update should succeed");
        assert_eq!(third, UpdateSummary::default());
    }

    #[test]
    fn test_run_once_removes_vanished_region() {
        let square = polygon![
            (x: -123.0, y: 45.0),
            (x: -122.0, y: 45.0),
            (x: -122.0, y: 46.0),
            (x: -123.0, y: 46.0),
            (x: -123.0, y: 45.0),
        ];
        let region = VehicleRentalRegion::new("LIME", MultiPolygon::new(vec![square]));
        let source = ScriptedSource {
            region_batches: vec![vec![region], vec![]],
            ..Default::default()
        };
        let service = Arc::new(RwLock::new(VehicleRentalStationService::new()));
        // a region written by another updater
        service
            .write()
            .expect("lock should not be poisoned")
            .add_region(VehicleRentalRegion::new("ZIP", MultiPolygon::new(vec![])));
        let mut updater = VehicleRentalUpdater::new(source, service.clone());

        let first = updater.run_once().expect("update should succeed");
        assert_eq!(first.regions, 1);
        assert!(
            !service
                .read()
                .expect("lock should not be poisoned")
                .region_allows_dropoff("LIME", -121.0, 45.5)
        );

        let second = updater.run_once().expect("update should succeed");
        assert_eq!(
            second,
            UpdateSummary {
                removed_regions: 1,
                ..Default::default()
            }
        );
        let guard = service.read().expect("lock should not be poisoned");
        assert!(guard.region_allows_dropoff("LIME", -121.0, 45.5));
        assert!(!guard.regions().contains_key("LIME"));
        assert!(guard.regions().contains_key("ZIP"));
    }
}
