use crate::{
    error::GbfsError,
    model::{
        data_source::{GbfsDataSourceConfig, GbfsFileDataSource},
        updater::VehicleRentalUpdater,
        vehicle_rental::{StationQuery, StationSummary, VehicleRentalStationService},
    },
};
use std::sync::{Arc, RwLock};

/// loads one GBFS source into a fresh station service and prints the
/// stations matching `query` to stdout as a JSON array.
pub fn run_station_query(
    config: GbfsDataSourceConfig,
    query: &StationQuery,
) -> Result<(), GbfsError> {
    let summaries = load_and_query(config, query)?;
    let output = serde_json::to_string_pretty(&summaries).map_err(|source| GbfsError::Json {
        path: String::from("<stdout>"),
        source,
    })?;
    println!("{output}");
    Ok(())
}

pub fn load_and_query(
    config: GbfsDataSourceConfig,
    query: &StationQuery,
) -> Result<Vec<StationSummary>, GbfsError> {
    let network = config.network.clone();
    let source = GbfsFileDataSource::new(config)?;
    let service = Arc::new(RwLock::new(VehicleRentalStationService::new()));
    let mut updater = VehicleRentalUpdater::new(source, service.clone());
    let summary = updater.run_once()?;
    log::info!(
        "loaded network {network}: {} stations added, {} regions",
        summary.added,
        summary.regions
    );
    let service = service.read().map_err(|_| GbfsError::LockPoisoned)?;
    let summaries = service.query_stations(query);
    log::info!("{} stations match the query", summaries.len());
    Ok(summaries)
}

#[cfg(test)]
mod test {
    use super::load_and_query;
    use crate::model::{data_source::GbfsDataSourceConfig, vehicle_rental::StationQuery};
    use bambam_core::model::rental::VehicleType;

    fn test_config() -> GbfsDataSourceConfig {
        GbfsDataSourceConfig {
            network: String::from("LIME"),
            directory: format!("{}/test/gbfs", env!("CARGO_MANIFEST_DIR")),
            vehicle_type: VehicleType::Bicycle,
        }
    }

    #[test]
    fn test_query_all_stations() {
        let summaries = load_and_query(test_config(), &StationQuery::default())
            .expect("test invariant failed: fixture should load");
        assert_eq!(summaries.len(), 4);
        assert!(summaries.iter().any(|s| s.id == "portland"));
    }

    #[test]
    fn test_query_other_company() {
        let query = StationQuery {
            company: Some(String::from("ZIP")),
            ..Default::default()
        };
        let summaries = load_and_query(test_config(), &query)
            .expect("test invariant failed: fixture should load");
        assert!(summaries.is_empty());
    }

    #[test]
    fn test_query_envelope() {
        let query = StationQuery::from_corners("45.54,-122.63", "45.55,-122.62")
            .expect("test invariant failed: corners should parse");
        let summaries = load_and_query(test_config(), &query)
            .expect("test invariant failed: fixture should load");
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["portland"]);
    }
}
