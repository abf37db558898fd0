use serde::{Deserialize, Deserializer};

/// the envelope shared by every GBFS feed file.
#[derive(Deserialize, Debug, Clone)]
pub struct GbfsFeed<T> {
    pub last_updated: i64,
    #[serde(default)]
    pub ttl: Option<i64>,
    pub data: T,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StationInformationData {
    pub stations: Vec<StationInformationRecord>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StationInformationRecord {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StationStatusData {
    pub stations: Vec<StationStatusRecord>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StationStatusRecord {
    pub station_id: String,
    pub num_bikes_available: u32,
    #[serde(default)]
    pub num_docks_available: Option<u32>,
    #[serde(default = "default_flag_true", deserialize_with = "deserialize_flag")]
    pub is_renting: bool,
    #[serde(default = "default_flag_true", deserialize_with = "deserialize_flag")]
    pub is_returning: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FreeBikeStatusData {
    pub bikes: Vec<FreeBikeRecord>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FreeBikeRecord {
    pub bike_id: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_reserved: bool,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_disabled: bool,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeofencingZonesData {
    pub geofencing_zones: geojson::FeatureCollection,
}

/// GBFS 1.x writes flags as 0/1 while 2.x writes booleans.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(i) => Ok(i != 0),
    }
}

fn default_flag_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::{GbfsFeed, StationStatusData};
    use serde_json::json;

    #[test]
    fn test_status_flags_accept_ints_and_bools() {
        let feed: GbfsFeed<StationStatusData> = serde_json::from_value(json!({
            "last_updated": 1600000000,
            "ttl": 10,
            "data": { "stations": [
                { "station_id": "a", "num_bikes_available": 2, "is_renting": 1, "is_returning": 0 },
                { "station_id": "b", "num_bikes_available": 0, "num_docks_available": 3,
                  "is_renting": false, "is_returning": true },
                { "station_id": "c", "num_bikes_available": 1 }
            ]}
        }))
        .expect("test invariant failed: feed should deserialize");
        let stations = feed.data.stations;
        assert!(stations[0].is_renting);
        assert!(!stations[0].is_returning);
        assert!(!stations[1].is_renting);
        assert_eq!(stations[1].num_docks_available, Some(3));
        assert!(stations[2].is_renting && stations[2].is_returning);
    }
}
