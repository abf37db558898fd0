use thiserror::Error;

#[derive(Error, Debug)]
pub enum GbfsError {
    #[error("failure reading GBFS file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failure decoding GBFS feed {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("failure decoding geofencing zones for network {network}: {message}")]
    GeoJson { network: String, message: String },
    #[error("invalid envelope corner '{0}', expected 'lat,lon'")]
    Envelope(String),
    #[error("invalid GBFS data source configuration: {0}")]
    Configuration(String),
    #[error("vehicle rental station service lock is poisoned")]
    LockPoisoned,
}
