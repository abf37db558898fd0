#[derive(thiserror::Error, Debug)]
pub enum RoutingRequestError {
    #[error("unknown travel mode '{0}'")]
    UnknownMode(String),
    #[error("unknown mode qualifier '{qualifier}' in '{qualified_mode}'")]
    UnknownQualifier {
        qualifier: String,
        qualified_mode: String,
    },
    #[error("empty mode string")]
    EmptyModes,
    #[error("invalid request parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },
    #[error("failure reading routing request configuration: {0}")]
    ConfigError(#[from] config::ConfigError),
}
