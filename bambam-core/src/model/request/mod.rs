mod qualified_mode;
mod request_error;
mod routing_request;
mod routing_request_config;
mod search_direction;
mod traverse_mode;
mod traverse_mode_set;

pub use qualified_mode::{QualifiedMode, QualifiedModeSet, Qualifier};
pub use request_error::RoutingRequestError;
pub use routing_request::RoutingRequest;
pub use routing_request_config::RoutingRequestConfig;
pub use search_direction::SearchDirection;
pub use traverse_mode::TraverseMode;
pub use traverse_mode_set::TraverseModeSet;
