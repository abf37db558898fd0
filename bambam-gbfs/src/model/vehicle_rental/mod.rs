mod localized_name;
mod rental_station;
mod station_query;
mod station_service;
mod vehicle_rental_region;
mod vehicle_rental_station;

pub use localized_name::LocalizedName;
pub use rental_station::RentalStation;
pub use station_query::{StationQuery, StationSummary, parse_envelope};
pub use station_service::VehicleRentalStationService;
pub use vehicle_rental_region::VehicleRentalRegion;
pub use vehicle_rental_station::VehicleRentalStation;
