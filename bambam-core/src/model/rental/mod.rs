//! vehicle and network identity shared between the search state and the
//! rental edges.
mod rental_networks;
mod vehicle_type;

pub use rental_networks::{networks_compatible, RentalNetworks};
pub use vehicle_type::VehicleType;
