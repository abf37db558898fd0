pub mod data_source;
pub mod edge;
pub mod updater;
pub mod vehicle_rental;
