mod vehicle_rental_updater;

pub use vehicle_rental_updater::{UpdateSummary, VehicleRentalUpdater};
