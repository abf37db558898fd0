use crate::{
    error::GbfsError,
    model::vehicle_rental::{VehicleRentalRegion, VehicleRentalStation},
};

/// a provider of rental stations and operating regions for one network.
///
/// an updater calls [`VehicleRentalDataSource::refresh`] and then reads the
/// stations or regions only when the matching change flag is set.
pub trait VehicleRentalDataSource {
    /// loads the latest data from the source.
    fn refresh(&mut self) -> Result<(), GbfsError>;

    /// true if the last refresh may have changed the stations
    fn stations_changed(&self) -> bool;

    /// true if the last refresh may have changed the regions
    fn regions_changed(&self) -> bool;

    fn stations(&self) -> &[VehicleRentalStation];

    fn regions(&self) -> &[VehicleRentalRegion];
}
