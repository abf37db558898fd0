mod config;
mod gbfs_feed;
mod gbfs_file_data_source;
mod rental_data_source;

pub use config::GbfsDataSourceConfig;
pub use gbfs_feed::{
    FreeBikeRecord, FreeBikeStatusData, GbfsFeed, GeofencingZonesData, StationInformationData,
    StationInformationRecord, StationStatusData, StationStatusRecord,
};
pub use gbfs_file_data_source::GbfsFileDataSource;
pub use rental_data_source::VehicleRentalDataSource;
