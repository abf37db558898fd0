use crate::{
    error::GbfsError,
    model::{data_source::GbfsDataSourceConfig, vehicle_rental::StationQuery},
};
use bambam_core::model::rental::VehicleType;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// command line tool for inspecting GBFS vehicle rental data
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct GbfsCliArguments {
    /// select the GBFS operation to run
    #[command(subcommand)]
    pub op: GbfsOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum GbfsOperation {
    /// loads a directory of GBFS feed files into a station service and
    /// prints the stations matching a query as JSON.
    Stations {
        /// directory holding the GBFS feed files
        #[arg(short, long)]
        directory: String,
        /// rental network name assigned to the feed's stations
        #[arg(short, long)]
        network: String,
        /// vehicle type of the feed's stations, such as bike, scooter or car
        #[arg(long, default_value_t = String::from("bike"))]
        vehicle_type: String,
        /// lower-left envelope corner as "lat,lon"
        #[arg(long, requires = "upper_right")]
        lower_left: Option<String>,
        /// upper-right envelope corner as "lat,lon"
        #[arg(long, requires = "lower_left")]
        upper_right: Option<String>,
        /// only list stations of this rental network
        #[arg(short, long)]
        company: Option<String>,
        /// locale used to resolve station names, such as "fr-CA"
        #[arg(short, long)]
        locale: Option<String>,
    },
}

impl GbfsOperation {
    pub fn run(&self) -> Result<(), GbfsError> {
        match self {
            GbfsOperation::Stations {
                directory,
                network,
                vehicle_type,
                lower_left,
                upper_right,
                company,
                locale,
            } => {
                let config = GbfsDataSourceConfig {
                    network: network.clone(),
                    directory: directory.clone(),
                    vehicle_type: VehicleType::from_token(vehicle_type),
                };
                let mut query = match (lower_left, upper_right) {
                    (Some(ll), Some(ur)) => StationQuery::from_corners(ll, ur)?,
                    _ => StationQuery::default(),
                };
                query.company = company.clone();
                query.locale = locale.clone();
                crate::app::stations::run_station_query(config, &query)
            }
        }
    }
}
