mod gbfs_cli;
pub mod stations;

pub use gbfs_cli::{GbfsCliArguments, GbfsOperation};
