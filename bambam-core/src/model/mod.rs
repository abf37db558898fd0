pub mod network;
pub mod rental;
pub mod request;
pub mod state;
