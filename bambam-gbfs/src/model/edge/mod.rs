mod rent_a_vehicle_off_edge;
mod rent_a_vehicle_on_edge;
mod rental_predicates;
mod station_vertex;
mod street_vehicle_rental_link;
mod vehicle_rental_edge;


pub use rent_a_vehicle_off_edge::RentAVehicleOffEdge;
pub use rent_a_vehicle_on_edge::RentAVehicleOnEdge;
pub use rental_predicates::{has_space_to_park, has_vehicle_to_rent, station_permitted};
pub use station_vertex::VehicleRentalStationVertex;
pub use street_vehicle_rental_link::StreetVehicleRentalLink;
pub use vehicle_rental_edge::VehicleRentalEdge;
