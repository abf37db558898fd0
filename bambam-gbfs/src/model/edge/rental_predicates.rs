use crate::model::vehicle_rental::VehicleRentalStation;
use bambam_core::model::request::RoutingRequest;
use std::collections::HashSet;

/// applies the request's provider and vehicle whitelists and blacklists to a
/// station. an unset or empty list does not filter. a station must share a
/// network with the provider whitelist and keep at least one network outside
/// the provider blacklist. a wildcard station passes both provider lists.
pub fn station_permitted(request: &RoutingRequest, station: &VehicleRentalStation) -> bool {
    let networks = station.networks();
    if let (Some(whitelist), Some(networks)) = (active(&request.white_listed_providers), networks)
    {
        if networks.is_disjoint(whitelist) {
            return false;
        }
    }
    if let (Some(banned), Some(networks)) = (active(&request.banned_providers), networks) {
        if networks.is_subset(banned) {
            return false;
        }
    }
    if let Some(whitelist) = active(&request.white_listed_vehicles) {
        if !whitelist.contains(&station.vehicle_type) {
            return false;
        }
    }
    if let Some(banned) = active(&request.banned_vehicles) {
        if banned.contains(&station.vehicle_type) {
            return false;
        }
    }
    true
}

/// when availability is enforced, a pickup needs a vehicle at the station.
/// untracked counters never block.
pub fn has_vehicle_to_rent(request: &RoutingRequest, station: &VehicleRentalStation) -> bool {
    !request.use_vehicle_rental_availability_information
        || station.vehicles_available.is_none_or(|n| n > 0)
}

/// when availability is enforced, a drop-off needs a free space.
pub fn has_space_to_park(request: &RoutingRequest, station: &VehicleRentalStation) -> bool {
    !request.use_vehicle_rental_availability_information
        || station.spaces_available.is_none_or(|n| n > 0)
}

fn active<T>(list: &Option<HashSet<T>>) -> Option<&HashSet<T>> {
    list.as_ref().filter(|l| !l.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{has_space_to_park, has_vehicle_to_rent, station_permitted};
    use crate::model::vehicle_rental::{LocalizedName, RentalStation, VehicleRentalStation};
    use bambam_core::model::{rental::VehicleType, request::RoutingRequest};
    use std::collections::HashSet;

    fn station(networks: Option<&[&str]>, vehicle_type: VehicleType) -> VehicleRentalStation {
        let mut station = RentalStation::new("s", LocalizedName::new("s"), -122.6, 45.5);
        station.networks = networks.map(|n| n.iter().map(|s| s.to_string()).collect());
        VehicleRentalStation::new(station, vehicle_type)
    }

    fn names(names: &[&str]) -> Option<HashSet<String>> {
        Some(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_provider_whitelist() {
        let request = RoutingRequest {
            white_listed_providers: names(&["LIME"]),
            ..Default::default()
        };
        assert!(station_permitted(&request, &station(Some(&["LIME", "ZIP"]), VehicleType::Bicycle)));
        assert!(!station_permitted(&request, &station(Some(&["ZIP"]), VehicleType::Bicycle)));
        assert!(station_permitted(&request, &station(None, VehicleType::Bicycle)));

        let empty_whitelist = RoutingRequest {
            white_listed_providers: names(&[]),
            ..Default::default()
        };
        assert!(station_permitted(&empty_whitelist, &station(Some(&["ZIP"]), VehicleType::Bicycle)));
    }

    #[test]
    fn test_provider_blacklist_requires_full_cover() {
        let request = RoutingRequest {
            banned_providers: names(&["ZIP"]),
            ..Default::default()
        };
        assert!(!station_permitted(&request, &station(Some(&["ZIP"]), VehicleType::Car)));
        assert!(station_permitted(&request, &station(Some(&["ZIP", "LIME"]), VehicleType::Car)));
        assert!(station_permitted(&request, &station(None, VehicleType::Car)));
    }

    #[test]
    fn test_vehicle_lists() {
        let request = RoutingRequest {
            white_listed_vehicles: Some(HashSet::from([VehicleType::Scooter])),
            ..Default::default()
        };
        assert!(station_permitted(&request, &station(None, VehicleType::Scooter)));
        assert!(!station_permitted(&request, &station(None, VehicleType::Car)));

        let request = RoutingRequest {
            banned_vehicles: Some(HashSet::from([VehicleType::Car])),
            ..Default::default()
        };
        assert!(!station_permitted(&request, &station(None, VehicleType::Car)));
        assert!(station_permitted(&request, &station(None, VehicleType::Bicycle)));
    }

    #[test]
    fn test_availability_gates() {
        let mut empty = station(None, VehicleType::Bicycle).with_availability(0, 0);
        let enforced = RoutingRequest {
            use_vehicle_rental_availability_information: true,
            ..Default::default()
        };
        let ignored = RoutingRequest::default();
        assert!(!has_vehicle_to_rent(&enforced, &empty));
        assert!(!has_space_to_park(&enforced, &empty));
        assert!(has_vehicle_to_rent(&ignored, &empty));
        assert!(has_space_to_park(&ignored, &empty));

        empty.vehicles_available = None;
        empty.spaces_available = None;
        assert!(has_vehicle_to_rent(&enforced, &empty));
        assert!(has_space_to_park(&enforced, &empty));
    }
}
