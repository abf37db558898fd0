use std::collections::HashSet;

/// set of rental network names. `None` is the catch-all network which is
/// compatible with every other network.
pub type RentalNetworks = Option<HashSet<String>>;

/// two network sets are compatible if they share at least one network, or if
/// either of them is the catch-all (unset) network.
pub fn networks_compatible(a: Option<&HashSet<String>>, b: Option<&HashSet<String>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => !a.is_disjoint(b),
        _ => true,
    }
}
