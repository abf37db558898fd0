use super::{RoutingRequest, RoutingRequestError, TraverseMode};
use itertools::Itertools;
use std::{collections::HashSet, fmt::Display, str::FromStr};

/// modifiers on a requested travel mode, such as `MICROMOBILITY_RENT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Qualifier {
    Rent,
    Have,
    Park,
    Hail,
    Keep,
}

impl FromStr for Qualifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "RENT" => Ok(Qualifier::Rent),
            "HAVE" => Ok(Qualifier::Have),
            "PARK" => Ok(Qualifier::Park),
            "HAIL" => Ok(Qualifier::Hail),
            "KEEP" => Ok(Qualifier::Keep),
            _ => Err(s.to_string()),
        }
    }
}

impl Display for Qualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Qualifier::Rent => "RENT",
            Qualifier::Have => "HAVE",
            Qualifier::Park => "PARK",
            Qualifier::Hail => "HAIL",
            Qualifier::Keep => "KEEP",
        };
        write!(f, "{s}")
    }
}

/// a travel mode with its qualifiers, parsed from tokens such as `WALK` or
/// `MICROMOBILITY_RENT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualifiedMode {
    pub mode: TraverseMode,
    pub qualifiers: HashSet<Qualifier>,
}

impl QualifiedMode {
    /// enables this mode on the request along with whatever request flags the
    /// qualifiers imply.
    pub fn apply_to_routing_request(&self, request: &mut RoutingRequest, using_transit: bool) {
        request.modes.set_mode(self.mode, true);
        match self.mode {
            TraverseMode::Micromobility if self.qualifiers.contains(&Qualifier::Rent) => {
                // rental trips begin and end on foot
                request.modes.set_mode(TraverseMode::Walk, true);
                request.allow_vehicle_rental = true;
            }
            TraverseMode::Car if using_transit => {
                // walk after parking or being dropped off
                request.modes.set_mode(TraverseMode::Walk, true);
            }
            _ => {}
        }
    }
}

impl FromStr for QualifiedMode {
    type Err = RoutingRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut elements = s.split('_');
        let mode_name = elements.next().map(str::trim).unwrap_or_default();
        // bicycle requests are served by micromobility
        let mode = match mode_name.to_uppercase().as_str() {
            "BICYCLE" => TraverseMode::Micromobility,
            _ => TraverseMode::from_str(mode_name)?,
        };
        let qualifiers = elements
            .map(|q| {
                Qualifier::from_str(q).map_err(|qualifier| RoutingRequestError::UnknownQualifier {
                    qualifier,
                    qualified_mode: s.to_string(),
                })
            })
            .collect::<Result<HashSet<_>, _>>()?;
        Ok(QualifiedMode { mode, qualifiers })
    }
}

impl Display for QualifiedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mode)?;
        for qualifier in self.qualifiers.iter().sorted() {
            write!(f, "_{qualifier}")?;
        }
        Ok(())
    }
}

/// comma-delimited list of qualified modes, such as `WALK,TRANSIT,MICROMOBILITY_RENT`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QualifiedModeSet {
    pub qualified_modes: Vec<QualifiedMode>,
}

impl QualifiedModeSet {
    /// true if any of the qualified modes is a transit mode
    pub fn uses_transit(&self) -> bool {
        self.qualified_modes.iter().any(|qm| qm.mode.is_transit())
    }

    /// resets the request mode set and applies each qualified mode to it.
    pub fn apply_to_routing_request(&self, request: &mut RoutingRequest) {
        let using_transit = self.uses_transit();
        request.modes = Default::default();
        for qualified_mode in self.qualified_modes.iter() {
            qualified_mode.apply_to_routing_request(request, using_transit);
        }
    }
}

impl FromStr for QualifiedModeSet {
    type Err = RoutingRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let qualified_modes = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(QualifiedMode::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        if qualified_modes.is_empty() {
            return Err(RoutingRequestError::EmptyModes);
        }
        Ok(QualifiedModeSet { qualified_modes })
    }
}
