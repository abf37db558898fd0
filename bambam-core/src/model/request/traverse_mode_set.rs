use super::TraverseMode;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a set of [`TraverseMode`] values stored as a bitmask so that it stays `Copy`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "Vec<TraverseMode>", into = "Vec<TraverseMode>")]
pub struct TraverseModeSet(u8);

impl TraverseModeSet {
    pub fn empty() -> TraverseModeSet {
        TraverseModeSet(0)
    }

    pub fn new(modes: &[TraverseMode]) -> TraverseModeSet {
        modes.iter().copied().collect()
    }

    pub fn contains(&self, mode: TraverseMode) -> bool {
        self.0 & mode.mask() != 0
    }

    pub fn set_mode(&mut self, mode: TraverseMode, enabled: bool) {
        if enabled {
            self.0 |= mode.mask();
        } else {
            self.0 &= !mode.mask();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_transit(&self) -> bool {
        self.contains(TraverseMode::Transit)
    }

    /// iterate the modes of this set in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = TraverseMode> + '_ {
        TraverseMode::ALL.into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<TraverseMode> for TraverseModeSet {
    fn from_iter<I: IntoIterator<Item = TraverseMode>>(iter: I) -> Self {
        let mut set = TraverseModeSet::empty();
        for mode in iter {
            set.set_mode(mode, true);
        }
        set
    }
}

impl From<Vec<TraverseMode>> for TraverseModeSet {
    fn from(value: Vec<TraverseMode>) -> Self {
        value.into_iter().collect()
    }
}

impl From<TraverseModeSet> for Vec<TraverseMode> {
    fn from(value: TraverseModeSet) -> Self {
        value.iter().collect()
    }
}

impl Display for TraverseModeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

#[cfg(test)]
mod test {
    use super::{TraverseMode, TraverseModeSet};

    #[test]
    fn test_set_and_unset() {
        let mut modes = TraverseModeSet::new(&[TraverseMode::Walk, TraverseMode::Transit]);
        assert!(modes.contains(TraverseMode::Walk));
        assert!(modes.is_transit());
        assert!(!modes.contains(TraverseMode::Car));
        modes.set_mode(TraverseMode::Walk, false);
        modes.set_mode(TraverseMode::Micromobility, true);
        let listed: Vec<TraverseMode> = modes.iter().collect();
        assert_eq!(
            listed,
            vec![TraverseMode::Micromobility, TraverseMode::Transit]
        );
    }

    #[test]
    fn test_display() {
        let modes = TraverseModeSet::new(&[TraverseMode::Car, TraverseMode::Walk]);
        assert_eq!(modes.to_string(), "[WALK, CAR]");
    }
}
