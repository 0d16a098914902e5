use serde::{Deserialize, Serialize};

use crate::WorldState;

/// A named boolean fact, used both as precondition and as effect of an action.
///
/// Two properties are equal when key and value are equal. They match on key when only
/// the key is the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display)]
#[display("{key}={value}")]
pub struct Property {
    key: String,
    value: bool,
}

impl Property {
    pub fn new(key: impl Into<String>, value: bool) -> Self {
        Self { key: key.into(), value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn matches_key(&self, other: &Property) -> bool {
        self.key == other.key
    }

    pub fn is_met(&self, world: &WorldState) -> bool {
        world.is_state_met(&self.key, self.value)
    }
}

impl<K: Into<String>> From<(K, bool)> for Property {
    fn from((key, value): (K, bool)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_requires_same_value() {
        let a = Property::new("HasEnergyItem", true);
        let b = Property::new("HasEnergyItem", false);

        assert_ne!(a, b);
        assert!(a.matches_key(&b));
        assert_eq!(a, Property::from(("HasEnergyItem", true)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Property::new("EnemyWasInSight", false).to_string(), "EnemyWasInSight=false");
    }

    #[test]
    fn test_is_met_against_world() {
        let world = WorldState::from_iter([("HasEnergyItem", true)]);

        assert!(Property::new("HasEnergyItem", true).is_met(&world));
        assert!(!Property::new("HasEnergyItem", false).is_met(&world));
        assert!(!Property::new("Unknown", true).is_met(&world));
    }
}
