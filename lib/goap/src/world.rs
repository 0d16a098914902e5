use std::collections::HashMap;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::Property;

/// Mutable key to boolean mapping describing what the agent currently knows about the world.
///
/// The planner only reads it. Mutation happens when the executor applies the effects of an
/// action that actually ran, or when perception updates a fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldState {
    states: HashMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WorldStateError {
    #[display("Unknown world state {key}")]
    UnknownState { key: String },

    #[display("World state {key} already exists")]
    DuplicateState { key: String },
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unknown keys are never met.
    pub fn is_state_met(&self, key: &str, expected: bool) -> bool {
        match self.states.get(key) {
            Some(value) => *value == expected,
            None => {
                tracing::trace!("World state {} is unknown, treating as not met", key);
                false
            }
        }
    }

    pub fn does_state_exist(&self, key: &str) -> bool {
        self.states.contains_key(key)
    }

    pub fn add_state(&mut self, key: impl Into<String>, initial: bool) -> Result<(), WorldStateError> {
        let key = key.into();
        if self.states.contains_key(&key) {
            return Err(WorldStateError::DuplicateState { key });
        }

        self.states.insert(key, initial);
        Ok(())
    }

    /// Registers `key` with `default` unless it is already known. Returns whether it was added.
    pub fn add_state_if_absent(&mut self, key: impl Into<String>, default: bool) -> bool {
        let key = key.into();
        if self.states.contains_key(&key) {
            return false;
        }

        tracing::debug!("Registering world state {} with default {}", key, default);
        self.states.insert(key, default);
        true
    }

    pub fn set_state(&mut self, key: &str, value: bool) -> Result<(), WorldStateError> {
        match self.states.get_mut(key) {
            Some(current) => {
                *current = value;
                Ok(())
            }
            None => Err(WorldStateError::UnknownState { key: key.to_owned() }),
        }
    }

    pub fn get_state(&self, key: &str) -> Result<bool, WorldStateError> {
        self.states
            .get(key)
            .copied()
            .ok_or_else(|| WorldStateError::UnknownState { key: key.to_owned() })
    }

    /// Writes every effect, registering keys that are not known yet.
    pub fn apply_effects(&mut self, effects: &[Property]) {
        for effect in effects {
            self.states.insert(effect.key().to_owned(), effect.value());
        }
    }

    pub fn unmet<'p>(&self, properties: &'p [Property]) -> Vec<&'p Property> {
        properties.iter().filter(|p| !p.is_met(self)).collect()
    }

    pub fn is_satisfied(&self, properties: &[Property]) -> bool {
        properties.iter().all(|p| p.is_met(self))
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for WorldState {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
