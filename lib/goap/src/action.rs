use std::fmt::Display;

use crate::Property;

/// Capability surface the planner needs from an action.
///
/// The display form is the stable identity used for de-duplication during search and for
/// diagnostics. Two different values with the same identity are treated as the same action.
pub trait Action: Display {
    /// Facts that must hold before the action may run.
    fn preconditions(&self) -> &[Property];

    /// Facts the action establishes once it completed.
    fn effects(&self) -> &[Property];

    /// Negative costs express a strong preference.
    fn cost(&self) -> f64;

    fn identity(&self) -> String {
        self.to_string()
    }

    /// True if one of the effects equals `precondition` in key and value.
    fn satisfies(&self, precondition: &Property) -> bool {
        self.effects().contains(precondition)
    }

    fn has_effect(&self, key: &str) -> bool {
        self.effects().iter().any(|e| e.key() == key)
    }
}

impl<T: Action + ?Sized> Action for &T {
    fn preconditions(&self) -> &[Property] {
        (**self).preconditions()
    }

    fn effects(&self) -> &[Property] {
        (**self).effects()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn identity(&self) -> String {
        (**self).identity()
    }
}

impl<T: Action + ?Sized> Action for Box<T> {
    fn preconditions(&self) -> &[Property] {
        (**self).preconditions()
    }

    fn effects(&self) -> &[Property] {
        (**self).effects()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn identity(&self) -> String {
        (**self).identity()
    }
}

/// Data-only action, for catalogs that carry no behaviour of their own.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
#[display("{name}")]
pub struct BasicAction {
    name: String,
    preconditions: Vec<Property>,
    effects: Vec<Property>,
    cost: f64,
}

impl BasicAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            preconditions: vec![],
            effects: vec![],
            cost: 1.0,
        }
    }

    pub fn requires(mut self, key: impl Into<String>, value: bool) -> Self {
        self.preconditions.push(Property::new(key, value));
        self
    }

    pub fn produces(mut self, key: impl Into<String>, value: bool) -> Self {
        self.effects.push(Property::new(key, value));
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Action for BasicAction {
    fn preconditions(&self) -> &[Property] {
        &self.preconditions
    }

    fn effects(&self) -> &[Property] {
        &self.effects
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}
