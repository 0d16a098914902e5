use std::time::Duration;

use goap::{Action, Perform, Property, WorldState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ActionKind {
    Survive,
    StaySafe,
    DrinkEnergy,
    SearchForEnergy,
    FindGeneralHouseLocations,
    ExploreWorld,
    EvadeEnemy,
}

/// Catalog entry: what the planner sees plus how long the agent is busy executing it.
#[derive(Debug, Clone, derive_more::Display)]
#[display("{kind}")]
pub struct SurvivorAction {
    kind: ActionKind,
    preconditions: Vec<Property>,
    effects: Vec<Property>,
    /// Value each declared fact starts with if the world doesn't know it yet.
    defaults: Vec<Property>,
    cost: f64,
    duration: Duration,
}

impl SurvivorAction {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            preconditions: vec![],
            effects: vec![],
            defaults: vec![],
            cost: 1.0,
            duration: Duration::ZERO,
        }
    }

    pub fn requires(self, key: &str, value: bool) -> Self {
        self.requires_or(key, value, false)
    }

    /// Like `requires`, registering `default` for an unknown fact.
    pub fn requires_or(mut self, key: &str, value: bool, default: bool) -> Self {
        self.preconditions.push(Property::new(key, value));
        self.defaults.push(Property::new(key, default));
        self
    }

    pub fn produces(self, key: &str, value: bool) -> Self {
        self.produces_or(key, value, false)
    }

    pub fn produces_or(mut self, key: &str, value: bool, default: bool) -> Self {
        self.effects.push(Property::new(key, value));
        self.defaults.push(Property::new(key, default));
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn takes(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Makes sure every fact this action talks about is known to the world.
    pub fn register(&self, world: &mut WorldState) {
        for default in &self.defaults {
            world.add_state_if_absent(default.key(), default.value());
        }
    }
}

impl Action for SurvivorAction {
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

/// Execution state of the agent running the plan.
#[derive(Debug, Default)]
pub struct Survivor {
    busy_for: Duration,
}

impl Perform<Survivor> for SurvivorAction {
    fn setup(&self, ctx: &mut Survivor) {
        ctx.busy_for = Duration::ZERO;
    }

    fn perform(&self, ctx: &mut Survivor, _world: &WorldState, dt: Duration) -> anyhow::Result<()> {
        ctx.busy_for += dt;
        tracing::trace!("{} busy for {:?} of {:?}", self.kind, ctx.busy_for, self.duration);
        Ok(())
    }

    fn is_done(&self, ctx: &Survivor, _world: &WorldState) -> bool {
        ctx.busy_for >= self.duration
    }
}
