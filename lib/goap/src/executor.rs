use std::time::Duration;

use crate::{Action, Plan, Property, WorldState};

/// Runtime contract of a planned action.
///
/// `C` is whatever the action needs to act on (agent, blackboard, simulation).
pub trait Perform<C>: Action {
    /// Called once before the first `perform`.
    fn setup(&self, _ctx: &mut C) {}

    fn perform(&self, ctx: &mut C, world: &WorldState, dt: Duration) -> anyhow::Result<()>;

    fn is_done(&self, _ctx: &C, _world: &WorldState) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionStatus {
    Running { action: String },
    /// The action finished and its effects were applied.
    Completed { action: String },
    /// Nothing left to execute.
    Finished,
    /// The next action can't start anymore, the plan needs to be replaced.
    Invalidated { action: String, unmet: Vec<Property> },
    Failed { action: String, reason: String },
}

impl ExecutionStatus {
    pub fn needs_replan(&self) -> bool {
        matches!(
            self,
            ExecutionStatus::Finished | ExecutionStatus::Invalidated { .. } | ExecutionStatus::Failed { .. }
        )
    }
}

/// Pops actions off a plan and drives each one until it reports done.
pub struct PlanExecutor<'a, A> {
    plan: Plan<'a, A>,
    started: bool,
}

impl<'a, A: Action> PlanExecutor<'a, A> {
    pub fn new(plan: Plan<'a, A>) -> Self {
        Self { plan, started: false }
    }

    pub fn current(&self) -> Option<&'a A> {
        self.plan.front()
    }

    pub fn remaining(&self) -> usize {
        self.plan.len()
    }

    pub fn tick<C>(&mut self, ctx: &mut C, world: &mut WorldState, dt: Duration) -> ExecutionStatus
    where
        A: Perform<C>,
    {
        let Some(action) = self.plan.front() else {
            return ExecutionStatus::Finished;
        };
        let identity = action.identity();

        if !self.started {
            let unmet: Vec<Property> = world.unmet(action.preconditions()).into_iter().cloned().collect();
            if !unmet.is_empty() {
                tracing::info!("Plan invalidated, {} can't start", identity);
                return ExecutionStatus::Invalidated { action: identity, unmet };
            }

            tracing::debug!("Setting up {}", identity);
            action.setup(ctx);
            self.started = true;
        }

        if let Err(e) = action.perform(ctx, world, dt) {
            tracing::warn!("Action {} failed: {:?}", identity, e);
            return ExecutionStatus::Failed {
                action: identity,
                reason: e.to_string(),
            };
        }

        if !action.is_done(ctx, world) {
            return ExecutionStatus::Running { action: identity };
        }

        world.apply_effects(action.effects());
        self.plan.pop_front();
        self.started = false;
        tracing::info!("Action {} completed", identity);

        ExecutionStatus::Completed { action: identity }
    }
}
