use goap::{Action, WorldState};

use super::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, derive_more::Display)]
pub enum SurvivorGoal {
    Survive,
    StaySafe,
}

/// First configured goal whose goal action isn't satisfied yet, in priority order.
pub fn active_goal(goals: &[SurvivorGoal], catalog: &Catalog, world: &WorldState) -> Option<SurvivorGoal> {
    goals
        .iter()
        .copied()
        .find(|goal| !world.is_satisfied(catalog.goal_action(*goal).preconditions()))
}
