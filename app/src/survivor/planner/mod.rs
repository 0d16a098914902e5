mod trace;

use goap::{ActionSearch, Plan, SearchConfig, WorldState};

use super::domain::{Catalog, SurvivorAction, SurvivorGoal};

pub use trace::TraceLog;

#[tracing::instrument(skip_all, fields(goal = %goal))]
pub fn plan_for_goal<'a>(
    world: &WorldState,
    catalog: &'a Catalog,
    goal: SurvivorGoal,
    config: &SearchConfig,
    trace_log: &mut TraceLog,
) -> anyhow::Result<Plan<'a, SurvivorAction>> {
    tracing::info!("Start planning");

    let plan = ActionSearch::new(world)
        .with_config(config.clone())
        .search(catalog.goal_action(goal), catalog.pool())?;

    tracing::info!(
        "Planning done with {} action(s), goal reachable: {}, {}",
        plan.len(),
        plan.goal_reached(),
        plan.termination()
    );
    trace_log.display(plan.trace());

    Ok(plan)
}
