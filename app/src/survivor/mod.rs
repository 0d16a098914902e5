pub mod domain;
pub mod perception;
pub mod planner;

use std::time::Duration;

use goap::{ExecutionStatus, PlanExecutor, Property, SearchConfig, Termination, WorldState};
use serde::Deserialize;

use domain::{Catalog, Survivor, SurvivorAction, SurvivorGoal, active_goal, default_catalog};
use perception::{PerceptionEvent, perceive};
use planner::{TraceLog, plan_for_goal};

#[derive(Debug, Clone, Deserialize)]
pub struct AgentConfig {
    pub tick_interval_ms: u64,
    pub max_ticks: u64,
    /// Ordered by priority, the first unsatisfied goal is pursued.
    pub goals: Vec<SurvivorGoal>,
    #[serde(default)]
    pub initial_state: Vec<Property>,
    #[serde(default)]
    pub events: Vec<PerceptionEvent>,
}

impl AgentConfig {
    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AgentReport {
    pub ticks: u64,
    pub replans: usize,
    pub completed: Vec<String>,
    pub world: WorldState,
}

pub struct AgentRunner {
    config: AgentConfig,
    search: SearchConfig,
    catalog: Catalog,
    world: WorldState,
}

impl AgentRunner {
    pub fn new(config: AgentConfig, search: SearchConfig) -> Self {
        let catalog = default_catalog();
        let mut world = WorldState::new();
        world.apply_effects(&config.initial_state);
        catalog.register(&mut world);

        Self {
            config,
            search,
            catalog,
            world,
        }
    }

    pub async fn run(self) -> AgentReport {
        let AgentRunner {
            config,
            search,
            catalog,
            mut world,
        } = self;

        let dt = config.tick_interval();
        let mut timer = tokio::time::interval(dt);
        let mut survivor = Survivor::default();
        let mut trace_log = TraceLog::default();
        let mut current: Option<(SurvivorGoal, PlanExecutor<'_, SurvivorAction>)> = None;
        let mut report = AgentReport {
            ticks: 0,
            replans: 0,
            completed: vec![],
            world: WorldState::new(),
        };

        for tick in 0..config.max_ticks {
            timer.tick().await;
            report.ticks = tick + 1;

            perceive(&config.events, tick, &mut world);

            let goal = active_goal(&config.goals, &catalog, &world);
            let pursued = current.as_ref().map(|(g, _)| *g);

            if let Some(goal) = goal.filter(|g| pursued != Some(*g)) {
                if let Some(previous) = pursued {
                    tracing::info!("Switching goal from {} to {}", previous, goal);
                }

                current = match plan_for_goal(&world, &catalog, goal, &search, &mut trace_log) {
                    Ok(plan) if plan.termination() != Termination::Exhausted => {
                        tracing::warn!(
                            "Plan for goal {} was cut short ({}), not executing",
                            goal,
                            plan.termination()
                        );
                        None
                    }
                    Ok(plan) if plan.goal_reached() => {
                        report.replans += 1;
                        Some((goal, PlanExecutor::new(plan)))
                    }
                    Ok(_) => {
                        tracing::warn!("No plan found for goal {}", goal);
                        None
                    }
                    Err(e) => {
                        tracing::error!("Error during planning: {:?}", e);
                        None
                    }
                };
            }

            let Some((_, executor)) = current.as_mut() else {
                tracing::debug!("Nothing to do on tick {}", tick);
                continue;
            };

            let status = executor.tick(&mut survivor, &mut world, dt);
            if let ExecutionStatus::Completed { action } = &status {
                report.completed.push(action.clone());
            }

            if status.needs_replan() {
                tracing::debug!("Dropping plan: {:?}", status);
                current = None;
            }
        }

        report.world = world;
        report
    }
}
