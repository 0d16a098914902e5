use std::collections::{HashSet, VecDeque};

use serde::Deserialize;

use crate::dominance::{order_for_expansion, select_non_dominated};
use crate::graph::ActionGraph;
use crate::node::{OpenList, SearchNode};
use crate::plan::{Disposition, SearchTrace, SearchTraceStep, Termination};
use crate::{Action, Plan, Property, SearchError, WorldState};

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Upper bound of evaluated nodes per search.
    #[serde(default = "SearchConfig::default_max_expansions")]
    pub max_expansions: usize,
}

impl SearchConfig {
    fn default_max_expansions() -> usize {
        256
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: Self::default_max_expansions(),
        }
    }
}

/// Backward-chaining planner bound to one world state.
///
/// Starting from the goal, each node's unmet preconditions are matched against the effects of
/// the pool. Nodes whose unmet preconditions are fully covered are closed and their chosen
/// providers opened; nodes that can't be covered are discarded. The plan is the closed list in
/// reverse.
pub struct ActionSearch<'w> {
    world: &'w WorldState,
    config: SearchConfig,
}

impl<'w> ActionSearch<'w> {
    pub fn new(world: &'w WorldState) -> Self {
        Self {
            world,
            config: SearchConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    #[tracing::instrument(skip_all, fields(goal = %goal, pool = pool.len()))]
    pub fn search<'a, A: Action>(&self, goal: &'a A, pool: &'a [A]) -> Result<Plan<'a, A>, SearchError> {
        validate(goal)?;
        for action in pool {
            validate(action)?;
        }

        let graph = ActionGraph::new(pool);
        let goal_identity = goal.identity();
        let mut trace = SearchTrace::new(goal_identity.clone());
        let mut open = OpenList::new(SearchNode::new(goal, 0.0));
        let mut closed: Vec<SearchNode<'a, A>> = vec![];
        let mut expansions = 0;

        while !open.is_empty() {
            if expansions >= self.config.max_expansions {
                tracing::warn!(
                    "Search stopped after {} expansions with {} node(s) open",
                    expansions,
                    open.len()
                );
                let termination = Termination::ExpansionLimit { limit: expansions };
                return Ok(materialize(closed, &goal_identity, termination, trace));
            }
            expansions += 1;

            let Some(current) = open.pop_current() else {
                break;
            };

            let action: &'a A = current.action;
            let unmet = self.world.unmet(action.preconditions());
            if unmet.is_empty() {
                tracing::trace!("All preconditions of {} are met", current.identity);
                trace.steps.push(trace_step(&current, &unmet, &[], Disposition::Closed));
                closed.push(current);
                continue;
            }

            let candidates = graph.candidates_for(&current.identity, &unmet, self.world);
            let mut accepted = select_non_dominated(candidates, self.world);

            let satisfied: HashSet<&Property> = accepted.iter().flat_map(|c| c.satisfies.iter().copied()).collect();
            if satisfied.len() < unmet.len() {
                tracing::debug!(
                    "Discarding {}, only {} of {} precondition(s) can be satisfied",
                    current.identity,
                    satisfied.len(),
                    unmet.len()
                );
                let names: Vec<String> = accepted.iter().map(|c| c.identity.clone()).collect();
                trace.steps.push(trace_step(&current, &unmet, &names, Disposition::Discarded));
                continue;
            }

            order_for_expansion(&mut accepted);

            let names: Vec<String> = accepted.iter().map(|c| c.identity.clone()).collect();
            for candidate in accepted {
                let node = SearchNode::new(candidate.action, current.cost_so_far + candidate.cost());
                let identity = node.identity.clone();
                if open.push(node) {
                    tracing::debug!("Added to open list: {}", identity);
                } else {
                    tracing::debug!("Action {} already open, skipping", identity);
                }
            }

            trace.steps.push(trace_step(&current, &unmet, &names, Disposition::Closed));
            closed.push(current);
        }

        Ok(materialize(closed, &goal_identity, Termination::Exhausted, trace))
    }
}

/// Plans with the default configuration.
pub fn plan<'a, A: Action>(world: &WorldState, goal: &'a A, pool: &'a [A]) -> Result<Plan<'a, A>, SearchError> {
    ActionSearch::new(world).search(goal, pool)
}

fn materialize<'a, A: Action>(
    closed: Vec<SearchNode<'a, A>>,
    goal_identity: &str,
    termination: Termination,
    trace: SearchTrace,
) -> Plan<'a, A> {
    let goal_reached = closed.iter().any(|n| n.identity == goal_identity);
    let actions: VecDeque<&'a A> = closed.into_iter().rev().map(|n| n.action).collect();

    tracing::debug!(
        "Actions planned: [{}]",
        actions.iter().map(|a| a.identity()).collect::<Vec<_>>().join(", ")
    );

    Plan::new(actions, goal_reached, termination, trace)
}

fn validate<A: Action>(action: &A) -> Result<(), SearchError> {
    let identity = action.identity();
    if identity.is_empty() {
        return Err(SearchError::EmptyIdentity);
    }

    if !action.cost().is_finite() {
        return Err(SearchError::NonFiniteCost { action: identity });
    }

    Ok(())
}

fn trace_step<A>(
    node: &SearchNode<'_, A>,
    unmet: &[&Property],
    candidates: &[String],
    disposition: Disposition,
) -> SearchTraceStep {
    SearchTraceStep {
        action: node.identity.clone(),
        cost_so_far: node.cost_so_far,
        unmet: unmet.iter().map(|p| p.to_string()).collect(),
        candidates: candidates.to_vec(),
        disposition,
    }
}
