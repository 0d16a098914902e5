use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::Action;

/// Ordered actions, front is executed first.
///
/// The order is the reversed closing order of the search. This is a valid execution order
/// for acyclic, non-branching dependency chains; for branching dependencies it is an
/// approximation, not a verified topological sort.
#[derive(Debug)]
pub struct Plan<'a, A> {
    actions: VecDeque<&'a A>,
    goal_reached: bool,
    termination: Termination,
    trace: SearchTrace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum Termination {
    /// The open list ran empty.
    #[display("exhausted")]
    Exhausted,

    /// The search stopped after `limit` expansions with nodes still open.
    #[display("expansion limit {limit}")]
    ExpansionLimit { limit: usize },
}

impl<'a, A> Plan<'a, A> {
    pub(crate) fn new(actions: VecDeque<&'a A>, goal_reached: bool, termination: Termination, trace: SearchTrace) -> Self {
        Self {
            actions,
            goal_reached,
            termination,
            trace,
        }
    }

    pub fn empty() -> Self {
        Self::new(VecDeque::new(), false, Termination::Exhausted, SearchTrace::default())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn front(&self) -> Option<&'a A> {
        self.actions.front().copied()
    }

    pub fn pop_front(&mut self) -> Option<&'a A> {
        self.actions.pop_front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a A> + '_ {
        self.actions.iter().copied()
    }

    /// Whether the goal node itself was closed. An empty or partial plan has this unset.
    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn trace(&self) -> &SearchTrace {
        &self.trace
    }
}

impl<A: Action> Plan<'_, A> {
    pub fn identities(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.identity()).collect()
    }

    pub fn total_cost(&self) -> f64 {
        self.actions.iter().map(|a| a.cost()).sum()
    }
}

impl<'a, A> IntoIterator for Plan<'a, A> {
    type Item = &'a A;
    type IntoIter = std::collections::vec_deque::IntoIter<&'a A>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

/// Record of every node the search evaluated, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchTrace {
    pub goal: String,
    pub steps: Vec<SearchTraceStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTraceStep {
    pub action: String,
    pub cost_so_far: f64,
    pub unmet: Vec<String>,
    pub candidates: Vec<String>,
    pub disposition: Disposition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    #[display("closed")]
    Closed,
    #[display("discarded")]
    Discarded,
}

impl SearchTrace {
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            steps: vec![],
        }
    }

    pub fn closed(&self) -> impl Iterator<Item = &SearchTraceStep> {
        self.steps.iter().filter(|s| s.disposition == Disposition::Closed)
    }

    pub fn discarded(&self) -> impl Iterator<Item = &SearchTraceStep> {
        self.steps.iter().filter(|s| s.disposition == Disposition::Discarded)
    }
}
