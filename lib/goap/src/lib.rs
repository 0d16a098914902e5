//! Goal-oriented action planning over a boolean world state.
//!
//! [`ActionSearch`] chains backwards from a goal action: unmet preconditions are matched
//! against the effects of a pool of actions, the cheapest non-dominated providers are opened
//! and the closed nodes form the [`Plan`]. [`PlanExecutor`] drives a plan and applies the
//! effects of finished actions to the [`WorldState`].

mod action;
mod dominance;
mod error;
mod executor;
mod graph;
mod node;
mod plan;
mod planner;
mod property;
mod world;

pub use action::{Action, BasicAction};
pub use dominance::{order_for_expansion, select_non_dominated};
pub use error::SearchError;
pub use executor::{ExecutionStatus, Perform, PlanExecutor};
pub use graph::{ActionGraph, Candidate};
pub use plan::{Disposition, Plan, SearchTrace, SearchTraceStep, Termination};
pub use planner::{ActionSearch, SearchConfig, plan};
pub use property::Property;
pub use world::{WorldState, WorldStateError};
