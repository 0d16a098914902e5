mod action;
mod catalog;
mod goal;

pub use action::{Survivor, SurvivorAction};
pub use catalog::{Catalog, default_catalog};
pub use goal::{SurvivorGoal, active_goal};
