use std::time::Duration;

use goap::WorldState;

use super::action::{ActionKind, SurvivorAction};
use super::goal::SurvivorGoal;

pub struct Catalog {
    survive: SurvivorAction,
    stay_safe: SurvivorAction,
    pool: Vec<SurvivorAction>,
}

impl Catalog {
    pub fn goal_action(&self, goal: SurvivorGoal) -> &SurvivorAction {
        match goal {
            SurvivorGoal::Survive => &self.survive,
            SurvivorGoal::StaySafe => &self.stay_safe,
        }
    }

    pub fn pool(&self) -> &[SurvivorAction] {
        &self.pool
    }

    /// Registers every fact used by the catalog, keeping values the world already has.
    ///
    /// Goal actions go first, so their defaults win over the ones of the pool.
    pub fn register(&self, world: &mut WorldState) {
        self.survive.register(world);
        self.stay_safe.register(world);
        for action in &self.pool {
            action.register(world);
        }
    }
}

pub fn default_catalog() -> Catalog {
    Catalog {
        survive: SurvivorAction::new(ActionKind::Survive)
            .requires("HasMoreThan5Energy", true)
            .requires_or("HasMoreThan5Health", true, true)
            .with_cost(0.0),
        stay_safe: SurvivorAction::new(ActionKind::StaySafe)
            .requires("EnemyWasInSight", false)
            .with_cost(0.0),
        pool: vec![
            SurvivorAction::new(ActionKind::DrinkEnergy)
                .requires("HasEnergyItem", true)
                .produces_or("HasMoreThan5Energy", true, true)
                .produces("HasEnergyItem", false)
                .takes(Duration::from_millis(100)),
            SurvivorAction::new(ActionKind::SearchForEnergy)
                .requires("InitialHouseScoutDone", true)
                .produces("HasEnergyItem", true)
                .takes(Duration::from_millis(400)),
            // bootstrap, must win against everything producing the same fact
            SurvivorAction::new(ActionKind::FindGeneralHouseLocations)
                .requires("InitialHouseScoutDone", false)
                .produces("InitialHouseScoutDone", true)
                .with_cost(-100.0)
                .takes(Duration::from_millis(300)),
            SurvivorAction::new(ActionKind::ExploreWorld)
                .requires("InitialHouseScoutDone", true)
                .produces_or("SurviveTest", true, true)
                .takes(Duration::from_millis(500)),
            SurvivorAction::new(ActionKind::EvadeEnemy)
                .requires("EnemyWasInSight", true)
                .produces("EnemyWasInSight", false)
                .with_cost(2.0)
                .takes(Duration::from_secs(1)),
        ],
    }
}
