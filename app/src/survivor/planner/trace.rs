use goap::SearchTrace;

/// Remembers the last planning trace so that only changes end up in the log.
#[derive(Debug, Default)]
pub struct TraceLog {
    previous: Option<SearchTrace>,
}

impl TraceLog {
    pub fn display(&mut self, trace: &SearchTrace) {
        if !self.has_changed(trace) {
            tracing::info!("Planning result is unchanged");
            return;
        }

        match serde_json::to_string_pretty(trace) {
            Ok(json) => tracing::info!("Planning result:\n{}", json),
            Err(e) => tracing::error!("Error serializing planning trace: {:?}", e),
        }
    }

    fn has_changed(&mut self, current: &SearchTrace) -> bool {
        if self.previous.as_ref() == Some(current) {
            return false;
        }

        self.previous = Some(current.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use assert_json_diff::assert_json_include;
    use goap::{ActionSearch, WorldState};
    use serde_json::json;

    use super::*;
    use crate::survivor::domain::{SurvivorGoal, default_catalog};

    fn trace_for(world: &WorldState, goal: SurvivorGoal) -> SearchTrace {
        let catalog = default_catalog();
        let plan = ActionSearch::new(world)
            .search(catalog.goal_action(goal), catalog.pool())
            .unwrap();
        plan.trace().clone()
    }

    #[test]
    fn test_log_only_on_change() {
        let safe = WorldState::from_iter([("EnemyWasInSight", false)]);
        let threatened = WorldState::from_iter([("EnemyWasInSight", true)]);
        let mut log = TraceLog::default();

        assert!(log.has_changed(&trace_for(&threatened, SurvivorGoal::StaySafe)));
        assert!(!log.has_changed(&trace_for(&threatened, SurvivorGoal::StaySafe)));
        assert!(log.has_changed(&trace_for(&safe, SurvivorGoal::StaySafe)));
    }

    #[test]
    fn test_trace_json() {
        let world = WorldState::from_iter([("EnemyWasInSight", true)]);

        let actual = serde_json::to_value(trace_for(&world, SurvivorGoal::StaySafe)).unwrap();

        assert_json_include!(
            actual: actual,
            expected: json!({
                "goal": "StaySafe",
                "steps": [
                    {
                        "action": "StaySafe",
                        "unmet": ["EnemyWasInSight=false"],
                        "candidates": ["EvadeEnemy"],
                        "disposition": "closed"
                    },
                    {
                        "action": "EvadeEnemy",
                        "cost_so_far": 2.0,
                        "unmet": [],
                        "disposition": "closed"
                    }
                ]
            })
        );
    }
}
