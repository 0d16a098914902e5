use goap::{Property, WorldState};
use serde::Deserialize;

/// A scripted observation, applied before planning on the given tick.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PerceptionEvent {
    pub at_tick: u64,
    pub key: String,
    pub value: bool,
}

impl PerceptionEvent {
    fn as_property(&self) -> Property {
        Property::new(self.key.clone(), self.value)
    }
}

/// Returns the number of facts that actually changed.
pub fn perceive(events: &[PerceptionEvent], tick: u64, world: &mut WorldState) -> usize {
    let mut changed = 0;

    for event in events.iter().filter(|e| e.at_tick == tick) {
        if world.is_state_met(&event.key, event.value) {
            continue;
        }

        tracing::info!("Perceived {} on tick {}", event.as_property(), tick);
        world.apply_effects(&[event.as_property()]);
        changed += 1;
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(at_tick: u64, key: &str, value: bool) -> PerceptionEvent {
        PerceptionEvent {
            at_tick,
            key: key.to_string(),
            value,
        }
    }

    #[test]
    fn test_only_events_of_current_tick_applied() {
        let mut world = WorldState::from_iter([("EnemyWasInSight", false), ("HasMoreThan5Energy", true)]);
        let events = vec![event(3, "EnemyWasInSight", true), event(5, "HasMoreThan5Energy", false)];

        assert_eq!(perceive(&events, 3, &mut world), 1);

        assert_eq!(world.get_state("EnemyWasInSight"), Ok(true));
        assert_eq!(world.get_state("HasMoreThan5Energy"), Ok(true));
    }

    #[test]
    fn test_unchanged_fact_not_counted() {
        let mut world = WorldState::from_iter([("EnemyWasInSight", true)]);

        assert_eq!(perceive(&[event(0, "EnemyWasInSight", true)], 0, &mut world), 0);
    }

    #[test]
    fn test_unknown_fact_is_added() {
        let mut world = WorldState::new();

        perceive(&[event(0, "Raining", true)], 0, &mut world);

        assert_eq!(world.get_state("Raining"), Ok(true));
    }
}
