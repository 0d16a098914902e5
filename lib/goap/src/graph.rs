use crate::{Action, Property, WorldState};

/// A pool action that establishes at least one unmet precondition of the node being expanded.
#[derive(Debug)]
pub struct Candidate<'a, 'p, A> {
    pub action: &'a A,
    pub identity: String,
    /// The unmet preconditions of the expanded node this action's effects satisfy.
    pub satisfies: Vec<&'p Property>,
    /// How many of this action's own preconditions are unmet, i.e. work left downstream.
    pub unmet_preconditions: usize,
}

impl<A: Action> Candidate<'_, '_, A> {
    pub fn cost(&self) -> f64 {
        self.action.cost()
    }
}

/// Read-only view on the action pool, answering "which actions satisfy these preconditions".
pub struct ActionGraph<'a, A> {
    actions: &'a [A],
}

impl<'a, A: Action> ActionGraph<'a, A> {
    pub fn new(actions: &'a [A]) -> Self {
        ActionGraph { actions }
    }

    /// Pool actions satisfying at least one of `unmet`, in pool order.
    /// The action identified by `current` never qualifies for itself.
    pub fn candidates_for<'p>(
        &self,
        current: &str,
        unmet: &[&'p Property],
        world: &WorldState,
    ) -> Vec<Candidate<'a, 'p, A>> {
        self.actions
            .iter()
            .filter_map(|action| {
                let identity = action.identity();
                if identity == current {
                    return None;
                }

                let satisfies: Vec<&'p Property> = unmet.iter().copied().filter(|p| action.satisfies(p)).collect();
                if satisfies.is_empty() {
                    return None;
                }

                tracing::trace!("New action {} meets {} condition(s)", identity, satisfies.len());

                Some(Candidate {
                    action,
                    identity,
                    satisfies,
                    unmet_preconditions: world.unmet(action.preconditions()).len(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicAction;

    #[test]
    fn test_candidates_match_key_and_value() {
        let world = WorldState::from_iter([("HasEnergyItem", false), ("InitialHouseScoutDone", false)]);
        let pool = vec![
            BasicAction::new("SearchForEnergy")
                .requires("InitialHouseScoutDone", true)
                .produces("HasEnergyItem", true),
            BasicAction::new("DropEnergy").produces("HasEnergyItem", false),
            BasicAction::new("Idle"),
        ];
        let needed = vec![Property::new("HasEnergyItem", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let candidates = ActionGraph::new(&pool).candidates_for("DrinkEnergy", &unmet, &world);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].identity, "SearchForEnergy");
        assert_eq!(candidates[0].satisfies, vec![&needed[0]]);
        assert_eq!(candidates[0].unmet_preconditions, 1);
    }

    #[test]
    fn test_current_action_is_never_a_candidate() {
        let world = WorldState::from_iter([("Loop", false)]);
        let pool = vec![BasicAction::new("SelfFeeding").requires("Loop", true).produces("Loop", true)];
        let needed = vec![Property::new("Loop", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let candidates = ActionGraph::new(&pool).candidates_for("SelfFeeding", &unmet, &world);

        assert!(candidates.is_empty());
    }
}
