use crate::graph::Candidate;
use crate::{Action, WorldState};

/// Filters candidates that are dominated by an earlier accepted one, keeping the input order
/// of the survivors.
///
/// A new candidate competes with an accepted one if it leaves no more preconditions unmet and
/// its effects cover every unmet effect of the accepted one. It then takes over that slot
/// only when strictly cheaper, otherwise it is dropped. Either way it is compared to no
/// further accepted candidates.
pub fn select_non_dominated<'a, 'p, A: Action>(
    candidates: Vec<Candidate<'a, 'p, A>>,
    world: &WorldState,
) -> Vec<Candidate<'a, 'p, A>> {
    let mut accepted: Vec<Candidate<'a, 'p, A>> = Vec::with_capacity(candidates.len());

    'candidates: for candidate in candidates {
        for slot in accepted.iter_mut() {
            if !dominates(&candidate, slot, world) {
                continue;
            }

            if candidate.cost() < slot.cost() {
                tracing::debug!("Replacing {} with {}", slot.identity, candidate.identity);
                *slot = candidate;
            } else {
                tracing::trace!("Dropping {}, {} is at least as cheap", candidate.identity, slot.identity);
            }
            continue 'candidates;
        }

        tracing::debug!("Found a new action: {}", candidate.identity);
        accepted.push(candidate);
    }

    accepted
}

fn dominates<A: Action>(candidate: &Candidate<'_, '_, A>, previous: &Candidate<'_, '_, A>, world: &WorldState) -> bool {
    candidate.unmet_preconditions <= previous.unmet_preconditions
        && world
            .unmet(previous.action.effects())
            .into_iter()
            .all(|effect| candidate.action.satisfies(effect))
}

/// Orders accepted candidates for expansion: more unmet preconditions first, then more
/// expensive first. The sort is stable, equal keys keep pool order.
pub fn order_for_expansion<A: Action>(candidates: &mut [Candidate<'_, '_, A>]) {
    candidates.sort_by(|a, b| {
        b.unmet_preconditions
            .cmp(&a.unmet_preconditions)
            .then_with(|| b.cost().total_cmp(&a.cost()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ActionGraph;
    use crate::{BasicAction, Property};

    fn identities<A: Action>(candidates: &[Candidate<'_, '_, A>]) -> Vec<String> {
        candidates.iter().map(|c| c.identity.clone()).collect()
    }

    fn discover<'a, 'p>(
        pool: &'a [BasicAction],
        unmet: &[&'p Property],
        world: &WorldState,
    ) -> Vec<Candidate<'a, 'p, BasicAction>> {
        ActionGraph::new(pool).candidates_for("Goal", unmet, world)
    }

    #[test]
    fn test_cheaper_candidate_replaces_previous() {
        let world = WorldState::from_iter([("HasEnergyItem", false), ("InitialHouseScoutDone", true)]);
        let pool = vec![
            BasicAction::new("LootHouse")
                .requires("InitialHouseScoutDone", true)
                .produces("HasEnergyItem", true)
                .with_cost(5.0),
            BasicAction::new("SearchForEnergy")
                .requires("InitialHouseScoutDone", true)
                .produces("HasEnergyItem", true)
                .with_cost(2.0),
        ];
        let needed = vec![Property::new("HasEnergyItem", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let selected = select_non_dominated(discover(&pool, &unmet, &world), &world);

        assert_eq!(identities(&selected), vec!["SearchForEnergy"]);
    }

    #[test]
    fn test_costlier_candidate_is_dropped() {
        let world = WorldState::from_iter([("HasEnergyItem", false)]);
        let pool = vec![
            BasicAction::new("SearchForEnergy").produces("HasEnergyItem", true).with_cost(2.0),
            BasicAction::new("LootHouse").produces("HasEnergyItem", true).with_cost(5.0),
            BasicAction::new("AlsoCheap").produces("HasEnergyItem", true).with_cost(2.0),
        ];
        let needed = vec![Property::new("HasEnergyItem", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let selected = select_non_dominated(discover(&pool, &unmet, &world), &world);

        assert_eq!(identities(&selected), vec!["SearchForEnergy"]);
    }

    #[test]
    fn test_partial_coverage_keeps_both() {
        let world = WorldState::from_iter([("A", false), ("B", false)]);
        let pool = vec![
            BasicAction::new("Both").produces("A", true).produces("B", true).with_cost(10.0),
            BasicAction::new("OnlyA").produces("A", true).with_cost(1.0),
        ];
        let needed = vec![Property::new("A", true), Property::new("B", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let selected = select_non_dominated(discover(&pool, &unmet, &world), &world);

        assert_eq!(identities(&selected), vec!["Both", "OnlyA"]);
    }

    #[test]
    fn test_more_downstream_work_never_dominates() {
        let world = WorldState::from_iter([("HasEnergyItem", false), ("Scouted", false)]);
        let pool = vec![
            BasicAction::new("SearchForEnergy").produces("HasEnergyItem", true).with_cost(3.0),
            BasicAction::new("ScoutThenSearch")
                .requires("Scouted", true)
                .produces("HasEnergyItem", true)
                .with_cost(1.0),
        ];
        let needed = vec![Property::new("HasEnergyItem", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let selected = select_non_dominated(discover(&pool, &unmet, &world), &world);

        assert_eq!(identities(&selected), vec!["SearchForEnergy", "ScoutThenSearch"]);
    }

    #[test]
    fn test_expansion_order() {
        let world = WorldState::from_iter([("A", false), ("B", false), ("C", false), ("X", false), ("Y", false)]);
        let pool = vec![
            BasicAction::new("Cheap").produces("A", true).with_cost(1.0),
            BasicAction::new("Expensive").produces("B", true).with_cost(4.0),
            BasicAction::new("NeedsTwo")
                .requires("X", true)
                .requires("Y", true)
                .produces("C", true)
                .with_cost(0.5),
        ];
        let needed = vec![Property::new("A", true), Property::new("B", true), Property::new("C", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let mut selected = select_non_dominated(discover(&pool, &unmet, &world), &world);
        order_for_expansion(&mut selected);

        assert_eq!(identities(&selected), vec!["NeedsTwo", "Expensive", "Cheap"]);
    }

    #[test]
    fn test_expansion_order_with_negative_cost() {
        let world = WorldState::from_iter([("A", false), ("B", false)]);
        let pool = vec![
            BasicAction::new("Bootstrap").produces("A", true).with_cost(-100.0),
            BasicAction::new("Regular").produces("B", true).with_cost(1.0),
        ];
        let needed = vec![Property::new("A", true), Property::new("B", true)];
        let unmet: Vec<&Property> = needed.iter().collect();

        let mut selected = select_non_dominated(discover(&pool, &unmet, &world), &world);
        order_for_expansion(&mut selected);

        assert_eq!(identities(&selected), vec!["Regular", "Bootstrap"]);
    }
}
