//! Successor generation for the search.
//!
//! A move is one of empty, fill, or pour. Move generation lives here
//! rather than on `Configuration` because it needs the full pairwise
//! combinatorics of the container set and owns the definition of "what
//! counts as a move".

use crate::core::Configuration;
use std::collections::HashSet;

/// All configurations reachable from `configuration` in exactly one move.
///
/// The result is the union of three move classes:
/// 1. each non-empty container replaced by its emptied value;
/// 2. each non-full container replaced by its filled value;
/// 3. for each ordered pair of distinct containers where the source is
///    non-empty and the destination is not full, both replaced by the
///    pour result.
///
/// Unaffected containers are carried over unchanged. Moves that happen to
/// produce the same configuration collapse in the returned set.
pub fn successors(configuration: &Configuration) -> HashSet<Configuration> {
    let mut result = HashSet::new();
    let containers = configuration.container_set();

    for &container in containers {
        if !container.is_empty() {
            let mut next = containers.clone();
            next.remove(&container);
            next.insert(container.emptied());
            result.insert(Configuration::from_set(next));
        }
    }

    for &container in containers {
        if !container.is_full() {
            let mut next = containers.clone();
            next.remove(&container);
            next.insert(container.filled());
            result.insert(Configuration::from_set(next));
        }
    }

    for &source in containers {
        for &dest in containers {
            if source != dest && !source.is_empty() && !dest.is_full() {
                let (new_source, new_dest) = source.pour_into(dest);
                let mut next = containers.clone();
                next.remove(&source);
                next.remove(&dest);
                next.insert(new_source);
                next.insert(new_dest);
                result.insert(Configuration::from_set(next));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Container;

    fn config(pairs: &[(u32, u32)]) -> Configuration {
        Configuration::new(
            pairs
                .iter()
                .map(|&(capacity, level)| Container::new(capacity, level).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn initial_state_only_offers_fills() {
        // Both containers empty: no empties, no pours, two fills.
        let next = successors(&config(&[(3, 0), (5, 0)]));

        assert_eq!(next.len(), 2);
        assert!(next.contains(&config(&[(3, 3), (5, 0)])));
        assert!(next.contains(&config(&[(3, 0), (5, 5)])));
    }

    #[test]
    fn full_state_offers_empties_and_pours_that_change_nothing_effective() {
        // Both containers full: no fills, two empties, pours are blocked
        // at generation time because no destination has room.
        let next = successors(&config(&[(3, 3), (5, 5)]));

        assert_eq!(next.len(), 2);
        assert!(next.contains(&config(&[(3, 0), (5, 5)])));
        assert!(next.contains(&config(&[(3, 3), (5, 0)])));
    }

    #[test]
    fn pour_moves_appear_for_eligible_pairs() {
        let next = successors(&config(&[(3, 0), (5, 5)]));

        // Pouring the full 5 into the empty 3 leaves (3,3) and (5,2).
        assert!(next.contains(&config(&[(3, 3), (5, 2)])));
    }

    #[test]
    fn moves_between_distinct_capacities_change_the_configuration() {
        let start = config(&[(3, 1), (5, 2)]);
        let next = successors(&start);

        assert!(!next.contains(&start));
    }

    #[test]
    fn single_container_has_fill_and_empty_only() {
        let next = successors(&config(&[(4, 2)]));

        assert_eq!(next.len(), 2);
        assert!(next.contains(&config(&[(4, 0)])));
        assert!(next.contains(&config(&[(4, 4)])));
    }

    #[test]
    fn equal_capacity_containers_merge_in_successors() {
        // Emptying the full capacity-3 container leaves two containers
        // that are structurally identical, so the successor collapses to
        // a single set member.
        let start = config(&[(3, 3), (3, 0)]);
        let next = successors(&start);

        assert!(next.contains(&config(&[(3, 0)])));
    }

    #[test]
    fn equal_capacity_swap_can_reproduce_the_source() {
        // Pouring 3 units between two capacity-3 containers swaps their
        // levels, which the set representation cannot tell apart from the
        // source state. The engine's visited set filters these out.
        let start = config(&[(3, 3), (3, 0)]);
        let next = successors(&start);

        assert!(next.contains(&start));
    }
}
