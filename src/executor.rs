// Swap Router – Plans the swaps for a sequence of desired interactions
// Copyright (C) 2026  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::error::{ConsistencyError, RouteError};
use super::graph::{Permutation, Placement};
use super::selector::PinPenCombo;

/// The swaps for one interaction and where they leave the tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub swaps: Vec<(usize, usize)>,
    pub permutation: Permutation,
}

/// What a path looks like after the item at its start has been swapped
/// along it. With `to_very_end` the item ends up on the last element,
/// otherwise it stops just before it. Every item it passes shifts one
/// step towards the start.
pub fn rotate<T: Clone>(path: &[T], to_very_end: bool) -> Vec<T> {
    if path.len() <= 1 {
        return path.to_vec();
    }

    let mut rotated = path[1..].to_vec();

    if to_very_end {
        rotated.push(path[0].clone());
    } else {
        rotated.insert(rotated.len() - 1, path[0].clone());
    }

    rotated
}

// The node of `host` that comes after the last node of `guest`
fn next_node(host: &[usize], guest: &[usize]) -> Result<usize, ConsistencyError> {
    let no_next = |node| ConsistencyError::NoFollowingNode {
        node,
        path: host.to_vec(),
    };

    let Some(&last) = guest.last()
    else {
        return Err(no_next(usize::MAX));
    };

    host.iter()
        .position(|&n| n == last)
        .and_then(|index| host.get(index + 1))
        .copied()
        .ok_or_else(|| no_next(last))
}

fn check_budget(
    which: &'static str,
    path: &[usize],
    budget: i64,
) -> Result<(), ConsistencyError> {
    let swaps = path.len() as i64 - 1;

    if swaps == budget {
        Ok(())
    } else {
        Err(ConsistencyError::PathBudget { which, swaps, budget })
    }
}

// Moves the token at the start of `path` all the way to its end
fn run_path(
    placement: &mut Placement,
    path: &[usize],
    swaps: &mut Vec<(usize, usize)>,
) {
    let tokens = path.iter()
        .map(|&position| placement.token_at(position))
        .collect::<Vec<usize>>();

    for (&position, token) in path.iter().zip(rotate(&tokens, true)) {
        placement.set_token(position, token);
    }

    swaps.extend(path.windows(2).map(|pair| (pair[0], pair[1])));
}

/// Turns a pin/pendulum combination into concrete swaps. The path
/// that goes first is run to its end. Positions it shares with the
/// second path then carry their new tokens, and if that displaced the
/// token at the start of the second path, that start is left out.
pub fn execute_swaps(
    placement: &Placement,
    combo: &PinPenCombo,
) -> Result<Execution, RouteError> {
    let cost = &combo.cost;

    check_budget(
        "dictator",
        &combo.dictator_path,
        cost.dictator_swaps as i64,
    )?;
    check_budget(
        "soldier",
        &combo.soldier_path,
        cost.soldier_swaps as i64,
    )?;

    let dictator_budget = cost.dictator_swaps as i64 + cost.extra_dictator_swaps;
    let soldier_budget = cost.soldier_swaps as i64 + cost.extra_soldier_swaps;

    let (mut first_path, second_path, first_extra) = if combo.dictator_first {
        (
            combo.dictator_path.clone(),
            &combo.soldier_path,
            cost.extra_dictator_swaps,
        )
    } else {
        (
            combo.soldier_path.clone(),
            &combo.dictator_path,
            cost.extra_soldier_swaps,
        )
    };

    let (first_name, first_budget, second_name, second_budget) =
        if combo.dictator_first {
            ("dictator", dictator_budget, "soldier", soldier_budget)
        } else {
            ("soldier", soldier_budget, "dictator", dictator_budget)
        };

    if first_extra == -1 && first_path.len() > 1 {
        // Stop one short of where the other token will arrive
        first_path.pop();
    } else if first_extra == 1 {
        // Carry on one node further along the other path
        let next = next_node(second_path, &first_path)?;
        first_path.push(next);
    }

    check_budget(first_name, &first_path, first_budget)?;

    let mut after = placement.clone();
    let mut swaps = Vec::new();

    run_path(&mut after, &first_path, &mut swaps);

    let Some(&second_start) = second_path.first()
    else {
        return Err(ConsistencyError::PathBudget {
            which: second_name,
            swaps: -1,
            budget: second_budget,
        }.into());
    };

    // The first path already pushed a different token onto the start
    // of the second one, so that position stays put
    let moving = if after.token_at(second_start) != placement.token_at(second_start) {
        &second_path[1..]
    } else {
        &second_path[..]
    };

    check_budget(second_name, moving, second_budget)?;

    run_path(&mut after, moving, &mut swaps);

    let permutation = first_path.iter()
        .chain(combo.dictator_path.iter())
        .chain(combo.soldier_path.iter())
        .map(|&position| (placement.token_at(position), after.token_at(position)))
        .collect::<Permutation>();

    Ok(Execution { swaps, permutation })
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::search::Role;
    use super::super::selector::CostBreakdown;
    use std::collections::BTreeMap;

    fn combo(
        dictator_path: &[usize],
        soldier_path: &[usize],
        dictator_first: bool,
        extra_dictator_swaps: i64,
        extra_soldier_swaps: i64,
    ) -> PinPenCombo {
        PinPenCombo {
            pin: *dictator_path.last().unwrap(),
            pendulum: *soldier_path.last().unwrap(),
            pin_role: Role::Source,
            dictator: dictator_path[0],
            soldier: soldier_path[0],
            cost: CostBreakdown {
                dictator_swaps: dictator_path.len() - 1,
                soldier_swaps: soldier_path.len() - 1,
                extra_dictator_swaps,
                extra_soldier_swaps,
            },
            dictator_path: dictator_path.to_vec(),
            soldier_path: soldier_path.to_vec(),
            dictator_first,
        }
    }

    #[test]
    fn rotate_short() {
        assert_eq!(rotate::<usize>(&[], false), Vec::<usize>::new());
        assert_eq!(rotate(&[0], false), [0]);
        assert_eq!(rotate(&[0], true), [0]);
        assert_eq!(rotate(&[0, 1], false), [0, 1]);
        assert_eq!(rotate(&[0, 1], true), [1, 0]);
    }

    #[test]
    fn rotate_long() {
        assert_eq!(rotate(&[0, 1, 2], false), [1, 0, 2]);
        assert_eq!(rotate(&[0, 1, 2], true), [1, 2, 0]);
        assert_eq!(rotate(&[0, 1, 2, 3], false), [1, 2, 0, 3]);
        assert_eq!(rotate(&[0, 1, 2, 3], true), [1, 2, 3, 0]);
    }

    #[test]
    fn separate_paths() {
        let execution = execute_swaps(
            &Placement::identity(6),
            &combo(&[0, 5], &[1, 3], true, 0, 0),
        ).unwrap();

        assert_eq!(execution.swaps, [(0, 5), (1, 3)]);
        assert_eq!(
            execution.permutation.as_map(),
            &BTreeMap::from([(0, 5), (5, 0), (1, 3), (3, 1)]),
        );
    }

    #[test]
    fn displaced_start() {
        // Heads overlap: running the dictator pushes the soldier one
        // step along its own path already
        let execution = execute_swaps(
            &Placement::identity(6),
            &combo(&[0, 1, 3], &[1, 0, 5], true, 0, -1),
        ).unwrap();

        assert_eq!(execution.swaps, [(0, 1), (1, 3), (0, 5)]);
        assert_eq!(
            execution.permutation.as_map(),
            &BTreeMap::from([(1, 3), (0, 5), (5, 1), (3, 0)]),
        );
    }

    #[test]
    fn extended_path() {
        let execution = execute_swaps(
            &Placement::identity(4),
            &combo(&[1, 2], &[0, 1, 2, 3], true, 1, 0),
        ).unwrap();

        assert_eq!(execution.swaps, [(1, 2), (2, 3), (0, 1), (1, 2), (2, 3)]);
        assert_eq!(
            execution.permutation.as_map(),
            &BTreeMap::from([(0, 2), (1, 3), (2, 1), (3, 0)]),
        );
    }

    #[test]
    fn trimmed_path() {
        // Soldier goes first and stops short of the dictator’s start
        let execution = execute_swaps(
            &Placement::identity(4),
            &combo(&[1, 2], &[3, 2, 1], false, 0, -1),
        ).unwrap();

        assert_eq!(execution.swaps, [(3, 2), (1, 2)]);
        assert_eq!(
            execution.permutation.as_map(),
            &BTreeMap::from([(1, 3), (2, 1), (3, 2)]),
        );
    }

    #[test]
    fn bad_budget() {
        let mut bad = combo(&[0, 5], &[1, 3], true, 0, 0);
        bad.cost.dictator_swaps = 2;

        assert_eq!(
            execute_swaps(&Placement::identity(6), &bad),
            Err(RouteError::Consistency(ConsistencyError::PathBudget {
                which: "dictator",
                swaps: 1,
                budget: 2,
            })),
        );

        // Nothing follows the end of the soldier path to extend into
        let bad = combo(&[1, 2], &[0, 1, 2], true, 1, 0);

        assert!(matches!(
            execute_swaps(&Placement::identity(3), &bad),
            Err(RouteError::Consistency(ConsistencyError::NoFollowingNode { .. })),
        ));
    }
}
