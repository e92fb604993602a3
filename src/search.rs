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

use super::error::RouteError;
use super::graph::{InteractionCapability, SwapTopology};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Source,
    Target,
}

/// A position that already has an interaction edge in the role that
/// the token moving onto it will need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinCandidate {
    pub position: usize,
    // Number of swaps for the origin to reach the position
    pub depth: usize,
    pub role: Role,
    pub path: Vec<usize>,
}

fn has_role(
    capability: &InteractionCapability,
    position: usize,
    role: Role,
) -> bool {
    match role {
        Role::Source => capability.out_degree(position) > 0,
        Role::Target => capability.in_degree(position) > 0,
    }
}

/// Breadth-first search from `origin` for the closest positions that
/// can hold the source role (`want_source`) or the target role. Every
/// candidate at the shallowest depth is returned, along with any that
/// are at most `extra_levels` deeper.
pub fn find_candidates(
    topology: &SwapTopology,
    capability: &InteractionCapability,
    origin: usize,
    want_source: bool,
    extra_levels: usize,
) -> Result<Vec<PinCandidate>, RouteError> {
    let role = if want_source { Role::Source } else { Role::Target };
    let paths = topology.shortest_paths(origin);

    let mut visited = vec![false; topology.n_positions()];
    let mut queue = VecDeque::new();
    let mut candidates = Vec::<PinCandidate>::new();

    visited[origin] = true;
    queue.push_back((origin, 0));

    while let Some((position, depth)) = queue.pop_front() {
        // Stop once the whole level of the first candidate, plus the
        // tolerance, has been checked
        if let Some(first) = candidates.first() {
            if depth > first.depth + extra_levels {
                break;
            }
        }

        if has_role(capability, position, role) {
            let Some(path) = paths.path_to(position)
            else {
                return Err(RouteError::UnreachableInteraction { origin });
            };

            candidates.push(PinCandidate {
                position,
                depth,
                role,
                path,
            });
        }

        for &neighbor in topology.neighbors(position) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    if candidates.is_empty() {
        Err(RouteError::UnreachableInteraction { origin })
    } else {
        Ok(candidates)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn crossing_topology() -> SwapTopology {
        SwapTopology::new(6, &[(0, 1), (1, 3), (3, 4), (0, 5), (5, 2)])
    }

    #[test]
    fn closest_level_only() {
        let topology = crossing_topology();
        let capability = InteractionCapability::new(6, &[(5, 3), (2, 4)]);

        let sources = find_candidates(&topology, &capability, 0, true, 0)
            .unwrap();

        assert_eq!(
            sources,
            [PinCandidate {
                position: 5,
                depth: 1,
                role: Role::Source,
                path: vec![0, 5],
            }],
        );

        let targets = find_candidates(&topology, &capability, 1, false, 0)
            .unwrap();

        assert_eq!(
            targets,
            [PinCandidate {
                position: 3,
                depth: 1,
                role: Role::Target,
                path: vec![1, 3],
            }],
        );
    }

    #[test]
    fn origin_is_candidate() {
        let topology = SwapTopology::new(
            6,
            &[(0, 1), (1, 3), (5, 0), (2, 0), (4, 5)],
        );
        let capability = InteractionCapability::new(6, &[(5, 1), (4, 1)]);

        let targets = find_candidates(&topology, &capability, 1, false, 0)
            .unwrap();

        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].position, 1);
        assert_eq!(targets[0].depth, 0);
        assert_eq!(targets[0].path, [1]);
    }

    #[test]
    fn extra_levels() {
        // A path graph 0-1-2-3-4 with sources at 1, 3 and 4
        let topology = SwapTopology::new(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let capability = InteractionCapability::new(
            5,
            &[(1, 0), (3, 0), (4, 0)],
        );

        let positions = |extra_levels| {
            find_candidates(&topology, &capability, 0, true, extra_levels)
                .unwrap()
                .into_iter()
                .map(|candidate| (candidate.position, candidate.depth))
                .collect::<Vec<_>>()
        };

        assert_eq!(positions(0), [(1, 1)]);
        assert_eq!(positions(1), [(1, 1)]);
        assert_eq!(positions(2), [(1, 1), (3, 3)]);
        assert_eq!(positions(10), [(1, 1), (3, 3), (4, 4)]);
    }

    #[test]
    fn unreachable() {
        let topology = SwapTopology::new(3, &[(0, 1), (1, 2)]);
        let capability = InteractionCapability::new(3, &[]);

        assert_eq!(
            find_candidates(&topology, &capability, 2, true, 0),
            Err(RouteError::UnreachableInteraction { origin: 2 }),
        );
    }
}
