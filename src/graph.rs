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

//! The two fixed graphs over the positions, and the placement of
//! tokens on those positions. The graphs are indexed by position and
//! are never relabelled. Only the placement changes as swaps happen.

use std::collections::{BTreeMap, VecDeque};

#[derive(Debug, Clone)]
pub struct SwapTopology {
    edges: Vec<(usize, usize)>,
    neighbors: Vec<Vec<usize>>,
}

#[derive(Debug, Clone)]
pub struct InteractionCapability {
    edges: Vec<(usize, usize)>,
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
}

/// Shortest paths from one origin, as found by a breadth-first
/// search of the swap topology.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    parents: Vec<Option<usize>>,
    depths: Vec<Option<usize>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    // Position → token
    tokens: Vec<usize>,
    // Token → position
    positions: Vec<usize>,
}

/// How the tokens on the positions touched by one interaction were
/// reassigned, keyed by the token that used to be there.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Permutation {
    mapping: BTreeMap<usize, usize>,
}

impl SwapTopology {
    pub fn new(n_positions: usize, edges: &[(usize, usize)]) -> SwapTopology {
        let mut topology = SwapTopology {
            edges: Vec::with_capacity(edges.len()),
            neighbors: vec![Vec::new(); n_positions],
        };

        for &(a, b) in edges.iter() {
            if a == b || topology.are_adjacent(a, b) {
                continue;
            }

            topology.edges.push((a, b));
            topology.neighbors[a].push(b);
            topology.neighbors[b].push(a);
        }

        topology
    }

    pub fn n_positions(&self) -> usize {
        self.neighbors.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn neighbors(&self, position: usize) -> &[usize] {
        &self.neighbors[position]
    }

    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbors[a].contains(&b)
    }

    pub fn shortest_paths(&self, origin: usize) -> ShortestPaths {
        let mut parents = vec![None; self.n_positions()];
        let mut depths = vec![None; self.n_positions()];
        let mut queue = VecDeque::new();

        depths[origin] = Some(0);
        queue.push_back((origin, 0));

        while let Some((position, depth)) = queue.pop_front() {
            for &neighbor in self.neighbors(position) {
                if depths[neighbor].is_none() {
                    depths[neighbor] = Some(depth + 1);
                    parents[neighbor] = Some(position);
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        ShortestPaths { parents, depths }
    }

    pub fn is_connected(&self) -> bool {
        if self.n_positions() == 0 {
            return true;
        }

        let paths = self.shortest_paths(0);

        (0..self.n_positions()).all(|position| paths.depth(position).is_some())
    }
}

impl InteractionCapability {
    pub fn new(
        n_positions: usize,
        edges: &[(usize, usize)],
    ) -> InteractionCapability {
        let mut capability = InteractionCapability {
            edges: Vec::with_capacity(edges.len()),
            successors: vec![Vec::new(); n_positions],
            predecessors: vec![Vec::new(); n_positions],
        };

        for &(from, to) in edges.iter() {
            if from == to || capability.has_edge(from, to) {
                continue;
            }

            capability.edges.push((from, to));
            capability.successors[from].push(to);
            capability.predecessors[to].push(from);
        }

        // Predecessors are looked at in position order
        for predecessors in capability.predecessors.iter_mut() {
            predecessors.sort_unstable();
        }

        capability
    }

    pub fn n_positions(&self) -> usize {
        self.successors.len()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.successors[from].contains(&to)
    }

    pub fn successors(&self, position: usize) -> &[usize] {
        &self.successors[position]
    }

    pub fn predecessors(&self, position: usize) -> &[usize] {
        &self.predecessors[position]
    }

    pub fn out_degree(&self, position: usize) -> usize {
        self.successors[position].len()
    }

    pub fn in_degree(&self, position: usize) -> usize {
        self.predecessors[position].len()
    }
}

impl ShortestPaths {
    pub fn depth(&self, position: usize) -> Option<usize> {
        self.depths[position]
    }

    /// The path from the origin to `position`, including both ends.
    pub fn path_to(&self, position: usize) -> Option<Vec<usize>> {
        self.depths[position]?;

        let mut path = vec![position];
        let mut current = position;

        while let Some(parent) = self.parents[current] {
            path.push(parent);
            current = parent;
        }

        path.reverse();

        Some(path)
    }
}

impl Placement {
    /// Every token starts on the position with the same number.
    pub fn identity(n_positions: usize) -> Placement {
        Placement {
            tokens: (0..n_positions).collect(),
            positions: (0..n_positions).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn token_at(&self, position: usize) -> usize {
        self.tokens[position]
    }

    pub fn position_of(&self, token: usize) -> usize {
        self.positions[token]
    }

    pub fn tokens(&self) -> &[usize] {
        &self.tokens
    }

    pub fn set_token(&mut self, position: usize, token: usize) {
        self.tokens[position] = token;
        self.positions[token] = position;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.tokens.swap(a, b);
        self.positions[self.tokens[a]] = a;
        self.positions[self.tokens[b]] = b;
    }

    /// Applies a permutation to every position. Returns `None` if the
    /// result would put the same token on two positions.
    pub fn relabelled(&self, permutation: &Permutation) -> Option<Placement> {
        let tokens = self.tokens
            .iter()
            .map(|&token| permutation.apply(token))
            .collect::<Vec<usize>>();

        let mut positions = vec![usize::MAX; tokens.len()];

        for (position, &token) in tokens.iter().enumerate() {
            if token >= positions.len() || positions[token] != usize::MAX {
                return None;
            }

            positions[token] = position;
        }

        Some(Placement { tokens, positions })
    }

    /// Reports static edges as the pairs of tokens currently sitting on
    /// their ends.
    pub fn label_edges(&self, edges: &[(usize, usize)]) -> Vec<(usize, usize)> {
        edges.iter()
            .map(|&(a, b)| (self.tokens[a], self.tokens[b]))
            .collect()
    }
}

impl Permutation {
    pub fn get(&self, token: usize) -> Option<usize> {
        self.mapping.get(&token).copied()
    }

    pub fn apply(&self, token: usize) -> usize {
        self.get(token).unwrap_or(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.mapping.iter().map(|(&from, &to)| (from, to))
    }

    pub fn as_map(&self) -> &BTreeMap<usize, usize> {
        &self.mapping
    }
}

impl FromIterator<(usize, usize)> for Permutation {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Permutation {
        Permutation {
            mapping: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn duplicate_edges() {
        let topology = SwapTopology::new(3, &[(0, 1), (1, 0), (1, 2), (2, 2)]);

        assert_eq!(topology.edges(), &[(0, 1), (1, 2)]);
        assert_eq!(topology.neighbors(1), &[0, 2]);

        let capability = InteractionCapability::new(
            3,
            &[(2, 1), (0, 1), (2, 1), (1, 1)],
        );

        assert_eq!(capability.edges(), &[(2, 1), (0, 1)]);
        assert_eq!(capability.predecessors(1), &[0, 2]);
        assert_eq!(capability.out_degree(2), 1);
        assert_eq!(capability.in_degree(1), 2);
        assert!(!capability.has_edge(1, 2));
    }

    #[test]
    fn shortest_paths() {
        let topology = SwapTopology::new(
            6,
            &[(0, 1), (1, 3), (3, 4), (0, 5), (5, 2)],
        );

        let paths = topology.shortest_paths(1);

        assert_eq!(paths.path_to(1), Some(vec![1]));
        assert_eq!(paths.path_to(2), Some(vec![1, 0, 5, 2]));
        assert_eq!(paths.path_to(4), Some(vec![1, 3, 4]));
        assert_eq!(paths.depth(2), Some(3));
        assert!(topology.is_connected());

        let topology = SwapTopology::new(4, &[(0, 1), (2, 3)]);

        assert_eq!(topology.shortest_paths(0).path_to(3), None);
        assert!(!topology.is_connected());
    }

    #[test]
    fn placement() {
        let mut placement = Placement::identity(4);

        placement.swap(0, 3);
        placement.swap(3, 2);

        assert_eq!(placement.tokens(), &[3, 1, 0, 2]);
        assert_eq!(placement.position_of(0), 2);
        assert_eq!(placement.position_of(2), 3);
        assert_eq!(placement.label_edges(&[(0, 1), (2, 3)]), [(3, 1), (0, 2)]);
    }

    #[test]
    fn relabel() {
        let placement = Placement::identity(4);

        let permutation = [(0, 5), (5, 0)].into_iter().collect::<Permutation>();
        assert_eq!(placement.relabelled(&permutation), None);

        let mut expected = Placement::identity(4);
        expected.swap(0, 1);

        let permutation = [(0, 1), (1, 0)].into_iter().collect::<Permutation>();
        assert_eq!(placement.relabelled(&permutation), Some(expected));

        let permutation = [(0, 1), (2, 2)].into_iter().collect::<Permutation>();
        assert_eq!(placement.relabelled(&permutation), None);
    }
}
