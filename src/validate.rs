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

use super::graph::{InteractionCapability, SwapTopology};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("the number of nodes must be at least 2")]
    TooFewNodes,
    #[error("node {node} is not in the range 0 to {n_nodes}")]
    NodeOutOfRange { node: usize, n_nodes: usize },
    #[error("the swap graph can’t have an edge from node {0} to itself")]
    SwapLoop(usize),
    #[error("the swap graph must be connected")]
    NotConnected,
    #[error("the interaction graph can’t have an edge from node {0} to itself")]
    InteractionLoop(usize),
    #[error("the interaction graph must have at least one edge")]
    NoInteractions,
    #[error("desired interaction {index} is between node {node} and itself")]
    SelfInteraction { index: usize, node: usize },
    #[error("unknown node label “{0}”")]
    UnknownLabel(String),
}

/// A routing problem that has passed all the checks the router relies
/// on.
#[derive(Debug, Clone)]
pub struct Problem {
    pub topology: SwapTopology,
    pub capability: InteractionCapability,
    pub soddi: Vec<(usize, usize)>,
}

fn check_range(node: usize, n_nodes: usize) -> Result<(), InputError> {
    if node < n_nodes {
        Ok(())
    } else {
        Err(InputError::NodeOutOfRange { node, n_nodes })
    }
}

fn check_edges(
    edges: &[(usize, usize)],
    n_nodes: usize,
    on_loop: fn(usize) -> InputError,
) -> Result<(), InputError> {
    for &(a, b) in edges.iter() {
        check_range(a, n_nodes)?;
        check_range(b, n_nodes)?;

        if a == b {
            return Err(on_loop(a));
        }
    }

    Ok(())
}

impl Problem {
    pub fn new(
        n_nodes: usize,
        swap_edges: &[(usize, usize)],
        interaction_edges: &[(usize, usize)],
        soddi: &[(usize, usize)],
    ) -> Result<Problem, InputError> {
        if n_nodes < 2 {
            return Err(InputError::TooFewNodes);
        }

        check_edges(swap_edges, n_nodes, InputError::SwapLoop)?;

        let topology = SwapTopology::new(n_nodes, swap_edges);

        if !topology.is_connected() {
            return Err(InputError::NotConnected);
        }

        check_edges(interaction_edges, n_nodes, InputError::InteractionLoop)?;

        if interaction_edges.is_empty() {
            return Err(InputError::NoInteractions);
        }

        for (index, &(source, target)) in soddi.iter().enumerate() {
            check_range(source, n_nodes)?;
            check_range(target, n_nodes)?;

            if source == target {
                return Err(InputError::SelfInteraction { index, node: source });
            }
        }

        Ok(Problem {
            topology,
            capability: InteractionCapability::new(n_nodes, interaction_edges),
            soddi: soddi.to_vec(),
        })
    }

    pub fn n_nodes(&self) -> usize {
        self.topology.n_positions()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid() {
        let problem = Problem::new(
            4,
            &[(0, 1), (1, 2), (2, 3), (1, 0)],
            &[(3, 2), (3, 2)],
            &[(0, 1)],
        ).unwrap();

        assert_eq!(problem.n_nodes(), 4);
        assert_eq!(problem.topology.edges(), [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(problem.capability.edges(), [(3, 2)]);
        assert_eq!(problem.soddi, [(0, 1)]);
    }

    #[test]
    fn too_few_nodes() {
        assert_eq!(
            Problem::new(1, &[], &[], &[]).unwrap_err(),
            InputError::TooFewNodes,
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            Problem::new(3, &[(0, 1), (1, 3)], &[(0, 1)], &[]).unwrap_err(),
            InputError::NodeOutOfRange { node: 3, n_nodes: 3 },
        );
        assert_eq!(
            Problem::new(3, &[(0, 1), (1, 2)], &[(0, 5)], &[]).unwrap_err(),
            InputError::NodeOutOfRange { node: 5, n_nodes: 3 },
        );
        assert_eq!(
            Problem::new(3, &[(0, 1), (1, 2)], &[(0, 1)], &[(4, 1)])
                .unwrap_err(),
            InputError::NodeOutOfRange { node: 4, n_nodes: 3 },
        );
    }

    #[test]
    fn bad_graphs() {
        assert_eq!(
            Problem::new(3, &[(0, 1), (2, 2)], &[(0, 1)], &[]).unwrap_err(),
            InputError::SwapLoop(2),
        );
        assert_eq!(
            Problem::new(4, &[(0, 1), (2, 3)], &[(0, 1)], &[]).unwrap_err(),
            InputError::NotConnected,
        );
        assert_eq!(
            Problem::new(3, &[(0, 1), (1, 2)], &[(1, 1)], &[]).unwrap_err(),
            InputError::InteractionLoop(1),
        );
        assert_eq!(
            Problem::new(3, &[(0, 1), (1, 2)], &[], &[]).unwrap_err(),
            InputError::NoInteractions,
        );
    }

    #[test]
    fn self_interaction() {
        assert_eq!(
            Problem::new(3, &[(0, 1), (1, 2)], &[(0, 1)], &[(0, 1), (2, 2)])
                .unwrap_err(),
            InputError::SelfInteraction { index: 1, node: 2 },
        );
    }
}
