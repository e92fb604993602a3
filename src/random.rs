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

//! Generates random routing problems to try the router on.

use super::graph::SwapTopology;
use super::input::{InputDocument, NodeLabel};
use rand::Rng;
use thiserror::Error;

/// How many random swap graphs to try before giving up on finding a
/// connected one.
pub const MAX_ATTEMPTS: usize = 1000;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RandomError {
    #[error("the number of nodes must be at least 2")]
    TooFewNodes,
    #[error("the edge chance {0} is not between 0 and 1")]
    BadChance(f64),
    #[error("no connected swap graph found after {0} attempts")]
    NotConnected(usize),
}

fn random_pair<R: Rng>(rng: &mut R, n_nodes: usize) -> (usize, usize) {
    let pair = rand::seq::index::sample(rng, n_nodes, 2);

    (pair.index(0), pair.index(1))
}

fn random_swap_edges<R: Rng>(
    rng: &mut R,
    n_nodes: usize,
    swap_edge_chance: f64,
) -> Result<Vec<(usize, usize)>, RandomError> {
    for _ in 0..MAX_ATTEMPTS {
        let mut edges = Vec::new();

        for a in 0..n_nodes {
            for b in a + 1..n_nodes {
                if rng.gen_bool(swap_edge_chance) {
                    edges.push((a, b));
                }
            }
        }

        if SwapTopology::new(n_nodes, &edges).is_connected() {
            return Ok(edges);
        }
    }

    Err(RandomError::NotConnected(MAX_ATTEMPTS))
}

fn to_labels(edges: Vec<(usize, usize)>) -> Vec<(NodeLabel, NodeLabel)> {
    edges.into_iter()
        .map(|(a, b)| (NodeLabel::Id(a as i64), NodeLabel::Id(b as i64)))
        .collect()
}

/// A connected random swap graph, up to `2 * n_nodes` interaction
/// edges and `soddi_length` desired interactions.
pub fn random_problem<R: Rng>(
    rng: &mut R,
    n_nodes: usize,
    soddi_length: usize,
    swap_edge_chance: f64,
) -> Result<InputDocument, RandomError> {
    if n_nodes < 2 {
        return Err(RandomError::TooFewNodes);
    }

    if !(0.0..=1.0).contains(&swap_edge_chance) {
        return Err(RandomError::BadChance(swap_edge_chance));
    }

    let swap_edges = random_swap_edges(rng, n_nodes, swap_edge_chance)?;

    let mut interaction_edges = Vec::new();

    for _ in 0..n_nodes * 2 {
        let edge = random_pair(rng, n_nodes);

        if !interaction_edges.contains(&edge) {
            interaction_edges.push(edge);
        }
    }

    let soddi = (0..soddi_length)
        .map(|_| random_pair(rng, n_nodes))
        .collect();

    Ok(InputDocument {
        swap_edges: to_labels(swap_edges),
        interaction_edges: to_labels(interaction_edges),
        soddi: to_labels(soddi),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::router;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn valid_problems() {
        let mut rng = StdRng::seed_from_u64(7);

        for n_nodes in 2..12 {
            let document = random_problem(&mut rng, n_nodes, 5, 0.4).unwrap();
            let (ids, problem) = document.to_problem().unwrap();

            assert_eq!(ids.len(), n_nodes);
            assert_eq!(problem.soddi.len(), 5);
            assert!(problem.capability.edges().len() <= n_nodes * 2);
        }
    }

    #[test]
    fn seeded() {
        let a = random_problem(&mut StdRng::seed_from_u64(3), 8, 4, 0.5);
        let b = random_problem(&mut StdRng::seed_from_u64(3), 8, 4, 0.5);

        assert_eq!(a, b);
    }

    #[test]
    fn bad_arguments() {
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(
            random_problem(&mut rng, 1, 3, 0.5),
            Err(RandomError::TooFewNodes),
        );
        assert_eq!(
            random_problem(&mut rng, 5, 3, 1.5),
            Err(RandomError::BadChance(1.5)),
        );
        assert_eq!(
            random_problem(&mut rng, 5, 3, 0.0),
            Err(RandomError::NotConnected(MAX_ATTEMPTS)),
        );
    }

    #[test]
    fn route_random() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let document = random_problem(&mut rng, 8, 6, 0.4).unwrap();
            let (_, problem) = document.to_problem().unwrap();

            let report = router::route(
                &problem.topology,
                &problem.capability,
                &problem.soddi,
            ).unwrap();

            assert_eq!(report.completed(), problem.soddi.len());
            assert_eq!(report.swap_count() as i64, report.total_swaps);

            let (source, target) = problem.soddi[problem.soddi.len() - 1];
            assert!(problem.capability.has_edge(
                report.placement.position_of(source),
                report.placement.position_of(target),
            ));
        }
    }
}
