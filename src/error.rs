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

//! Errors raised while routing. All of them are fatal: the router
//! stops at the first one and hands back what it managed so far.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The breadth-first search ran out of positions without finding
    /// one with the wanted interaction role.
    #[error("no interaction-capable position is reachable from position {origin}")]
    UnreachableInteraction { origin: usize },

    /// The paths of the two moving tokens are related in a way that
    /// the crossing table doesn’t account for.
    #[error(
        "unexpected path geometry ({reason}): dictator path {dictator_path:?}, \
         soldier path {soldier_path:?}"
    )]
    GeometryDefect {
        reason: &'static str,
        dictator_path: Vec<usize>,
        soldier_path: Vec<usize>,
    },

    #[error(
        "no pin/pendulum combination found for interaction \
         ({source_token}, {target_token})"
    )]
    NoCombination { source_token: usize, target_token: usize },

    #[error("the starting placement has {actual} positions but the topology has {expected}")]
    PlacementSize { expected: usize, actual: usize },

    #[error("token {token} is not in the placement of {n_tokens} tokens")]
    UnknownToken { token: usize, n_tokens: usize },

    #[error("consistency check failed: {0}")]
    Consistency(#[from] ConsistencyError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("{which} path has {swaps} swaps but {budget} were assigned to it")]
    PathBudget {
        which: &'static str,
        swaps: i64,
        budget: i64,
    },

    #[error("no node follows {node} along the path {path:?}")]
    NoFollowingNode { node: usize, path: Vec<usize> },

    #[error(
        "interaction ({source_token}, {target_token}) is still missing \
         after relabelling"
    )]
    MissingEdge { source_token: usize, target_token: usize },

    #[error("the swap log has {logged} swaps but {accumulated} were accounted for")]
    SwapCountMismatch { logged: usize, accumulated: i64 },

    #[error("positions {0} and {1} can’t be swapped directly")]
    NotAdjacent(usize, usize),

    #[error("swap ({from}, {to}) moves token {token} which is not part of the interaction")]
    UnexpectedMover { from: usize, to: usize, token: usize },

    #[error("replaying the swaps doesn’t give the same placement as the permutation")]
    ReplayMismatch,

    #[error("the mapping {0:?} is not a permutation")]
    NotAPermutation(Vec<(usize, usize)>),
}
