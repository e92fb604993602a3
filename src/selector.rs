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

use super::align::merge_paths;
use super::crossing::{self, Paths};
use super::error::RouteError;
use super::graph::{InteractionCapability, Placement, ShortestPaths, SwapTopology};
use super::search::{PinCandidate, Role};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub dictator_swaps: usize,
    pub soldier_swaps: usize,
    pub extra_dictator_swaps: i64,
    pub extra_soldier_swaps: i64,
}

/// The chosen pair of positions for one interaction: the dictator
/// token ends up on the pin and the soldier token on the pendulum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinPenCombo {
    pub pin: usize,
    pub pendulum: usize,
    // Role of the pin in the interaction
    pub pin_role: Role,
    pub dictator: usize,
    pub soldier: usize,
    pub cost: CostBreakdown,
    pub dictator_path: Vec<usize>,
    pub soldier_path: Vec<usize>,
    pub dictator_first: bool,
}

struct Pendulum {
    position: usize,
    path: Vec<usize>,
}

impl CostBreakdown {
    pub fn total(&self) -> i64 {
        self.dictator_swaps as i64
            + self.soldier_swaps as i64
            + self.extra_dictator_swaps
            + self.extra_soldier_swaps
    }
}

// The closest position that is an interaction neighbour of the pin in
// the opposite role, as seen from wherever the soldier is now
fn find_pendulum(
    capability: &InteractionCapability,
    soldier_paths: &ShortestPaths,
    pin: &PinCandidate,
) -> Option<Pendulum> {
    let neighbors = match pin.role {
        Role::Source => capability.successors(pin.position),
        Role::Target => capability.predecessors(pin.position),
    };

    let mut best: Option<(usize, usize)> = None;

    for &position in neighbors {
        let Some(depth) = soldier_paths.depth(position)
        else {
            continue;
        };

        if best.map(|(_, best_depth)| depth < best_depth).unwrap_or(true) {
            best = Some((position, depth));
        }
    }

    let (position, _) = best?;

    soldier_paths.path_to(position).map(|path| Pendulum { position, path })
}

/// Picks the cheapest pin/pendulum combination out of the candidates
/// found around the source and the target tokens.
pub fn select(
    topology: &SwapTopology,
    capability: &InteractionCapability,
    placement: &Placement,
    mut candidates: Vec<PinCandidate>,
    source: usize,
    target: usize,
) -> Result<PinPenCombo, RouteError> {
    // Stable, so equal depths keep the order they were found in
    candidates.sort_by_key(|candidate| candidate.depth);

    let source_paths = topology.shortest_paths(placement.position_of(source));
    let target_paths = topology.shortest_paths(placement.position_of(target));

    let mut best: Option<PinPenCombo> = None;

    for pin in candidates.iter() {
        let (dictator, soldier, soldier_paths) = match pin.role {
            Role::Source => (source, target, &target_paths),
            Role::Target => (target, source, &source_paths),
        };

        let Some(pendulum) = find_pendulum(capability, soldier_paths, pin)
        else {
            continue;
        };

        let (dictator_path, soldier_path) = merge_paths(&pin.path, &pendulum.path);

        let crossing = crossing::evaluate(&Paths {
            dictator_path: &dictator_path,
            soldier_path: &soldier_path,
            pendulum: pendulum.position,
            pin: pin.position,
            dictator: placement.position_of(dictator),
            soldier: placement.position_of(soldier),
        })?;

        let cost = CostBreakdown {
            dictator_swaps: dictator_path.len().saturating_sub(1),
            soldier_swaps: soldier_path.len().saturating_sub(1),
            extra_dictator_swaps: crossing.extra_dictator_swaps,
            extra_soldier_swaps: crossing.extra_soldier_swaps,
        };

        let is_better = best.as_ref()
            .map(|best| cost.total() < best.cost.total())
            .unwrap_or(true);

        if is_better {
            best = Some(PinPenCombo {
                pin: pin.position,
                pendulum: pendulum.position,
                pin_role: pin.role,
                dictator,
                soldier,
                cost,
                dictator_path,
                soldier_path,
                dictator_first: crossing.dictator_first,
            });
        }
    }

    best.ok_or(RouteError::NoCombination {
        source_token: source,
        target_token: target,
    })
}
