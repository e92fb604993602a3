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

//! Realizes a list of desired interactions one after the other,
//! keeping track of which token sits on which position.

use super::config::RouterConfig;
use super::error::{ConsistencyError, RouteError};
use super::executor::{self, Execution};
use super::graph::{InteractionCapability, Permutation, Placement, SwapTopology};
use super::search::{self, Role};
use super::selector::{self, CostBreakdown, PinPenCombo};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapLogEntry {
    /// Exchange the tokens on two adjacent positions
    Swap(usize, usize),
    AlreadySatisfied,
    BatchComplete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AlreadySatisfied,
    Routed {
        pin: usize,
        pendulum: usize,
        pin_role: Role,
        cost: CostBreakdown,
        permutation: Permutation,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionReport {
    pub source: usize,
    pub target: usize,
    pub outcome: Outcome,
}

/// Everything realized so far. On failure this only covers the
/// interactions before the one that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteReport {
    /// Where the tokens were before the first interaction
    pub start: Placement,
    pub placement: Placement,
    pub log: Vec<SwapLogEntry>,
    pub total_swaps: i64,
    pub interactions: Vec<InteractionReport>,
}

#[derive(Debug, Error)]
#[error("{completed} of {requested} interactions realized, then failed: {error}")]
pub struct RouteFailure {
    pub report: RouteReport,
    pub completed: usize,
    pub requested: usize,
    pub error: RouteError,
}

pub struct Router<'a> {
    topology: &'a SwapTopology,
    capability: &'a InteractionCapability,
    config: RouterConfig,
}

struct Routed {
    combo: PinPenCombo,
    execution: Execution,
    placement: Placement,
}

impl RouteReport {
    fn new(placement: Placement) -> RouteReport {
        RouteReport {
            start: placement.clone(),
            placement,
            log: Vec::new(),
            total_swaps: 0,
            interactions: Vec::new(),
        }
    }

    pub fn completed(&self) -> usize {
        self.interactions.len()
    }

    pub fn swap_count(&self) -> usize {
        self.log.iter()
            .filter(|entry| matches!(entry, SwapLogEntry::Swap(..)))
            .count()
    }

    /// The swap topology edges labelled with the tokens now on them.
    pub fn final_swap_edges(&self, topology: &SwapTopology) -> Vec<(usize, usize)> {
        self.placement.label_edges(topology.edges())
    }

    pub fn final_interaction_edges(
        &self,
        capability: &InteractionCapability,
    ) -> Vec<(usize, usize)> {
        self.placement.label_edges(capability.edges())
    }
}

impl<'a> Router<'a> {
    pub fn new(
        topology: &'a SwapTopology,
        capability: &'a InteractionCapability,
        config: RouterConfig,
    ) -> Router<'a> {
        Router {
            topology,
            capability,
            config,
        }
    }

    /// Routes `soddi` starting with every token on its own position.
    pub fn route(
        &self,
        soddi: &[(usize, usize)],
    ) -> Result<RouteReport, RouteFailure> {
        self.route_from(Placement::identity(self.topology.n_positions()), soddi)
    }

    /// Routes `soddi` starting from an arbitrary placement, for
    /// example one left behind by an earlier call.
    pub fn route_from(
        &self,
        placement: Placement,
        soddi: &[(usize, usize)],
    ) -> Result<RouteReport, RouteFailure> {
        let fail = |report: RouteReport, error: RouteError| {
            warn!(%error, completed = report.completed(), "routing stopped");

            RouteFailure {
                completed: report.completed(),
                requested: soddi.len(),
                report,
                error,
            }
        };

        let n_positions = self.topology.n_positions();

        if placement.len() != n_positions {
            let error = RouteError::PlacementSize {
                expected: n_positions,
                actual: placement.len(),
            };
            return Err(fail(RouteReport::new(placement), error));
        }

        let mut report = RouteReport::new(placement);

        for &(source, target) in soddi.iter() {
            let routed = match self.route_interaction(
                &report.placement,
                source,
                target,
            ) {
                Ok(routed) => routed,
                Err(error) => return Err(fail(report, error)),
            };

            let Some(Routed { combo, execution, placement }) = routed
            else {
                debug!(source, target, "already satisfied");

                report.log.push(SwapLogEntry::AlreadySatisfied);
                report.interactions.push(InteractionReport {
                    source,
                    target,
                    outcome: Outcome::AlreadySatisfied,
                });

                continue;
            };

            debug!(
                source,
                target,
                pin = combo.pin,
                pendulum = combo.pendulum,
                cost = combo.cost.total(),
                "routed"
            );

            report.log.extend(
                execution.swaps
                    .iter()
                    .map(|&(a, b)| SwapLogEntry::Swap(a, b))
            );
            report.log.push(SwapLogEntry::BatchComplete);
            report.total_swaps += combo.cost.total();
            report.placement = placement;
            report.interactions.push(InteractionReport {
                source,
                target,
                outcome: Outcome::Routed {
                    pin: combo.pin,
                    pendulum: combo.pendulum,
                    pin_role: combo.pin_role,
                    cost: combo.cost,
                    permutation: execution.permutation,
                },
            });
        }

        if let Err(error) = check_swap_count(&report) {
            return Err(fail(report, error.into()));
        }

        Ok(report)
    }

    // Returns None if the interaction is already possible
    fn route_interaction(
        &self,
        placement: &Placement,
        source: usize,
        target: usize,
    ) -> Result<Option<Routed>, RouteError> {
        let n_tokens = placement.len();

        for token in [source, target] {
            if token >= n_tokens {
                return Err(RouteError::UnknownToken { token, n_tokens });
            }
        }

        let source_position = placement.position_of(source);
        let target_position = placement.position_of(target);

        if self.capability.has_edge(source_position, target_position) {
            return Ok(None);
        }

        let extra_levels = self.config.extra_levels();

        let mut candidates = search::find_candidates(
            self.topology,
            self.capability,
            source_position,
            true,
            extra_levels,
        )?;
        let target_candidates = search::find_candidates(
            self.topology,
            self.capability,
            target_position,
            false,
            extra_levels,
        )?;

        trace!(
            sources = candidates.len(),
            targets = target_candidates.len(),
            "pin candidates"
        );

        candidates.extend(target_candidates);

        let combo = selector::select(
            self.topology,
            self.capability,
            placement,
            candidates,
            source,
            target,
        )?;

        let execution = executor::execute_swaps(placement, &combo)?;

        let after = relabel(placement, &execution.permutation)?;

        self.check_swaps(placement, &after, &execution.swaps, source, target)?;
        self.check_edge(&after, source, target)?;

        Ok(Some(Routed {
            combo,
            execution,
            placement: after,
        }))
    }

    fn check_swaps(
        &self,
        before: &Placement,
        after: &Placement,
        swaps: &[(usize, usize)],
        source: usize,
        target: usize,
    ) -> Result<(), ConsistencyError> {
        let mut replay = before.clone();

        for &(from, to) in swaps.iter() {
            if !self.topology.are_adjacent(from, to) {
                return Err(ConsistencyError::NotAdjacent(from, to));
            }

            let token = replay.token_at(from);

            if token != source && token != target {
                return Err(ConsistencyError::UnexpectedMover { from, to, token });
            }

            replay.swap(from, to);
        }

        if self.config.verify_replay && replay != *after {
            return Err(ConsistencyError::ReplayMismatch);
        }

        Ok(())
    }

    fn check_edge(
        &self,
        after: &Placement,
        source: usize,
        target: usize,
    ) -> Result<(), ConsistencyError> {
        if self.capability.has_edge(
            after.position_of(source),
            after.position_of(target),
        ) {
            Ok(())
        } else {
            Err(ConsistencyError::MissingEdge {
                source_token: source,
                target_token: target,
            })
        }
    }
}

fn relabel(
    placement: &Placement,
    permutation: &Permutation,
) -> Result<Placement, ConsistencyError> {
    placement.relabelled(permutation).ok_or_else(|| {
        ConsistencyError::NotAPermutation(permutation.iter().collect())
    })
}

fn check_swap_count(report: &RouteReport) -> Result<(), ConsistencyError> {
    let logged = report.swap_count();

    if logged as i64 == report.total_swaps {
        Ok(())
    } else {
        Err(ConsistencyError::SwapCountMismatch {
            logged,
            accumulated: report.total_swaps,
        })
    }
}

/// Routes with the default configuration.
pub fn route(
    topology: &SwapTopology,
    capability: &InteractionCapability,
    soddi: &[(usize, usize)],
) -> Result<RouteReport, RouteFailure> {
    Router::new(topology, capability, RouterConfig::default()).route(soddi)
}
