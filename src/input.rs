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

//! The JSON documents read and written by the command line tools.
//! Nodes can be named with integers or strings. Internally they are
//! numbered in the order they first appear in the swap edges.

use super::router::{Outcome, RouteFailure, RouteReport, SwapLogEntry};
use super::search::Role;
use super::selector::CostBreakdown;
use super::validate::{InputError, Problem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeLabel {
    Id(i64),
    Name(String),
}

pub type LabelledEdge = (NodeLabel, NodeLabel);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDocument {
    #[serde(rename = "G_swaps")]
    pub swap_edges: Vec<LabelledEdge>,
    #[serde(rename = "G_interactions")]
    pub interaction_edges: Vec<LabelledEdge>,
    #[serde(rename = "SODDI")]
    pub soddi: Vec<LabelledEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepDocument {
    Swap(NodeLabel, NodeLabel),
    Marker(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionDocument {
    pub source: NodeLabel,
    pub target: NodeLabel,
    pub already_satisfied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<NodeLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pendulum: Option<NodeLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<CostBreakdown>,
    pub swaps: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputDocument {
    pub total_swaps: i64,
    pub swap_steps: Vec<StepDocument>,
    pub ids: Vec<NodeLabel>,
    pub interactions: Vec<InteractionDocument>,
    pub final_swap_edges: Vec<LabelledEdge>,
    pub final_interaction_edges: Vec<LabelledEdge>,
    pub completed: usize,
    pub error: Option<String>,
}

const ALREADY_SATISFIED_STEP: &str = "Done already";
const BATCH_COMPLETE_STEP: &str = "#";

impl fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NodeLabel::Id(id) => write!(f, "{}", id),
            NodeLabel::Name(name) => write!(f, "{}", name),
        }
    }
}

impl InputDocument {
    /// Every node label in the order it first appears in the swap
    /// edges. The position of a label in this list is its id.
    pub fn ids(&self) -> Vec<NodeLabel> {
        let mut ids = Vec::<NodeLabel>::new();

        for (a, b) in self.swap_edges.iter() {
            for label in [a, b] {
                if !ids.contains(label) {
                    ids.push(label.clone());
                }
            }
        }

        ids
    }

    pub fn to_problem(&self) -> Result<(Vec<NodeLabel>, Problem), InputError> {
        let ids = self.ids();

        let id_map = ids.iter()
            .enumerate()
            .map(|(id, label)| (label, id))
            .collect::<HashMap<&NodeLabel, usize>>();

        let convert = |edges: &[LabelledEdge]| {
            edges.iter().map(|(a, b)| {
                let lookup = |label: &NodeLabel| {
                    id_map.get(label)
                        .copied()
                        .ok_or_else(|| InputError::UnknownLabel(label.to_string()))
                };

                Ok((lookup(a)?, lookup(b)?))
            }).collect::<Result<Vec<(usize, usize)>, InputError>>()
        };

        let problem = Problem::new(
            ids.len(),
            &convert(&self.swap_edges)?,
            &convert(&self.interaction_edges)?,
            &convert(&self.soddi)?,
        )?;

        Ok((ids, problem))
    }
}

impl OutputDocument {
    pub fn new(
        ids: &[NodeLabel],
        problem: &Problem,
        report: &RouteReport,
        failure: Option<&RouteFailure>,
    ) -> OutputDocument {
        let label = |(a, b): (usize, usize)| (ids[a].clone(), ids[b].clone());

        // Each step names the tokens that are on the two positions at
        // the time of the swap
        let mut replay = report.start.clone();

        let swap_steps = report.log.iter().map(|entry| match entry {
            &SwapLogEntry::Swap(a, b) => {
                let step = StepDocument::Swap(
                    ids[replay.token_at(a)].clone(),
                    ids[replay.token_at(b)].clone(),
                );
                replay.swap(a, b);
                step
            },
            SwapLogEntry::AlreadySatisfied => {
                StepDocument::Marker(ALREADY_SATISFIED_STEP)
            },
            SwapLogEntry::BatchComplete => {
                StepDocument::Marker(BATCH_COMPLETE_STEP)
            },
        }).collect();

        let interactions = report.interactions.iter().map(|interaction| {
            let source = ids[interaction.source].clone();
            let target = ids[interaction.target].clone();

            match &interaction.outcome {
                Outcome::AlreadySatisfied => InteractionDocument {
                    source,
                    target,
                    already_satisfied: true,
                    pin: None,
                    pendulum: None,
                    pin_role: None,
                    cost: None,
                    swaps: 0,
                },
                Outcome::Routed { pin, pendulum, pin_role, cost, .. } => {
                    InteractionDocument {
                        source,
                        target,
                        already_satisfied: false,
                        pin: Some(ids[*pin].clone()),
                        pendulum: Some(ids[*pendulum].clone()),
                        pin_role: Some(*pin_role),
                        cost: Some(*cost),
                        swaps: cost.total(),
                    }
                },
            }
        }).collect();

        OutputDocument {
            total_swaps: report.total_swaps,
            swap_steps,
            ids: ids.to_vec(),
            interactions,
            final_swap_edges: report.final_swap_edges(&problem.topology)
                .into_iter()
                .map(label)
                .collect(),
            final_interaction_edges: report
                .final_interaction_edges(&problem.capability)
                .into_iter()
                .map(label)
                .collect(),
            completed: report.completed(),
            error: failure.map(|failure| failure.error.to_string()),
        }
    }
}
