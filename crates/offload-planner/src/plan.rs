// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Offload plan: the output of the min-cut optimizer.
//!
//! A plan splits every task of a graph into a local set and a remote set
//! and carries the estimated cost of running the graph that way, next to
//! the cost of running everything on the device.

use std::collections::BTreeSet;

use crate::PlannerError;
use task_graph::{NodeId, TaskGraph};

/// The partition produced by [`crate::MinCutOffloader`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct OffloadPlan {
    /// Name of the cost model the plan was computed under.
    pub cost_model: String,
    /// Tasks that stay on the device.
    pub local: BTreeSet<NodeId>,
    /// Tasks that are offloaded.
    pub remote: BTreeSet<NodeId>,
    /// Forced-local tasks folded into the anchor before the search.
    pub start_nodes: Vec<NodeId>,
    /// Model-transformed cost of running every task locally.
    pub original_cost: f64,
    /// Model-transformed cost of this partition.
    pub cost: f64,
    /// `1 − cost / original_cost`, or 0 when that is not finite.
    pub savings: f64,
    /// Number of cut-phases run.
    pub phases: usize,
}

impl OffloadPlan {
    /// Builds a plan from a local set; everything else in `graph` is remote.
    pub(crate) fn assemble(
        graph: &TaskGraph,
        cost_model: &str,
        local: impl IntoIterator<Item = NodeId>,
        start_nodes: Vec<NodeId>,
        original_cost: f64,
        cost: f64,
        phases: usize,
    ) -> Self {
        let local: BTreeSet<NodeId> = local.into_iter().collect();
        let remote = graph.ids().filter(|id| !local.contains(id)).collect();
        Self {
            cost_model: cost_model.to_string(),
            local,
            remote,
            start_nodes,
            original_cost,
            cost,
            savings: savings(original_cost, cost),
            phases,
        }
    }

    /// Returns `true` if `id` stays on the device.
    pub fn is_local(&self, id: NodeId) -> bool {
        self.local.contains(&id)
    }

    /// Returns `true` if `id` is offloaded.
    pub fn is_remote(&self, id: NodeId) -> bool {
        self.remote.contains(&id)
    }

    /// `cost / original_cost`.
    pub fn cost_ratio(&self) -> f64 {
        self.cost / self.original_cost
    }

    /// Total number of tasks covered by the plan.
    pub fn len(&self) -> usize {
        self.local.len() + self.remote.len()
    }

    /// Returns `true` if the plan covers no tasks.
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty()
    }

    /// Checks the plan against the graph it was computed for.
    ///
    /// Checks:
    /// - Local and remote sets are disjoint.
    /// - Together they cover every node of `graph` and nothing else.
    /// - Every non-offloadable node is local.
    pub fn validate(&self, graph: &TaskGraph) -> Result<(), PlannerError> {
        if let Some(id) = self.local.intersection(&self.remote).next() {
            return Err(PlannerError::InvalidPlan(format!(
                "node {id} is both local and remote"
            )));
        }

        if self.len() != graph.len() {
            return Err(PlannerError::InvalidPlan(format!(
                "plan covers {} nodes but graph has {}",
                self.len(),
                graph.len(),
            )));
        }

        for (id, node) in graph.iter_nodes() {
            if !self.is_local(id) && !self.is_remote(id) {
                return Err(PlannerError::InvalidPlan(format!(
                    "node '{}' is in neither set",
                    node.name
                )));
            }
            if !node.offloadable && !self.is_local(id) {
                return Err(PlannerError::InvalidPlan(format!(
                    "pinned node '{}' was offloaded",
                    node.name
                )));
            }
        }

        Ok(())
    }

    /// Resolves both sets to node names, local first.
    pub fn names<'g>(&self, graph: &'g TaskGraph) -> (Vec<&'g str>, Vec<&'g str>) {
        let resolve = |set: &BTreeSet<NodeId>| -> Vec<&'g str> {
            set.iter()
                .filter_map(|&id| graph.node(id).map(|n| n.name.as_str()))
                .collect()
        };
        (resolve(&self.local), resolve(&self.remote))
    }

    /// Returns a human-readable summary of the plan.
    pub fn summary(&self) -> String {
        format!(
            "Plan '{}': {} local, {} remote, cost {:.2}/{:.2} ({:.1}% savings), {} phases",
            self.cost_model,
            self.local.len(),
            self.remote.len(),
            self.cost,
            self.original_cost,
            self.savings * 100.0,
            self.phases,
        )
    }
}

impl std::fmt::Display for OffloadPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

fn savings(original_cost: f64, cost: f64) -> f64 {
    let value = 1.0 - cost / original_cost;
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
