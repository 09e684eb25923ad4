// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Task nodes and their outgoing edges.
//!
//! A [`TaskNode`] does not own its neighbours. Edges refer to other nodes
//! through [`NodeId`] handles into the same [`crate::TaskGraph`] arena.

use std::collections::BTreeMap;
use std::fmt;

/// Handle to a node inside a [`crate::TaskGraph`].
///
/// Handles are dense indices assigned in insertion order. They compare by
/// value, which gives the identity semantics the planner relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the arena index of this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A transmission edge as seen from its declaring node.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Edge {
    /// The node on the other end.
    pub target: NodeId,
    /// Cost of moving data between the two tasks.
    pub cost: f64,
}

/// One unit of computation in the task graph.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TaskNode {
    /// Human-readable label (e.g., `"decode"`).
    pub name: String,
    /// Cost of executing this task on the device.
    pub local_cost: f64,
    /// Cost of executing this task on the remote peer.
    pub remote_cost: f64,
    /// `false` pins the task to the device (UI, sensors, ...).
    pub offloadable: bool,
    /// Outgoing edges keyed by target. One entry per distinct target.
    pub(crate) edges: BTreeMap<NodeId, f64>,
}

impl TaskNode {
    pub(crate) fn new(name: String, local_cost: f64, remote_cost: f64, offloadable: bool) -> Self {
        Self {
            name,
            local_cost,
            remote_cost,
            offloadable,
            edges: BTreeMap::new(),
        }
    }

    /// Iterates the edges declared on this node, ordered by target handle.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges
            .iter()
            .map(|(&target, &cost)| Edge { target, cost })
    }

    /// Returns the cost of the edge declared towards `target`, if any.
    pub fn edge_to(&self, target: NodeId) -> Option<f64> {
        self.edges.get(&target).copied()
    }

    /// Returns the number of edges declared on this node.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Local minus remote cost: what is saved by running this task remotely,
    /// ignoring transmission.
    pub fn offload_gain(&self) -> f64 {
        self.local_cost - self.remote_cost
    }

    /// Returns a one-line summary of this node.
    pub fn summary(&self) -> String {
        format!(
            "{:<16} local={:>8.2} remote={:>8.2} edges={:<3}{}",
            self.name,
            self.local_cost,
            self.remote_cost,
            self.edges.len(),
            if self.offloadable { "" } else { " [pinned]" },
        )
    }
}
