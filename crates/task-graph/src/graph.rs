// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Task graph: an arena of [`TaskNode`]s addressed by [`NodeId`].
//!
//! Edges are declared directionally (`set_edge(from, to, cost)` stores the
//! edge on `from`) but the planner treats the graph as undirected. A graph
//! is long-lived: callers may keep updating transmission costs and hand the
//! same graph to the planner again.
//!
//! # Contract
//!
//! Self-edges are rejected at declaration time. Declaring both `a → b` and
//! `b → a` is allowed; the planner then uses the declaration made on the
//! node that comes later in insertion order.

use crate::{GraphError, NodeId, TaskNode};
use std::fmt;

/// The complete task graph, in insertion order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TaskGraph {
    /// Human-readable graph name (e.g., `"paper-example"`).
    pub name: String,
    nodes: Vec<TaskNode>,
}

impl TaskGraph {
    /// Creates an empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nodes: Vec::new(),
        }
    }

    /// Adds an offloadable task and returns its handle.
    pub fn add_node(&mut self, name: impl Into<String>, local_cost: f64, remote_cost: f64) -> NodeId {
        self.add_node_with(name, local_cost, remote_cost, true)
    }

    /// Adds a task with an explicit offloadable flag and returns its handle.
    pub fn add_node_with(
        &mut self,
        name: impl Into<String>,
        local_cost: f64,
        remote_cost: f64,
        offloadable: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes
            .push(TaskNode::new(name.into(), local_cost, remote_cost, offloadable));
        id
    }

    /// Declares the edge `from → to`, or updates its cost if it already exists.
    pub fn set_edge(&mut self, from: NodeId, to: NodeId, cost: f64) -> Result<(), GraphError> {
        self.check(from)?;
        self.check(to)?;

        if from == to {
            return Err(GraphError::SelfEdge(self.nodes[from.0].name.clone()));
        }
        if !cost.is_finite() {
            return Err(GraphError::InvalidCost {
                node: self.nodes[from.0].name.clone(),
                kind: "transmission",
                value: cost,
            });
        }

        let previous = self.nodes[from.0].edges.insert(to, cost);
        tracing::trace!(
            "edge {} -- {}: {:?} -> {cost}",
            self.nodes[from.0].name,
            self.nodes[to.0].name,
            previous,
        );
        Ok(())
    }

    /// Returns the transmission cost between two nodes.
    ///
    /// Looks at the declaration on `a` first, then on `b`.
    pub fn edge_cost(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let forward = self.node(a).and_then(|n| n.edge_to(b));
        forward.or_else(|| self.node(b).and_then(|n| n.edge_to(a)))
    }

    /// Returns a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&TaskNode> {
        self.nodes.get(id.0)
    }

    /// Returns the handle of the first node with the given name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.name == name).map(NodeId)
    }

    /// Iterates `(handle, node)` pairs in insertion order.
    pub fn iter_nodes(&self) -> impl Iterator<Item = (NodeId, &TaskNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Iterates all handles in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of declared edges.
    pub fn num_edges(&self) -> usize {
        self.nodes.iter().map(|n| n.num_edges()).sum()
    }

    /// Sum of the raw local costs: the price of running everything on-device.
    pub fn total_local_cost(&self) -> f64 {
        self.nodes.iter().map(|n| n.local_cost).sum()
    }

    /// Handles of the nodes that can never be offloaded, in insertion order.
    pub fn forced_local(&self) -> Vec<NodeId> {
        self.iter_nodes()
            .filter(|(_, n)| !n.offloadable)
            .map(|(id, _)| id)
            .collect()
    }

    /// Checks that the graph can be handed to the planner.
    ///
    /// # Checks
    /// - The graph is non-empty.
    /// - Every local and remote cost is finite.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        for node in &self.nodes {
            for (kind, value) in [("local", node.local_cost), ("remote", node.remote_cost)] {
                if !value.is_finite() {
                    return Err(GraphError::InvalidCost {
                        node: node.name.clone(),
                        kind,
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns a summary string describing the graph.
    pub fn summary(&self) -> String {
        format!(
            "Graph '{}': {} nodes ({} pinned), {} edges, local cost {:.2}",
            self.name,
            self.len(),
            self.forced_local().len(),
            self.num_edges(),
            self.total_local_cost(),
        )
    }

    fn check(&self, id: NodeId) -> Result<(), GraphError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }
}

impl fmt::Display for TaskGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TaskGraph '{}' ({} nodes):", self.name, self.nodes.len())?;
        for node in &self.nodes {
            writeln!(f, "  {}", node.summary())?;
        }
        Ok(())
    }
}
