// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! JSON task graph manifest.
//!
//! # Format
//! ```json
//! {
//!   "name": "paper-example",
//!   "nodes": [
//!     { "name": "a", "local_cost": 0, "remote_cost": 0, "offloadable": false },
//!     { "name": "b", "local_cost": 3, "remote_cost": 1 }
//!   ],
//!   "edges": [
//!     { "from": "a", "to": "b", "cost": 10 }
//!   ]
//! }
//! ```
//!
//! `offloadable` defaults to `true`. Edges reference nodes by name.

use crate::{GraphError, TaskGraph};
use std::collections::HashMap;
use std::path::Path;

/// Top-level graph manifest, deserialized from JSON.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct GraphManifest {
    /// Human-readable graph name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Task definitions, in index order.
    pub nodes: Vec<ManifestNode>,
    /// Transmission edges between tasks.
    #[serde(default)]
    pub edges: Vec<ManifestEdge>,
}

fn default_name() -> String {
    "unnamed".to_string()
}

fn default_true() -> bool {
    true
}

/// A single task entry in the manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ManifestNode {
    pub name: String,
    pub local_cost: f64,
    pub remote_cost: f64,
    #[serde(default = "default_true")]
    pub offloadable: bool,
}

/// A single edge entry in the manifest.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ManifestEdge {
    pub from: String,
    pub to: String,
    pub cost: f64,
}

impl GraphManifest {
    /// Loads a manifest from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, GraphError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Serialises the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds a manifest describing an existing graph.
    pub fn from_graph(graph: &TaskGraph) -> Self {
        let nodes = graph
            .iter_nodes()
            .map(|(_, n)| ManifestNode {
                name: n.name.clone(),
                local_cost: n.local_cost,
                remote_cost: n.remote_cost,
                offloadable: n.offloadable,
            })
            .collect();

        let edges = graph
            .iter_nodes()
            .flat_map(|(_, n)| {
                n.edges().filter_map(move |e| {
                    graph.node(e.target).map(|target| ManifestEdge {
                        from: n.name.clone(),
                        to: target.name.clone(),
                        cost: e.cost,
                    })
                })
            })
            .collect();

        Self {
            name: graph.name.clone(),
            nodes,
            edges,
        }
    }

    /// Validates that the manifest is internally consistent.
    ///
    /// Checks:
    /// - At least one node is defined.
    /// - No duplicate node names.
    /// - Every edge endpoint names a declared node.
    /// - No edge connects a node to itself.
    pub fn validate(&self) -> Result<(), GraphError> {
        if self.nodes.is_empty() {
            return Err(GraphError::Empty);
        }

        let mut seen = std::collections::HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.name.as_str()) {
                return Err(GraphError::DuplicateNode(node.name.clone()));
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !seen.contains(endpoint.as_str()) {
                    return Err(GraphError::InvalidGraphReference {
                        edge_from: edge.from.clone(),
                        edge_to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if edge.from == edge.to {
                return Err(GraphError::SelfEdge(edge.from.clone()));
            }
        }

        Ok(())
    }

    /// Validates the manifest and builds the corresponding [`TaskGraph`].
    pub fn into_graph(self) -> Result<TaskGraph, GraphError> {
        self.validate()?;

        let mut graph = TaskGraph::new(self.name);
        let mut ids = HashMap::with_capacity(self.nodes.len());
        for node in self.nodes {
            let id = graph.add_node_with(
                node.name.clone(),
                node.local_cost,
                node.remote_cost,
                node.offloadable,
            );
            ids.insert(node.name, id);
        }

        for edge in &self.edges {
            // Endpoints were checked by validate().
            if let (Some(&from), Some(&to)) = (ids.get(&edge.from), ids.get(&edge.to)) {
                graph.set_edge(from, to, edge.cost)?;
            }
        }

        graph.validate()?;
        tracing::debug!("{}", graph.summary());
        Ok(graph)
    }
}

impl TaskGraph {
    /// Loads and validates a task graph from a JSON manifest file.
    pub fn load(path: &Path) -> Result<Self, GraphError> {
        GraphManifest::from_file(path)?.into_graph()
    }
}
