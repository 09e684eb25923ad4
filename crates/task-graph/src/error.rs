// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for task graph construction and loading.

use crate::NodeId;

/// Errors that can occur when building or loading a task graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A handle does not refer to a node of this graph.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// An edge was declared from a node to itself.
    #[error("self-edge on node '{0}' is not allowed")]
    SelfEdge(String),

    /// A cost is NaN or infinite.
    #[error("invalid {kind} cost {value} on '{node}'")]
    InvalidCost {
        node: String,
        kind: &'static str,
        value: f64,
    },

    /// Two nodes share the same name in a manifest.
    #[error("duplicate node name '{0}'")]
    DuplicateNode(String),

    /// A manifest edge names a node that was never declared.
    #[error("edge '{edge_from}' -- '{edge_to}' references unknown node '{missing}'")]
    InvalidGraphReference {
        edge_from: String,
        edge_to: String,
        missing: String,
    },

    /// The graph (or manifest) contains no nodes.
    #[error("task graph contains no nodes")]
    Empty,

    /// The graph manifest file could not be read.
    #[error("failed to read graph manifest: {0}")]
    ManifestRead(#[from] std::io::Error),

    /// The manifest JSON is malformed.
    #[error("failed to parse graph manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),
}
