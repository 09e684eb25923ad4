// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the offload planner.

/// Errors that can occur while partitioning a task graph.
#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    /// The task graph has no nodes.
    #[error("cannot partition an empty task graph")]
    EmptyGraph,

    /// Every node is offloadable, so there is nothing to anchor the cut to.
    #[error("no forced-local node: at least one task must be pinned to the device")]
    NoForcedLocalNode,

    /// A plan failed its consistency checks.
    #[error("invalid offload plan: {0}")]
    InvalidPlan(String),

    /// The task graph itself is malformed.
    #[error("graph error: {0}")]
    Graph(#[from] task_graph::GraphError),
}
