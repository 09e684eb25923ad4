// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # task-graph
//!
//! The weighted task graph that the offload planner partitions.
//!
//! - [`NodeId`]: a copyable handle into the graph's node arena. Nodes are
//!   identified by handle, never by value: two tasks with identical costs
//!   are still distinct tasks.
//! - [`TaskNode`]: one unit of computation with a local and a remote
//!   execution cost, and a flag saying whether it may leave the device.
//! - [`Edge`]: a transmission cost between two tasks. Edges are stored as a
//!   per-node mapping keyed by target, so re-declaring an edge updates it.
//! - [`TaskGraph`]: the arena itself, in insertion order.
//! - [`GraphManifest`]: the JSON file format for task graphs.
//! - [`TaskGraph::pattern_chain`]: a synthetic graph of chained five-task
//!   patterns, used for benchmarking.
//!
//! # Example
//! ```
//! use task_graph::TaskGraph;
//!
//! let mut graph = TaskGraph::new("demo");
//! let ui = graph.add_node_with("ui", 0.0, 0.0, false);
//! let work = graph.add_node("work", 9.0, 3.0);
//! graph.set_edge(ui, work, 2.0).unwrap();
//!
//! assert_eq!(graph.edge_cost(work, ui), Some(2.0));
//! assert_eq!(graph.forced_local(), vec![ui]);
//! ```

mod error;
pub mod graph;
mod manifest;
mod node;
mod synthetic;

pub use error::GraphError;
pub use graph::TaskGraph;
pub use manifest::{GraphManifest, ManifestEdge, ManifestNode};
pub use node::{Edge, NodeId, TaskNode};
