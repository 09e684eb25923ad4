// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # offload-planner
//!
//! Decides which tasks of a [`TaskGraph`](task_graph::TaskGraph) should run
//! on the device and which should be offloaded, by finding a minimum cut
//! between the pinned tasks and the rest of the graph.
//!
//! # Pipeline
//!
//! | Stage | Item |
//! |---|---|
//! | Internalize graph under a cost model | [`WorkingGraph::internalize`] |
//! | Fold two vertices into one | [`WorkingGraph::merge`] |
//! | One greedy cut-phase | [`cut_phase`] |
//! | Repeat phases, keep the cheapest cut | [`MinCutOffloader`] |
//! | Result | [`OffloadPlan`] |
//!
//! Every run works on its own copy of the graph, so the same graph can be
//! optimised under several cost models, one after another or from
//! different threads.
//!
//! # Example
//! ```
//! use cost_model::ResponseTime;
//! use offload_planner::MinCutOffloader;
//! use task_graph::TaskGraph;
//!
//! let mut graph = TaskGraph::new("demo");
//! let ui = graph.add_node_with("ui", 0.0, 0.0, false);
//! let work = graph.add_node("work", 9.0, 3.0);
//! graph.set_edge(ui, work, 2.0).unwrap();
//!
//! let plan = MinCutOffloader::new().optimize(&graph, &mut ResponseTime).unwrap();
//! assert!(plan.is_local(ui));
//! assert!(plan.is_remote(work));
//! println!("{}", plan.summary());
//! ```

pub mod cut;
mod error;
pub mod matrix;
mod optimizer;
pub(crate) mod plan;
pub mod working;

pub use cut::{cut_phase, Cut};
pub use error::PlannerError;
pub use matrix::CostMatrix;
pub use optimizer::{optimize, MinCutOffloader};
pub use plan::OffloadPlan;
pub use working::{WorkingGraph, WorkingNode};
