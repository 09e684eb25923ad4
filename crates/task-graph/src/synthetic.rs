// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Synthetic task graphs for benchmarks and tests.

use crate::{GraphError, NodeId, TaskGraph};

impl TaskGraph {
    /// Chains `count` copies of a five-task pattern.
    ///
    /// Within a copy, task 0 feeds 1 and 2, task 2 feeds 3 and 4, and 1
    /// feeds 3. Tasks 3 and 4 of each copy link to tasks 1 and 0 of the
    /// next. Only the first copy's entry pair (tasks 0 and 1) may be
    /// offloaded; every later entry pair is pinned. `pattern_chain(30)` is
    /// the 150-task benchmark graph.
    pub fn pattern_chain(count: usize) -> Result<Self, GraphError> {
        let mut g = TaskGraph::new("pattern-chain");
        let mut last: Option<[NodeId; 5]> = None;

        for i in 0..count {
            let first = i == 0;
            let p = [
                g.add_node_with(format!("p{i}.0"), 5.0, 4.0, first),
                g.add_node_with(format!("p{i}.1"), 3.0, 2.0, first),
                g.add_node(format!("p{i}.2"), 6.0, 3.0),
                g.add_node(format!("p{i}.3"), 7.0, 4.0),
                g.add_node(format!("p{i}.4"), 7.0, 3.0),
            ];
            g.set_edge(p[0], p[1], 2.0)?;
            g.set_edge(p[0], p[2], 1.0)?;
            g.set_edge(p[1], p[3], 5.0)?;
            g.set_edge(p[2], p[3], 8.0)?;
            g.set_edge(p[2], p[4], 7.0)?;
            if let Some(prev) = last {
                g.set_edge(prev[3], p[1], 5.0)?;
                g.set_edge(prev[4], p[0], 5.0)?;
            }
            last = Some(p);
        }

        tracing::debug!("{}", g.summary());
        Ok(g)
    }
}
