// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The planner's working copy of a task graph.
//!
//! [`WorkingGraph::internalize`] turns a user [`TaskGraph`] into dense,
//! index-addressed state: one [`WorkingNode`] per task and a symmetric
//! [`CostMatrix`], all costs already passed through the cost model.
//! [`WorkingGraph::merge`] is the only operation that mutates it.
//!
//! Merged-away vertices keep their row and column (cleared to "no edge") so
//! indices stay stable; the active set tracks which vertices are left.

use crate::matrix::CostMatrix;
use cost_model::{finite_or_max, CostModel};
use task_graph::{NodeId, TaskGraph};

/// A vertex of the working graph.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingNode {
    /// Row/column of this vertex in the cost matrix.
    pub id: usize,
    /// Model-transformed local cost, accumulated over merges.
    pub local_cost: f64,
    /// Model-transformed remote cost, accumulated over merges.
    pub remote_cost: f64,
    /// Copied from the task this vertex was created from.
    pub offloadable: bool,
    /// The task this vertex was created from.
    pub parent: NodeId,
    /// Every task folded into this vertex so far, `parent` included.
    pub members: Vec<NodeId>,
}

impl WorkingNode {
    /// Local minus remote cost.
    #[inline]
    pub fn offload_gain(&self) -> f64 {
        self.local_cost - self.remote_cost
    }
}

/// Dense working state built fresh for every optimisation.
#[derive(Debug, Clone)]
pub struct WorkingGraph {
    matrix: CostMatrix,
    nodes: Vec<WorkingNode>,
    active: Vec<bool>,
    active_count: usize,
}

impl WorkingGraph {
    /// Builds the working state for `graph` under `model`.
    ///
    /// Calls `model.prepare` first. Indices follow the graph's insertion
    /// order. Each declared edge is written to both halves of the matrix;
    /// if both `a → b` and `b → a` are declared, the later node's
    /// declaration wins. Results are passed through [`finite_or_max`] so a
    /// custom model that returns NaN cannot poison the search.
    pub fn internalize<M>(graph: &TaskGraph, model: &mut M) -> Self
    where
        M: CostModel + ?Sized,
    {
        model.prepare(graph);

        let nodes: Vec<WorkingNode> = graph
            .iter_nodes()
            .map(|(id, task)| WorkingNode {
                id: id.index(),
                local_cost: finite_or_max(model.local_cost(task.local_cost)),
                remote_cost: finite_or_max(model.remote_cost(task.remote_cost)),
                offloadable: task.offloadable,
                parent: id,
                members: vec![id],
            })
            .collect();

        let mut matrix = CostMatrix::new(nodes.len());
        for (id, task) in graph.iter_nodes() {
            for edge in task.edges() {
                let weight = finite_or_max(model.transmission_cost(edge.cost));
                matrix.connect(id.index(), edge.target.index(), weight);
            }
        }

        tracing::trace!(
            "internalized {} nodes, {} edges under '{}'",
            nodes.len(),
            matrix.num_edges(),
            model.name(),
        );

        let n = nodes.len();
        Self {
            matrix,
            nodes,
            active: vec![true; n],
            active_count: n,
        }
    }

    /// Folds `doomed` into `survivor`.
    ///
    /// Costs are summed. Every edge of `doomed` is moved onto `survivor`,
    /// adding weights where both already had an edge to the same vertex.
    /// The edge between the two disappears and `doomed` leaves the active
    /// set. Its own cost fields are left as they were.
    pub fn merge(&mut self, survivor: usize, doomed: usize) {
        debug_assert_ne!(survivor, doomed);

        let absorbed = std::mem::take(&mut self.nodes[doomed].members);
        let (local, remote) = (self.nodes[doomed].local_cost, self.nodes[doomed].remote_cost);
        let target = &mut self.nodes[survivor];
        target.local_cost += local;
        target.remote_cost += remote;
        target.members.extend(absorbed);

        self.matrix.disconnect(survivor, doomed);

        for i in 0..self.matrix.dim() {
            let Some(moved) = self.matrix.get(doomed, i) else {
                continue;
            };
            let combined = match self.matrix.get(survivor, i) {
                Some(existing) => existing + moved,
                None => moved,
            };
            self.matrix.connect(survivor, i, combined);
            self.matrix.disconnect(doomed, i);
        }

        if self.active[doomed] {
            self.active[doomed] = false;
            self.active_count -= 1;
        }
    }

    /// Returns the cost matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Returns the vertex at index `i`.
    pub fn node(&self, i: usize) -> &WorkingNode {
        &self.nodes[i]
    }

    /// Returns every vertex, merged-away ones included.
    pub fn nodes(&self) -> &[WorkingNode] {
        &self.nodes
    }

    /// Returns the total number of vertices (matrix dimension).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no vertices at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `i` has not been merged away.
    pub fn is_active(&self, i: usize) -> bool {
        self.active[i]
    }

    /// Returns the number of vertices not yet merged away.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Iterates the indices of active vertices.
    pub fn active_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(i, &a)| a.then_some(i))
    }

    /// Indices of the non-offloadable vertices, in index order.
    pub fn forced_local(&self) -> Vec<usize> {
        self.nodes
            .iter()
            .filter(|n| !n.offloadable)
            .map(|n| n.id)
            .collect()
    }

    /// Sum of local costs over active vertices.
    pub fn total_local_cost(&self) -> f64 {
        self.active_ids().map(|i| self.nodes[i].local_cost).sum()
    }
}
