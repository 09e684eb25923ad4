// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Global min-cut optimizer.
//!
//! Repeats cut-phases on a shrinking working graph and keeps the cheapest
//! cut seen:
//!
//! 1. Internalize the task graph under the cost model.
//! 2. Fold every forced-local vertex into the first one (the anchor).
//! 3. Run a cut-phase from the anchor, then merge its `t` into its `s`.
//! 4. Stop once a phase keeps only the anchor local.
//!
//! Each optimisation builds its own working state, so one offloader (and
//! one task graph) can serve any number of independent runs.

use crate::cut::{cut_phase, Cut};
use crate::working::WorkingGraph;
use crate::{OffloadPlan, PlannerError};
use cost_model::CostModel;
use task_graph::{NodeId, TaskGraph};

/// Min-cut local/remote partitioner.
#[derive(Debug, Clone, Default)]
pub struct MinCutOffloader;

impl MinCutOffloader {
    pub fn new() -> Self {
        Self
    }

    /// Human-readable name of this partitioner.
    pub fn name(&self) -> &str {
        "min-cut"
    }

    /// Computes the cheapest local/remote partition of `graph` under `model`.
    ///
    /// `model.prepare` is called once per run. The graph is only read.
    pub fn optimize<M>(&self, graph: &TaskGraph, model: &mut M) -> Result<OffloadPlan, PlannerError>
    where
        M: CostModel + ?Sized,
    {
        if graph.is_empty() {
            return Err(PlannerError::EmptyGraph);
        }
        graph.validate()?;

        tracing::info!("{}", graph.summary());
        tracing::info!("using cost model: {}", model.name());

        let mut main = WorkingGraph::internalize(graph, &mut *model);

        let forced = main.forced_local();
        let (&anchor, rest) = forced
            .split_first()
            .ok_or(PlannerError::NoForcedLocalNode)?;
        for &other in rest {
            main.merge(anchor, other);
        }
        let start_nodes: Vec<NodeId> = forced.iter().map(|&i| main.node(i).parent).collect();

        let original_cost = main.total_local_cost();

        if main.active_count() == 1 {
            tracing::info!("every task is pinned; nothing to offload");
            let plan = OffloadPlan::assemble(
                graph,
                model.name(),
                graph.ids(),
                start_nodes,
                original_cost,
                original_cost,
                0,
            );
            plan.validate(graph)?;
            return Ok(plan);
        }

        let mut phases = 0;
        let mut best: Option<Cut> = None;
        loop {
            let cut = cut_phase(&main, anchor);
            phases += 1;
            tracing::debug!(
                "phase {phases}: s={} t={} local={} weight={:.4}",
                cut.s,
                cut.t,
                cut.local_nodes.len(),
                cut.weight,
            );

            main.merge(cut.s, cut.t);
            let done = cut.len() <= 1;

            if best.as_ref().map_or(true, |b| cut.weight < b.weight) {
                best = Some(cut);
            }
            if done {
                break;
            }
        }

        let best = best.ok_or_else(|| {
            PlannerError::InvalidPlan("optimizer finished without a cut".to_string())
        })?;

        let plan = OffloadPlan::assemble(
            graph,
            model.name(),
            best.local_nodes,
            start_nodes,
            original_cost,
            best.weight,
            phases,
        );
        plan.validate(graph)?;

        tracing::info!("{}", plan.summary());
        Ok(plan)
    }
}

/// Runs [`MinCutOffloader`] on `graph` under `model`.
pub fn optimize<M>(graph: &TaskGraph, model: &mut M) -> Result<OffloadPlan, PlannerError>
where
    M: CostModel + ?Sized,
{
    MinCutOffloader::new().optimize(graph, model)
}
