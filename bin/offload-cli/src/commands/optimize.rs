// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `offload optimize` command: partition a graph and print the plan.

use offload_planner::{MinCutOffloader, OffloadPlan};
use task_graph::TaskGraph;

use crate::config::OffloadConfig;

/// Plan with node handles resolved to names, for JSON output.
#[derive(Debug, serde::Serialize)]
pub struct PlanReport<'g> {
    pub graph: &'g str,
    pub cost_model: &'g str,
    pub local: Vec<&'g str>,
    pub remote: Vec<&'g str>,
    pub original_cost: f64,
    pub cost: f64,
    pub savings: f64,
    pub phases: usize,
}

impl<'g> PlanReport<'g> {
    pub fn new(graph: &'g TaskGraph, plan: &'g OffloadPlan) -> Self {
        let (local, remote) = plan.names(graph);
        Self {
            graph: &graph.name,
            cost_model: &plan.cost_model,
            local,
            remote,
            original_cost: plan.original_cost,
            cost: plan.cost,
            savings: plan.savings,
            phases: plan.phases,
        }
    }
}

pub async fn execute(config: OffloadConfig, json: bool) -> anyhow::Result<()> {
    let path = config.require_graph_path()?;
    let graph = super::load_graph(path)?;
    let mut model = config.create_cost_model()?;

    let plan = MinCutOffloader::new().optimize(&graph, &mut model)?;
    let report = PlanReport::new(&graph, &plan);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             offload · Min-Cut Optimizer             ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();
    println!("  Graph:      {}", graph.summary());
    println!("  Cost model: {}", config.cost_model_kind(&config.cost_model)?);
    println!();
    println!("  Local  ({:>3}): {}", report.local.len(), report.local.join(", "));
    println!("  Remote ({:>3}): {}", report.remote.len(), report.remote.join(", "));
    println!();
    println!("  All-local cost: {:>10.4}", plan.original_cost);
    println!("  Plan cost:      {:>10.4}", plan.cost);
    println!("  Cost ratio:     {:>10.4}", plan.cost_ratio());
    println!("  Savings:        {:>9.2}%", plan.savings * 100.0);
    println!("  Phases:         {:>10}", plan.phases);
    println!();

    Ok(())
}
