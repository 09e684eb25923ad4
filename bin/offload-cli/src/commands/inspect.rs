// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `offload inspect` command: display graph structure and compare cost models.
//!
//! Prints the task table and every declared edge, then the plan each
//! built-in cost model produces with the configured coefficients.

use cost_model::CostModelKind;
use offload_planner::MinCutOffloader;

use super::truncate;
use crate::config::OffloadConfig;

pub async fn execute(config: OffloadConfig) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              offload · Graph Inspector              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let path = config.require_graph_path()?;
    let graph = super::load_graph(path)?;

    // ── Summary ────────────────────────────────────────────────
    println!("  Graph: {}", graph.name);
    println!("  Tasks: {} ({} pinned)", graph.len(), graph.forced_local().len());
    println!("  Edges: {}", graph.num_edges());
    println!("  All-local cost: {:.2}", graph.total_local_cost());
    println!();

    // ── Per-Task Detail ────────────────────────────────────────
    println!(
        "  {:<4} {:<24} {:>10} {:>10} {:>7} {:>6}",
        "Idx", "Name", "Local", "Remote", "Pinned", "Edges",
    );
    println!("  {}", "-".repeat(66));

    for (id, node) in graph.iter_nodes() {
        println!(
            "  {:<4} {:<24} {:>10.2} {:>10.2} {:>7} {:>6}",
            id.index(),
            truncate(&node.name, 24),
            node.local_cost,
            node.remote_cost,
            if node.offloadable { "" } else { "yes" },
            node.num_edges(),
        );
    }
    println!();

    // ── Edges ──────────────────────────────────────────────────
    println!("  {:<24}    {:<24} {:>10}", "From", "To", "Cost");
    println!("  {}", "-".repeat(66));
    for (_, node) in graph.iter_nodes() {
        for edge in node.edges() {
            let target = graph
                .node(edge.target)
                .map(|n| n.name.as_str())
                .unwrap_or("?");
            println!(
                "  {:<24} -- {:<24} {:>10.2}",
                truncate(&node.name, 24),
                truncate(target, 24),
                edge.cost,
            );
        }
    }
    println!();

    // ── Cost Model Comparison ──────────────────────────────────
    println!("  Cost model comparison:");
    println!(
        "  {:<16} {:>6} {:>6} {:>12} {:>12} {:>9}",
        "Model", "Local", "Remote", "Cost", "All-local", "Savings",
    );
    println!("  {}", "-".repeat(66));

    let offloader = MinCutOffloader::new();
    for kind in CostModelKind::all(config.coefficients()) {
        let result = kind
            .build()
            .map_err(anyhow::Error::from)
            .and_then(|mut model| Ok(offloader.optimize(&graph, &mut model)?));
        match result {
            Ok(plan) => println!(
                "  {:<16} {:>6} {:>6} {:>12.4} {:>12.4} {:>8.2}%",
                kind.name(),
                plan.local.len(),
                plan.remote.len(),
                plan.cost,
                plan.original_cost,
                plan.savings * 100.0,
            ),
            Err(e) => println!("  {:<16} FAILED: {e}", kind.name()),
        }
    }

    println!();
    Ok(())
}
