// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `offload benchmark` command: time repeated optimisations per cost model.
//!
//! Each cost model runs on its own blocking task against a shared graph;
//! every optimisation builds private working state, so the runs are
//! independent. Prints a comparison table of plan shape and timings.

use std::sync::Arc;
use std::time::{Duration, Instant};

use cost_model::CostModelKind;
use offload_planner::{MinCutOffloader, OffloadPlan};
use task_graph::TaskGraph;

use crate::config::OffloadConfig;

pub async fn execute(config: OffloadConfig, cost_models: String) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             offload · Benchmark Suite               ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    let kinds: Vec<CostModelKind> = cost_models
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| config.cost_model_kind(s))
        .collect::<Result<Vec<_>, _>>()?;
    let rounds = config.rounds.max(1);

    let graph = match &config.graph_path {
        Some(path) => super::load_graph(path)?,
        None => {
            println!("  No graph given; using synthetic pattern chain (150 tasks).");
            TaskGraph::pattern_chain(30)?
        }
    };

    println!("  Graph:  {}", graph.summary());
    println!(
        "  Models: {:?}",
        kinds.iter().map(|k| k.name()).collect::<Vec<_>>(),
    );
    println!("  Rounds: {rounds}");
    println!();

    let graph = Arc::new(graph);
    let handles: Vec<_> = kinds
        .into_iter()
        .map(|kind| {
            let graph = Arc::clone(&graph);
            tokio::task::spawn_blocking(move || run_single(&graph, &kind, rounds))
        })
        .collect();

    // ── Results Table ──────────────────────────────────────────
    println!(
        "  {:<16} {:>6} {:>6} {:>12} {:>9} {:>10} {:>10} {:>10}",
        "Model", "Local", "Remote", "Cost", "Savings", "Mean", "Min", "Max",
    );
    println!("  {}", "-".repeat(86));

    let mut results: Vec<BenchResult> = Vec::new();
    for handle in handles {
        match handle.await? {
            Ok(r) => {
                println!(
                    "  {:<16} {:>6} {:>6} {:>12.4} {:>8.2}% {:>8.3}ms {:>8.3}ms {:>8.3}ms",
                    r.model,
                    r.plan.local.len(),
                    r.plan.remote.len(),
                    r.plan.cost,
                    r.plan.savings * 100.0,
                    r.mean_ms(),
                    ms(r.min),
                    ms(r.max),
                );
                results.push(r);
            }
            Err(e) => println!("  {:<16} FAILED: {e}", "-"),
        }
    }
    println!();

    // ── Summary ────────────────────────────────────────────────
    let Some(fastest) = results
        .iter()
        .min_by(|a, b| a.mean_ms().total_cmp(&b.mean_ms()))
    else {
        println!("  No successful benchmark runs.");
        return Ok(());
    };

    println!("  Summary:");
    println!(
        "   Fastest: {} ({:.3}ms mean over {} rounds)",
        fastest.model,
        fastest.mean_ms(),
        fastest.rounds,
    );
    println!();

    Ok(())
}

#[derive(Debug)]
struct BenchResult {
    model: String,
    plan: OffloadPlan,
    rounds: usize,
    total: Duration,
    min: Duration,
    max: Duration,
}

impl BenchResult {
    fn mean_ms(&self) -> f64 {
        ms(self.total) / self.rounds as f64
    }
}

fn ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Runs `rounds` optimisations of `graph` under one cost model.
fn run_single(graph: &TaskGraph, kind: &CostModelKind, rounds: usize) -> anyhow::Result<BenchResult> {
    let offloader = MinCutOffloader::new();
    let mut model = kind.build()?;

    // Warm up.
    let mut plan = offloader.optimize(graph, &mut model)?;

    let mut total = Duration::ZERO;
    let mut min = Duration::MAX;
    let mut max = Duration::ZERO;
    for _ in 0..rounds {
        let start = Instant::now();
        plan = offloader.optimize(graph, &mut model)?;
        let elapsed = start.elapsed();
        total += elapsed;
        min = min.min(elapsed);
        max = max.max(elapsed);
    }
    tracing::debug!("{}: {}", kind.name(), plan.summary());

    Ok(BenchResult {
        model: kind.name().to_string(),
        plan,
        rounds,
        total,
        min,
        max,
    })
}
