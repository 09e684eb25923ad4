// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # offload
//!
//! Command-line interface for the work-offload partitioner.
//!
//! ## Usage
//! ```bash
//! # Partition a task graph under the response-time model
//! offload optimize --graph ./graphs/paper.json
//!
//! # Same graph, energy model, machine-readable output
//! offload optimize --graph ./graphs/paper.json --cost-model energy --computing 0.9 --json
//!
//! # Render the partition for Graphviz
//! offload export --graph ./graphs/paper.json --partition -o paper.dot
//!
//! # Time repeated optimisations on the synthetic 150-task graph
//! offload benchmark --rounds 50
//! ```

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "offload",
    about = "Min-cut local/remote partitioning of task graphs",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (explicit flags take precedence).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Cost model selection shared by every command that optimises.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// Cost model: response-time, energy, weighted.
    #[arg(short = 'm', long)]
    pub cost_model: Option<String>,

    /// Power drawn while computing locally.
    #[arg(long)]
    pub computing: Option<f64>,

    /// Power drawn while idling during remote execution.
    #[arg(long)]
    pub idling: Option<f64>,

    /// Power drawn while transmitting.
    #[arg(long)]
    pub transmitting: Option<f64>,

    /// Time/energy balance for the weighted model, in [0, 1].
    #[arg(long)]
    pub omega: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the cheapest local/remote partition of a task graph.
    Optimize {
        /// Path to the graph manifest (JSON).
        #[arg(short, long)]
        graph: Option<PathBuf>,

        #[command(flatten)]
        model: ModelArgs,

        /// Print the plan as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Inspect a task graph: print nodes, edges and a plan per cost model.
    Inspect {
        /// Path to the graph manifest (JSON).
        #[arg(short, long)]
        graph: Option<PathBuf>,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Export a task graph (optionally partitioned) as Graphviz DOT.
    Export {
        /// Path to the graph manifest (JSON).
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Colour nodes by the optimised partition.
        #[arg(short, long)]
        partition: bool,

        #[command(flatten)]
        model: ModelArgs,

        /// Output file (defaults to stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Time repeated optimisations under several cost models.
    Benchmark {
        /// Path to the graph manifest (JSON); synthetic if omitted.
        #[arg(short, long)]
        graph: Option<PathBuf>,

        /// Optimisations per cost model.
        #[arg(short, long)]
        rounds: Option<usize>,

        /// Cost models to benchmark (comma-separated).
        #[arg(long, default_value = "response-time,energy,weighted")]
        cost_models: String,

        #[command(flatten)]
        model: ModelArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => config::OffloadConfig::from_file(path)?,
        None => config::OffloadConfig::default(),
    };

    match cli.command {
        Commands::Optimize { graph, model, json } => {
            let config = config.with_overrides(graph, &model);
            commands::optimize::execute(config, json).await
        }
        Commands::Inspect { graph, model } => {
            let config = config.with_overrides(graph, &model);
            commands::inspect::execute(config).await
        }
        Commands::Export {
            graph,
            partition,
            model,
            output,
        } => {
            let config = config.with_overrides(graph, &model);
            commands::export::execute(config, partition, output).await
        }
        Commands::Benchmark {
            graph,
            rounds,
            cost_models,
            model,
        } => {
            let mut config = config.with_overrides(graph, &model);
            if let Some(rounds) = rounds {
                config.rounds = rounds;
            }
            commands::benchmark::execute(config, cost_models).await
        }
    }
}
