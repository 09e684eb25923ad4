// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and the helpers they share.

pub mod benchmark;
pub mod export;
pub mod inspect;
pub mod optimize;

use std::path::Path;

use task_graph::TaskGraph;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Loads and validates a graph manifest.
pub fn load_graph(path: &Path) -> anyhow::Result<TaskGraph> {
    let graph = TaskGraph::load(path).map_err(|e| {
        anyhow::anyhow!("failed to load task graph from '{}': {e}", path.display())
    })?;
    graph.validate()?;
    Ok(graph)
}

/// Truncates a string to `max_len` with ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
