// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `offload export` command: render a task graph as Graphviz DOT.
//!
//! Node labels are `local/remote` costs with two decimals. With
//! `--partition`, remote tasks are filled `#FF3300` and local tasks
//! `#66CCFF`.

use std::fmt::{self, Write as _};
use std::path::PathBuf;

use offload_planner::{MinCutOffloader, OffloadPlan};
use task_graph::TaskGraph;

use crate::config::OffloadConfig;

const REMOTE_FILL: &str = "#FF3300";
const LOCAL_FILL: &str = "#66CCFF";

pub async fn execute(
    config: OffloadConfig,
    partition: bool,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let path = config.require_graph_path()?;
    let graph = super::load_graph(path)?;

    let plan = if partition {
        let mut model = config.create_cost_model()?;
        Some(MinCutOffloader::new().optimize(&graph, &mut model)?)
    } else {
        None
    };

    let dot = render_dot(&graph, plan.as_ref())?;

    match output {
        Some(out) => {
            std::fs::write(&out, &dot).map_err(|e| {
                anyhow::anyhow!("failed to write '{}': {e}", out.display())
            })?;
            tracing::info!("wrote {} bytes of DOT to {}", dot.len(), out.display());
        }
        None => println!("{dot}"),
    }
    Ok(())
}

/// Renders `graph` as an undirected DOT graph, coloured by `plan` if given.
pub fn render_dot(graph: &TaskGraph, plan: Option<&OffloadPlan>) -> Result<String, fmt::Error> {
    let mut dot = String::from("graph workoffload {\n");

    for (id, node) in graph.iter_nodes() {
        let label = format!("{:.2}/{:.2}", node.local_cost, node.remote_cost);
        match plan {
            Some(plan) => {
                let fill = if plan.is_remote(id) {
                    REMOTE_FILL
                } else {
                    LOCAL_FILL
                };
                writeln!(
                    dot,
                    "{} [label=\"{label}\" fillcolor=\"{fill}\" style=filled];",
                    quote(&node.name),
                )?;
            }
            None => writeln!(dot, "{} [label=\"{label}\"];", quote(&node.name))?,
        }
    }

    for (_, node) in graph.iter_nodes() {
        for edge in node.edges() {
            if let Some(target) = graph.node(edge.target) {
                writeln!(dot, "{} -- {};", quote(&node.name), quote(&target.name))?;
            }
        }
    }

    dot.push('}');
    Ok(dot)
}

fn quote(name: &str) -> String {
    format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
}
