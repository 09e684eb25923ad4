// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: task graph → cost model → min-cut plan.
//!
//! Covers the reference graphs with known partitions and the properties
//! every plan must satisfy, under all three built-in cost models.

use std::collections::BTreeSet;

use cost_model::{
    Coefficients, CostModel, CostModelKind, EnergyConsumption, ResponseTime, WeightedTimeEnergy,
};
use offload_planner::{optimize, MinCutOffloader, OffloadPlan, PlannerError};
use task_graph::{GraphManifest, NodeId, TaskGraph};

// ── Helpers ────────────────────────────────────────────────────

fn build(name: &str, nodes: &[(&str, f64, f64, bool)], edges: &[(&str, &str, f64)]) -> TaskGraph {
    let mut g = TaskGraph::new(name);
    for &(n, local, remote, offloadable) in nodes {
        g.add_node_with(n, local, remote, offloadable);
    }
    for &(from, to, cost) in edges {
        let from = g.find(from).unwrap();
        let to = g.find(to).unwrap();
        g.set_edge(from, to, cost).unwrap();
    }
    g
}

/// Six-task example graph with a single pinned entry task.
fn paper_graph() -> TaskGraph {
    build(
        "paper",
        &[
            ("a", 0.0, 0.0, false),
            ("b", 3.0, 1.0, true),
            ("c", 3.0, 1.0, true),
            ("d", 6.0, 2.0, true),
            ("e", 6.0, 2.0, true),
            ("f", 9.0, 3.0, true),
        ],
        &[
            ("a", "b", 10.0),
            ("b", "c", 1.0),
            ("b", "d", 2.0),
            ("c", "d", 1.0),
            ("c", "e", 1.0),
            ("d", "e", 2.0),
            ("d", "f", 1.0),
            ("e", "f", 1.0),
        ],
    )
}

/// Linear chain with two pinned tasks.
fn chain_graph() -> TaskGraph {
    build(
        "chain",
        &[
            ("a", 0.0, 0.0, false),
            ("b", 4.0, 1.0, true),
            ("c", 8.0, 2.0, true),
            ("d", 8.0, 2.0, false),
            ("e", 4.0, 1.0, true),
            ("f", 8.0, 2.0, true),
        ],
        &[
            ("a", "b", 10.0),
            ("b", "c", 6.0),
            ("c", "d", 5.0),
            ("d", "e", 5.0),
            ("e", "f", 4.0),
        ],
    )
}

/// Fifteen uniform tasks, three of them pinned.
fn largish_graph() -> TaskGraph {
    let names = "abcdefghijklmno";
    let nodes: Vec<(String, bool)> = names
        .chars()
        .map(|c| (c.to_string(), !"abf".contains(c)))
        .collect();
    let mut g = TaskGraph::new("largish");
    for (n, offloadable) in &nodes {
        g.add_node_with(n.as_str(), 5.0, 5.0, *offloadable);
    }
    for pair in [
        "ab", "ae", "af", "bc", "cd", "dj", "eg", "fg", "fh", "gi", "hi", "hj", "il", "jk", "km",
        "kn", "lm", "mo", "no",
    ] {
        let (x, y) = pair.split_at(1);
        let (x, y) = (g.find(x).unwrap(), g.find(y).unwrap());
        g.set_edge(x, y, 2.0).unwrap();
    }
    g
}

fn pattern_chain(count: usize) -> TaskGraph {
    TaskGraph::pattern_chain(count).unwrap()
}

fn ids(g: &TaskGraph, names: &[&str]) -> BTreeSet<NodeId> {
    names.iter().map(|n| g.find(n).unwrap()).collect()
}

fn assert_partition(plan: &OffloadPlan, g: &TaskGraph) {
    plan.validate(g).unwrap();
    let all: BTreeSet<NodeId> = g.ids().collect();
    let union: BTreeSet<NodeId> = plan.local.union(&plan.remote).copied().collect();
    assert_eq!(union, all);
    assert!(plan.local.is_disjoint(&plan.remote));
    for id in g.forced_local() {
        assert!(plan.is_local(id), "pinned node {id} must stay local");
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// ── Reference graphs ──────────────────────────────────────────

#[test]
fn test_paper_graph() {
    let g = paper_graph();
    let plan = optimize(&g, &mut ResponseTime).unwrap();

    assert_partition(&plan, &g);
    assert_eq!(plan.local, ids(&g, &["a", "b"]));
    assert_eq!(plan.remote, ids(&g, &["c", "d", "e", "f"]));
    assert!(approx(plan.original_cost, 27.0));
    assert!(approx(plan.cost, 14.0));
    assert!(approx(plan.cost_ratio(), 14.0 / 27.0));
    assert!(approx(plan.savings, 1.0 - 14.0 / 27.0));
    assert_eq!(plan.phases, 5);
    assert_eq!(plan.cost_model, "response-time");
}

#[test]
fn test_chain_graph() {
    let g = chain_graph();
    let plan = optimize(&g, &mut ResponseTime).unwrap();

    assert_partition(&plan, &g);
    assert_eq!(plan.local, ids(&g, &["a", "b", "c", "d"]));
    assert_eq!(plan.remote, ids(&g, &["e", "f"]));
    assert_eq!(plan.start_nodes, vec![g.find("a").unwrap(), g.find("d").unwrap()]);
    assert!(approx(plan.original_cost, 32.0));
    assert!(approx(plan.cost, 28.0));
}

#[test]
fn test_cheaper_link_offloads_everything() {
    let mut g = paper_graph();
    let (a, b) = (g.find("a").unwrap(), g.find("b").unwrap());
    g.set_edge(a, b, 1.0).unwrap();

    let plan = optimize(&g, &mut ResponseTime).unwrap();
    assert_partition(&plan, &g);
    assert_eq!(plan.local, ids(&g, &["a"]));
    assert_eq!(plan.remote, ids(&g, &["b", "c", "d", "e", "f"]));
    assert!(approx(plan.cost, 10.0));
    assert!(approx(plan.savings, 1.0 - 10.0 / 27.0));
}

#[test]
fn test_largish_graph() {
    let g = largish_graph();
    let plan = optimize(&g, &mut ResponseTime).unwrap();

    assert_partition(&plan, &g);
    assert_eq!(plan.remote, ids(&g, &["o"]));
    assert!(approx(plan.original_cost, 75.0));
    assert!(approx(plan.cost, 79.0));
}

#[test]
fn test_pattern_chain() {
    let g = pattern_chain(30);
    assert_eq!(g.len(), 150);

    let plan = optimize(&g, &mut ResponseTime).unwrap();
    assert_partition(&plan, &g);
    assert_eq!(plan.local.len(), 142);
    assert!(approx(plan.original_cost, 840.0));
    assert!(approx(plan.cost, 834.0));
}

#[test]
fn test_anchor_is_first_pinned_task() {
    // The pinned task is last in input order.
    let g = build(
        "late-pin",
        &[
            ("f", 9.0, 3.0, true),
            ("b", 3.0, 1.0, true),
            ("a", 0.0, 0.0, false),
        ],
        &[("a", "b", 10.0), ("b", "f", 1.0)],
    );
    let plan = optimize(&g, &mut ResponseTime).unwrap();

    assert_partition(&plan, &g);
    assert_eq!(plan.start_nodes, vec![g.find("a").unwrap()]);
    assert_eq!(plan.local, ids(&g, &["a", "b"]));
    assert_eq!(plan.remote, ids(&g, &["f"]));
    assert!(approx(plan.cost, 7.0));
    assert!(approx(plan.original_cost, 12.0));
}

// ── Properties ────────────────────────────────────────────────

#[test]
fn test_optimize_is_idempotent() {
    let g = paper_graph();
    let offloader = MinCutOffloader::new();
    let first = offloader.optimize(&g, &mut ResponseTime).unwrap();
    let second = offloader.optimize(&g, &mut ResponseTime).unwrap();

    assert_eq!(first.local, second.local);
    assert_eq!(first.remote, second.remote);
    assert_eq!(first.cost, second.cost);
    assert_eq!(first.original_cost, second.original_cost);
    assert_eq!(first.savings, second.savings);
}

#[test]
fn test_edge_update_changes_partition() {
    let mut g = paper_graph();
    let before = optimize(&g, &mut ResponseTime).unwrap();

    let (a, b) = (g.find("a").unwrap(), g.find("b").unwrap());
    g.set_edge(a, b, 1.0).unwrap();
    let after = optimize(&g, &mut ResponseTime).unwrap();

    assert!(before.is_local(b));
    assert!(after.is_remote(b));
    assert_ne!(before.cost, after.cost);

    g.set_edge(b, a, 10.0).unwrap();
    let restored = optimize(&g, &mut ResponseTime).unwrap();
    assert_eq!(restored.local, before.local);
}

#[test]
fn test_savings_bound_for_response_time() {
    for g in [paper_graph(), chain_graph(), pattern_chain(5)] {
        let plan = optimize(&g, &mut ResponseTime).unwrap();
        assert!(plan.cost <= plan.original_cost, "{}", plan.summary());
        assert!((0.0..=1.0).contains(&plan.savings));
    }
}

#[test]
fn test_every_pin_stays_local() {
    let g = pattern_chain(8);
    let plan = optimize(&g, &mut ResponseTime).unwrap();
    let pinned: BTreeSet<NodeId> = g.forced_local().into_iter().collect();
    assert_eq!(pinned.len(), 14);
    assert!(pinned.is_subset(&plan.local));
}

#[test]
fn test_all_offloadable_is_rejected() {
    let g = build(
        "free",
        &[("a", 1.0, 1.0, true), ("b", 2.0, 1.0, true)],
        &[("a", "b", 1.0)],
    );
    assert!(matches!(
        optimize(&g, &mut ResponseTime),
        Err(PlannerError::NoForcedLocalNode)
    ));
}

#[test]
fn test_all_pinned_runs_locally() {
    let g = build(
        "pinned",
        &[("a", 2.0, 1.0, false), ("b", 3.0, 1.0, false)],
        &[("a", "b", 4.0)],
    );
    let plan = optimize(&g, &mut ResponseTime).unwrap();
    assert_partition(&plan, &g);
    assert!(plan.remote.is_empty());
    assert!(approx(plan.cost, 5.0));
    assert!(approx(plan.original_cost, 5.0));
    assert_eq!(plan.savings, 0.0);
}

#[test]
fn test_disconnected_task_is_offloaded() {
    let g = build(
        "island",
        &[
            ("a", 0.0, 0.0, false),
            ("b", 3.0, 1.0, true),
            ("island", 8.0, 1.0, true),
        ],
        &[("a", "b", 1.0)],
    );
    let plan = optimize(&g, &mut ResponseTime).unwrap();
    assert_partition(&plan, &g);
    assert_eq!(plan.local, ids(&g, &["a"]));
    assert!(approx(plan.cost, 3.0));
}

#[test]
fn test_zero_cost_graph_has_zero_savings() {
    let g = build(
        "zero",
        &[("a", 0.0, 0.0, false), ("b", 0.0, 0.0, true)],
        &[("a", "b", 0.0)],
    );
    let plan = optimize(&g, &mut ResponseTime).unwrap();
    assert_partition(&plan, &g);
    assert_eq!(plan.savings, 0.0);
}

// ── Cost models ───────────────────────────────────────────────

#[test]
fn test_every_builtin_model_yields_valid_plan() {
    let g = paper_graph();
    for kind in CostModelKind::all(Coefficients::default()) {
        let mut model = kind.build().unwrap();
        let plan = optimize(&g, &mut model).unwrap();
        assert_partition(&plan, &g);
        assert_eq!(plan.cost_model, kind.name());
        assert!(plan.cost.is_finite());
    }
}

#[test]
fn test_energy_model_scales_costs() {
    let g = paper_graph();
    let mut model = EnergyConsumption::new(2.0, 0.5, 1.0);
    let plan = optimize(&g, &mut model).unwrap();
    assert_partition(&plan, &g);
    assert!(approx(plan.original_cost, 54.0));
}

#[test]
fn test_weighted_model_normalises_original_cost() {
    let g = paper_graph();
    // With omega = 1 the weighted model is response time divided by the
    // total local cost, so running everything locally costs exactly 1.
    let mut model = WeightedTimeEnergy::new(1.0, 1.0, 1.0, 1.0);
    let plan = optimize(&g, &mut model).unwrap();
    assert_partition(&plan, &g);
    assert!(approx(plan.original_cost, 1.0));
    assert!(approx(plan.cost, 14.0 / 27.0));
    assert_eq!(plan.local, ids(&g, &["a", "b"]));
}

#[test]
fn test_nan_model_does_not_break_search() {
    struct Unstable;
    impl CostModel for Unstable {
        fn name(&self) -> &str {
            "unstable"
        }
        fn local_cost(&self, raw: f64) -> f64 {
            raw
        }
        fn remote_cost(&self, raw: f64) -> f64 {
            if raw > 2.5 {
                f64::NAN
            } else {
                raw
            }
        }
        fn transmission_cost(&self, raw: f64) -> f64 {
            raw
        }
    }

    let g = paper_graph();
    let plan = optimize(&g, &mut Unstable).unwrap();
    assert_partition(&plan, &g);
    // f's remote cost is pinned to f64::MAX, so it can never win remotely.
    assert!(plan.is_local(g.find("f").unwrap()) || plan.cost >= f64::MAX / 2.0);
}

#[test]
fn test_independent_runs_in_parallel() {
    let g = std::sync::Arc::new(pattern_chain(10));
    let handles: Vec<_> = CostModelKind::all(Coefficients::default())
        .into_iter()
        .map(|kind| {
            let g = std::sync::Arc::clone(&g);
            std::thread::spawn(move || {
                let mut model = kind.build().unwrap();
                optimize(&g, &mut model).unwrap()
            })
        })
        .collect();

    let sequential = optimize(&g, &mut ResponseTime).unwrap();
    let plans: Vec<OffloadPlan> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[0].local, sequential.local);
    for plan in &plans {
        assert_partition(plan, &g);
    }
}

// ── Manifests ─────────────────────────────────────────────────

#[test]
fn test_manifest_graph_matches_built_graph() {
    let json = r#"{
        "name": "paper",
        "nodes": [
            {"name": "a", "local_cost": 0, "remote_cost": 0, "offloadable": false},
            {"name": "b", "local_cost": 3, "remote_cost": 1},
            {"name": "c", "local_cost": 3, "remote_cost": 1},
            {"name": "d", "local_cost": 6, "remote_cost": 2},
            {"name": "e", "local_cost": 6, "remote_cost": 2},
            {"name": "f", "local_cost": 9, "remote_cost": 3}
        ],
        "edges": [
            {"from": "a", "to": "b", "cost": 10},
            {"from": "b", "to": "c", "cost": 1},
            {"from": "b", "to": "d", "cost": 2},
            {"from": "c", "to": "d", "cost": 1},
            {"from": "c", "to": "e", "cost": 1},
            {"from": "d", "to": "e", "cost": 2},
            {"from": "d", "to": "f", "cost": 1},
            {"from": "e", "to": "f", "cost": 1}
        ]
    }"#;
    let g = GraphManifest::from_json(json).unwrap().into_graph().unwrap();
    let plan = optimize(&g, &mut ResponseTime).unwrap();

    let (local, remote) = plan.names(&g);
    assert_eq!(local, vec!["a", "b"]);
    assert_eq!(remote, vec!["c", "d", "e", "f"]);
}
