// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! One cut-phase of the min-cut search.
//!
//! Starting from the anchor, the phase repeatedly admits the remaining
//! vertex with the highest gain
//!
//! ```text
//! gain(v) = w(anchor, v) − (local(v) − remote(v))
//! ```
//!
//! and immediately folds it into the anchor. Because everything admitted so
//! far lives in the anchor slot, `w(anchor, v)` is already the summed
//! connectivity between `v` and the whole growing set. Ties go to the lowest
//! index.
//!
//! The last two admitted vertices are `s` and `t`. The phase's candidate
//! partition keeps everything but `t` local:
//!
//! ```text
//! weight = local(anchor after all folds) − (local(t) − remote(t))
//!        + Σ w(t, i) over t's live edges in the phase's input graph
//! ```
//!
//! All folding happens on a private clone of the working graph. The
//! caller's graph is only read.

use crate::working::WorkingGraph;
use task_graph::NodeId;

/// The candidate partition produced by one cut-phase.
#[derive(Debug, Clone)]
pub struct Cut {
    /// Vertices kept local by this cut, in admission order (anchor first, `t` excluded).
    pub anchor_set: Vec<usize>,
    /// Second-to-last vertex admitted.
    pub s: usize,
    /// Last vertex admitted; the one this cut sends remote.
    pub t: usize,
    /// Estimated total cost of this partition.
    pub weight: f64,
    /// Original tasks behind `anchor_set`.
    pub local_nodes: Vec<NodeId>,
}

impl Cut {
    /// Number of working vertices on the local side.
    pub fn len(&self) -> usize {
        self.anchor_set.len()
    }

    /// Returns `true` if no vertex is on the local side.
    pub fn is_empty(&self) -> bool {
        self.anchor_set.is_empty()
    }
}

/// Runs one cut-phase on `graph`, growing from `anchor`.
///
/// `graph` must have at least two active vertices.
pub fn cut_phase(graph: &WorkingGraph, anchor: usize) -> Cut {
    debug_assert!(graph.is_active(anchor));
    debug_assert!(graph.active_count() >= 2);

    let mut scratch = graph.clone();
    let mut anchor_set = vec![anchor];
    let (mut s, mut t) = (anchor, anchor);

    while scratch.active_count() > 1 {
        let Some(next) = most_tightly_connected(&scratch, anchor) else {
            break;
        };
        s = t;
        t = next;
        anchor_set.push(next);
        scratch.merge(anchor, next);
    }

    if t != anchor {
        anchor_set.pop();
    }

    let weight = scratch.node(anchor).local_cost - scratch.node(t).offload_gain()
        + graph.matrix().edge_sum(t);

    let local_nodes = anchor_set
        .iter()
        .flat_map(|&i| graph.node(i).members.iter().copied())
        .collect();

    tracing::trace!("cut-phase: s={s} t={t} |A|={} weight={weight}", anchor_set.len());

    Cut {
        anchor_set,
        s,
        t,
        weight,
        local_nodes,
    }
}

/// Picks the next vertex to admit.
///
/// Only vertices with a live edge to the anchor are considered. When none
/// is left (the graph is disconnected) the remaining active vertices are
/// ranked as if their edge weight were zero.
fn most_tightly_connected(scratch: &WorkingGraph, anchor: usize) -> Option<usize> {
    let connected = best_by_gain(scratch, anchor, |v| scratch.matrix().get(anchor, v));
    connected.or_else(|| {
        tracing::debug!("anchor has no live edges left; admitting a disconnected vertex");
        best_by_gain(scratch, anchor, |_| Some(0.0))
    })
}

fn best_by_gain(
    scratch: &WorkingGraph,
    anchor: usize,
    weight: impl Fn(usize) -> Option<f64>,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for v in scratch.active_ids().filter(|&v| v != anchor) {
        let Some(w) = weight(v) else {
            continue;
        };
        let gain = w - scratch.node(v).offload_gain();
        if best.map_or(true, |(_, g)| gain > g) {
            best = Some((v, gain));
        }
    }
    best.map(|(v, _)| v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cost_model::ResponseTime;
    use task_graph::TaskGraph;

    /// The six-node example graph; `a` is pinned.
    fn paper_graph() -> TaskGraph {
        let mut g = TaskGraph::new("paper");
        let a = g.add_node_with("a", 0.0, 0.0, false);
        let b = g.add_node("b", 3.0, 1.0);
        let c = g.add_node("c", 3.0, 1.0);
        let d = g.add_node("d", 6.0, 2.0);
        let e = g.add_node("e", 6.0, 2.0);
        let f = g.add_node("f", 9.0, 3.0);
        for (x, y, w) in [
            (a, b, 10.0),
            (b, c, 1.0),
            (b, d, 2.0),
            (c, d, 1.0),
            (c, e, 1.0),
            (d, e, 2.0),
            (d, f, 1.0),
            (e, f, 1.0),
        ] {
            g.set_edge(x, y, w).unwrap();
        }
        g
    }

    #[test]
    fn test_first_phase_of_paper_graph() {
        let w = WorkingGraph::internalize(&paper_graph(), &mut ResponseTime);
        let cut = cut_phase(&w, 0);

        // Admission order: a, b, c, d, e, f.
        assert_eq!(cut.anchor_set, vec![0, 1, 2, 3, 4]);
        assert_eq!((cut.s, cut.t), (4, 5));
        // 27 - (9 - 3) + (1 + 1)
        assert!((cut.weight - 23.0).abs() < 1e-9);
        assert_eq!(cut.len(), 5);
    }

    #[test]
    fn test_phase_does_not_touch_input() {
        let w = WorkingGraph::internalize(&paper_graph(), &mut ResponseTime);
        let matrix_before = w.matrix().clone();
        let nodes_before = w.nodes().to_vec();

        let _ = cut_phase(&w, 0);

        assert_eq!(w.matrix(), &matrix_before);
        assert_eq!(w.nodes(), nodes_before.as_slice());
        assert_eq!(w.active_count(), 6);
    }

    #[test]
    fn test_two_vertices() {
        let mut g = TaskGraph::new("pair");
        let a = g.add_node_with("a", 0.0, 0.0, false);
        let b = g.add_node("b", 5.0, 1.0);
        g.set_edge(a, b, 2.0).unwrap();

        let w = WorkingGraph::internalize(&g, &mut ResponseTime);
        let cut = cut_phase(&w, 0);
        assert_eq!(cut.anchor_set, vec![0]);
        assert_eq!((cut.s, cut.t), (0, 1));
        // 5 - 4 + 2
        assert!((cut.weight - 3.0).abs() < 1e-9);
        assert_eq!(cut.local_nodes, vec![a]);
    }

    #[test]
    fn test_ties_go_to_lowest_index() {
        let mut g = TaskGraph::new("tie");
        let a = g.add_node_with("a", 0.0, 0.0, false);
        let b = g.add_node("b", 2.0, 1.0);
        let c = g.add_node("c", 2.0, 1.0);
        g.set_edge(a, b, 1.0).unwrap();
        g.set_edge(a, c, 1.0).unwrap();

        let w = WorkingGraph::internalize(&g, &mut ResponseTime);
        let cut = cut_phase(&w, 0);
        assert_eq!(cut.anchor_set, vec![0, 1]);
        assert_eq!(cut.t, 2);
    }

    #[test]
    fn test_disconnected_vertex_is_still_admitted() {
        let mut g = TaskGraph::new("island");
        let a = g.add_node_with("a", 0.0, 0.0, false);
        let b = g.add_node("b", 2.0, 1.0);
        g.add_node("island", 8.0, 1.0);
        g.set_edge(a, b, 1.0).unwrap();

        let w = WorkingGraph::internalize(&g, &mut ResponseTime);
        let cut = cut_phase(&w, 0);
        assert_eq!(cut.anchor_set, vec![0, 1]);
        assert_eq!(cut.t, 2);
        // 10 - 7 + 0
        assert!((cut.weight - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_local_nodes_follow_members() {
        let mut w = WorkingGraph::internalize(&paper_graph(), &mut ResponseTime);
        // Fold f into e, as the optimizer would after the first phase.
        w.merge(4, 5);
        let cut = cut_phase(&w, 0);

        assert_eq!(cut.t, 4);
        assert_eq!(cut.anchor_set, vec![0, 1, 2, 3]);
        assert_eq!(cut.local_nodes.len(), 4);
        // 27 - (15 - 5) + (c--e 1 + d--e 3)
        assert!((cut.weight - 21.0).abs() < 1e-9);
    }
}
