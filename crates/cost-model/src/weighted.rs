// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Weighted time/energy cost model.
//!
//! Blends a normalised time term with a normalised energy term:
//!
//! ```text
//! cost(x) = ω · x / L  +  (1 − ω) · x · k / (L · computing)
//! ```
//!
//! where `L` is the sum of all raw local costs in the graph and `k` is the
//! power coefficient of the cost category (`computing` for local,
//! `idling` for remote, `transmitting` for transmission). Both terms are
//! therefore relative to "run everything locally".
//!
//! `L` is only known once the graph is seen, so [`CostModel::prepare`] must
//! run first. A graph whose local costs sum to zero produces NaN for zero
//! inputs; those are reported as `f64::MAX`.

use crate::{finite_or_max, CostModel};
use task_graph::TaskGraph;

/// Weighted blend of response time and energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTimeEnergy {
    computing: f64,
    idling: f64,
    transmitting: f64,
    /// Weight of the time term in `[0, 1]`.
    omega: f64,
    /// Sum of raw local costs, set by `prepare`.
    local_sum: f64,
}

impl WeightedTimeEnergy {
    /// Creates a weighted model.
    ///
    /// # Arguments
    /// * `omega`: weight of the time term. Clamped to `[0.0, 1.0]`;
    ///   `1.0` is pure response time, `0.0` is pure energy.
    pub fn new(computing: f64, idling: f64, transmitting: f64, omega: f64) -> Self {
        Self {
            computing,
            idling,
            transmitting,
            omega: omega.clamp(0.0, 1.0),
            local_sum: 0.0,
        }
    }

    /// Returns the time weight.
    pub fn omega(&self) -> f64 {
        self.omega
    }

    /// Returns the local cost sum computed by the last `prepare`.
    pub fn local_sum(&self) -> f64 {
        self.local_sum
    }

    fn blend(&self, raw: f64, coefficient: f64) -> f64 {
        let time = self.omega * raw / self.local_sum;
        let energy =
            (1.0 - self.omega) * raw * coefficient / (self.local_sum * self.computing);
        finite_or_max(time + energy)
    }
}

impl CostModel for WeightedTimeEnergy {
    fn name(&self) -> &str {
        "weighted"
    }

    fn prepare(&mut self, graph: &TaskGraph) {
        self.local_sum = graph.total_local_cost();
        tracing::debug!("weighted model: local cost sum = {}", self.local_sum);
    }

    fn local_cost(&self, raw: f64) -> f64 {
        self.blend(raw, self.computing)
    }

    fn remote_cost(&self, raw: f64) -> f64 {
        self.blend(raw, self.idling)
    }

    fn transmission_cost(&self, raw: f64) -> f64 {
        self.blend(raw, self.transmitting)
    }
}
