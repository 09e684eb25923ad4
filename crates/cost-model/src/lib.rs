// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # cost-model
//!
//! Cost models translate the raw costs declared on a task graph into the
//! metric the offload planner minimises.
//!
//! | Model | Local | Remote | Transmission | Needs `prepare` |
//! |---|---|---|---|---|
//! | [`ResponseTime`] | `x` | `x` | `x` | no |
//! | [`EnergyConsumption`] | `x·computing` | `x·idling` | `x·transmitting` | no |
//! | [`WeightedTimeEnergy`] | blend | blend | blend | yes (sum of local costs) |
//!
//! # Trait-Based Extensibility
//!
//! All models implement [`CostModel`], so callers can plug in their own:
//!
//! ```
//! use cost_model::CostModel;
//!
//! struct Doubled;
//! impl CostModel for Doubled {
//!     fn name(&self) -> &str { "doubled" }
//!     fn local_cost(&self, raw: f64) -> f64 { raw * 2.0 }
//!     fn remote_cost(&self, raw: f64) -> f64 { raw * 2.0 }
//!     fn transmission_cost(&self, raw: f64) -> f64 { raw * 2.0 }
//! }
//! assert_eq!(Doubled.local_cost(1.5), 3.0);
//! ```
//!
//! # NaN Handling
//!
//! A model never hands NaN to the planner. A NaN result means "infinitely
//! expensive" and is replaced with `f64::MAX` (see [`finite_or_max`]).

mod energy;
mod error;
mod kind;
mod response_time;
mod weighted;

pub use energy::EnergyConsumption;
pub use error::CostModelError;
pub use kind::{Coefficients, CostModelKind};
pub use response_time::ResponseTime;
pub use weighted::WeightedTimeEnergy;

use task_graph::TaskGraph;

/// Transforms raw task graph costs into the optimisation metric.
///
/// `prepare` is called once per optimisation, before any of the transform
/// methods, with the full graph. Models that need a whole-graph summary
/// compute it there; the others keep the default no-op.
pub trait CostModel: Send + Sync {
    /// Human-readable name of this model.
    fn name(&self) -> &str;

    /// Computes graph-wide aggregates.
    fn prepare(&mut self, _graph: &TaskGraph) {}

    /// Transforms a raw local execution cost.
    fn local_cost(&self, raw: f64) -> f64;

    /// Transforms a raw remote execution cost.
    fn remote_cost(&self, raw: f64) -> f64;

    /// Transforms a raw transmission cost.
    fn transmission_cost(&self, raw: f64) -> f64;
}

impl<M: CostModel + ?Sized> CostModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn prepare(&mut self, graph: &TaskGraph) {
        (**self).prepare(graph)
    }

    fn local_cost(&self, raw: f64) -> f64 {
        (**self).local_cost(raw)
    }

    fn remote_cost(&self, raw: f64) -> f64 {
        (**self).remote_cost(raw)
    }

    fn transmission_cost(&self, raw: f64) -> f64 {
        (**self).transmission_cost(raw)
    }
}

/// Replaces NaN with `f64::MAX`; every other value passes through.
#[inline]
pub fn finite_or_max(value: f64) -> f64 {
    if value.is_nan() {
        f64::MAX
    } else {
        value
    }
}
