// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Energy cost model.
//!
//! The device burns `computing` power while it runs a task itself, `idling`
//! power while it waits for the remote peer, and `transmitting` power while
//! it ships data. Raw costs are durations, so each is scaled by the power
//! drawn during that activity.

use crate::{finite_or_max, CostModel};

/// Scales each cost category by the device's power draw for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyConsumption {
    computing: f64,
    idling: f64,
    transmitting: f64,
}

impl EnergyConsumption {
    /// Creates an energy model from the three power coefficients.
    pub fn new(computing: f64, idling: f64, transmitting: f64) -> Self {
        Self {
            computing,
            idling,
            transmitting,
        }
    }
}

impl CostModel for EnergyConsumption {
    fn name(&self) -> &str {
        "energy"
    }

    fn local_cost(&self, raw: f64) -> f64 {
        finite_or_max(raw * self.computing)
    }

    fn remote_cost(&self, raw: f64) -> f64 {
        finite_or_max(raw * self.idling)
    }

    fn transmission_cost(&self, raw: f64) -> f64 {
        finite_or_max(raw * self.transmitting)
    }
}
