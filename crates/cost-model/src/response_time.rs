// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Response-time cost model: costs are already expressed in time.

use crate::{finite_or_max, CostModel};

/// Identity transform on every cost category.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseTime;

impl ResponseTime {
    pub fn new() -> Self {
        Self
    }
}

impl CostModel for ResponseTime {
    fn name(&self) -> &str {
        "response-time"
    }

    fn local_cost(&self, raw: f64) -> f64 {
        finite_or_max(raw)
    }

    fn remote_cost(&self, raw: f64) -> f64 {
        finite_or_max(raw)
    }

    fn transmission_cost(&self, raw: f64) -> f64 {
        finite_or_max(raw)
    }
}
