// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for cost model selection.

/// Errors that can occur when building a cost model from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CostModelError {
    /// The requested model name is not one of the built-ins.
    #[error("unknown cost model '{0}'; expected 'response-time', 'energy', or 'weighted'")]
    UnknownModel(String),

    /// A coefficient is NaN or infinite.
    #[error("invalid coefficient {name} = {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },
}
