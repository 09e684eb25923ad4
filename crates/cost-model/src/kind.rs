// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Configuration-facing selection of a built-in cost model.
//!
//! # TOML Format
//! ```toml
//! [cost_model]
//! kind = "weighted"
//! computing = 0.9
//! idling = 0.3
//! transmitting = 1.3
//! omega = 0.5
//! ```

use crate::{CostModel, CostModelError, EnergyConsumption, ResponseTime, WeightedTimeEnergy};
use std::fmt;

const DEFAULT_OMEGA: f64 = 0.5;

/// Power coefficients shared by the energy-aware models.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coefficients {
    /// Power drawn while computing locally.
    pub computing: f64,
    /// Power drawn while idling during remote execution.
    pub idling: f64,
    /// Power drawn while transmitting.
    pub transmitting: f64,
    /// Time weight for the weighted model.
    pub omega: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            computing: 1.0,
            idling: 1.0,
            transmitting: 1.0,
            omega: DEFAULT_OMEGA,
        }
    }
}

impl Coefficients {
    fn validate(&self) -> Result<(), CostModelError> {
        for (name, value) in [
            ("computing", self.computing),
            ("idling", self.idling),
            ("transmitting", self.transmitting),
            ("omega", self.omega),
        ] {
            if !value.is_finite() {
                return Err(CostModelError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}

/// One of the three built-in cost models, with its parameters.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CostModelKind {
    /// Minimise response time.
    #[default]
    ResponseTime,
    /// Minimise energy drawn on the device.
    Energy {
        computing: f64,
        idling: f64,
        transmitting: f64,
    },
    /// Minimise a weighted blend of time and energy.
    Weighted {
        computing: f64,
        idling: f64,
        transmitting: f64,
        #[serde(default = "default_omega")]
        omega: f64,
    },
}

fn default_omega() -> f64 {
    DEFAULT_OMEGA
}

impl CostModelKind {
    /// Resolves a model name (with common aliases) and its coefficients.
    pub fn from_name(name: &str, coefficients: Coefficients) -> Result<Self, CostModelError> {
        let Coefficients {
            computing,
            idling,
            transmitting,
            omega,
        } = coefficients;

        match name.trim().to_lowercase().as_str() {
            "response-time" | "response_time" | "time" => Ok(Self::ResponseTime),
            "energy" | "energy-consumption" => Ok(Self::Energy {
                computing,
                idling,
                transmitting,
            }),
            "weighted" | "weighted-time-energy" => Ok(Self::Weighted {
                computing,
                idling,
                transmitting,
                omega,
            }),
            other => Err(CostModelError::UnknownModel(other.to_string())),
        }
    }

    /// Returns all built-in models with the given coefficients.
    pub fn all(coefficients: Coefficients) -> Vec<Self> {
        ["response-time", "energy", "weighted"]
            .iter()
            .filter_map(|name| Self::from_name(name, coefficients).ok())
            .collect()
    }

    /// Canonical name of this model.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResponseTime => "response-time",
            Self::Energy { .. } => "energy",
            Self::Weighted { .. } => "weighted",
        }
    }

    /// Returns the coefficients carried by this variant.
    pub fn coefficients(&self) -> Coefficients {
        match *self {
            Self::ResponseTime => Coefficients::default(),
            Self::Energy {
                computing,
                idling,
                transmitting,
            } => Coefficients {
                computing,
                idling,
                transmitting,
                ..Coefficients::default()
            },
            Self::Weighted {
                computing,
                idling,
                transmitting,
                omega,
            } => Coefficients {
                computing,
                idling,
                transmitting,
                omega,
            },
        }
    }

    /// Instantiates the model.
    pub fn build(&self) -> Result<Box<dyn CostModel>, CostModelError> {
        self.coefficients().validate()?;
        let model: Box<dyn CostModel> = match *self {
            Self::ResponseTime => Box::new(ResponseTime::new()),
            Self::Energy {
                computing,
                idling,
                transmitting,
            } => Box::new(EnergyConsumption::new(computing, idling, transmitting)),
            Self::Weighted {
                computing,
                idling,
                transmitting,
                omega,
            } => Box::new(WeightedTimeEnergy::new(computing, idling, transmitting, omega)),
        };
        Ok(model)
    }
}

impl fmt::Display for CostModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResponseTime => f.write_str("response-time"),
            Self::Energy {
                computing,
                idling,
                transmitting,
            } => write!(f, "energy(c={computing}, i={idling}, t={transmitting})"),
            Self::Weighted {
                computing,
                idling,
                transmitting,
                omega,
            } => write!(
                f,
                "weighted(c={computing}, i={idling}, t={transmitting}, ω={omega})"
            ),
        }
    }
}
