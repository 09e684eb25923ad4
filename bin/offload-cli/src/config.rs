// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI configuration loaded from TOML files or assembled from flags.
//!
//! # TOML Format
//! ```toml
//! graph_path = "./graphs/paper.json"
//! cost_model = "weighted"
//! computing = 0.9
//! idling = 0.3
//! transmitting = 1.3
//! omega = 0.5
//! rounds = 20
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cost_model::{Coefficients, CostModel, CostModelKind};

use crate::ModelArgs;

/// Configuration for the `offload` binary.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OffloadConfig {
    /// Path to the graph manifest (JSON).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_path: Option<PathBuf>,
    /// Cost model name: `"response-time"`, `"energy"`, `"weighted"`.
    #[serde(default = "default_cost_model")]
    pub cost_model: String,
    #[serde(default = "default_power")]
    pub computing: f64,
    #[serde(default = "default_power")]
    pub idling: f64,
    #[serde(default = "default_power")]
    pub transmitting: f64,
    /// Time/energy balance for the weighted model.
    #[serde(default = "default_omega")]
    pub omega: f64,
    /// Optimisations per cost model in `offload benchmark`.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
}

fn default_cost_model() -> String {
    "response-time".to_string()
}

fn default_power() -> f64 {
    1.0
}

fn default_omega() -> f64 {
    0.5
}

fn default_rounds() -> usize {
    10
}

impl OffloadConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("TOML parse error")
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("TOML serialise error")
    }

    /// Applies the flags given on the command line.
    pub fn with_overrides(mut self, graph: Option<PathBuf>, model: &ModelArgs) -> Self {
        if graph.is_some() {
            self.graph_path = graph;
        }
        if let Some(name) = &model.cost_model {
            self.cost_model = name.clone();
        }
        if let Some(v) = model.computing {
            self.computing = v;
        }
        if let Some(v) = model.idling {
            self.idling = v;
        }
        if let Some(v) = model.transmitting {
            self.transmitting = v;
        }
        if let Some(v) = model.omega {
            self.omega = v;
        }
        self
    }

    /// Returns the configured power coefficients.
    pub fn coefficients(&self) -> Coefficients {
        Coefficients {
            computing: self.computing,
            idling: self.idling,
            transmitting: self.transmitting,
            omega: self.omega,
        }
    }

    /// Resolves a cost model name against the configured coefficients.
    pub fn cost_model_kind(&self, name: &str) -> anyhow::Result<CostModelKind> {
        CostModelKind::from_name(name, self.coefficients()).map_err(|e| {
            anyhow::anyhow!(
                "{e}; expected 'response-time', 'energy', or 'weighted'"
            )
        })
    }

    /// Creates the cost model specified by this config.
    pub fn create_cost_model(&self) -> anyhow::Result<Box<dyn CostModel>> {
        let kind = self.cost_model_kind(&self.cost_model)?;
        Ok(kind.build()?)
    }

    /// Returns the graph path or an error naming both ways to set it.
    pub fn require_graph_path(&self) -> anyhow::Result<&Path> {
        self.graph_path
            .as_deref()
            .context("no task graph given; pass --graph or set graph_path in the config file")
    }
}

impl Default for OffloadConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            cost_model: default_cost_model(),
            computing: default_power(),
            idling: default_power(),
            transmitting: default_power(),
            omega: default_omega(),
            rounds: default_rounds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = OffloadConfig::default();
        assert_eq!(c.cost_model, "response-time");
        assert_eq!(c.omega, 0.5);
        assert_eq!(c.rounds, 10);
        assert!(c.graph_path.is_none());
    }

    #[test]
    fn test_from_toml() {
        let toml = r#"
graph_path = "/tmp/graph.json"
cost_model = "energy"
computing = 0.9
idling = 0.3
transmitting = 1.3
rounds = 3
"#;
        let c = OffloadConfig::from_toml(toml).unwrap();
        assert_eq!(c.graph_path, Some(PathBuf::from("/tmp/graph.json")));
        assert_eq!(c.cost_model, "energy");
        assert_eq!(c.computing, 0.9);
        assert_eq!(c.omega, 0.5);
        assert_eq!(c.rounds, 3);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let c = OffloadConfig::from_toml("").unwrap();
        assert_eq!(c.cost_model, "response-time");
        assert_eq!(c.transmitting, 1.0);
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = OffloadConfig {
            cost_model: "weighted".into(),
            omega: 0.25,
            ..Default::default()
        };
        let toml = c.to_toml().unwrap();
        let back = OffloadConfig::from_toml(&toml).unwrap();
        assert_eq!(back.cost_model, c.cost_model);
        assert_eq!(back.omega, c.omega);
        assert!(back.graph_path.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let c = OffloadConfig {
            cost_model: "energy".into(),
            computing: 3.0,
            ..Default::default()
        };
        let args = ModelArgs {
            cost_model: Some("weighted".into()),
            omega: Some(0.8),
            ..Default::default()
        };
        let c = c.with_overrides(Some(PathBuf::from("g.json")), &args);
        assert_eq!(c.cost_model, "weighted");
        assert_eq!(c.computing, 3.0);
        assert_eq!(c.omega, 0.8);
        assert_eq!(c.require_graph_path().unwrap(), Path::new("g.json"));
    }

    #[test]
    fn test_create_cost_model() {
        for (name, expected) in [
            ("response-time", "response-time"),
            ("energy", "energy"),
            ("weighted", "weighted"),
        ] {
            let c = OffloadConfig {
                cost_model: name.into(),
                ..Default::default()
            };
            assert_eq!(c.create_cost_model().unwrap().name(), expected);
        }
    }

    #[test]
    fn test_create_cost_model_unknown() {
        let c = OffloadConfig {
            cost_model: "bogus".into(),
            ..Default::default()
        };
        assert!(c.create_cost_model().is_err());
    }

    #[test]
    fn test_non_finite_coefficient_rejected() {
        let c = OffloadConfig {
            cost_model: "energy".into(),
            computing: f64::NAN,
            ..Default::default()
        };
        assert!(c.create_cost_model().is_err());
    }

    #[test]
    fn test_missing_graph_path() {
        let c = OffloadConfig::default();
        assert!(c.require_graph_path().is_err());
    }
}
