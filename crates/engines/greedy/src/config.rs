//! Engine configuration loaded from TOML.
//!
//! Every field is optional:
//!
//! ```toml
//! weights = [-1.0, 1.0, 0.5, -0.5, 0.5]
//! mate_scoring = "uniform"   # or "perspective"
//! parallel = false
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::eval::{MateScoring, ScoreWeights};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub weights: ScoreWeights,
    /// Used when reporting evaluations; selection is unaffected.
    pub mate_scoring: MateScoring,
    /// Score candidates on the rayon pool.
    pub parallel: bool,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> EngineResult<Self> {
        toml::from_str(text).map_err(|e| EngineError::Configuration(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            EngineError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
