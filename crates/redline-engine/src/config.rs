use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for a [`DocumentDiffer`](crate::DocumentDiffer).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Align sections by path and produce per-section redlines.
    pub align_by_headings: bool,
    /// Per-side ceiling on input size in bytes. `0` disables the check.
    pub max_input_bytes: usize,
    /// Per-side ceiling on line count. Comparison time is quadratic in this
    /// number, so it is what actually bounds a comparison. `0` disables the
    /// check.
    pub max_input_lines: usize,
    /// Wall-clock limit for callers that run comparisons on a worker.
    pub timeout_secs: u64,
    /// Change summary limits.
    pub summary: SummaryConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            align_by_headings: true,
            max_input_bytes: 1024 * 1024,
            max_input_lines: 5_000,
            timeout_secs: 30,
            summary: SummaryConfig::default(),
        }
    }
}

impl EngineConfig {
    /// A configuration with every input ceiling disabled.
    ///
    /// Only suitable for trusted input: comparison time grows with the
    /// product of both documents' line counts.
    pub fn unbounded() -> Self {
        Self {
            max_input_bytes: 0,
            max_input_lines: 0,
            ..Default::default()
        }
    }

    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(s: &str) -> EngineResult<Self> {
        toml::from_str(s).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// [`Self::timeout_secs`] as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Limits applied by the change summarizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Most changed sections listed individually.
    pub max_sections: usize,
    /// Hard cap on the number of summary lines.
    pub max_entries: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_sections: 10,
            max_entries: 15,
        }
    }
}
