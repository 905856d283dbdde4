//! Hand-curated algorithm metadata merged into generated entries.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{PodiumError, Result};

pub const DEFAULT_FAMILY: &str = "Classical";
pub const DEFAULT_DATASET_PROFILE: &str = "BOSSBase-256";
pub const DEFAULT_PAYLOAD_BPP: f64 = 0.4;
pub const DEFAULT_RUNTIME_MS: f64 = 100.0;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    #[serde(default)]
    pub algorithm_family: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub dataset_profile: Option<String>,
}

/// Values applied to every generated entry.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationDefaults {
    #[serde(default = "default_payload_bpp")]
    pub payload_bpp: f64,
    #[serde(default = "default_runtime_ms")]
    pub runtime_ms: f64,
}

fn default_payload_bpp() -> f64 {
    DEFAULT_PAYLOAD_BPP
}

fn default_runtime_ms() -> f64 {
    DEFAULT_RUNTIME_MS
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            payload_bpp: DEFAULT_PAYLOAD_BPP,
            runtime_ms: DEFAULT_RUNTIME_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AlgorithmMetadata {
    #[serde(default)]
    pub algorithms: HashMap<String, AlgorithmInfo>,
    #[serde(default)]
    pub defaults: GenerationDefaults,
}

/// Metadata resolved for one algorithm name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInfo {
    pub family: String,
    pub description: String,
    pub dataset_profile: String,
}

impl AlgorithmMetadata {
    /// Load metadata from `path`. A missing file is not an error: it logs a
    /// warning and yields empty metadata with the built-in defaults.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "algorithm metadata not found; using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(PodiumError::io(path, err)),
        }
    }

    /// Metadata for `name`, with blanks and gaps filled from the defaults.
    pub fn resolve(&self, name: &str) -> ResolvedInfo {
        let info = self.algorithms.get(name);
        let pick = |field: Option<&String>| {
            field.map(|s| s.trim()).filter(|s| !s.is_empty()).map(str::to_string)
        };

        ResolvedInfo {
            family: pick(info.and_then(|i| i.algorithm_family.as_ref()))
                .unwrap_or_else(|| DEFAULT_FAMILY.to_string()),
            description: pick(info.and_then(|i| i.description.as_ref()))
                .unwrap_or_else(|| format!("{name} steganography algorithm")),
            dataset_profile: pick(info.and_then(|i| i.dataset_profile.as_ref()))
                .unwrap_or_else(|| DEFAULT_DATASET_PROFILE.to_string()),
        }
    }
}
