//! Mining configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::PowError;
use crate::puzzle::MAX_DIFFICULTY;

/// Configuration for the mining engine.
///
/// Can be loaded from a TOML file via [`MiningConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Extra set bits (beyond the 128 baseline) a block digest must carry.
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,

    /// Time budget for one mining call, in milliseconds.
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,

    /// Number of concurrent attempts racing per mining call.
    #[serde(default = "default_worker_count")]
    pub worker_count: usize,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_difficulty() -> u32 {
    36
}

fn default_deadline_ms() -> u64 {
    60_000
}

fn default_worker_count() -> usize {
    6
}

// ── Impl ───────────────────────────────────────────────────────────────

impl MiningConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, PowError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PowError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, PowError> {
        toml::from_str(s).map_err(|e| PowError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("MiningConfig is always serializable to TOML")
    }

    /// The per-call time budget as a `Duration`.
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// Reject configurations no search can satisfy.
    pub fn validate(&self) -> Result<(), PowError> {
        if self.difficulty > MAX_DIFFICULTY {
            return Err(PowError::UnsatisfiableDifficulty {
                difficulty: self.difficulty,
            });
        }
        if self.worker_count == 0 {
            return Err(PowError::Config("worker_count must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            deadline_ms: default_deadline_ms(),
            worker_count: default_worker_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = MiningConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = MiningConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.difficulty, config.difficulty);
        assert_eq!(parsed.deadline_ms, config.deadline_ms);
        assert_eq!(parsed.worker_count, config.worker_count);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = MiningConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.difficulty, 36);
        assert_eq!(config.deadline_ms, 60_000);
        assert_eq!(config.worker_count, 6);
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            difficulty = 8
            worker_count = 2
        "#;
        let config = MiningConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.difficulty, 8);
        assert_eq!(config.worker_count, 2);
        assert_eq!(config.deadline_ms, 60_000); // default
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = MiningConfig::from_toml_file("/nonexistent/popchain.toml");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, PowError::Config(_)));
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(MiningConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_unsatisfiable_difficulty() {
        let config = MiningConfig {
            difficulty: 129,
            ..MiningConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            PowError::UnsatisfiableDifficulty { difficulty: 129 }
        ));
    }

    #[test]
    fn validate_accepts_boundary_difficulty() {
        let config = MiningConfig {
            difficulty: 128,
            ..MiningConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_workers() {
        let config = MiningConfig {
            worker_count: 0,
            ..MiningConfig::default()
        };
        assert!(matches!(config.validate(), Err(PowError::Config(_))));
    }

    #[test]
    fn deadline_converts_millis() {
        let config = MiningConfig {
            deadline_ms: 1500,
            ..MiningConfig::default()
        };
        assert_eq!(config.deadline(), Duration::from_millis(1500));
    }
}
