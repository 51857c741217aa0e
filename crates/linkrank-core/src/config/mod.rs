//! Configuration management

use crate::error::{LinkRankError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default probability of following a link instead of teleporting
pub const DEFAULT_DAMPING_FACTOR: f64 = 0.85;

/// Default number of random-walk draws for the sampling estimator
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;

/// Default absolute max-difference bound for the iterative estimator
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Default cap on iteration rounds
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

/// Ranking configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    /// Probability that the surfer follows an outgoing link
    #[serde(default = "default_damping_factor")]
    pub damping_factor: f64,

    /// Number of random-walk draws
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,

    /// Iteration stops once no rank moves by this much or more
    #[serde(default = "default_convergence_threshold")]
    pub convergence_threshold: f64,

    /// Upper bound on iteration rounds
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,

    /// Seed for the sampling estimator; random when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Glob pattern selecting corpus documents
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping_factor: default_damping_factor(),
            sample_count: default_sample_count(),
            convergence_threshold: default_convergence_threshold(),
            max_rounds: default_max_rounds(),
            seed: None,
            pattern: default_pattern(),
        }
    }
}

fn default_damping_factor() -> f64 {
    DEFAULT_DAMPING_FACTOR
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

fn default_convergence_threshold() -> f64 {
    DEFAULT_CONVERGENCE_THRESHOLD
}

fn default_max_rounds() -> usize {
    DEFAULT_MAX_ROUNDS
}

fn default_pattern() -> String {
    "*.html".to_string()
}

impl RankConfig {
    /// Load config from default path, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Apply `LINKRANK_*` environment overrides
    pub fn apply_env(mut self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())?;
        Ok(self)
    }

    fn apply_vars<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("LINKRANK_DAMPING") {
            self.damping_factor = parse_var("LINKRANK_DAMPING", &raw)?;
        }
        if let Some(raw) = lookup("LINKRANK_SAMPLES") {
            self.sample_count = parse_var("LINKRANK_SAMPLES", &raw)?;
        }
        if let Some(raw) = lookup("LINKRANK_SEED") {
            self.seed = Some(parse_var("LINKRANK_SEED", &raw)?);
        }
        Ok(())
    }

    /// Reject settings the estimators cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.damping_factor > 0.0 && self.damping_factor < 1.0) {
            return Err(LinkRankError::Config(format!(
                "damping_factor must be in (0, 1), got {}",
                self.damping_factor
            )));
        }
        if self.sample_count == 0 {
            return Err(LinkRankError::Config(
                "sample_count must be at least 1".to_string(),
            ));
        }
        if !(self.convergence_threshold.is_finite() && self.convergence_threshold > 0.0) {
            return Err(LinkRankError::Config(format!(
                "convergence_threshold must be positive, got {}",
                self.convergence_threshold
            )));
        }
        if self.max_rounds == 0 {
            return Err(LinkRankError::Config(
                "max_rounds must be at least 1".to_string(),
            ));
        }
        glob::Pattern::new(&self.pattern).map_err(|e| {
            LinkRankError::Config(format!("invalid pattern {:?}: {e}", self.pattern))
        })?;
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| LinkRankError::Config(format!("{key} has an invalid value: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = RankConfig::default();
        assert_eq!(config.damping_factor, 0.85);
        assert_eq!(config.sample_count, 10_000);
        assert_eq!(config.convergence_threshold, 0.001);
        assert_eq!(config.pattern, "*.html");
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: RankConfig = serde_yaml::from_str("damping_factor: 0.5\nseed: 7\n").unwrap();
        assert_eq!(config.damping_factor, 0.5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.sample_count, DEFAULT_SAMPLE_COUNT);
        assert_eq!(config.max_rounds, DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "sample_count: 500\npattern: \"*.htm\"\n").unwrap();

        let config = RankConfig::load_from(&path).unwrap();
        assert_eq!(config.sample_count, 500);
        assert_eq!(config.pattern, "*.htm");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [("LINKRANK_DAMPING", "0.6"), ("LINKRANK_SEED", "42")]
            .into_iter()
            .collect();
        let mut config = RankConfig::default();
        config
            .apply_vars(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.damping_factor, 0.6);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.sample_count, DEFAULT_SAMPLE_COUNT);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = RankConfig::default();
        let err = config
            .apply_vars(|key| (key == "LINKRANK_SAMPLES").then(|| "lots".to_string()))
            .unwrap_err();
        assert!(matches!(err, LinkRankError::Config(_)));
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        for damping in [0.0, 1.0, 1.5, -0.1, f64::NAN] {
            let config = RankConfig {
                damping_factor: damping,
                ..RankConfig::default()
            };
            assert!(config.validate().is_err(), "accepted damping {damping}");
        }
    }

    #[test]
    fn test_validate_rejects_zero_samples_and_threshold() {
        let config = RankConfig {
            sample_count: 0,
            ..RankConfig::default()
        };
        assert!(config.validate().is_err());

        let config = RankConfig {
            convergence_threshold: 0.0,
            ..RankConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_pattern() {
        let config = RankConfig {
            pattern: "[".to_string(),
            ..RankConfig::default()
        };
        assert!(matches!(config.validate(), Err(LinkRankError::Config(_))));
    }
}
