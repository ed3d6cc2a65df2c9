// src/config.rs

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GovernanceError, GovernanceResult};
use crate::governance::SENIOR_REVIEW_THRESHOLD;

pub const CONFIG_PATH_ENV: &str = "NEWSROOM_GOVERNANCE_CONFIG";
pub const SAFE_MODE_ENV: &str = "NEWSROOM_SAFE_MODE";
pub const RISK_THRESHOLD_ENV: &str = "NEWSROOM_RISK_THRESHOLD";

/// Governance settings injected into every assessment call.
///
/// The scoring core never reads process state on its own: callers own a
/// snapshot of this struct and pass it by reference, so toggling safe mode
/// affects only assessments created after the toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernanceConfig {
    pub safe_mode_enabled: bool, // Default: false
    pub risk_threshold: u8,      // Default: 40, senior review above this score
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        GovernanceConfig {
            safe_mode_enabled: false,
            risk_threshold: SENIOR_REVIEW_THRESHOLD,
        }
    }
}

impl GovernanceConfig {
    pub fn with_safe_mode(enabled: bool) -> Self {
        GovernanceConfig {
            safe_mode_enabled: enabled,
            ..GovernanceConfig::default()
        }
    }

    /// Load a JSON config file. Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> GovernanceResult<Self> {
        let raw = fs::read_to_string(path)?;
        let config: GovernanceConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults, then the file named by `NEWSROOM_GOVERNANCE_CONFIG`, then the
    /// individual `NEWSROOM_SAFE_MODE` / `NEWSROOM_RISK_THRESHOLD` overrides.
    pub fn from_env() -> GovernanceResult<Self> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load(Path::new(path.trim()))?,
            _ => GovernanceConfig::default(),
        };

        if let Ok(raw) = env::var(SAFE_MODE_ENV) {
            config.safe_mode_enabled = parse_flag(&raw).ok_or_else(|| {
                log::warn!("rejecting {}={:?}", SAFE_MODE_ENV, raw);
                GovernanceError::Config(format!("{SAFE_MODE_ENV} must be a boolean, got {raw:?}"))
            })?;
        }

        if let Ok(raw) = env::var(RISK_THRESHOLD_ENV) {
            config.risk_threshold = raw.trim().parse::<u8>().map_err(|_| {
                log::warn!("rejecting {}={:?}", RISK_THRESHOLD_ENV, raw);
                GovernanceError::Config(format!(
                    "{RISK_THRESHOLD_ENV} must be an integer in 0..=100, got {raw:?}"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn set_safe_mode(&mut self, enabled: bool) {
        if self.safe_mode_enabled != enabled {
            log::info!(
                "safe mode {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        self.safe_mode_enabled = enabled;
    }

    fn validate(&self) -> GovernanceResult<()> {
        if self.risk_threshold > 100 {
            return Err(GovernanceError::Config(format!(
                "risk_threshold must be within 0..=100, got {}",
                self.risk_threshold
            )));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_safe_mode_off() {
        let config = GovernanceConfig::default();
        assert!(!config.safe_mode_enabled);
        assert_eq!(config.risk_threshold, 40);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: GovernanceConfig =
            serde_json::from_str(r#"{ "safe_mode_enabled": true }"#).unwrap();
        assert!(config.safe_mode_enabled);
        assert_eq!(config.risk_threshold, 40);
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn threshold_above_hundred_is_rejected() {
        let config = GovernanceConfig {
            safe_mode_enabled: false,
            risk_threshold: 101,
        };
        assert!(matches!(config.validate(), Err(GovernanceError::Config(_))));
    }
}
