mod config;
mod error;
mod governance;

pub use config::{GovernanceConfig, CONFIG_PATH_ENV, RISK_THRESHOLD_ENV, SAFE_MODE_ENV};
pub use error::{GovernanceError, GovernanceResult};
pub use governance::*;
