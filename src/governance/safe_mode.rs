use serde::{Deserialize, Serialize};

use super::factors::{RiskFactor, RiskFactors};

pub const CRIMINAL_ALLEGATION_VIOLATION: &str = "Criminal allegations not allowed in Safe Mode";
pub const ACTIVE_CONFLICT_VIOLATION: &str = "Active conflict analysis restricted in Safe Mode";

// Evaluated in order; the violation list keeps this order.
const SAFE_MODE_RULES: &[(RiskFactor, &str)] = &[
    (RiskFactor::CriminalAllegation, CRIMINAL_ALLEGATION_VIOLATION),
    (RiskFactor::WarTopic, ACTIVE_CONFLICT_VIOLATION),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafeModeResult {
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
}

impl SafeModeResult {
    pub fn allowed() -> Self {
        SafeModeResult::default()
    }
}

pub fn evaluate_safe_mode(factors: &RiskFactors, enabled: bool) -> SafeModeResult {
    if !enabled {
        return SafeModeResult::allowed();
    }

    let violations: Vec<String> = SAFE_MODE_RULES
        .iter()
        .filter(|(factor, _)| factors.is_set(*factor))
        .map(|(_, violation)| (*violation).to_string())
        .collect();

    SafeModeResult {
        blocked: !violations.is_empty(),
        violations,
    }
}
