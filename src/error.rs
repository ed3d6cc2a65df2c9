use thiserror::Error;

use crate::governance::{ApprovalLevel, AssessmentStatus};

/// Errors raised at the boundary of the scoring core.
///
/// Scoring, aggregation, classification and safe-mode evaluation never fail;
/// these variants cover input validation, configuration loading and workflow
/// transitions requested by the caller.
#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("unknown role: {0}")]
    InvalidRole(String),

    #[error("assessment cannot move from {from} to {to}")]
    InvalidTransition {
        from: AssessmentStatus,
        to: AssessmentStatus,
    },

    #[error("risk score {score} exceeds approval limit {limit} ({required} required)")]
    ApprovalDenied {
        score: u8,
        limit: u8,
        required: ApprovalLevel,
    },

    #[error("publishing requires Editor-in-Chief authority (approver limit {limit})")]
    PublishDenied { limit: u8 },

    #[error("assessment is not publishable while {0}")]
    NotPublishable(AssessmentStatus),

    #[error("invalid governance configuration: {0}")]
    Config(String),

    #[error("failed to read governance configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse governance configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type GovernanceResult<T> = Result<T, GovernanceError>;
