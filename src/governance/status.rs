use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::approval::{required_approval_level, Approver};
use crate::error::{GovernanceError, GovernanceResult};

/// `Created -> (Reviewed | SafeModeBlocked) -> (Approved | Rejected)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Created,
    Reviewed,
    SafeModeBlocked,
    Approved,
    Rejected,
}

impl AssessmentStatus {
    pub fn can_transition_to(self, next: AssessmentStatus) -> bool {
        use AssessmentStatus::*;
        matches!(
            (self, next),
            (Created, Reviewed)
                | (Created, SafeModeBlocked)
                | (Reviewed, Approved)
                | (Reviewed, Rejected)
                | (SafeModeBlocked, Approved)
                | (SafeModeBlocked, Rejected)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AssessmentStatus::Approved | AssessmentStatus::Rejected)
    }

    fn as_str(self) -> &'static str {
        match self {
            AssessmentStatus::Created => "created",
            AssessmentStatus::Reviewed => "reviewed",
            AssessmentStatus::SafeModeBlocked => "safe_mode_blocked",
            AssessmentStatus::Approved => "approved",
            AssessmentStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
}

/// Resolution metadata appended to an assessment; handed to the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub decision: Decision,
    pub decided_by: Uuid,
    pub decided_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Workflow state shared by risk and ERI assessments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewState {
    status: AssessmentStatus,
    #[serde(default)]
    decision: Option<DecisionRecord>,
}

impl ReviewState {
    pub(crate) fn new() -> Self {
        ReviewState {
            status: AssessmentStatus::Created,
            decision: None,
        }
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn decision(&self) -> Option<&DecisionRecord> {
        self.decision.as_ref()
    }

    pub(crate) fn begin_review(&mut self, blocked: bool) -> GovernanceResult<AssessmentStatus> {
        let next = if blocked {
            AssessmentStatus::SafeModeBlocked
        } else {
            AssessmentStatus::Reviewed
        };
        self.advance(next)?;
        Ok(next)
    }

    /// Checks the transition before the approver's authority.
    pub(crate) fn check_approval(&self, approver: &Approver, overall: u8) -> GovernanceResult<()> {
        self.check_transition(AssessmentStatus::Approved)?;
        let authority = approver.authority();
        if !authority.permits(overall) {
            return Err(GovernanceError::ApprovalDenied {
                score: overall,
                limit: authority.limit,
                required: required_approval_level(overall),
            });
        }
        Ok(())
    }

    pub(crate) fn approve(
        &mut self,
        approver: &Approver,
        overall: u8,
        notes: Option<String>,
        at: DateTime<Utc>,
    ) -> GovernanceResult<&DecisionRecord> {
        self.check_approval(approver, overall)?;
        self.record(Decision::Approved, approver, notes, at)
    }

    pub(crate) fn reject(
        &mut self,
        approver: &Approver,
        overall: u8,
        notes: Option<String>,
        at: DateTime<Utc>,
    ) -> GovernanceResult<&DecisionRecord> {
        self.check_transition(AssessmentStatus::Rejected)?;
        let authority = approver.authority();
        if !authority.can_decide() {
            return Err(GovernanceError::ApprovalDenied {
                score: overall,
                limit: authority.limit,
                required: required_approval_level(0),
            });
        }
        self.record(Decision::Rejected, approver, notes, at)
    }

    fn record(
        &mut self,
        decision: Decision,
        approver: &Approver,
        notes: Option<String>,
        at: DateTime<Utc>,
    ) -> GovernanceResult<&DecisionRecord> {
        self.advance(match decision {
            Decision::Approved => AssessmentStatus::Approved,
            Decision::Rejected => AssessmentStatus::Rejected,
        })?;
        Ok(&*self.decision.insert(DecisionRecord {
            decision,
            decided_by: approver.id,
            decided_at: at,
            notes,
        }))
    }

    fn check_transition(&self, next: AssessmentStatus) -> GovernanceResult<()> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(GovernanceError::InvalidTransition {
                from: self.status,
                to: next,
            })
        }
    }

    fn advance(&mut self, next: AssessmentStatus) -> GovernanceResult<()> {
        self.check_transition(next)?;
        self.status = next;
        Ok(())
    }
}

impl Default for ReviewState {
    fn default() -> Self {
        Self::new()
    }
}
