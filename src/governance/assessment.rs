use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::approval::{required_approval_level, ApprovalLevel, Approver};
use super::classification::{classify, Classification};
use super::content::ArticleContent;
use super::dimensions::{aggregate, Dimension, DimensionScores, RiskDimension, WeightTable, RISK_WEIGHTS};
use super::factors::{extract_factors, RiskFactors};
use super::mitigation::mitigation_suggestions;
use super::rules::score_dimensions;
use super::safe_mode::{evaluate_safe_mode, SafeModeResult};
use super::status::{AssessmentStatus, DecisionRecord, ReviewState};
use crate::config::GovernanceConfig;
use crate::error::{GovernanceError, GovernanceResult};

/// Four-dimension risk assessment of one article.
///
/// Overall score, classification, review flag and mitigation suggestions are
/// derived values: they are serialised for readers but rebuilt from the
/// stored scores and factors on deserialisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RiskAssessmentRecord")]
pub struct RiskAssessment {
    id: Uuid,
    article_id: Uuid,
    factors: RiskFactors,
    scores: DimensionScores<RiskDimension>,
    overall_score: u8,
    classification: Classification,
    safe_mode: SafeModeResult,
    risk_threshold: u8,
    requires_senior_review: bool,
    mitigation_suggestions: Vec<String>,
    assessed_at: DateTime<Utc>,
    review: ReviewState,
}

/// Stored form of a `RiskAssessment`; derived fields are ignored on input.
#[derive(Deserialize)]
struct RiskAssessmentRecord {
    id: Uuid,
    article_id: Uuid,
    factors: RiskFactors,
    scores: DimensionScores<RiskDimension>,
    #[serde(default)]
    safe_mode: SafeModeResult,
    risk_threshold: u8,
    assessed_at: DateTime<Utc>,
    #[serde(default)]
    review: ReviewState,
}

impl From<RiskAssessmentRecord> for RiskAssessment {
    fn from(record: RiskAssessmentRecord) -> Self {
        let mut assessment = RiskAssessment {
            id: record.id,
            article_id: record.article_id,
            mitigation_suggestions: suggestions_for(&record.factors),
            factors: record.factors,
            scores: record.scores,
            overall_score: 0,
            classification: Classification::Low,
            safe_mode: record.safe_mode,
            risk_threshold: record.risk_threshold,
            requires_senior_review: false,
            assessed_at: record.assessed_at,
            review: record.review,
        };
        assessment.recompute();
        assessment
    }
}

fn suggestions_for(factors: &RiskFactors) -> Vec<String> {
    mitigation_suggestions(factors)
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl RiskAssessment {
    pub fn assess(article_id: Uuid, content: &ArticleContent, config: &GovernanceConfig) -> Self {
        let factors = extract_factors(&content.scoring_text());
        Self::from_factors(article_id, factors, config)
    }

    pub fn from_factors(article_id: Uuid, factors: RiskFactors, config: &GovernanceConfig) -> Self {
        let scores = score_dimensions(&factors);
        let safe_mode = evaluate_safe_mode(&factors, config.safe_mode_enabled);
        let suggestions = suggestions_for(&factors);

        let mut assessment = RiskAssessment {
            id: Uuid::new_v4(),
            article_id,
            factors,
            scores,
            overall_score: 0,
            classification: Classification::Low,
            safe_mode,
            risk_threshold: config.risk_threshold,
            requires_senior_review: false,
            mitigation_suggestions: suggestions,
            assessed_at: Utc::now(),
            review: ReviewState::new(),
        };
        assessment.recompute();

        if assessment.safe_mode.blocked {
            log::info!(
                "safe mode blocked article {}: {}",
                article_id,
                assessment.safe_mode.violations.join("; ")
            );
        }
        log::debug!(
            "risk assessment {} for article {}: overall {} ({})",
            assessment.id,
            article_id,
            assessment.overall_score,
            assessment.classification
        );
        assessment
    }

    /// Manually override one dimension; the overall score follows.
    pub fn set_dimension(&mut self, dimension: RiskDimension, value: i64) -> u8 {
        let stored = self.scores.set(dimension, value);
        self.recompute();
        stored
    }

    /// Re-derive overall score, classification and review flag from the
    /// current dimension scores.
    pub fn recompute(&mut self) {
        self.overall_score = aggregate(&self.scores, &RISK_WEIGHTS);
        self.classification = classify(self.overall_score, RiskDimension::FAMILY);
        self.requires_senior_review = self.overall_score > self.risk_threshold;
        log::debug!(
            "recomputed risk assessment {}: overall {} ({})",
            self.id,
            self.overall_score,
            self.classification
        );
    }

    pub fn begin_review(&mut self) -> GovernanceResult<AssessmentStatus> {
        self.review.begin_review(self.safe_mode.blocked)
    }

    pub fn check_approval(&self, approver: &Approver) -> GovernanceResult<()> {
        self.review.check_approval(approver, self.overall_score)
    }

    pub fn approve(
        &mut self,
        approver: &Approver,
        notes: Option<String>,
        at: DateTime<Utc>,
    ) -> GovernanceResult<&DecisionRecord> {
        self.review.approve(approver, self.overall_score, notes, at)
    }

    pub fn reject(
        &mut self,
        approver: &Approver,
        notes: Option<String>,
        at: DateTime<Utc>,
    ) -> GovernanceResult<&DecisionRecord> {
        self.review.reject(approver, self.overall_score, notes, at)
    }

    pub fn is_publishable(&self) -> bool {
        self.review.status() == AssessmentStatus::Approved && !self.safe_mode.blocked
    }

    pub fn ensure_publishable(&self) -> GovernanceResult<()> {
        if self.is_publishable() {
            Ok(())
        } else {
            Err(GovernanceError::NotPublishable(self.review.status()))
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn article_id(&self) -> Uuid {
        self.article_id
    }

    pub fn factors(&self) -> &RiskFactors {
        &self.factors
    }

    pub fn scores(&self) -> &DimensionScores<RiskDimension> {
        &self.scores
    }

    pub fn score(&self, dimension: RiskDimension) -> u8 {
        self.scores.get(dimension)
    }

    pub fn weights(&self) -> &'static WeightTable<RiskDimension> {
        &RISK_WEIGHTS
    }

    pub fn overall_score(&self) -> u8 {
        self.overall_score
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn safe_mode(&self) -> &SafeModeResult {
        &self.safe_mode
    }

    pub fn requires_senior_review(&self) -> bool {
        self.requires_senior_review
    }

    pub fn required_approval_level(&self) -> ApprovalLevel {
        required_approval_level(self.overall_score)
    }

    pub fn mitigation_suggestions(&self) -> &[String] {
        &self.mitigation_suggestions
    }

    pub fn assessed_at(&self) -> DateTime<Utc> {
        self.assessed_at
    }

    pub fn status(&self) -> AssessmentStatus {
        self.review.status()
    }

    pub fn decision(&self) -> Option<&DecisionRecord> {
        self.review.decision()
    }
}
