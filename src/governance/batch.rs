#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::assessment::RiskAssessment;
use super::classification::Classification;
use super::content::ArticleContent;
use crate::config::GovernanceConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRequest {
    pub article_id: Uuid,
    pub content: ArticleContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub safe_mode_blocked: usize,
    pub requiring_senior_review: usize,
    pub classifications: Vec<ClassificationReport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub classification: Classification,
    pub count: usize,
}

/// Score every request against the same config snapshot. Output order
/// matches input order.
#[cfg(feature = "parallel")]
pub fn assess_batch(requests: &[ScoringRequest], config: &GovernanceConfig) -> Vec<RiskAssessment> {
    requests
        .par_iter()
        .map(|request| RiskAssessment::assess(request.article_id, &request.content, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn assess_batch(requests: &[ScoringRequest], config: &GovernanceConfig) -> Vec<RiskAssessment> {
    requests
        .iter()
        .map(|request| RiskAssessment::assess(request.article_id, &request.content, config))
        .collect()
}

pub fn summarize(assessments: &[RiskAssessment]) -> BatchReport {
    let classifications = Classification::ALL
        .iter()
        .map(|classification| ClassificationReport {
            classification: *classification,
            count: assessments
                .iter()
                .filter(|assessment| assessment.classification() == *classification)
                .count(),
        })
        .filter(|report| report.count > 0)
        .collect();

    BatchReport {
        total: assessments.len(),
        safe_mode_blocked: assessments
            .iter()
            .filter(|assessment| assessment.safe_mode().blocked)
            .count(),
        requiring_senior_review: assessments
            .iter()
            .filter(|assessment| assessment.requires_senior_review())
            .count(),
        classifications,
    }
}
