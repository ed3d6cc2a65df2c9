mod approval;
mod assessment;
pub mod batch;
mod classification;
mod content;
mod dimensions;
mod eri;
mod factors;
mod mitigation;
pub mod outlook;
mod rules;
mod safe_mode;
mod status;


pub use approval::{
    approval_limit_for, can_approve, effective_authority, required_approval_level,
    requires_senior_review, ApprovalLevel, Approver, Authority, Role, SENIOR_REVIEW_THRESHOLD,
    UNRESTRICTED,
};
pub use assessment::RiskAssessment;
pub use batch::{assess_batch, summarize, BatchReport, ScoringRequest};
pub use classification::{classify, Classification};
pub use content::ArticleContent;
pub use dimensions::{
    aggregate, clamp_score, Dimension, DimensionScores, EriDimension, Family, RiskDimension,
    WeightTable, ERI_WEIGHTS, RISK_WEIGHTS, WEIGHT_SCALE,
};
pub use eri::{
    DimensionChange, DimensionTrend, EriAssessment, EriComparison, EriInput, EriUpdate,
    ReportingPeriod, SIGNIFICANT_SHIFT,
};
pub use factors::{extract_factors, RiskFactor, RiskFactors};
pub use mitigation::mitigation_suggestions;
pub use rules::score_dimensions;
pub use safe_mode::{
    evaluate_safe_mode, SafeModeResult, ACTIVE_CONFLICT_VIOLATION, CRIMINAL_ALLEGATION_VIOLATION,
};
pub use status::{AssessmentStatus, Decision, DecisionRecord, ReviewState};
