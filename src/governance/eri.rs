use chrono::{DateTime, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::approval::Approver;
use super::classification::{classify, Classification};
use super::dimensions::{aggregate, Dimension, DimensionScores, EriDimension, WeightTable, ERI_WEIGHTS};
use super::outlook::{indicators_to_watch, scenario_outlook, ScenarioOutlook, Trend};
use super::status::{AssessmentStatus, DecisionRecord, ReviewState};
use crate::error::{GovernanceError, GovernanceResult};

/// ISO week an ERI assessment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub week_number: u32,
    pub year: i32,
}

impl ReportingPeriod {
    pub fn new(year: i32, week_number: u32) -> Self {
        ReportingPeriod { week_number, year }
    }

    pub fn starts_on(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week_number, Weekday::Mon)
    }

    pub fn ends_on(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week_number, Weekday::Sun)
    }
}

/// Analyst-supplied dimension scores. Values outside 0..=100 are clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EriInput {
    pub military: i64,
    pub political: i64,
    pub proxy: i64,
    pub economic: i64,
    pub diplomatic: i64,
}

impl EriInput {
    fn values(&self) -> [(EriDimension, i64); 5] {
        [
            (EriDimension::Military, self.military),
            (EriDimension::Political, self.political),
            (EriDimension::Proxy, self.proxy),
            (EriDimension::Economic, self.economic),
            (EriDimension::Diplomatic, self.diplomatic),
        ]
    }
}

/// Partial edit of an existing assessment; `None` leaves a dimension as is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EriUpdate {
    pub military: Option<i64>,
    pub political: Option<i64>,
    pub proxy: Option<i64>,
    pub economic: Option<i64>,
    pub diplomatic: Option<i64>,
}

impl EriUpdate {
    fn changes(&self) -> impl Iterator<Item = (EriDimension, i64)> {
        [
            (EriDimension::Military, self.military),
            (EriDimension::Political, self.political),
            (EriDimension::Proxy, self.proxy),
            (EriDimension::Economic, self.economic),
            (EriDimension::Diplomatic, self.diplomatic),
        ]
        .into_iter()
        .filter_map(|(dimension, value)| value.map(|value| (dimension, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.changes().next().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionTrend {
    pub dimension: EriDimension,
    pub score: u8,
    pub previous_score: u8,
    pub trend: Trend,
}

/// Change of more than this many points in one dimension is reported as a
/// significant shift.
pub const SIGNIFICANT_SHIFT: i16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionChange {
    pub dimension: EriDimension,
    pub change: i16,
}

/// Week-over-week movement of an ERI assessment against the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EriComparison {
    pub overall_change: i16,
    pub dimension_changes: Vec<DimensionChange>,
    /// `"Military: +12 points"` for every change beyond `SIGNIFICANT_SHIFT`.
    pub significant_shifts: Vec<String>,
}

/// Weekly Escalation Risk Index assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "EriAssessmentRecord")]
pub struct EriAssessment {
    id: Uuid,
    period: ReportingPeriod,
    scores: DimensionScores<EriDimension>,
    overall_score: u8,
    classification: Classification,
    created_at: DateTime<Utc>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    review: ReviewState,
}

/// Stored form of an `EriAssessment`; overall score and classification are
/// recomputed from the scores.
#[derive(Deserialize)]
struct EriAssessmentRecord {
    id: Uuid,
    period: ReportingPeriod,
    scores: DimensionScores<EriDimension>,
    created_at: DateTime<Utc>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    review: ReviewState,
}

impl From<EriAssessmentRecord> for EriAssessment {
    fn from(record: EriAssessmentRecord) -> Self {
        let mut assessment = EriAssessment {
            id: record.id,
            period: record.period,
            scores: record.scores,
            overall_score: 0,
            classification: Classification::Low,
            created_at: record.created_at,
            published_at: record.published_at,
            review: record.review,
        };
        assessment.recompute();
        assessment
    }
}

impl EriAssessment {
    pub fn new(period: ReportingPeriod, input: EriInput) -> Self {
        let mut assessment = EriAssessment {
            id: Uuid::new_v4(),
            period,
            scores: DimensionScores::from_raw(input.values()),
            overall_score: 0,
            classification: Classification::Low,
            created_at: Utc::now(),
            published_at: None,
            review: ReviewState::new(),
        };
        assessment.recompute();
        assessment
    }

    /// Apply analyst edits and recompute. Returns the new overall score.
    pub fn update(&mut self, update: EriUpdate) -> u8 {
        for (dimension, value) in update.changes() {
            self.scores.set(dimension, value);
        }
        self.recompute();
        self.overall_score
    }

    pub fn recompute(&mut self) {
        self.overall_score = aggregate(&self.scores, &ERI_WEIGHTS);
        self.classification = classify(self.overall_score, EriDimension::FAMILY);
        log::debug!(
            "ERI {} week {}/{}: overall {} ({})",
            self.id,
            self.period.week_number,
            self.period.year,
            self.overall_score,
            self.classification
        );
    }

    pub fn begin_review(&mut self) -> GovernanceResult<AssessmentStatus> {
        self.review.begin_review(false)
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

    /// Stamp the publication time. Needs Editor-in-Chief authority and an
    /// approved assessment; a second publish keeps the first time.
    pub fn publish(
        &mut self,
        publisher: &Approver,
        at: DateTime<Utc>,
    ) -> GovernanceResult<DateTime<Utc>> {
        let authority = publisher.authority();
        if !authority.is_unrestricted() {
            log::warn!(
                "ERI {} publish refused for {} (limit {})",
                self.id,
                publisher.id,
                authority.limit
            );
            return Err(GovernanceError::PublishDenied {
                limit: authority.limit,
            });
        }
        if self.review.status() != AssessmentStatus::Approved {
            return Err(GovernanceError::NotPublishable(self.review.status()));
        }
        Ok(*self.published_at.get_or_insert(at))
    }

    pub fn trend_from(&self, previous: &EriAssessment) -> Trend {
        Trend::between(self.overall_score, previous.overall_score)
    }

    pub fn dimension_trends(&self, previous: &EriAssessment) -> Vec<DimensionTrend> {
        EriDimension::ALL
            .iter()
            .map(|dimension| {
                let score = self.scores.get(*dimension);
                let previous_score = previous.scores.get(*dimension);
                DimensionTrend {
                    dimension: *dimension,
                    score,
                    previous_score,
                    trend: Trend::between(score, previous_score),
                }
            })
            .collect()
    }

    pub fn compare(&self, previous: &EriAssessment) -> EriComparison {
        let dimension_changes: Vec<DimensionChange> = EriDimension::ALL
            .iter()
            .map(|dimension| DimensionChange {
                dimension: *dimension,
                change: i16::from(self.scores.get(*dimension))
                    - i16::from(previous.scores.get(*dimension)),
            })
            .collect();
        let significant_shifts = dimension_changes
            .iter()
            .filter(|entry| entry.change.abs() > SIGNIFICANT_SHIFT)
            .map(|entry| format!("{}: {:+} points", entry.dimension.label(), entry.change))
            .collect();

        EriComparison {
            overall_change: i16::from(self.overall_score) - i16::from(previous.overall_score),
            dimension_changes,
            significant_shifts,
        }
    }

    /// Outlook against the previous week, or as stable when there is none.
    pub fn outlook(&self, previous: Option<&EriAssessment>) -> ScenarioOutlook {
        let trend = previous
            .map(|previous| self.trend_from(previous))
            .unwrap_or(Trend::Stable);
        scenario_outlook(self.overall_score, trend)
    }

    pub fn indicators_to_watch(&self) -> Vec<&'static str> {
        indicators_to_watch(&self.scores, self.overall_score)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn period(&self) -> ReportingPeriod {
        self.period
    }

    pub fn scores(&self) -> &DimensionScores<EriDimension> {
        &self.scores
    }

    pub fn score(&self, dimension: EriDimension) -> u8 {
        self.scores.get(dimension)
    }

    pub fn weights(&self) -> &'static WeightTable<EriDimension> {
        &ERI_WEIGHTS
    }

    pub fn overall_score(&self) -> u8 {
        self.overall_score
    }

    pub fn classification(&self) -> Classification {
        self.classification
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn status(&self) -> AssessmentStatus {
        self.review.status()
    }

    pub fn decision(&self) -> Option<&DecisionRecord> {
        self.review.decision()
    }
}
