//! ERI trend and outlook helpers used when drafting the weekly brief.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::content::ContentContext;
use super::dimensions::{DimensionScores, EriDimension};

/// Minimum week-over-week change that counts as movement.
pub const TREND_THRESHOLD: i16 = 3;

/// Minimum half-over-half change of the average that counts as a trend.
pub const HISTORY_TREND_THRESHOLD: f64 = 5.0;

pub const MAX_INDICATORS: usize = 6;

pub const DEFAULT_DEVELOPMENT_IMPACT: u8 = 5;
pub const MAX_DEVELOPMENT_IMPACT: u8 = 10;

const HIGH_IMPACT_KEYWORDS: &[&str] = &[
    "attack",
    "strike",
    "invasion",
    "war",
    "casualties",
    "sanctions",
    "embargo",
];
const MEDIUM_IMPACT_KEYWORDS: &[&str] = &["tension", "dispute", "protest", "deployment", "drill"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn between(current: u8, previous: u8) -> Trend {
        let diff = i16::from(current) - i16::from(previous);
        if diff > TREND_THRESHOLD {
            Trend::Up
        } else if diff < -TREND_THRESHOLD {
            Trend::Down
        } else {
            Trend::Stable
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutlook {
    pub stabilization: Likelihood,
    pub controlled_escalation: Likelihood,
    pub expanded_conflict: Likelihood,
}

/// Fixed narrative of one outlook scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub triggers: &'static [&'static str],
}

pub const STABILIZATION_PATH: ScenarioProfile = ScenarioProfile {
    name: "Stabilization Path",
    description: "Diplomatic breakthrough reduces tensions through negotiated settlement",
    triggers: &[
        "Negotiation resumption",
        "Third-party mediation success",
        "Confidence-building measures",
    ],
};

pub const CONTROLLED_ESCALATION: ScenarioProfile = ScenarioProfile {
    name: "Controlled Escalation",
    description: "Limited conflict with contained scope and regional involvement",
    triggers: &["Proxy escalation", "Retaliatory strikes", "Sanctions expansion"],
};

pub const EXPANDED_REGIONAL_CONFLICT: ScenarioProfile = ScenarioProfile {
    name: "Expanded Regional Conflict",
    description: "Multi-actor involvement broadens conflict beyond initial parameters",
    triggers: &[
        "Alliance activation",
        "Critical infrastructure attack",
        "Humanitarian crisis",
    ],
};

/// A scenario profile paired with its current likelihood, as drafted into
/// the weekly brief.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    #[serde(flatten)]
    pub profile: ScenarioProfile,
    pub likelihood: Likelihood,
}

impl ScenarioOutlook {
    /// Stabilization, controlled escalation, expanded conflict, in that order.
    pub fn scenarios(&self) -> [Scenario; 3] {
        [
            Scenario {
                profile: STABILIZATION_PATH,
                likelihood: self.stabilization,
            },
            Scenario {
                profile: CONTROLLED_ESCALATION,
                likelihood: self.controlled_escalation,
            },
            Scenario {
                profile: EXPANDED_REGIONAL_CONFLICT,
                likelihood: self.expanded_conflict,
            },
        ]
    }
}

pub fn scenario_outlook(eri_score: u8, trend: Trend) -> ScenarioOutlook {
    use Likelihood::*;

    match eri_score {
        0..=29 => ScenarioOutlook {
            stabilization: High,
            controlled_escalation: Low,
            expanded_conflict: Low,
        },
        30..=49 => ScenarioOutlook {
            stabilization: if trend == Trend::Down { High } else { Moderate },
            controlled_escalation: if trend == Trend::Up { Moderate } else { Low },
            expanded_conflict: Low,
        },
        50..=69 => ScenarioOutlook {
            stabilization: if trend == Trend::Down { Moderate } else { Low },
            controlled_escalation: High,
            expanded_conflict: if trend == Trend::Up { Moderate } else { Low },
        },
        _ => ScenarioOutlook {
            stabilization: Low,
            controlled_escalation: if trend == Trend::Down { Moderate } else { High },
            expanded_conflict: if trend == Trend::Up { High } else { Moderate },
        },
    }
}

fn dimension_indicators(dimension: EriDimension) -> [&'static str; 2] {
    match dimension {
        EriDimension::Military => ["Troop movement reports", "Military drill announcements"],
        EriDimension::Political => ["Leadership statements", "Policy announcements"],
        EriDimension::Proxy => ["Militia activity reports", "Cross-border incidents"],
        EriDimension::Economic => ["Oil price movements", "Shipping route updates"],
        EriDimension::Diplomatic => ["Negotiation schedules", "Mediator engagement"],
    }
}

/// Indicators for dimensions above 60, then index-level ones, capped at six.
pub fn indicators_to_watch(scores: &DimensionScores<EriDimension>, overall: u8) -> Vec<&'static str> {
    let mut indicators: Vec<&'static str> = Vec::new();

    for (dimension, score) in scores.iter() {
        if score > 60 {
            indicators.extend(dimension_indicators(dimension));
        }
    }
    if overall > 60 {
        indicators.push("Third-party mediation efforts");
        indicators.push("Regional power statements");
    }
    if overall > 80 {
        indicators.push("Evacuation advisories");
        indicators.push("International organization responses");
    }

    let mut seen = BTreeSet::new();
    indicators.retain(|indicator| seen.insert(*indicator));
    indicators.truncate(MAX_INDICATORS);
    indicators
}

/// Escalation impact (0..=10) of a key development headline.
pub fn development_impact(headline: &str, base: Option<u8>) -> u8 {
    let ctx = ContentContext::new(headline);
    let mut impact = base.unwrap_or(DEFAULT_DEVELOPMENT_IMPACT);

    if ctx.contains_any(HIGH_IMPACT_KEYWORDS) {
        impact = impact.saturating_add(2);
    }
    if ctx.contains_any(MEDIUM_IMPACT_KEYWORDS) {
        impact = impact.saturating_add(1);
    }
    impact.min(MAX_DEVELOPMENT_IMPACT)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryTrend {
    Rising,
    Falling,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub trend: HistoryTrend,
    pub volatility: f64,
    pub average: u8,
    pub peak: u8,
    pub low: u8,
}

fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|value| f64::from(*value)).sum::<f64>() / values.len() as f64
}

/// Summarise a chronological series of overall ERI scores.
pub fn analyze_history(scores: &[u8]) -> HistorySummary {
    if scores.len() < 2 {
        let only = scores.first().copied().unwrap_or(0);
        return HistorySummary {
            trend: HistoryTrend::Stable,
            volatility: 0.0,
            average: only,
            peak: only,
            low: only,
        };
    }

    let average = mean(scores);
    let variance = scores
        .iter()
        .map(|score| (f64::from(*score) - average).powi(2))
        .sum::<f64>()
        / scores.len() as f64;

    let (first_half, second_half) = scores.split_at(scores.len() / 2);
    let first_avg = mean(first_half);
    let second_avg = mean(second_half);
    let trend = if second_avg - first_avg > HISTORY_TREND_THRESHOLD {
        HistoryTrend::Rising
    } else if first_avg - second_avg > HISTORY_TREND_THRESHOLD {
        HistoryTrend::Falling
    } else {
        HistoryTrend::Stable
    };

    HistorySummary {
        trend,
        volatility: (variance.sqrt() * 10.0).round() / 10.0,
        average: average.round() as u8,
        peak: scores.iter().copied().max().unwrap_or(0),
        low: scores.iter().copied().min().unwrap_or(0),
    }
}
