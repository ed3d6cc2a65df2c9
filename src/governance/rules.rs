use super::dimensions::{Dimension, DimensionScores, RiskDimension};
use super::factors::{RiskFactor, RiskFactors};

/// Points added to each risk dimension when any of `any_of` is detected.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContributionRule {
    pub(crate) any_of: &'static [RiskFactor],
    pub(crate) legal: u8,
    pub(crate) defamation: u8,
    pub(crate) platform: u8,
    pub(crate) political: u8,
}

impl ContributionRule {
    pub(crate) fn contribution(&self, dimension: RiskDimension) -> u8 {
        match dimension {
            RiskDimension::Legal => self.legal,
            RiskDimension::Defamation => self.defamation,
            RiskDimension::Platform => self.platform,
            RiskDimension::Political => self.political,
        }
    }

    pub(crate) fn applies(&self, factors: &RiskFactors) -> bool {
        factors.any_of(self.any_of)
    }
}

pub(crate) const RISK_CONTRIBUTIONS: &[ContributionRule] = &[
    ContributionRule {
        any_of: &[RiskFactor::NamedIndividual],
        legal: 15,
        defamation: 20,
        platform: 10,
        political: 10,
    },
    ContributionRule {
        any_of: &[RiskFactor::CriminalAllegation],
        legal: 25,
        defamation: 30,
        platform: 20,
        political: 15,
    },
    ContributionRule {
        any_of: &[RiskFactor::SingleAnonymousSource],
        legal: 20,
        defamation: 25,
        platform: 15,
        political: 0,
    },
    ContributionRule {
        any_of: &[RiskFactor::WarTopic],
        legal: 0,
        defamation: 0,
        platform: 25,
        political: 20,
    },
    ContributionRule {
        any_of: &[RiskFactor::ReligiousFraming],
        legal: 0,
        defamation: 0,
        platform: 30,
        political: 20,
    },
    // Fires once no matter how many of the three are mentioned.
    ContributionRule {
        any_of: &RiskFactor::MIDDLE_EAST,
        legal: 0,
        defamation: 0,
        platform: 0,
        political: 15,
    },
];

/// Sum of applicable contributions per dimension, clamped to 0..=100.
pub fn score_dimensions(factors: &RiskFactors) -> DimensionScores<RiskDimension> {
    let applicable: Vec<&ContributionRule> = RISK_CONTRIBUTIONS
        .iter()
        .filter(|rule| rule.applies(factors))
        .collect();

    DimensionScores::from_raw(RiskDimension::ALL.iter().map(|dimension| {
        let total: i64 = applicable
            .iter()
            .map(|rule| i64::from(rule.contribution(*dimension)))
            .sum();
        (*dimension, total)
    }))
}
