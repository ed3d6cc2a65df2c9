use super::factors::{RiskFactor, RiskFactors};

const MITIGATIONS: &[(&[RiskFactor], &[&str])] = &[
    (
        &[RiskFactor::NamedIndividual],
        &[
            "Use \"alleged\" or \"reportedly\" when mentioning individuals",
            "Include response from accused when available",
        ],
    ),
    (
        &[RiskFactor::CriminalAllegation],
        &[
            "Attribute allegations to specific sources",
            "Avoid stating guilt without court verdict",
            "Use neutral language: \"accused of\" instead of \"guilty of\"",
        ],
    ),
    (
        &[RiskFactor::SingleAnonymousSource],
        &[
            "Seek additional corroborating sources",
            "Clearly state reason for anonymity",
            "Document internal verification process",
        ],
    ),
    (
        &[RiskFactor::WarTopic],
        &[
            "Focus on structural analysis, not tactical details",
            "Avoid casualty speculation",
            "Use maps and timelines instead of conflict footage",
        ],
    ),
    (
        &[RiskFactor::ReligiousFraming],
        &[
            "Remove religious/ethnic identifiers unless essential",
            "Focus on political/strategic factors",
            "Use neutral terminology",
        ],
    ),
    (
        &RiskFactor::MIDDLE_EAST,
        &[
            "Present multiple perspectives",
            "Attribute claims to specific sources",
            "Avoid taking sides in territorial disputes",
        ],
    ),
];

/// Editorial guidance for the detected factors, in a fixed order.
pub fn mitigation_suggestions(factors: &RiskFactors) -> Vec<&'static str> {
    MITIGATIONS
        .iter()
        .filter(|(triggers, _)| factors.any_of(triggers))
        .flat_map(|(_, suggestions)| suggestions.iter().copied())
        .collect()
}
