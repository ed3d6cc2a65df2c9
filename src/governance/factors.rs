use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::content::ContentContext;

const NAMED_INDIVIDUAL_KEYWORDS: &[&str] = &["president", "minister", "leader", "mr.", "dr."];
const CRIMINAL_ALLEGATION_KEYWORDS: &[&str] = &["guilty", "crime", "corruption", "fraud"];
const ANONYMOUS_SOURCE_KEYWORDS: &[&str] = &["anonymous", "unnamed"];
const WAR_TOPIC_KEYWORDS: &[&str] = &["war", "attack", "strike", "military"];
const RELIGIOUS_FRAMING_KEYWORDS: &[&str] = &["muslim", "islamic", "christian", "jewish"];
const ISRAEL_KEYWORDS: &[&str] = &["israel"];
const IRAN_KEYWORDS: &[&str] = &["iran"];
const PALESTINE_KEYWORDS: &[&str] = &["palestine"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    NamedIndividual,
    CriminalAllegation,
    SingleAnonymousSource,
    WarTopic,
    ReligiousFraming,
    IsraelMentioned,
    IranMentioned,
    PalestineMentioned,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 8] = [
        RiskFactor::NamedIndividual,
        RiskFactor::CriminalAllegation,
        RiskFactor::SingleAnonymousSource,
        RiskFactor::WarTopic,
        RiskFactor::ReligiousFraming,
        RiskFactor::IsraelMentioned,
        RiskFactor::IranMentioned,
        RiskFactor::PalestineMentioned,
    ];

    pub const MIDDLE_EAST: [RiskFactor; 3] = [
        RiskFactor::IsraelMentioned,
        RiskFactor::IranMentioned,
        RiskFactor::PalestineMentioned,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RiskFactor::NamedIndividual => "named_individual",
            RiskFactor::CriminalAllegation => "criminal_allegation",
            RiskFactor::SingleAnonymousSource => "single_anonymous_source",
            RiskFactor::WarTopic => "war_topic",
            RiskFactor::ReligiousFraming => "religious_framing",
            RiskFactor::IsraelMentioned => "israel_mentioned",
            RiskFactor::IranMentioned => "iran_mentioned",
            RiskFactor::PalestineMentioned => "palestine_mentioned",
        }
    }

    /// Lower-case substrings whose presence sets this factor.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            RiskFactor::NamedIndividual => NAMED_INDIVIDUAL_KEYWORDS,
            RiskFactor::CriminalAllegation => CRIMINAL_ALLEGATION_KEYWORDS,
            RiskFactor::SingleAnonymousSource => ANONYMOUS_SOURCE_KEYWORDS,
            RiskFactor::WarTopic => WAR_TOPIC_KEYWORDS,
            RiskFactor::ReligiousFraming => RELIGIOUS_FRAMING_KEYWORDS,
            RiskFactor::IsraelMentioned => ISRAEL_KEYWORDS,
            RiskFactor::IranMentioned => IRAN_KEYWORDS,
            RiskFactor::PalestineMentioned => PALESTINE_KEYWORDS,
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of factors detected for one piece of content.
///
/// Serialises as a total `factor -> bool` map so stored records always list
/// every factor, including the ones that did not fire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<RiskFactor, bool>",
    into = "BTreeMap<RiskFactor, bool>"
)]
pub struct RiskFactors {
    detected: BTreeSet<RiskFactor>,
}

impl RiskFactors {
    pub fn none() -> Self {
        RiskFactors::default()
    }

    pub fn is_set(&self, factor: RiskFactor) -> bool {
        self.detected.contains(&factor)
    }

    pub fn any_of(&self, factors: &[RiskFactor]) -> bool {
        factors.iter().any(|factor| self.is_set(*factor))
    }

    pub fn mentions_middle_east(&self) -> bool {
        self.any_of(&RiskFactor::MIDDLE_EAST)
    }

    pub fn detected(&self) -> impl Iterator<Item = RiskFactor> + '_ {
        self.detected.iter().copied()
    }

    pub fn count(&self) -> usize {
        self.detected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detected.is_empty()
    }

    pub fn as_map(&self) -> BTreeMap<RiskFactor, bool> {
        RiskFactor::ALL
            .iter()
            .map(|factor| (*factor, self.is_set(*factor)))
            .collect()
    }
}

impl FromIterator<RiskFactor> for RiskFactors {
    fn from_iter<I: IntoIterator<Item = RiskFactor>>(iter: I) -> Self {
        RiskFactors {
            detected: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<RiskFactor, bool>> for RiskFactors {
    fn from(map: BTreeMap<RiskFactor, bool>) -> Self {
        map.into_iter()
            .filter_map(|(factor, set)| set.then_some(factor))
            .collect()
    }
}

impl From<RiskFactors> for BTreeMap<RiskFactor, bool> {
    fn from(factors: RiskFactors) -> Self {
        factors.as_map()
    }
}

/// Keyword membership test for every factor. Blank content yields no factors.
pub fn extract_factors(content: &str) -> RiskFactors {
    let ctx = ContentContext::new(content);
    if ctx.is_blank() {
        return RiskFactors::none();
    }

    RiskFactor::ALL
        .iter()
        .copied()
        .filter(|factor| ctx.contains_any(factor.keywords()))
        .collect()
}
