use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Weights are held in hundredths so that aggregation is exact integer math.
pub const WEIGHT_SCALE: u32 = 100;

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Risk,
    Eri,
}

/// One named axis of a scoring family.
pub trait Dimension: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    const FAMILY: Family;
    const ALL: &'static [Self];

    fn name(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskDimension {
    Legal,
    Defamation,
    Platform,
    Political,
}

impl Dimension for RiskDimension {
    const FAMILY: Family = Family::Risk;
    const ALL: &'static [Self] = &[
        RiskDimension::Legal,
        RiskDimension::Defamation,
        RiskDimension::Platform,
        RiskDimension::Political,
    ];

    fn name(self) -> &'static str {
        match self {
            RiskDimension::Legal => "legal",
            RiskDimension::Defamation => "defamation",
            RiskDimension::Platform => "platform",
            RiskDimension::Political => "political",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EriDimension {
    Military,
    Political,
    Proxy,
    Economic,
    Diplomatic,
}

impl EriDimension {
    /// Capitalised name used in analyst-facing text.
    pub fn label(self) -> &'static str {
        match self {
            EriDimension::Military => "Military",
            EriDimension::Political => "Political",
            EriDimension::Proxy => "Proxy",
            EriDimension::Economic => "Economic",
            EriDimension::Diplomatic => "Diplomatic",
        }
    }
}

impl Dimension for EriDimension {
    const FAMILY: Family = Family::Eri;
    const ALL: &'static [Self] = &[
        EriDimension::Military,
        EriDimension::Political,
        EriDimension::Proxy,
        EriDimension::Economic,
        EriDimension::Diplomatic,
    ];

    fn name(self) -> &'static str {
        match self {
            EriDimension::Military => "military",
            EriDimension::Political => "political",
            EriDimension::Proxy => "proxy",
            EriDimension::Economic => "economic",
            EriDimension::Diplomatic => "diplomatic",
        }
    }
}

#[derive(Debug)]
pub struct WeightTable<D: 'static> {
    entries: &'static [(D, u32)],
}

impl<D: 'static> WeightTable<D> {
    pub const fn new(entries: &'static [(D, u32)]) -> Self {
        WeightTable { entries }
    }

    pub const fn total_hundredths(&self) -> u32 {
        let mut total = 0;
        let mut idx = 0;
        while idx < self.entries.len() {
            total += self.entries[idx].1;
            idx += 1;
        }
        total
    }
}

impl<D: Dimension> WeightTable<D> {
    pub fn hundredths(&self, dimension: D) -> u32 {
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == dimension)
            .map(|(_, weight)| *weight)
            .unwrap_or(0)
    }

    pub fn weight(&self, dimension: D) -> f64 {
        f64::from(self.hundredths(dimension)) / f64::from(WEIGHT_SCALE)
    }

    pub fn iter(&self) -> impl Iterator<Item = (D, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn family(&self) -> Family {
        D::FAMILY
    }
}

pub const RISK_WEIGHTS: WeightTable<RiskDimension> = WeightTable::new(&[
    (RiskDimension::Legal, 30),
    (RiskDimension::Defamation, 30),
    (RiskDimension::Platform, 20),
    (RiskDimension::Political, 20),
]);

pub const ERI_WEIGHTS: WeightTable<EriDimension> = WeightTable::new(&[
    (EriDimension::Military, 30),
    (EriDimension::Political, 15),
    (EriDimension::Proxy, 20),
    (EriDimension::Economic, 15),
    (EriDimension::Diplomatic, 20),
]);

const _: () = assert!(RISK_WEIGHTS.total_hundredths() == WEIGHT_SCALE);
const _: () = assert!(ERI_WEIGHTS.total_hundredths() == WEIGHT_SCALE);

/// Clamp any integer into the 0..=100 score range.
pub fn clamp_score(value: i64) -> u8 {
    value.clamp(0, i64::from(MAX_SCORE)) as u8
}

/// Per-dimension scores for one family. Every dimension is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DimensionScores<D: Dimension> {
    scores: BTreeMap<D, u8>,
}

impl<D: Dimension> DimensionScores<D> {
    pub fn zeroed() -> Self {
        DimensionScores {
            scores: D::ALL.iter().map(|dimension| (*dimension, 0)).collect(),
        }
    }

    /// Out-of-range values are clamped, dimensions left out are zero.
    pub fn from_raw<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (D, i64)>,
    {
        let mut scores = Self::zeroed();
        for (dimension, value) in values {
            scores.set(dimension, value);
        }
        scores
    }

    pub fn get(&self, dimension: D) -> u8 {
        self.scores.get(&dimension).copied().unwrap_or(0)
    }

    /// Stores the clamped value and returns it.
    pub fn set(&mut self, dimension: D, value: i64) -> u8 {
        let clamped = clamp_score(value);
        if i64::from(clamped) != value {
            log::warn!(
                "{} score {} outside 0..=100, clamped to {}",
                dimension.name(),
                value,
                clamped
            );
        }
        self.scores.insert(dimension, clamped);
        clamped
    }

    pub fn iter(&self) -> impl Iterator<Item = (D, u8)> + '_ {
        self.scores.iter().map(|(dimension, score)| (*dimension, *score))
    }
}

impl<D: Dimension> Default for DimensionScores<D> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<'de, D> Deserialize<'de> for DimensionScores<D>
where
    D: Dimension + Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let raw = BTreeMap::<D, i64>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

/// `round(sum(score * weight))` with ties resolved half-to-even.
pub fn aggregate<D: Dimension>(scores: &DimensionScores<D>, weights: &WeightTable<D>) -> u8 {
    let weighted: u32 = weights
        .iter()
        .map(|(dimension, weight)| u32::from(scores.get(dimension)) * weight)
        .sum();
    let rounded = round_half_even(weighted, WEIGHT_SCALE);
    rounded.min(u32::from(MAX_SCORE)) as u8
}

pub(crate) fn round_half_even(numerator: u32, denominator: u32) -> u32 {
    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
