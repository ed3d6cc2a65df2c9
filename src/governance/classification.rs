use std::fmt;

use serde::{Deserialize, Serialize};

use super::dimensions::Family;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Classification {
    Low,
    Moderate,
    Elevated,
    High,
    Critical,
}

impl Classification {
    pub const ALL: [Classification; 5] = [
        Classification::Low,
        Classification::Moderate,
        Classification::Elevated,
        Classification::High,
        Classification::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Low => "Low",
            Classification::Moderate => "Moderate",
            Classification::Elevated => "Elevated",
            Classification::High => "High",
            Classification::Critical => "Critical",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Band an overall score.
///
/// Risk bands use inclusive upper bounds (20 is still Low) while ERI bands use
/// strict ones (20 is already Moderate).
pub fn classify(overall: u8, family: Family) -> Classification {
    match family {
        Family::Risk => classify_risk(overall),
        Family::Eri => classify_eri(overall),
    }
}

fn classify_risk(overall: u8) -> Classification {
    match overall {
        0..=20 => Classification::Low,
        21..=40 => Classification::Moderate,
        41..=60 => Classification::Elevated,
        61..=80 => Classification::High,
        _ => Classification::Critical,
    }
}

fn classify_eri(overall: u8) -> Classification {
    match overall {
        0..=19 => Classification::Low,
        20..=39 => Classification::Moderate,
        40..=59 => Classification::Elevated,
        60..=79 => Classification::High,
        _ => Classification::Critical,
    }
}
