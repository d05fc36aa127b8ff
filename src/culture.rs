//! Culture-type classification from collective trait means.
//!
//! Rules are evaluated in order and the first match wins; a group matching
//! none of them is `Balanced`.

use crate::core::TraitScores;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CultureType {
    Innovation,
    Performance,
    Collaborative,
    Adaptive,
    Balanced,
}

impl CultureType {
    pub fn label(self) -> &'static str {
        match self {
            CultureType::Innovation => "innovation",
            CultureType::Performance => "performance",
            CultureType::Collaborative => "collaborative",
            CultureType::Adaptive => "adaptive",
            CultureType::Balanced => "balanced",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CultureType::Innovation => {
                "Curious and outward-facing: the group favors experimentation, new ideas \
                 and open debate over established routine."
            }
            CultureType::Performance => {
                "Disciplined and results-driven: the group values reliability, planning \
                 and consistent delivery against commitments."
            }
            CultureType::Collaborative => {
                "Cooperative and supportive: the group prioritizes trust, harmony and \
                 shared ownership of outcomes."
            }
            CultureType::Adaptive => {
                "Flexible and receptive: the group adjusts comfortably to change while \
                 keeping working relationships intact."
            }
            CultureType::Balanced => {
                "Balanced: no single trait dominates, so the group's character depends on \
                 context and leadership rather than a strong collective tendency."
            }
        }
    }
}

impl fmt::Display for CultureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

struct CultureRule {
    culture: CultureType,
    matches: fn(&TraitScores) -> bool,
}

fn innovation(m: &TraitScores) -> bool {
    m.openness > 3.5 && m.extraversion >= 3.0
}

fn performance(m: &TraitScores) -> bool {
    m.conscientiousness > 3.5
}

fn collaborative(m: &TraitScores) -> bool {
    m.agreeableness > 3.5
}

fn adaptive(m: &TraitScores) -> bool {
    m.openness >= 3.0 && m.agreeableness >= 3.0
}

const CULTURE_RULES: &[CultureRule] = &[
    CultureRule {
        culture: CultureType::Innovation,
        matches: innovation,
    },
    CultureRule {
        culture: CultureType::Performance,
        matches: performance,
    },
    CultureRule {
        culture: CultureType::Collaborative,
        matches: collaborative,
    },
    CultureRule {
        culture: CultureType::Adaptive,
        matches: adaptive,
    },
];

pub fn classify(mean_traits: &TraitScores) -> CultureType {
    CULTURE_RULES
        .iter()
        .find(|rule| (rule.matches)(mean_traits))
        .map(|rule| rule.culture)
        .unwrap_or(CultureType::Balanced)
}
