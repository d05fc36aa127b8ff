//! Trait targets for the next hire.
//!
//! Any mean trait on the wrong side of its "good" cut point is a gap; the
//! target profile substitutes the gap's target value and uses the default
//! good value everywhere else.

use crate::core::{CollectiveProfile, Priority, Trait, TraitProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitGap {
    #[serde(rename = "trait")]
    pub trait_name: Trait,
    pub current_mean: f64,
    pub target: f64,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalAddition {
    pub target_profile: TraitProfile,
    pub gaps: Vec<TraitGap>,
}

struct GapRule {
    trait_name: Trait,
    is_gap: fn(f64) -> bool,
    target: f64,
    priority: Priority,
}

const GAP_RULES: &[GapRule] = &[
    GapRule {
        trait_name: Trait::Conscientiousness,
        is_gap: |mean| mean < 3.5,
        target: 4.0,
        priority: Priority::High,
    },
    GapRule {
        trait_name: Trait::Agreeableness,
        is_gap: |mean| mean < 3.0,
        target: 3.8,
        priority: Priority::High,
    },
    GapRule {
        trait_name: Trait::Neuroticism,
        is_gap: |mean| mean > 3.0,
        target: 2.0,
        priority: Priority::High,
    },
    GapRule {
        trait_name: Trait::Openness,
        is_gap: |mean| mean < 3.0,
        target: 4.0,
        priority: Priority::Medium,
    },
    GapRule {
        trait_name: Trait::Extraversion,
        is_gap: |mean| mean < 2.5,
        target: 3.5,
        priority: Priority::Medium,
    },
];

fn default_good_value(t: Trait) -> f64 {
    match t {
        Trait::Openness => 3.8,
        Trait::Conscientiousness => 4.0,
        Trait::Extraversion => 3.5,
        Trait::Agreeableness => 3.8,
        Trait::Neuroticism => 2.0,
    }
}

pub fn optimal_additions(collective: &CollectiveProfile) -> OptimalAddition {
    let gaps: Vec<TraitGap> = GAP_RULES
        .iter()
        .filter_map(|rule| {
            let current_mean = collective.mean_traits.get(rule.trait_name);
            (rule.is_gap)(current_mean).then(|| TraitGap {
                trait_name: rule.trait_name,
                current_mean,
                target: rule.target,
                priority: rule.priority,
            })
        })
        .collect();

    let target_profile = TraitProfile::from_fn(|t| {
        gaps.iter()
            .find(|gap| gap.trait_name == t)
            .map(|gap| gap.target)
            .unwrap_or_else(|| default_good_value(t))
    });

    OptimalAddition {
        target_profile,
        gaps,
    }
}
