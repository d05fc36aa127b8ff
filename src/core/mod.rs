//! Core trait data model.
//!
//! Every analysis in this crate starts from a slice of [`TraitProfile`]s, one
//! per assessed individual, and produces records built from [`TraitScores`].

pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use errors::{Error, Result, ResultExt};

/// Lowest score an assessment can produce for a trait.
pub const MIN_TRAIT_SCORE: f64 = 1.0;
/// Highest score an assessment can produce for a trait.
pub const MAX_TRAIT_SCORE: f64 = 5.0;

/// One of the five OCEAN personality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl Trait {
    /// All traits in canonical O, C, E, A, N order.
    pub const ALL: [Trait; 5] = [
        Trait::Openness,
        Trait::Conscientiousness,
        Trait::Extraversion,
        Trait::Agreeableness,
        Trait::Neuroticism,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Trait::Openness => "openness",
            Trait::Conscientiousness => "conscientiousness",
            Trait::Extraversion => "extraversion",
            Trait::Agreeableness => "agreeableness",
            Trait::Neuroticism => "neuroticism",
        }
    }

    /// Whether a higher score is the desirable direction.
    ///
    /// Neuroticism is the only trait where lower is better.
    pub fn is_positive(self) -> bool {
        !matches!(self, Trait::Neuroticism)
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One individual's assessed personality, each field in [1.0, 5.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitProfile {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl TraitProfile {
    pub fn new(
        openness: f64,
        conscientiousness: f64,
        extraversion: f64,
        agreeableness: f64,
        neuroticism: f64,
    ) -> Self {
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        }
    }

    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    /// Build a profile by evaluating `f` once per trait.
    pub fn from_fn(mut f: impl FnMut(Trait) -> f64) -> Self {
        Self::new(
            f(Trait::Openness),
            f(Trait::Conscientiousness),
            f(Trait::Extraversion),
            f(Trait::Agreeableness),
            f(Trait::Neuroticism),
        )
    }

    /// The first trait whose value is outside [1.0, 5.0] or not finite.
    pub fn first_out_of_domain(&self) -> Option<(Trait, f64)> {
        Trait::ALL
            .iter()
            .map(|&t| (t, self.get(t)))
            .find(|(_, v)| !is_in_domain(*v))
    }

    /// Copy of this profile with every finite value clamped into [1.0, 5.0].
    pub fn clamped(&self) -> Self {
        Self::from_fn(|t| self.get(t).clamp(MIN_TRAIT_SCORE, MAX_TRAIT_SCORE))
    }

    pub fn scores(&self) -> TraitScores {
        TraitScores::from_fn(|t| self.get(t))
    }
}

fn is_in_domain(value: f64) -> bool {
    value.is_finite() && (MIN_TRAIT_SCORE..=MAX_TRAIT_SCORE).contains(&value)
}

/// A value per trait: means, diversity indices, alignments or percentiles.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TraitScores {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

/// Per-trait dispersion (population variance) of a group.
pub type TraitDiversity = TraitScores;

impl TraitScores {
    pub fn from_fn(mut f: impl FnMut(Trait) -> f64) -> Self {
        Self {
            openness: f(Trait::Openness),
            conscientiousness: f(Trait::Conscientiousness),
            extraversion: f(Trait::Extraversion),
            agreeableness: f(Trait::Agreeableness),
            neuroticism: f(Trait::Neuroticism),
        }
    }

    /// Fallible variant of [`TraitScores::from_fn`], stopping at the first error.
    pub fn try_from_fn<E>(
        mut f: impl FnMut(Trait) -> std::result::Result<f64, E>,
    ) -> std::result::Result<Self, E> {
        Ok(Self {
            openness: f(Trait::Openness)?,
            conscientiousness: f(Trait::Conscientiousness)?,
            extraversion: f(Trait::Extraversion)?,
            agreeableness: f(Trait::Agreeableness)?,
            neuroticism: f(Trait::Neuroticism)?,
        })
    }

    pub fn get(&self, t: Trait) -> f64 {
        match t {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, f64)> + '_ {
        Trait::ALL.iter().map(move |&t| (t, self.get(t)))
    }

    pub fn average(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum::<f64>() / Trait::ALL.len() as f64
    }
}

impl From<TraitProfile> for TraitScores {
    fn from(profile: TraitProfile) -> Self {
        profile.scores()
    }
}

impl From<&TraitProfile> for TraitScores {
    fn from(profile: &TraitProfile) -> Self {
        profile.scores()
    }
}

/// Aggregate of a group of trait profiles.
///
/// `sample_size` always equals the number of profiles aggregated, and every
/// mean lies within [1.0, 5.0] because it averages in-domain inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveProfile {
    pub mean_traits: TraitScores,
    pub trait_diversity: TraitDiversity,
    pub sample_size: usize,
}

/// Urgency attached to recommendations and gap-closing targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_order_is_ocean() {
        let names: Vec<_> = Trait::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec![
                "openness",
                "conscientiousness",
                "extraversion",
                "agreeableness",
                "neuroticism"
            ]
        );
    }

    #[test]
    fn only_neuroticism_is_negative() {
        let negatives: Vec<_> = Trait::ALL.iter().filter(|t| !t.is_positive()).collect();
        assert_eq!(negatives, vec![&Trait::Neuroticism]);
    }

    #[test]
    fn first_out_of_domain_reports_offending_trait() {
        let profile = TraitProfile::new(3.0, 5.5, 3.0, 0.5, 3.0);
        assert_eq!(
            profile.first_out_of_domain(),
            Some((Trait::Conscientiousness, 5.5))
        );
    }

    #[test]
    fn nan_is_out_of_domain() {
        let profile = TraitProfile::new(3.0, 3.0, f64::NAN, 3.0, 3.0);
        let (t, _) = profile.first_out_of_domain().unwrap();
        assert_eq!(t, Trait::Extraversion);
    }

    #[test]
    fn clamped_pulls_values_into_domain() {
        let profile = TraitProfile::new(0.0, 6.0, 3.0, 1.0, 5.0).clamped();
        assert_eq!(profile, TraitProfile::new(1.0, 5.0, 3.0, 1.0, 5.0));
    }

    #[test]
    fn trait_scores_serialize_with_trait_names() {
        let scores = TraitScores::from_fn(|_| 2.0);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["agreeableness"], 2.0);
    }

    #[test]
    fn collective_profile_uses_camel_case() {
        let collective = CollectiveProfile {
            mean_traits: TraitScores::default(),
            trait_diversity: TraitScores::default(),
            sample_size: 1,
        };
        let json = serde_json::to_value(&collective).unwrap();
        assert!(json.get("meanTraits").is_some());
        assert!(json.get("traitDiversity").is_some());
        assert_eq!(json["sampleSize"], 1);
    }
}
