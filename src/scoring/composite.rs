//! Composite team-dynamics indices.
//!
//! Each index is a fixed weighted sum of normalized trait means (mean / 5)
//! and, for some indices, a diversity term. The weights are fixed.
//!
//! ```text
//! cohesion      = (1 - A_var/2)*0.4 + (1 - N_var/2)*0.4 + (E/5)*0.2
//! innovation    = (O/5)*0.5 + min(O_var/1.5, 1)*0.3 + (E/5)*0.2
//! conflict      = ((5-A)/5)*0.3 + (A_var/2)*0.3 + (N/5)*0.2 + (N_var/2)*0.2
//! adaptability  = (O/5)*0.5 + ((5-N)/5)*0.3 + (E/5)*0.2
//! performance   = (C/5)*0.5 + (1 - C_var/2)*0.3 + ((5-N)/5)*0.2
//! communication = (E/5)*0.4 + (A/5)*0.4 + (O/5)*0.2
//! ```
//!
//! Every result is scaled to a percentage and clamped to [0, 100]; variance
//! terms can exceed their divisors for widely spread groups.

use super::score_types::Score0To100;
use crate::core::{CollectiveProfile, MAX_TRAIT_SCORE};
use serde::{Deserialize, Serialize};

/// Variance at which a stability term bottoms out.
const VARIANCE_SPAN: f64 = 2.0;
/// Openness variance treated as maximal creative spread.
const OPENNESS_SPREAD_CAP: f64 = 1.5;

/// Mean on the 0-1 scale, higher mean is higher level.
pub(crate) fn level(mean: f64) -> f64 {
    mean / MAX_TRAIT_SCORE
}

/// Mean on the 0-1 scale, inverted so a lower mean scores higher.
pub(crate) fn inverse_level(mean: f64) -> f64 {
    (MAX_TRAIT_SCORE - mean) / MAX_TRAIT_SCORE
}

/// How uniform a group is on a trait, 1.0 for no variance.
pub(crate) fn stability(variance: f64) -> f64 {
    1.0 - variance / VARIANCE_SPAN
}

pub(crate) fn spread(variance: f64) -> f64 {
    variance / VARIANCE_SPAN
}

pub(crate) fn openness_spread(variance: f64) -> f64 {
    (variance / OPENNESS_SPREAD_CAP).min(1.0)
}

/// The six derived dynamics of a group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeScores {
    pub cohesion_index: Score0To100,
    pub innovation_potential: Score0To100,
    pub conflict_probability: Score0To100,
    pub adaptability_score: Score0To100,
    pub performance_capability: Score0To100,
    pub communication_effectiveness: Score0To100,
}

/// Team-scale name for the same six predictions.
pub type DynamicPredictions = CompositeScores;

impl CompositeScores {
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Score0To100)> {
        [
            ("cohesionIndex", self.cohesion_index),
            ("innovationPotential", self.innovation_potential),
            ("conflictProbability", self.conflict_probability),
            ("adaptabilityScore", self.adaptability_score),
            ("performanceCapability", self.performance_capability),
            ("communicationEffectiveness", self.communication_effectiveness),
        ]
        .into_iter()
    }
}

pub fn score(collective: &CollectiveProfile) -> CompositeScores {
    CompositeScores {
        cohesion_index: cohesion_index(collective),
        innovation_potential: innovation_potential(collective),
        conflict_probability: conflict_probability(collective),
        adaptability_score: adaptability_score(collective),
        performance_capability: performance_capability(collective),
        communication_effectiveness: communication_effectiveness(collective),
    }
}

pub fn cohesion_index(c: &CollectiveProfile) -> Score0To100 {
    let (m, d) = (&c.mean_traits, &c.trait_diversity);
    Score0To100::from_fraction(
        stability(d.agreeableness) * 0.4
            + stability(d.neuroticism) * 0.4
            + level(m.extraversion) * 0.2,
    )
}

pub fn innovation_potential(c: &CollectiveProfile) -> Score0To100 {
    let (m, d) = (&c.mean_traits, &c.trait_diversity);
    Score0To100::from_fraction(
        level(m.openness) * 0.5 + openness_spread(d.openness) * 0.3 + level(m.extraversion) * 0.2,
    )
}

pub fn conflict_probability(c: &CollectiveProfile) -> Score0To100 {
    let (m, d) = (&c.mean_traits, &c.trait_diversity);
    Score0To100::from_fraction(
        inverse_level(m.agreeableness) * 0.3
            + spread(d.agreeableness) * 0.3
            + level(m.neuroticism) * 0.2
            + spread(d.neuroticism) * 0.2,
    )
}

pub fn adaptability_score(c: &CollectiveProfile) -> Score0To100 {
    let m = &c.mean_traits;
    Score0To100::from_fraction(
        level(m.openness) * 0.5 + inverse_level(m.neuroticism) * 0.3 + level(m.extraversion) * 0.2,
    )
}

pub fn performance_capability(c: &CollectiveProfile) -> Score0To100 {
    let (m, d) = (&c.mean_traits, &c.trait_diversity);
    Score0To100::from_fraction(
        level(m.conscientiousness) * 0.5
            + stability(d.conscientiousness) * 0.3
            + inverse_level(m.neuroticism) * 0.2,
    )
}

pub fn communication_effectiveness(c: &CollectiveProfile) -> Score0To100 {
    let m = &c.mean_traits;
    Score0To100::from_fraction(
        level(m.extraversion) * 0.4 + level(m.agreeableness) * 0.4 + level(m.openness) * 0.2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TraitScores;

    fn collective(mean: [f64; 5], diversity: [f64; 5]) -> CollectiveProfile {
        let to_scores = |v: [f64; 5]| TraitScores {
            openness: v[0],
            conscientiousness: v[1],
            extraversion: v[2],
            agreeableness: v[3],
            neuroticism: v[4],
        };
        CollectiveProfile {
            mean_traits: to_scores(mean),
            trait_diversity: to_scores(diversity),
            sample_size: 4,
        }
    }

    fn approx(a: Score0To100, b: f64) -> bool {
        (a.value() - b).abs() < 1e-9
    }

    #[test]
    fn uniform_midpoint_team() {
        let c = collective([3.0; 5], [0.0; 5]);
        let scores = score(&c);
        // 0.4 + 0.4 + 0.6*0.2
        assert!(approx(scores.cohesion_index, 92.0));
        // 0.6*0.5 + 0 + 0.6*0.2
        assert!(approx(scores.innovation_potential, 42.0));
        // 0.4*0.3 + 0 + 0.6*0.2 + 0
        assert!(approx(scores.conflict_probability, 24.0));
        // 0.6*0.5 + 0.4*0.3 + 0.6*0.2
        assert!(approx(scores.adaptability_score, 54.0));
        // 0.6*0.5 + 0.3 + 0.4*0.2
        assert!(approx(scores.performance_capability, 68.0));
        assert!(approx(scores.communication_effectiveness, 60.0));
    }

    #[test]
    fn openness_spread_is_capped() {
        let narrow = collective([3.0; 5], [1.5, 0.0, 0.0, 0.0, 0.0]);
        let wide = collective([3.0; 5], [4.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(
            innovation_potential(&narrow),
            innovation_potential(&wide)
        );
    }

    #[test]
    fn extreme_variance_is_clamped() {
        let c = collective([1.0, 1.0, 1.0, 1.0, 5.0], [4.0; 5]);
        let scores = score(&c);
        assert_eq!(scores.cohesion_index.value(), 0.0);
        assert_eq!(scores.conflict_probability.value(), 100.0);
        assert_eq!(scores.performance_capability.value(), 0.0);
    }

    #[test]
    fn scores_serialize_camel_case() {
        let json = serde_json::to_value(score(&collective([3.0; 5], [0.0; 5]))).unwrap();
        assert!(json.get("cohesionIndex").is_some());
        assert!(json.get("communicationEffectiveness").is_some());
    }
}
