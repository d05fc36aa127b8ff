//! Executive-to-organization fit.
//!
//! Alignment on a trait is `1 - |executive - org| / 5`: 1.0 for a perfect
//! match, falling linearly with distance. The overall fit is the mean of the
//! five alignments. Complementary fit looks the other way: where does the
//! executive bring a strength the organization lacks?

use crate::config::{DomainPolicy, TraitmapConfig};
use crate::core::{Error, Result, Trait, TraitProfile, TraitScores, MAX_TRAIT_SCORE};
use crate::scoring::{diversity, stats, Score0To1};
use crate::validation::validate_profiles;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

/// Alignment below which a trait difference earns a recommendation.
const WEAK_ALIGNMENT: f64 = 0.7;
const GAP_CUTOFF: f64 = 3.0;
const STRENGTH_CUTOFF: f64 = 3.5;
const NEUROTICISM_STRENGTH_CUTOFF: f64 = 2.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplementaryFit {
    /// Organizational gaps the executive is strong on
    pub strengths_added: Vec<Trait>,
    /// Organizational gaps the executive shares
    pub shared_weaknesses: Vec<Trait>,
    /// Share of organizational gaps covered; absent when there are none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complementarity_score: Option<Score0To1>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveOrgFit {
    pub trait_alignment: TraitScores,
    pub complementary_fit: ComplementaryFit,
    pub overall_fit_score: Score0To1,
    pub recommendations: Vec<String>,
}

pub fn alignment(a: f64, b: f64) -> f64 {
    1.0 - (a - b).abs() / MAX_TRAIT_SCORE
}

/// Per-trait alignment between a profile and a target trait record.
pub fn trait_alignment(profile: &TraitProfile, target: &TraitScores) -> TraitScores {
    TraitScores::from_fn(|t| alignment(profile.get(t), target.get(t)))
}

fn is_gap(t: Trait, value: f64) -> bool {
    if t.is_positive() {
        value < GAP_CUTOFF
    } else {
        value > GAP_CUTOFF
    }
}

fn is_strength(t: Trait, value: f64) -> bool {
    if t.is_positive() {
        value > STRENGTH_CUTOFF
    } else {
        value < NEUROTICISM_STRENGTH_CUTOFF
    }
}

fn tension_area(t: Trait) -> &'static str {
    match t {
        Trait::Openness => "appetite for change and new ideas",
        Trait::Conscientiousness => "planning, structure and follow-through",
        Trait::Extraversion => "communication style and visibility",
        Trait::Agreeableness => "how disagreement is handled",
        Trait::Neuroticism => "reactions to pressure and setbacks",
    }
}

fn complementary_fit(executive: &TraitProfile, org: &TraitScores) -> ComplementaryFit {
    let gaps: Vec<Trait> = Trait::ALL
        .into_iter()
        .filter(|&t| is_gap(t, org.get(t)))
        .collect();

    let strengths_added: Vec<Trait> = gaps
        .iter()
        .copied()
        .filter(|&t| is_strength(t, executive.get(t)))
        .collect();
    let shared_weaknesses: Vec<Trait> = gaps
        .iter()
        .copied()
        .filter(|&t| is_gap(t, executive.get(t)))
        .collect();

    let complementarity_score = (!gaps.is_empty())
        .then(|| Score0To1::new(strengths_added.len() as f64 / gaps.len() as f64));

    ComplementaryFit {
        strengths_added,
        shared_weaknesses,
        complementarity_score,
    }
}

fn fit_recommendations(
    executive: &TraitProfile,
    org: &TraitScores,
    alignment: &TraitScores,
    complementary: &ComplementaryFit,
) -> Vec<String> {
    let mut recommendations: Vec<String> = alignment
        .iter()
        .filter(|(_, a)| *a < WEAK_ALIGNMENT)
        .map(|(t, _)| {
            format!(
                "Large {} gap (executive {:.1}, organization {:.1}): align expectations on {}",
                t,
                executive.get(t),
                org.get(t),
                tension_area(t)
            )
        })
        .collect();

    recommendations.extend(complementary.strengths_added.iter().map(|&t| {
        format!(
            "Executive {} ({:.1}) covers an organizational gap ({:.1}); give them ownership of initiatives that depend on it",
            t,
            executive.get(t),
            org.get(t)
        )
    }));

    recommendations.extend(complementary.shared_weaknesses.iter().map(|&t| {
        format!(
            "Executive shares the organization's {} gap; offset it with complementary hires or advisors",
            t
        )
    }));

    if recommendations.is_empty() {
        recommendations.push(
            "Executive profile is closely aligned with the organization; no adjustments needed"
                .to_string(),
        );
    }
    recommendations
}

fn evaluate(executive: &TraitProfile, org_traits: &TraitScores) -> ExecutiveOrgFit {
    let trait_alignment = trait_alignment(executive, org_traits);
    let complementary_fit = complementary_fit(executive, org_traits);
    let recommendations =
        fit_recommendations(executive, org_traits, &trait_alignment, &complementary_fit);

    ExecutiveOrgFit {
        overall_fit_score: Score0To1::new(trait_alignment.average()),
        trait_alignment,
        complementary_fit,
        recommendations,
    }
}

/// Scores an executive against an organization after checking both sides
/// against the trait domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutiveFitScorer {
    policy: DomainPolicy,
}

impl ExecutiveFitScorer {
    pub fn new(policy: DomainPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &TraitmapConfig) -> Self {
        Self::new(config.validation.out_of_domain)
    }

    fn validated(&self, profile: &TraitProfile, what: &str) -> Result<TraitProfile> {
        let validated = validate_profiles(std::slice::from_ref(profile), self.policy)
            .map_err(|e| match e {
                Error::InvalidInput(message) => Error::invalid_input(format!("{what} {message}")),
                other => other,
            })?;
        Ok(validated[0])
    }

    /// Fit against an organizational mean trait record.
    pub fn score(
        &self,
        executive: &TraitProfile,
        org_traits: &TraitScores,
    ) -> Result<ExecutiveOrgFit> {
        let executive = self.validated(executive, "executive")?;
        let org = self.validated(&TraitProfile::from_fn(|t| org_traits.get(t)), "organization")?;
        Ok(evaluate(&executive, &org.scores()))
    }

    /// Fit against the mean of a population of profiles.
    pub fn score_against_population(
        &self,
        executive: &TraitProfile,
        population: &[TraitProfile],
    ) -> Result<ExecutiveOrgFit> {
        let _span = debug_span!("executive_fit", population = population.len()).entered();

        let executive = self.validated(executive, "executive")?;
        let population = validate_profiles(population, self.policy)?;
        let org_traits = diversity::means(&population)?;
        let fit = evaluate(&executive, &org_traits);

        debug!(overall = fit.overall_fit_score.value(), "executive fit scored");
        Ok(fit)
    }

    /// Percentile of each executive trait within the population.
    pub fn standing(
        &self,
        executive: &TraitProfile,
        population: &[TraitProfile],
    ) -> Result<TraitScores> {
        let executive = self.validated(executive, "executive")?;
        let population = validate_profiles(population, self.policy)?;
        TraitScores::try_from_fn(|t| {
            let values: Vec<f64> = population.iter().map(|p| p.get(t)).collect();
            stats::percentile(executive.get(t), &values)
        })
    }
}
