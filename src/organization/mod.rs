//! Organizational profile construction.
//!
//! [`OrganizationalProfileBuilder`] turns the individual profiles of an
//! organization into one [`OrganizationalProfile`]: collective traits,
//! culture type, composite and health metrics, emergent properties, risks
//! and recommendations. An optional [`InteractionMatrix`] refines the
//! emergent properties; without one the builder works from the aggregate
//! traits alone.

pub mod emergent;
pub mod health;
pub mod interaction;
pub mod trend;

pub use emergent::{DecisionMakingStyle, EmergentProperties};
pub use health::HealthMetrics;
pub use interaction::{InteractionMatrix, InteractionSummary};
pub use trend::{compare, ProfileTrend, TrendDirection};

use crate::config::{DomainPolicy, RiskThresholds, TraitmapConfig};
use crate::core::{CollectiveProfile, Error, Result, TraitProfile};
use crate::culture::{self, CultureType};
use crate::recommendations::{self, RecommendationContext, RecommendationPlan};
use crate::risk::{RiskFactor, RiskIdentifier};
use crate::scoring::{composite, diversity, CompositeScores};
use crate::validation::validate_profiles;
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationalProfile {
    pub collective: CollectiveProfile,
    pub culture_type: CultureType,
    pub culture_description: String,
    pub composite_scores: CompositeScores,
    pub health_metrics: HealthMetrics,
    pub emergent_properties: EmergentProperties,
    pub risks: Vec<RiskFactor>,
    pub recommendations: RecommendationPlan,
}

#[derive(Debug, Clone)]
pub struct OrganizationalProfileBuilder {
    policy: DomainPolicy,
    risks: RiskIdentifier,
}

impl Default for OrganizationalProfileBuilder {
    fn default() -> Self {
        Self::new(DomainPolicy::default(), RiskThresholds::organization())
    }
}

impl OrganizationalProfileBuilder {
    pub fn new(policy: DomainPolicy, thresholds: RiskThresholds) -> Self {
        Self {
            policy,
            risks: RiskIdentifier::new(thresholds),
        }
    }

    pub fn from_config(config: &TraitmapConfig) -> Self {
        Self::new(
            config.validation.out_of_domain,
            config.thresholds.organization(),
        )
    }

    pub fn build(
        &self,
        individual_profiles: &[TraitProfile],
        interaction_matrix: Option<&InteractionMatrix>,
    ) -> Result<OrganizationalProfile> {
        let _span = debug_span!("organizational_profile", profiles = individual_profiles.len())
            .entered();

        if individual_profiles.is_empty() {
            return Err(Error::invalid_input(
                "an organizational profile needs at least one individual profile",
            ));
        }
        let profiles = validate_profiles(individual_profiles, self.policy)?;

        let interaction = match interaction_matrix {
            Some(matrix) => {
                matrix.validate(profiles.len())?;
                Some(matrix.summarize())
            }
            None => None,
        };

        let collective = diversity::collective(&profiles)?;
        let culture_type = culture::classify(&collective.mean_traits);
        let composite_scores = composite::score(&collective);
        let health_metrics = health::assess(&collective);
        let emergent_properties = emergent::derive(&collective, &composite_scores, interaction);
        let risks = self.risks.identify(&collective);
        let recommendations = recommendations::generate(&RecommendationContext {
            collective: &collective,
            scores: &composite_scores,
            risks: &risks,
        });

        debug!(
            culture = %culture_type,
            risks = risks.len(),
            recommendations = recommendations.len(),
            "Organizational profile built"
        );

        Ok(OrganizationalProfile {
            collective,
            culture_type,
            culture_description: culture_type.description().to_string(),
            composite_scores,
            health_metrics,
            emergent_properties,
            risks,
            recommendations,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profiles() -> Vec<TraitProfile> {
        vec![
            TraitProfile::new(4.0, 4.0, 3.0, 4.0, 2.0),
            TraitProfile::new(3.0, 3.0, 3.0, 3.0, 3.0),
            TraitProfile::new(5.0, 2.0, 4.0, 2.0, 4.0),
        ]
    }

    #[test]
    fn empty_input_is_invalid() {
        let err = OrganizationalProfileBuilder::default()
            .build(&[], None)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn out_of_domain_profile_is_rejected_by_default() {
        let mut input = profiles();
        input.push(TraitProfile::new(3.0, 3.0, 3.0, 3.0, 9.0));
        let err = OrganizationalProfileBuilder::default()
            .build(&input, None)
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn clamp_policy_accepts_out_of_domain_profile() {
        let mut input = profiles();
        input.push(TraitProfile::new(3.0, 3.0, 3.0, 3.0, 9.0));
        let builder =
            OrganizationalProfileBuilder::new(DomainPolicy::Clamp, RiskThresholds::organization());
        let profile = builder.build(&input, None).unwrap();
        assert!(profile.collective.mean_traits.neuroticism <= 5.0);
        assert_eq!(profile.collective.sample_size, 4);
    }

    #[test]
    fn matrix_must_match_profile_count() {
        let matrix = InteractionMatrix::new(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        let err = OrganizationalProfileBuilder::default()
            .build(&profiles(), Some(&matrix))
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn matrix_adds_interaction_summary() {
        let matrix = InteractionMatrix::new(vec![
            vec![0.0, 0.5, 0.5],
            vec![0.5, 0.0, 0.5],
            vec![0.5, 0.5, 0.0],
        ]);
        let builder = OrganizationalProfileBuilder::default();
        let with = builder.build(&profiles(), Some(&matrix)).unwrap();
        let without = builder.build(&profiles(), None).unwrap();

        let summary = with.emergent_properties.interaction.as_ref().unwrap();
        assert_eq!(summary.density, 0.5);
        assert!(
            with.emergent_properties.collaboration_strength
                < without.emergent_properties.collaboration_strength
        );
        assert_eq!(with.collective, without.collective);
        assert_eq!(with.health_metrics, without.health_metrics);
    }

    #[test]
    fn culture_description_matches_type() {
        let profile = OrganizationalProfileBuilder::default()
            .build(&profiles(), None)
            .unwrap();
        assert_eq!(profile.culture_description, profile.culture_type.description());
    }
}
