//! Team composition analysis.
//!
//! A team is analyzed like a small organization, with team-scale risk
//! thresholds, plus two team-specific views: how well each member fits an
//! assigned role, and which trait profile the next hire should bring.

pub mod additions;
pub mod roles;

pub use additions::{optimal_additions, OptimalAddition, TraitGap};
pub use roles::{role_fit, RoleAssignment, RoleFit, RoleLibrary};

use crate::config::{DomainPolicy, RiskThresholds, TraitmapConfig};
use crate::core::{CollectiveProfile, Error, Result, TraitProfile};
use crate::recommendations::{self, RecommendationContext, RecommendationPlan};
use crate::risk::{RiskFactor, RiskIdentifier};
use crate::scoring::{composite, diversity, DynamicPredictions};
use crate::validation::validate_profiles;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, debug_span};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComposition {
    pub collective: CollectiveProfile,
    pub role_fit_scores: BTreeMap<usize, RoleFit>,
    pub dynamic_predictions: DynamicPredictions,
    pub optimal_additions: OptimalAddition,
    pub risks: Vec<RiskFactor>,
    pub recommendations: RecommendationPlan,
}

#[derive(Debug, Clone)]
pub struct TeamCompositionAnalyzer {
    policy: DomainPolicy,
    risks: RiskIdentifier,
    roles: RoleLibrary,
}

impl Default for TeamCompositionAnalyzer {
    fn default() -> Self {
        Self::new(
            DomainPolicy::default(),
            RiskThresholds::team(),
            RoleLibrary::builtin(),
        )
    }
}

impl TeamCompositionAnalyzer {
    pub fn new(policy: DomainPolicy, thresholds: RiskThresholds, roles: RoleLibrary) -> Self {
        Self {
            policy,
            risks: RiskIdentifier::new(thresholds),
            roles,
        }
    }

    pub fn from_config(config: &TraitmapConfig) -> Self {
        Self::new(
            config.validation.out_of_domain,
            config.thresholds.team(),
            RoleLibrary::builtin().with_roles(&config.roles),
        )
    }

    pub fn roles(&self) -> &RoleLibrary {
        &self.roles
    }

    pub fn analyze(
        &self,
        members: &[TraitProfile],
        role_assignments: Option<&[RoleAssignment]>,
    ) -> Result<TeamComposition> {
        let _span = debug_span!("team_composition", members = members.len()).entered();

        if members.is_empty() {
            return Err(Error::invalid_input(
                "a team composition needs at least one member",
            ));
        }
        let members = validate_profiles(members, self.policy)?;

        let role_fit_scores = match role_assignments {
            Some(assignments) => roles::score_assignments(&members, assignments, &self.roles)?,
            None => BTreeMap::new(),
        };

        let collective = diversity::collective(&members)?;
        let dynamic_predictions = composite::score(&collective);
        let optimal_additions = optimal_additions(&collective);
        let risks = self.risks.identify(&collective);
        let recommendations = recommendations::generate(&RecommendationContext {
            collective: &collective,
            scores: &dynamic_predictions,
            risks: &risks,
        });

        debug!(
            role_fits = role_fit_scores.len(),
            gaps = optimal_additions.gaps.len(),
            risks = risks.len(),
            "Team composition analyzed"
        );

        Ok(TeamComposition {
            collective,
            role_fit_scores,
            dynamic_predictions,
            optimal_additions,
            risks,
            recommendations,
        })
    }
}
