//! Group-level properties that no single profile exhibits.

use super::interaction::InteractionSummary;
use crate::core::{CollectiveProfile, TraitScores};
use crate::scoring::composite::level;
use crate::scoring::{CompositeScores, Score0To100};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionMakingStyle {
    /// Careful weighing of options, no dominant tendency
    Deliberative,
    /// Decisions sought through agreement
    Consensus,
    /// A few assertive voices decide
    Directive,
    /// Options are generated and tried freely
    Exploratory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergentProperties {
    pub collective_intelligence: Score0To100,
    pub decision_making_style: DecisionMakingStyle,
    pub change_readiness: Score0To100,
    pub collaboration_strength: Score0To100,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<InteractionSummary>,
}

pub fn decision_making_style(m: &TraitScores) -> DecisionMakingStyle {
    if m.openness > 3.5 {
        DecisionMakingStyle::Exploratory
    } else if m.extraversion > 3.5 && m.agreeableness < 3.0 {
        DecisionMakingStyle::Directive
    } else if m.agreeableness > 3.5 {
        DecisionMakingStyle::Consensus
    } else {
        DecisionMakingStyle::Deliberative
    }
}

pub fn derive(
    collective: &CollectiveProfile,
    scores: &CompositeScores,
    interaction: Option<InteractionSummary>,
) -> EmergentProperties {
    let m = &collective.mean_traits;

    let collective_intelligence = Score0To100::from_fraction(
        level(m.openness) * 0.4 + level(m.conscientiousness) * 0.3 + level(m.agreeableness) * 0.3,
    );

    // observed interaction density scales cohesion between half and full strength
    let collaboration_strength = match &interaction {
        Some(summary) => {
            Score0To100::new(scores.cohesion_index.value() * (0.5 + 0.5 * summary.density))
        }
        None => scores.cohesion_index,
    };

    EmergentProperties {
        collective_intelligence,
        decision_making_style: decision_making_style(m),
        change_readiness: scores.adaptability_score,
        collaboration_strength,
        interaction,
    }
}
