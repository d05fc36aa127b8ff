//! Rule-based improvement recommendations.
//!
//! Each rule inspects the collective profile, the composite scores and the
//! identified risks, and contributes at most one recommendation to its
//! time-horizon bucket. Rules are independent; output follows table order.

use crate::core::{CollectiveProfile, Priority, Trait};
use crate::risk::{has_risk, RiskFactor, RiskKind};
use crate::scoring::CompositeScores;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Horizon {
    Immediate,
    ShortTerm,
    LongTerm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub area: String,
    pub priority: Priority,
    pub description: String,
    pub initiatives: Vec<String>,
    pub target_traits: Vec<Trait>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPlan {
    pub immediate: Vec<Recommendation>,
    pub short_term: Vec<Recommendation>,
    pub long_term: Vec<Recommendation>,
}

impl RecommendationPlan {
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.short_term.is_empty() && self.long_term.is_empty()
    }

    pub fn len(&self) -> usize {
        self.immediate.len() + self.short_term.len() + self.long_term.len()
    }

    pub fn all(&self) -> impl Iterator<Item = (Horizon, &Recommendation)> {
        self.immediate
            .iter()
            .map(|r| (Horizon::Immediate, r))
            .chain(self.short_term.iter().map(|r| (Horizon::ShortTerm, r)))
            .chain(self.long_term.iter().map(|r| (Horizon::LongTerm, r)))
    }

    fn bucket_mut(&mut self, horizon: Horizon) -> &mut Vec<Recommendation> {
        match horizon {
            Horizon::Immediate => &mut self.immediate,
            Horizon::ShortTerm => &mut self.short_term,
            Horizon::LongTerm => &mut self.long_term,
        }
    }
}

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationContext<'a> {
    pub collective: &'a CollectiveProfile,
    pub scores: &'a CompositeScores,
    pub risks: &'a [RiskFactor],
}

struct RecommendationRule {
    horizon: Horizon,
    area: &'static str,
    priority: Priority,
    applies: fn(&RecommendationContext<'_>) -> bool,
    description: &'static str,
    initiatives: &'static [&'static str],
    target_traits: &'static [Trait],
}

const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        horizon: Horizon::Immediate,
        area: "conflict_management",
        priority: Priority::High,
        applies: |ctx| ctx.scores.conflict_probability.value() > 60.0,
        description: "Conflict probability is high; address friction before it hardens into lasting disputes.",
        initiatives: &[
            "Agree explicit norms for disagreement and decision escalation",
            "Run facilitated retrospectives on recent points of friction",
            "Offer conflict-resolution coaching to team leads",
        ],
        target_traits: &[Trait::Agreeableness, Trait::Neuroticism],
    },
    RecommendationRule {
        horizon: Horizon::Immediate,
        area: "team_cohesion",
        priority: Priority::High,
        applies: |ctx| ctx.scores.cohesion_index.value() < 50.0,
        description: "Cohesion is low; members are unlikely to pull in the same direction under pressure.",
        initiatives: &[
            "Establish a shared team charter with common goals",
            "Create regular cross-member pairing on core work",
            "Schedule structured team-building sessions",
        ],
        target_traits: &[Trait::Agreeableness, Trait::Extraversion],
    },
    RecommendationRule {
        horizon: Horizon::Immediate,
        area: "emotional_wellbeing",
        priority: Priority::High,
        applies: |ctx| has_risk(ctx.risks, RiskKind::EmotionalInstability),
        description: "Elevated collective neuroticism signals stress that can erode performance and retention.",
        initiatives: &[
            "Review workload and deadline pressure with managers",
            "Promote access to wellbeing and stress-management resources",
            "Introduce predictable planning cadences to reduce uncertainty",
        ],
        target_traits: &[Trait::Neuroticism],
    },
    RecommendationRule {
        horizon: Horizon::ShortTerm,
        area: "communication",
        priority: Priority::Medium,
        applies: |ctx| ctx.scores.communication_effectiveness.value() < 60.0,
        description: "Communication effectiveness is below target; information is likely to stall between members.",
        initiatives: &[
            "Set up short recurring syncs with rotating facilitation",
            "Document decisions in a shared, searchable place",
            "Train members in active-listening and feedback techniques",
        ],
        target_traits: &[Trait::Extraversion, Trait::Agreeableness],
    },
    RecommendationRule {
        horizon: Horizon::ShortTerm,
        area: "execution_discipline",
        priority: Priority::Medium,
        applies: |ctx| {
            ctx.scores.performance_capability.value() < 60.0
                || has_risk(ctx.risks, RiskKind::ExecutionRisk)
        },
        description: "Delivery capability is at risk; commitments may slip without more structure.",
        initiatives: &[
            "Introduce lightweight planning with visible ownership per task",
            "Track commitments against delivery in regular reviews",
            "Pair less structured members with detail-oriented colleagues",
        ],
        target_traits: &[Trait::Conscientiousness],
    },
    RecommendationRule {
        horizon: Horizon::ShortTerm,
        area: "change_readiness",
        priority: Priority::Medium,
        applies: |ctx| ctx.scores.adaptability_score.value() < 55.0,
        description: "Adaptability is limited; upcoming changes need deliberate support to land.",
        initiatives: &[
            "Explain the rationale for changes early and repeatedly",
            "Pilot changes with small groups before wider rollout",
            "Recognize members who model constructive responses to change",
        ],
        target_traits: &[Trait::Openness, Trait::Neuroticism],
    },
    RecommendationRule {
        horizon: Horizon::LongTerm,
        area: "innovation_capacity",
        priority: Priority::Low,
        applies: |ctx| {
            ctx.collective.mean_traits.openness < 3.0
                || ctx.scores.innovation_potential.value() < 50.0
        },
        description: "Innovation potential is limited by the group's composition.",
        initiatives: &[
            "Recruit higher-openness members for upcoming openings",
            "Reserve time for exploratory work and experiments",
            "Bring in outside perspectives through rotations or partnerships",
        ],
        target_traits: &[Trait::Openness],
    },
    RecommendationRule {
        horizon: Horizon::LongTerm,
        area: "standards_alignment",
        priority: Priority::Low,
        applies: |ctx| has_risk(ctx.risks, RiskKind::StandardsVariance),
        description: "Members hold inconsistent work standards; shared expectations need to be built over time.",
        initiatives: &[
            "Define and publish quality standards for core deliverables",
            "Use peer review to spread consistent practices",
        ],
        target_traits: &[Trait::Conscientiousness],
    },
    RecommendationRule {
        horizon: Horizon::LongTerm,
        area: "team_structure",
        priority: Priority::Low,
        applies: |ctx| {
            has_risk(ctx.risks, RiskKind::TeamSizeSmall)
                || has_risk(ctx.risks, RiskKind::TeamSizeLarge)
        },
        description: "Team size is outside the effective range for close collaboration.",
        initiatives: &[
            "Plan hiring or merging to reach a sustainable team size",
            "Split oversized teams around clear ownership boundaries",
        ],
        target_traits: &[],
    },
];

pub fn generate(ctx: &RecommendationContext<'_>) -> RecommendationPlan {
    let mut plan = RecommendationPlan::default();
    for rule in RECOMMENDATION_RULES.iter().filter(|rule| (rule.applies)(ctx)) {
        plan.bucket_mut(rule.horizon).push(Recommendation {
            area: rule.area.to_string(),
            priority: rule.priority,
            description: rule.description.to_string(),
            initiatives: rule.initiatives.iter().map(|s| s.to_string()).collect(),
            target_traits: rule.target_traits.to_vec(),
        });
    }
    plan
}
