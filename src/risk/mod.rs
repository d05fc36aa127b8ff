//! Threshold-based risk identification.
//!
//! Each rule is an independent predicate over a [`CollectiveProfile`]; every
//! rule that fires contributes one [`RiskFactor`]. The returned list follows
//! table order, but callers should treat it as a set.

use crate::config::RiskThresholds;
use crate::core::CollectiveProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    TeamSizeSmall,
    TeamSizeLarge,
    EmotionalInstability,
    LowCooperation,
    ExecutionRisk,
    CooperationVariance,
    StandardsVariance,
}

impl RiskKind {
    pub fn tag(self) -> &'static str {
        match self {
            RiskKind::TeamSizeSmall => "team_size_small",
            RiskKind::TeamSizeLarge => "team_size_large",
            RiskKind::EmotionalInstability => "emotional_instability",
            RiskKind::LowCooperation => "low_cooperation",
            RiskKind::ExecutionRisk => "execution_risk",
            RiskKind::CooperationVariance => "cooperation_variance",
            RiskKind::StandardsVariance => "standards_variance",
        }
    }
}

impl fmt::Display for RiskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub kind: RiskKind,
    pub severity: Severity,
    pub description: String,
}

struct RiskRule {
    kind: RiskKind,
    severity: Severity,
    fires: fn(&CollectiveProfile, &RiskThresholds) -> bool,
    describe: fn(&CollectiveProfile, &RiskThresholds) -> String,
}

const RISK_RULES: &[RiskRule] = &[
    RiskRule {
        kind: RiskKind::TeamSizeSmall,
        severity: Severity::Medium,
        fires: |c, t| c.sample_size < t.min_size,
        describe: |c, t| {
            format!(
                "Only {} member(s); fewer than {} limits perspective and creates single points of failure",
                c.sample_size, t.min_size
            )
        },
    },
    RiskRule {
        kind: RiskKind::TeamSizeLarge,
        severity: Severity::High,
        fires: |c, t| t.max_size.is_some_and(|max| c.sample_size > max),
        describe: |c, _| {
            format!(
                "{} members; coordination overhead grows quickly past this size",
                c.sample_size
            )
        },
    },
    RiskRule {
        kind: RiskKind::EmotionalInstability,
        severity: Severity::High,
        fires: |c, t| c.mean_traits.neuroticism > t.max_neuroticism,
        describe: |c, _| {
            format!(
                "Mean neuroticism {:.2} indicates elevated stress reactivity and emotional instability",
                c.mean_traits.neuroticism
            )
        },
    },
    RiskRule {
        kind: RiskKind::LowCooperation,
        severity: Severity::High,
        fires: |c, t| c.mean_traits.agreeableness < t.min_agreeableness,
        describe: |c, _| {
            format!(
                "Mean agreeableness {:.2} indicates low cooperation and a tendency toward friction",
                c.mean_traits.agreeableness
            )
        },
    },
    RiskRule {
        kind: RiskKind::ExecutionRisk,
        severity: Severity::Medium,
        fires: |c, t| c.mean_traits.conscientiousness < t.min_conscientiousness,
        describe: |c, _| {
            format!(
                "Mean conscientiousness {:.2} puts follow-through and delivery at risk",
                c.mean_traits.conscientiousness
            )
        },
    },
    RiskRule {
        kind: RiskKind::CooperationVariance,
        severity: Severity::Medium,
        fires: |c, t| c.trait_diversity.agreeableness > t.max_agreeableness_variance,
        describe: |c, _| {
            format!(
                "Agreeableness variance {:.2}: members differ sharply in how cooperative they are",
                c.trait_diversity.agreeableness
            )
        },
    },
    RiskRule {
        kind: RiskKind::StandardsVariance,
        severity: Severity::Medium,
        fires: |c, t| c.trait_diversity.conscientiousness > t.max_conscientiousness_variance,
        describe: |c, _| {
            format!(
                "Conscientiousness variance {:.2}: members hold inconsistent work standards",
                c.trait_diversity.conscientiousness
            )
        },
    },
];

#[derive(Debug, Clone, Default)]
pub struct RiskIdentifier {
    thresholds: RiskThresholds,
}

impl RiskIdentifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn identify(&self, collective: &CollectiveProfile) -> Vec<RiskFactor> {
        RISK_RULES
            .iter()
            .filter(|rule| (rule.fires)(collective, &self.thresholds))
            .map(|rule| RiskFactor {
                kind: rule.kind,
                severity: rule.severity,
                description: (rule.describe)(collective, &self.thresholds),
            })
            .collect()
    }
}

/// Whether any risk of the given kind is present.
pub fn has_risk(risks: &[RiskFactor], kind: RiskKind) -> bool {
    risks.iter().any(|r| r.kind == kind)
}
