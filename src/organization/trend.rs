//! Comparison of an organization's profile against an earlier one.
//!
//! Profiles are not stored here; the caller supplies the previous profile.

use super::OrganizationalProfile;
use crate::core::TraitScores;
use serde::{Deserialize, Serialize};

/// Health change, in points, treated as noise.
const STABLE_BAND: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Stable,
    Declining,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTrend {
    /// Current minus previous mean, per trait
    pub trait_deltas: TraitScores,
    pub health_delta: f64,
    pub culture_changed: bool,
    pub direction: TrendDirection,
}

pub fn compare(previous: &OrganizationalProfile, current: &OrganizationalProfile) -> ProfileTrend {
    let before = &previous.collective.mean_traits;
    let after = &current.collective.mean_traits;

    let health_delta = current.health_metrics.overall_health.value()
        - previous.health_metrics.overall_health.value();

    let direction = if health_delta > STABLE_BAND {
        TrendDirection::Improving
    } else if health_delta < -STABLE_BAND {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    ProfileTrend {
        trait_deltas: TraitScores::from_fn(|t| after.get(t) - before.get(t)),
        health_delta,
        culture_changed: previous.culture_type != current.culture_type,
        direction,
    }
}
