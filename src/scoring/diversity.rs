//! Per-trait dispersion across a population of profiles.

use super::stats;
use crate::core::{CollectiveProfile, Error, Result, Trait, TraitDiversity, TraitProfile, TraitScores};

fn trait_values(profiles: &[TraitProfile], t: Trait) -> Vec<f64> {
    profiles.iter().map(|p| p.get(t)).collect()
}

/// Population variance of each trait, computed independently (no covariance).
///
/// A single profile has zero diversity on every trait.
pub fn calculate(profiles: &[TraitProfile]) -> Result<TraitDiversity> {
    if profiles.is_empty() {
        return Err(Error::empty_input("diversity of zero profiles"));
    }
    TraitScores::try_from_fn(|t| stats::variance(&trait_values(profiles, t)))
}

/// Per-trait means of a population.
pub fn means(profiles: &[TraitProfile]) -> Result<TraitScores> {
    if profiles.is_empty() {
        return Err(Error::empty_input("mean traits of zero profiles"));
    }
    TraitScores::try_from_fn(|t| stats::mean(&trait_values(profiles, t)))
}

/// Means, diversity and sample size of a population.
pub fn collective(profiles: &[TraitProfile]) -> Result<CollectiveProfile> {
    Ok(CollectiveProfile {
        mean_traits: means(profiles)?,
        trait_diversity: calculate(profiles)?,
        sample_size: profiles.len(),
    })
}
