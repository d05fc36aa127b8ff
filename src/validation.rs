//! Trait-domain validation applied before any aggregation.

use crate::config::DomainPolicy;
use crate::core::{Error, Result, Trait, TraitProfile, MAX_TRAIT_SCORE, MIN_TRAIT_SCORE};
use std::borrow::Cow;

/// Check every profile against the [1, 5] domain under `policy`.
///
/// Non-finite values are rejected under both policies. `Clamp` returns an
/// owned, clamped copy only when some value actually needed clamping.
pub fn validate_profiles(
    profiles: &[TraitProfile],
    policy: DomainPolicy,
) -> Result<Cow<'_, [TraitProfile]>> {
    let mut needs_clamp = false;

    for (index, profile) in profiles.iter().enumerate() {
        for t in Trait::ALL {
            let value = profile.get(t);
            if (MIN_TRAIT_SCORE..=MAX_TRAIT_SCORE).contains(&value) {
                continue;
            }
            if policy == DomainPolicy::Reject || !value.is_finite() {
                return Err(Error::out_of_domain(index, t, value));
            }
            needs_clamp = true;
        }
    }

    if needs_clamp {
        log::debug!("Clamping out-of-domain trait values into [1, 5]");
        Ok(Cow::Owned(profiles.iter().map(TraitProfile::clamped).collect()))
    } else {
        Ok(Cow::Borrowed(profiles))
    }
}
