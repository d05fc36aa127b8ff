use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::thresholds::ThresholdsConfig;
use crate::core::TraitProfile;

/// What to do with a trait value outside [1, 5].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainPolicy {
    /// Fail with `InvalidInput`, naming the profile and trait
    #[default]
    Reject,
    /// Clamp into [1, 5]; non-finite values are still rejected
    Clamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub out_of_domain: DomainPolicy,
}

/// Root configuration structure for traitmap
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitmapConfig {
    /// Input validation policy
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Risk threshold overrides per scale
    #[serde(default)]
    pub thresholds: ThresholdsConfig,

    /// Additional or replacement ideal-trait targets for role fit
    #[serde(default)]
    pub roles: BTreeMap<String, TraitProfile>,
}

impl TraitmapConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.thresholds.validate()?;
        for (name, target) in &self.roles {
            if let Some((t, value)) = target.first_out_of_domain() {
                return Err(format!(
                    "role '{}' has {} = {} outside [1, 5]",
                    name, t, value
                ));
            }
        }
        Ok(())
    }
}
