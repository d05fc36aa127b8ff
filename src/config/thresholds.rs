use serde::{Deserialize, Serialize};

/// Cut points for the risk table.
///
/// All comparisons are strict: a mean neuroticism of exactly
/// `max_neuroticism` is not a risk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Groups smaller than this are flagged; 0 disables the check
    pub min_size: usize,
    /// Groups larger than this are flagged; `None` disables the check
    pub max_size: Option<usize>,
    pub max_neuroticism: f64,
    pub min_agreeableness: f64,
    pub min_conscientiousness: f64,
    pub max_agreeableness_variance: f64,
    pub max_conscientiousness_variance: f64,
}

impl RiskThresholds {
    /// Thresholds for a working team.
    pub fn team() -> Self {
        Self {
            min_size: 3,
            max_size: Some(12),
            max_neuroticism: 3.5,
            min_agreeableness: 2.5,
            min_conscientiousness: 2.8,
            max_agreeableness_variance: 1.5,
            max_conscientiousness_variance: 1.8,
        }
    }

    /// Thresholds for a whole organization.
    ///
    /// No upper size limit, and tighter variance cut points than a team.
    pub fn organization() -> Self {
        Self {
            max_size: None,
            max_agreeableness_variance: 0.5,
            max_conscientiousness_variance: 0.6,
            ..Self::team()
        }
    }

    pub fn with_overrides(mut self, overrides: &RiskThresholdOverrides) -> Self {
        if let Some(min_size) = overrides.min_size {
            self.min_size = min_size;
        }
        if let Some(max_size) = overrides.max_size {
            self.max_size = (max_size > 0).then_some(max_size);
        }
        if let Some(v) = overrides.max_neuroticism {
            self.max_neuroticism = v;
        }
        if let Some(v) = overrides.min_agreeableness {
            self.min_agreeableness = v;
        }
        if let Some(v) = overrides.min_conscientiousness {
            self.min_conscientiousness = v;
        }
        if let Some(v) = overrides.max_agreeableness_variance {
            self.max_agreeableness_variance = v;
        }
        if let Some(v) = overrides.max_conscientiousness_variance {
            self.max_conscientiousness_variance = v;
        }
        self
    }
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self::team()
    }
}

/// Partial threshold table as written in `.traitmap.toml`.
///
/// ```toml
/// [thresholds.team]
/// max_size = 10               # 0 disables the upper size check
/// max_neuroticism = 3.2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholdOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_neuroticism: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_agreeableness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_conscientiousness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_agreeableness_variance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_conscientiousness_variance: Option<f64>,
}

impl RiskThresholdOverrides {
    fn values(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("max_neuroticism", self.max_neuroticism),
            ("min_agreeableness", self.min_agreeableness),
            ("min_conscientiousness", self.min_conscientiousness),
            ("max_agreeableness_variance", self.max_agreeableness_variance),
            ("max_conscientiousness_variance", self.max_conscientiousness_variance),
        ]
    }

    pub fn validate(&self, section: &str) -> Result<(), String> {
        for (name, value) in self.values() {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(format!(
                        "thresholds.{}.{} must be a non-negative number, got {}",
                        section, name, v
                    ));
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default)]
    pub team: RiskThresholdOverrides,
    #[serde(default)]
    pub organization: RiskThresholdOverrides,
}

impl ThresholdsConfig {
    pub fn team(&self) -> RiskThresholds {
        RiskThresholds::team().with_overrides(&self.team)
    }

    pub fn organization(&self) -> RiskThresholds {
        RiskThresholds::organization().with_overrides(&self.organization)
    }

    pub fn validate(&self) -> Result<(), String> {
        self.team.validate("team")?;
        self.organization.validate("organization")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_inherits_team_trait_cut_points() {
        let team = RiskThresholds::team();
        let org = RiskThresholds::organization();
        assert_eq!(org.max_neuroticism, team.max_neuroticism);
        assert_eq!(org.min_size, team.min_size);
        assert_eq!(org.max_size, None);
        assert!(org.max_agreeableness_variance < team.max_agreeableness_variance);
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let overrides = RiskThresholdOverrides {
            max_neuroticism: Some(3.0),
            ..Default::default()
        };
        let merged = RiskThresholds::team().with_overrides(&overrides);
        assert_eq!(merged.max_neuroticism, 3.0);
        assert_eq!(merged.min_agreeableness, 2.5);
    }

    #[test]
    fn zero_max_size_disables_check() {
        let overrides = RiskThresholdOverrides {
            max_size: Some(0),
            ..Default::default()
        };
        assert_eq!(RiskThresholds::team().with_overrides(&overrides).max_size, None);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let config = ThresholdsConfig {
            team: RiskThresholdOverrides {
                min_agreeableness: Some(-1.0),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().contains("thresholds.team.min_agreeableness"));
    }
}
