//! Organizational health metrics.
//!
//! ```text
//! psychological_safety = (A/5)*0.4 + ((5-N)/5)*0.3 + (1 - A_var/2)*0.3
//! innovation_climate   = (O/5)*0.5 + min(O_var/1.5, 1)*0.2 + (E/5)*0.3
//! resilience           = ((5-N)/5)*0.5 + (C/5)*0.3 + (O/5)*0.2
//! performance_culture  = (C/5)*0.6 + (1 - C_var/2)*0.2 + (E/5)*0.2
//! overall_health       = mean of the four
//! ```

use crate::core::CollectiveProfile;
use crate::scoring::composite::{inverse_level, level, openness_spread, stability};
use crate::scoring::Score0To100;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetrics {
    pub psychological_safety: Score0To100,
    pub innovation_climate: Score0To100,
    pub resilience: Score0To100,
    pub performance_culture: Score0To100,
    pub overall_health: Score0To100,
}

pub fn assess(c: &CollectiveProfile) -> HealthMetrics {
    let (m, d) = (&c.mean_traits, &c.trait_diversity);

    let psychological_safety = Score0To100::from_fraction(
        level(m.agreeableness) * 0.4
            + inverse_level(m.neuroticism) * 0.3
            + stability(d.agreeableness) * 0.3,
    );
    let innovation_climate = Score0To100::from_fraction(
        level(m.openness) * 0.5 + openness_spread(d.openness) * 0.2 + level(m.extraversion) * 0.3,
    );
    let resilience = Score0To100::from_fraction(
        inverse_level(m.neuroticism) * 0.5
            + level(m.conscientiousness) * 0.3
            + level(m.openness) * 0.2,
    );
    let performance_culture = Score0To100::from_fraction(
        level(m.conscientiousness) * 0.6
            + stability(d.conscientiousness) * 0.2
            + level(m.extraversion) * 0.2,
    );

    let overall_health = Score0To100::new(
        (psychological_safety.value()
            + innovation_climate.value()
            + resilience.value()
            + performance_culture.value())
            / 4.0,
    );

    HealthMetrics {
        psychological_safety,
        innovation_climate,
        resilience,
        performance_culture,
        overall_health,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TraitScores;

    fn approx(a: Score0To100, b: f64) -> bool {
        (a.value() - b).abs() < 1e-9
    }

    #[test]
    fn uniform_midpoint_organization() {
        let c = CollectiveProfile {
            mean_traits: TraitScores::from_fn(|_| 3.0),
            trait_diversity: TraitScores::default(),
            sample_size: 10,
        };
        let health = assess(&c);
        // 0.24 + 0.12 + 0.3
        assert!(approx(health.psychological_safety, 66.0));
        // 0.3 + 0 + 0.18
        assert!(approx(health.innovation_climate, 48.0));
        // 0.2 + 0.18 + 0.12
        assert!(approx(health.resilience, 50.0));
        // 0.36 + 0.2 + 0.12
        assert!(approx(health.performance_culture, 68.0));
        assert!(approx(health.overall_health, 58.0));
    }

    #[test]
    fn wide_agreeableness_spread_is_clamped() {
        let c = CollectiveProfile {
            mean_traits: TraitScores::from_fn(|_| 1.0),
            trait_diversity: TraitScores::from_fn(|_| 4.0),
            sample_size: 10,
        };
        let health = assess(&c);
        assert!(health.psychological_safety.value() >= 0.0);
        assert!(health.performance_culture.value() >= 0.0);
    }
}
