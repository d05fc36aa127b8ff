//! Property tests for the aggregate scoring pipeline.

use proptest::prelude::*;
use traitmap::culture::classify;
use traitmap::scoring::{composite, diversity};
use traitmap::{
    ExecutiveFitScorer, OrganizationalProfileBuilder, TeamCompositionAnalyzer, TraitProfile,
    TraitScores,
};

fn trait_value() -> impl Strategy<Value = f64> {
    1.0f64..=5.0
}

fn profile() -> impl Strategy<Value = TraitProfile> {
    (trait_value(), trait_value(), trait_value(), trait_value(), trait_value())
        .prop_map(|(o, c, e, a, n)| TraitProfile::new(o, c, e, a, n))
}

proptest! {
    #[test]
    fn composite_scores_stay_in_bounds(profiles in prop::collection::vec(profile(), 1..40)) {
        let collective = diversity::collective(&profiles).unwrap();
        for (_, mean) in collective.mean_traits.iter() {
            prop_assert!((1.0 - 1e-9..=5.0 + 1e-9).contains(&mean));
        }
        for (name, score) in composite::score(&collective).iter() {
            prop_assert!((0.0..=100.0).contains(&score.value()), "{} = {}", name, score);
        }
    }

    #[test]
    fn population_of_one_has_no_diversity(p in profile()) {
        let d = diversity::calculate(&[p]).unwrap();
        prop_assert!(d.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn identical_profiles_fit_exactly(p in profile()) {
        let result = ExecutiveFitScorer::default().score(&p, &p.scores()).unwrap();
        prop_assert_eq!(result.overall_fit_score.value(), 1.0);
    }

    #[test]
    fn fit_score_in_unit_interval(exec in profile(), org in profile()) {
        let score = ExecutiveFitScorer::default()
            .score(&exec, &org.scores())
            .unwrap()
            .overall_fit_score
            .value();
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn culture_is_deterministic(p in profile()) {
        let mean: TraitScores = p.into();
        let first = classify(&mean);
        prop_assert_eq!(first, classify(&mean));
        prop_assert!(!first.description().is_empty());
    }

    #[test]
    fn builders_never_produce_nan(profiles in prop::collection::vec(profile(), 1..20)) {
        let org = OrganizationalProfileBuilder::default().build(&profiles, None).unwrap();
        let json = serde_json::to_value(&org).unwrap();
        prop_assert!(json["healthMetrics"]["overallHealth"].as_f64().is_some());

        let team = TeamCompositionAnalyzer::default().analyze(&profiles, None).unwrap();
        for (_, score) in team.dynamic_predictions.iter() {
            prop_assert!(score.value().is_finite());
        }
    }
}

#[test]
fn diversity_of_empty_population_is_an_error() {
    assert!(diversity::calculate(&[]).unwrap_err().is_empty_input());
}

#[test]
fn culture_of_open_low_conscientious_group() {
    let mean = TraitScores {
        openness: 4.2,
        conscientiousness: 2.0,
        extraversion: 3.0,
        agreeableness: 3.0,
        neuroticism: 2.5,
    };
    let label = classify(&mean);
    for _ in 0..10 {
        assert_eq!(classify(&mean), label);
    }
    assert_eq!(label.label(), "innovation");
}
