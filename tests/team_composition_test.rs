mod common;

use common::{approx_eq, spread_trio, uniform};
use pretty_assertions::assert_eq;
use traitmap::core::Priority;
use traitmap::risk::has_risk;
use traitmap::team::{optimal_additions, role_fit};
use traitmap::{
    DomainPolicy, RiskKind, RiskThresholds, RoleAssignment, RoleLibrary, TeamCompositionAnalyzer,
    Trait, TraitProfile,
};

#[test]
fn test_empty_team_is_rejected() {
    assert!(TeamCompositionAnalyzer::default()
        .analyze(&[], None)
        .unwrap_err()
        .is_invalid_input());
}

#[test]
fn test_team_of_one_has_zero_diversity() {
    let member = TraitProfile::new(2.7, 3.1, 4.4, 1.9, 3.3);
    let composition = TeamCompositionAnalyzer::default()
        .analyze(&[member], None)
        .unwrap();

    assert_eq!(composition.collective.sample_size, 1);
    assert!(composition
        .collective
        .trait_diversity
        .iter()
        .all(|(_, v)| v == 0.0));
    assert!(has_risk(&composition.risks, RiskKind::TeamSizeSmall));
}

#[test]
fn test_large_team_is_flagged() {
    let composition = TeamCompositionAnalyzer::default()
        .analyze(&uniform(13, 3.5), None)
        .unwrap();
    assert!(has_risk(&composition.risks, RiskKind::TeamSizeLarge));
    assert!(!has_risk(&composition.risks, RiskKind::TeamSizeSmall));
}

#[test]
fn test_role_assignments_against_builtin_library() {
    let assignments = vec![
        RoleAssignment::new(0, "leader"),
        RoleAssignment::new(2, "innovator"),
    ];
    let composition = TeamCompositionAnalyzer::default()
        .analyze(&spread_trio(), Some(&assignments))
        .unwrap();

    assert_eq!(composition.role_fit_scores.len(), 2);
    for fit in composition.role_fit_scores.values() {
        assert!((0.0..=1.0).contains(&fit.score.value()));
    }

    let library = RoleLibrary::builtin();
    let expected = role_fit(&spread_trio()[2], library.get("innovator").unwrap());
    assert_eq!(composition.role_fit_scores[&2].score, expected);
}

#[test]
fn test_unknown_role_fails_whole_analysis() {
    let assignments = vec![RoleAssignment::new(0, "wizard")];
    let err = TeamCompositionAnalyzer::default()
        .analyze(&spread_trio(), Some(&assignments))
        .unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("wizard"));
}

#[test]
fn test_optimal_additions_for_unreliable_team() {
    let team = vec![
        TraitProfile::new(2.5, 2.8, 2.0, 2.6, 3.4),
        TraitProfile::new(2.7, 3.0, 2.2, 2.8, 3.2),
        TraitProfile::new(2.6, 2.9, 2.1, 2.7, 3.3),
    ];
    let composition = TeamCompositionAnalyzer::default()
        .analyze(&team, None)
        .unwrap();

    let additions = &composition.optimal_additions;
    let gap_traits: Vec<Trait> = additions.gaps.iter().map(|g| g.trait_name).collect();
    assert_eq!(
        gap_traits,
        vec![
            Trait::Conscientiousness,
            Trait::Agreeableness,
            Trait::Neuroticism,
            Trait::Openness,
            Trait::Extraversion,
        ]
    );
    assert_eq!(additions.target_profile, TraitProfile::new(4.0, 4.0, 3.5, 3.8, 2.0));
    assert!(additions
        .gaps
        .iter()
        .take(3)
        .all(|g| g.priority == Priority::High));
    assert!(approx_eq(additions.gaps[0].current_mean, 2.9));
}

#[test]
fn test_optimal_additions_matches_free_function() {
    let composition = TeamCompositionAnalyzer::default()
        .analyze(&spread_trio(), None)
        .unwrap();
    assert_eq!(
        composition.optimal_additions,
        optimal_additions(&composition.collective)
    );
}

#[test]
fn test_custom_thresholds_silence_size_risk() {
    let thresholds = RiskThresholds {
        min_size: 0,
        ..RiskThresholds::team()
    };
    let analyzer =
        TeamCompositionAnalyzer::new(DomainPolicy::Reject, thresholds, RoleLibrary::builtin());
    let composition = analyzer.analyze(&uniform(2, 3.5), None).unwrap();
    assert!(!has_risk(&composition.risks, RiskKind::TeamSizeSmall));
}
