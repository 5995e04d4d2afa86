//! Tests for solver configuration.

use super::*;

#[test]
fn test_defaults() {
    let config = SolverConfig::default();
    assert_eq!(config.random_seed, None);
    assert_eq!(config.move_thread_count, MoveThreadCount::None);
    assert_eq!(config.termination.time_limit(), Some(Duration::from_secs(5)));
    assert_eq!(config.termination.step_limit(), Some(20_000));
    assert_eq!(config.termination.unimproved_limit(), Some(2_000));
    assert_eq!(config.termination.plateau_limit(), Some(500));
    assert_eq!(
        config.construction.construction_type,
        ConstructionType::BestFit
    );
    match &config.local_search.acceptor {
        AcceptorConfig::LateAcceptance(la) => assert_eq!(la.size(), 400),
        other => panic!("unexpected default acceptor: {other:?}"),
    }
    assert_eq!(config.local_search.forager.limit(), 1);
    assert!(config.local_search.move_selector.swap_enabled);
    assert_eq!(
        config.local_search.move_selector.selection_order,
        SelectionOrder::Random
    );
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        random_seed = 42
        move_thread_count = "auto"

        [termination]
        seconds_spent_limit = 30
        best_score_limit = "0hard/-100soft"

        [construction]
        construction_type = "first_fit"

        [local_search.acceptor]
        type = "simulated_annealing"
        starting_temperature = 250.0
        decay_rate = 0.99

        [local_search.move_selector]
        change_enabled = false
        selection_order = "original"
    "#;

    let config = SolverConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.move_thread_count, MoveThreadCount::Auto);
    assert_eq!(config.termination.seconds_spent_limit, Some(30));
    // unspecified termination fields keep their defaults
    assert_eq!(config.termination.step_limit(), Some(20_000));
    assert_eq!(
        config.termination.best_score().unwrap(),
        Some(HardSoftDecimalScore::of(0, -100))
    );
    assert_eq!(
        config.construction.construction_type,
        ConstructionType::FirstFit
    );
    match &config.local_search.acceptor {
        AcceptorConfig::SimulatedAnnealing(sa) => {
            assert_eq!(sa.starting_temperature(), 250.0);
            assert_eq!(sa.decay_rate(), 0.99);
        }
        other => panic!("unexpected acceptor: {other:?}"),
    }
    assert!(config.local_search.move_selector.swap_enabled);
    assert!(!config.local_search.move_selector.change_enabled);
    assert_eq!(
        config.local_search.move_selector.selection_order,
        SelectionOrder::Original
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        random_seed: 42
        move_thread_count: auto
        termination:
          step_count_limit: 500
          feasible_plateau_step_count: 0
        local_search:
          acceptor:
            type: late_acceptance
            late_acceptance_size: 50
          forager:
            accepted_count_limit: 3
    "#;

    let config = SolverConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.move_thread_count, MoveThreadCount::Auto);
    assert_eq!(config.termination.step_limit(), Some(500));
    assert_eq!(config.termination.plateau_limit(), None);
    match &config.local_search.acceptor {
        AcceptorConfig::LateAcceptance(la) => assert_eq!(la.size(), 50),
        other => panic!("unexpected acceptor: {other:?}"),
    }
    assert_eq!(config.local_search.forager.limit(), 3);
}

#[test]
fn test_invalid_values_rejected() {
    let cases = [
        "move_thread_count = { count = 0 }",
        "[termination]\nbest_score_limit = \"zero\"",
        "[local_search.acceptor]\ntype = \"late_acceptance\"\nlate_acceptance_size = 0",
        "[local_search.acceptor]\ntype = \"simulated_annealing\"\ndecay_rate = 1.5",
        "[local_search.forager]\naccepted_count_limit = 0",
        "[local_search.move_selector]\nswap_enabled = false\nchange_enabled = false",
    ];
    for case in cases {
        assert!(
            matches!(
                SolverConfig::from_toml_str(case),
                Err(ConfigError::Invalid(_))
            ),
            "accepted: {case}"
        );
    }
}

#[test]
fn test_explicit_thread_count() {
    let config = SolverConfig::from_toml_str("move_thread_count = { count = 4 }").unwrap();
    assert_eq!(config.move_thread_count, MoveThreadCount::Count(4));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    assert!(matches!(
        SolverConfig::from_toml_str("random_seed = \"x\""),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file_falls_back_to_default() {
    let config = SolverConfig::load("/nonexistent/solver.toml").unwrap_or_default();
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn test_builder() {
    let config = SolverConfig::new()
        .with_random_seed(123)
        .with_termination_seconds(60)
        .with_step_limit(10)
        .with_acceptor(AcceptorConfig::HillClimbing)
        .with_construction_type(ConstructionType::FirstFit);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.termination.time_limit(), Some(Duration::from_secs(60)));
    assert_eq!(config.termination.step_limit(), Some(10));
    assert_eq!(config.local_search.acceptor, AcceptorConfig::HillClimbing);
}

#[test]
fn test_thread_count_resolution() {
    assert_eq!(MoveThreadCount::None.resolve(8), 1);
    assert_eq!(MoveThreadCount::Auto.resolve(8), 8);
    assert_eq!(MoveThreadCount::Count(3).resolve(8), 3);
}
