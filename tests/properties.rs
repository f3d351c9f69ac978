//! Cross-strategy integration and property tests.
//!
//! Exercises both strategies through the public API on a shared
//! terrain scenario plus a degenerate one-point domain.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_heur::eval::{RunReport, Termination};
use u_heur::objective::ObjectiveFunction;
use u_heur::sa::{SaConfig, SaRunner};
use u_heur::sg::{SgConfig, SgRunner};
use u_heur::strategy::SearchStrategy;

/// Flat 800-cell terrain with one narrow basin: the target value 0 sits
/// at cell 50, values rise by 50 per cell away from it, and everything
/// two or more cells out is a plateau at value 100.
struct Terrain;

impl ObjectiveFunction for Terrain {
    type Point = i64;

    fn generate_point<R: Rng>(&self, rng: &mut R) -> i64 {
        rng.random_range(0..800)
    }

    fn evaluate(&self, x: &i64) -> f64 {
        let altitude = (100 - 50 * (x - 50).abs()).max(0);
        (100 - altitude) as f64
    }

    fn fstar(&self) -> f64 {
        0.0
    }

    fn neighborhood(&self, x: &i64, distance: usize) -> Vec<i64> {
        let d = distance as i64;
        (x - d..=x + d)
            .filter(|&n| n != *x && (0..800).contains(&n))
            .collect()
    }
}

/// Degenerate domain: a single point that is its own only neighbor.
struct SinglePoint;

impl ObjectiveFunction for SinglePoint {
    type Point = u8;

    fn generate_point<R: Rng>(&self, _rng: &mut R) -> u8 {
        0
    }

    fn evaluate(&self, _x: &u8) -> f64 {
        7.0
    }

    fn fstar(&self) -> f64 {
        0.0
    }

    fn neighborhood(&self, _x: &u8, _distance: usize) -> Vec<u8> {
        vec![0]
    }
}

fn assert_report_coherent<F: ObjectiveFunction>(
    of: &F,
    report: &RunReport<F::Point>,
    budget: usize,
) {
    assert!(
        report.evaluations <= budget,
        "spent {} of a budget of {}",
        report.evaluations,
        budget
    );
    let best = report.best_point.as_ref().expect("at least one evaluation");
    assert!((of.evaluate(best) - report.best_value).abs() < 1e-12);

    match report.termination {
        Termination::TargetReached => {
            assert!(report.best_value <= of.fstar());
            assert_eq!(report.evaluations_to_target, Some(report.evaluations));
        }
        Termination::BudgetExhausted => {
            assert!(report.best_value > of.fstar());
            assert_eq!(report.evaluations, budget);
            assert_eq!(report.evaluations_to_target, None);
        }
    }
}

// ---- Statistical success bands on the terrain ----

#[test]
fn test_shoot_and_go_success_band_on_terrain() {
    // The attraction basin spans cells 48..=52 (5 of 800) and a failed
    // restart costs three evaluations, so a budget of 100 gives 34
    // shots and a success rate near 0.187, just under one run in five.
    let hits = (0..1000u64)
        .filter(|&seed| {
            let config = SgConfig::new(100).with_seed(seed);
            SgRunner::run(&Terrain, &config).target_reached()
        })
        .count();
    assert!(
        (120..=250).contains(&hits),
        "expected ~187 hits in 1000 runs, got {hits}"
    );
}

#[test]
fn test_random_shooting_success_band_on_terrain() {
    // Success per run is 1 - (799/800)^100, about 0.118.
    let hits = (0..1000u64)
        .filter(|&seed| {
            let config = SgConfig::random_shooting(100).with_seed(seed);
            SgRunner::run(&Terrain, &config).target_reached()
        })
        .count();
    assert!(
        (65..=170).contains(&hits),
        "expected ~118 hits in 1000 runs, got {hits}"
    );
}

#[test]
fn test_descent_beats_pure_shooting() {
    let sg_hits = (0..1000u64)
        .filter(|&seed| {
            SgConfig::new(100)
                .with_seed(seed)
                .search(&Terrain)
                .target_reached()
        })
        .count();
    let rs_hits = (0..1000u64)
        .filter(|&seed| {
            SgConfig::random_shooting(100)
                .with_seed(seed)
                .search(&Terrain)
                .target_reached()
        })
        .count();
    assert!(sg_hits > rs_hits, "sg {sg_hits} <= rs {rs_hits}");
}

// ---- Reproducibility and shared-stream batches ----

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = SgConfig::new(300).with_seed(99);
    let first = SgRunner::run(&Terrain, &config);
    let second = SgRunner::run(&Terrain, &config);
    assert_eq!(first.best_point, second.best_point);
    assert_eq!(first.evaluations, second.evaluations);
    assert_eq!(first.termination, second.termination);

    let config = SaConfig::new(300).with_seed(99);
    let first = SaRunner::run(&Terrain, &config);
    let second = SaRunner::run(&Terrain, &config);
    assert_eq!(first.best_point, second.best_point);
    assert_eq!(first.evaluations, second.evaluations);
    assert_eq!(first.termination, second.termination);
}

#[test]
fn test_batch_runs_share_one_stream() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = SgConfig::new(100);
    let first = SgRunner::run_with_rng(&Terrain, &config, &mut rng);
    let second = SgRunner::run_with_rng(&Terrain, &config, &mut rng);
    assert_report_coherent(&Terrain, &first, 100);
    assert_report_coherent(&Terrain, &second, 100);

    let config = SaConfig::new(100);
    let report = SaRunner::run_with_rng(&Terrain, &config, &mut rng);
    assert_report_coherent(&Terrain, &report, 100);
}

// ---- Budget and report properties ----

proptest! {
    #[test]
    fn prop_sg_report_is_coherent(
        budget in 1usize..400,
        seed in any::<u64>(),
        local_steps in 0usize..6,
    ) {
        let config = SgConfig::new(budget)
            .with_max_local_steps(local_steps)
            .with_seed(seed);
        let report = SgRunner::run(&Terrain, &config);
        assert_report_coherent(&Terrain, &report, budget);
    }

    #[test]
    fn prop_sa_report_is_coherent(
        budget in 1usize..400,
        seed in any::<u64>(),
        restart in proptest::option::of(1usize..50),
    ) {
        let mut config = SaConfig::new(budget).with_seed(seed);
        if let Some(period) = restart {
            config = config.with_restart_period(period);
        }
        let report = SaRunner::run(&Terrain, &config);
        assert_report_coherent(&Terrain, &report, budget);
    }

    #[test]
    fn prop_degenerate_domain_only_exhausts_its_budget(
        budget in 1usize..200,
        seed in any::<u64>(),
    ) {
        let report = SgRunner::run(&SinglePoint, &SgConfig::new(budget).with_seed(seed));
        prop_assert_eq!(report.termination, Termination::BudgetExhausted);
        prop_assert_eq!(report.evaluations, budget);
        prop_assert!((report.best_value - 7.0).abs() < 1e-12);

        let report = SaRunner::run(&SinglePoint, &SaConfig::new(budget).with_seed(seed));
        prop_assert_eq!(report.termination, Termination::BudgetExhausted);
        prop_assert_eq!(report.evaluations, budget);
    }
}
