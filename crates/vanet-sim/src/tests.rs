//! End-to-end runner tests over a scripted flow source.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use vanet_core::{MoverId, Vec2};
use vanet_flow::FlowTable;
use vanet_mobility::{MoverFleet, SteeringMode, SteeringPolicy};

use crate::{ScenarioConfig, ScenarioRunner, SimError};

fn tmp() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("metrics.csv");
    (dir, path)
}

fn small_fleet() -> MoverFleet {
    MoverFleet::from_positions(vec![
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 300.0),
        Vec2::new(400.0, 150.0),
    ])
}

fn runner(config: &ScenarioConfig) -> ScenarioRunner<FlowTable> {
    ScenarioRunner::new(
        config,
        FlowTable::new(),
        small_fleet(),
        &SteeringMode::FixedHeading,
        &SteeringPolicy::default(),
    )
    .unwrap()
}

fn read_times(path: &Path) -> Vec<f64> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records()
        .map(|r| r.unwrap()[0].parse().unwrap())
        .collect()
}

#[test]
fn standard_run_writes_ninety_nine_samples() {
    let (_dir, path) = tmp();
    let config = ScenarioConfig::standard(42, &path);
    let report = runner(&config).run().unwrap();
    assert_eq!(report.samples_written, 99);

    // First tick at 1 s, cadence 1 s, cutoff 99 s: rows at 1..=99, strictly
    // increasing, nothing past the cutoff.
    let times = read_times(&path);
    assert_eq!(times.len(), 99);
    assert_eq!(times[0], 1.0);
    assert_eq!(*times.last().unwrap(), 99.0);
    assert!(times.windows(2).all(|w| w[0] < w[1]));
    assert!(times.iter().all(|&t| t <= 99.0));
}

#[test]
fn late_first_sample_shortens_the_series() {
    let (_dir, path) = tmp();
    let mut config = ScenarioConfig::standard(42, &path);
    config.monitor.first_sample_at = vanet_core::SimTime::from_secs(5);
    let report = runner(&config).run().unwrap();
    // Ticks at 5..=99.
    assert_eq!(report.samples_written, 95);
    assert_eq!(read_times(&path)[0], 5.0);
}

#[test]
fn all_zero_rows_for_an_idle_network() {
    let (_dir, path) = tmp();
    let config = ScenarioConfig::standard(42, &path);
    runner(&config).run().unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    for record in rdr.records() {
        let row = record.unwrap();
        assert_eq!(&row[1], "0");
        assert_eq!(&row[2], "0");
        assert_eq!(&row[3], "0");
    }
}

#[test]
fn stop_event_freezes_the_fleet() {
    let (_dir, path) = tmp();
    let config = ScenarioConfig::standard(42, &path);
    let mut r = runner(&config);

    // Setup steering gave every mover a full-speed velocity.
    assert!(!r.context().fleet.is_frozen());
    let v = r.context().fleet.velocity(MoverId(0));
    assert!((v.length() - 5.0).abs() < 1e-9);

    let report = r.run().unwrap();
    assert!(report.frozen);
    assert!(r.context().fleet.is_frozen());
}

#[test]
fn disabled_monitor_writes_no_file() {
    let (_dir, path) = tmp();
    let mut config = ScenarioConfig::standard(42, &path);
    config.monitor.enabled = false;

    let report = runner(&config).run().unwrap();
    assert_eq!(report.samples_written, 0);
    assert!(!path.exists());
    // The stop event is independent of the monitor.
    assert!(report.frozen);
}

#[test]
fn unopenable_sink_aborts_construction() {
    let config = ScenarioConfig::standard(42, PathBuf::from("/nonexistent-dir/metrics.csv"));
    let result = ScenarioRunner::new(
        &config,
        FlowTable::new(),
        small_fleet(),
        &SteeringMode::FixedHeading,
        &SteeringPolicy::default(),
    );
    assert!(matches!(result, Err(SimError::Monitor(_))));
}

#[test]
fn invalid_configs_are_rejected() {
    let (_dir, path) = tmp();

    let mut zero_cadence = ScenarioConfig::standard(1, &path);
    zero_cadence.monitor.cadence = vanet_core::SimTime::ZERO;
    assert!(matches!(
        zero_cadence.validate(),
        Err(SimError::Config(_))
    ));

    let mut late_stop = ScenarioConfig::standard(1, &path);
    late_stop.stop_motion_at = vanet_core::SimTime::from_secs(150);
    assert!(late_stop.validate().is_err());

    let mut inverted_window = ScenarioConfig::standard(1, &path);
    inverted_window.monitor.first_sample_at = vanet_core::SimTime::from_secs(100);
    assert!(inverted_window.validate().is_err());

    let mut zero_hello = ScenarioConfig::standard(1, &path);
    zero_hello.routing.hello_interval = vanet_core::SimTime::ZERO;
    assert!(zero_hello.validate().is_err());
}

#[test]
fn same_seed_reproduces_setup_steering() {
    let (_dir_a, path_a) = tmp();
    let (_dir_b, path_b) = tmp();

    let velocities = |path: &Path, seed: u64| -> Vec<Vec2> {
        let config = ScenarioConfig::standard(seed, path);
        let r = runner(&config);
        r.context().fleet.states.iter().map(|s| s.velocity).collect()
    };

    assert_eq!(velocities(&path_a, 7), velocities(&path_b, 7));
    assert_ne!(velocities(&path_a, 7), velocities(&path_b, 8));
}

#[test]
fn pinned_mover_stays_pinned_until_freeze() {
    // Scenario-specific override: the designated sender stands still.
    let (_dir, path) = tmp();
    let config = ScenarioConfig::standard(42, &path);
    let mut r = runner(&config);
    r.context_mut().fleet.set_velocity(MoverId(0), Vec2::ZERO);

    assert!(r.context().fleet.velocity(MoverId(0)).is_zero());
    let report = r.run().unwrap();
    assert!(report.frozen);
}
