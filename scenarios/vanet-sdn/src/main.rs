//! vanet-sdn — demo scenario runs over the rust_vanet instrumentation core.
//!
//! Two scenario shapes are available:
//!
//! - `vanet-sdn` (default): 40 movers spawned around two roadside-unit
//!   anchors, anchor-seeking steering, monitor from 5 s.
//! - `adhoc`: 40 movers spread uniformly over the arena, fixed random
//!   headings (mover 0 pinned as the designated sender), monitor from 1 s.
//!
//! Both freeze all movers at 60 s, sample once per second until 99 s, and
//! stop at the 100 s horizon.  Traffic comes from a synthetic constant-rate
//! flow model standing in for the external collector.

mod traffic;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use vanet_core::{MoverId, SimTime, StreamId, StreamRng, Vec2};
use vanet_mobility::{Anchor, MoverFleet, SteeringMode, SteeringPolicy};
use vanet_sched::{Event, Scheduler};
use vanet_sim::{ScenarioConfig, ScenarioContext, ScenarioRunner};

use traffic::SyntheticTraffic;

// ── Constants ─────────────────────────────────────────────────────────────────

const MOVER_COUNT: usize = 40;
const ARENA_SIZE: f64 = 500.0;
const SPAWN_RADIUS_MIN: f64 = 25.0;
const SPAWN_RADIUS_MAX: f64 = 125.0;
const MOBILITY_STEP: SimTime = SimTime::from_secs(1);

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum Scenario {
    /// Anchor-seeking movers around two roadside units.
    VanetSdn,
    /// Uniformly placed movers on fixed random headings.
    Adhoc,
}

#[derive(Parser)]
#[command(about = "Run a rust_vanet demo scenario")]
struct Args {
    #[arg(long, value_enum, default_value = "vanet-sdn")]
    scenario: Scenario,

    /// Enable the periodic QoS monitor.
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    enable_monitor: bool,

    /// Wifi PHY mode, forwarded to topology setup.
    #[arg(long)]
    phy_mode: Option<String>,

    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Metrics CSV path.
    #[arg(long, default_value = "simulation_results.csv")]
    output: PathBuf,
}

// ── Placement ─────────────────────────────────────────────────────────────────

/// The two roadside units, west and east of the arena center.
fn rsu_anchors() -> Vec<Anchor> {
    vec![
        Anchor::new(vanet_core::AnchorId(0), Vec2::new(125.0, 250.0)),
        Anchor::new(vanet_core::AnchorId(1), Vec2::new(375.0, 250.0)),
    ]
}

/// Spawn each mover at a random bearing and radius around a random anchor,
/// clamped to the arena.
fn place_near_anchors(seed: u64, anchors: &[Anchor]) -> MoverFleet {
    let mut position = StreamRng::new(seed, StreamId::Placement);
    let mut spawn_anchor = StreamRng::new(seed, StreamId::PlacementAnchor);

    let positions = (0..MOVER_COUNT)
        .map(|_| {
            let anchor = spawn_anchor
                .choose(anchors)
                .expect("anchor set is non-empty");
            let angle = position.gen_angle();
            let radius = position.gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX);
            Vec2::new(
                (anchor.position.x + radius * angle.cos()).clamp(0.0, ARENA_SIZE),
                (anchor.position.y + radius * angle.sin()).clamp(0.0, ARENA_SIZE),
            )
        })
        .collect();
    MoverFleet::from_positions(positions)
}

/// Spawn movers uniformly over the arena.
fn place_uniform(seed: u64) -> MoverFleet {
    let mut position = StreamRng::new(seed, StreamId::Placement);
    let positions = (0..MOVER_COUNT)
        .map(|_| {
            Vec2::new(
                position.gen_range(0.0..ARENA_SIZE),
                position.gen_range(0.0..ARENA_SIZE),
            )
        })
        .collect();
    MoverFleet::from_positions(positions)
}

// ── Mobility integration ──────────────────────────────────────────────────────

/// The constant-velocity mobility model's integration step: advance every
/// position once per second until the horizon.
struct MobilityStep;

impl Event<ScenarioContext<SyntheticTraffic>> for MobilityStep {
    fn fire(
        self: Box<Self>,
        ctx: &mut ScenarioContext<SyntheticTraffic>,
        sched: &mut Scheduler<ScenarioContext<SyntheticTraffic>>,
    ) {
        ctx.fleet.advance(MOBILITY_STEP);
        if sched.now() + MOBILITY_STEP <= sched.horizon() {
            sched.schedule_in(MOBILITY_STEP, MobilityStep);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;
    let args = Args::parse();

    let (fleet, mode, flows, first_sample_at, default_phy) = match args.scenario {
        Scenario::VanetSdn => {
            let anchors = rsu_anchors();
            let fleet = place_near_anchors(args.seed, &anchors);
            (
                fleet,
                SteeringMode::AnchorSeeking { anchors },
                traffic::anchor_scenario_flows(),
                SimTime::from_secs(5),
                "OfdmRate12MbpsBW10MHz",
            )
        }
        Scenario::Adhoc => (
            place_uniform(args.seed),
            SteeringMode::FixedHeading,
            traffic::adhoc_scenario_flows(),
            SimTime::from_secs(1),
            "DsssRate1Mbps",
        ),
    };

    let mut config = ScenarioConfig::standard(args.seed, &args.output);
    config.monitor.enabled = args.enable_monitor;
    config.monitor.first_sample_at = first_sample_at;
    config.phy_mode = args.phy_mode.unwrap_or_else(|| default_phy.to_owned());

    println!(
        "=== rust_vanet {:?} ===\nmovers: {MOVER_COUNT}  |  flows: {}  |  seed: {}",
        args.scenario,
        flows.len(),
        args.seed,
    );

    let mut runner =
        ScenarioRunner::new(&config, flows, fleet, &mode, &SteeringPolicy::default())?;

    if args.scenario == Scenario::Adhoc {
        // The designated sender stands still for the whole run.
        runner.context_mut().fleet.set_velocity(MoverId(0), Vec2::ZERO);
    }

    // Wire in the external mobility model's integration step.
    runner.schedule_at(MOBILITY_STEP, MobilityStep);

    let report = runner.run()?;

    println!();
    println!(
        "run complete at {}: {} samples, fleet {}",
        report.final_time,
        report.samples_written,
        if report.frozen { "frozen" } else { "still moving" },
    );
    if config.monitor.enabled {
        println!("metrics: {}", config.monitor.output_path.display());
    }

    println!();
    println!("{:<8} {:<22} {:<22}", "Mover", "Position", "Velocity");
    println!("{}", "-".repeat(52));
    for state in runner.context().fleet.states.iter().take(10) {
        println!(
            "{:<8} {:<22} {:<22}",
            state.id.0,
            state.position.to_string(),
            state.velocity.to_string(),
        );
    }

    Ok(())
}
