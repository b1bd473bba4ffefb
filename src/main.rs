//! Flappy Gate headless runner
//!
//! Evaluates a small population of hand-written controllers for a few
//! generations and logs the fitness history. Real optimizers call
//! `run_episode` directly with their own controllers and display sink.
//!
//! Usage: `flappy-gate [config.json] [generations]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use flappy_gate::sim::SensorState;
use flappy_gate::{Controller, FitnessHistory, HeadlessSink, SimConfig, run_episode};

/// Frames per episode before the runner gives up on a generation
const MAX_FRAMES: u64 = 60 * 120;
const DEFAULT_GENERATIONS: u32 = 5;

/// Hand-written population members
#[derive(Debug, Clone)]
enum DemoController {
    /// Jump while below the gap center plus a bias
    GapFollower { bias: f32 },
    /// Jump with a fixed probability each tick
    Random { rate: f64, rng: Pcg32 },
    /// Never jump
    Idle,
}

impl Controller for DemoController {
    fn decide(&mut self, sensors: &SensorState) -> f32 {
        match self {
            DemoController::GapFollower { bias } => {
                let gap_center = (sensors.gap_top_y + sensors.gap_bottom_y) / 2.0;
                if sensors.agent_y > gap_center + *bias {
                    1.0
                } else {
                    0.0
                }
            }
            DemoController::Random { rate, rng } => {
                if rng.random_bool(*rate) { 1.0 } else { 0.0 }
            }
            DemoController::Idle => 0.0,
        }
    }
}

fn population(generation: u32) -> Vec<DemoController> {
    let mut members: Vec<_> = [-40.0, -20.0, 0.0, 20.0, 40.0]
        .into_iter()
        .map(|bias| DemoController::GapFollower { bias })
        .collect();
    members.extend([0.05, 0.1, 0.2].into_iter().map(|rate| DemoController::Random {
        rate,
        rng: Pcg32::seed_from_u64(u64::from(generation) * 31 + (rate * 100.0) as u64),
    }));
    members.push(DemoController::Idle);
    members
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Gate (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match SimConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    let generations = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_GENERATIONS);
    log::info!(
        "Jump policy {}, integration {:?}, bounds {:?}",
        config.jump_policy.as_str(),
        config.integration,
        config.bounds
    );

    let mut history = FitnessHistory::new();
    for generation in 0..generations {
        let mut sink = HeadlessSink::default().with_max_frames(MAX_FRAMES);
        let seed = u64::from(generation);
        let outcome = match run_episode(&config, &mut sink, population(generation), seed) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        };
        if let Some(best) = outcome.best() {
            log::info!(
                "Generation {generation} best: {:?} (score {})",
                best.controller, best.score
            );
        }
        history.record(&outcome);
    }

    match history.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize history: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
