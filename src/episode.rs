//! Episode loop
//!
//! Runs one generation's controllers against a fresh gate until every agent
//! is dead or the sink signals stop, then hands the controllers back with
//! their fitness.

use crate::platform::{DisplaySink, SimSpeed, hud};
use crate::round3;
use crate::settings::{ConfigError, SimConfig};
use crate::sim::{EndReason, EpisodePhase, EpisodeState, RngState, TickReport, advance, clamp_dt};

pub use crate::sim::{Controller, DeathCause, EvaluatedController, SensorState};

/// Result of one episode
#[derive(Debug, Clone)]
pub struct EpisodeOutcome<C> {
    /// One entry per controller, in the order they were passed in
    pub results: Vec<EvaluatedController<C>>,
    pub end_reason: EndReason,
    /// Ticks that advanced time
    pub ticks: u64,
    /// Simulated seconds
    pub elapsed: f32,
    pub gates_passed: u32,
}

impl<C> EpisodeOutcome<C> {
    /// Fitness per controller, in input order
    pub fn fitness(&self) -> Vec<f32> {
        self.results.iter().map(|r| r.fitness).collect()
    }

    pub fn best(&self) -> Option<&EvaluatedController<C>> {
        self.results
            .iter()
            .max_by(|a, b| a.fitness.total_cmp(&b.fitness))
    }

    /// Hand the controllers back with their fitness, in input order
    pub fn into_controllers(self) -> impl Iterator<Item = (C, f32)> {
        self.results.into_iter().map(|r| (r.controller, r.fitness))
    }
}

impl<C: Controller> EpisodeState<C> {
    /// Finish the episode and collect results in input order
    pub fn into_outcome(mut self) -> EpisodeOutcome<C> {
        if self.is_running() {
            self.stop();
        }
        let end_reason = match self.phase {
            EpisodePhase::Ended(reason) => reason,
            EpisodePhase::Running => EndReason::Stopped,
        };
        self.retired.sort_by_key(|r| r.id);
        EpisodeOutcome {
            results: self.retired,
            end_reason,
            ticks: self.time_ticks,
            elapsed: self.elapsed,
            gates_passed: self.obstacle.gates_passed,
        }
    }
}

/// Draw the four HUD labels
fn render_hud<S: DisplaySink>(sink: &mut S, report: &TickReport, speed: f32) {
    sink.render_text(&speed.to_string(), hud::SIM_SPEED);
    sink.render_text(&report.survivors.to_string(), hud::SURVIVORS);
    sink.render_text(&report.gates_passed.to_string(), hud::GATES_PASSED);
    sink.render_text(&round3(report.max_fitness).to_string(), hud::MAX_FITNESS);
}

/// Evaluate `controllers` for one episode
///
/// Fails only if `config` is invalid, before any tick runs. The stop signal
/// is polled once per frame; a stopped episode keeps survivors' fitness.
pub fn run_episode<C, S>(
    config: &SimConfig,
    sink: &mut S,
    controllers: impl IntoIterator<Item = C>,
    seed: u64,
) -> Result<EpisodeOutcome<C>, ConfigError>
where
    C: Controller,
    S: DisplaySink,
{
    let mut state = EpisodeState::new(config, controllers, RngState::new(seed).to_rng())?;
    let mut speed = SimSpeed::new(config);
    log::info!(
        "Episode starting: {} agents, seed {}",
        state.contestants.len(),
        seed
    );

    sink.render(&state.render_items());

    while state.is_running() {
        if sink.poll_stop_signal() {
            log::info!("Stop requested with {} agents alive", state.contestants.len());
            state.stop();
            break;
        }

        if let Some(input) = sink.speed_input() {
            speed.apply(input);
            log::debug!("Sim speed now {}", speed.multiplier());
        }

        // Stall bound applies to wall-clock time, before speed scaling
        let frame_dt = clamp_dt(sink.elapsed_time_unit(), config.max_frame_dt);
        let report = advance(&mut state, frame_dt * speed.multiplier());

        sink.render(&state.render_items());
        render_hud(sink, &report, speed.multiplier());
    }

    let outcome = state.into_outcome();
    log::info!(
        "Episode ended ({:?}) after {} ticks ({:.2}s), {} gates passed, best fitness {:.3}",
        outcome.end_reason,
        outcome.ticks,
        outcome.elapsed,
        outcome.gates_passed,
        outcome.best().map_or(0.0, |b| b.fitness)
    );
    Ok(outcome)
}
