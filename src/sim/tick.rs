//! Episode tick
//!
//! Advances every alive agent and the gate by one frame of elapsed time.
//! Per-agent order: sense, decide, integrate, score, survival reward, death.

use serde::{Deserialize, Serialize};

use super::state::{Controller, DeathCause, EndReason, EpisodePhase, EpisodeState, SensorState};
use crate::consts::MAX_SUBSTEPS;

/// Telemetry from one tick, for the HUD and logs (not authoritative)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickReport {
    /// Elapsed time actually integrated (after clamping)
    pub dt: f32,
    pub survivors: usize,
    /// Highest fitness among survivors (0 when none)
    pub max_fitness: f32,
    pub gates_passed: u32,
    /// Population ids that scored this tick
    pub scored: Vec<usize>,
    /// Population ids that died this tick
    pub deaths: Vec<(usize, DeathCause)>,
}

/// Clamp elapsed time into `[0, max_dt]`; NaN and negatives become zero
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt)
    }
}

/// Advance the episode by `dt` seconds
///
/// A zero (or clamped-to-zero) `dt` is a no-op tick: no controller is
/// queried and no state changes.
pub fn tick<C: Controller>(state: &mut EpisodeState<C>, dt: f32) -> TickReport {
    let dt = clamp_dt(dt, state.config.max_frame_dt);
    let mut report = TickReport {
        dt,
        ..Default::default()
    };

    if state.is_running() && dt > 0.0 {
        state.time_ticks += 1;
        state.elapsed += dt;

        // Backward so removals never shift an index we have yet to visit
        for i in (0..state.contestants.len()).rev() {
            let config = &state.config;
            let contestant = &mut state.contestants[i];

            let sensors = SensorState::observe(&contestant.agent, &state.obstacle);
            if contestant.controller.decide(&sensors) > config.jump_threshold {
                contestant.agent.jump();
            }

            contestant.agent.integrate(dt);

            if contestant.agent.check_score(state.obstacle.score_zone_rect()) {
                contestant.fitness += config.score_reward;
                report.scored.push(contestant.id);
            }

            contestant.fitness += config.survival_reward_rate * dt;
            contestant.ticks_alive += 1;

            if let Some(cause) = contestant
                .agent
                .death_cause(config.field_height, &state.obstacle)
            {
                contestant.fitness -= cause.penalty(config);
                contestant.agent.alive = false;
                log::debug!(
                    "Agent {} died ({:?}) after {} ticks, fitness {:.3}",
                    contestant.id,
                    cause,
                    contestant.ticks_alive,
                    contestant.fitness
                );
                report.deaths.push((contestant.id, cause));
                state.retire(i, Some(cause));
            }
        }

        state.obstacle.update(dt);

        if state.contestants.is_empty() {
            state.phase = EpisodePhase::Ended(EndReason::AllDead);
        }
    }

    report.survivors = state.contestants.len();
    report.max_fitness = state.max_fitness();
    report.gates_passed = state.obstacle.gates_passed;
    log::trace!(
        "tick {} dt={:.4} survivors={} max_fitness={:.3}",
        state.time_ticks,
        dt,
        report.survivors,
        report.max_fitness
    );
    report
}

/// Advance the episode by `dt` seconds in ticks of at most `max_frame_dt`
///
/// Used for sped-up frames whose simulated time exceeds one tick's bound.
/// Stops early once the episode ends. The merged report holds every death
/// and score from the substeps, with the last substep's totals.
pub fn advance<C: Controller>(state: &mut EpisodeState<C>, dt: f32) -> TickReport {
    let max_dt = state.config.max_frame_dt;
    if dt.is_nan() || dt <= 0.0 {
        return tick(state, 0.0);
    }
    let substeps = ((dt / max_dt).ceil() as u32).clamp(1, MAX_SUBSTEPS);
    let step = dt / substeps as f32;

    let mut merged = TickReport::default();
    for _ in 0..substeps {
        let report = tick(state, step);
        merged.dt += report.dt;
        merged.survivors = report.survivors;
        merged.max_fitness = report.max_fitness;
        merged.gates_passed = report.gates_passed;
        merged.scored.extend(report.scored);
        merged.deaths.extend(report.deaths);
        if !state.is_running() {
            break;
        }
    }
    merged
}
