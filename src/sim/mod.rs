//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure and reproducible:
//! - Elapsed time comes in as an argument, never from a clock
//! - Seeded RNG only
//! - Stable iteration order (population order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{overlaps_any, rects_overlap};
pub use rect::{Rect, VisualTag};
pub use state::{
    Agent, Contestant, Controller, DeathCause, EndReason, EpisodePhase, EpisodeState,
    EvaluatedController, Obstacle, RngState, ScoreLatch, SensorState,
};
pub use tick::{TickReport, advance, clamp_dt, tick};
