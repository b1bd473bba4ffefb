//! Flappy Gate - a scrolling gate reflex game used as a fitness environment
//!
//! Core modules:
//! - `sim`: Simulation (agents, gates, collisions, per-tick fitness)
//! - `episode`: Episode loop driving controllers against a display sink
//! - `platform`: Display sink abstraction (timing, input, rendering)
//! - `settings`: Validated, data-driven configuration
//! - `stats`: Per-generation fitness history

pub mod episode;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod stats;

pub use episode::{Controller, EpisodeOutcome, EvaluatedController, run_episode};
pub use platform::{DisplaySink, HeadlessSink, SpeedInput};
pub use settings::{BoundsPolicy, ConfigError, Integration, JumpPolicy, SimConfig};
pub use stats::FitnessHistory;

/// Game configuration defaults
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Agent defaults
    pub const AGENT_SPAWN_X: f32 = 300.0;
    pub const AGENT_SPAWN_Y: f32 = 200.0;
    pub const AGENT_SIZE: f32 = 20.0;
    /// Downward acceleration (pixels/s²)
    pub const AGENT_GRAVITY: f32 = 1500.0;
    /// Velocity set by a jump (negative is up)
    pub const AGENT_JUMP_IMPULSE: f32 = -600.0;

    /// Gate defaults
    pub const GATE_START_X: f32 = 700.0;
    pub const GATE_BAR_WIDTH: f32 = 150.0;
    pub const GATE_BAR_HEIGHT: f32 = 500.0;
    /// Gap between the bars before any random offset
    pub const GATE_GAP_TOP: f32 = 200.0;
    pub const GATE_GAP_HEIGHT: f32 = 200.0;
    pub const GATE_OFFSET_MIN: f32 = -200.0;
    pub const GATE_OFFSET_MAX: f32 = 200.0;
    /// Leftward scroll speed (pixels/s)
    pub const GATE_SCROLL_SPEED: f32 = 500.0;

    /// Fitness shaping
    pub const SCORE_REWARD: f32 = 5.0;
    pub const SURVIVAL_REWARD_RATE: f32 = 0.1;
    pub const COLLISION_PENALTY: f32 = 1.0;
    pub const OUT_OF_BOUNDS_PENALTY: f32 = 0.5;
    /// Controller outputs above this trigger a jump
    pub const JUMP_THRESHOLD: f32 = 0.5;

    /// Largest elapsed time a single tick may integrate (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Most ticks one sped-up frame is split into
    pub const MAX_SUBSTEPS: u32 = 16;
    /// Nominal frame time for headless runs (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Simulation speed multiplier bounds
    pub const SIM_SPEED_MIN: f32 = 0.1;
    pub const SIM_SPEED_MAX: f32 = 10.0;
    pub const SIM_SPEED_STEP: f32 = 0.1;
}

/// Round to three decimals (HUD display precision)
#[inline]
pub fn round3(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}
