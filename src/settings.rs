//! Simulation configuration
//!
//! Loaded from JSON (missing fields fall back to defaults) and validated
//! once, before any episode runs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration failures, reported before an episode starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// When a jump request actually changes velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum JumpPolicy {
    /// Every request resets velocity to the jump impulse
    Always,
    /// Only while falling (velocity > 0), so held input cannot stack jumps
    #[default]
    WhenFalling,
}

impl JumpPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            JumpPolicy::Always => "Always",
            JumpPolicy::WhenFalling => "WhenFalling",
        }
    }
}

/// Vertical integration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Integration {
    /// Semi-implicit Euler over elapsed seconds
    #[default]
    Timestep,
    /// One step per tick; gravity is a per-frame acceleration
    FrameStep,
}

/// Which play field edges kill an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundsPolicy {
    #[default]
    TwoSided,
    BottomOnly,
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Agent ===
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub agent_size: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_policy: JumpPolicy,
    pub integration: Integration,
    pub bounds: BoundsPolicy,

    // === Gate ===
    pub gate_start_x: f32,
    pub bar_width: f32,
    pub bar_height: f32,
    /// Top of the gap before the random offset is applied
    pub gap_top: f32,
    pub gap_height: f32,
    /// Smallest gap `gap_height` may be configured to
    pub min_gap: f32,
    pub gap_offset_min: f32,
    pub gap_offset_max: f32,
    pub scroll_speed: f32,

    // === Fitness ===
    pub score_reward: f32,
    /// Fitness per second alive
    pub survival_reward_rate: f32,
    pub collision_penalty: f32,
    pub out_of_bounds_penalty: f32,
    pub jump_threshold: f32,

    // === Timing ===
    pub max_frame_dt: f32,
    pub sim_speed_min: f32,
    pub sim_speed_max: f32,
    pub sim_speed_step: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            spawn_x: AGENT_SPAWN_X,
            spawn_y: AGENT_SPAWN_Y,
            agent_size: AGENT_SIZE,
            gravity: AGENT_GRAVITY,
            jump_impulse: AGENT_JUMP_IMPULSE,
            jump_policy: JumpPolicy::WhenFalling,
            integration: Integration::Timestep,
            bounds: BoundsPolicy::TwoSided,

            gate_start_x: GATE_START_X,
            bar_width: GATE_BAR_WIDTH,
            bar_height: GATE_BAR_HEIGHT,
            gap_top: GATE_GAP_TOP,
            gap_height: GATE_GAP_HEIGHT,
            min_gap: GATE_GAP_HEIGHT / 2.0,
            gap_offset_min: GATE_OFFSET_MIN,
            gap_offset_max: GATE_OFFSET_MAX,
            scroll_speed: GATE_SCROLL_SPEED,

            score_reward: SCORE_REWARD,
            survival_reward_rate: SURVIVAL_REWARD_RATE,
            collision_penalty: COLLISION_PENALTY,
            out_of_bounds_penalty: OUT_OF_BOUNDS_PENALTY,
            jump_threshold: JUMP_THRESHOLD,

            max_frame_dt: MAX_FRAME_DT,
            sim_speed_min: SIM_SPEED_MIN,
            sim_speed_max: SIM_SPEED_MAX,
            sim_speed_step: SIM_SPEED_STEP,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations that would corrupt the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("agent_size", self.agent_size),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("gate_start_x", self.gate_start_x),
            ("bar_width", self.bar_width),
            ("bar_height", self.bar_height),
            ("gap_top", self.gap_top),
            ("gap_height", self.gap_height),
            ("min_gap", self.min_gap),
            ("gap_offset_min", self.gap_offset_min),
            ("gap_offset_max", self.gap_offset_max),
            ("scroll_speed", self.scroll_speed),
            ("score_reward", self.score_reward),
            ("survival_reward_rate", self.survival_reward_rate),
            ("collision_penalty", self.collision_penalty),
            ("out_of_bounds_penalty", self.out_of_bounds_penalty),
            ("jump_threshold", self.jump_threshold),
            ("max_frame_dt", self.max_frame_dt),
            ("sim_speed_min", self.sim_speed_min),
            ("sim_speed_max", self.sim_speed_max),
            ("sim_speed_step", self.sim_speed_step),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::invalid(field, format!("must be finite, got {value}")));
            }
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("agent_size", self.agent_size),
            ("bar_width", self.bar_width),
            ("bar_height", self.bar_height),
            ("min_gap", self.min_gap),
            ("max_frame_dt", self.max_frame_dt),
            ("sim_speed_min", self.sim_speed_min),
            ("sim_speed_step", self.sim_speed_step),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        if self.scroll_speed < 0.0 {
            return Err(ConfigError::invalid("scroll_speed", "must not be negative"));
        }
        if self.gap_height < self.min_gap {
            return Err(ConfigError::invalid(
                "gap_height",
                format!("{} is below min_gap {}", self.gap_height, self.min_gap),
            ));
        }
        if self.gap_offset_min > self.gap_offset_max {
            return Err(ConfigError::invalid(
                "gap_offset_min",
                format!(
                    "{} exceeds gap_offset_max {}",
                    self.gap_offset_min, self.gap_offset_max
                ),
            ));
        }
        // Bars must still cover the field edges at the extreme offsets
        if self.gap_top + self.gap_offset_max - self.bar_height > 0.0 {
            return Err(ConfigError::invalid(
                "bar_height",
                "upper bar leaves the top of the field uncovered",
            ));
        }
        if self.gap_top + self.gap_height + self.gap_offset_min + self.bar_height
            < self.field_height
        {
            return Err(ConfigError::invalid(
                "bar_height",
                "lower bar leaves the bottom of the field uncovered",
            ));
        }
        if self.sim_speed_min > self.sim_speed_max {
            return Err(ConfigError::invalid(
                "sim_speed_min",
                format!(
                    "{} exceeds sim_speed_max {}",
                    self.sim_speed_min, self.sim_speed_max
                ),
            ));
        }
        if self.sim_speed_max > MAX_SUBSTEPS as f32 {
            return Err(ConfigError::invalid(
                "sim_speed_max",
                format!("must be at most {MAX_SUBSTEPS}"),
            ));
        }
        if self.spawn_x < 0.0 || self.spawn_x + self.agent_size > self.field_width {
            return Err(ConfigError::invalid("spawn_x", "agent spawns outside the field"));
        }
        if self.spawn_y < 0.0 || self.spawn_y > self.field_height {
            return Err(ConfigError::invalid("spawn_y", "agent spawns outside the field"));
        }
        Ok(())
    }
}
