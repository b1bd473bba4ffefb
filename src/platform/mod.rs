//! Platform abstraction layer
//!
//! The episode loop talks to the outside world only through [`DisplaySink`]:
//! - Time (elapsed time per frame)
//! - Input (stop signal, simulation speed keys)
//! - Output (rectangles and HUD text)

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::FRAME_DT;
use crate::round3;
use crate::settings::SimConfig;
use crate::sim::Rect;

/// Simulation speed key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedInput {
    Faster,
    Slower,
}

/// Frame pump, input source and renderer for an episode
pub trait DisplaySink {
    /// Wall time since the previous frame, in seconds
    fn elapsed_time_unit(&mut self) -> f32;

    /// Speed key pressed this frame, if any
    fn speed_input(&mut self) -> Option<SpeedInput> {
        None
    }

    /// True when the user asked to quit
    fn poll_stop_signal(&mut self) -> bool;

    /// Draw the frame's rectangles (each carries its visual tag)
    fn render(&mut self, rects: &[Rect]);

    /// Draw one HUD label
    fn render_text(&mut self, text: &str, position: Vec2);
}

/// Simulation speed multiplier applied to elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSpeed {
    multiplier: f32,
    min: f32,
    max: f32,
    step: f32,
}

impl SimSpeed {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            multiplier: 1.0_f32.clamp(config.sim_speed_min, config.sim_speed_max),
            min: config.sim_speed_min,
            max: config.sim_speed_max,
            step: config.sim_speed_step,
        }
    }

    #[inline]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    pub fn step_up(&mut self) {
        self.multiplier = round3((self.multiplier + self.step).min(self.max));
    }

    pub fn step_down(&mut self) {
        self.multiplier = round3((self.multiplier - self.step).max(self.min));
    }

    pub fn apply(&mut self, input: SpeedInput) {
        match input {
            SpeedInput::Faster => self.step_up(),
            SpeedInput::Slower => self.step_down(),
        }
    }
}

/// HUD label positions
pub mod hud {
    use glam::Vec2;

    pub const SIM_SPEED: Vec2 = Vec2::new(10.0, 20.0);
    pub const SURVIVORS: Vec2 = Vec2::new(200.0, 20.0);
    pub const GATES_PASSED: Vec2 = Vec2::new(400.0, 20.0);
    pub const MAX_FITNESS: Vec2 = Vec2::new(600.0, 20.0);
}

/// Sink without a window: fixed frame time, optional frame cap
///
/// Used for batch evaluation and tests. Records the last frame's output.
#[derive(Debug, Clone)]
pub struct HeadlessSink {
    dt: f32,
    max_frames: Option<u64>,
    frames: u64,
    speed_inputs: VecDeque<Option<SpeedInput>>,
    /// Rectangles from the most recent `render` call
    pub last_frame: Vec<Rect>,
    /// HUD labels since the most recent `render` call
    pub last_hud: Vec<(String, Vec2)>,
}

impl Default for HeadlessSink {
    fn default() -> Self {
        Self::new(FRAME_DT)
    }
}

impl HeadlessSink {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            max_frames: None,
            frames: 0,
            speed_inputs: VecDeque::new(),
            last_frame: Vec::new(),
            last_hud: Vec::new(),
        }
    }

    /// Raise the stop signal once `frames` frames have been pumped
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Queue speed key presses, one per frame (`None` for no press)
    pub fn with_speed_inputs(
        mut self,
        inputs: impl IntoIterator<Item = Option<SpeedInput>>,
    ) -> Self {
        self.speed_inputs.extend(inputs);
        self
    }

    /// Frames pumped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Text of the HUD label drawn at `position`, if any
    pub fn hud_text(&self, position: Vec2) -> Option<&str> {
        self.last_hud
            .iter()
            .find(|(_, pos)| *pos == position)
            .map(|(text, _)| text.as_str())
    }
}

impl DisplaySink for HeadlessSink {
    fn elapsed_time_unit(&mut self) -> f32 {
        self.frames += 1;
        self.dt
    }

    fn speed_input(&mut self) -> Option<SpeedInput> {
        self.speed_inputs.pop_front().flatten()
    }

    fn poll_stop_signal(&mut self) -> bool {
        self.max_frames.is_some_and(|max| self.frames >= max)
    }

    fn render(&mut self, rects: &[Rect]) {
        self.last_frame.clear();
        self.last_frame.extend_from_slice(rects);
        self.last_hud.clear();
    }

    fn render_text(&mut self, text: &str, position: Vec2) {
        self.last_hud.push((text.to_owned(), position));
    }
}
