//! Axis-aligned rectangle geometry for agents, gate bars and score zones
//!
//! Screen coordinates: origin at the top-left, y grows downward.
//! Size is fixed at construction; only the position moves.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Opaque render hint carried alongside geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualTag {
    Agent,
    GateBar,
    /// Trigger region, never drawn
    ScoreZone,
}

impl VisualTag {
    /// Packed 0xRRGGBB fill color
    pub fn color(&self) -> u32 {
        match self {
            VisualTag::Agent => 0xFF_FF_FF,
            VisualTag::GateBar => 0x00_FF_00,
            VisualTag::ScoreZone => 0x00_00_00,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, VisualTag::ScoreZone)
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    size: Vec2,
    pub tag: VisualTag,
}

impl Rect {
    /// Callers guarantee `width > 0` and `height > 0` (checked by config validation)
    pub fn new(x: f32, y: f32, width: f32, height: f32, tag: VisualTag) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "rect size must be positive");
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            tag,
        }
    }

    /// Set the top-left corner
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    /// Shift by an offset
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.pos += delta;
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}
