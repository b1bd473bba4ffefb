//! Episode state and core simulation types
//!
//! Everything one evaluation episode owns lives here: the agents with their
//! controllers and fitness, the scrolling gate, and the episode phase.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::overlaps_any;
use super::rect::{Rect, VisualTag};
use crate::settings::{BoundsPolicy, ConfigError, Integration, JumpPolicy, SimConfig};

/// Decision source for one agent, queried once per tick
pub trait Controller {
    /// Returns the jump drive; values above the configured threshold jump
    fn decide(&mut self, sensors: &SensorState) -> f32;
}

impl<F> Controller for F
where
    F: FnMut(&SensorState) -> f32,
{
    fn decide(&mut self, sensors: &SensorState) -> f32 {
        self(sensors)
    }
}

/// Edge detector for score zone contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreLatch {
    #[default]
    OutOfZone,
    InZone,
}

impl ScoreLatch {
    /// Feed the current overlap state; true only on the OutOfZone -> InZone edge
    pub fn update(&mut self, overlapping: bool) -> bool {
        match (*self, overlapping) {
            (ScoreLatch::OutOfZone, true) => {
                *self = ScoreLatch::InZone;
                true
            }
            (ScoreLatch::InZone, false) => {
                *self = ScoreLatch::OutOfZone;
                false
            }
            _ => false,
        }
    }
}

/// Why an agent left the episode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    OutOfBounds,
    Collision,
}

impl DeathCause {
    /// Fitness subtracted when an agent dies this way
    pub fn penalty(&self, config: &SimConfig) -> f32 {
        match self {
            DeathCause::OutOfBounds => config.out_of_bounds_penalty,
            DeathCause::Collision => config.collision_penalty,
        }
    }
}

/// A controllable agent subject to gravity and jumps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub rect: Rect,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub jump_policy: JumpPolicy,
    pub integration: Integration,
    pub bounds: BoundsPolicy,
    /// Score zones passed
    pub score: u32,
    pub latch: ScoreLatch,
    /// Cleared on death; a dead agent no longer moves
    pub alive: bool,
}

impl Agent {
    /// Spawn at the configured start point, at rest
    pub fn spawn(config: &SimConfig) -> Self {
        Self {
            rect: Rect::new(
                config.spawn_x,
                config.spawn_y,
                config.agent_size,
                config.agent_size,
                VisualTag::Agent,
            ),
            velocity: 0.0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            jump_policy: config.jump_policy,
            integration: config.integration,
            bounds: config.bounds,
            score: 0,
            latch: ScoreLatch::OutOfZone,
            alive: true,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.rect.y()
    }

    /// Advance vertical motion; a non-positive `dt` is a no-op
    pub fn integrate(&mut self, dt: f32) {
        if !self.alive || dt.is_nan() || dt <= 0.0 {
            return;
        }
        let step = match self.integration {
            Integration::Timestep => {
                self.velocity += self.gravity * dt;
                self.velocity * dt
            }
            Integration::FrameStep => {
                self.velocity += self.gravity;
                self.velocity
            }
        };
        self.rect.translate(Vec2::new(0.0, step));
    }

    /// Request a jump; honored according to the jump policy
    pub fn jump(&mut self) {
        if !self.alive {
            return;
        }
        match self.jump_policy {
            JumpPolicy::Always => self.velocity = self.jump_impulse,
            JumpPolicy::WhenFalling => {
                if self.velocity > 0.0 {
                    self.velocity = self.jump_impulse;
                }
            }
        }
    }

    /// True once the agent has left the play field between `top` and `bottom`
    pub fn is_out_of_bounds(&self, top: f32, bottom: f32) -> bool {
        let y = self.rect.y();
        match self.bounds {
            BoundsPolicy::TwoSided => y > bottom || y < top,
            BoundsPolicy::BottomOnly => y > bottom,
        }
    }

    pub fn collides_with_any(&self, obstacles: &[Rect]) -> bool {
        overlaps_any(&self.rect, obstacles)
    }

    /// Score a pass through `zone`; counts once per entry, however long the overlap lasts
    pub fn check_score(&mut self, zone: &Rect) -> bool {
        let entered = self.latch.update(self.rect.overlaps(zone));
        if entered {
            self.score += 1;
        }
        entered
    }

    /// Bounds are checked before collisions
    pub fn death_cause(&self, field_height: f32, obstacle: &Obstacle) -> Option<DeathCause> {
        if self.is_out_of_bounds(0.0, field_height) {
            Some(DeathCause::OutOfBounds)
        } else if self.collides_with_any(&obstacle.gate_rects()) {
            Some(DeathCause::Collision)
        } else {
            None
        }
    }
}

/// Gate geometry copied out of the config at construction
#[derive(Debug, Clone, Copy)]
struct GateLayout {
    field_width: f32,
    bar_width: f32,
    bar_height: f32,
    gap_top: f32,
    gap_height: f32,
    offset_min: f32,
    offset_max: f32,
}

/// A pair of gate bars with a gap, plus the score zone inside the gap
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub upper: Rect,
    pub lower: Rect,
    pub score_zone: Rect,
    pub gap_center_y: f32,
    /// Vertical offset of the gap from its base position
    pub gap_offset: f32,
    /// Leftward speed (pixels/s)
    pub scroll_speed: f32,
    /// Gates that have scrolled fully off-screen and been recycled
    pub gates_passed: u32,
    layout: GateLayout,
    rng: Pcg32,
}

impl Obstacle {
    /// Build the first gate at the configured start position, gap at zero offset
    pub fn new(config: &SimConfig, rng: Pcg32) -> Self {
        let layout = GateLayout {
            field_width: config.field_width,
            bar_width: config.bar_width,
            bar_height: config.bar_height,
            gap_top: config.gap_top,
            gap_height: config.gap_height,
            offset_min: config.gap_offset_min,
            offset_max: config.gap_offset_max,
        };
        let bar = Rect::new(
            0.0,
            0.0,
            config.bar_width,
            config.bar_height,
            VisualTag::GateBar,
        );
        let zone_width = config.bar_width / 10.0;
        let mut obstacle = Self {
            upper: bar,
            lower: bar,
            score_zone: Rect::new(
                0.0,
                0.0,
                zone_width,
                config.gap_height,
                VisualTag::ScoreZone,
            ),
            gap_center_y: 0.0,
            gap_offset: 0.0,
            scroll_speed: config.scroll_speed,
            gates_passed: 0,
            layout,
            rng,
        };
        obstacle.place(config.gate_start_x, 0.0);
        obstacle
    }

    /// Convenience constructor with a seeded generator
    pub fn from_seed(config: &SimConfig, seed: u64) -> Self {
        Self::new(config, Pcg32::seed_from_u64(seed))
    }

    /// Put the gate at `x` with the gap shifted by `offset`
    fn place(&mut self, x: f32, offset: f32) {
        let l = self.layout;
        let gap_top = l.gap_top + offset;
        let zone_inset = (l.bar_width - self.score_zone.width()) / 2.0;
        self.upper.move_to(x, gap_top - l.bar_height);
        self.lower.move_to(x, gap_top + l.gap_height);
        self.score_zone.move_to(x + zone_inset, gap_top);
        self.gap_offset = offset;
        self.gap_center_y = gap_top + l.gap_height / 2.0;
    }

    /// Both bars are fully past the left edge
    pub fn is_off_screen(&self) -> bool {
        self.upper.right() < 0.0 && self.lower.right() < 0.0
    }

    /// Scroll left, or recycle to the right edge with a new gap once off-screen
    pub fn update(&mut self, dt: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        if self.is_off_screen() {
            let (min, max) = (self.layout.offset_min, self.layout.offset_max);
            let offset = self.rng.random_range(min..=max);
            self.place(self.layout.field_width, offset);
            self.gates_passed += 1;
            log::debug!(
                "Gate recycled (passed={}, gap_offset={:.1})",
                self.gates_passed,
                offset
            );
        } else {
            let delta = Vec2::new(-self.scroll_speed * dt, 0.0);
            self.upper.translate(delta);
            self.lower.translate(delta);
            self.score_zone.translate(delta);
        }
    }

    pub fn gate_rects(&self) -> [Rect; 2] {
        [self.upper, self.lower]
    }

    pub fn score_zone_rect(&self) -> &Rect {
        &self.score_zone
    }

    /// Top-left corner of the gap
    pub fn gap_top_left(&self) -> Vec2 {
        Vec2::new(self.upper.x(), self.upper.bottom())
    }

    /// Bottom-right corner of the gap
    pub fn gap_bottom_right(&self) -> Vec2 {
        Vec2::new(self.upper.right(), self.lower.y())
    }
}

/// Fixed-order observation handed to a controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorState {
    pub agent_y: f32,
    pub agent_velocity: f32,
    pub gap_top_x: f32,
    pub gap_top_y: f32,
    pub gap_bottom_x: f32,
    pub gap_bottom_y: f32,
}

impl SensorState {
    /// Number of controller inputs
    pub const LEN: usize = 6;

    pub fn observe(agent: &Agent, obstacle: &Obstacle) -> Self {
        let top = obstacle.gap_top_left();
        let bottom = obstacle.gap_bottom_right();
        Self {
            agent_y: agent.y(),
            agent_velocity: agent.velocity,
            gap_top_x: top.x,
            gap_top_y: top.y,
            gap_bottom_x: bottom.x,
            gap_bottom_y: bottom.y,
        }
    }

    pub fn to_array(&self) -> [f32; Self::LEN] {
        [
            self.agent_y,
            self.agent_velocity,
            self.gap_top_x,
            self.gap_top_y,
            self.gap_bottom_x,
            self.gap_bottom_y,
        ]
    }
}

/// An agent, its controller and its fitness, kept together so removal is atomic
#[derive(Debug, Clone)]
pub struct Contestant<C> {
    /// Position in the population handed to the episode
    pub id: usize,
    pub agent: Agent,
    pub controller: C,
    pub fitness: f32,
    pub ticks_alive: u64,
}

/// Final result for one controller
#[derive(Debug, Clone)]
pub struct EvaluatedController<C> {
    pub id: usize,
    pub controller: C,
    pub fitness: f32,
    pub score: u32,
    /// `None` if the agent was still alive when the episode stopped
    pub death: Option<DeathCause>,
    pub ticks_alive: u64,
}

/// Why the episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    AllDead,
    Stopped,
}

/// Episode lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EpisodePhase {
    Running,
    Ended(EndReason),
}

/// RNG seed wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete state of one evaluation episode
#[derive(Debug, Clone)]
pub struct EpisodeState<C> {
    pub config: SimConfig,
    /// Alive agents, in population order
    pub contestants: Vec<Contestant<C>>,
    /// Agents that have died (or were alive at stop), in retirement order
    pub retired: Vec<EvaluatedController<C>>,
    pub obstacle: Obstacle,
    pub phase: EpisodePhase,
    /// Ticks that advanced time
    pub time_ticks: u64,
    /// Simulated seconds
    pub elapsed: f32,
}

impl<C: Controller> EpisodeState<C> {
    /// Validate the config and spawn one agent per controller
    pub fn new(
        config: &SimConfig,
        controllers: impl IntoIterator<Item = C>,
        rng: Pcg32,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let contestants: Vec<_> = controllers
            .into_iter()
            .enumerate()
            .map(|(id, controller)| Contestant {
                id,
                agent: Agent::spawn(config),
                controller,
                fitness: 0.0,
                ticks_alive: 0,
            })
            .collect();
        let phase = if contestants.is_empty() {
            EpisodePhase::Ended(EndReason::AllDead)
        } else {
            EpisodePhase::Running
        };
        Ok(Self {
            config: config.clone(),
            retired: Vec::with_capacity(contestants.len()),
            contestants,
            obstacle: Obstacle::new(config, rng),
            phase,
            time_ticks: 0,
            elapsed: 0.0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.phase == EpisodePhase::Running
    }

    /// Highest fitness among survivors (0 when none)
    pub fn max_fitness(&self) -> f32 {
        self.contestants
            .iter()
            .map(|c| c.fitness)
            .reduce(f32::max)
            .unwrap_or(0.0)
    }

    /// Remove the contestant at `index`, keeping the rest in order
    pub fn retire(&mut self, index: usize, death: Option<DeathCause>) {
        let Contestant {
            id,
            agent,
            controller,
            fitness,
            ticks_alive,
        } = self.contestants.remove(index);
        debug_assert_eq!(agent.alive, death.is_none(), "agent {id} retired out of step");
        self.retired.push(EvaluatedController {
            id,
            controller,
            fitness,
            score: agent.score,
            death,
            ticks_alive,
        });
    }

    /// External stop: end now, survivors keep the fitness they have
    pub fn stop(&mut self) {
        while let Some(index) = self.contestants.len().checked_sub(1) {
            self.retire(index, None);
        }
        self.phase = EpisodePhase::Ended(EndReason::Stopped);
    }

    /// Everything the display sink should draw, gate bars first
    pub fn render_items(&self) -> Vec<Rect> {
        self.obstacle
            .gate_rects()
            .into_iter()
            .chain(self.contestants.iter().map(|c| c.agent.rect))
            .filter(|r| r.tag.is_visible())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> SimConfig {
        SimConfig::default()
    }

    #[test]
    fn test_integrate_zero_dt_is_noop() {
        let mut agent = Agent::spawn(&config());
        agent.velocity = 123.0;
        let before = agent.clone();
        agent.integrate(0.0);
        agent.integrate(-0.5);
        assert_eq!(agent.rect, before.rect);
        assert_eq!(agent.velocity, before.velocity);
    }

    #[test]
    fn test_integrate_timestep() {
        let mut agent = Agent::spawn(&config());
        agent.integrate(0.1);
        // v = 1500 * 0.1 = 150, y = 200 + 150 * 0.1 = 215
        assert!((agent.velocity - 150.0).abs() < 1e-3);
        assert!((agent.y() - 215.0).abs() < 1e-3);
    }

    #[test]
    fn test_integrate_frame_step_ignores_dt_magnitude() {
        let cfg = SimConfig {
            integration: Integration::FrameStep,
            gravity: 0.5,
            ..config()
        };
        let mut a = Agent::spawn(&cfg);
        let mut b = Agent::spawn(&cfg);
        a.integrate(0.001);
        b.integrate(0.09);
        assert_eq!(a.velocity, 0.5);
        assert_eq!(a.y(), 200.5);
        assert_eq!(a.rect, b.rect);
    }

    #[test]
    fn test_jump_when_falling_guard() {
        let mut agent = Agent::spawn(&config());
        // At rest: not falling, jump ignored
        agent.jump();
        assert_eq!(agent.velocity, 0.0);

        agent.velocity = 10.0;
        agent.jump();
        assert_eq!(agent.velocity, -600.0);

        // Rising: a second request does not stack
        agent.velocity = -300.0;
        agent.jump();
        assert_eq!(agent.velocity, -300.0);
    }

    #[test]
    fn test_dead_agent_is_frozen() {
        let mut agent = Agent::spawn(&config());
        agent.velocity = 50.0;
        agent.alive = false;
        let before = agent.clone();
        agent.jump();
        agent.integrate(0.1);
        assert_eq!(agent.rect, before.rect);
        assert_eq!(agent.velocity, 50.0);
    }

    #[test]
    fn test_jump_always() {
        let cfg = SimConfig {
            jump_policy: JumpPolicy::Always,
            ..config()
        };
        let mut agent = Agent::spawn(&cfg);
        agent.jump();
        assert_eq!(agent.velocity, -600.0);
        agent.velocity = -100.0;
        agent.jump();
        assert_eq!(agent.velocity, -600.0);
    }

    #[test]
    fn test_out_of_bounds_policies() {
        let mut agent = Agent::spawn(&config());
        assert!(!agent.is_out_of_bounds(0.0, 600.0));
        agent.rect.move_to(300.0, -1.0);
        assert!(agent.is_out_of_bounds(0.0, 600.0));
        agent.rect.move_to(300.0, 601.0);
        assert!(agent.is_out_of_bounds(0.0, 600.0));

        agent.bounds = BoundsPolicy::BottomOnly;
        agent.rect.move_to(300.0, -50.0);
        assert!(!agent.is_out_of_bounds(0.0, 600.0));
        agent.rect.move_to(300.0, 601.0);
        assert!(agent.is_out_of_bounds(0.0, 600.0));
    }

    #[test]
    fn test_score_is_edge_triggered() {
        let mut agent = Agent::spawn(&config());
        let zone = Rect::new(290.0, 0.0, 40.0, 600.0, VisualTag::ScoreZone);

        let entries = (0..5).filter(|_| agent.check_score(&zone)).count();
        assert_eq!(entries, 1);
        assert_eq!(agent.score, 1);

        // Leave the zone, then re-enter: a second pass scores again
        let away = Rect::new(600.0, 0.0, 40.0, 600.0, VisualTag::ScoreZone);
        assert!(!agent.check_score(&away));
        assert_eq!(agent.latch, ScoreLatch::OutOfZone);
        assert!(agent.check_score(&zone));
        assert_eq!(agent.score, 2);
    }

    #[test]
    fn test_initial_gate_layout() {
        let obstacle = Obstacle::from_seed(&config(), 1);
        assert_eq!(obstacle.upper.x(), 700.0);
        assert_eq!(obstacle.upper.y(), -300.0);
        assert_eq!(obstacle.lower.y(), 400.0);
        assert_eq!(obstacle.gap_top_left(), Vec2::new(700.0, 200.0));
        assert_eq!(obstacle.gap_bottom_right(), Vec2::new(850.0, 400.0));
        assert_eq!(obstacle.gap_center_y, 300.0);
        // Score zone sits inside the gap, horizontally centered on the bars
        assert_eq!(obstacle.score_zone.y(), 200.0);
        assert_eq!(obstacle.score_zone.height(), 200.0);
        let zone = obstacle.score_zone;
        assert!(zone.x() > 700.0 && zone.right() < 850.0);
    }

    #[test]
    fn test_obstacle_scrolls_and_keeps_height() {
        let mut obstacle = Obstacle::from_seed(&config(), 1);
        obstacle.update(0.1);
        assert!((obstacle.upper.x() - 650.0).abs() < 1e-3);
        assert!((obstacle.lower.x() - 650.0).abs() < 1e-3);
        assert_eq!(obstacle.upper.y(), -300.0);
        assert_eq!(obstacle.lower.y(), 400.0);

        obstacle.update(0.0);
        assert!((obstacle.upper.x() - 650.0).abs() < 1e-3);
    }

    #[test]
    fn test_obstacle_recycles_off_screen() {
        let mut obstacle = Obstacle::from_seed(&config(), 7);
        obstacle.update(1.8); // 700 - 900 = -200: fully off the left edge
        assert!(obstacle.is_off_screen());
        obstacle.update(0.01);
        assert_eq!(obstacle.upper.x(), 800.0);
        assert_eq!(obstacle.gates_passed, 1);
        assert!((-200.0..=200.0).contains(&obstacle.gap_offset));
    }

    fn offsets_for_seed(seed: u64, count: usize) -> Vec<f32> {
        let mut obstacle = Obstacle::from_seed(&config(), seed);
        (0..count)
            .map(|_| {
                obstacle.upper.move_to(-500.0, obstacle.upper.y());
                obstacle.lower.move_to(-500.0, obstacle.lower.y());
                obstacle.update(0.01);
                obstacle.gap_offset
            })
            .collect()
    }

    #[test]
    fn test_recycle_is_reproducible() {
        assert_eq!(offsets_for_seed(42, 20), offsets_for_seed(42, 20));
        assert_ne!(offsets_for_seed(42, 20), offsets_for_seed(43, 20));
    }

    #[test]
    fn test_sensor_order() {
        let mut agent = Agent::spawn(&config());
        agent.velocity = -12.0;
        let obstacle = Obstacle::from_seed(&config(), 1);
        let sensors = SensorState::observe(&agent, &obstacle);
        assert_eq!(sensors.to_array(), [200.0, -12.0, 700.0, 200.0, 850.0, 400.0]);
    }

    #[test]
    fn test_death_cause_bounds_before_collision() {
        let cfg = config();
        let obstacle = Obstacle::from_seed(&cfg, 1);
        let mut agent = Agent::spawn(&cfg);
        assert_eq!(agent.death_cause(cfg.field_height, &obstacle), None);

        // Inside the upper bar and above the field at once
        agent.rect.move_to(710.0, -10.0);
        assert_eq!(
            agent.death_cause(cfg.field_height, &obstacle),
            Some(DeathCause::OutOfBounds)
        );

        agent.rect.move_to(710.0, 150.0);
        assert_eq!(
            agent.death_cause(cfg.field_height, &obstacle),
            Some(DeathCause::Collision)
        );
    }

    #[test]
    fn test_stop_retires_survivors() {
        let controllers = vec![|_: &SensorState| 0.0f32; 3];
        let rng = RngState::new(1).to_rng();
        let mut episode = EpisodeState::new(&config(), controllers, rng).unwrap();
        episode.contestants[1].fitness = 2.5;
        episode.stop();
        assert_eq!(episode.phase, EpisodePhase::Ended(EndReason::Stopped));
        assert!(episode.contestants.is_empty());
        assert_eq!(episode.retired.len(), 3);
        assert!(episode.retired.iter().all(|r| r.death.is_none()));
        let second = episode.retired.iter().find(|r| r.id == 1).unwrap();
        assert_eq!(second.fitness, 2.5);
    }

    #[test]
    fn test_invalid_config_fails_at_construction() {
        let cfg = SimConfig {
            bar_width: 0.0,
            ..config()
        };
        let result = EpisodeState::new(
            &cfg,
            vec![|_: &SensorState| 0.0f32],
            RngState::new(1).to_rng(),
        );
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "bar_width", .. })
        ));
    }

    #[test]
    fn test_render_items_skip_score_zone() {
        let controllers = vec![|_: &SensorState| 0.0f32; 2];
        let rng = RngState::new(1).to_rng();
        let episode = EpisodeState::new(&config(), controllers, rng).unwrap();
        let items = episode.render_items();
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|r| r.tag != VisualTag::ScoreZone));
        assert_eq!(items.iter().filter(|r| r.tag == VisualTag::Agent).count(), 2);
    }

    proptest! {
        #[test]
        fn proptest_recycled_bars_never_overlap(seed in any::<u64>(), recycles in 1usize..40) {
            let cfg = config();
            let mut obstacle = Obstacle::from_seed(&cfg, seed);
            for _ in 0..recycles {
                obstacle.upper.move_to(-1000.0, obstacle.upper.y());
                obstacle.lower.move_to(-1000.0, obstacle.lower.y());
                obstacle.update(0.016);
                prop_assert!(obstacle.upper.bottom() <= obstacle.lower.y());
                prop_assert!(obstacle.lower.y() - obstacle.upper.bottom() >= cfg.min_gap);
                prop_assert!(!obstacle.upper.overlaps(&obstacle.lower));
                prop_assert!(obstacle.gap_offset >= cfg.gap_offset_min);
                prop_assert!(obstacle.gap_offset <= cfg.gap_offset_max);

                // Score zone fills the gap and stays between the bars' edges
                let zone = obstacle.score_zone_rect();
                prop_assert!((zone.y() - obstacle.upper.bottom()).abs() < 1e-3);
                prop_assert!((zone.bottom() - obstacle.lower.y()).abs() < 1e-3);
                prop_assert!(zone.x() >= obstacle.upper.x());
                prop_assert!(zone.right() <= obstacle.upper.right());
            }
        }
    }
}
