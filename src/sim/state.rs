//! Game state and core simulation types
//!
//! Everything the frame driver hands to `tick` and `render` lives here; there
//! is no ambient global state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::ring::{Ring, RotationClock, active_rings};
use super::schedule::TaskQueue;
use crate::Settings;
use crate::consts::WIN_SCORE;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Rotation, projectile and collisions frozen; rendering continues
    Paused,
    /// Score reached the win threshold (terminal)
    Won,
    /// Misses reached the cap (terminal)
    Lost,
}

impl GamePhase {
    /// Won and Lost accept no further gameplay ticks
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Level derived from score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LevelStatus {
    Level { level: u32, rotation_speed: f32 },
    Won,
}

/// Level table: score thresholds to (level, ring speed in degrees per tick).
///
/// Any score at or past the win threshold maps to `Won`.
pub fn level_for_score(score: u32) -> LevelStatus {
    let (level, rotation_speed) = match score {
        0..4 => (1, 1.0),
        4..7 => (2, 2.0),
        7..10 => (3, 2.0),
        10..16 => (4, 3.0),
        16..WIN_SCORE => (5, 1.0),
        _ => return LevelStatus::Won,
    };
    LevelStatus::Level {
        level,
        rotation_speed,
    }
}

/// The arrow: fixed at the horizontal center, always travelling straight up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Tip position
    pub pos: IVec2,
    pub in_flight: bool,
}

impl Projectile {
    pub fn new(spawn: IVec2) -> Self {
        Self {
            pos: spawn,
            in_flight: false,
        }
    }

    /// Launch from `spawn`
    pub fn fire(&mut self, spawn: IVec2) {
        self.pos = spawn;
        self.in_flight = true;
    }

    /// Move up by `speed`; returns false once the tip leaves the playfield
    pub fn advance(&mut self, speed: i32) -> bool {
        self.pos.y -= speed;
        if self.pos.y < 0 {
            self.in_flight = false;
        }
        self.in_flight
    }
}

/// The balloon the player is trying to pop
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: IVec2,
    pub radius: i32,
    pub visible: bool,
    /// Where the target reappears after a respawn
    pub home: IVec2,
}

impl Target {
    pub fn new(home: IVec2, radius: i32) -> Self {
        Self {
            pos: home,
            radius,
            visible: true,
            home,
        }
    }

    /// Axis-aligned hit box test (edges inclusive)
    pub fn bounds_contain(&self, point: IVec2) -> bool {
        (point.x - self.pos.x).abs() <= self.radius && (point.y - self.pos.y).abs() <= self.radius
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn respawn(&mut self) {
        self.pos = self.home;
        self.visible = true;
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Tuning this run was started with
    pub settings: Settings,
    /// Hits so far (never exceeds the win score)
    pub score: u32,
    /// Misses so far
    pub misses: u32,
    /// Current level (1-5)
    pub level: u32,
    /// Ring rotation applied each playing tick (degrees)
    pub rotation_speed: f32,
    /// Current phase
    pub phase: GamePhase,
    /// Shared ring rotation
    pub clock: RotationClock,
    pub projectile: Projectile,
    pub target: Target,
    /// Pending delayed events
    pub schedule: TaskQueue,
    /// Unpaused simulation ticks since the run started
    pub time_ticks: u64,
}

impl GameState {
    /// Create a fresh run
    pub fn new(settings: Settings) -> Self {
        let projectile = Projectile::new(Self::spawn_point(&settings));
        let target = Target::new(Self::target_home(&settings), settings.target_radius);
        let (level, rotation_speed) = match level_for_score(0) {
            LevelStatus::Level {
                level,
                rotation_speed,
            } => (level, rotation_speed),
            LevelStatus::Won => (1, 1.0),
        };

        Self {
            settings,
            score: 0,
            misses: 0,
            level,
            rotation_speed,
            phase: GamePhase::Playing,
            clock: RotationClock::default(),
            projectile,
            target,
            schedule: TaskQueue::new(),
            time_ticks: 0,
        }
    }

    /// Start over with the same settings
    pub fn restart(&mut self) {
        let settings = self.settings.clone();
        *self = Self::new(settings);
        log::info!("Game restarted");
    }

    /// Center of the rings
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.settings.width / 2, self.settings.height / 2)
    }

    /// Rings drawn and tested at the current level, outermost first
    pub fn rings(&self) -> Vec<Ring> {
        active_rings(
            self.level,
            self.center(),
            self.settings.ring_radius,
            self.settings.gap_width_deg,
        )
    }

    /// Whether a new arrow may be fired right now
    pub fn can_fire(&self) -> bool {
        self.phase == GamePhase::Playing && !self.projectile.in_flight
    }

    fn spawn_point(settings: &Settings) -> IVec2 {
        IVec2::new(
            settings.width / 2,
            settings.height - settings.arrow_start_offset,
        )
    }

    fn target_home(settings: &Settings) -> IVec2 {
        IVec2::new(
            settings.width / 2,
            settings.height / 2 - settings.ring_radius - settings.target_clearance,
        )
    }

    /// Arrow spawn position for this playfield
    pub fn projectile_spawn(&self) -> IVec2 {
        Self::spawn_point(&self.settings)
    }
}
