//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per frame)
//! - Delayed events through the tick-based task queue, never platform timers
//! - No rendering or platform dependencies

pub mod collision;
pub mod ring;
pub mod schedule;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, check_collision, projectile_angle};
pub use ring::{GapInterval, Ring, RotationClock, active_rings, is_angle_in_gap};
pub use schedule::{ScheduledAction, TaskQueue};
pub use state::{GamePhase, GameState, LevelStatus, Projectile, Target, level_for_score};
pub use tick::{TickInput, tick};
