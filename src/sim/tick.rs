//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one frame, in a fixed order:
//! input, projectile and ring motion, due scheduled tasks, collision,
//! level and terminal evaluation.

use super::collision::{CollisionOutcome, check_collision};
use super::schedule::ScheduledAction;
use super::state::{GamePhase, GameState, LevelStatus, level_for_score};
use crate::consts::WIN_SCORE;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Fire an arrow (space bar)
    pub fire: bool,
    /// Pause toggle (play/pause button)
    pub toggle_pause: bool,
    /// Restart the run (restart button)
    pub restart: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Terminal states accept nothing further
    if state.phase.is_terminal() {
        return;
    }

    if input.restart {
        state.restart();
        return;
    }

    if input.toggle_pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            phase => phase,
        };
        log::info!("{}", if state.phase == GamePhase::Paused { "Paused" } else { "Resumed" });
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if input.fire && state.can_fire() {
        let spawn = state.projectile_spawn();
        state.projectile.fire(spawn);
        log::debug!("Arrow fired at tick {} (ring at {:.1}°)", state.time_ticks, state.clock.angle());
    }

    // Move the arrow up and rotate the rings
    if state.projectile.in_flight && !state.projectile.advance(state.settings.arrow_speed) {
        log::debug!("Arrow left the playfield");
    }
    state.clock.advance(state.rotation_speed);

    for action in state.schedule.drain_due(state.time_ticks) {
        match action {
            ScheduledAction::RespawnTarget => {
                state.target.respawn();
                log::debug!("Target respawned at tick {}", state.time_ticks);
            }
        }
    }

    let rings = state.rings();
    let outcome = check_collision(&state.projectile, &state.target, &rings, &state.clock);
    apply_collision(state, outcome);

    update_progress(state);
}

/// Apply a collision outcome to the score, misses, target and projectile
pub fn apply_collision(state: &mut GameState, outcome: CollisionOutcome) {
    match outcome {
        CollisionOutcome::NoEvent => return,
        CollisionOutcome::Hit => {
            state.score = (state.score + 1).min(WIN_SCORE);
            state.target.hide();
            let fire_at = state.time_ticks + state.settings.respawn_delay_ticks();
            state.schedule.schedule(fire_at, ScheduledAction::RespawnTarget);
            log::debug!(
                "Hit! score {} (ring at {:.1}°)",
                state.score,
                state.clock.angle()
            );
        }
        CollisionOutcome::Miss => {
            state.misses += 1;
            log::debug!(
                "Blocked by ring at {:.1}°, misses {}/{}",
                state.clock.angle(),
                state.misses,
                state.settings.max_misses
            );
        }
    }
    // One resolution per flight
    state.projectile.in_flight = false;
}

/// Re-derive level and speed from score, then check terminal conditions.
///
/// Won is evaluated before Lost.
pub fn update_progress(state: &mut GameState) {
    match level_for_score(state.score) {
        LevelStatus::Level {
            level,
            rotation_speed,
        } => {
            if level != state.level {
                log::info!("Level {level} (ring speed {rotation_speed}°/tick)");
            }
            state.level = level;
            state.rotation_speed = rotation_speed;
        }
        LevelStatus::Won => {
            enter_terminal(state, GamePhase::Won);
            return;
        }
    }

    if state.misses >= state.settings.max_misses {
        enter_terminal(state, GamePhase::Lost);
    }
}

fn enter_terminal(state: &mut GameState, phase: GamePhase) {
    state.phase = phase;
    state.misses = state.misses.min(state.settings.max_misses);
    state.projectile.in_flight = false;
    state.schedule.cancel_all();
    log::info!(
        "{:?} with score {} and {} miss(es)",
        phase,
        state.score,
        state.misses
    );
}
