//! Demo pilot for headless runs
//!
//! Looks ahead by simulating a copy of the game: it fires only when the shot
//! would pass through a gap, except that a seeded fraction of shots are fired
//! blindly so a demo run can also lose.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::{InputEvent, InputSource};
use crate::sim::{GameState, TickInput, tick};

/// Upper bound on look-ahead ticks for one shot
const MAX_LOOKAHEAD_TICKS: u32 = 1000;

pub struct AutoPilot {
    rng: Pcg32,
    error_rate: f64,
    /// Decision for the next shot: Some(true) = fire blind
    blind_shot: Option<bool>,
}

impl AutoPilot {
    pub fn new(seed: u64, error_rate: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            error_rate: error_rate.clamp(0.0, 1.0) as f64,
            blind_shot: None,
        }
    }

    /// Would an arrow fired this tick pop the target?
    pub fn shot_would_hit(state: &GameState) -> bool {
        let mut preview = state.clone();
        let score_before = preview.score;

        tick(
            &mut preview,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        let idle = TickInput::default();
        let mut ticks = 0;
        while preview.projectile.in_flight && !preview.phase.is_terminal() && ticks < MAX_LOOKAHEAD_TICKS {
            tick(&mut preview, &idle);
            ticks += 1;
        }

        preview.score > score_before
    }
}

impl InputSource for AutoPilot {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent> {
        if !state.can_fire() || !state.target.visible {
            return Vec::new();
        }

        let error_rate = self.error_rate;
        let blind = *self
            .blind_shot
            .get_or_insert_with(|| self.rng.random_bool(error_rate));

        if blind || Self::shot_would_hit(state) {
            self.blind_shot = None;
            log::debug!("Autopilot fires{}", if blind { " blind" } else { "" });
            vec![InputEvent::Fire]
        } else {
            Vec::new()
        }
    }
}
