//! Per-frame scene composition
//!
//! Text is left to the host (it owns fonts); this module only produces the
//! strings it should show.

use glam::IVec2;

use super::colors;
use super::raster::Surface;
use super::shapes::{
    draw_arrow, draw_exit_glyph, draw_gap_ring, draw_play_pause_glyph, draw_restart_glyph,
    draw_target,
};
use crate::consts::{
    BUTTON_SIZE, EXIT_BUTTON_POS, FIRING_ANGLE_DEG, PAUSE_BUTTON_POS, RESTART_BUTTON_POS,
};
use crate::sim::{GamePhase, GameState};

/// Draw the full scene for the current state
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let settings = &state.settings;
    surface.clear(colors::BACKGROUND);

    for ring in state.rings() {
        draw_gap_ring(
            surface,
            &ring,
            state.clock.angle(),
            settings.ring_thickness,
            colors::RING,
        );
    }

    if state.projectile.in_flight {
        // The arrow's tip is the tracked position, so the shaft hangs below it
        let tip = state.projectile.pos;
        let base = IVec2::new(tip.x, tip.y + settings.arrow_length);
        let head = (settings.arrow_length as f32 * settings.arrow_head_fraction).round() as i32;
        draw_arrow(
            surface,
            base,
            FIRING_ANGLE_DEG,
            settings.arrow_length,
            head,
            colors::ARROW,
        );
    }

    if state.target.visible {
        draw_target(surface, &state.target, colors::TARGET);
    }

    let (x, y) = RESTART_BUTTON_POS;
    draw_restart_glyph(surface, x, y, BUTTON_SIZE, colors::RESTART_BUTTON);
    let (x, y) = PAUSE_BUTTON_POS;
    draw_play_pause_glyph(
        surface,
        x,
        y,
        BUTTON_SIZE,
        colors::PAUSE_BUTTON,
        state.phase == GamePhase::Paused,
    );
    let (x, y) = EXIT_BUTTON_POS;
    draw_exit_glyph(surface, x, y, BUTTON_SIZE, colors::EXIT_BUTTON);
}

/// Score, misses and level lines for the HUD (top to bottom)
pub fn hud_lines(state: &GameState) -> [String; 3] {
    [
        format!("Score: {}", state.score),
        format!("Misses: {}/{}", state.misses, state.settings.max_misses),
        format!("Level: {}", state.level),
    ]
}

/// Final message shown once the run is over
pub fn banner_text(phase: GamePhase) -> Option<&'static str> {
    match phase {
        GamePhase::Won => Some("You Won The Game!"),
        GamePhase::Lost => Some("Game Over!"),
        GamePhase::Playing | GamePhase::Paused => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::renderer::{Color, PixelBuffer};
    use crate::sim::{TickInput, tick};

    fn frame(state: &GameState) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(state.settings.width, state.settings.height);
        render(state, &mut buffer);
        buffer
    }

    #[test]
    fn test_render_initial_frame() {
        let state = GameState::new(Settings::default());
        let buffer = frame(&state);

        // Target outline at (400, 150) with radius 30
        assert_eq!(buffer.get_pixel(400, 120), Some(Color::RED));
        // Ring is solid at 135° with rotation 0 (gaps are [0,100) and [180,280))
        let solid = crate::polar_offset(state.center(), 135.0, 98.0);
        assert_eq!(buffer.get_pixel(solid.x, solid.y), Some(Color::WHITE));
        let gap = crate::polar_offset(state.center(), 90.0, 98.0);
        assert_eq!(buffer.get_pixel(gap.x, gap.y), Some(Color::BLACK));
        // Buttons
        assert_eq!(buffer.get_pixel(10, 20), Some(Color::TEAL));
        assert_eq!(buffer.get_pixel(760, 10), Some(Color::RED));
    }

    #[test]
    fn test_render_arrow_in_flight() {
        let mut state = GameState::new(Settings::default());
        tick(
            &mut state,
            &TickInput {
                fire: true,
                ..Default::default()
            },
        );
        let buffer = frame(&state);
        let tip = state.projectile.pos;
        assert_eq!(buffer.get_pixel(tip.x, tip.y), Some(Color::WHITE));
        assert_eq!(buffer.get_pixel(tip.x, tip.y + 50), Some(Color::WHITE));
    }

    #[test]
    fn test_level_five_draws_three_rings() {
        let mut state = GameState::new(Settings::default());
        state.level = 5;
        let buffer = frame(&state);
        for radius in [100.0, 50.0, 25.0] {
            let p = crate::polar_offset(state.center(), 135.0, radius - 1.0);
            assert_eq!(buffer.get_pixel(p.x, p.y), Some(Color::WHITE), "radius {radius}");
        }
    }

    #[test]
    fn test_hud_and_banner() {
        let mut state = GameState::new(Settings::default());
        state.score = 5;
        state.misses = 1;
        state.level = 2;
        assert_eq!(hud_lines(&state), ["Score: 5", "Misses: 1/3", "Level: 2"]);
        assert_eq!(banner_text(GamePhase::Playing), None);
        assert_eq!(banner_text(GamePhase::Won), Some("You Won The Game!"));
        assert_eq!(banner_text(GamePhase::Lost), Some("Game Over!"));
    }
}
