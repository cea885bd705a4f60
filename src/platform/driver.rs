//! Frame driver
//!
//! Owns the game state and the surface, turns host events into tick input,
//! renders every frame, holds the final banner after Won/Lost and paces the
//! loop to the configured tick rate.

use std::time::{Duration, Instant};

use super::input::{InputEvent, InputSource, resolve_event};
use crate::Settings;
use crate::renderer::{Surface, banner_text, hud_lines, render};
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Maximum ticks the pacer may fall behind before it resynchronizes
const MAX_CATCHUP_TICKS: u32 = 8;

/// Why the driver stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Exit button or window close
    UserExit,
    /// Run ended and the final banner was shown
    Finished(GamePhase),
    /// Frame cap reached
    FrameLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    Running,
    Exited(ExitReason),
}

pub struct FrameDriver<S: Surface> {
    state: GameState,
    surface: S,
    /// Frames presented so far
    frame: u64,
    /// Frames left to show the final banner
    hold_remaining: Option<u64>,
    last_hud: [String; 3],
}

impl<S: Surface> FrameDriver<S> {
    pub fn new(settings: Settings, surface: S) -> Self {
        let state = GameState::new(settings);
        let last_hud = hud_lines(&state);
        log::info!(
            "Ring Shot starting ({}x{}, {} Hz)",
            state.settings.width,
            state.settings.height,
            state.settings.tick_rate_hz
        );
        Self {
            state,
            surface,
            frame: 0,
            hold_remaining: None,
            last_hud,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Collapse this frame's events into one tick input.
    ///
    /// Returns None when the player asked to exit.
    fn collect_input(events: &[InputEvent]) -> Option<TickInput> {
        let mut input = TickInput::default();
        for event in events.iter().copied().filter_map(resolve_event) {
            match event {
                InputEvent::Fire => input.fire = true,
                InputEvent::TogglePause => input.toggle_pause = !input.toggle_pause,
                InputEvent::Restart => input.restart = true,
                InputEvent::Exit => return None,
                InputEvent::PointerDown { .. } => {}
            }
        }
        Some(input)
    }

    /// Run one frame: input, tick, render
    pub fn step(&mut self, events: &[InputEvent]) -> DriverStatus {
        self.frame += 1;

        if let Some(remaining) = self.hold_remaining.as_mut() {
            if *remaining == 0 {
                return DriverStatus::Exited(ExitReason::Finished(self.state.phase));
            }
            *remaining -= 1;
            render(&self.state, &mut self.surface);
            return DriverStatus::Running;
        }

        let Some(input) = Self::collect_input(events) else {
            log::info!("Exiting the game");
            return DriverStatus::Exited(ExitReason::UserExit);
        };

        tick(&mut self.state, &input);
        render(&self.state, &mut self.surface);

        let hud = hud_lines(&self.state);
        if hud != self.last_hud {
            log::debug!("{}", hud.join(" | "));
            self.last_hud = hud;
        }

        if let Some(banner) = banner_text(self.state.phase) {
            log::info!("{banner}");
            self.hold_remaining = Some(self.state.settings.terminal_hold_ticks());
        }

        let max_frames = self.state.settings.max_frames;
        if max_frames != 0 && self.frame >= max_frames {
            log::warn!("Frame limit {max_frames} reached");
            return DriverStatus::Exited(ExitReason::FrameLimit);
        }

        DriverStatus::Running
    }

    /// Drive frames from `input` until the game exits
    pub fn run<I: InputSource>(&mut self, input: &mut I) -> ExitReason {
        let tick_duration = self.state.settings.tick_duration();
        let paced = self.state.settings.paced;
        let mut next_deadline = Instant::now() + tick_duration;

        loop {
            let events = input.poll(&self.state);
            if let DriverStatus::Exited(reason) = self.step(&events) {
                return reason;
            }

            if paced {
                next_deadline = pace(next_deadline, tick_duration);
            }
        }
    }
}

/// Sleep until `deadline`, returning the next one.
///
/// A loop that falls too far behind skips ahead instead of bursting.
fn pace(deadline: Instant, tick_duration: Duration) -> Instant {
    let now = Instant::now();
    if now < deadline {
        std::thread::sleep(deadline - now);
        deadline + tick_duration
    } else if now - deadline > tick_duration * MAX_CATCHUP_TICKS {
        log::debug!("Frame pacing fell behind, resynchronizing");
        now + tick_duration
    } else {
        deadline + tick_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ScriptedInput;
    use crate::renderer::{Color, PixelBuffer};

    fn driver(settings: Settings) -> FrameDriver<PixelBuffer> {
        let surface = PixelBuffer::new(settings.width, settings.height);
        FrameDriver::new(settings, surface)
    }

    fn fast_settings() -> Settings {
        Settings {
            paced: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_exit_button_stops() {
        let mut driver = driver(fast_settings());
        assert_eq!(driver.step(&[]), DriverStatus::Running);
        assert_eq!(
            driver.step(&[InputEvent::PointerDown { x: 770, y: 20 }]),
            DriverStatus::Exited(ExitReason::UserExit)
        );
    }

    #[test]
    fn test_pause_button_toggles() {
        let mut driver = driver(fast_settings());
        driver.step(&[InputEvent::PointerDown { x: 410, y: 20 }]);
        assert_eq!(driver.state().phase, GamePhase::Paused);
        // Two toggles in the same frame cancel out
        driver.step(&[InputEvent::TogglePause, InputEvent::TogglePause]);
        assert_eq!(driver.state().phase, GamePhase::Paused);
        driver.step(&[InputEvent::TogglePause]);
        assert_eq!(driver.state().phase, GamePhase::Playing);
    }

    #[test]
    fn test_renders_each_frame() {
        let mut driver = driver(fast_settings());
        driver.step(&[]);
        assert_eq!(driver.surface().get_pixel(400, 120), Some(Color::RED));
        assert_eq!(driver.frame(), 1);
    }

    #[test]
    fn test_holds_banner_then_finishes() {
        let settings = Settings {
            terminal_hold_ms: 100,
            max_misses: 1,
            ..fast_settings()
        };
        let hold = settings.terminal_hold_ticks();
        let mut driver = driver(settings);
        // Lose on the first blocked shot
        driver.state.clock = crate::sim::RotationClock::new(100.0);

        let mut input = ScriptedInput::new([vec![InputEvent::Fire]]);
        let reason = driver.run(&mut input);
        assert_eq!(reason, ExitReason::Finished(GamePhase::Lost));
        // 25 ticks of flight, the hold frames, and the frame that exits
        assert_eq!(driver.frame(), 25 + hold + 1);
    }

    #[test]
    fn test_frame_limit() {
        let settings = Settings {
            max_frames: 5,
            ..fast_settings()
        };
        let mut driver = driver(settings);
        let mut input = ScriptedInput::default();
        assert_eq!(driver.run(&mut input), ExitReason::FrameLimit);
        assert_eq!(driver.frame(), 5);
    }

    #[test]
    fn test_autopilot_session_finishes() {
        let settings = Settings {
            autopilot_error_rate: 0.0,
            ..fast_settings()
        };
        let mut driver = driver(settings.clone());
        let mut pilot = crate::platform::AutoPilot::new(settings.autopilot_seed, 0.0);
        let reason = driver.run(&mut pilot);
        assert_eq!(reason, ExitReason::Finished(GamePhase::Won));
        assert_eq!(driver.state().score, crate::consts::WIN_SCORE);
        assert_eq!(driver.state().misses, 0);
    }
}
