//! Input events and on-screen control hit-testing

use std::collections::VecDeque;

use crate::consts::{BUTTON_SIZE, EXIT_BUTTON_POS, PAUSE_BUTTON_POS, RESTART_BUTTON_POS};
use crate::sim::GameState;

/// Discrete input delivered by the host once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Space bar
    Fire,
    TogglePause,
    Restart,
    /// Window close or exit button
    Exit,
    /// Mouse/touch press in surface coordinates
    PointerDown { x: i32, y: i32 },
}

/// The three clickable controls along the top edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Restart,
    PlayPause,
    Exit,
}

impl ControlButton {
    /// Inclusive click rectangle as (x0, y0, x1, y1)
    pub fn hit_rect(self) -> (i32, i32, i32, i32) {
        match self {
            // Restart and exit are a little wider than their glyphs
            ControlButton::Restart => {
                let (x, y) = RESTART_BUTTON_POS;
                (x, y, x + 30, y + 30)
            }
            ControlButton::PlayPause => {
                let (x, y) = PAUSE_BUTTON_POS;
                (x, y, x + 2 * BUTTON_SIZE, y + 30)
            }
            ControlButton::Exit => {
                let (x, y) = EXIT_BUTTON_POS;
                (x, y, x + 30, y + 30)
            }
        }
    }

    /// Which control, if any, sits under (x, y)
    pub fn hit_test(x: i32, y: i32) -> Option<Self> {
        [ControlButton::Restart, ControlButton::PlayPause, ControlButton::Exit]
            .into_iter()
            .find(|button| {
                let (x0, y0, x1, y1) = button.hit_rect();
                (x0..=x1).contains(&x) && (y0..=y1).contains(&y)
            })
    }

    pub fn event(self) -> InputEvent {
        match self {
            ControlButton::Restart => InputEvent::Restart,
            ControlButton::PlayPause => InputEvent::TogglePause,
            ControlButton::Exit => InputEvent::Exit,
        }
    }
}

/// Map pointer presses onto control events; other events pass through.
///
/// Presses outside every control are dropped.
pub fn resolve_event(event: InputEvent) -> Option<InputEvent> {
    match event {
        InputEvent::PointerDown { x, y } => ControlButton::hit_test(x, y).map(ControlButton::event),
        other => Some(other),
    }
}

/// Anything that can feed the frame driver with per-frame events
pub trait InputSource {
    fn poll(&mut self, state: &GameState) -> Vec<InputEvent>;
}

/// Replays a fixed list of per-frame event batches, then goes quiet
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.frames.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _state: &GameState) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_hit_test() {
        assert_eq!(ControlButton::hit_test(10, 10), Some(ControlButton::Restart));
        assert_eq!(ControlButton::hit_test(40, 40), Some(ControlButton::Restart));
        assert_eq!(ControlButton::hit_test(420, 25), Some(ControlButton::PlayPause));
        assert_eq!(ControlButton::hit_test(790, 10), Some(ControlButton::Exit));
        assert_eq!(ControlButton::hit_test(41, 10), None);
        assert_eq!(ControlButton::hit_test(400, 300), None);
    }

    #[test]
    fn test_resolve_event() {
        assert_eq!(
            resolve_event(InputEvent::PointerDown { x: 765, y: 15 }),
            Some(InputEvent::Exit)
        );
        assert_eq!(resolve_event(InputEvent::PointerDown { x: 0, y: 0 }), None);
        assert_eq!(resolve_event(InputEvent::Fire), Some(InputEvent::Fire));
    }

    #[test]
    fn test_scripted_input_drains() {
        let state = GameState::new(crate::Settings::default());
        let mut input = ScriptedInput::new([vec![InputEvent::Fire], vec![]]);
        assert_eq!(input.poll(&state), vec![InputEvent::Fire]);
        assert!(input.poll(&state).is_empty());
        assert!(input.is_exhausted());
        assert!(input.poll(&state).is_empty());
    }
}
