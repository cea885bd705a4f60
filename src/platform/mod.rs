//! Platform abstraction layer
//!
//! Everything between the host and the simulation:
//! - Input events and control hit-testing
//! - Frame driving, terminal banner hold and tick pacing
//! - A look-ahead autopilot for headless demo runs

pub mod autopilot;
pub mod driver;
pub mod input;

pub use autopilot::AutoPilot;
pub use driver::{DriverStatus, ExitReason, FrameDriver};
pub use input::{ControlButton, InputEvent, InputSource, ScriptedInput, resolve_event};
