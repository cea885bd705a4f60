//! Ring Shot entry point
//!
//! Runs a headless session: the autopilot plays, frames are rendered into an
//! in-memory surface and the final frame can be saved as a PPM image.
//!
//! Usage: `ring-shot [settings.json]`

use std::fs::File;
use std::io::BufWriter;

use ring_shot::Settings;
use ring_shot::platform::{AutoPilot, FrameDriver};
use ring_shot::renderer::{PixelBuffer, hud_lines};

fn main() {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let surface = PixelBuffer::new(settings.width, settings.height);
    let mut pilot = AutoPilot::new(settings.autopilot_seed, settings.autopilot_error_rate);
    let mut driver = FrameDriver::new(settings, surface);

    let reason = driver.run(&mut pilot);
    let state = driver.state();
    log::info!(
        "Session ended after {} frames: {:?} ({})",
        driver.frame(),
        reason,
        hud_lines(state).join(", ")
    );

    match serde_json::to_string(state) {
        Ok(json) => log::debug!("Final state: {json}"),
        Err(e) => log::warn!("Could not serialize final state: {e}"),
    }

    if let Some(path) = state.settings.snapshot_path.as_deref() {
        let written = File::create(path).and_then(|file| driver.surface().write_ppm(BufWriter::new(file)));
        match written {
            Ok(()) => log::info!("Final frame written to {path}"),
            Err(e) => log::warn!("Could not write final frame to {path}: {e}"),
        }
    }
}
