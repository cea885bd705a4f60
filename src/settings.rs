//! Game settings and tuning
//!
//! Loaded from an optional JSON file; every field falls back to the
//! reference tuning when absent.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Largest playfield side or pixel length accepted from a settings file
pub const MAX_DIMENSION: i32 = 4096;

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Surface width in pixels
    pub width: i32,
    /// Surface height in pixels
    pub height: i32,

    // === Ring ===
    /// Radius of the outermost ring (inner rings are 1/2 and 1/4 of it)
    pub ring_radius: i32,
    /// Band width handed to the host arc primitive
    pub ring_thickness: i32,
    /// Angular width of each gap (degrees)
    pub gap_width_deg: f32,

    // === Projectile ===
    /// Upward distance travelled per tick (pixels)
    pub arrow_speed: i32,
    /// Shaft length of the arrow glyph
    pub arrow_length: i32,
    /// Arrowhead stroke length as a fraction of the shaft
    pub arrow_head_fraction: f32,
    /// Spawn height above the bottom edge
    pub arrow_start_offset: i32,

    // === Target ===
    /// Target radius (hit box half-extent and outline radius)
    pub target_radius: i32,
    /// Clearance between the outer ring and the target center
    pub target_clearance: i32,

    // === Rules ===
    /// Misses allowed before the run is lost
    pub max_misses: u32,

    // === Timing ===
    /// Fixed tick rate
    pub tick_rate_hz: u32,
    /// Delay before a popped target reappears
    pub respawn_delay_ms: u32,
    /// How long the final banner stays up after Won/Lost
    pub terminal_hold_ms: u32,
    /// Sleep to each tick boundary (disable for fast headless runs)
    pub paced: bool,
    /// Safety cap on driver frames (0 = unlimited)
    pub max_frames: u64,

    // === Demo pilot ===
    /// Seed for the autopilot RNG
    pub autopilot_seed: u64,
    /// Probability the autopilot fires without waiting for a gap
    pub autopilot_error_rate: f32,

    // === Output ===
    /// Where to write the final frame (binary PPM)
    pub snapshot_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,

            ring_radius: 100,
            ring_thickness: 5,
            gap_width_deg: 100.0,

            arrow_speed: 15,
            arrow_length: 50,
            arrow_head_fraction: 0.1,
            arrow_start_offset: 50,

            target_radius: 30,
            target_clearance: 50,

            max_misses: 3,

            tick_rate_hz: 60,
            respawn_delay_ms: 1000,
            terminal_hold_ms: 3000,
            paced: true,
            max_frames: 60 * 60 * 10,

            autopilot_seed: 0x5eed,
            autopilot_error_rate: 0.15,

            snapshot_path: None,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {e}; using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json_str(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.validated()
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Clamp values the simulation cannot work with
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();

        if self.width <= 0 || self.height <= 0 {
            log::warn!("Playfield {}x{} is empty, using default size", self.width, self.height);
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            log::warn!("Playfield {}x{} capped to {MAX_DIMENSION}", self.width, self.height);
            self.width = self.width.min(MAX_DIMENSION);
            self.height = self.height.min(MAX_DIMENSION);
        }
        if self.ring_radius <= 0 {
            log::warn!("ring_radius {} must be positive", self.ring_radius);
            self.ring_radius = defaults.ring_radius;
        }
        for (name, value) in [
            ("ring_radius", &mut self.ring_radius),
            ("ring_thickness", &mut self.ring_thickness),
            ("arrow_speed", &mut self.arrow_speed),
            ("arrow_length", &mut self.arrow_length),
            ("arrow_start_offset", &mut self.arrow_start_offset),
            ("target_radius", &mut self.target_radius),
            ("target_clearance", &mut self.target_clearance),
        ] {
            if value.unsigned_abs() > MAX_DIMENSION.unsigned_abs() {
                let capped = (*value).clamp(-MAX_DIMENSION, MAX_DIMENSION);
                log::warn!("{name} {value} capped to {capped}");
                *value = capped;
            }
        }
        if !(0.0..=360.0).contains(&self.gap_width_deg) {
            let clamped = if self.gap_width_deg.is_nan() {
                defaults.gap_width_deg
            } else {
                self.gap_width_deg.clamp(0.0, 360.0)
            };
            log::warn!("gap_width_deg {} clamped to {}", self.gap_width_deg, clamped);
            self.gap_width_deg = clamped;
        }
        if self.arrow_speed <= 0 {
            log::warn!("arrow_speed {} must be positive", self.arrow_speed);
            self.arrow_speed = defaults.arrow_speed;
        }
        if self.max_misses == 0 {
            log::warn!("max_misses must be at least 1");
            self.max_misses = defaults.max_misses;
        }
        if self.tick_rate_hz == 0 {
            log::warn!("tick_rate_hz must be at least 1");
            self.tick_rate_hz = defaults.tick_rate_hz;
        }
        self.autopilot_error_rate = self.autopilot_error_rate.clamp(0.0, 1.0);

        self
    }

    /// Wall-clock length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz.max(1) as f64)
    }

    /// Convert a millisecond delay to whole ticks (at least one)
    fn ms_to_ticks(&self, ms: u32) -> u64 {
        let ticks = (ms as u64 * self.tick_rate_hz as u64).div_ceil(1000);
        ticks.max(1)
    }

    /// Ticks between a target pop and its respawn
    pub fn respawn_delay_ticks(&self) -> u64 {
        self.ms_to_ticks(self.respawn_delay_ms)
    }

    /// Ticks the final banner is held before the driver exits
    pub fn terminal_hold_ticks(&self) -> u64 {
        self.ms_to_ticks(self.terminal_hold_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_tuning() {
        let settings = Settings::default();
        assert_eq!((settings.width, settings.height), (800, 600));
        assert_eq!(settings.ring_radius, 100);
        assert_eq!(settings.gap_width_deg, 100.0);
        assert_eq!(settings.max_misses, 3);
        assert_eq!(settings.respawn_delay_ticks(), 60);
        assert_eq!(settings.terminal_hold_ticks(), 180);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json_str(r#"{ "gap_width_deg": 45.0, "paced": false }"#)
            .expect("valid json");
        assert_eq!(settings.gap_width_deg, 45.0);
        assert!(!settings.paced);
        assert_eq!(settings.ring_radius, 100);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/ring-shot-settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_validated_clamps() {
        let settings = Settings {
            gap_width_deg: 500.0,
            max_misses: 0,
            tick_rate_hz: 0,
            autopilot_error_rate: 2.0,
            ..Default::default()
        }
        .validated();
        assert_eq!(settings.gap_width_deg, 360.0);
        assert_eq!(settings.max_misses, 3);
        assert_eq!(settings.tick_rate_hz, 60);
        assert_eq!(settings.autopilot_error_rate, 1.0);
    }

    #[test]
    fn test_validated_caps_oversized_lengths() {
        let settings = Settings {
            width: 1_000_000,
            height: i32::MAX,
            ring_radius: 50_000,
            arrow_length: i32::MAX,
            target_clearance: i32::MIN,
            ..Default::default()
        }
        .validated();
        assert_eq!((settings.width, settings.height), (MAX_DIMENSION, MAX_DIMENSION));
        assert_eq!(settings.ring_radius, MAX_DIMENSION);
        assert_eq!(settings.arrow_length, MAX_DIMENSION);
        assert_eq!(settings.target_clearance, -MAX_DIMENSION);
        assert_eq!(settings.arrow_speed, 15);
    }
}
