//! Ring Shot - A rotating-ring target shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gap ring, collisions, game state)
//! - `renderer`: Software rasterizer and shape composition
//! - `platform`: Frame driver, input mapping and pacing
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Score that ends the run with a win
    pub const WIN_SCORE: u32 = 21;
    /// Number of gaps per ring (fixed, 180° apart)
    pub const GAP_COUNT: usize = 2;
    /// Angular offset between the two gaps (degrees)
    pub const GAP_SPACING_DEG: f32 = 180.0;

    /// Firing direction of the projectile (degrees, straight up)
    pub const FIRING_ANGLE_DEG: f32 = 90.0;
    /// Arrowhead strokes leave the tip at ±135° from the shaft
    pub const ARROWHEAD_SPREAD_DEG: f32 = 135.0;

    /// Control glyph placement (top-left corners) and size
    pub const BUTTON_SIZE: i32 = 20;
    pub const RESTART_BUTTON_POS: (i32, i32) = (10, 10);
    pub const PAUSE_BUTTON_POS: (i32, i32) = (400, 10);
    pub const EXIT_BUTTON_POS: (i32, i32) = (760, 10);
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Angle of `point` as seen from `center`, in screen space (y grows downward).
///
/// 0° is +x, angles increase counter-clockwise on screen, result in [0, 360).
#[inline]
pub fn screen_angle_degrees(center: IVec2, point: IVec2) -> f32 {
    let dx = (point.x - center.x) as f32;
    let dy = (center.y - point.y) as f32;
    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Offset `origin` by `length` along `angle_deg` in screen space
#[inline]
pub fn polar_offset(origin: IVec2, angle_deg: f32, length: f32) -> IVec2 {
    let theta = angle_deg.to_radians();
    IVec2::new(
        (origin.x as f32 + length * theta.cos()).round() as i32,
        (origin.y as f32 - length * theta.sin()).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        let tiny = normalize_degrees(-1.0e-7);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_screen_angle_degrees() {
        let center = IVec2::new(400, 300);
        assert!((screen_angle_degrees(center, IVec2::new(500, 300)) - 0.0).abs() < 1e-4);
        assert!((screen_angle_degrees(center, IVec2::new(400, 200)) - 90.0).abs() < 1e-4);
        assert!((screen_angle_degrees(center, IVec2::new(300, 300)) - 180.0).abs() < 1e-4);
        assert!((screen_angle_degrees(center, IVec2::new(400, 400)) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_polar_offset_inverts_y() {
        let origin = IVec2::new(100, 100);
        let up = polar_offset(origin, 90.0, 50.0);
        assert_eq!(up, IVec2::new(100, 50));
        let right = polar_offset(origin, 0.0, 10.0);
        assert_eq!(right, IVec2::new(110, 100));
    }
}
