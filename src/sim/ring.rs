//! Rotating gap ring geometry
//!
//! A ring is a circular barrier with two gaps 180° apart. Every ring on the
//! playfield reads the same `RotationClock`, so concentric rings stay
//! phase-locked:
//! - gap 1: [rotation, rotation + width)
//! - gap 2: [rotation + 180, rotation + 180 + width)
//!
//! All angles are degrees in screen space, normalized to [0, 360).

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{GAP_COUNT, GAP_SPACING_DEG};
use crate::normalize_degrees;

/// Shared rotation angle for every active ring
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationClock {
    angle_deg: f32,
}

impl RotationClock {
    pub fn new(angle_deg: f32) -> Self {
        Self {
            angle_deg: normalize_degrees(angle_deg),
        }
    }

    /// Current rotation, always in [0, 360)
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle_deg
    }

    /// Rotate by `speed_deg`, wrapping into [0, 360)
    pub fn advance(&mut self, speed_deg: f32) {
        self.angle_deg = normalize_degrees(self.angle_deg + speed_deg);
    }

    pub fn reset(&mut self) {
        self.angle_deg = 0.0;
    }
}

/// Half-open angular interval [start, start + width), possibly wrapping past 0°
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapInterval {
    /// Start angle (degrees, normalized)
    pub start: f32,
    /// End angle (degrees, normalized, exclusive)
    pub end: f32,
    /// Angular width before normalization
    pub width: f32,
}

impl GapInterval {
    pub fn new(start: f32, width: f32) -> Self {
        Self {
            start: normalize_degrees(start),
            end: normalize_degrees(start + width),
            width,
        }
    }

    /// Whether the interval crosses the 0°/360° boundary
    #[inline]
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }

    /// Check if an angle falls inside the gap.
    ///
    /// Both the plain and the wrapping case use `[start, end)`: the start angle
    /// is in the gap and the end angle is solid, so a gap crossing 0° keeps the
    /// same edges as any other.
    pub fn contains(&self, angle: f32) -> bool {
        if self.width <= 0.0 {
            return false;
        }
        if self.width >= 360.0 {
            return true;
        }

        let angle = normalize_degrees(angle);
        if self.wraps() {
            angle >= self.start || angle < self.end
        } else {
            angle >= self.start && angle < self.end
        }
    }
}

/// One circular barrier of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub center: IVec2,
    pub radius: i32,
    /// Angular width of each gap (degrees)
    pub gap_width_deg: f32,
}

impl Ring {
    pub fn new(center: IVec2, radius: i32, gap_width_deg: f32) -> Self {
        Self {
            center,
            radius,
            gap_width_deg,
        }
    }

    /// Both gap intervals at the given rotation
    pub fn gaps(&self, rotation_deg: f32) -> [GapInterval; GAP_COUNT] {
        [
            GapInterval::new(rotation_deg, self.gap_width_deg),
            GapInterval::new(rotation_deg + GAP_SPACING_DEG, self.gap_width_deg),
        ]
    }

    /// The two solid arcs between the gaps as (start, end) degree pairs.
    ///
    /// `end` is not normalized so that `end - start` is the sweep.
    pub fn solid_arcs(&self, rotation_deg: f32) -> [(f32, f32); GAP_COUNT] {
        let start = normalize_degrees(rotation_deg);
        let g = self.gap_width_deg;
        [
            (start + g, start + GAP_SPACING_DEG),
            (start + GAP_SPACING_DEG + g, start + 360.0),
        ]
    }

    /// Check if `angle` passes through an open gap at the given rotation
    pub fn is_angle_in_gap(&self, angle: f32, rotation_deg: f32) -> bool {
        self.gaps(rotation_deg).iter().any(|gap| gap.contains(angle))
    }
}

/// Gap test against a ring driven by the shared clock
#[inline]
pub fn is_angle_in_gap(angle: f32, ring: &Ring, clock: &RotationClock) -> bool {
    ring.is_angle_in_gap(angle, clock.angle())
}

/// Radii of the rings drawn at a given level (outermost first)
pub fn ring_radii(level: u32, outer_radius: i32) -> Vec<i32> {
    match level {
        3 | 4 => vec![outer_radius, outer_radius / 2],
        5 => vec![outer_radius, outer_radius / 2, outer_radius / 4],
        _ => vec![outer_radius],
    }
}

/// Build the active ring set for a level, all sharing one center and gap width
pub fn active_rings(level: u32, center: IVec2, outer_radius: i32, gap_width_deg: f32) -> Vec<Ring> {
    ring_radii(level, outer_radius)
        .into_iter()
        .map(|radius| Ring::new(center, radius, gap_width_deg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(gap: f32) -> Ring {
        Ring::new(IVec2::new(400, 300), 100, gap)
    }

    #[test]
    fn test_gap_scenario_at_zero_rotation() {
        let ring = ring(100.0);
        let gaps = ring.gaps(0.0);
        assert_eq!((gaps[0].start, gaps[0].end), (0.0, 100.0));
        assert_eq!((gaps[1].start, gaps[1].end), (180.0, 280.0));

        assert!(ring.is_angle_in_gap(50.0, 0.0));
        assert!(!ring.is_angle_in_gap(150.0, 0.0));
        assert!(ring.is_angle_in_gap(270.0, 0.0));
        assert!(!ring.is_angle_in_gap(290.0, 0.0));
    }

    #[test]
    fn test_gap_wraparound() {
        // gap 1 spans [300, 40), gap 2 spans [120, 220)
        let ring = ring(100.0);
        assert!(ring.gaps(300.0)[0].wraps());
        assert!(ring.is_angle_in_gap(350.0, 300.0));
        assert!(ring.is_angle_in_gap(0.0, 300.0));
        assert!(ring.is_angle_in_gap(39.9, 300.0));
        assert!(!ring.is_angle_in_gap(40.0, 300.0));
        assert!(!ring.is_angle_in_gap(299.0, 300.0));
        assert!(ring.is_angle_in_gap(150.0, 300.0));
        assert!(!ring.is_angle_in_gap(230.0, 300.0));
    }

    #[test]
    fn test_gap_edges() {
        let ring = ring(100.0);
        assert!(ring.is_angle_in_gap(90.0, 90.0));
        assert!(!ring.is_angle_in_gap(90.0, 90.001));
        assert!(!ring.is_angle_in_gap(-720.0 + 150.0, 0.0));
        assert!(ring.is_angle_in_gap(360.0 + 50.0, 0.0));
    }

    #[test]
    fn test_degenerate_gap_widths() {
        assert!(!ring(0.0).is_angle_in_gap(0.0, 0.0));
        assert!(ring(360.0).is_angle_in_gap(123.0, 45.0));
    }

    #[test]
    fn test_rotation_clock_wraps() {
        let mut clock = RotationClock::default();
        for _ in 0..400 {
            clock.advance(3.0);
            assert!((0.0..360.0).contains(&clock.angle()));
        }
        assert_eq!(RotationClock::new(-30.0).angle(), 330.0);
    }

    #[test]
    fn test_solid_arcs_cover_complement() {
        let ring = ring(100.0);
        let arcs = ring.solid_arcs(10.0);
        assert_eq!(arcs[0], (110.0, 190.0));
        assert_eq!(arcs[1], (290.0, 370.0));
    }

    #[test]
    fn test_ring_counts_per_level() {
        assert_eq!(ring_radii(1, 100), vec![100]);
        assert_eq!(ring_radii(2, 100), vec![100]);
        assert_eq!(ring_radii(3, 100), vec![100, 50]);
        assert_eq!(ring_radii(4, 100), vec![100, 50]);
        assert_eq!(ring_radii(5, 100), vec![100, 50, 25]);
    }
}
