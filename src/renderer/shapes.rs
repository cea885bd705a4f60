//! Game glyphs composed from rasterizer primitives

use glam::IVec2;

use super::Color;
use super::raster::{Surface, draw_circle_outline, draw_line};
use crate::consts::ARROWHEAD_SPREAD_DEG;
use crate::polar_offset;
use crate::sim::{Ring, Target};

/// Draw an arrow whose shaft starts at `base` and points along `angle_deg`.
///
/// Returns the tip position. The two head strokes leave the tip at ±135°
/// from the shaft direction.
pub fn draw_arrow<S: Surface + ?Sized>(
    surface: &mut S,
    base: IVec2,
    angle_deg: f32,
    length: i32,
    head_length: i32,
    color: Color,
) -> IVec2 {
    let tip = polar_offset(base, angle_deg, length as f32);
    draw_line(surface, base.x, base.y, tip.x, tip.y, color);

    for spread in [ARROWHEAD_SPREAD_DEG, -ARROWHEAD_SPREAD_DEG] {
        let barb = polar_offset(tip, angle_deg + spread, head_length as f32);
        draw_line(surface, tip.x, tip.y, barb.x, barb.y, color);
    }

    tip
}

/// Draw the balloon target outline
pub fn draw_target<S: Surface + ?Sized>(surface: &mut S, target: &Target, color: Color) {
    draw_circle_outline(surface, target.pos.x, target.pos.y, target.radius, color);
}

/// Draw a ring everywhere except its two gap wedges
pub fn draw_gap_ring<S: Surface + ?Sized>(
    surface: &mut S,
    ring: &Ring,
    rotation_deg: f32,
    thickness: i32,
    color: Color,
) {
    for (start, end) in ring.solid_arcs(rotation_deg) {
        surface.draw_arc(ring.center, ring.radius, start, end, thickness, color);
    }
}

/// Left-pointing chevron (restart)
pub fn draw_restart_glyph<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, size: i32, color: Color) {
    draw_line(surface, x + size, y, x, y + size / 2, color);
    draw_line(surface, x, y + size / 2, x + size, y + size, color);
}

/// Play triangle while paused, two pause bars while playing
pub fn draw_play_pause_glyph<S: Surface + ?Sized>(
    surface: &mut S,
    x: i32,
    y: i32,
    size: i32,
    color: Color,
    paused: bool,
) {
    if paused {
        draw_line(surface, x, y, x, y + size, color);
        draw_line(surface, x, y, x + size, y + size / 2, color);
        draw_line(surface, x + size, y + size / 2, x, y + size, color);
    } else {
        draw_line(surface, x, y, x, y + size, color);
        draw_line(surface, x + size, y, x + size, y + size, color);
    }
}

/// Diagonal cross (exit)
pub fn draw_exit_glyph<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, size: i32, color: Color) {
    draw_line(surface, x, y, x + size, y + size, color);
    draw_line(surface, x + size, y, x, y + size, color);
}
