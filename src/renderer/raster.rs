//! Integer midpoint rasterizer
//!
//! Lines and circle outlines are generated pixel by pixel with the classic
//! incremental midpoint (Bresenham) algorithms; no floating point and no
//! shape primitives from the host surface.

use glam::IVec2;

use super::Color;
use crate::{normalize_degrees, screen_angle_degrees};

/// A pixel target provided by the host.
///
/// `put_pixel` must silently ignore coordinates outside the surface.
/// `draw_arc` is the one shape primitive the host supplies; the default
/// scans the on-surface part of the arc's bounding box.
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    /// Plot one pixel, clipping anything off-surface
    fn put_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Draw a thick circular arc sweeping counter-clockwise (screen space)
    /// from `start_deg` to `end_deg`, `thickness` pixels inward from `radius`
    fn draw_arc(
        &mut self,
        center: IVec2,
        radius: i32,
        start_deg: f32,
        end_deg: f32,
        thickness: i32,
        color: Color,
    ) {
        let sweep = end_deg - start_deg;
        if radius <= 0 || sweep <= 0.0 || self.width() <= 0 || self.height() <= 0 {
            return;
        }
        let full = sweep >= 360.0;
        let start = normalize_degrees(start_deg);

        let outer = i64::from(radius);
        let inner = (outer - i64::from(thickness.max(1))).max(0);
        let (outer_sq, inner_sq) = (outer * outer, inner * inner);

        let x0 = center.x.saturating_sub(radius).max(0);
        let x1 = center.x.saturating_add(radius).min(self.width() - 1);
        let y0 = center.y.saturating_sub(radius).max(0);
        let y1 = center.y.saturating_add(radius).min(self.height() - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = i64::from(x) - i64::from(center.x);
                let dy = i64::from(y) - i64::from(center.y);
                let dist_sq = dx * dx + dy * dy;
                if dist_sq > outer_sq || dist_sq < inner_sq {
                    continue;
                }
                let p = IVec2::new(x, y);
                if full || normalize_degrees(screen_angle_degrees(center, p) - start) <= sweep {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }
}

/// Pixels of a Bresenham line, endpoints included
#[derive(Debug, Clone)]
pub struct LinePoints {
    current: IVec2,
    end: IVec2,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(start: IVec2, end: IVec2) -> Self {
        let dx = i64::from(start.x.abs_diff(end.x));
        let dy = i64::from(start.y.abs_diff(end.y));
        Self {
            current: start,
            end,
            dx,
            dy,
            sx: if start.x < end.x { 1 } else { -1 },
            sy: if start.y < end.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.done {
            return None;
        }

        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = self.err * 2;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(point)
    }
}

/// Offsets of a midpoint circle of `radius` around the origin.
///
/// Each generated (x, y) pair contributes its 8 octant reflections, so
/// points on the axes and diagonals appear more than once.
pub fn circle_points(radius: i32) -> Vec<IVec2> {
    let mut points = Vec::new();
    if radius < 0 {
        return points;
    }

    let mut x = 0;
    let mut y = radius;
    let mut p = 1 - radius;

    push_octants(&mut points, x, y);
    while x < y {
        x += 1;
        if p < 0 {
            p += 2 * x + 1;
        } else {
            y -= 1;
            p += 2 * (x - y) + 1;
        }
        push_octants(&mut points, x, y);
    }

    points
}

fn push_octants(points: &mut Vec<IVec2>, x: i32, y: i32) {
    points.extend_from_slice(&[
        IVec2::new(x, y),
        IVec2::new(-x, y),
        IVec2::new(x, -y),
        IVec2::new(-x, -y),
        IVec2::new(y, x),
        IVec2::new(-y, x),
        IVec2::new(y, -x),
        IVec2::new(-y, -x),
    ]);
}

/// Draw a 1px line from (x1, y1) to (x2, y2)
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    for p in LinePoints::new(IVec2::new(x1, y1), IVec2::new(x2, y2)) {
        surface.put_pixel(p.x, p.y, color);
    }
}

/// Draw a 1px circle outline centred on (cx, cy)
pub fn draw_circle_outline<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, radius: i32, color: Color) {
    for offset in circle_points(radius) {
        surface.put_pixel(cx.saturating_add(offset.x), cy.saturating_add(offset.y), color);
    }
}
