//! In-memory RGBA surface
//!
//! The host side of the rasterizer: owns the pixels, clips writes, supplies
//! the arc primitive and hands finished frames to the presenter.

use std::io::{self, Write};

use super::Color;
use super::raster::Surface;

/// RGBA8888 pixel buffer for software rendering
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: i32,
    height: i32,
}

impl PixelBuffer {
    /// Create a black buffer; non-positive sizes yield an empty surface
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            pixels: vec![Color::BLACK; width as usize * height as usize],
            width,
            height,
        }
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Read a pixel (None when off-surface)
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.in_bounds(x, y).then(|| self.pixels[self.index(x, y)])
    }

    /// Number of pixels currently set to `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the frame as a binary PPM (P6)
    pub fn write_ppm<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let rgb: Vec<u8> = self
            .as_bytes()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        out.write_all(&rgb)?;
        out.flush()
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.pixels[idx] = color;
        }
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }
}
