//! Software rendering module
//!
//! Lines and circles are rasterized pixel by pixel with integer midpoint
//! algorithms; only the ring arcs use the host surface's arc primitive.

pub mod color;
pub mod frame;
pub mod pixel_buffer;
pub mod raster;
pub mod shapes;

pub use color::{Color, colors};
pub use frame::{banner_text, hud_lines, render};
pub use pixel_buffer::PixelBuffer;
pub use raster::{LinePoints, Surface, circle_points, draw_circle_outline, draw_line};
