//! Pixel color type

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 8-bit RGBA pixel, laid out so a pixel slice casts straight to RGBA bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const TEAL: Color = Color::rgb(0, 128, 128);
    pub const AMBER: Color = Color::rgb(255, 191, 0);
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = Color::BLACK;
    pub const RING: Color = Color::WHITE;
    pub const ARROW: Color = Color::WHITE;
    pub const TARGET: Color = Color::RED;
    pub const RESTART_BUTTON: Color = Color::TEAL;
    pub const PAUSE_BUTTON: Color = Color::AMBER;
    pub const EXIT_BUTTON: Color = Color::RED;
    pub const HUD_TEXT: Color = Color::WHITE;
    pub const BANNER_TEXT: Color = Color::RED;
}
