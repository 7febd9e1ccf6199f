// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

pub type Rgba = rgb::RGBA<u8>;

pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

/// An opaque color sample, alpha already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgba> for Color {
    fn from(px: Rgba) -> Self {
        Self::new(px.r, px.g, px.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "R: {} G: {} B: {}", self.r, self.g, self.b)
    }
}
