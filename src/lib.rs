// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error;

pub use crate::colors::{Color, Rgba};
pub use crate::error::SampleError;
pub use crate::geometry::Coord;
pub use crate::image::Image;
pub use crate::sampler::{Background, PixelSampler};

pub mod colors;
pub mod config;
mod error;
mod geometry;
mod image;
mod sampler;

pub type Res<T> = Result<T, Box<dyn Error>>;
