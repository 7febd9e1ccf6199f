// SPDX-License-Identifier: GPL-3.0-or-later

use crate::Coord;

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    /// The file could not be opened or is not a decodable image.
    #[error("cannot load image {path}: {reason}")]
    ImageLoad { path: String, reason: String },
    /// The requested pixel lies outside the decoded image.
    #[error("pixel {pos} is outside the {width}x{height} image")]
    CoordinateOutOfBounds {
        pos: Coord,
        width: usize,
        height: usize,
    },
    /// The sampler configuration file could not be read or parsed.
    #[error("invalid config {path}: {reason}")]
    Config { path: String, reason: String },
}
