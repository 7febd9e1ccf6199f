// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;
use std::path::Path;

use crate::{Coord, Rgba, SampleError};

/// A decoded bitmap in straight (non-premultiplied) 8-bit RGBA, row-major.
#[derive(Debug, Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub buffer: Vec<Rgba>,
}

impl Image {
    /// Decodes a PNG file. Every color type and bit depth is normalized
    /// to 8-bit RGBA by the decoder.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let path = path.as_ref();
        let load_error = |reason: String| SampleError::ImageLoad {
            path: path.display().to_string(),
            reason,
        };

        let data = fs::read(path).map_err(|err| load_error(err.to_string()))?;
        let bitmap = lodepng::decode32(&data).map_err(|err| load_error(err.to_string()))?;

        if bitmap.width == 0 || bitmap.height == 0 {
            return Err(load_error("image has no pixels".to_string()));
        }

        log::info!(
            "decoded {}: {}x{}",
            path.display(),
            bitmap.width,
            bitmap.height
        );

        Ok(Self {
            width: bitmap.width,
            height: bitmap.height,
            buffer: bitmap.buffer,
        })
    }

    pub fn pixel(&self, pos: &Coord) -> Result<Rgba, SampleError> {
        match pos.offset(self.width, self.height) {
            Some(offset) => Ok(self.buffer[offset]),
            None => Err(SampleError::CoordinateOutOfBounds {
                pos: *pos,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Composites `fg` over `bg` in place. The result keeps the alpha of `bg`.
    #[inline]
    pub fn blend_alpha(bg: &mut Rgba, fg: Rgba) {
        // short circuit cases
        if fg.a == 0x00 {
            return;
        }
        if fg.a == 0xff {
            bg.r = fg.r;
            bg.g = fg.g;
            bg.b = fg.b;
            return;
        }

        let a = fg.a as u32;
        let ac = 0x00ff - a;
        bg.r = ((fg.r as u32 * a + bg.r as u32 * ac + 0x7f) / 0xff) as u8;
        bg.g = ((fg.g as u32 * a + bg.g as u32 * ac + 0x7f) / 0xff) as u8;
        bg.b = ((fg.b as u32 * a + bg.b as u32 * ac + 0x7f) / 0xff) as u8;
    }
}
