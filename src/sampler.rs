// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::colors;
use crate::{Color, Coord, Image, Rgba, SampleError};

/// What a partially transparent pixel is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Background {
    /// Composite onto opaque black, same as reading a premultiplied sample.
    #[default]
    Black,
    /// Composite onto opaque white.
    White,
    /// Return stored channels as they are and ignore alpha.
    None,
}

impl FromStr for Background {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Background::Black),
            "white" => Ok(Background::White),
            "none" | "raw" => Ok(Background::None),
            _ => Err(format!("invalid background {s}, expected black, white or none")),
        }
    }
}

impl TryFrom<String> for Background {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Background::Black => "black",
            Background::White => "white",
            Background::None => "none",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Default)]
pub struct PixelSampler {
    background: Background,
}

impl PixelSampler {
    pub fn new(background: Background) -> Self {
        Self { background }
    }

    /// Decodes the image at `path` and returns the color at (`x`, `y`).
    /// The decoded bitmap is dropped before returning.
    pub fn sample<P: AsRef<Path>>(&self, path: P, x: i64, y: i64) -> Result<Color, SampleError> {
        let image = Image::load(path)?;
        self.sample_image(&image, x, y)
    }

    pub fn sample_image(&self, image: &Image, x: i64, y: i64) -> Result<Color, SampleError> {
        let pos = Coord::new(x, y);
        let px = image.pixel(&pos)?;
        log::debug!("pixel {pos}: {:?}", px);

        if px.a != 0xff && self.background != Background::None {
            log::debug!("compositing alpha {} onto {}", px.a, self.background);
        }

        let color = match self.background {
            Background::Black => composite(colors::BLACK, px),
            Background::White => composite(colors::WHITE, px),
            Background::None => Color::from(px),
        };

        Ok(color)
    }
}

fn composite(mut bg: Rgba, px: Rgba) -> Color {
    Image::blend_alpha(&mut bg, px);
    Color::from(bg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn fixture(name: &str, buffer: &[Rgba], width: usize, height: usize) -> PathBuf {
        let path = env::temp_dir().join(format!("get-color-sampler-{}-{name}", std::process::id()));
        lodepng::encode32_file(&path, buffer, width, height).unwrap();
        path
    }

    fn known_2x2() -> Vec<Rgba> {
        vec![
            Rgba::new(0, 128, 255, 255),
            Rgba::new(10, 20, 30, 255),
            Rgba::new(40, 50, 60, 255),
            Rgba::new(70, 80, 90, 255),
        ]
    }

    #[test]
    fn test_sample_known_pixels() {
        let path = fixture("known.png", &known_2x2(), 2, 2);
        let sampler = PixelSampler::default();

        for tc in vec![
            ((0, 0), Color::new(0, 128, 255)),
            ((1, 0), Color::new(10, 20, 30)),
            ((0, 1), Color::new(40, 50, 60)),
            ((1, 1), Color::new(70, 80, 90)),
        ] {
            let (x, y) = tc.0;
            assert_eq!(sampler.sample(&path, x, y).unwrap(), tc.1);
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_sample_is_deterministic() {
        let path = fixture("repeat.png", &known_2x2(), 2, 2);
        let sampler = PixelSampler::default();

        let first = sampler.sample(&path, 1, 1).unwrap();
        for _ in 0..5 {
            assert_eq!(sampler.sample(&path, 1, 1).unwrap(), first);
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let path = fixture("bounds.png", &known_2x2(), 2, 2);
        let sampler = PixelSampler::default();

        for (x, y) in vec![(-1, 0), (0, -1), (2, 0), (0, 2), (2, 2)] {
            let res = sampler.sample(&path, x, y);
            assert!(
                matches!(res, Err(SampleError::CoordinateOutOfBounds { .. })),
                "({x}, {y}) gave {:?}",
                res
            );
        }

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_sample_missing_file() {
        let sampler = PixelSampler::default();
        let path = env::temp_dir().join("get-color-sampler-missing.png");
        let res = sampler.sample(&path, 0, 0);
        assert!(matches!(res, Err(SampleError::ImageLoad { .. })));
    }

    #[test]
    fn test_sample_compositing() {
        let image = Image {
            buffer: vec![Rgba::new(255, 0, 0, 128)],
            width: 1,
            height: 1,
        };

        for tc in vec![
            (Background::Black, Color::new(128, 0, 0)),
            (Background::White, Color::new(255, 127, 127)),
            (Background::None, Color::new(255, 0, 0)),
        ] {
            let sampler = PixelSampler::new(tc.0);
            assert_eq!(sampler.sample_image(&image, 0, 0).unwrap(), tc.1, "{}", tc.0);
        }
    }

    #[test]
    fn test_sample_opaque_ignores_background() {
        let image = Image {
            buffer: vec![Rgba::new(0, 128, 128, 255)],
            width: 1,
            height: 1,
        };

        for bg in vec![Background::Black, Background::White, Background::None] {
            let sampler = PixelSampler::new(bg);
            assert_eq!(sampler.sample_image(&image, 0, 0).unwrap(), Color::new(0, 128, 128));
        }
    }

    #[test]
    fn test_sample_fully_transparent() {
        let image = Image {
            buffer: vec![Rgba::new(9, 9, 9, 0)],
            width: 1,
            height: 1,
        };

        let black = PixelSampler::new(Background::Black);
        let white = PixelSampler::new(Background::White);
        assert_eq!(black.sample_image(&image, 0, 0).unwrap(), Color::new(0, 0, 0));
        assert_eq!(white.sample_image(&image, 0, 0).unwrap(), Color::new(255, 255, 255));
    }

    #[test]
    fn test_background_from_str() {
        for tc in vec![
            ("black", Ok(Background::Black)),
            ("WHITE", Ok(Background::White)),
            ("none", Ok(Background::None)),
            ("raw", Ok(Background::None)),
        ] {
            assert_eq!(tc.0.parse::<Background>(), tc.1);
        }
        assert!("grey".parse::<Background>().is_err());
    }
}
