// SPDX-License-Identifier: GPL-3.0-or-later

/// Pixel coordinate, origin at the top-left corner. Signed so that
/// negative requests can be reported instead of rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Row-major buffer offset, or `None` if outside a `width` x `height` area.
    #[inline]
    pub fn offset(&self, width: usize, height: usize) -> Option<usize> {
        let x = usize::try_from(self.x).ok()?;
        let y = usize::try_from(self.y).ok()?;
        if x >= width || y >= height {
            None
        } else {
            Some(y * width + x)
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "@{},{}", self.x, self.y)
    }
}
