//! Axis-aligned bounding box in raster coordinates

/// Pixel-space bounding box with inclusive corners.
///
/// Invariant: `x1 <= x2` and `y1 <= y2` hold from construction onward.
/// The box only ever grows, via min/max updates as a flood fill visits
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Leftmost column
    pub x1: usize,
    /// Rightmost column (inclusive)
    pub x2: usize,
    /// Topmost row
    pub y1: usize,
    /// Bottommost row (inclusive)
    pub y2: usize,
}

impl BoundingBox {
    /// Create a degenerate box covering the single pixel (x, y)
    pub fn at(x: usize, y: usize) -> Self {
        Self {
            x1: x,
            x2: x,
            y1: y,
            y2: y,
        }
    }

    /// Grow the box to include pixel (x, y)
    pub fn update(&mut self, x: usize, y: usize) {
        self.x1 = self.x1.min(x);
        self.x2 = self.x2.max(x);
        self.y1 = self.y1.min(y);
        self.y2 = self.y2.max(y);
    }

    /// Width in pixels (inclusive extent)
    pub fn width(&self) -> usize {
        self.x2 - self.x1 + 1
    }

    /// Height in pixels (inclusive extent)
    pub fn height(&self) -> usize {
        self.y2 - self.y1 + 1
    }

    /// Whether the box contains pixel (x, y)
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}
