use crate::core::data::pixel::Pixel;
use crate::core::data::point::Point;

/// A straight leaf of the Koch curve. `level` is the recursion depth it was
/// emitted at, which is always 0 for a leaf.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub level: u32,
}

/// A corner leaf of the Sierpinski triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point; 3],
    pub level: u32,
}

/// Escape-time result for a single surface pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelSample {
    pub pixel: Pixel,
    pub escape_count: u32,
    pub max_iterations: u32,
}
