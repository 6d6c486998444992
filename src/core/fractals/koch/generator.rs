use std::f64::consts::FRAC_PI_3;

use crate::core::data::point::Point;
use crate::core::data::primitives::Segment;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::util::leaf_count::leaf_count;
use crate::core::util::rotate::rotate;

/// Turn applied to the middle third to raise the bump.
pub const KOCH_BUMP_ANGLE: f64 = -FRAC_PI_3;
/// Horizontal gap left on each side of the unzoomed curve.
pub const KOCH_MARGIN: f64 = 100.0;
const BRANCHING_FACTOR: usize = 4;

/// Endpoints of the top-level Koch segment for a surface: a horizontal line
/// through the vertical centre, `(width - 2 * margin) * zoom` long and
/// horizontally centred.
#[must_use]
pub fn koch_baseline(size: SurfaceSize, linear_zoom: f64) -> (Point, Point) {
    let width = f64::from(size.width());
    let y = f64::from(size.height()) / 2.0;
    let length = (width - 2.0 * KOCH_MARGIN) * linear_zoom;

    (
        Point::new(width / 2.0 - length / 2.0, y),
        Point::new(width / 2.0 + length / 2.0, y),
    )
}

/// Lazily yields the leaf segments of a Koch curve from `start` to `end`.
#[must_use]
pub fn generate_koch(start: Point, end: Point, level: u32) -> KochSegments {
    KochSegments {
        stack: vec![(start, end, level)],
    }
}

/// Depth-first walk over the Koch subdivision. Children are pushed in
/// reverse so leaves come out in left-to-right path order.
#[derive(Debug, Clone)]
pub struct KochSegments {
    stack: Vec<(Point, Point, u32)>,
}

impl Iterator for KochSegments {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let (start, end, level) = self.stack.pop()?;

            if level == 0 {
                return Some(Segment { start, end, level });
            }

            let delta = end - start;
            let third = delta / 3.0;
            let first = start + third;
            let second = start + delta * 2.0 / 3.0;
            let apex = first + rotate(third, KOCH_BUMP_ANGLE);

            self.stack.extend([
                (second, end, level - 1),
                (apex, second, level - 1),
                (first, apex, level - 1),
                (start, first, level - 1),
            ]);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        leaf_count(BRANCHING_FACTOR, self.stack.iter().map(|&(_, _, level)| level))
    }
}
