use std::f64::consts::FRAC_PI_3;

use crate::core::data::point::Point;
use crate::core::data::primitives::Triangle;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::util::leaf_count::leaf_count;
use crate::core::util::midpoint::midpoint;

/// Distance of the apex from the top edge of the surface.
pub const SIERPINSKI_APEX_Y: f64 = 100.0;
/// Side length as a fraction of the smaller surface dimension at zoom 1.
pub const SIERPINSKI_SIZE_FACTOR: f64 = 0.8;
const BRANCHING_FACTOR: usize = 3;

/// Vertices of the top-level equilateral triangle for a surface, apex first
/// then base-left and base-right.
#[must_use]
pub fn sierpinski_outline(size: SurfaceSize, linear_zoom: f64) -> [Point; 3] {
    let width = f64::from(size.width());
    let side = f64::from(size.width().min(size.height())) * SIERPINSKI_SIZE_FACTOR * linear_zoom;
    let base_y = SIERPINSKI_APEX_Y + side * FRAC_PI_3.sin();

    [
        Point::new(width / 2.0, SIERPINSKI_APEX_Y),
        Point::new(width / 2.0 - side / 2.0, base_y),
        Point::new(width / 2.0 + side / 2.0, base_y),
    ]
}

/// Lazily yields the corner triangles left after `level` rounds of removing
/// the middle triangle from `(p1, p2, p3)`.
#[must_use]
pub fn generate_sierpinski(p1: Point, p2: Point, p3: Point, level: u32) -> SierpinskiTriangles {
    SierpinskiTriangles {
        stack: vec![([p1, p2, p3], level)],
    }
}

#[derive(Debug, Clone)]
pub struct SierpinskiTriangles {
    stack: Vec<([Point; 3], u32)>,
}

impl Iterator for SierpinskiTriangles {
    type Item = Triangle;

    fn next(&mut self) -> Option<Triangle> {
        loop {
            let ([p1, p2, p3], level) = self.stack.pop()?;

            if level == 0 {
                return Some(Triangle {
                    vertices: [p1, p2, p3],
                    level,
                });
            }

            let m12 = midpoint(p1, p2);
            let m23 = midpoint(p2, p3);
            let m31 = midpoint(p3, p1);

            // the middle (m12, m23, m31) is never visited
            self.stack.extend([
                ([m31, m23, p3], level - 1),
                ([m12, p2, m23], level - 1),
                ([p1, m12, m31], level - 1),
            ]);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        leaf_count(BRANCHING_FACTOR, self.stack.iter().map(|&(_, level)| level))
    }
}
