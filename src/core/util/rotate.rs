use crate::core::data::point::Point;

/// Rotates `vector` by `angle` radians about the origin.
///
/// In surface coordinates y grows downwards, so a negative angle turns the
/// vector towards the top of the surface.
#[must_use]
pub fn rotate(vector: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();

    Point {
        x: vector.x * cos - vector.y * sin,
        y: vector.x * sin + vector.y * cos,
    }
}
