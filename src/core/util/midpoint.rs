use crate::core::data::point::Point;

#[must_use]
pub fn midpoint(p: Point, q: Point) -> Point {
    Point {
        x: (p.x + q.x) / 2.0,
        y: (p.y + q.y) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let m = midpoint(Point::new(0.0, 0.0), Point::new(10.0, -4.0));

        assert_eq!(m, Point::new(5.0, -2.0));
    }

    #[test]
    fn test_midpoint_of_identical_points() {
        let p = Point::new(3.25, 7.5);

        assert_eq!(midpoint(p, p), p);
    }
}
