use std::ops::{Add, Div, Mul, Sub};

/// A position or displacement on the drawing surface, in pixel units.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self {
            x: self.x / divisor,
            y: self.y / divisor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_sub() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, -6.0);

        assert_eq!(a + b, Point::new(5.0, -4.0));
        assert_eq!(b - a, Point::new(3.0, -8.0));
    }

    #[test]
    fn test_scale() {
        let p = Point::new(3.0, -9.0);

        assert_eq!(p * 2.0, Point::new(6.0, -18.0));
        assert_eq!(p / 3.0, Point::new(1.0, -3.0));
    }
}
