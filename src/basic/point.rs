use ggez::mint::{Point2, Vector2};
use std::ops::{Div, Mul};

/// A more convenient version of mint::Point2<f32>
#[derive(Copy, Clone, Debug, PartialEq, Default, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<Point> for Point2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Point2 { x, y }
    }
}

impl From<Point2<f32>> for Point {
    fn from(Point2 { x, y }: Point2<f32>) -> Self {
        Self { x, y }
    }
}

impl From<Point> for Vector2<f32> {
    fn from(Point { x, y }: Point) -> Self {
        Vector2 { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Point {
    /// Equal x and y
    pub fn square(side: f32) -> Self {
        Self { x: side, y: side }
    }

    /// Squared euclidean distance, avoids the square root
    #[must_use]
    pub fn distance_sq(self, other: Self) -> f32 {
        (other.x - self.x).powi(2) + (other.y - self.y).powi(2)
    }
}

#[test]
fn test_distance_sq() {
    let a = Point { x: 100., y: 100. };
    let b = Point { x: 105., y: 100. };
    assert_eq!(a.distance_sq(b), 25.);
    assert_eq!(b.distance_sq(a), 25.);
    assert_eq!(Point::default().distance_sq(Point { x: 3., y: 4. }), 25.);
}
