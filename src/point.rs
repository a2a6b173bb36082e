#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A location in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new `Point` at (`x`, `y`).
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a `Point` at the origin.
    pub fn origin() -> Self {
        Self { x: 0., y: 0. }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns the squared distance of `self` from the origin.
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the Euclidean distance between `self` and `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl AsRef<Point> for Point {
    fn as_ref(&self) -> &Point {
        self
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Point2<f64>> for Point {
    fn from(point: nalgebra::Point2<f64>) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

#[cfg(feature = "nalgebra")]
impl From<Point> for nalgebra::Point2<f64> {
    fn from(point: Point) -> Self {
        nalgebra::Point2::new(point.x, point.y)
    }
}
