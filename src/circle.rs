use crate::point::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A circle described by its center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the curvature of the circle, the inverse of its radius.
    ///
    /// A zero radius yields an infinite curvature.
    pub fn curvature(&self) -> f64 {
        self.radius.recip()
    }

    pub fn into_inner(self) -> (Point, f64) {
        (self.center, self.radius)
    }
}
