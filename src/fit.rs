//! Circle fitting by averaging circumcenters.
//!
//! Implements Algorithm 1 of "Finding the circle that best fits a set of
//! points" (L. Maisonobe, 2007). Every triple of points that is not
//! (nearly) collinear defines a circle through those points. The fitted center
//! is the mean of those circumcenters and the fitted radius is the mean
//! distance from the points to that center.
//!
//! The fit is `O(n^3)` in the number of points but produces decent results
//! with only a handful of points, e.g. a few samples along a path whose
//! curvature should be estimated.

use crate::{circle::Circle, error::FitError, point::Point};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// The collinearity tolerance used by [`CircleFitter::default`].
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Fits circles using a fixed collinearity tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CircleFitter {
    /// Triples whose `|delta|` is at most `epsilon` are treated as aligned and
    /// excluded from the fit.
    epsilon: f64,
}

impl CircleFitter {
    /// Creates a new `CircleFitter` with collinearity tolerance `epsilon`.
    ///
    /// The sign of `epsilon` is not checked. A negative tolerance accepts
    /// coincident triples and yields a non-finite center.
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// See [`estimate_center`].
    pub fn center(&self, points: &[Point]) -> Result<Point, FitError> {
        estimate_center(points, self.epsilon)
    }

    /// See [`fit_circle`].
    pub fn fit(&self, points: &[Point]) -> Result<Circle, FitError> {
        fit_circle(points, self.epsilon)
    }
}

impl Default for CircleFitter {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

/// Returns twice the signed area of the triangle `i`, `j`, `k`.
///
/// Zero when the points are collinear or any two of them coincide.
pub fn delta(i: &Point, j: &Point, k: &Point) -> f64 {
    (k.x() - j.x()) * (j.y() - i.y()) - (j.x() - i.x()) * (k.y() - j.y())
}

/// Returns the center of the circle through `i`, `j` and `k`.
///
/// Returns `None` if `|delta|` of the triple is at most `epsilon`, ie the
/// points are considered aligned.
pub fn circumcenter(i: &Point, j: &Point, k: &Point, epsilon: f64) -> Option<Point> {
    let delta = delta(i, j, k);
    if delta.abs() <= epsilon {
        return None;
    }

    let ii = i.norm_squared();
    let jj = j.norm_squared();
    let kk = k.norm_squared();
    let cx = ((k.y() - j.y()) * ii + (i.y() - k.y()) * jj + (j.y() - i.y()) * kk) / (2. * delta);
    let cy = -((k.x() - j.x()) * ii + (i.x() - k.x()) * jj + (j.x() - i.x()) * kk) / (2. * delta);

    Some(Point::new(cx, cy))
}

/// Estimates the center of the circle best fitting `points`.
///
/// Averages the circumcenters of the triples of `points` that are not aligned
/// with respect to `epsilon`.
///
/// Returns [`FitError::AllPointsAligned`] if no such triple exists. This
/// includes any input with fewer than three points.
pub fn estimate_center(points: &[Point], epsilon: f64) -> Result<Point, FitError> {
    let mut total_x = 0.;
    let mut total_y = 0.;
    let mut accepted = 0usize;
    let mut rejected = 0usize;

    // The three passes run over the whole slice and the slice from its second
    // and third elements. This is not the set of combinations: coincident
    // triples are visited (and rejected), and triangles are weighted by how
    // many of their orderings the passes reach. The averaged center depends on
    // this pattern and on the order of `points`.
    for i in points {
        for j in points.iter().skip(1) {
            for k in points.iter().skip(2) {
                match circumcenter(i, j, k, epsilon) {
                    Some(center) => {
                        total_x += center.x();
                        total_y += center.y();
                        accepted += 1;
                    }
                    None => {
                        trace!(?i, ?j, ?k, "rejected aligned triple");
                        rejected += 1;
                    }
                }
            }
        }
    }

    debug!(
        points = points.len(),
        accepted, rejected, epsilon, "averaged circumcenters"
    );

    if accepted == 0 {
        debug!(points = points.len(), epsilon, "all points are aligned");
        return Err(FitError::AllPointsAligned);
    }

    Ok(Point::new(
        total_x / accepted as f64,
        total_y / accepted as f64,
    ))
}

/// Estimates the radius of a circle with `center` as the mean distance from
/// `center` to each of `points`.
///
/// Returns [`FitError::NoPoints`] if `points` is empty.
pub fn estimate_radius(center: impl AsRef<Point>, points: &[Point]) -> Result<f64, FitError> {
    if points.is_empty() {
        return Err(FitError::NoPoints);
    }

    let center = center.as_ref();
    let total: f64 = points.iter().map(|point| point.distance(center)).sum();

    Ok((total / points.len() as f64).abs())
}

/// Estimates the circle best fitting `points`.
///
/// Combines [`estimate_center`] and [`estimate_radius`]. Errors from the center
/// estimate are returned unchanged.
pub fn fit_circle(points: &[Point], epsilon: f64) -> Result<Circle, FitError> {
    let center = estimate_center(points, epsilon)?;
    let radius = estimate_radius(center, points)?;

    Ok(Circle::new(center, radius))
}
