//! Circle Fitting Utilities
//!
//! Estimates the center and radius of the circle best fitting a set of 2D
//! points by averaging the circumcenters of point triples.
//!
//! ```
//! use circumfit::prelude::*;
//!
//! let points: Vec<Point> = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let circle = CircleFitter::default().fit(&points).unwrap();
//! assert!((circle.radius() - 1.0).abs() < 1e-9);
//! ```

pub mod circle;
pub mod error;
pub mod fit;
pub mod point;

pub mod prelude {
    pub use crate::circle::Circle;
    pub use crate::error::FitError;
    pub use crate::fit::{
        CircleFitter, DEFAULT_EPSILON, estimate_center, estimate_radius, fit_circle,
    };
    pub use crate::point::Point;
}
