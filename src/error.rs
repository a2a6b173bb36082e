use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FitError {
    /// Every enumerated triple was rejected as collinear, so no circumcenter exists.
    #[error("all points are aligned")]
    AllPointsAligned,
    #[error("cannot estimate a radius from an empty point set")]
    NoPoints,
}
