use thiserror::Error;

/// Typed failure categories for geometry construction and evaluation.
/// Carried inside [`anyhow::Error`] so callers can downcast when they need
/// to tell a topological authoring mistake apart from a plain validation
/// failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A curve or surface parameter outside the normalized range.
    #[error("parameter {value} is outside the normalized range [0, 1]")]
    ParameterOutOfRange { value: f64 },

    /// Coincident points, zero-length axis, collinear arc points and the like.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Three-point arc whose endpoints sit at different radii from the centre.
    #[error("arc radii differ beyond tolerance: start radius {start}, end radius {end}")]
    RadiusMismatch { start: f64, end: f64 },

    /// Coons patch boundary curves that do not close into a loop.
    #[error("boundary curves do not form a closed loop")]
    BoundaryLoopOpen,

    /// Zero or negative panel density.
    #[error("panel density must be greater than zero, got {0}")]
    InvalidDensity(f64),

    /// A mesh dimension resolved to fewer than two points.
    #[error("a mesh dimension needs at least two points, got {0}")]
    TooFewPoints(usize),

    /// Invalid distribution configuration (zero ratio, non-positive power).
    #[error("invalid distribution parameter: {0}")]
    InvalidDistribution(String),
}
