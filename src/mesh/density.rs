use crate::errors::GeometryError;
use crate::misc::FloatingPoint;

/// Panel density along one parametric dimension: either an explicit panel
/// count or a target panel edge length converted against the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelDensity<T: FloatingPoint> {
    /// Number of panels along the dimension.
    Count(usize),
    /// Target panel edge length; the point count becomes
    /// `ceil(boundary_length / length) + 1`.
    PanelLength(T),
}

impl<T: FloatingPoint> PanelDensity<T> {
    /// Resolve to a mesh point count for a dimension with the given
    /// maximum boundary length.
    /// # Failures
    /// - [`GeometryError::InvalidDensity`] for a zero panel count or a
    ///   non-positive edge length
    /// - [`GeometryError::TooFewPoints`] if fewer than two points result
    pub fn resolve(&self, boundary_length: T) -> anyhow::Result<usize> {
        let points = match self {
            Self::Count(panels) => {
                if *panels == 0 {
                    return Err(GeometryError::InvalidDensity(0.0).into());
                }
                panels + 1
            }
            Self::PanelLength(length) => {
                if *length <= T::zero() {
                    return Err(GeometryError::InvalidDensity(
                        length.to_f64().unwrap_or(f64::NAN),
                    )
                    .into());
                }
                let panels = (boundary_length / *length).ceil().to_usize().unwrap_or(0);
                panels + 1
            }
        };
        if points < 2 {
            return Err(GeometryError::TooFewPoints(points).into());
        }
        Ok(points)
    }
}
