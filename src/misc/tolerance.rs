use nalgebra::Point3;

use crate::errors::GeometryError;
use crate::misc::FloatingPoint;

/// Number of decimals kept when comparing point coordinates.
/// Coarse enough to absorb the round-off of a chain of rigid transforms,
/// fine enough that authoring mistakes still fail the Coons loop check.
pub const COINCIDENCE_DECIMALS: u32 = 10;

/// Whether two points are equal under the crate-wide coincidence policy:
/// component-wise equality after rounding to [`COINCIDENCE_DECIMALS`] decimals.
pub fn points_coincident<T: FloatingPoint>(a: &Point3<T>, b: &Point3<T>) -> bool {
    let scale = T::from_f64(10f64.powi(COINCIDENCE_DECIMALS as i32)).unwrap();
    (0..3).all(|i| (a[i] * scale).round() == (b[i] * scale).round())
}

/// Validate that a parameter lies in the normalized range [0, 1] inclusive.
/// Values outside the range are never clamped.
pub fn normalized<T: FloatingPoint>(u: T) -> anyhow::Result<T> {
    if u < T::zero() || u > T::one() {
        return Err(GeometryError::ParameterOutOfRange {
            value: u.to_f64().unwrap_or(f64::NAN),
        }
        .into());
    }
    Ok(u)
}

/// Validate a normalized parameter and apply the flip convention `u -> 1 - u`.
pub fn resolve_parameter<T: FloatingPoint>(u: T, flip: bool) -> anyhow::Result<T> {
    let u = normalized(u)?;
    Ok(if flip { T::one() - u } else { u })
}
