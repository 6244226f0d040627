use std::fmt;
use std::sync::Arc;

use nalgebra::{Point3, Vector3};

use crate::errors::GeometryError;
use crate::misc::{
    reflection_matrix, resolve_parameter, rotate_point, Axis, FloatingPoint, Transform,
};

/// Number of chords used when approximating the length of a user path.
const LENGTH_SAMPLES: usize = 1000;

/// A curve defined by a caller-supplied path function `f(u) -> point`.
/// Rigid transforms compose around the stored function, so the original
/// closure is never required to change.
#[derive(Clone)]
pub struct UserDefinedCurve<T: FloatingPoint> {
    path: Arc<dyn Fn(T) -> Point3<T> + Send + Sync>,
}

impl<T: FloatingPoint> UserDefinedCurve<T> {
    /// # Failures
    /// - if the path function returns a non-finite point at `u = 0`
    pub fn try_new<F>(path: F) -> anyhow::Result<Self>
    where
        F: Fn(T) -> Point3<T> + Send + Sync + 'static,
    {
        let probe = path(T::zero());
        if !probe.coords.iter().all(|v| v.is_finite()) {
            return Err(GeometryError::DegenerateGeometry(
                "path function returned a non-finite point at u = 0".into(),
            )
            .into());
        }
        Ok(Self {
            path: Arc::new(path),
        })
    }

    pub fn start(&self) -> Point3<T> {
        (self.path)(T::zero())
    }

    pub fn end(&self) -> Point3<T> {
        (self.path)(T::one())
    }

    pub fn point_at(&self, u: T, flip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, flip)?;
        Ok((self.path)(u))
    }

    /// Length approximated as a chord sum over a fine uniform subdivision.
    /// An approximation, not an exact arc length.
    pub fn length(&self) -> T {
        let n = T::from_usize(LENGTH_SAMPLES).unwrap();
        let mut total = T::zero();
        let mut prev = self.start();
        for i in 1..=LENGTH_SAMPLES {
            let next = (self.path)(T::from_usize(i).unwrap() / n);
            total += (next - prev).norm();
            prev = next;
        }
        total
    }
}

impl<T: FloatingPoint> fmt::Debug for UserDefinedCurve<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserDefinedCurve")
            .field("start", &self.start())
            .field("end", &self.end())
            .finish()
    }
}

impl<T: FloatingPoint> Transform<T> for UserDefinedCurve<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        let inner = self.path.clone();
        let offset = *offset;
        self.path = Arc::new(move |u| inner(u) + offset);
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        let inner = self.path.clone();
        let axis = axis.clone();
        self.path = Arc::new(move |u| rotate_point(&inner(u), &axis, angle));
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        let reflection = reflection_matrix(normal)?;
        let inner = self.path.clone();
        let origin = *origin;
        self.path = Arc::new(move |u| origin + reflection * (inner(u) - origin));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn helix() -> UserDefinedCurve<f64> {
        UserDefinedCurve::try_new(|u: f64| {
            Point3::new((TAU * u).cos(), (TAU * u).sin(), u)
        })
        .unwrap()
    }

    #[test]
    fn helix_endpoints() {
        let curve = helix();
        let start = curve.start();
        assert_relative_eq!(start.x, 1.0);
        assert_relative_eq!(start.z, 0.0);
        let end = curve.end();
        assert_relative_eq!(end.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(end.z, 1.0);
    }

    #[test]
    fn helix_length_within_a_tenth_of_a_percent() {
        let exact = (TAU * TAU + 1.0).sqrt();
        let approx = helix().length();
        assert!((approx - exact).abs() / exact < 1e-3);
    }

    #[test]
    fn flip_reverses_the_parameter() {
        let curve = helix();
        for u in [0.0, 0.2, 0.5, 1.0] {
            let a = curve.point_at(u, true).unwrap();
            let b = curve.point_at(1.0 - u, false).unwrap();
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn non_finite_path_is_rejected() {
        let res = UserDefinedCurve::try_new(|_u: f64| Point3::new(f64::NAN, 0.0, 0.0));
        assert!(res.is_err());
    }

    #[test]
    fn out_of_range_parameter_is_rejected() {
        assert!(helix().point_at(2.0, false).is_err());
    }

    #[test]
    fn transforms_compose_around_the_path() {
        let mut curve = helix();
        curve.translate(&Vector3::new(0.0, 0.0, 10.0));
        assert_relative_eq!(curve.start().z, 10.0);

        let axis = Axis::try_new(Point3::origin(), Point3::new(0.0, 0.0, 1.0)).unwrap();
        let rotated = curve.rotated(&axis, TAU / 4.0);
        let p = rotated.start();
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }
}
