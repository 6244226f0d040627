use nalgebra::{Point3, Vector3};

use crate::curve::Curve;
use crate::misc::{resolve_parameter, Axis, FloatingPoint, Transform};

/// A profile curve rigidly translated along a sweeper curve's displacement
/// from its own start: `p(u, w) = profile(u) + (sweeper(w) - sweeper(0))`.
#[derive(Debug, Clone)]
pub struct SweptSurface<T: FloatingPoint> {
    profile: Curve<T>,
    sweeper: Curve<T>,
}

impl<T: FloatingPoint> SweptSurface<T> {
    pub fn new(profile: impl Into<Curve<T>>, sweeper: impl Into<Curve<T>>) -> Self {
        Self {
            profile: profile.into(),
            sweeper: sweeper.into(),
        }
    }

    pub fn profile(&self) -> &Curve<T> {
        &self.profile
    }

    pub fn sweeper(&self) -> &Curve<T> {
        &self.sweeper
    }

    pub fn point_at(&self, u: T, w: T, uflip: bool, wflip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, uflip)?;
        let w = resolve_parameter(w, wflip)?;
        let displacement = self.sweeper.point_at(w, false)? - self.sweeper.start();
        Ok(self.profile.point_at(u, false)? + displacement)
    }

    pub fn max_lengths(&self) -> anyhow::Result<(T, T)> {
        Ok((self.profile.try_length()?, self.sweeper.try_length()?))
    }
}

impl<T: FloatingPoint> Transform<T> for SweptSurface<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.profile.translate(offset);
        self.sweeper.translate(offset);
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.profile.rotate(axis, angle);
        self.sweeper.rotate(axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.profile.mirror(normal, origin)?;
        self.sweeper.mirror(normal, origin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Line, ThreePointArc};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn arc_swept_up() -> SweptSurface<f64> {
        let profile = ThreePointArc::try_new(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            false,
        )
        .unwrap();
        let sweeper = Line::try_new(Point3::new(5.0, 5.0, 0.0), Point3::new(5.0, 5.0, 2.0)).unwrap();
        SweptSurface::new(profile, sweeper)
    }

    #[test]
    fn w_zero_is_the_profile() {
        let surface = arc_swept_up();
        for u in [0.0, 0.5, 1.0] {
            let p = surface.point_at(u, 0.0, false, false).unwrap();
            let q = surface.profile().point_at(u, false).unwrap();
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn sweep_displacement_only() {
        // the sweeper's absolute position is irrelevant, only its displacement
        let surface = arc_swept_up();
        let p = surface.point_at(0.0, 1.0, false, false).unwrap();
        assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.z, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn lengths_are_the_curve_lengths() {
        let surface = arc_swept_up();
        let (lu, lw) = surface.max_lengths().unwrap();
        assert_relative_eq!(lu, FRAC_PI_2);
        assert_relative_eq!(lw, 2.0);
    }
}
