use nalgebra::{Point3, Vector3};

use crate::errors::GeometryError;
use crate::misc::{
    mirror_point, points_coincident, resolve_parameter, rotate_point, Axis, FloatingPoint,
    Transform,
};

/// A parallelogram patch spanned by two edge vectors sharing an origin:
/// `p(u, w) = p0 + (p1 - p0) u + (p2 - p0) w`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneSurface<T: FloatingPoint> {
    point0: Point3<T>,
    point1: Point3<T>,
    point2: Point3<T>,
}

impl<T: FloatingPoint> PlaneSurface<T> {
    /// # Failures
    /// - if either edge vector is degenerate (`p1` or `p2` coincides with `p0`)
    pub fn try_new(
        point0: Point3<T>,
        point1: Point3<T>,
        point2: Point3<T>,
    ) -> anyhow::Result<Self> {
        if points_coincident(&point0, &point1) || points_coincident(&point0, &point2) {
            return Err(
                GeometryError::DegenerateGeometry("plane surface edge has zero length".into())
                    .into(),
            );
        }
        Ok(Self {
            point0,
            point1,
            point2,
        })
    }

    pub fn point_at(&self, u: T, w: T, uflip: bool, wflip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, uflip)?;
        let w = resolve_parameter(w, wflip)?;
        Ok(self.point0 + (self.point1 - self.point0) * u + (self.point2 - self.point0) * w)
    }

    pub fn max_lengths(&self) -> anyhow::Result<(T, T)> {
        Ok((
            (self.point1 - self.point0).norm(),
            (self.point2 - self.point0).norm(),
        ))
    }
}

impl<T: FloatingPoint> Transform<T> for PlaneSurface<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.point0 += offset;
        self.point1 += offset;
        self.point2 += offset;
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.point0 = rotate_point(&self.point0, axis, angle);
        self.point1 = rotate_point(&self.point1, axis, angle);
        self.point2 = rotate_point(&self.point2, axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.point0 = mirror_point(&self.point0, normal, origin)?;
        self.point1 = mirror_point(&self.point1, normal, origin)?;
        self.point2 = mirror_point(&self.point2, normal, origin)?;
        Ok(())
    }
}
