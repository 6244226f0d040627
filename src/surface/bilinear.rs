use nalgebra::{Point3, Vector3};

use crate::misc::{
    mirror_point, resolve_parameter, rotate_point, Axis, FloatingPoint, Transform,
};

/// A bilinear blend of four corner points, given counter-clockwise in the
/// (u, w) plane. Exact corner interpolation is the defining invariant:
/// `(0,0) -> p00`, `(1,0) -> p10`, `(1,1) -> p11`, `(0,1) -> p01`.
#[derive(Debug, Clone, PartialEq)]
pub struct BilinearSurface<T: FloatingPoint> {
    p00: Point3<T>,
    p10: Point3<T>,
    p11: Point3<T>,
    p01: Point3<T>,
}

impl<T: FloatingPoint> BilinearSurface<T> {
    pub fn new(p00: Point3<T>, p10: Point3<T>, p11: Point3<T>, p01: Point3<T>) -> Self {
        Self { p00, p10, p11, p01 }
    }

    pub fn corners(&self) -> [Point3<T>; 4] {
        [self.p00, self.p10, self.p11, self.p01]
    }

    pub fn point_at(&self, u: T, w: T, uflip: bool, wflip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, uflip)?;
        let w = resolve_parameter(w, wflip)?;
        let one = T::one();
        let blended = self.p00.coords * ((one - u) * (one - w))
            + self.p10.coords * (u * (one - w))
            + self.p11.coords * (u * w)
            + self.p01.coords * ((one - u) * w);
        Ok(Point3::from(blended))
    }

    /// Larger of each pair of opposing edges, per parametric direction.
    pub fn max_lengths(&self) -> anyhow::Result<(T, T)> {
        let len_u = (self.p10 - self.p00)
            .norm()
            .max((self.p11 - self.p01).norm());
        let len_w = (self.p01 - self.p00)
            .norm()
            .max((self.p11 - self.p10).norm());
        Ok((len_u, len_w))
    }
}

impl<T: FloatingPoint> Transform<T> for BilinearSurface<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.p00 += offset;
        self.p10 += offset;
        self.p11 += offset;
        self.p01 += offset;
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.p00 = rotate_point(&self.p00, axis, angle);
        self.p10 = rotate_point(&self.p10, axis, angle);
        self.p11 = rotate_point(&self.p11, axis, angle);
        self.p01 = rotate_point(&self.p01, axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.p00 = mirror_point(&self.p00, normal, origin)?;
        self.p10 = mirror_point(&self.p10, normal, origin)?;
        self.p11 = mirror_point(&self.p11, normal, origin)?;
        self.p01 = mirror_point(&self.p01, normal, origin)?;
        Ok(())
    }
}
