use nalgebra::{distance, Point3, Vector3};

use crate::curve::Curve;
use crate::misc::{resolve_parameter, Axis, FloatingPoint, Transform};

/// Straight-line interpolation between corresponding points on two
/// boundary curves: `p(u, w) = (1 - w) c0(u) + w c1(u)`.
#[derive(Debug, Clone)]
pub struct RuledSurface<T: FloatingPoint> {
    curve0: Curve<T>,
    curve1: Curve<T>,
}

impl<T: FloatingPoint> RuledSurface<T> {
    pub fn new(curve0: impl Into<Curve<T>>, curve1: impl Into<Curve<T>>) -> Self {
        Self {
            curve0: curve0.into(),
            curve1: curve1.into(),
        }
    }

    pub fn curves(&self) -> (&Curve<T>, &Curve<T>) {
        (&self.curve0, &self.curve1)
    }

    pub fn point_at(&self, u: T, w: T, uflip: bool, wflip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, uflip)?;
        let w = resolve_parameter(w, wflip)?;
        let a = self.curve0.point_at(u, false)?;
        let b = self.curve1.point_at(u, false)?;
        Ok(Point3::from(a.coords.lerp(&b.coords, w)))
    }

    /// Larger curve length along u; larger distance between corresponding
    /// endpoints along w.
    pub fn max_lengths(&self) -> anyhow::Result<(T, T)> {
        let len_u = self.curve0.try_length()?.max(self.curve1.try_length()?);
        let len_w = distance(&self.curve0.start(), &self.curve1.start())
            .max(distance(&self.curve0.end(), &self.curve1.end()));
        Ok((len_u, len_w))
    }
}

impl<T: FloatingPoint> Transform<T> for RuledSurface<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.curve0.translate(offset);
        self.curve1.translate(offset);
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.curve0.rotate(axis, angle);
        self.curve1.rotate(axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.curve0.mirror(normal, origin)?;
        self.curve1.mirror(normal, origin)?;
        Ok(())
    }
}
