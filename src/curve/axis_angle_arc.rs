use nalgebra::{Point3, Vector3};

use crate::errors::GeometryError;
use crate::misc::{
    mirror_point, resolve_parameter, rotate_point, Axis, FloatingPoint, Transform,
};

/// A circular arc swept by rotating a start point about an axis by a signed
/// angle (radians, unrestricted sign and magnitude).
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAngleArc<T: FloatingPoint> {
    start: Point3<T>,
    axis: Axis<T>,
    angle: T,
}

impl<T: FloatingPoint> AxisAngleArc<T> {
    /// # Failures
    /// - if the start point lies on the axis line (zero sweep radius)
    pub fn try_new(start: Point3<T>, axis: Axis<T>, angle: T) -> anyhow::Result<Self> {
        let arc = Self { start, axis, angle };
        if arc.radius() <= T::default_epsilon() {
            return Err(
                GeometryError::DegenerateGeometry("arc start lies on the rotation axis".into())
                    .into(),
            );
        }
        Ok(arc)
    }

    pub fn start(&self) -> Point3<T> {
        self.start
    }

    pub fn end(&self) -> Point3<T> {
        rotate_point(&self.start, &self.axis, self.angle)
    }

    pub fn axis(&self) -> &Axis<T> {
        &self.axis
    }

    pub fn angle(&self) -> T {
        self.angle
    }

    /// Sweep radius: the component of the start point orthogonal to the axis.
    pub fn radius(&self) -> T {
        let radial = self.start - self.axis.origin();
        let direction = self.axis.direction();
        (radial - direction.into_inner() * radial.dot(&direction)).norm()
    }

    pub fn length(&self) -> T {
        self.radius() * self.angle.abs()
    }

    pub fn point_at(&self, u: T, flip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, flip)?;
        Ok(rotate_point(&self.start, &self.axis, u * self.angle))
    }
}

impl<T: FloatingPoint> Transform<T> for AxisAngleArc<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.start += offset;
        Transform::translate(&mut self.axis, offset);
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.start = rotate_point(&self.start, axis, angle);
        Transform::rotate(&mut self.axis, axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.start = mirror_point(&self.start, normal, origin)?;
        Transform::mirror(&mut self.axis, normal, origin)?;
        // a reflection reverses orientation, keep the sweep landing on the
        // mirrored end point
        self.angle = -self.angle;
        Ok(())
    }
}
