use nalgebra::{Matrix3, Point3, Rotation3, Unit, Vector3};

use crate::errors::GeometryError;
use crate::misc::{Axis, FloatingPoint};

/// Rotate a point about an axis line by the given angle (Rodrigues rotation,
/// expressed through [`Rotation3`]), pivoting at the axis base point.
pub fn rotate_point<T: FloatingPoint>(point: &Point3<T>, axis: &Axis<T>, angle: T) -> Point3<T> {
    let rotation = Rotation3::from_axis_angle(&axis.direction(), angle);
    axis.origin() + rotation * (point - axis.origin())
}

/// The Householder reflection matrix `I - 2nn^T` for a plane normal.
/// # Failures
/// - if the normal has zero length
pub fn reflection_matrix<T: FloatingPoint>(normal: &Vector3<T>) -> anyhow::Result<Matrix3<T>> {
    let n = Unit::try_new(*normal, T::default_epsilon())
        .ok_or_else(|| GeometryError::DegenerateGeometry("mirror normal has zero length".into()))?
        .into_inner();
    let two = T::one() + T::one();
    Ok(Matrix3::identity() - (n * two) * n.transpose())
}

/// Mirror a point across the plane with the given normal and base point.
pub fn mirror_point<T: FloatingPoint>(
    point: &Point3<T>,
    normal: &Vector3<T>,
    origin: &Point3<T>,
) -> anyhow::Result<Point3<T>> {
    let reflection = reflection_matrix(normal)?;
    Ok(origin + reflection * (point - origin))
}

/// Rigid transforms shared by points, curves and surfaces.
/// The mutating methods change the receiver in place; the `*ed` variants
/// return a transformed deep copy.
pub trait Transform<T: FloatingPoint>: Clone {
    fn translate(&mut self, offset: &Vector3<T>);

    fn rotate(&mut self, axis: &Axis<T>, angle: T);

    /// Mirror across a plane. Fails if the plane normal is degenerate.
    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()>;

    fn translated(&self, offset: &Vector3<T>) -> Self {
        let mut clone = self.clone();
        clone.translate(offset);
        clone
    }

    fn rotated(&self, axis: &Axis<T>, angle: T) -> Self {
        let mut clone = self.clone();
        clone.rotate(axis, angle);
        clone
    }

    fn mirrored(&self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<Self> {
        let mut clone = self.clone();
        clone.mirror(normal, origin)?;
        Ok(clone)
    }
}

impl<T: FloatingPoint> Transform<T> for Point3<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        *self += offset;
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        *self = rotate_point(self, axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        *self = mirror_point(self, normal, origin)?;
        Ok(())
    }
}

impl<T: FloatingPoint> Transform<T> for Axis<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        Axis::translate(self, offset);
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        let rotation = Rotation3::from_axis_angle(&axis.direction(), angle);
        self.set_origin(rotate_point(&self.origin(), axis, angle));
        self.set_vector(rotation * self.vector());
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        let reflection = reflection_matrix(normal)?;
        self.set_origin(origin + reflection * (self.origin() - origin));
        self.set_vector(reflection * self.vector());
        Ok(())
    }
}
