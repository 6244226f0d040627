use nalgebra::{Point3, Unit, UnitVector3, Vector3};

use crate::errors::GeometryError;
use crate::misc::{points_coincident, FloatingPoint};

/// A directed segment used as a rotation axis or direction:
/// a base point plus a non-zero vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis<T: FloatingPoint> {
    origin: Point3<T>,
    vector: Vector3<T>,
}

impl<T: FloatingPoint> Axis<T> {
    /// Create an axis from its base point towards a tip point.
    /// # Failures
    /// - if the two points coincide (a zero-length axis has no direction)
    pub fn try_new(start: Point3<T>, end: Point3<T>) -> anyhow::Result<Self> {
        if points_coincident(&start, &end) {
            return Err(
                GeometryError::DegenerateGeometry("axis endpoints coincide".into()).into(),
            );
        }
        Ok(Self {
            origin: start,
            vector: end - start,
        })
    }

    /// Create an axis from a base point and a direction vector.
    pub fn from_vector(origin: Point3<T>, vector: Vector3<T>) -> anyhow::Result<Self> {
        if Unit::try_new(vector, T::default_epsilon()).is_none() {
            return Err(
                GeometryError::DegenerateGeometry("axis vector has zero length".into()).into(),
            );
        }
        Ok(Self { origin, vector })
    }

    pub fn origin(&self) -> Point3<T> {
        self.origin
    }

    pub fn vector(&self) -> Vector3<T> {
        self.vector
    }

    pub fn length(&self) -> T {
        self.vector.norm()
    }

    pub fn direction(&self) -> UnitVector3<T> {
        Unit::new_normalize(self.vector)
    }

    pub(crate) fn translate(&mut self, offset: &Vector3<T>) {
        self.origin += offset;
    }

    pub(crate) fn set_origin(&mut self, origin: Point3<T>) {
        self.origin = origin;
    }

    pub(crate) fn set_vector(&mut self, vector: Vector3<T>) {
        self.vector = vector;
    }
}
