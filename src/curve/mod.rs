pub mod axis_angle_arc;
pub mod bezier;
pub mod line;
pub mod three_point_arc;
pub mod user_defined;

pub use axis_angle_arc::*;
pub use bezier::*;
pub use line::*;
pub use three_point_arc::*;
pub use user_defined::*;

use nalgebra::{Point3, Vector3};

use crate::misc::{Axis, FloatingPoint, Transform};

/// The closed set of curve variants. Every variant maps a normalized
/// parameter to a 3D point and knows its endpoints and arc length.
#[derive(Debug, Clone)]
pub enum Curve<T: FloatingPoint> {
    Line(Line<T>),
    ThreePointArc(ThreePointArc<T>),
    AxisAngleArc(AxisAngleArc<T>),
    Bezier(BezierCurve<T>),
    UserDefined(UserDefinedCurve<T>),
}

impl<T: FloatingPoint> Curve<T> {
    /// Evaluate the curve at a normalized parameter, optionally flipped
    /// (`u -> 1 - u`).
    /// # Failures
    /// - if `u` is outside [0, 1]
    pub fn point_at(&self, u: T, flip: bool) -> anyhow::Result<Point3<T>> {
        match self {
            Self::Line(c) => c.point_at(u, flip),
            Self::ThreePointArc(c) => c.point_at(u, flip),
            Self::AxisAngleArc(c) => c.point_at(u, flip),
            Self::Bezier(c) => c.point_at(u, flip),
            Self::UserDefined(c) => c.point_at(u, flip),
        }
    }

    pub fn start(&self) -> Point3<T> {
        match self {
            Self::Line(c) => c.start(),
            Self::ThreePointArc(c) => c.start(),
            Self::AxisAngleArc(c) => c.start(),
            Self::Bezier(c) => c.start(),
            Self::UserDefined(c) => c.start(),
        }
    }

    pub fn end(&self) -> Point3<T> {
        match self {
            Self::Line(c) => c.end(),
            Self::ThreePointArc(c) => c.end(),
            Self::AxisAngleArc(c) => c.end(),
            Self::Bezier(c) => c.end(),
            Self::UserDefined(c) => c.end(),
        }
    }

    /// Arc length. Exact for lines and arcs; a documented numerical
    /// approximation for Bezier and user-defined paths.
    pub fn try_length(&self) -> anyhow::Result<T> {
        match self {
            Self::Line(c) => Ok(c.length()),
            Self::ThreePointArc(c) => Ok(c.length()),
            Self::AxisAngleArc(c) => Ok(c.length()),
            Self::Bezier(c) => c.try_length(),
            Self::UserDefined(c) => Ok(c.length()),
        }
    }
}

impl<T: FloatingPoint> Transform<T> for Curve<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        match self {
            Self::Line(c) => c.translate(offset),
            Self::ThreePointArc(c) => c.translate(offset),
            Self::AxisAngleArc(c) => c.translate(offset),
            Self::Bezier(c) => c.translate(offset),
            Self::UserDefined(c) => c.translate(offset),
        }
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        match self {
            Self::Line(c) => c.rotate(axis, angle),
            Self::ThreePointArc(c) => c.rotate(axis, angle),
            Self::AxisAngleArc(c) => c.rotate(axis, angle),
            Self::Bezier(c) => c.rotate(axis, angle),
            Self::UserDefined(c) => c.rotate(axis, angle),
        }
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        match self {
            Self::Line(c) => c.mirror(normal, origin),
            Self::ThreePointArc(c) => c.mirror(normal, origin),
            Self::AxisAngleArc(c) => c.mirror(normal, origin),
            Self::Bezier(c) => c.mirror(normal, origin),
            Self::UserDefined(c) => c.mirror(normal, origin),
        }
    }
}

impl<T: FloatingPoint> From<Line<T>> for Curve<T> {
    fn from(curve: Line<T>) -> Self {
        Self::Line(curve)
    }
}

impl<T: FloatingPoint> From<ThreePointArc<T>> for Curve<T> {
    fn from(curve: ThreePointArc<T>) -> Self {
        Self::ThreePointArc(curve)
    }
}

impl<T: FloatingPoint> From<AxisAngleArc<T>> for Curve<T> {
    fn from(curve: AxisAngleArc<T>) -> Self {
        Self::AxisAngleArc(curve)
    }
}

impl<T: FloatingPoint> From<BezierCurve<T>> for Curve<T> {
    fn from(curve: BezierCurve<T>) -> Self {
        Self::Bezier(curve)
    }
}

impl<T: FloatingPoint> From<UserDefinedCurve<T>> for Curve<T> {
    fn from(curve: UserDefinedCurve<T>) -> Self {
        Self::UserDefined(curve)
    }
}
