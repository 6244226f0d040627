use nalgebra::{Point3, Rotation3, Unit, UnitVector3, Vector3};

use crate::errors::GeometryError;
use crate::misc::{
    mirror_point, resolve_parameter, rotate_point, Axis, FloatingPoint, Transform,
};

/// Relative radius mismatch allowed between the two arc endpoints.
const RADIUS_TOLERANCE: f64 = 1e-4;

/// A circular arc defined by its centre and two endpoints.
/// The sector swept is the one subtending an angle below pi unless
/// `inverse_sector` asks for the complementary (long way around) sector.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreePointArc<T: FloatingPoint> {
    center: Point3<T>,
    start: Point3<T>,
    end: Point3<T>,
    inverse_sector: bool,
}

impl<T: FloatingPoint> ThreePointArc<T> {
    /// # Failures
    /// - if the start radius is zero
    /// - if the start and end radii differ by more than 1e-4 relative to the
    ///   start radius
    /// - if centre, start and end are collinear (the arc plane is undefined)
    pub fn try_new(
        center: Point3<T>,
        start: Point3<T>,
        end: Point3<T>,
        inverse_sector: bool,
    ) -> anyhow::Result<Self> {
        let vs = start - center;
        let ve = end - center;
        let rs = vs.norm();
        let re = ve.norm();
        if rs <= T::default_epsilon() {
            return Err(
                GeometryError::DegenerateGeometry("arc start coincides with its centre".into())
                    .into(),
            );
        }
        if ((re - rs).abs() / rs) > T::from_f64(RADIUS_TOLERANCE).unwrap() {
            return Err(GeometryError::RadiusMismatch {
                start: rs.to_f64().unwrap_or(f64::NAN),
                end: re.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }
        if Unit::try_new(vs.cross(&ve), T::default_epsilon()).is_none() {
            return Err(GeometryError::DegenerateGeometry(
                "arc points are collinear with the centre".into(),
            )
            .into());
        }
        Ok(Self {
            center,
            start,
            end,
            inverse_sector,
        })
    }

    pub fn center(&self) -> Point3<T> {
        self.center
    }

    pub fn start(&self) -> Point3<T> {
        self.start
    }

    pub fn end(&self) -> Point3<T> {
        self.end
    }

    pub fn is_inverse_sector(&self) -> bool {
        self.inverse_sector
    }

    pub fn radius(&self) -> T {
        (self.start - self.center).norm()
    }

    /// Unit normal of the arc plane, oriented so that the sweep from start
    /// to end is a positive rotation about it.
    pub fn plane_normal(&self) -> UnitVector3<T> {
        let cross = (self.start - self.center).cross(&(self.end - self.center));
        let cross = if self.inverse_sector { -cross } else { cross };
        Unit::new_normalize(cross)
    }

    /// Sector angle in radians: the principal angle between the two radius
    /// vectors, or its complement to a full turn for an inverse sector.
    pub fn angle(&self) -> T {
        let vs = self.start - self.center;
        let ve = self.end - self.center;
        let r = vs.norm();
        let cos = (vs.dot(&ve) / (r * r)).min(T::one()).max(-T::one());
        let principal = cos.acos();
        if self.inverse_sector {
            T::two_pi() - principal
        } else {
            principal
        }
    }

    pub fn length(&self) -> T {
        self.radius() * self.angle()
    }

    /// Evaluate the arc at a normalized parameter by rotating the start
    /// point about the plane normal through the centre.
    pub fn point_at(&self, u: T, flip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, flip)?;
        let rotation = Rotation3::from_axis_angle(&self.plane_normal(), u * self.angle());
        Ok(self.center + rotation * (self.start - self.center))
    }
}

impl<T: FloatingPoint> Transform<T> for ThreePointArc<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.center += offset;
        self.start += offset;
        self.end += offset;
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.center = rotate_point(&self.center, axis, angle);
        self.start = rotate_point(&self.start, axis, angle);
        self.end = rotate_point(&self.end, axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.center = mirror_point(&self.center, normal, origin)?;
        self.start = mirror_point(&self.start, normal, origin)?;
        self.end = mirror_point(&self.end, normal, origin)?;
        Ok(())
    }
}
