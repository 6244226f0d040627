use nalgebra::{Point3, Vector3};

use crate::errors::GeometryError;
use crate::misc::{
    mirror_point, points_coincident, resolve_parameter, rotate_point, Axis, FloatingPoint,
    Transform,
};

/// A straight segment between two distinct points.
#[derive(Debug, Clone, PartialEq)]
pub struct Line<T: FloatingPoint> {
    start: Point3<T>,
    end: Point3<T>,
}

impl<T: FloatingPoint> Line<T> {
    /// # Failures
    /// - if the endpoints coincide
    pub fn try_new(start: Point3<T>, end: Point3<T>) -> anyhow::Result<Self> {
        if points_coincident(&start, &end) {
            return Err(
                GeometryError::DegenerateGeometry("line endpoints coincide".into()).into(),
            );
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> Point3<T> {
        self.start
    }

    pub fn end(&self) -> Point3<T> {
        self.end
    }

    pub fn length(&self) -> T {
        (self.end - self.start).norm()
    }

    /// Evaluate the line at a normalized parameter.
    pub fn point_at(&self, u: T, flip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, flip)?;
        Ok(self.start + (self.end - self.start) * u)
    }
}

impl<T: FloatingPoint> Transform<T> for Line<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.start += offset;
        self.end += offset;
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.start = rotate_point(&self.start, axis, angle);
        self.end = rotate_point(&self.end, axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.start = mirror_point(&self.start, normal, origin)?;
        self.end = mirror_point(&self.end, normal, origin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pythagorean_length() {
        let line = Line::try_new(Point3::origin(), Point3::new(0.0, -3.0, 4.0)).unwrap();
        assert_relative_eq!(line.length(), 5.0);
    }

    #[test]
    fn interpolation_and_flip() {
        let line = Line::try_new(Point3::origin(), Point3::new(0.0, -3.0, 4.0)).unwrap();
        let p = line.point_at(0.2, false).unwrap();
        assert_relative_eq!(p.y, -0.6);
        assert_relative_eq!(p.z, 0.8);

        for u in [0.0, 0.25, 0.5, 1.0] {
            let a = line.point_at(u, true).unwrap();
            let b = line.point_at(1.0 - u, false).unwrap();
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn endpoints() {
        let line = Line::try_new(Point3::new(1.0, 1.0, 1.0), Point3::new(2.0, 2.0, 2.0)).unwrap();
        assert_relative_eq!((line.point_at(0.0, false).unwrap() - line.start()).norm(), 0.0);
        assert_relative_eq!((line.point_at(1.0, false).unwrap() - line.end()).norm(), 0.0);
    }

    #[test]
    fn degenerate_line_is_rejected() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert!(Line::try_new(p, p).is_err());
    }

    #[test]
    fn out_of_range_parameter_is_rejected() {
        let line = Line::try_new(Point3::origin(), Point3::new(1.0, 0.0, 0.0)).unwrap();
        assert!(line.point_at(1.2, false).is_err());
        assert!(line.point_at(-0.2, true).is_err());
    }
}
