use gauss_quad::GaussLegendre;
use nalgebra::{Point3, Vector3};

use crate::errors::GeometryError;
use crate::misc::{
    mirror_point, resolve_parameter, rotate_point, Axis, FloatingPoint, Transform,
};

/// A Bezier curve over an ordered control polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve<T: FloatingPoint> {
    control_points: Vec<Point3<T>>,
}

impl<T: FloatingPoint> BezierCurve<T> {
    /// # Failures
    /// - if the control polygon is empty
    pub fn try_new(control_points: Vec<Point3<T>>) -> anyhow::Result<Self> {
        if control_points.is_empty() {
            return Err(GeometryError::DegenerateGeometry(
                "Bezier curve needs at least one control point".into(),
            )
            .into());
        }
        Ok(Self { control_points })
    }

    pub fn control_points(&self) -> &[Point3<T>] {
        &self.control_points
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn start(&self) -> Point3<T> {
        self.control_points[0]
    }

    pub fn end(&self) -> Point3<T> {
        self.control_points[self.control_points.len() - 1]
    }

    /// Evaluate by the de Casteljau construction: repeated linear blends of
    /// the control polygon until a single point remains.
    pub fn point_at(&self, u: T, flip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, flip)?;
        let mut points = self.control_points.clone();
        while points.len() > 1 {
            points = points
                .windows(2)
                .map(|pair| Point3::from(pair[0].coords.lerp(&pair[1].coords, u)))
                .collect();
        }
        Ok(points[0])
    }

    /// First derivative via the hodograph (scaled difference polygon).
    fn derivative_at(&self, u: T) -> Vector3<T> {
        let n = self.degree();
        if n == 0 {
            return Vector3::zeros();
        }
        let scale = T::from_usize(n).unwrap();
        let mut vectors: Vec<Vector3<T>> = self
            .control_points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]) * scale)
            .collect();
        while vectors.len() > 1 {
            vectors = vectors
                .windows(2)
                .map(|pair| pair[0].lerp(&pair[1], u))
                .collect();
        }
        vectors[0]
    }

    /// Arc length by Gauss-Legendre quadrature of the derivative norm.
    /// There is no closed form; this is an approximation whose accuracy
    /// grows with the node count (`16 + degree`, following the usual
    /// practice for rational curve lengths).
    pub fn try_length(&self) -> anyhow::Result<T> {
        let gauss = GaussLegendre::new(16 + self.degree()).map_err(anyhow::Error::new)?;
        let sum = gauss.integrate(0.0, 1.0, |x| {
            let u = T::from_f64(x).unwrap();
            self.derivative_at(u).norm().to_f64().unwrap()
        });
        Ok(T::from_f64(sum).unwrap())
    }
}

impl<T: FloatingPoint> Transform<T> for BezierCurve<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        for p in &mut self.control_points {
            *p += offset;
        }
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        for p in &mut self.control_points {
            *p = rotate_point(p, axis, angle);
        }
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        for p in &mut self.control_points {
            *p = mirror_point(p, normal, origin)?;
        }
        Ok(())
    }
}
