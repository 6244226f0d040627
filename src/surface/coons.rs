use nalgebra::{Point3, Vector3};

use crate::curve::Curve;
use crate::errors::GeometryError;
use crate::misc::{points_coincident, resolve_parameter, Axis, FloatingPoint, Transform};

/// A transfinite patch interpolating four boundary curves.
///
/// The curves may be supplied in any order and any individual direction;
/// construction chains them into a closed loop and remaps them into the
/// canonical boundary roles `u0` (w = 0 edge), `u1` (w = 1 edge), `0w`
/// (u = 0 edge) and `1w` (u = 1 edge), recording a flip flag per curve.
#[derive(Debug, Clone)]
pub struct CoonsPatch<T: FloatingPoint> {
    curve_u0: Curve<T>,
    curve_u1: Curve<T>,
    curve_0w: Curve<T>,
    curve_1w: Curve<T>,
    flips: [bool; 4],
}

impl<T: FloatingPoint> CoonsPatch<T> {
    /// Order and orient four boundary curves into a patch.
    /// # Failures
    /// - [`GeometryError::BoundaryLoopOpen`] if the curves cannot be chained
    ///   into a closed loop by matching endpoints
    pub fn try_new(curves: [Curve<T>; 4]) -> anyhow::Result<Self> {
        let (ordered, flips) = chain_into_loop(curves)?;
        let [d0, d1, d2, d3] = ordered;
        let [f0, f1, f2, f3] = flips;
        // Discovery order walks the loop; the canonical roles (u0, u1, 0w, 1w)
        // take the 1st, 3rd, 4th and 2nd discovered curves. The 3rd and 4th
        // run against their canonical direction, so their flips invert.
        Ok(Self {
            curve_u0: d0,
            curve_u1: d2,
            curve_0w: d3,
            curve_1w: d1,
            flips: [f0, !f2, !f3, f1],
        })
    }

    /// The boundary curves in canonical role order (u0, u1, 0w, 1w).
    pub fn boundary_curves(&self) -> [&Curve<T>; 4] {
        [
            &self.curve_u0,
            &self.curve_u1,
            &self.curve_0w,
            &self.curve_1w,
        ]
    }

    /// Flip flags matching [`Self::boundary_curves`].
    pub fn flips(&self) -> [bool; 4] {
        self.flips
    }

    /// The patch corners (p00, p10, p01, p11).
    pub fn corners(&self) -> anyhow::Result<[Point3<T>; 4]> {
        let zero = T::zero();
        let one = T::one();
        Ok([
            self.curve_u0.point_at(zero, self.flips[0])?,
            self.curve_1w.point_at(zero, self.flips[3])?,
            self.curve_0w.point_at(one, self.flips[2])?,
            self.curve_u1.point_at(one, self.flips[1])?,
        ])
    }

    /// Coons blend: linear interpolation along each parametric direction
    /// between the matching boundary curves, minus the bilinear corner
    /// correction that would otherwise be counted twice.
    pub fn point_at(&self, u: T, w: T, uflip: bool, wflip: bool) -> anyhow::Result<Point3<T>> {
        let u = resolve_parameter(u, uflip)?;
        let w = resolve_parameter(w, wflip)?;
        let one = T::one();

        let c0w = self.curve_0w.point_at(w, self.flips[2])?;
        let c1w = self.curve_1w.point_at(w, self.flips[3])?;
        let cu0 = self.curve_u0.point_at(u, self.flips[0])?;
        let cu1 = self.curve_u1.point_at(u, self.flips[1])?;
        let [p00, p10, p01, p11] = self.corners()?;

        let across_u = c0w.coords * (one - u) + c1w.coords * u;
        let across_w = cu0.coords * (one - w) + cu1.coords * w;
        let corners = p00.coords * ((one - u) * (one - w))
            + p10.coords * (u * (one - w))
            + p01.coords * ((one - u) * w)
            + p11.coords * (u * w);
        Ok(Point3::from(across_u + across_w - corners))
    }

    pub fn max_lengths(&self) -> anyhow::Result<(T, T)> {
        let len_u = self
            .curve_u0
            .try_length()?
            .max(self.curve_u1.try_length()?);
        let len_w = self
            .curve_0w
            .try_length()?
            .max(self.curve_1w.try_length()?);
        Ok((len_u, len_w))
    }
}

/// Greedily chain four curves into a closed loop starting from the first
/// curve unmodified. Each step scans the remaining curves for one whose
/// start or end coincides with the current loop end, records whether it had
/// to be flipped, and restarts the scan. A fruitless full scan, or a chain
/// that fails to return to the loop start, is an open boundary.
fn chain_into_loop<T: FloatingPoint>(
    curves: [Curve<T>; 4],
) -> anyhow::Result<([Curve<T>; 4], [bool; 4])> {
    let mut remaining: Vec<Curve<T>> = curves.into();
    let first = remaining.remove(0);
    let loop_start = first.start();
    let mut reference = first.end();
    let mut ordered = vec![first];
    let mut flips = vec![false];

    while !remaining.is_empty() {
        let matched = remaining.iter().enumerate().find_map(|(i, curve)| {
            if points_coincident(&curve.start(), &reference) {
                Some((i, false))
            } else if points_coincident(&curve.end(), &reference) {
                Some((i, true))
            } else {
                None
            }
        });
        let Some((index, flip)) = matched else {
            return Err(GeometryError::BoundaryLoopOpen.into());
        };
        let curve = remaining.remove(index);
        reference = if flip { curve.start() } else { curve.end() };
        ordered.push(curve);
        flips.push(flip);
    }

    if !points_coincident(&reference, &loop_start) {
        return Err(GeometryError::BoundaryLoopOpen.into());
    }

    let ordered: [Curve<T>; 4] = ordered
        .try_into()
        .map_err(|_| GeometryError::BoundaryLoopOpen)?;
    let flips: [bool; 4] = flips
        .try_into()
        .map_err(|_| GeometryError::BoundaryLoopOpen)?;
    Ok((ordered, flips))
}

impl<T: FloatingPoint> Transform<T> for CoonsPatch<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        self.curve_u0.translate(offset);
        self.curve_u1.translate(offset);
        self.curve_0w.translate(offset);
        self.curve_1w.translate(offset);
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        self.curve_u0.rotate(axis, angle);
        self.curve_u1.rotate(axis, angle);
        self.curve_0w.rotate(axis, angle);
        self.curve_1w.rotate(axis, angle);
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        self.curve_u0.mirror(normal, origin)?;
        self.curve_u1.mirror(normal, origin)?;
        self.curve_0w.mirror(normal, origin)?;
        self.curve_1w.mirror(normal, origin)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Line;
    use approx::assert_relative_eq;

    fn square_edges() -> [Curve<f64>; 4] {
        let p00 = Point3::origin();
        let p10 = Point3::new(1.0, 0.0, 0.0);
        let p11 = Point3::new(1.0, 1.0, 0.0);
        let p01 = Point3::new(0.0, 1.0, 0.0);
        [
            Line::try_new(p00, p10).unwrap().into(),
            Line::try_new(p10, p11).unwrap().into(),
            Line::try_new(p11, p01).unwrap().into(),
            Line::try_new(p01, p00).unwrap().into(),
        ]
    }

    fn jumbled_square_edges() -> [Curve<f64>; 4] {
        let p00 = Point3::origin();
        let p10 = Point3::new(1.0, 0.0, 0.0);
        let p11 = Point3::new(1.0, 1.0, 0.0);
        let p01 = Point3::new(0.0, 1.0, 0.0);
        // arbitrary order, some edges reversed
        [
            Line::try_new(p00, p10).unwrap().into(),
            Line::try_new(p01, p11).unwrap().into(),
            Line::try_new(p00, p01).unwrap().into(),
            Line::try_new(p11, p10).unwrap().into(),
        ]
    }

    #[test]
    fn square_patch_corners() {
        let patch = CoonsPatch::try_new(square_edges()).unwrap();
        let [p00, p10, p01, p11] = patch.corners().unwrap();
        assert_relative_eq!((p00 - Point3::origin()).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!((p10 - Point3::new(1.0, 0.0, 0.0)).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!((p01 - Point3::new(0.0, 1.0, 0.0)).norm(), 0.0, epsilon = 1e-12);
        assert_relative_eq!((p11 - Point3::new(1.0, 1.0, 0.0)).norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn square_patch_is_the_identity_map() {
        let patch = CoonsPatch::try_new(square_edges()).unwrap();
        for u in [0.0, 0.25, 0.5, 1.0] {
            for w in [0.0, 0.5, 0.75, 1.0] {
                let p = patch.point_at(u, w, false, false).unwrap();
                assert_relative_eq!(p.x, u, epsilon = 1e-12);
                assert_relative_eq!(p.y, w, epsilon = 1e-12);
                assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn jumbled_input_recovers_the_same_patch() {
        let reference = CoonsPatch::try_new(square_edges()).unwrap();
        let jumbled = CoonsPatch::try_new(jumbled_square_edges()).unwrap();
        for u in [0.0, 0.5, 1.0] {
            for w in [0.0, 0.5, 1.0] {
                let a = reference.point_at(u, w, false, false).unwrap();
                let b = jumbled.point_at(u, w, false, false).unwrap();
                assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn ordering_is_deterministic() {
        let a = CoonsPatch::try_new(jumbled_square_edges()).unwrap();
        let b = CoonsPatch::try_new(jumbled_square_edges()).unwrap();
        assert_eq!(a.flips(), b.flips());
        for (ca, cb) in a.boundary_curves().iter().zip(b.boundary_curves()) {
            assert_relative_eq!((ca.start() - cb.start()).norm(), 0.0, epsilon = 1e-12);
            assert_relative_eq!((ca.end() - cb.end()).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn open_loop_is_rejected() {
        let p00 = Point3::origin();
        let p10 = Point3::new(1.0, 0.0, 0.0);
        let p11 = Point3::new(1.0, 1.0, 0.0);
        let stray = Point3::new(0.0, 1.0, 0.5); // moved off the loop
        let p01 = Point3::new(0.0, 1.0, 0.0);
        let curves: [Curve<f64>; 4] = [
            Line::try_new(p00, p10).unwrap().into(),
            Line::try_new(p10, p11).unwrap().into(),
            Line::try_new(p11, stray).unwrap().into(),
            Line::try_new(p01, p00).unwrap().into(),
        ];
        let err = CoonsPatch::try_new(curves).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeometryError>(),
            Some(GeometryError::BoundaryLoopOpen)
        ));
    }

    #[test]
    fn boundary_lengths() {
        let patch = CoonsPatch::try_new(square_edges()).unwrap();
        let (lu, lw) = patch.max_lengths().unwrap();
        assert_relative_eq!(lu, 1.0);
        assert_relative_eq!(lw, 1.0);
    }
}
