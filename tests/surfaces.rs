use approx::assert_relative_eq;
use nalgebra::Point3;
use panelmesh::prelude::*;

fn square_corners() -> [Point3<f64>; 4] {
    [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ]
}

/// A plane, a bilinear surface and a Coons patch built over the same square
/// corners describe the same geometry through different constructions.
#[test]
fn plane_bilinear_and_coons_agree_on_a_square() {
    let [p00, p10, p11, p01] = square_corners();

    let plane: Surface<f64> = PlaneSurface::try_new(p00, p10, p01).unwrap().into();
    let bilinear: Surface<f64> = BilinearSurface::new(p00, p10, p11, p01).into();
    let coons: Surface<f64> = CoonsPatch::try_new([
        Line::try_new(p00, p10).unwrap().into(),
        Line::try_new(p10, p11).unwrap().into(),
        Line::try_new(p11, p01).unwrap().into(),
        Line::try_new(p01, p00).unwrap().into(),
    ])
    .unwrap()
    .into();

    for u in [0.0, 0.5, 1.0] {
        for w in [0.0, 0.5, 1.0] {
            let a = plane.point_at(u, w, false, false).unwrap();
            let b = bilinear.point_at(u, w, false, false).unwrap();
            let c = coons.point_at(u, w, false, false).unwrap();
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-10);
            assert_relative_eq!((a - c).norm(), 0.0, epsilon = 1e-10);
        }
    }
}

/// Sweeping a profile along a straight line is the same surface as ruling
/// between the profile and its translated copy.
#[test]
fn swept_matches_ruled_for_a_translational_sweep() {
    let profile = BezierCurve::try_new(vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.5, 1.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
    ])
    .unwrap();
    let sweeper = Line::try_new(Point3::origin(), Point3::new(0.0, 0.0, 2.0)).unwrap();

    let swept: Surface<f64> = SweptSurface::new(profile.clone(), sweeper).into();

    let translated = profile.translated(&nalgebra::Vector3::new(0.0, 0.0, 2.0));
    let ruled: Surface<f64> = RuledSurface::new(profile, translated).into();

    for u in [0.0, 0.25, 0.5, 0.75, 1.0] {
        for w in [0.0, 0.5, 1.0] {
            let a = swept.point_at(u, w, false, false).unwrap();
            let b = ruled.point_at(u, w, false, false).unwrap();
            assert_relative_eq!((a - b).norm(), 0.0, epsilon = 1e-10);
        }
    }
}

/// A Coons patch with curved boundaries still interpolates them exactly.
#[test]
fn coons_patch_interpolates_curved_boundaries() {
    let p00 = Point3::new(1.0, 0.0, 0.0);
    let p10 = Point3::new(0.0, 1.0, 0.0);
    let p11 = Point3::new(0.0, 1.0, 1.0);
    let p01 = Point3::new(1.0, 0.0, 1.0);

    let bottom: Curve<f64> = ThreePointArc::try_new(Point3::origin(), p00, p10, false)
        .unwrap()
        .into();
    let top: Curve<f64> =
        ThreePointArc::try_new(Point3::new(0.0, 0.0, 1.0), p01, p11, false)
            .unwrap()
            .into();
    let left: Curve<f64> = Line::try_new(p00, p01).unwrap().into();
    let right: Curve<f64> = Line::try_new(p10, p11).unwrap().into();

    // jumbled order and directions; `bottom` leads, anchoring the w = 0 edge
    let patch = CoonsPatch::try_new([bottom, right, top, left]).unwrap();

    // the w = 0 and w = 1 boundaries follow the arcs
    let inv = 1.0 / 2f64.sqrt();
    let mid_bottom = patch.point_at(0.5, 0.0, false, false).unwrap();
    assert_relative_eq!(mid_bottom.x, inv, epsilon = 1e-10);
    assert_relative_eq!(mid_bottom.y, inv, epsilon = 1e-10);
    assert_relative_eq!(mid_bottom.z, 0.0, epsilon = 1e-10);

    let mid_top = patch.point_at(0.5, 1.0, false, false).unwrap();
    assert_relative_eq!(mid_top.z, 1.0, epsilon = 1e-10);
    assert_relative_eq!((mid_top.coords.xy().norm() - 1.0).abs(), 0.0, epsilon = 1e-10);
}

#[test]
fn surface_transforms_commute_with_evaluation() {
    let [p00, p10, _, p01] = square_corners();
    let plane: Surface<f64> = PlaneSurface::try_new(p00, p10, p01).unwrap().into();
    let axis = Axis::try_new(Point3::origin(), Point3::new(0.0, 0.0, 1.0)).unwrap();
    let angle = std::f64::consts::FRAC_PI_2;

    let rotated = plane.rotated(&axis, angle);
    for (u, w) in [(0.0, 0.0), (0.5, 0.25), (1.0, 1.0)] {
        let before = plane.point_at(u, w, false, false).unwrap();
        let after = rotated.point_at(u, w, false, false).unwrap();
        let expected = rotate_point(&before, &axis, angle);
        assert_relative_eq!((after - expected).norm(), 0.0, epsilon = 1e-12);
    }
}
