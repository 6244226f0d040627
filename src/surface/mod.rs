pub mod bilinear;
pub mod coons;
pub mod plane;
pub mod ruled;
pub mod swept;

pub use bilinear::*;
pub use coons::*;
pub use plane::*;
pub use ruled::*;
pub use swept::*;

use nalgebra::{Point3, Vector3};

use crate::misc::{Axis, FloatingPoint, Transform};

/// The closed set of surface variants.
#[derive(Debug, Clone)]
pub enum SurfaceKind<T: FloatingPoint> {
    Plane(PlaneSurface<T>),
    Bilinear(BilinearSurface<T>),
    Ruled(RuledSurface<T>),
    Swept(SweptSurface<T>),
    Coons(CoonsPatch<T>),
}

/// A meshable surface: one of the closed variant set plus the
/// normal-orientation flag consumed by the panel extractor.
#[derive(Debug, Clone)]
pub struct Surface<T: FloatingPoint> {
    kind: SurfaceKind<T>,
    flipped_normal: bool,
}

impl<T: FloatingPoint> Surface<T> {
    pub fn new(kind: SurfaceKind<T>) -> Self {
        Self {
            kind,
            flipped_normal: false,
        }
    }

    pub fn kind(&self) -> &SurfaceKind<T> {
        &self.kind
    }

    pub fn is_normal_flipped(&self) -> bool {
        self.flipped_normal
    }

    /// Toggle the panel winding orientation.
    pub fn flip_normal(&mut self) {
        self.flipped_normal = !self.flipped_normal;
    }

    /// Builder-style counterpart of [`Self::flip_normal`].
    pub fn with_flipped_normal(mut self) -> Self {
        self.flip_normal();
        self
    }

    /// Evaluate the surface at normalized parameters, each optionally
    /// flipped (`u -> 1 - u`).
    /// # Failures
    /// - if `u` or `w` is outside [0, 1]
    pub fn point_at(&self, u: T, w: T, uflip: bool, wflip: bool) -> anyhow::Result<Point3<T>> {
        match &self.kind {
            SurfaceKind::Plane(s) => s.point_at(u, w, uflip, wflip),
            SurfaceKind::Bilinear(s) => s.point_at(u, w, uflip, wflip),
            SurfaceKind::Ruled(s) => s.point_at(u, w, uflip, wflip),
            SurfaceKind::Swept(s) => s.point_at(u, w, uflip, wflip),
            SurfaceKind::Coons(s) => s.point_at(u, w, uflip, wflip),
        }
    }

    /// The larger boundary length along each parametric direction, used to
    /// convert a target panel size into a point count.
    pub fn max_lengths(&self) -> anyhow::Result<(T, T)> {
        match &self.kind {
            SurfaceKind::Plane(s) => s.max_lengths(),
            SurfaceKind::Bilinear(s) => s.max_lengths(),
            SurfaceKind::Ruled(s) => s.max_lengths(),
            SurfaceKind::Swept(s) => s.max_lengths(),
            SurfaceKind::Coons(s) => s.max_lengths(),
        }
    }
}

impl<T: FloatingPoint> Transform<T> for Surface<T> {
    fn translate(&mut self, offset: &Vector3<T>) {
        match &mut self.kind {
            SurfaceKind::Plane(s) => s.translate(offset),
            SurfaceKind::Bilinear(s) => s.translate(offset),
            SurfaceKind::Ruled(s) => s.translate(offset),
            SurfaceKind::Swept(s) => s.translate(offset),
            SurfaceKind::Coons(s) => s.translate(offset),
        }
    }

    fn rotate(&mut self, axis: &Axis<T>, angle: T) {
        match &mut self.kind {
            SurfaceKind::Plane(s) => s.rotate(axis, angle),
            SurfaceKind::Bilinear(s) => s.rotate(axis, angle),
            SurfaceKind::Ruled(s) => s.rotate(axis, angle),
            SurfaceKind::Swept(s) => s.rotate(axis, angle),
            SurfaceKind::Coons(s) => s.rotate(axis, angle),
        }
    }

    fn mirror(&mut self, normal: &Vector3<T>, origin: &Point3<T>) -> anyhow::Result<()> {
        match &mut self.kind {
            SurfaceKind::Plane(s) => s.mirror(normal, origin),
            SurfaceKind::Bilinear(s) => s.mirror(normal, origin),
            SurfaceKind::Ruled(s) => s.mirror(normal, origin),
            SurfaceKind::Swept(s) => s.mirror(normal, origin),
            SurfaceKind::Coons(s) => s.mirror(normal, origin),
        }
    }
}

impl<T: FloatingPoint> From<PlaneSurface<T>> for Surface<T> {
    fn from(surface: PlaneSurface<T>) -> Self {
        Self::new(SurfaceKind::Plane(surface))
    }
}

impl<T: FloatingPoint> From<BilinearSurface<T>> for Surface<T> {
    fn from(surface: BilinearSurface<T>) -> Self {
        Self::new(SurfaceKind::Bilinear(surface))
    }
}

impl<T: FloatingPoint> From<RuledSurface<T>> for Surface<T> {
    fn from(surface: RuledSurface<T>) -> Self {
        Self::new(SurfaceKind::Ruled(surface))
    }
}

impl<T: FloatingPoint> From<SweptSurface<T>> for Surface<T> {
    fn from(surface: SweptSurface<T>) -> Self {
        Self::new(SurfaceKind::Swept(surface))
    }
}

impl<T: FloatingPoint> From<CoonsPatch<T>> for Surface<T> {
    fn from(surface: CoonsPatch<T>) -> Self {
        Self::new(SurfaceKind::Coons(surface))
    }
}
