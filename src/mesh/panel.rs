use nalgebra::{Point3, Vector3};

use crate::misc::FloatingPoint;

/// One quadrilateral facet of a discretized surface: four vertices whose
/// winding order determines the outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Panel<T: FloatingPoint> {
    vertices: [Point3<T>; 4],
}

impl<T: FloatingPoint> Panel<T> {
    pub fn new(vertices: [Point3<T>; 4]) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point3<T>; 4] {
        &self.vertices
    }

    /// The same panel with reversed winding (and thus a negated normal).
    pub fn reversed(&self) -> Self {
        let [v0, v1, v2, v3] = self.vertices;
        Self {
            vertices: [v3, v2, v1, v0],
        }
    }

    /// Approximate outward unit normal from two panel edges, for display
    /// purposes. Zero for a fully degenerate panel.
    pub fn normal(&self) -> Vector3<T> {
        let cross =
            (self.vertices[1] - self.vertices[0]).cross(&(self.vertices[3] - self.vertices[0]));
        let norm = cross.norm();
        if norm > T::default_epsilon() {
            cross / norm
        } else {
            Vector3::zeros()
        }
    }

    pub fn centroid(&self) -> Point3<T> {
        let four = T::from_usize(4).unwrap();
        let sum = self
            .vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.coords);
        Point3::from(sum / four)
    }

    /// The 12-number form consumed by the GDF writer:
    /// `v0x v0y v0z v1x ... v3z`.
    pub fn flattened(&self) -> [T; 12] {
        let mut flat = [T::zero(); 12];
        for (i, vertex) in self.vertices.iter().enumerate() {
            flat[i * 3] = vertex.x;
            flat[i * 3 + 1] = vertex.y;
            flat[i * 3 + 2] = vertex.z;
        }
        flat
    }
}
