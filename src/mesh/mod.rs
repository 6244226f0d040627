pub mod density;
pub mod panel;

pub use density::*;
pub use panel::*;

use itertools::Itertools;
use log::debug;
use nalgebra::Point3;

use crate::distribution::Distribution;
use crate::misc::FloatingPoint;
use crate::surface::Surface;

/// A surface registered for meshing, with its resolved point counts and
/// spacing distributions.
#[derive(Debug, Clone)]
pub struct MeshEntry<T: FloatingPoint> {
    surface: Surface<T>,
    points_u: usize,
    points_w: usize,
    distribution_u: Distribution<T>,
    distribution_w: Distribution<T>,
}

impl<T: FloatingPoint> MeshEntry<T> {
    pub fn surface(&self) -> &Surface<T> {
        &self.surface
    }

    pub fn points_u(&self) -> usize {
        self.points_u
    }

    pub fn points_w(&self) -> usize {
        self.points_w
    }

    pub fn distributions(&self) -> (&Distribution<T>, &Distribution<T>) {
        (&self.distribution_u, &self.distribution_w)
    }

    /// Evaluate the surface on the distributed grid: indices are equally
    /// spaced in raw parameter space and remapped through the distributions,
    /// so edge point density is controlled purely by the distribution choice.
    pub fn mesh_points(&self) -> anyhow::Result<Vec<Vec<Point3<T>>>> {
        let last_u = T::from_usize(self.points_u - 1).unwrap();
        let last_w = T::from_usize(self.points_w - 1).unwrap();
        (0..self.points_u)
            .map(|i| {
                let u = self
                    .distribution_u
                    .apply(T::from_usize(i).unwrap() / last_u)?;
                (0..self.points_w)
                    .map(|j| {
                        let w = self
                            .distribution_w
                            .apply(T::from_usize(j).unwrap() / last_w)?;
                        self.surface.point_at(u, w, false, false)
                    })
                    .collect()
            })
            .collect()
    }

    /// Extract one quadrilateral panel per grid cell, winding reversed when
    /// the surface's normal flip flag is set.
    pub fn panels(&self) -> anyhow::Result<Vec<Panel<T>>> {
        let grid = self.mesh_points()?;
        let flipped = self.surface.is_normal_flipped();
        let mut panels = Vec::with_capacity((self.points_u - 1) * (self.points_w - 1));
        for i in 0..self.points_u - 1 {
            for j in 0..self.points_w - 1 {
                let panel = Panel::new([
                    grid[i][j],
                    grid[i + 1][j],
                    grid[i + 1][j + 1],
                    grid[i][j + 1],
                ]);
                panels.push(if flipped { panel.reversed() } else { panel });
            }
        }
        Ok(panels)
    }
}

/// Collects surfaces with their meshing configuration and turns them into
/// a flat panel list in registration order. Owned by the caller; there is
/// no process-wide registry.
#[derive(Debug, Clone)]
pub struct MeshGenerator<T: FloatingPoint> {
    entries: Vec<MeshEntry<T>>,
}

impl<T: FloatingPoint> Default for MeshGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatingPoint> MeshGenerator<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a surface. Point counts are resolved eagerly against the
    /// surface's boundary lengths so invalid densities fail here, before
    /// any grid is evaluated.
    pub fn add_surface(
        &mut self,
        surface: impl Into<Surface<T>>,
        density_u: PanelDensity<T>,
        density_w: PanelDensity<T>,
        distribution_u: Distribution<T>,
        distribution_w: Distribution<T>,
    ) -> anyhow::Result<()> {
        let surface = surface.into();
        let (length_u, length_w) = surface.max_lengths()?;
        let points_u = density_u.resolve(length_u)?;
        let points_w = density_w.resolve(length_w)?;
        debug!(
            "registered surface {} with {}x{} mesh points",
            self.entries.len(),
            points_u,
            points_w
        );
        self.entries.push(MeshEntry {
            surface,
            points_u,
            points_w,
            distribution_u,
            distribution_w,
        });
        Ok(())
    }

    /// Register a surface with linear spacing along both dimensions.
    pub fn add_surface_uniform(
        &mut self,
        surface: impl Into<Surface<T>>,
        density_u: PanelDensity<T>,
        density_w: PanelDensity<T>,
    ) -> anyhow::Result<()> {
        self.add_surface(
            surface,
            density_u,
            density_w,
            Distribution::linear(),
            Distribution::linear(),
        )
    }

    /// Registered entries, in registration order.
    pub fn entries(&self) -> &[MeshEntry<T>] {
        &self.entries
    }

    pub fn surface_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registered surface (test isolation and reuse).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All panels of all registered surfaces, concatenated in registration
    /// order.
    pub fn panels(&self) -> anyhow::Result<Vec<Panel<T>>> {
        let panels: Vec<Panel<T>> = self
            .entries
            .iter()
            .map(MeshEntry::panels)
            .flatten_ok()
            .collect::<anyhow::Result<_>>()?;
        debug!(
            "generated {} panels from {} surfaces",
            panels.len(),
            self.entries.len()
        );
        Ok(panels)
    }
}
