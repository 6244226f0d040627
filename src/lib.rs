//! Parametric curve/surface panel meshing.
//!
//! Curves and surfaces are continuous mappings from a normalized parameter
//! domain to 3D points; the mesh generator discretizes them into
//! quadrilateral panels suitable for boundary-element (GDF) export.

mod curve;
mod distribution;
mod errors;
mod gdf;
mod mesh;
mod misc;
mod surface;

pub mod prelude {
    pub use crate::curve::*;
    pub use crate::distribution::*;
    pub use crate::errors::*;
    pub use crate::gdf::*;
    pub use crate::mesh::*;
    pub use crate::misc::*;
    pub use crate::surface::*;
}
