pub mod axis;
pub mod floating_point;
pub mod tolerance;
pub mod transform;

pub use axis::*;
pub use floating_point::*;
pub use tolerance::*;
pub use transform::*;
