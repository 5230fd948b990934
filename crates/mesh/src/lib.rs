mod geometry;
mod tri_mesh;

pub use geometry::*;
pub use tri_mesh::*;
