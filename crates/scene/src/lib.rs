mod registry;
mod transform;

pub use registry::*;
pub use transform::*;
