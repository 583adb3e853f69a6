pub mod buffers;
pub mod filters;
pub mod timed;
pub mod untimed;

pub use timed::Sample3D;
pub use untimed::XYZ;
