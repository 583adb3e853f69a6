pub mod sample_3d;

pub use crate::types::timed::sample_3d::Sample3D;
