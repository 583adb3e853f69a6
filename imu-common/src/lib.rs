//! General functionality shared by the `train-accel` crates: timestamped 3-axis samples,
//! the arithmetic they support and the filters that smooth them.

pub mod constants;
pub mod errors;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::imu::{BasicArithmetic, IMUFilter, IMUSample, IMUUntimedSample};

// Re-export types
#[doc(inline)]
pub use errors::FilterError;
#[doc(inline)]
pub use types::{buffers, filters, Sample3D, XYZ};
