pub mod imu;

pub use crate::traits::imu::{BasicArithmetic, IMUFilter, IMUSample, IMUUntimedSample};
