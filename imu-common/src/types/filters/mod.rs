pub mod average;
pub mod config;
pub mod exponential;
pub mod low_pass;
pub mod moving_average;
pub mod passthrough;

pub use crate::types::filters::average::Average;
pub use crate::types::filters::config::FilterConfig;
pub use crate::types::filters::exponential::ExponentialSmoothing;
pub use crate::types::filters::low_pass::LowPass;
pub use crate::types::filters::moving_average::MovingAverage;
pub use crate::types::filters::passthrough::Passthrough;
