/// Number of coordinates of a 3-axis measurement.
pub const N_XYZ_COORDINATES: usize = 3;

/// Standard gravity [m/s^2], used to convert readings in g to S.I.
pub const STANDARD_GRAVITY: f64 = 9.81;
