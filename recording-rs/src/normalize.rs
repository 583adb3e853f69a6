use log::debug;

use imu_common::constants::{N_XYZ_COORDINATES, STANDARD_GRAVITY};
use imu_common::{IMUSample, Sample3D};

/// The phone is mounted with x to the left, y to the back and z up relative to the train.
/// Flipping x and y gives x to the right, y forward, z up.
pub const SENSOR_TO_TRAVEL_FRAME: [f64; N_XYZ_COORDINATES] = [-1.0, -1.0, 1.0];

/// Unit of the acceleration values flowing through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Units {
    #[default]
    G,
    MetersPerSecondSquared,
}

impl Units {
    pub fn label(&self) -> &'static str {
        match self {
            Units::G => "g",
            Units::MetersPerSecondSquared => "m.s^-2",
        }
    }
}

/// Reorients samples into the travel frame and converts them from g to m/s^2.
pub fn normalize(samples: &[Sample3D]) -> Vec<Sample3D> {
    debug!(
        "Normalizing {} samples (frame {:?}, g = {})",
        samples.len(),
        SENSOR_TO_TRAVEL_FRAME,
        STANDARD_GRAVITY
    );
    samples
        .iter()
        .map(|sample| {
            Sample3D::from_xyz(
                sample.get_timestamp_secs(),
                sample
                    .get_measurement()
                    .scale_axes(SENSOR_TO_TRAVEL_FRAME)
                    * STANDARD_GRAVITY,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use imu_common::XYZ;

    #[test]
    fn test_normalize_at_rest() {
        let samples = vec![Sample3D::new(3.0, [0.0, 0.0, 1.0])];
        let normalized = normalize(&samples);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].get_timestamp_secs(), 3.0);
        assert_eq!(
            normalized[0].get_measurement(),
            XYZ::new([0.0, 0.0, STANDARD_GRAVITY])
        );
    }

    #[test]
    fn test_normalize_flips_horizontal_axes() {
        let samples = vec![Sample3D::new(0.0, [0.5, -0.25, 1.0])];
        let [x, y, z] = normalize(&samples)[0].get_measurement().inner();
        assert_eq!(x, -0.5 * STANDARD_GRAVITY);
        assert_eq!(y, 0.25 * STANDARD_GRAVITY);
        assert_eq!(z, STANDARD_GRAVITY);
    }

    #[test]
    fn test_units_label() {
        assert_eq!(Units::default().label(), "g");
        assert_eq!(Units::MetersPerSecondSquared.label(), "m.s^-2");
    }
}
