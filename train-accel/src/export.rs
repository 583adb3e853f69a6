use std::path::Path;

use csv::Writer;
use log::info;
use serde::Serialize;

use imu_common::Sample3D;

use crate::errors::AppError;

#[derive(Debug, Serialize)]
struct ExportRow {
    timestamp: f64,
    x: f64,
    y: f64,
    z: f64,
}

impl From<&Sample3D> for ExportRow {
    fn from(sample: &Sample3D) -> Self {
        let [timestamp, x, y, z] = sample.to_row();
        Self { timestamp, x, y, z }
    }
}

/// Writes samples as `timestamp,x,y,z` CSV.
pub fn write_samples<P: AsRef<Path>>(path: P, samples: &[Sample3D]) -> Result<(), AppError> {
    let path = path.as_ref();
    let mut wtr = Writer::from_path(path)?;
    for sample in samples {
        wtr.serialize(ExportRow::from(sample))?;
    }
    wtr.flush()?;
    info!("Exported {} samples to {}", samples.len(), path.display());
    Ok(())
}
