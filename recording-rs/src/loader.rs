use std::io::ErrorKind as IoErrorKind;
use std::path::Path;

use csv::{ErrorKind, ReaderBuilder, StringRecord, Trim};
use log::{debug, info};

use imu_common::{IMUSample, Sample3D};

use crate::columns::{CsvColumnMapper, CsvFileColumn};
use crate::errors::RecordingError;

const DEFAULT_DELIMITER: u8 = b';';

/// How a recording file is laid out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderOptions {
    pub delimiter: u8,
    pub has_header: bool,
    pub columns: CsvColumnMapper,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            has_header: true,
            columns: CsvColumnMapper::default(),
        }
    }
}

/// Parses one exported value. Sensor loggers write either a decimal comma or a decimal dot
/// depending on the phone locale, with an optional leading `-`.
pub fn parse_field(raw: &str) -> Result<f64, String> {
    let value = raw.trim().replace(',', ".");
    let parsed = value
        .parse::<f64>()
        .map_err(|_| format!("'{}' is not a number", raw))?;
    if !parsed.is_finite() {
        return Err(format!("'{}' is not a finite number", raw));
    }
    Ok(parsed)
}

fn parse_row(record: &StringRecord, columns: &CsvColumnMapper) -> Result<Sample3D, String> {
    let required = columns.required_width();
    if record.len() < required {
        return Err(format!(
            "expected at least {} columns, found {}",
            required,
            record.len()
        ));
    }

    let values = CsvFileColumn::ALL
        .iter()
        .map(|column| {
            let raw = record.get(columns.index_of(*column)).unwrap_or_default();
            parse_field(raw).map_err(|e| format!("{}: {}", column.name(), e))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    Sample3D::try_from(values).map_err(|e| e.to_string())
}

/// A units row carries labels only: none of the mapped columns holds a number.
fn is_units_row(record: &StringRecord, columns: &CsvColumnMapper) -> bool {
    CsvFileColumn::ALL.iter().all(|column| {
        record
            .get(columns.index_of(*column))
            .map(|raw| parse_field(raw).is_err())
            .unwrap_or(true)
    })
}

/// Loads a whole recording in memory.
///
/// Rows are returned in file order. Any row that can't be parsed aborts the load, as does a
/// timestamp that doesn't move forward.
pub fn load_samples<P: AsRef<Path>>(
    file_path: P,
    options: &LoaderOptions,
) -> Result<Vec<Sample3D>, RecordingError> {
    let path = file_path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| {
            if matches!(e.kind(), ErrorKind::Io(io) if io.kind() == IoErrorKind::NotFound) {
                RecordingError::FileNotFound(path.to_path_buf())
            } else {
                RecordingError::Csv(e)
            }
        })?;

    let mut samples: Vec<Sample3D> = Vec::new();
    let mut first_record = true;

    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if first_record && options.has_header && is_units_row(&record, &options.columns) {
            debug!("Skipping units row at line {}: {:?}", line, record);
            first_record = false;
            continue;
        }
        first_record = false;

        let sample =
            parse_row(&record, &options.columns).map_err(|reason| RecordingError::Parse {
                line,
                reason,
            })?;

        if let Some(previous) = samples.last() {
            let previous = previous.get_timestamp_secs();
            let current = sample.get_timestamp_secs();
            if current <= previous {
                return Err(RecordingError::NonMonotonicTimestamp {
                    line,
                    previous,
                    current,
                });
            }
        }
        samples.push(sample);
    }

    if samples.is_empty() {
        return Err(RecordingError::Empty(path.to_path_buf()));
    }

    info!("Loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("0.5").unwrap(), 0.5);
        assert_eq!(parse_field("-0,25").unwrap(), -0.25);
        assert_eq!(parse_field(" 1,02 ").unwrap(), 1.02);
        assert!(parse_field("abc").is_err());
        assert!(parse_field("").is_err());
        assert!(parse_field("NaN").is_err());
    }

    #[test]
    fn test_parse_row() {
        let record = StringRecord::from(vec!["1,5", "0,1", "-0,2", "0,98", "extra"]);
        let sample = parse_row(&record, &CsvColumnMapper::default()).unwrap();
        assert_eq!(sample, Sample3D::new(1.5, [0.1, -0.2, 0.98]));
    }

    #[test]
    fn test_parse_short_row() {
        let record = StringRecord::from(vec!["1,5", "0,1", "-0,2"]);
        let err = parse_row(&record, &CsvColumnMapper::default()).unwrap_err();
        assert_eq!(err, "expected at least 4 columns, found 3");
    }

    #[test]
    fn test_parse_row_names_bad_column() {
        let record = StringRecord::from(vec!["1", "0", "oops", "1"]);
        let err = parse_row(&record, &CsvColumnMapper::default()).unwrap_err();
        assert!(err.starts_with("y acceleration"));
    }

    #[test]
    fn test_units_row_detection() {
        let columns = CsvColumnMapper::default();
        assert!(is_units_row(
            &StringRecord::from(vec!["s", "g", "g", "g"]),
            &columns
        ));
        assert!(!is_units_row(
            &StringRecord::from(vec!["0,0", "g", "g", "g"]),
            &columns
        ));
        assert!(!is_units_row(
            &StringRecord::from(vec!["bad", "0", "0", "1"]),
            &columns
        ));
    }
}
