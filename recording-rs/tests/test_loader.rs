use imu_common::{IMUSample, Sample3D, XYZ};
use recording_rs::{
    calibrate, load_samples, normalize, CsvColumnMapper, CsvFileColumn, LoaderOptions,
    RecordingError, StaticWindow,
};

const EPS: f64 = 1e-12;

fn data_rows(file_name: &str) -> usize {
    let content = std::fs::read_to_string(file_name).unwrap();
    content
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count()
}

fn assert_strictly_increasing(samples: &[Sample3D]) {
    assert!(samples
        .windows(2)
        .all(|w| w[0].get_timestamp_secs() < w[1].get_timestamp_secs()));
}

#[test]
fn test_load_three_rows() {
    let samples = load_samples("./test_data/three_rows.csv", &LoaderOptions::default()).unwrap();

    assert_eq!(
        samples,
        vec![
            Sample3D::new(0.0, [0.0, 0.0, 1.0]),
            Sample3D::new(1.0, [0.1, 0.0, 0.98]),
            Sample3D::new(2.0, [-0.1, 0.0, 1.02]),
        ]
    );
}

#[test]
fn test_load_recording_length_and_order() {
    let file_name = "./test_data/train_ride.csv";
    let samples = load_samples(file_name, &LoaderOptions::default()).unwrap();

    assert_eq!(samples.len(), data_rows(file_name));
    assert_strictly_increasing(&samples);
}

#[test]
fn test_units_row_is_skipped() {
    let samples = load_samples("./test_data/with_units.csv", &LoaderOptions::default()).unwrap();

    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0], Sample3D::new(0.0, [0.01, -0.02, 1.01]));
    assert_strictly_increasing(&samples);
}

#[test]
fn test_comma_separated_file() {
    let options = LoaderOptions {
        delimiter: b',',
        ..LoaderOptions::default()
    };
    let samples = load_samples("./test_data/comma_separated.csv", &options).unwrap();

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[2], Sample3D::new(1.0, [0.02, 0.0, 0.99]));
}

#[test]
fn test_custom_column_mapping() {
    // read absolute acceleration as the z axis
    let mut columns = CsvColumnMapper::new();
    columns.set(CsvFileColumn::ZAccel, 4);
    let options = LoaderOptions {
        columns,
        ..LoaderOptions::default()
    };
    let samples = load_samples("./test_data/with_units.csv", &options).unwrap();

    assert_eq!(samples.len(), 4);
    assert_eq!(samples[1].get_measurement(), XYZ::new([0.03, 0.0, 0.99]));
}

#[test]
fn test_file_not_found() {
    let err = load_samples("./test_data/no_such_recording.csv", &LoaderOptions::default())
        .unwrap_err();
    assert!(matches!(err, RecordingError::FileNotFound(_)));
}

#[test]
fn test_malformed_row_is_fatal() {
    let err = load_samples("./test_data/malformed_row.csv", &LoaderOptions::default())
        .unwrap_err();
    match err {
        RecordingError::Parse { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("y acceleration"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_bad_first_row_is_not_a_units_row() {
    let err = load_samples("./test_data/bad_first_row.csv", &LoaderOptions::default())
        .unwrap_err();
    match err {
        RecordingError::Parse { line, reason } => {
            assert_eq!(line, 2);
            assert!(reason.starts_with("timestamp"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_short_row_is_fatal() {
    let err = load_samples("./test_data/short_row.csv", &LoaderOptions::default()).unwrap_err();
    assert!(matches!(err, RecordingError::Parse { line: 3, .. }));
}

#[test]
fn test_non_monotonic_timestamps() {
    let err = load_samples("./test_data/non_monotonic.csv", &LoaderOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        RecordingError::NonMonotonicTimestamp { line: 4, .. }
    ));
}

#[test]
fn test_header_only_file() {
    let err = load_samples("./test_data/header_only.csv", &LoaderOptions::default()).unwrap_err();
    assert!(matches!(err, RecordingError::Empty(_)));
}

#[test]
fn test_normalize_then_calibrate() {
    let samples = load_samples("./test_data/train_ride.csv", &LoaderOptions::default()).unwrap();
    let normalized = normalize(&samples);
    let windows = vec![
        StaticWindow::new(-1.0, 2.0).unwrap(),
        StaticWindow::new(4.0, 10.0).unwrap(),
    ];
    let calibrated = calibrate(&normalized, &windows).unwrap();

    assert_eq!(calibrated.samples.len(), samples.len());
    // at rest the sensor reads about 1 g upwards
    assert!((calibrated.bias.inner()[2] - 9.81).abs() < 0.05);

    let at_rest: Vec<&Sample3D> = calibrated
        .samples
        .iter()
        .filter(|s| windows.iter().any(|w| w.contains(s.get_timestamp_secs())))
        .collect();
    let mean_z =
        at_rest.iter().map(|s| s.get_measurement().inner()[2]).sum::<f64>() / at_rest.len() as f64;
    assert!(mean_z.abs() < EPS * 1000.0);
}
