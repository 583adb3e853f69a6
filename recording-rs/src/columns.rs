use crate::errors::RecordingError;

/// Fields a sample is built from, in sample order.
#[repr(usize)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvFileColumn {
    Timestamp,
    XAccel,
    YAccel,
    ZAccel,
}

impl CsvFileColumn {
    pub const ALL: [CsvFileColumn; 4] = [
        CsvFileColumn::Timestamp,
        CsvFileColumn::XAccel,
        CsvFileColumn::YAccel,
        CsvFileColumn::ZAccel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CsvFileColumn::Timestamp => "timestamp",
            CsvFileColumn::XAccel => "x acceleration",
            CsvFileColumn::YAccel => "y acceleration",
            CsvFileColumn::ZAccel => "z acceleration",
        }
    }
}

impl From<CsvFileColumn> for usize {
    fn from(value: CsvFileColumn) -> Self {
        value as usize
    }
}

/// Maps each sample field to the index of the file column holding it.
/// Defaults to the sensor logger layout: time, x, y, z.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvColumnMapper {
    columns: [usize; 4],
}

impl Default for CsvColumnMapper {
    fn default() -> Self {
        Self {
            columns: [0, 1, 2, 3],
        }
    }
}

impl CsvColumnMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapper from `[timestamp, x, y, z]` column indices.
    pub fn from_indices(indices: &[usize]) -> Result<Self, RecordingError> {
        let columns: [usize; 4] = indices.try_into().map_err(|_| {
            RecordingError::InvalidColumnMapping(format!(
                "expected 4 indices (timestamp, x, y, z), got {}",
                indices.len()
            ))
        })?;
        Ok(Self { columns })
    }

    pub fn set(&mut self, column: CsvFileColumn, index: usize) -> &mut Self {
        self.columns[usize::from(column)] = index;
        self
    }

    pub fn index_of(&self, column: CsvFileColumn) -> usize {
        self.columns[usize::from(column)]
    }

    /// Returns the file column indices in sample order.
    pub fn columns(&self) -> Vec<usize> {
        self.columns.to_vec()
    }

    /// Minimum number of fields a row needs.
    pub fn required_width(&self) -> usize {
        self.columns.iter().copied().max().unwrap_or_default() + 1
    }
}
