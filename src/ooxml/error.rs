/// Error types for presentation editing operations.
use thiserror::Error;

/// Result type for presentation editing operations.
pub type Result<T> = std::result::Result<T, PptxError>;

/// Error types for presentation editing operations.
#[derive(Error, Debug)]
pub enum PptxError {
    /// Slide index outside the presentation's slide list
    #[error("Slide index {index} out of range for presentation with {len} slides")]
    SlideIndexOutOfRange { index: usize, len: usize },

    /// Cell position outside the table grid
    #[error("Cell ({row}, {col}) out of range for {rows}x{cols} table")]
    CellIndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// No run on the slide carries the target text
    #[error("Target could not be found: {0}")]
    TargetNotFound(String),

    /// Merge range whose end column precedes its start column
    #[error("Invalid merge range: end column {end} is before start column {start}")]
    InvalidMergeRange { start: usize, end: usize },

    /// Shape that was expected to be a table graphic frame
    #[error("Shape {0} does not hold a table")]
    NotATable(u32),

    /// Table data without columns, or without any row to render
    #[error("Table data must have at least one column and one row")]
    EmptyTableData,

    /// Row whose length differs from the column count
    #[error("Row has {got} values, expected {expected}")]
    RaggedRow { expected: usize, got: usize },

    /// Replacement texts and targets of different lengths
    #[error("Got {texts} replacement texts for {targets} targets")]
    InjectionLengthMismatch { texts: usize, targets: usize },

    /// CSV input error
    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// YAML input error
    #[error("YAML error: {0}")]
    Yaml(String),

    /// XML rendering error
    #[error("XML error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::fmt::Error> for PptxError {
    fn from(err: std::fmt::Error) -> Self {
        PptxError::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = PptxError::TargetNotFound("{{TITLE}}".to_string());
        assert_eq!(err.to_string(), "Target could not be found: {{TITLE}}");

        let err = PptxError::SlideIndexOutOfRange { index: 4, len: 3 };
        assert_eq!(
            err.to_string(),
            "Slide index 4 out of range for presentation with 3 slides"
        );

        let err = PptxError::CellIndexOutOfRange {
            row: 2,
            col: 0,
            rows: 2,
            cols: 3,
        };
        assert_eq!(err.to_string(), "Cell (2, 0) out of range for 2x3 table");

        let err = PptxError::NotATable(5);
        assert_eq!(err.to_string(), "Shape 5 does not hold a table");
    }
}
