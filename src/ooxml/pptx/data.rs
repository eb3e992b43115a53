//! Tabular input for table construction.
//!
//! [`TableData`] is a small column-labelled grid: a list of column names and
//! row-ordered values. It can be built in code, loaded from CSV, or
//! deserialized with serde.

use crate::ooxml::error::{PptxError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value in a data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Type a raw text field: integer, then float, then boolean, else text.
    ///
    /// An empty field is [`CellValue::Empty`].
    pub fn parse_field(field: &str) -> Self {
        if field.is_empty() {
            return CellValue::Empty;
        }
        if let Ok(value) = field.parse::<i64>() {
            return CellValue::Int(value);
        }
        if let Ok(value) = field.parse::<f64>() {
            return CellValue::Float(value);
        }
        match field {
            "True" | "true" | "TRUE" => CellValue::Bool(true),
            "False" | "false" | "FALSE" => CellValue::Bool(false),
            _ => CellValue::Text(field.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    /// Booleans render as `True`/`False`. Floats use the shortest digits that
    /// round-trip, in positional form (`3.0`, `0.25`) for decimal exponents
    /// from -4 to 15 and in scientific form with a signed, two-digit exponent
    /// (`1e+16`, `1.5e-05`) outside that range.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::Int(value) => f.write_str(itoa::Buffer::new().format(*value)),
            CellValue::Float(value) if value.is_nan() => f.write_str("nan"),
            CellValue::Float(value) if value.is_infinite() => {
                f.write_str(if *value > 0.0 { "inf" } else { "-inf" })
            },
            CellValue::Float(value) => write_float(f, *value),
            CellValue::Text(value) => f.write_str(value),
        }
    }
}

/// Write a finite float from ryu's shortest digits using repr-style layout.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let mut buffer = ryu::Buffer::new();
    let formatted = buffer.format_finite(value);
    let (negative, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, formatted),
    };

    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // All significant digits, and where the decimal point falls among them
    let mut digits: String = int_part.chars().chain(frac_part.chars()).collect();
    let mut point = int_part.len() as i32 + exponent;
    let leading = digits.len() - digits.trim_start_matches('0').len();
    digits.replace_range(..leading, "");
    point -= leading as i32;
    digits.truncate(digits.trim_end_matches('0').len());

    if negative {
        f.write_str("-")?;
    }
    if digits.is_empty() {
        return f.write_str("0.0");
    }

    let sci_exponent = point - 1;
    if (-4..16).contains(&sci_exponent) {
        if point <= 0 {
            f.write_str("0.")?;
            for _ in 0..-point {
                f.write_str("0")?;
            }
            f.write_str(&digits)
        } else if point as usize >= digits.len() {
            f.write_str(&digits)?;
            for _ in digits.len()..point as usize {
                f.write_str("0")?;
            }
            f.write_str(".0")
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            write!(f, "{}.{}", whole, fraction)
        }
    } else {
        let (first, rest) = digits.split_at(1);
        f.write_str(first)?;
        if !rest.is_empty() {
            write!(f, ".{}", rest)?;
        }
        let sign = if sci_exponent < 0 { '-' } else { '+' };
        write!(f, "e{}{:02}", sign, sci_exponent.unsigned_abs())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Named columns of row-ordered values.
///
/// Every row holds exactly one value per column.
///
/// # Examples
///
/// ```rust
/// use slidecraft::ooxml::pptx::{CellValue, TableData};
///
/// let mut data = TableData::new(["Region", "Revenue"]);
/// data.push_row([CellValue::from("North"), CellValue::Int(1250)])?;
/// data.push_row([CellValue::from("South"), CellValue::Float(980.5)])?;
/// assert_eq!(data.row_count(), 2);
/// assert_eq!(data.value(1, 1).map(ToString::to_string), Some("980.5".to_string()));
/// # Ok::<(), slidecraft::PptxError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<CellValue>>,
}

impl TableData {
    /// Create an empty data set with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; it must have one value per column.
    pub fn push_row<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = CellValue>,
    {
        let row: Vec<CellValue> = values.into_iter().collect();
        if row.len() != self.columns.len() {
            return Err(PptxError::RaggedRow {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Value at a zero-based data row and column.
    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Check that every row has one value per column.
    pub fn validate(&self) -> Result<()> {
        let expected = self.columns.len();
        match self.rows.iter().find(|row| row.len() != expected) {
            Some(row) => Err(PptxError::RaggedRow {
                expected,
                got: row.len(),
            }),
            None => Ok(()),
        }
    }

    /// Read CSV whose first record holds the column names.
    ///
    /// Fields are typed with [`CellValue::parse_field`].
    #[cfg(feature = "csv")]
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut data = TableData::new(reader.headers()?.iter());
        for record in reader.records() {
            let record = record?;
            data.push_row(record.iter().map(CellValue::parse_field))?;
        }
        Ok(data)
    }

    /// Read a CSV file, see [`TableData::from_csv_reader`].
    #[cfg(feature = "csv")]
    pub fn from_csv_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(std::io::BufReader::new(file))
    }

    /// Deserialize from YAML with `columns` and `rows` keys.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let data: TableData =
            serde_saphyr::from_str(yaml).map_err(|e| PptxError::Yaml(e.to_string()))?;
        data.validate()?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_python_str() {
        assert_eq!(CellValue::Int(-42).to_string(), "-42");
        assert_eq!(CellValue::Float(3.0).to_string(), "3.0");
        assert_eq!(CellValue::Float(0.25).to_string(), "0.25");
        assert_eq!(CellValue::Float(f64::NAN).to_string(), "nan");
        assert_eq!(CellValue::Float(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from("Q1").to_string(), "Q1");
    }

    #[test]
    fn test_float_exponent_layout() {
        let cases = [
            (1e16, "1e+16"),
            (1.5e16, "1.5e+16"),
            (1e22, "1e+22"),
            (1e-5, "1e-05"),
            (-2.5e-7, "-2.5e-07"),
            (1.25e100, "1.25e+100"),
            (1e15, "1000000000000000.0"),
            (123456.5, "123456.5"),
            (0.0001, "0.0001"),
            (0.0, "0.0"),
            (-0.0, "-0.0"),
            (-42.0, "-42.0"),
        ];
        for (value, expected) in cases {
            assert_eq!(CellValue::Float(value).to_string(), expected, "{value:?}");
        }
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(CellValue::parse_field(""), CellValue::Empty);
        assert_eq!(CellValue::parse_field("17"), CellValue::Int(17));
        assert_eq!(CellValue::parse_field("1.5"), CellValue::Float(1.5));
        assert_eq!(CellValue::parse_field("false"), CellValue::Bool(false));
        assert_eq!(CellValue::parse_field("North"), CellValue::from("North"));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(CellValue::from(None::<i64>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(3)), CellValue::Int(3));
    }

    #[test]
    fn test_push_row_rejects_ragged() {
        let mut data = TableData::new(["a", "b"]);
        assert!(data.push_row([CellValue::Int(1), CellValue::Int(2)]).is_ok());
        assert!(matches!(
            data.push_row([CellValue::Int(1)]),
            Err(PptxError::RaggedRow {
                expected: 2,
                got: 1
            })
        ));
        assert_eq!(data.row_count(), 1);
        assert!(data.validate().is_ok());
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_from_csv_reader() {
        let csv = "name,score,passed\nAda,91.5,true\nLin,78,false\nKim,,\n";
        let data = TableData::from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(data.columns(), ["name", "score", "passed"]);
        assert_eq!(data.row_count(), 3);
        assert_eq!(data.value(0, 1), Some(&CellValue::Float(91.5)));
        assert_eq!(data.value(1, 1), Some(&CellValue::Int(78)));
        assert_eq!(data.value(1, 2), Some(&CellValue::Bool(false)));
        assert_eq!(data.value(2, 1), Some(&CellValue::Empty));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_from_csv_reader_ragged_record() {
        let csv = "a,b\n1,2\n3\n";
        assert!(matches!(
            TableData::from_csv_reader(csv.as_bytes()),
            Err(PptxError::Csv(_))
        ));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn test_from_csv_path() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Quarter,Units").unwrap();
        writeln!(file, "Q1,120").unwrap();
        writeln!(file, "Q2,135").unwrap();
        file.flush().unwrap();

        let data = TableData::from_csv_path(file.path()).unwrap();
        assert_eq!(data.column_count(), 2);
        assert_eq!(data.value(1, 0), Some(&CellValue::from("Q2")));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_str() {
        let yaml = "columns: [Item, Qty]\nrows:\n  - [Pens, 4]\n  - [Ink, 0.5]\n  - [Misc, null]\n";
        let data = TableData::from_yaml_str(yaml).unwrap();
        assert_eq!(data.columns(), ["Item", "Qty"]);
        assert_eq!(data.value(0, 1), Some(&CellValue::Int(4)));
        assert_eq!(data.value(1, 1), Some(&CellValue::Float(0.5)));
        assert_eq!(data.value(2, 1), Some(&CellValue::Empty));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_yaml_str_rejects_ragged() {
        let yaml = "columns: [a, b]\nrows:\n  - [1]\n";
        assert!(matches!(
            TableData::from_yaml_str(yaml),
            Err(PptxError::RaggedRow { .. })
        ));
    }
}
