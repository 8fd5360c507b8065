//! Tabular input parsing.
//!
//! Accepts comma-delimited UTF-8 text with a header row and produces a
//! `SampleSeries` preserving row order. Required columns are matched by
//! exact, case-sensitive name; any extra columns are ignored.

use csv::{ReaderBuilder, StringRecord};
use gaze_insight_domain::{GazeSample, ParseError, SampleSeries};

/// Header name of the elapsed-time column.
pub const TIME_COLUMN: &str = "elapsedTime(seconds)";
/// Header name of the horizontal coordinate column.
pub const X_COLUMN: &str = "x";
/// Header name of the vertical coordinate column.
pub const Y_COLUMN: &str = "y";

/// Parse a gaze recording into an ordered sample series.
///
/// Fails when the text cannot be tokenized, a required column is missing,
/// a required cell is not a number, or the table has no data rows.
pub fn parse_gaze_csv(input: &str) -> Result<SampleSeries, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError::Malformed(e.to_string()))?
        .clone();

    let time_idx = column_index(&headers, TIME_COLUMN)?;
    let x_idx = column_index(&headers, X_COLUMN)?;
    let y_idx = column_index(&headers, Y_COLUMN)?;

    let mut samples = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let row = i + 1;
        let record = record.map_err(|e| ParseError::Malformed(format!("row {row}: {e}")))?;

        let elapsed = parse_cell(&record, row, time_idx, TIME_COLUMN)?;
        let x = parse_cell(&record, row, x_idx, X_COLUMN)?;
        let y = parse_cell(&record, row, y_idx, Y_COLUMN)?;
        samples.push(GazeSample::new(elapsed, x, y));
    }

    if samples.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(SampleSeries::new(samples))
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize, ParseError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(ParseError::MissingColumn(name))
}

fn parse_cell(
    record: &StringRecord,
    row: usize,
    idx: usize,
    column: &'static str,
) -> Result<f64, ParseError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| ParseError::Malformed(format!("row {row}: missing field {column:?}")))?;

    raw.trim().parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        row,
        column,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "elapsedTime(seconds),x,y\n0.000,100.50,200.30\n0.016,101.20,201.15\n";

    #[test]
    fn test_parses_rows_in_order() {
        let series = parse_gaze_csv(VALID).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.samples()[0].x, 100.50);
        assert_eq!(series.samples()[1].elapsed_seconds, 0.016);
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let input = "elapsedTime(seconds),pupil,x,y\n0.0,3.1,1.0,2.0\n";
        let series = parse_gaze_csv(input).unwrap();
        assert_eq!(series.samples()[0].x, 1.0);
        assert_eq!(series.samples()[0].y, 2.0);
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let input = "ElapsedTime(seconds),x,y\n0.0,1.0,2.0\n";
        let err = parse_gaze_csv(input).unwrap_err();
        assert_eq!(err, ParseError::MissingColumn(TIME_COLUMN));
    }

    #[test]
    fn test_missing_required_column() {
        let input = "elapsedTime(seconds),x\n0.0,1.0\n";
        let err = parse_gaze_csv(input).unwrap_err();
        assert_eq!(err, ParseError::MissingColumn(Y_COLUMN));
    }

    #[test]
    fn test_non_numeric_cell_reports_row_and_column() {
        let input = "elapsedTime(seconds),x,y\n0.0,1.0,2.0\n0.016,oops,2.5\n";
        let err = parse_gaze_csv(input).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                row: 2,
                column: X_COLUMN,
                value: "oops".to_string(),
            }
        );
    }

    #[test]
    fn test_header_only_input_is_empty() {
        let err = parse_gaze_csv("elapsedTime(seconds),x,y\n").unwrap_err();
        assert_eq!(err, ParseError::Empty);
    }

    #[test]
    fn test_ragged_row_is_malformed() {
        let input = "elapsedTime(seconds),x,y\n0.0,1.0,2.0\n0.016,3.0\n";
        let err = parse_gaze_csv(input).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_cells_may_carry_whitespace() {
        let input = "elapsedTime(seconds),x,y\n 0.5 , 1.0 , 2.0 \n";
        let series = parse_gaze_csv(input).unwrap();
        assert_eq!(series.samples()[0].elapsed_seconds, 0.5);
    }
}
