//! CSV reading into [`Table`]s.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use inflammation_stats::Table;

use crate::error::{IngestError, Result};

/// Load an inflammation table from a header-less CSV file.
pub fn load_csv(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let table = read_table(file, path)?;
    tracing::debug!(
        path = %path.display(),
        patients = table.n_rows(),
        days = table.n_columns(),
        "Loaded inflammation table"
    );
    Ok(table)
}

/// Parse an inflammation table from in-memory CSV content.
pub fn parse_csv_str(content: &str) -> Result<Table> {
    read_table(Cursor::new(content.as_bytes()), Path::new("<memory>"))
}

/// Read a table from any reader; `source` is only used in error messages.
pub fn read_table<R: Read>(input: R, source: &Path) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(e, source))?;
        // 1-based line in the file; blank lines are skipped but still counted.
        let line = record.position().map_or(0, csv::Position::line);
        let values = record
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                cell.parse::<f64>().map_err(|_| IngestError::InvalidNumber {
                    path: source.to_path_buf(),
                    line,
                    column: index + 1,
                    value: cell.to_string(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if let Some(first) = rows.first()
            && first.len() != values.len()
        {
            return Err(IngestError::RaggedRow {
                path: source.to_path_buf(),
                line,
                expected: first.len(),
                found: values.len(),
            });
        }
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: source.to_path_buf(),
        });
    }

    Table::from_rows(rows).map_err(|e| IngestError::CsvParse {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

fn csv_error(error: csv::Error, source: &Path) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(io) => IngestError::FileRead {
            path: source.to_path_buf(),
            source: io,
        },
        _ => IngestError::CsvParse {
            path: source.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_days() {
        let table = parse_csv_str("0,1,2\n3,4,5\n").unwrap();
        assert_eq!(table.shape(), (2, 3));
        assert_eq!(table.row(1), &[3.0, 4.0, 5.0]);
    }

    #[test]
    fn trims_whitespace_and_accepts_decimals() {
        let table = parse_csv_str(" 0.5 , 1e1\n2 ,3\n").unwrap();
        assert_eq!(table.row(0), &[0.5, 10.0]);
        assert_eq!(table.row(1), &[2.0, 3.0]);
    }

    #[test]
    fn rejects_text_cells() {
        let err = parse_csv_str("1,2\n3,x\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidNumber { line: 2, column: 2, ref value, .. } if value == "x"
        ));
    }

    #[test]
    fn error_lines_count_blank_lines() {
        let err = parse_csv_str("1,2\n\n3,x\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidNumber { line: 3, column: 2, .. }
        ));

        let err = parse_csv_str("1,2\n\n\n3\n").unwrap_err();
        assert!(matches!(err, IngestError::RaggedRow { line: 4, .. }));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_csv_str("1,2,3\n4,5\n").unwrap_err();
        assert!(matches!(
            err,
            IngestError::RaggedRow {
                line: 2,
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_csv_str(""),
            Err(IngestError::EmptyCsv { .. })
        ));
    }
}
