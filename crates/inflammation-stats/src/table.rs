use serde::ser::{Serialize, Serializer};

use crate::error::{Result, StatsError};

/// A dense patients-by-days matrix of inflammation readings.
///
/// Values are stored row-major. The column count is kept explicitly so that
/// a table with no patients still knows how many days it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Table {
    /// Build a table from patient rows, which must all have the same length.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let mut values = Vec::new();
        let mut columns = None;
        let mut count = 0;
        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *columns.get_or_insert(row.len());
            if row.len() != expected {
                return Err(StatsError::RaggedRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
            values.extend_from_slice(row);
            count += 1;
        }
        Ok(Self {
            rows: count,
            columns: columns.unwrap_or(0),
            values,
        })
    }

    /// A table of the given shape filled with zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    /// `(rows, columns)`, i.e. `(patients, days)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns
    }

    /// The readings of one patient.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of bounds ({})", self.rows);
        let start = row * self.columns;
        &self.values[start..start + self.columns]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }

    /// The readings of every patient on one day.
    pub fn column(&self, column: usize) -> impl Iterator<Item = f64> + '_ {
        self.values
            .iter()
            .skip(column)
            .step_by(self.columns.max(1))
            .copied()
            .take(if column < self.columns { self.rows } else { 0 })
    }

    pub(crate) fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn from_parts(rows: usize, columns: usize, values: Vec<f64>) -> Self {
        debug_assert_eq!(rows * columns, values.len());
        Self {
            rows,
            columns,
            values,
        }
    }
}

/// Serialized as an array of rows.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}
