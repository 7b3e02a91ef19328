//! Per-patient normalisation.

use crate::daily::nan_max;
use crate::error::{Result, StatsError};
use crate::table::Table;

/// Scale every patient's readings by that patient's maximum reading.
///
/// The whole table is checked for negative readings before anything is
/// computed. Undefined quotients (a row whose maximum is 0, or a row
/// containing NaN) become 0, and negative quotients are clamped to 0. The
/// result has the same shape as `table`.
pub fn patient_normalise(table: &Table) -> Result<Table> {
    let (rows, columns) = table.shape();
    if let Some(position) = table.values().iter().position(|&value| value < 0.0) {
        return Err(StatsError::InvalidMeasurement {
            row: position / columns,
            column: position % columns,
            value: table.values()[position],
        });
    }

    let mut values = Vec::with_capacity(rows * columns);
    for row in table.rows() {
        let max = row.iter().copied().fold(f64::NEG_INFINITY, nan_max);
        values.extend(row.iter().map(|&value| clamp_quotient(value / max)));
    }
    Ok(Table::from_parts(rows, columns, values))
}

fn clamp_quotient(quotient: f64) -> f64 {
    if quotient.is_nan() || quotient < 0.0 {
        0.0
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_integers() {
        let t = Table::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        let expected = Table::from_rows([
            [1.0 / 3.0, 2.0 / 3.0, 1.0],
            [4.0 / 6.0, 5.0 / 6.0, 1.0],
            [7.0 / 9.0, 8.0 / 9.0, 1.0],
        ])
        .unwrap();
        assert_eq!(patient_normalise(&t).unwrap(), expected);
    }

    #[test]
    fn zero_row_becomes_zero() {
        let t = Table::from_rows([[0.0, 0.0, 0.0], [1.0, 2.0, 4.0]]).unwrap();
        let normalised = patient_normalise(&t).unwrap();
        assert_eq!(normalised.row(0), &[0.0, 0.0, 0.0]);
        assert_eq!(normalised.row(1), &[0.25, 0.5, 1.0]);
    }

    #[test]
    fn nan_row_becomes_zero() {
        let t = Table::from_rows([[f64::NAN, 1.0], [2.0, 4.0]]).unwrap();
        let normalised = patient_normalise(&t).unwrap();
        assert_eq!(normalised.row(0), &[0.0, 0.0]);
        assert_eq!(normalised.row(1), &[0.5, 1.0]);
    }

    #[test]
    fn negative_value_reports_position() {
        let t = Table::from_rows([[1.0, 2.0], [3.0, -1.0]]).unwrap();
        assert_eq!(
            patient_normalise(&t),
            Err(StatsError::InvalidMeasurement {
                row: 1,
                column: 1,
                value: -1.0
            })
        );
    }

    #[test]
    fn negative_zero_is_not_negative() {
        let t = Table::from_rows([[-0.0, 2.0]]).unwrap();
        let normalised = patient_normalise(&t).unwrap();
        assert_eq!(normalised.row(0), &[0.0, 1.0]);
    }

    #[test]
    fn empty_table_keeps_shape() {
        let t = Table::zeros(0, 4);
        assert_eq!(patient_normalise(&t).unwrap().shape(), (0, 4));
    }
}
