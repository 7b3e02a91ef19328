//! Per-day (column-wise) reductions.
//!
//! Each function returns one value per column. NaN readings propagate into
//! the day they belong to. A table without patients still yields one value
//! per day: the mean is NaN, the maximum `-inf` and the minimum `+inf`.

use crate::table::Table;

/// Arithmetic mean of each day across patients.
pub fn daily_mean(table: &Table) -> Vec<f64> {
    let n = table.n_rows() as f64;
    reduce_columns(table, 0.0, |acc, value| acc + value)
        .into_iter()
        .map(|sum| sum / n)
        .collect()
}

/// Maximum of each day across patients.
pub fn daily_max(table: &Table) -> Vec<f64> {
    reduce_columns(table, f64::NEG_INFINITY, nan_max)
}

/// Minimum of each day across patients.
pub fn daily_min(table: &Table) -> Vec<f64> {
    reduce_columns(table, f64::INFINITY, nan_min)
}

fn reduce_columns(table: &Table, init: f64, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
    (0..table.n_columns())
        .map(|day| table.column(day).fold(init, &f))
        .collect()
}

/// `f64::max` ignores NaN; readings need it to propagate instead.
pub(crate) fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}
