//! Statistics over inflammation tables.
//!
//! A [`Table`] holds one row per patient and one column per study day. The
//! functions here are pure: they never modify their input.
//!
//! - [`daily_mean`], [`daily_max`], [`daily_min`] reduce each day (column)
//!   across patients.
//! - [`patient_normalise`] scales each patient (row) by its own maximum.

mod daily;
mod error;
mod normalise;
mod table;

pub use daily::{daily_max, daily_mean, daily_min};
pub use error::{Result, StatsError};
pub use normalise::patient_normalise;
pub use table::Table;
