//! Loading of inflammation tables from delimited text.
//!
//! Input files have no header: each line is one patient and each
//! comma-separated cell is that patient's reading for one day.
//!
//! ```ignore
//! use inflammation_ingest::load_csv;
//!
//! let table = load_csv(Path::new("data/inflammation-01.csv"))?;
//! println!("{} patients over {} days", table.n_rows(), table.n_columns());
//! ```

mod error;
mod reader;

pub use error::{IngestError, Result};
pub use reader::{load_csv, parse_csv_str, read_table};
