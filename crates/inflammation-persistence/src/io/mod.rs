//! File I/O for stored records.
//!
//! This module handles:
//! - Writing encoded records with atomic replacement
//! - Reading encoded records back

mod load;
mod save;

pub(crate) use load::read_file;
pub(crate) use save::write_atomic;
