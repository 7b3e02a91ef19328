//! CLI library components for the inflammation toolkit.

pub mod commands;
pub mod logging;
pub mod summary;
