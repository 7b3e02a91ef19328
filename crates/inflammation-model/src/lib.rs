//! Patient and observation model for inflammation studies.
//!
//! A [`Patient`] is a named entity that owns an ordered, append-only history
//! of [`Observation`]s. Naming is a capability shared with [`Person`] through
//! the [`Named`] trait rather than an inheritance chain.

pub mod error;
pub mod observation;
pub mod patient;
pub mod person;

pub use error::{ModelError, Result};
pub use observation::Observation;
pub use patient::Patient;
pub use person::{Named, Person};
