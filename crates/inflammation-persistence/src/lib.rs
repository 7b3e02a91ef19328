//! Serialization and storage of patient records.
//!
//! Patients are converted to plain records (`serde_json::Value` objects) and
//! back through the [`Serializer`] trait. Storage is an encoding choice made
//! by each implementation: [`PatientSerializer`] has none, so its `save` and
//! `load` report [`PersistenceError::UnsupportedOperation`], while
//! [`PatientJsonSerializer`] stores the records as a JSON array.
//!
//! # File Format
//!
//! ```text
//! [
//!   {"name": "Alice", "observations": [{"day": 0, "value": 1.0}, ...]},
//!   ...
//! ]
//! ```
//!
//! # Example
//!
//! ```ignore
//! use inflammation_model::Patient;
//! use inflammation_persistence::{PatientJsonSerializer, Serializer};
//!
//! let mut alice = Patient::new("Alice");
//! alice.add_observation(1.0, None);
//!
//! PatientJsonSerializer.save(&[alice], Path::new("patients.json"))?;
//! let patients = PatientJsonSerializer.load(Path::new("patients.json"))?;
//! ```

mod error;
mod io;
mod json;
mod observation;
mod patient;
mod serializer;

pub use error::{PersistenceError, Result};
pub use json::PatientJsonSerializer;
pub use observation::ObservationSerializer;
pub use patient::PatientSerializer;
pub use serializer::Serializer;
