use std::path::Path;

use inflammation_model::{Named, Patient};
use serde_json::Value;

use crate::error::{PersistenceError, Result};
use crate::io::{read_file, write_atomic};
use crate::patient::PatientSerializer;
use crate::serializer::Serializer;

/// Patient records stored as a JSON array.
///
/// Records are the same as [`PatientSerializer`]'s; this type adds the JSON
/// encoding for `save` and `load`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientJsonSerializer;

impl Serializer for PatientJsonSerializer {
    type Model = Patient;

    fn name(&self) -> &'static str {
        "PatientJsonSerializer"
    }

    fn serialize(&self, instances: &[Patient]) -> Vec<Value> {
        PatientSerializer.serialize(instances)
    }

    fn deserialize(&self, data: Vec<Value>) -> Result<Vec<Patient>> {
        PatientSerializer.deserialize(data)
    }

    fn save(&self, instances: &[Patient], path: &Path) -> Result<()> {
        ensure_finite(instances)?;
        let records = Value::Array(self.serialize(instances));
        let bytes = serde_json::to_vec(&records)
            .map_err(|source| PersistenceError::Serialization { source })?;
        write_atomic(path, &bytes)?;

        tracing::info!(
            path = %path.display(),
            patients = instances.len(),
            "Saved patients"
        );
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Vec<Patient>> {
        let bytes = read_file(path)?;
        let records = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Array(records)) => records,
            Ok(_) => {
                return Err(PersistenceError::InvalidFormat {
                    path: path.to_path_buf(),
                    reason: "expected a JSON array of patient records".to_string(),
                });
            }
            Err(e) => {
                return Err(PersistenceError::InvalidFormat {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };

        let patients = self.deserialize(records)?;
        tracing::info!(
            path = %path.display(),
            patients = patients.len(),
            "Loaded patients"
        );
        Ok(patients)
    }
}

/// JSON would store NaN and infinities as `null`, which `load` then rejects.
fn ensure_finite(patients: &[Patient]) -> Result<()> {
    for patient in patients {
        let bad = patient
            .observations()
            .iter()
            .enumerate()
            .find(|(_, o)| !o.value.is_finite());
        if let Some((observation, o)) = bad {
            return Err(PersistenceError::NonFiniteValue {
                patient: patient.name().to_string(),
                observation,
                day: o.day,
            });
        }
    }
    Ok(())
}
