use inflammation_model::{Named, Patient};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::{PersistenceError, Result};
use crate::observation::ObservationSerializer;
use crate::serializer::Serializer;

/// Records of the form `{"name": <string>, "observations": [...]}`.
///
/// This serializer has no storage encoding; see
/// [`PatientJsonSerializer`](crate::PatientJsonSerializer) for one that does.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatientSerializer;

/// Shape of a patient record before its observations are decoded.
#[derive(Deserialize)]
struct PatientRecord {
    name: String,
    observations: Vec<Value>,
}

impl Serializer for PatientSerializer {
    type Model = Patient;

    fn name(&self) -> &'static str {
        "PatientSerializer"
    }

    fn serialize(&self, instances: &[Patient]) -> Vec<Value> {
        instances
            .iter()
            .map(|patient| {
                json!({
                    "name": patient.name(),
                    "observations": ObservationSerializer.serialize(patient.observations()),
                })
            })
            .collect()
    }

    fn deserialize(&self, data: Vec<Value>) -> Result<Vec<Patient>> {
        data.into_iter()
            .enumerate()
            .map(|(index, record)| deserialize_patient(index, record))
            .collect()
    }
}

fn deserialize_patient(index: usize, record: Value) -> Result<Patient> {
    let PatientRecord { name, observations } =
        serde_json::from_value(record).map_err(|e| PersistenceError::MalformedRecord {
            index,
            reason: e.to_string(),
        })?;

    let observations = ObservationSerializer
        .deserialize(observations)
        .map_err(|e| match e {
            PersistenceError::MalformedRecord {
                index: observation,
                reason,
            } => PersistenceError::MalformedRecord {
                index,
                reason: format!("observation {observation}: {reason}"),
            },
            other => other,
        })?;

    Ok(Patient::with_observations(name, observations))
}
