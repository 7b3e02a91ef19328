use inflammation_model::Observation;
use serde_json::{Value, json};

use crate::error::{PersistenceError, Result};
use crate::serializer::Serializer;

/// Records of the form `{"day": <integer>, "value": <number>}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObservationSerializer;

impl Serializer for ObservationSerializer {
    type Model = Observation;

    fn name(&self) -> &'static str {
        "ObservationSerializer"
    }

    fn serialize(&self, instances: &[Observation]) -> Vec<Value> {
        instances
            .iter()
            .map(|observation| {
                json!({
                    "day": observation.day,
                    "value": observation.value,
                })
            })
            .collect()
    }

    fn deserialize(&self, data: Vec<Value>) -> Result<Vec<Observation>> {
        data.into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value::<Observation>(record).map_err(|e| {
                    PersistenceError::MalformedRecord {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect()
    }
}
