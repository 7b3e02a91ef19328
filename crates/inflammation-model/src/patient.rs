use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{ModelError, Result};
use crate::observation::Observation;
use crate::person::Named;

/// A patient in an inflammation study.
///
/// The observation history is ordered by insertion and can only grow through
/// [`Patient::add_observation`]. Equality and hashing consider the name only.
#[derive(Debug, Clone)]
pub struct Patient {
    name: String,
    observations: Vec<Observation>,
}

impl Patient {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_observations(name, Vec::new())
    }

    /// Create a patient with a pre-existing history, e.g. when restoring
    /// saved records.
    pub fn with_observations(name: impl Into<String>, observations: Vec<Observation>) -> Self {
        Self {
            name: name.into(),
            observations,
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Append an observation and return it.
    ///
    /// When `day` is `None` the day follows the last recorded one, starting
    /// at 0 for an empty history. An explicit day is stored as given, even if
    /// it repeats or precedes an earlier day.
    pub fn add_observation(&mut self, value: f64, day: Option<u32>) -> &Observation {
        let day = day.unwrap_or_else(|| self.next_day());
        self.observations.push(Observation::new(day, value));
        &self.observations[self.observations.len() - 1]
    }

    /// The most recently appended observation.
    pub fn last_observation(&self) -> Result<&Observation> {
        self.observations
            .last()
            .ok_or_else(|| ModelError::EmptyHistory {
                patient: self.name.clone(),
            })
    }

    fn next_day(&self) -> u32 {
        self.observations
            .last()
            .map_or(0, |observation| observation.day.saturating_add(1))
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Patient {}

impl Hash for Patient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
