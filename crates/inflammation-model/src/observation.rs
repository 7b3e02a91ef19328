use std::fmt;

/// A single inflammation reading taken on a given study day.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Observation {
    pub day: u32,
    pub value: f64,
}

impl Observation {
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }
}

/// Renders the inflammation value only.
impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
