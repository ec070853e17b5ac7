use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Numeric values keyed by state code, in the order they were received
///
/// Serialized as a JSON object. A repeated key keeps its first position and
/// takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateValues(Vec<(String, f64)>);

impl StateValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for a state, keeping its original position if present
    pub fn insert(&mut self, state: impl Into<String>, value: f64) {
        let state = state.into();
        match self.0.iter_mut().find(|(code, _)| *code == state) {
            Some(entry) => entry.1 = value,
            None => self.0.push((state, value)),
        }
    }

    pub fn get(&self, state: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(code, _)| code == state)
            .map(|(_, value)| *value)
    }

    pub fn contains(&self, state: &str) -> bool {
        self.get(state).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(code, value)| (code.as_str(), *value))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for StateValues {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut values = StateValues::new();
        for (state, value) in iter {
            values.insert(state, value);
        }
        values
    }
}

impl Serialize for StateValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (state, value) in &self.0 {
            map.serialize_entry(state, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StateValues {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StateValuesVisitor;

        impl<'de> Visitor<'de> for StateValuesVisitor {
            type Value = StateValues;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of state code to number")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut values = StateValues::new();
                while let Some((state, value)) = access.next_entry::<String, f64>()? {
                    values.insert(state, value);
                }
                Ok(values)
            }
        }

        deserializer.deserialize_map(StateValuesVisitor)
    }
}

/// IFTA (fuel-tax) summary request for one reporting period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IftaSummaryRequest {
    /// Miles driven per state, e.g. {"TX": 523.4, "NM": 140.2}
    pub miles_by_state: StateValues,
    /// Gallons purchased per state
    pub gallons_by_state: StateValues,
    /// Reporting period, e.g. 2025-Q1
    pub period: String,
}

/// Per-state line of an IFTA summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IftaStateSummary {
    pub state: String,
    pub miles: f64,
    pub gallons: f64,
    /// None when no fuel was recorded for the state
    pub mpg: Option<f64>,
}

/// IFTA summary result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IftaSummaryResponse {
    pub period: String,
    pub total_miles: f64,
    pub total_gallons: f64,
    pub mpg: f64,
    pub states: Vec<IftaStateSummary>,
}
