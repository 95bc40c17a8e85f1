use crate::error::Result;
use crate::legacy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of an exercise in the host's store. Resolving it is the host's
/// business; here it is just a number.
pub type ExerciseId = i64;

/// Time spent per exercise, in the host's duration unit.
///
/// Serializes as a single legacy-grammar string (`12=5|34=2.5`) so the
/// payload stays compact before compression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseDurations(BTreeMap<ExerciseId, f64>);

impl ExerciseDurations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: ExerciseId, duration: f64) -> Option<f64> {
        self.0.insert(id, duration)
    }

    pub fn get(&self, id: ExerciseId) -> Option<f64> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ExerciseId, f64> {
        self.0.iter()
    }

    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Lenient parse; malformed entries are dropped.
    pub fn parse(text: &str) -> Self {
        Self(legacy::parse(text))
    }
}

impl fmt::Display for ExerciseDurations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&legacy::format(&self.0))
    }
}

impl From<BTreeMap<ExerciseId, f64>> for ExerciseDurations {
    fn from(map: BTreeMap<ExerciseId, f64>) -> Self {
        Self(map)
    }
}

impl FromIterator<(ExerciseId, f64)> for ExerciseDurations {
    fn from_iter<T: IntoIterator<Item = (ExerciseId, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ExerciseDurations {
    type Item = (&'a ExerciseId, &'a f64);
    type IntoIter = btree_map::Iter<'a, ExerciseId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for ExerciseDurations {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExerciseDurations {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

/// One set within an exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub exercise_id: ExerciseId,
    #[serde(default)]
    pub sets: Vec<SetLog>,
}

impl ExerciseLog {
    pub fn new(exercise_id: ExerciseId) -> Self {
        Self {
            exercise_id,
            sets: Vec::new(),
        }
    }

    pub fn with_set(mut self, set: SetLog) -> Self {
        self.sets.push(set);
        self
    }
}

/// Optional detailed record of what was done in a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailLog {
    #[serde(default)]
    pub entries: Vec<ExerciseLog>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Everything a session hides in its note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionPayload {
    #[serde(default)]
    pub exercises: ExerciseDurations,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<DetailLog>,
}

impl SessionPayload {
    pub fn new(exercises: ExerciseDurations) -> Self {
        Self {
            exercises,
            details: None,
        }
    }

    pub fn with_details(mut self, details: DetailLog) -> Self {
        self.details = Some(details);
        self
    }

    /// Compact text handed to the codec.
    pub fn to_text(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_text(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
