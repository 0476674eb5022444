use crate::error::{Error, Result};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Caller-assigned participant identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParticipantId {
    Integer(u64),
    String(String),
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParticipantId::String(s) => write!(f, "{}", s),
            ParticipantId::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        ParticipantId::String(s)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        ParticipantId::String(s.to_string())
    }
}

impl From<u64> for ParticipantId {
    fn from(i: u64) -> Self {
        ParticipantId::Integer(i)
    }
}

/// A survey respondent: identity, optional display name and raw characteristic scores.
///
/// Scores are kept as JSON values so that type problems are reported by the
/// extractor against the participant that caused them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub characteristics: BTreeMap<String, Value>,
}

impl Participant {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            characteristics: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_score(mut self, key: impl Into<String>, score: f64) -> Self {
        self.characteristics.insert(key.into(), Value::from(score));
        self
    }

    #[inline]
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, value: Value) -> Self {
        self.characteristics.insert(key.into(), value);
        self
    }

    /// Raw value recorded for a characteristic, if any
    #[inline]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.characteristics.get(key)
    }

    /// Build a participant from a flat survey record.
    ///
    /// `id` and `name` are lifted out of the record and every other key is
    /// treated as a characteristic. When the record carries no `id`, the
    /// record's position in the session is used instead.
    pub fn from_survey_record(record: &Value, position: usize) -> Result<Self> {
        let fields = record.as_object().ok_or_else(|| {
            Error::InvalidRecord(format!("record at position {} is not an object", position))
        })?;

        let id = match fields.get("id") {
            None | Some(Value::Null) => ParticipantId::Integer(position as u64),
            Some(Value::String(s)) => ParticipantId::String(s.clone()),
            Some(Value::Number(n)) => match n.as_u64() {
                Some(i) => ParticipantId::Integer(i),
                None => ParticipantId::String(n.to_string()),
            },
            Some(other) => {
                return Err(Error::InvalidRecord(format!(
                    "record at position {} has an unusable id: {}",
                    position, other
                )))
            }
        };

        let name = fields.get("name").and_then(Value::as_str).map(str::to_string);

        let characteristics = fields
            .iter()
            .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "name")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self { id, name, characteristics })
    }
}

/// Largest accepted score magnitude. Pairwise distances and means over
/// scores in this range stay finite.
pub const MAX_SCORE_MAGNITUDE: f64 = 1e100;

/// Interpret a raw score as a number.
///
/// JSON numbers and strings holding a number within
/// [`MAX_SCORE_MAGNITUDE`] are accepted; anything else (booleans, null,
/// objects, free text, out-of-range values) is not a score.
pub fn numeric_score(value: &Value) -> Option<f64> {
    let score = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    score.filter(|v| v.is_finite() && v.abs() <= MAX_SCORE_MAGNITUDE)
}

/// Ordered, non-empty list of distinct characteristic keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CharacteristicSet {
    pub(crate) keys: Vec<String>,
}

impl CharacteristicSet {
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();

        if keys.is_empty() {
            return Err(Error::InvalidConfig(
                "characteristics must name at least one key".to_string(),
            ));
        }

        let mut seen = AHashSet::with_capacity(keys.len());
        for key in &keys {
            if key.trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "characteristic keys cannot be blank".to_string(),
                ));
            }
            if !seen.insert(key.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "characteristic '{}' is listed more than once",
                    key
                )));
            }
        }

        Ok(Self { keys })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.keys.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.keys
    }
}

impl TryFrom<Vec<String>> for CharacteristicSet {
    type Error = Error;

    fn try_from(keys: Vec<String>) -> Result<Self> {
        Self::new(keys)
    }
}

impl From<CharacteristicSet> for Vec<String> {
    fn from(set: CharacteristicSet) -> Self {
        set.keys
    }
}

impl<'a> IntoIterator for &'a CharacteristicSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
