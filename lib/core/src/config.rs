use crate::error::{Error, Result};
use crate::participant::CharacteristicSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Team size used when a session has not configured one
pub const DEFAULT_TEAM_SIZE: usize = 4;

/// Characteristics surveyed by a fresh session
pub const DEFAULT_CHARACTERISTICS: [&str; 4] = [
    "tech_skills",
    "comm_skills",
    "creative_skills",
    "leadership_skills",
];

/// Reserved threshold value carried by a fresh session
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 50.0;

/// Grouping objective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TeamApproach {
    /// Minimize intra-team spread
    #[default]
    Homogeneous,
    /// Maximize intra-team spread
    Heterogeneous,
}

impl TeamApproach {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamApproach::Homogeneous => "homogeneous",
            TeamApproach::Heterogeneous => "heterogeneous",
        }
    }
}

impl std::fmt::Display for TeamApproach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamApproach {
    type Err = Error;

    /// Accepts the canonical names and the short `homogeni`/`heterogeni`
    /// spellings stored by existing sessions, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "homogeneous" | "homogeni" => Ok(TeamApproach::Homogeneous),
            "heterogeneous" | "heterogeni" => Ok(TeamApproach::Heterogeneous),
            other => Err(Error::InvalidConfig(format!(
                "unknown team approach '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for TeamApproach {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TeamApproach> for String {
    fn from(approach: TeamApproach) -> Self {
        approach.as_str().to_string()
    }
}

/// Settings for one team-formation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    pub team_size: usize,
    pub team_approach: TeamApproach,
    pub characteristics: CharacteristicSet,
    /// Accepted and handed to strategies; the built-in policies ignore it
    pub similarity_threshold: f64,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            team_approach: TeamApproach::default(),
            characteristics: CharacteristicSet {
                keys: DEFAULT_CHARACTERISTICS.iter().map(|k| k.to_string()).collect(),
            },
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

impl AssignmentConfig {
    pub fn new(
        team_size: usize,
        team_approach: TeamApproach,
        characteristics: CharacteristicSet,
    ) -> Self {
        Self {
            team_size,
            team_approach,
            characteristics,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }

    #[must_use]
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    /// Parse a settings object and validate it.
    ///
    /// Keys that are not assignment settings are ignored. Settings left out
    /// take their session defaults.
    pub fn from_json(value: &Value) -> Result<Self> {
        let config = Self::deserialize(value)
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the engine relies on
    pub fn validate(&self) -> Result<()> {
        if self.team_size == 0 {
            return Err(Error::InvalidConfig(
                "team_size must be a positive integer".to_string(),
            ));
        }

        if self.characteristics.is_empty() {
            return Err(Error::InvalidConfig(
                "characteristics must name at least one key".to_string(),
            ));
        }

        if !self.similarity_threshold.is_finite() {
            return Err(Error::InvalidConfig(
                "similarity_threshold must be a finite number".to_string(),
            ));
        }

        Ok(())
    }

    /// Overwrite the settings present in `patch` and re-validate
    pub fn apply(&mut self, patch: ConfigPatch) -> Result<()> {
        let mut updated = self.clone();

        if let Some(team_size) = patch.team_size {
            updated.team_size = team_size;
        }
        if let Some(team_approach) = patch.team_approach {
            updated.team_approach = team_approach;
        }
        if let Some(characteristics) = patch.characteristics {
            updated.characteristics = characteristics;
        }
        if let Some(threshold) = patch.similarity_threshold {
            updated.similarity_threshold = threshold;
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

/// Partial settings update; absent fields keep their current value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_approach: Option<TeamApproach>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristics: Option<CharacteristicSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
}

impl ConfigPatch {
    pub fn is_empty(&self) -> bool {
        self.team_size.is_none()
            && self.team_approach.is_none()
            && self.characteristics.is_none()
            && self.similarity_threshold.is_none()
    }
}
