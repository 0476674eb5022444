//! Session documents
//!
//! The JSON shape a session store hands over for one run: participant
//! records plus the session's settings. Both the nested participant layout
//! and the flat survey-record layout are understood.

use serde::Deserialize;
use serde_json::Value;
use teamsync_core::{AssignmentConfig, Error, Participant, Result};

/// How participant records are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RecordLayout {
    /// `{"id", "name", "characteristics": {...}}`
    #[default]
    Nested,
    /// `{"id", "name", "<characteristic>": score, ...}`
    Flat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionDocument {
    #[serde(alias = "users")]
    pub participants: Vec<Value>,
    #[serde(default, alias = "settings")]
    pub config: Option<Value>,
}

impl SessionDocument {
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| Error::InvalidRecord(e.to_string()))
    }

    /// Participant records in document order
    pub fn participants(&self, layout: RecordLayout) -> Result<Vec<Participant>> {
        self.participants
            .iter()
            .enumerate()
            .map(|(position, record)| match layout {
                RecordLayout::Flat => Participant::from_survey_record(record, position),
                RecordLayout::Nested => Participant::deserialize(record).map_err(|e| {
                    Error::InvalidRecord(format!("record at position {}: {}", position, e))
                }),
            })
            .collect()
    }

    /// The document's settings, or session defaults when it carries none
    pub fn config(&self) -> Result<AssignmentConfig> {
        match &self.config {
            Some(settings) => AssignmentConfig::from_json(settings),
            None => Ok(AssignmentConfig::default()),
        }
    }
}
