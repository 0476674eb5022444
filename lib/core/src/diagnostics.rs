//! Non-fatal findings reported next to a team-formation result

use crate::participant::ParticipantId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The participant has no score for a configured characteristic; `0` was used
    MissingAttribute {
        participant: ParticipantId,
        characteristic: String,
    },
    /// An acceptance predicate rejected every remaining candidate, so the
    /// strategy placed this participant anyway to keep everyone assigned
    PredicateOverridden {
        participant: ParticipantId,
        team: usize,
    },
}

impl Diagnostic {
    pub fn participant(&self) -> &ParticipantId {
        match self {
            Diagnostic::MissingAttribute { participant, .. } => participant,
            Diagnostic::PredicateOverridden { participant, .. } => participant,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::MissingAttribute { participant, characteristic } => write!(
                f,
                "participant {} has no value for '{}', using 0",
                participant, characteristic
            ),
            Diagnostic::PredicateOverridden { participant, team } => write!(
                f,
                "participant {} placed in team {} despite the acceptance predicate",
                participant, team
            ),
        }
    }
}
