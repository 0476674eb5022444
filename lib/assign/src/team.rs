//! Result types returned to the session store

use serde::{Deserialize, Serialize};
use teamsync_core::{Diagnostic, ParticipantId};
use teamsync_similarity::{AssignmentSummary, TeamMetrics};

/// One formed team: member identities in assignment order plus its metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub members: Vec<ParticipantId>,
    pub metrics: TeamMetrics,
}

impl Team {
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.members.contains(id)
    }
}

/// Everything one engine run hands back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub teams: Vec<Team>,
    pub summary: AssignmentSummary,
    /// Recovered data-quality issues, in the order they were found
    #[serde(default)]
    pub warnings: Vec<Diagnostic>,
}

impl Assignment {
    pub fn new(teams: Vec<Team>, warnings: Vec<Diagnostic>) -> Self {
        let summary = AssignmentSummary::compute(teams.iter().map(|t| (t.len(), &t.metrics)));
        Self {
            teams,
            summary,
            warnings,
        }
    }

    /// Index of the team holding `id`
    pub fn team_of(&self, id: &ParticipantId) -> Option<usize> {
        self.teams.iter().position(|team| team.contains(id))
    }
}
