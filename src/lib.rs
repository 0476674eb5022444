//! # teamsync
//!
//! Deterministic team formation from self-reported survey scores.
//!
//! Participants are compared on a configured list of characteristics and
//! partitioned into fixed-size teams, either **homogeneous** (similar people
//! together) or **heterogeneous** (spread within each team). Every team is
//! scored with its average internal similarity and Team Heterogeneity Index
//! (`THI = 1 - avg_similarity`).
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! teamsync --input session.json --approach heterogeneous --team-size 3
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use teamsync::prelude::*;
//!
//! let participants = vec![
//!     Participant::new("A").with_score("tech", 80.0),
//!     Participant::new("B").with_score("tech", 82.0),
//!     Participant::new("C").with_score("tech", 10.0),
//!     Participant::new("D").with_score("tech", 15.0),
//! ];
//! let config = AssignmentConfig::new(
//!     2,
//!     TeamApproach::Heterogeneous,
//!     CharacteristicSet::new(["tech"]).unwrap(),
//! );
//!
//! let assignment = form_teams(&participants, &config).unwrap();
//! for team in &assignment.teams {
//!     assert!((team.metrics.thi - (1.0 - team.metrics.avg_similarity)).abs() < 1e-9);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `teamsync-core` - Participants, characteristic sets and vectors, configuration, errors
//! - `teamsync-similarity` - Vector extraction, similarity matrix, team metrics
//! - `teamsync-assign` - Assignment strategies and the team-formation engine

pub mod session;

pub use session::{RecordLayout, SessionDocument};

// Re-export core types
pub use teamsync_core::{
    AssignmentConfig, CharacteristicSet, CharacteristicVector, ConfigPatch, Diagnostic, Error,
    Participant, ParticipantId, Result, TeamApproach, MAX_SCORE_MAGNITUDE,
};

// Re-export similarity
pub use teamsync_similarity::{
    similarity, AssignmentSummary, SimilarityMatrix, TeamMetrics, VectorExtractor,
};

// Re-export assignment
pub use teamsync_assign::{
    form_teams, AcceptAll, AcceptancePredicate, Assignment, AssignmentContext, AssignmentStrategy,
    HeterogeneousGreedy, HomogeneousBlock, Objective, SimilarityGreedy, Team, TeamEngine,
    DEFAULT_MAX_PARTICIPANTS,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        form_teams, AcceptancePredicate, Assignment, AssignmentConfig, AssignmentStrategy,
        CharacteristicSet, ConfigPatch, Diagnostic, Error, Participant, ParticipantId, Result,
        Team, TeamApproach, TeamEngine, TeamMetrics,
    };
}
