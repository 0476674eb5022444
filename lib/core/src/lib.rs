//! # teamsync Core
//!
//! Core types shared by the teamsync crates:
//!
//! - [`Participant`] - a survey respondent with raw characteristic scores
//! - [`CharacteristicSet`] - the ordered keys a run compares on
//! - [`CharacteristicVector`] - a participant's scores as numbers, in key order
//! - [`AssignmentConfig`] - team size, grouping approach and characteristics
//! - [`Diagnostic`] - non-fatal findings returned with a result
//!
//! ## Example
//!
//! ```rust
//! use teamsync_core::{AssignmentConfig, CharacteristicSet, Participant, TeamApproach};
//!
//! let config = AssignmentConfig::new(
//!     2,
//!     TeamApproach::Heterogeneous,
//!     CharacteristicSet::new(["tech_skills"]).unwrap(),
//! );
//! assert!(config.validate().is_ok());
//!
//! let participant = Participant::new("p1").with_name("Ada").with_score("tech_skills", 80.0);
//! assert!(participant.value("tech_skills").is_some());
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod participant;
pub mod vector;

pub use config::{
    AssignmentConfig, ConfigPatch, TeamApproach, DEFAULT_CHARACTERISTICS,
    DEFAULT_SIMILARITY_THRESHOLD, DEFAULT_TEAM_SIZE,
};
pub use diagnostics::Diagnostic;
pub use error::{Error, Result};
pub use participant::{
    numeric_score, CharacteristicSet, Participant, ParticipantId, MAX_SCORE_MAGNITUDE,
};
pub use vector::CharacteristicVector;
