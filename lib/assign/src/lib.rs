//! # teamsync Assign
//!
//! Team assignment strategies and the engine that runs them.
//!
//! - [`TeamEngine`] - validates a run and produces an [`Assignment`]
//! - [`HomogeneousBlock`] - sorted contiguous blocks (homogeneous approach)
//! - [`HeterogeneousGreedy`] - extreme-first greedy spread (heterogeneous approach)
//! - [`SimilarityGreedy`] - matrix-driven greedy alternative
//! - [`AcceptancePredicate`] - hook for restricting who may join a team
//!
//! ## Example
//!
//! ```rust
//! use teamsync_assign::form_teams;
//! use teamsync_core::{AssignmentConfig, CharacteristicSet, Participant, TeamApproach};
//!
//! let participants = vec![
//!     Participant::new("A").with_score("tech", 80.0),
//!     Participant::new("B").with_score("tech", 82.0),
//!     Participant::new("C").with_score("tech", 10.0),
//!     Participant::new("D").with_score("tech", 15.0),
//! ];
//! let config = AssignmentConfig::new(
//!     2,
//!     TeamApproach::Homogeneous,
//!     CharacteristicSet::new(["tech"]).unwrap(),
//! );
//!
//! let assignment = form_teams(&participants, &config).unwrap();
//! assert_eq!(assignment.teams.len(), 2);
//! assert_eq!(assignment.teams[0].members[0].to_string(), "C");
//! ```

pub mod engine;
pub mod greedy;
pub mod heterogeneous;
pub mod homogeneous;
pub mod strategy;
pub mod team;

pub use engine::{form_teams, TeamEngine, DEFAULT_MAX_PARTICIPANTS, MIN_PARTICIPANTS};
pub use greedy::{Objective, SimilarityGreedy};
pub use heterogeneous::HeterogeneousGreedy;
pub use homogeneous::HomogeneousBlock;
pub use strategy::{
    strategy_for, AcceptAll, AcceptancePredicate, AssignmentContext, AssignmentStrategy, Partition,
};
pub use team::{Assignment, Team};
