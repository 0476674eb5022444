//! # teamsync Similarity
//!
//! Similarity primitives for team formation.
//!
//! ## Features
//!
//! - **Vector Extraction**: participant scores → numeric vectors in characteristic order
//! - **Pairwise Similarity**: `1 / (1 + euclidean distance)`, in (0, 1]
//! - **Similarity Matrix**: every unordered pair computed once, in parallel
//! - **Team Metrics**: average internal similarity and heterogeneity index (THI)
//!
//! ## Example
//!
//! ```rust
//! use teamsync_core::{CharacteristicSet, Participant};
//! use teamsync_similarity::{SimilarityMatrix, TeamMetrics, VectorExtractor};
//!
//! let extractor = VectorExtractor::new(CharacteristicSet::new(["tech"]).unwrap());
//! let participants = vec![
//!     Participant::new("a").with_score("tech", 80.0),
//!     Participant::new("b").with_score("tech", 82.0),
//! ];
//!
//! let extraction = extractor.extract_all(&participants).unwrap();
//! let matrix = SimilarityMatrix::build(&extraction.vectors);
//! let metrics = TeamMetrics::compute(&[0, 1], &matrix);
//! assert!((metrics.thi - (1.0 - metrics.avg_similarity)).abs() < 1e-9);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Participant │────>│  Extractor  │────>│   Matrix    │
//! │  (scores)   │     │ (record→v)  │     │ (pairwise)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                         ┌─────────────┐
//!                                         │   Metrics   │
//!                                         │ (per team)  │
//!                                         └─────────────┘
//! ```

pub mod distance;
pub mod extract;
pub mod matrix;
pub mod metrics;

pub use distance::{similarity, similarity_from_distance};
pub use extract::{Extraction, VectorExtractor};
pub use matrix::SimilarityMatrix;
pub use metrics::{AssignmentSummary, TeamMetrics};
