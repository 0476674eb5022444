//! Team metrics
//!
//! Average internal similarity and the Team Heterogeneity Index (THI) for a
//! finished team, plus run-level statistics over all teams.

use crate::matrix::SimilarityMatrix;
use serde::{Deserialize, Serialize};

/// Per-team similarity metrics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamMetrics {
    /// Mean similarity over every unordered member pair
    pub avg_similarity: f64,
    /// Team Heterogeneity Index, `1 - avg_similarity`
    pub thi: f64,
}

impl TeamMetrics {
    /// Metrics for a team given as matrix indices.
    ///
    /// Teams with fewer than two members have nothing to compare and get
    /// zero for both values.
    pub fn compute(members: &[usize], matrix: &SimilarityMatrix) -> Self {
        matrix
            .mean_pairwise(members)
            .map(Self::from_avg_similarity)
            .unwrap_or_default()
    }

    #[inline]
    pub fn from_avg_similarity(avg_similarity: f64) -> Self {
        Self {
            avg_similarity,
            thi: 1.0 - avg_similarity,
        }
    }
}

/// Summary statistics for one assignment run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignmentSummary {
    pub team_count: usize,
    pub participant_count: usize,
    /// Mean `avg_similarity` over teams with at least two members
    pub mean_avg_similarity: f64,
    /// Mean `thi` over teams with at least two members
    pub mean_thi: f64,
    pub smallest_team: usize,
    pub largest_team: usize,
}

impl AssignmentSummary {
    /// Compute stats from `(team size, metrics)` pairs
    pub fn compute<'a, I>(teams: I) -> Self
    where
        I: IntoIterator<Item = (usize, &'a TeamMetrics)>,
    {
        let mut summary = Self::default();
        let mut scored = 0usize;
        let mut similarity_total = 0.0;
        let mut thi_total = 0.0;

        for (size, metrics) in teams {
            if summary.team_count == 0 {
                summary.smallest_team = size;
                summary.largest_team = size;
            } else {
                summary.smallest_team = summary.smallest_team.min(size);
                summary.largest_team = summary.largest_team.max(size);
            }
            summary.team_count += 1;
            summary.participant_count += size;

            if size >= 2 {
                scored += 1;
                similarity_total += metrics.avg_similarity;
                thi_total += metrics.thi;
            }
        }

        if scored > 0 {
            summary.mean_avg_similarity = similarity_total / scored as f64;
            summary.mean_thi = thi_total / scored as f64;
        }

        summary
    }
}
