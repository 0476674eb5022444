//! Pairwise similarity matrix
//!
//! Stores one value per unordered pair (the strict upper triangle, row-major)
//! and answers lookups for either order, so the matrix is symmetric by
//! construction. The diagonal is not stored and cannot be read.

use crate::distance::similarity;
use rayon::prelude::*;
use teamsync_core::CharacteristicVector;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute similarity for every unordered pair of vectors.
    ///
    /// Rows are computed in parallel; each entry depends only on its two
    /// vectors, so the result is identical to a sequential build.
    pub fn build(vectors: &[CharacteristicVector]) -> Self {
        let size = vectors.len();
        if size < 2 {
            return Self {
                size,
                values: Vec::new(),
            };
        }

        let rows: Vec<Vec<f64>> = (0..size)
            .into_par_iter()
            .map(|i| {
                ((i + 1)..size)
                    .map(|j| similarity(&vectors[i], &vectors[j]))
                    .collect()
            })
            .collect();

        let values: Vec<f64> = rows.into_iter().flatten().collect();
        debug!(participants = size, pairs = values.len(), "built similarity matrix");

        Self { size, values }
    }

    /// Number of participants the matrix covers
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of stored unordered pairs
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.values.len()
    }

    /// Similarity between participants `i` and `j`.
    ///
    /// Returns `None` on the diagonal and for out-of-range indices.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i == j || i >= self.size || j >= self.size {
            return None;
        }
        let (row, col) = if i < j { (i, j) } else { (j, i) };
        self.values.get(self.offset(row, col)).copied()
    }

    /// Average similarity over every unordered pair of `members`.
    ///
    /// `None` when fewer than two members are given.
    pub fn mean_pairwise(&self, members: &[usize]) -> Option<f64> {
        if members.len() < 2 {
            return None;
        }

        let mut total = 0.0;
        let mut pairs = 0usize;
        for (pos, &a) in members.iter().enumerate() {
            for &b in &members[pos + 1..] {
                total += self.get(a, b)?;
                pairs += 1;
            }
        }

        Some(total / pairs as f64)
    }

    /// Average similarity between `candidate` and each of `members`.
    ///
    /// `None` when `members` is empty or contains `candidate`.
    pub fn mean_to(&self, candidate: usize, members: &[usize]) -> Option<f64> {
        if members.is_empty() {
            return None;
        }

        let mut total = 0.0;
        for &member in members {
            total += self.get(candidate, member)?;
        }

        Some(total / members.len() as f64)
    }

    // Row `i` of the upper triangle starts after rows 0..i, which hold
    // (n-1) + (n-2) + ... + (n-i) values.
    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        i * (2 * self.size - i - 1) / 2 + (j - i - 1)
    }
}
