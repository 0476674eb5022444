//! Distance and similarity functions for characteristic vectors
//!
//! All similarity functions return a score in range (0.0, 1.0] where 1.0 means identical.

use teamsync_core::CharacteristicVector;

/// Convert a Euclidean distance into a similarity score
///
/// `1 / (1 + distance)`: exactly 1.0 at distance zero, strictly decreasing,
/// and never reaching zero for a finite distance.
#[inline]
pub fn similarity_from_distance(distance: f64) -> f64 {
    1.0 / (1.0 + distance)
}

/// Similarity between two participants' characteristic vectors
///
/// # Arguments
/// * `a` - First vector
/// * `b` - Second vector
///
/// # Returns
/// Similarity score in (0.0, 1.0]
#[inline]
pub fn similarity(a: &CharacteristicVector, b: &CharacteristicVector) -> f64 {
    similarity_from_distance(a.l2_distance(b))
}
