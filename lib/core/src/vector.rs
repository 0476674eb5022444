use serde::{Deserialize, Serialize};

/// A participant's scores over the configured characteristic keys, in key order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CharacteristicVector {
    data: Vec<f64>,
}

impl CharacteristicVector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Compute L2 (Euclidean) distance
    ///
    /// Vectors built from the same characteristic set always share a
    /// dimension; mismatched inputs are treated as infinitely far apart.
    /// Accumulated with `hypot` so large components do not overflow.
    #[inline]
    pub fn l2_distance(&self, other: &CharacteristicVector) -> f64 {
        if self.dim() != other.dim() {
            return f64::INFINITY;
        }

        self.data
            .iter()
            .zip(other.data.iter())
            .fold(0.0_f64, |acc, (a, b)| acc.hypot(a - b))
    }

    /// Arithmetic mean of the components, `0.0` for an empty vector
    #[inline]
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }
}
