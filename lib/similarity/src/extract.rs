//! Characteristic vector extraction
//!
//! Turns participant records into numeric vectors over a fixed key order.
//! A missing key becomes `0` and is reported as a diagnostic; a value that is
//! present but not numeric rejects the whole batch.

use teamsync_core::{
    numeric_score, CharacteristicSet, CharacteristicVector, Diagnostic, Error, Participant, Result,
};
use tracing::warn;

/// Vectors for a batch of participants, in input order
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub vectors: Vec<CharacteristicVector>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Builds characteristic vectors for one characteristic set
#[derive(Debug, Clone)]
pub struct VectorExtractor {
    characteristics: CharacteristicSet,
}

impl VectorExtractor {
    pub fn new(characteristics: CharacteristicSet) -> Self {
        Self { characteristics }
    }

    pub fn characteristics(&self) -> &CharacteristicSet {
        &self.characteristics
    }

    /// Extract one participant's vector, appending any gaps to `diagnostics`
    pub fn extract(
        &self,
        participant: &Participant,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<CharacteristicVector> {
        let mut components = Vec::with_capacity(self.characteristics.len());

        for key in &self.characteristics {
            let score = match participant.value(key) {
                None => {
                    warn!(
                        participant = %participant.id,
                        characteristic = %key,
                        "missing characteristic, substituting 0"
                    );
                    diagnostics.push(Diagnostic::MissingAttribute {
                        participant: participant.id.clone(),
                        characteristic: key.clone(),
                    });
                    0.0
                }
                Some(value) => numeric_score(value).ok_or_else(|| Error::InvalidAttributeType {
                    participant: participant.id.clone(),
                    characteristic: key.clone(),
                })?,
            };
            components.push(score);
        }

        Ok(CharacteristicVector::new(components))
    }

    /// Extract vectors for every participant, stopping at the first invalid value
    pub fn extract_all(&self, participants: &[Participant]) -> Result<Extraction> {
        let mut diagnostics = Vec::new();
        let vectors = participants
            .iter()
            .map(|p| self.extract(p, &mut diagnostics))
            .collect::<Result<Vec<_>>>()?;

        Ok(Extraction { vectors, diagnostics })
    }
}
