use crate::participant::ParticipantId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Insufficient participants: need at least {required}, got {actual}")]
    InsufficientParticipants { required: usize, actual: usize },

    #[error("Participant {participant} has a non-numeric value for characteristic '{characteristic}'")]
    InvalidAttributeType {
        participant: ParticipantId,
        characteristic: String,
    },

    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(ParticipantId),

    #[error("Too many participants: limit is {limit}, got {actual}")]
    TooManyParticipants { limit: usize, actual: usize },

    #[error("Invalid participant record: {0}")]
    InvalidRecord(String),

    #[error("Invalid partition: {0}")]
    InvalidPartition(String),
}
