use thiserror::Error;

// The display strings double as the outward error details; "already signed
// up" and "full" are substrings existing clients match on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("activity or participant not found")]
    NotFound,

    #[error("already signed up for this activity")]
    AlreadyRegistered,

    #[error("activity is full")]
    CapacityExceeded,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate activity name: {0}")]
    DuplicateActivity(String),

    #[error("activity {0} must allow at least one participant")]
    ZeroCapacity(String),

    #[error("activity {activity} seeds {seeded} participants but caps at {max_participants}")]
    OverCapacity {
        activity: String,
        seeded: usize,
        max_participants: usize,
    },

    #[error("duplicate participant {participant} seeded for {activity}")]
    DuplicateParticipant {
        activity: String,
        participant: String,
    },

    #[error("empty participant id seeded for {0}")]
    EmptyParticipant(String),
}
