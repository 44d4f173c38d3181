use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::modules::activities::catalog::ActivitySeed;
use crate::modules::activities::core::errors::{CatalogError, RegistryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    description: String,
    schedule: String,
    max_participants: usize,
    // private so the only way in is sign_up and the only way out is unregister
    participants: IndexSet<String>,
}

// Read-only snapshot handed to callers; participants keep signup order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_seed(seed: ActivitySeed) -> Result<Self, CatalogError> {
        let ActivitySeed {
            name,
            description,
            schedule,
            max_participants,
            participants,
        } = seed;

        if max_participants == 0 {
            return Err(CatalogError::ZeroCapacity(name));
        }
        if participants.len() > max_participants {
            return Err(CatalogError::OverCapacity {
                activity: name,
                seeded: participants.len(),
                max_participants,
            });
        }

        let mut roster = IndexSet::with_capacity(participants.len());
        for participant in participants {
            if participant.is_empty() {
                return Err(CatalogError::EmptyParticipant(name.clone()));
            }
            if !roster.insert(participant.clone()) {
                return Err(CatalogError::DuplicateParticipant {
                    activity: name.clone(),
                    participant,
                });
            }
        }

        Ok(Self {
            description,
            schedule,
            max_participants,
            participants: roster,
        })
    }

    pub fn sign_up(&mut self, participant_id: &str) -> Result<(), RegistryError> {
        if self.participants.contains(participant_id) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if self.participants.len() >= self.max_participants {
            return Err(RegistryError::CapacityExceeded);
        }
        self.participants.insert(participant_id.to_owned());
        Ok(())
    }

    pub fn unregister(&mut self, participant_id: &str) -> Result<(), RegistryError> {
        if self.participants.shift_remove(participant_id) {
            Ok(())
        } else {
            Err(RegistryError::NotFound)
        }
    }

    pub fn snapshot(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.iter().cloned().collect(),
        }
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn is_registered(&self, participant_id: &str) -> bool {
        self.participants.contains(participant_id)
    }
}
