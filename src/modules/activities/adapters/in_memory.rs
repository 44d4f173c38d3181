use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::modules::activities::catalog::ActivitySeed;
use crate::modules::activities::core::errors::{CatalogError, RegistryError};
use crate::modules::activities::core::model::{Activity, ActivityView};
use crate::modules::activities::ports::{ActivityRegistry, Confirmation};

// A single lock guards the whole catalog, so every check-then-mutate runs in
// one critical section.
pub struct InMemoryActivityRegistry {
    inner: RwLock<IndexMap<String, Activity>>,
}

impl InMemoryActivityRegistry {
    pub fn new(seeds: Vec<ActivitySeed>) -> Result<Self, CatalogError> {
        let mut catalog = IndexMap::with_capacity(seeds.len());
        for activity_seed in seeds {
            let name = activity_seed.name.clone();
            let activity = Activity::from_seed(activity_seed)?;
            if catalog.insert(name.clone(), activity).is_some() {
                return Err(CatalogError::DuplicateActivity(name));
            }
        }
        Ok(Self {
            inner: RwLock::new(catalog),
        })
    }
}

#[async_trait]
impl ActivityRegistry for InMemoryActivityRegistry {
    async fn list(&self) -> IndexMap<String, ActivityView> {
        let guard = self.inner.read().await;
        guard
            .iter()
            .map(|(name, activity)| (name.clone(), activity.snapshot()))
            .collect()
    }

    async fn sign_up(
        &self,
        activity_name: &str,
        participant_id: &str,
    ) -> Result<Confirmation, RegistryError> {
        let mut guard = self.inner.write().await;
        let activity = guard
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;
        activity.sign_up(participant_id)?;
        tracing::info!(
            activity = %activity_name,
            participant = %participant_id,
            "participant signed up"
        );
        Ok(Confirmation {
            activity: activity_name.to_owned(),
            participant: participant_id.to_owned(),
        })
    }

    async fn unregister(
        &self,
        activity_name: &str,
        participant_id: &str,
    ) -> Result<Confirmation, RegistryError> {
        let mut guard = self.inner.write().await;
        let activity = guard
            .get_mut(activity_name)
            .ok_or(RegistryError::NotFound)?;
        activity.unregister(participant_id)?;
        tracing::info!(
            activity = %activity_name,
            participant = %participant_id,
            "participant unregistered"
        );
        Ok(Confirmation {
            activity: activity_name.to_owned(),
            participant: participant_id.to_owned(),
        })
    }
}
