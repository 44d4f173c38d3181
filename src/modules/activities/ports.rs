use async_trait::async_trait;
use indexmap::IndexMap;

use crate::modules::activities::core::errors::RegistryError;
use crate::modules::activities::core::model::ActivityView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub activity: String,
    pub participant: String,
}

#[async_trait]
pub trait ActivityRegistry {
    async fn list(&self) -> IndexMap<String, ActivityView>;

    async fn sign_up(
        &self,
        activity_name: &str,
        participant_id: &str,
    ) -> Result<Confirmation, RegistryError>;

    async fn unregister(
        &self,
        activity_name: &str,
        participant_id: &str,
    ) -> Result<Confirmation, RegistryError>;
}
