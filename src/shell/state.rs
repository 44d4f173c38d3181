use crate::modules::activities::ports::ActivityRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<dyn ActivityRegistry + Send + Sync>,
}
