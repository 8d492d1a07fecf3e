//! Cache clear use case.

use std::sync::Arc;

use crate::infrastructure::ports::CacheStorePort;

use super::error::CharacterDataError;

/// Delete-all-cached-data use case. Idempotent.
pub struct DeleteCachedData {
    cache: Arc<dyn CacheStorePort>,
}

impl DeleteCachedData {
    pub fn new(cache: Arc<dyn CacheStorePort>) -> Self {
        Self { cache }
    }

    pub async fn execute(&self) -> Result<(), CharacterDataError> {
        self.cache.clear().await?;
        tracing::info!("cached character data deleted");
        Ok(())
    }
}
