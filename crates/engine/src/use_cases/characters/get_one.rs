//! Fetch-one use case.
//!
//! Without `force_update` this is a cache read only - a miss is a miss, not
//! a reason to pull an arbitrary id into the shared cache. A forced refresh
//! fetches the one character and patches it into the cached document.

use std::sync::Arc;

use spelltrackr_domain::{CacheDocument, CharacterId, CharacterRecord};

use crate::infrastructure::ports::{CacheStorePort, CharacterSourcePort};

use super::error::CharacterDataError;
use super::extract::extract_character;

/// Fetch-one use case.
pub struct GetOneCharacter {
    source: Arc<dyn CharacterSourcePort>,
    cache: Arc<dyn CacheStorePort>,
}

impl GetOneCharacter {
    pub fn new(source: Arc<dyn CharacterSourcePort>, cache: Arc<dyn CacheStorePort>) -> Self {
        Self { source, cache }
    }

    /// Execute the fetch-one use case.
    pub async fn execute(
        &self,
        id: CharacterId,
        force_update: bool,
    ) -> Result<CharacterRecord, CharacterDataError> {
        if !force_update {
            let document = self
                .cache
                .load()
                .await?
                .ok_or_else(|| CharacterDataError::NotCached(id.clone()))?;
            return document
                .characters
                .get(&id)
                .cloned()
                .ok_or(CharacterDataError::NotCached(id));
        }

        tracing::info!(character_id = %id, "refreshing single character from upstream");
        let envelope = self.source.fetch(&id).await?;
        let extracted = extract_character(envelope, &id)?;

        let partial = CacheDocument::with_character(
            id,
            extracted.record.clone(),
            extracted.campaign,
        );
        let merged = self.cache.merge(&partial).await?;
        if !merged {
            // No document to patch; this refresh becomes the whole cache.
            self.cache.save(&partial).await?;
        }

        Ok(extracted.record)
    }
}
