//! Fetch-all use case.
//!
//! Serves the cached document when one exists and no refresh was forced;
//! otherwise fetches every requested character sequentially and overwrites
//! the cache with the aggregated result.

use std::sync::Arc;

use spelltrackr_domain::{CacheDocument, CharacterId};

use crate::infrastructure::ports::{CacheStorePort, CharacterSourcePort};

use super::error::CharacterDataError;
use super::extract::extract_character;

/// Fetch-all use case.
pub struct GetAllCharacters {
    source: Arc<dyn CharacterSourcePort>,
    cache: Arc<dyn CacheStorePort>,
}

impl GetAllCharacters {
    pub fn new(source: Arc<dyn CharacterSourcePort>, cache: Arc<dyn CacheStorePort>) -> Self {
        Self { source, cache }
    }

    /// Execute the fetch-all use case.
    ///
    /// Cached data always wins unless `force_update` is set - `ids` is
    /// ignored entirely on a cache hit. A refresh requires a non-empty id
    /// list; characters are fetched one at a time and the first failure
    /// aborts the whole batch without saving anything.
    pub async fn execute(
        &self,
        ids: Option<Vec<CharacterId>>,
        force_update: bool,
    ) -> Result<CacheDocument, CharacterDataError> {
        if !force_update {
            if let Some(document) = self.cache.load().await? {
                tracing::debug!(
                    characters = document.characters.len(),
                    "serving characters from cache"
                );
                return Ok(document);
            }
        }

        let ids = ids
            .filter(|ids| !ids.is_empty())
            .ok_or(CharacterDataError::MissingIds)?;

        let mut document = CacheDocument::default();
        for id in &ids {
            tracing::info!(character_id = %id, "fetching character from upstream");
            let envelope = self.source.fetch(id).await?;
            let extracted = extract_character(envelope, id)?;
            if document.campaign.is_none() {
                document.campaign = extracted.campaign;
            }
            document.characters.insert(id.clone(), extracted.record);
        }

        self.cache.save(&document).await?;
        tracing::info!(characters = document.characters.len(), "cache refreshed");
        Ok(document)
    }
}
