//! Character data operation errors.

use spelltrackr_domain::CharacterId;

use crate::infrastructure::ports::{CacheError, SourceError};

/// Errors that can occur during character data operations.
#[derive(Debug, thiserror::Error)]
pub enum CharacterDataError {
    /// Character ids are required when there is no cached data to serve.
    #[error("character ids were not provided and no cached data was found")]
    MissingIds,

    /// The character is not in the cache and the caller did not force a
    /// refresh. A cache miss never triggers a remote fetch on its own.
    #[error("character not cached: {0}")]
    NotCached(CharacterId),

    /// The upstream document carried no character data at all.
    #[error("no character data found for character id: {0}")]
    EmptyPayload(CharacterId),

    #[error("upstream error: {0}")]
    Source(#[from] SourceError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}
