//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete
//! types. Ports exist for:
//! - The upstream character service (could swap D&D Beyond -> another service)
//! - The cache store (could swap the JSON file -> an embedded store)

use async_trait::async_trait;
use spelltrackr_domain::{CacheDocument, CharacterId};

use crate::infrastructure::payload::CharacterEnvelope;

// =============================================================================
// Ports
// =============================================================================

/// Upstream source of raw character payloads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterSourcePort: Send + Sync {
    /// Fetch one character's raw payload.
    ///
    /// One GET per call, no retries. Any upstream status >= 300 is fatal for
    /// that character.
    async fn fetch(&self, id: &CharacterId) -> Result<CharacterEnvelope, SourceError>;
}

/// Persistent store for the aggregated cache document.
///
/// One JSON file, one document. Owned and mutated by the coordinator
/// operations only; handlers run one at a time, so there are no concurrent
/// writers to guard against.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStorePort: Send + Sync {
    /// Read the cached document, `None` when no cache exists.
    async fn load(&self) -> Result<Option<CacheDocument>, CacheError>;

    /// Overwrite the cached document, creating the cache directory if needed.
    async fn save(&self, document: &CacheDocument) -> Result<(), CacheError>;

    /// Shallow-merge `partial.characters` into the existing document
    /// (new entries overwrite by key; the stored campaign is left untouched).
    ///
    /// Returns `Ok(false)` without writing when there is no document to
    /// merge into.
    async fn merge(&self, partial: &CacheDocument) -> Result<bool, CacheError>;

    /// Remove the cache entirely. Succeeds when nothing is cached.
    async fn clear(&self) -> Result<(), CacheError>;
}

// =============================================================================
// Error Types
// =============================================================================

/// Errors from the upstream character service.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// The service answered with a non-success status. The body is kept
    /// verbatim so operators can spot private-profile and id-typo issues.
    #[error("character service returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("character service request failed: {0}")]
    Transport(String),

    /// The response body was not a character document.
    #[error("invalid character service response: {0}")]
    InvalidResponse(String),
}

impl SourceError {
    /// Create an Upstream error carrying the response status and body.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            body: body.into(),
        }
    }
}

/// Errors from the local cache store.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The cache file exists but is not valid JSON. Surfaced, never
    /// auto-repaired.
    #[error("cache file is corrupt: {0}")]
    Corrupt(String),

    /// Filesystem operation failed - includes operation name for tracing.
    #[error("cache IO error in {operation}: {message}")]
    Io {
        operation: &'static str,
        message: String,
    },

    /// Serializing the document failed.
    #[error("cache serialization error: {0}")]
    Serialization(String),
}

impl CacheError {
    /// Create an Io error with operation context.
    pub fn io(operation: &'static str, message: impl ToString) -> Self {
        Self::Io {
            operation,
            message: message.to_string(),
        }
    }

    /// Create a Corrupt error.
    pub fn corrupt(message: impl ToString) -> Self {
        Self::Corrupt(message.to_string())
    }
}
