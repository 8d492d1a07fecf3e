//! JSON-file-backed cache store.
//!
//! One file, one document. The location is relative to the working directory
//! (`tmp/local_character_data.json` by default), which keeps the on-disk
//! layout compatible with earlier versions of the tracker.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use spelltrackr_domain::CacheDocument;

use crate::infrastructure::ports::{CacheError, CacheStorePort};

/// Default cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "tmp";

const CACHE_FILE_NAME: &str = "local_character_data.json";

/// Cache store persisting the aggregated document as a single JSON file.
pub struct JsonFileCacheStore {
    dir: PathBuf,
}

impl JsonFileCacheStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store from the `CACHE_DIR` environment variable, falling
    /// back to [`DEFAULT_CACHE_DIR`].
    pub fn from_env() -> Self {
        let dir = std::env::var("CACHE_DIR").unwrap_or_else(|_| DEFAULT_CACHE_DIR.to_string());
        Self::new(dir)
    }

    fn file_path(&self) -> PathBuf {
        self.dir.join(CACHE_FILE_NAME)
    }

    async fn read_document(path: &Path) -> Result<Option<CacheDocument>, CacheError> {
        let body = match tokio::fs::read_to_string(path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::io("load", e)),
        };
        let document = serde_json::from_str(&body).map_err(CacheError::corrupt)?;
        Ok(Some(document))
    }

    async fn write_document(&self, document: &CacheDocument) -> Result<(), CacheError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CacheError::io("save", e))?;
        let body =
            serde_json::to_string(document).map_err(|e| CacheError::Serialization(e.to_string()))?;
        tokio::fs::write(self.file_path(), body)
            .await
            .map_err(|e| CacheError::io("save", e))
    }
}

#[async_trait]
impl CacheStorePort for JsonFileCacheStore {
    async fn load(&self) -> Result<Option<CacheDocument>, CacheError> {
        Self::read_document(&self.file_path()).await
    }

    async fn save(&self, document: &CacheDocument) -> Result<(), CacheError> {
        self.write_document(document).await
    }

    async fn merge(&self, partial: &CacheDocument) -> Result<bool, CacheError> {
        let Some(mut existing) = self.load().await? else {
            return Ok(false);
        };
        existing
            .characters
            .extend(partial.characters.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.write_document(&existing).await?;
        Ok(true)
    }

    async fn clear(&self) -> Result<(), CacheError> {
        match tokio::fs::remove_dir_all(&self.dir).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CacheError::io("clear", e)),
        }
    }
}
