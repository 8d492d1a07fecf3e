//! Character data use cases.
//!
//! The coordinator's three public operations, plus the extractor that turns
//! raw upstream payloads into tracker records.

mod delete_cache;
mod error;
mod extract;
mod get_all;
mod get_one;

use std::sync::Arc;

pub use delete_cache::DeleteCachedData;
pub use error::CharacterDataError;
pub use extract::{extract_character, ExtractedCharacter};
pub use get_all::GetAllCharacters;
pub use get_one::GetOneCharacter;

use crate::infrastructure::ports::{CacheStorePort, CharacterSourcePort};

/// Container for character data use cases.
pub struct CharacterUseCases {
    pub get_all: Arc<GetAllCharacters>,
    pub get_one: Arc<GetOneCharacter>,
    pub delete_cache: Arc<DeleteCachedData>,
}

impl CharacterUseCases {
    pub fn new(source: Arc<dyn CharacterSourcePort>, cache: Arc<dyn CacheStorePort>) -> Self {
        Self {
            get_all: Arc::new(GetAllCharacters::new(source.clone(), cache.clone())),
            get_one: Arc::new(GetOneCharacter::new(source, cache.clone())),
            delete_cache: Arc::new(DeleteCachedData::new(cache)),
        }
    }
}
