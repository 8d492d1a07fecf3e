//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::ports::{CacheStorePort, CharacterSourcePort};
use crate::use_cases::CharacterUseCases;

/// Main application state.
///
/// Constructed once at process start with its ports injected; passed to
/// HTTP handlers via Axum state. There is deliberately no import-time
/// singleton holding a client.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub characters: CharacterUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(source: Arc<dyn CharacterSourcePort>, cache: Arc<dyn CacheStorePort>) -> Self {
        Self {
            use_cases: UseCases {
                characters: CharacterUseCases::new(source, cache),
            },
        }
    }
}
