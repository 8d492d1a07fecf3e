//! D&D Beyond character service client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use spelltrackr_domain::CharacterId;

use crate::infrastructure::payload::CharacterEnvelope;
use crate::infrastructure::ports::{CharacterSourcePort, SourceError};

/// Default character service base URL.
pub const DEFAULT_BEYOND_BASE_URL: &str = "https://character-service.dndbeyond.com";

/// Client for the D&D Beyond character service.
///
/// The service needs no auth, but the character's privacy setting must be
/// public or the fetch comes back 403 - which is why upstream error bodies
/// are preserved verbatim in [`SourceError::Upstream`].
#[derive(Clone)]
pub struct BeyondClient {
    client: Client,
    base_url: String,
}

impl BeyondClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create client from the `BEYOND_BASE_URL` environment variable,
    /// falling back to the public service.
    pub fn from_env() -> Self {
        let base_url = std::env::var("BEYOND_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BEYOND_BASE_URL.to_string());
        Self::new(&base_url)
    }

    fn character_url(&self, id: &CharacterId) -> String {
        // includeCustomItems pulls homebrew/custom items into the payload
        format!(
            "{}/character/v5/character/{}?includeCustomItems=true",
            self.base_url, id
        )
    }
}

impl Default for BeyondClient {
    fn default() -> Self {
        Self::new(DEFAULT_BEYOND_BASE_URL)
    }
}

#[async_trait]
impl CharacterSourcePort for BeyondClient {
    async fn fetch(&self, id: &CharacterId) -> Result<CharacterEnvelope, SourceError> {
        let response = self
            .client
            .get(self.character_url(id))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if status >= 300 {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                character_id = %id,
                status,
                body = %body,
                "character service returned an error"
            );
            return Err(SourceError::upstream(status, body));
        }

        response
            .json::<CharacterEnvelope>()
            .await
            .map_err(|e| SourceError::InvalidResponse(e.to_string()))
    }
}
