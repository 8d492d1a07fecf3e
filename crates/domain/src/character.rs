//! Per-character records and the persisted cache document.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::campaign::CampaignMetadata;
use crate::ids::CharacterId;
use crate::items::FocusItem;
use crate::spells::SpellComponentInfo;

/// Item display name -> total quantity across all inventory entries.
pub type InventoryCounts = BTreeMap<String, u32>;

/// Custom spell component name -> amount string (e.g. "5gp").
pub type CustomComponentCounts = BTreeMap<String, String>;

/// Everything the tracker keeps about one character.
///
/// The field names are the wire contract with the existing frontend
/// (`custom_items` is snake_case there; do not rename).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub spells: Vec<SpellComponentInfo>,
    #[serde(default)]
    pub custom_items: CustomComponentCounts,
    #[serde(default)]
    pub inventory: InventoryCounts,
    #[serde(default)]
    pub focus: Option<FocusItem>,
}

/// The single JSON document persisted by the cache store.
///
/// Overwritten wholesale on a full batch fetch, patched per-entry on a
/// single-character forced refresh, deleted on an explicit cache clear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheDocument {
    #[serde(default)]
    pub characters: BTreeMap<CharacterId, CharacterRecord>,
    #[serde(default)]
    pub campaign: Option<CampaignMetadata>,
}

impl CacheDocument {
    /// A document holding a single character, as produced by a forced
    /// single-character refresh when no cache exists yet.
    pub fn with_character(
        id: CharacterId,
        record: CharacterRecord,
        campaign: Option<CampaignMetadata>,
    ) -> Self {
        let mut characters = BTreeMap::new();
        characters.insert(id, record);
        Self {
            characters,
            campaign,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_named(name: &str) -> CharacterRecord {
        CharacterRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn cache_document_round_trips() {
        let id = CharacterId::new("146993912").expect("valid id");
        let doc = CacheDocument::with_character(id.clone(), record_named("Mialee"), None);

        let json = serde_json::to_string(&doc).expect("serialize");
        let back: CacheDocument = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, doc);
        assert_eq!(back.characters[&id].name, "Mialee");
    }

    #[test]
    fn characters_are_keyed_by_raw_id() {
        let id = CharacterId::new("42").expect("valid id");
        let doc = CacheDocument::with_character(id, record_named("Tordek"), None);
        let json = serde_json::to_value(&doc).expect("serialize");
        assert_eq!(json["characters"]["42"]["name"], "Tordek");
        assert_eq!(json["campaign"], serde_json::Value::Null);
    }

    #[test]
    fn record_defaults_cover_missing_fields() {
        let record: CharacterRecord = serde_json::from_str(r#"{"name": "Ember"}"#)
            .expect("deserialize");
        assert_eq!(record.name, "Ember");
        assert!(record.spells.is_empty());
        assert!(record.inventory.is_empty());
        assert!(record.custom_items.is_empty());
        assert!(record.focus.is_none());
    }
}
