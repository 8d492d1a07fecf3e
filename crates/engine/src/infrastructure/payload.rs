//! Partial schema of the upstream character document.
//!
//! The character service returns a large JSON document; only the slices
//! below matter for component tracking. Every field is defaulted so a
//! missing or null field never fails deserialization - missing-field
//! behavior is an explicit, tested contract, not an accident of dictionary
//! lookups.

use serde::Deserialize;

/// Top-level envelope: `{"data": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CharacterEnvelope {
    #[serde(default)]
    pub data: Option<CharacterData>,
}

/// The character sheet slices the extractor reads.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterData {
    pub name: Option<String>,
    pub inventory: Vec<InventoryEntry>,
    pub custom_items: Vec<CustomItem>,
    pub spells: SpellBook,
    pub class_spells: Vec<ClassSpellGroup>,
    pub campaign: Option<CampaignInfo>,
}

/// One inventory entry; the catalog definition carries the display fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InventoryEntry {
    pub definition: ItemDefinition,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemDefinition {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub sub_type: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
}

/// A user-defined item outside the standard catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    pub name: Option<String>,
}

/// Race- and class-granted spells. Item-granted spells exist upstream but
/// are not tracked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpellBook {
    pub race: Vec<SpellEntry>,
    #[serde(rename = "class")]
    pub class_spells: Vec<SpellEntry>,
}

/// Spells chosen while leveling one class.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassSpellGroup {
    pub spells: Vec<SpellEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpellEntry {
    pub definition: SpellDefinition,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellDefinition {
    pub name: Option<String>,
    pub components_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub dm_username: Option<String>,
}
