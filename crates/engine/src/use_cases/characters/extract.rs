//! Character payload extraction.
//!
//! Turns one raw upstream document into the tracker's [`CharacterRecord`]:
//! a flattened spell list with component facts, inventory counts, custom
//! spell components, and the spellcasting focus if the character carries one.

use spelltrackr_domain::{
    parse_custom_component, CampaignMetadata, CharacterId, CharacterRecord, FocusItem,
    SpellComponentInfo,
};

use crate::infrastructure::payload::{CharacterData, CharacterEnvelope, SpellEntry};

use super::error::CharacterDataError;

/// One character's record plus the campaign metadata found in its payload.
///
/// Campaign data rides along separately so batch operations can capture it
/// once, from the first character that carries it.
#[derive(Debug, Clone)]
pub struct ExtractedCharacter {
    pub record: CharacterRecord,
    pub campaign: Option<CampaignMetadata>,
}

/// Extract the tracker record from one raw character payload.
///
/// Fails with [`CharacterDataError::EmptyPayload`] when the document carries
/// no character data.
pub fn extract_character(
    envelope: CharacterEnvelope,
    id: &CharacterId,
) -> Result<ExtractedCharacter, CharacterDataError> {
    let data = envelope
        .data
        .ok_or_else(|| CharacterDataError::EmptyPayload(id.clone()))?;

    let mut record = CharacterRecord {
        name: data.name.clone().unwrap_or_default(),
        spells: build_spell_list(&data),
        ..Default::default()
    };

    for entry in &data.inventory {
        let definition = &entry.definition;
        let Some(name) = definition.name.as_deref().filter(|n| !n.is_empty()) else {
            // Unnamed entries are unrenderable; nothing to track.
            continue;
        };
        if record.focus.is_none() && FocusItem::subtype_is_focus(definition.sub_type.as_deref()) {
            record.focus = Some(FocusItem {
                name: name.to_string(),
                item_type: definition.item_type.clone().unwrap_or_default(),
                sub_type: definition.sub_type.clone().unwrap_or_default(),
                description: definition.description.clone().unwrap_or_default(),
            });
        }
        // The focus still counts as inventory - a holy symbol in the pack is
        // a holy symbol on the sheet.
        let quantity = definition.quantity.unwrap_or(1);
        *record.inventory.entry(name.to_string()).or_insert(0) += quantity;
    }

    for item in &data.custom_items {
        let Some(name) = item.name.as_deref() else {
            continue;
        };
        if let Some((component, amount)) = parse_custom_component(name) {
            // Duplicate component names overwrite rather than accumulate.
            record.custom_items.insert(component, amount);
        }
    }

    let campaign = data.campaign.as_ref().map(|c| CampaignMetadata {
        name: c.name.clone().unwrap_or_default(),
        description: c.description.clone().unwrap_or_default(),
        dm_username: c.dm_username.clone().unwrap_or_default(),
    });

    Ok(ExtractedCharacter { record, campaign })
}

/// Flatten all spell sources into one list, in a fixed order:
/// class-leveling spells, then race-granted, then class-specific.
/// No deduplication, no sorting.
fn build_spell_list(data: &CharacterData) -> Vec<SpellComponentInfo> {
    data.class_spells
        .iter()
        .flat_map(|group| group.spells.iter())
        .chain(data.spells.race.iter())
        .chain(data.spells.class_spells.iter())
        .map(parse_spell)
        .collect()
}

fn parse_spell(entry: &SpellEntry) -> SpellComponentInfo {
    SpellComponentInfo::parse(
        entry.definition.name.clone().unwrap_or_default(),
        entry.definition.components_description.as_deref(),
    )
}
