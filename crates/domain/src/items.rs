//! Inventory item rules: focus detection and custom spell components.

use serde::{Deserialize, Serialize};

/// Reserved name prefix marking a custom item as a spell material component.
///
/// Custom items named `SMC:<component>:<amount>` are tracked separately from
/// regular inventory, e.g. `SMC:Bat Guano:5gp`.
pub const SPELL_COMPONENT_PREFIX: &str = "SMC";

/// Item subtypes that can replace non-costly, non-consumed material components.
const FOCUS_SUBTYPES: [&str; 3] = ["holy symbol", "arcane focus", "druidic focus"];

/// A spellcasting focus found in the character's inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub sub_type: String,
    pub description: String,
}

impl FocusItem {
    /// Whether an item subtype marks the item as a spellcasting focus.
    ///
    /// Matching is case-insensitive against a fixed three-value set.
    pub fn subtype_is_focus(sub_type: Option<&str>) -> bool {
        match sub_type {
            Some(sub_type) => FOCUS_SUBTYPES.contains(&sub_type.to_lowercase().as_str()),
            None => false,
        }
    }
}

/// Parse a custom item name into a (component, amount) pair.
///
/// Only names starting with [`SPELL_COMPONENT_PREFIX`] qualify, and the name
/// must split on `:` into at least three segments; segment 1 is the component
/// name, segment 2 the amount. Anything after the third segment is ignored.
pub fn parse_custom_component(name: &str) -> Option<(String, String)> {
    if !name.starts_with(SPELL_COMPONENT_PREFIX) {
        return None;
    }
    let mut segments = name.split(':');
    let _prefix = segments.next()?;
    let component = segments.next()?;
    let amount = segments.next()?;
    Some((component.to_string(), amount.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_focus_subtypes_case_insensitively() {
        assert!(FocusItem::subtype_is_focus(Some("Holy Symbol")));
        assert!(FocusItem::subtype_is_focus(Some("arcane focus")));
        assert!(FocusItem::subtype_is_focus(Some("DRUIDIC FOCUS")));
    }

    #[test]
    fn rejects_non_focus_subtypes() {
        assert!(!FocusItem::subtype_is_focus(Some("Wondrous item")));
        assert!(!FocusItem::subtype_is_focus(Some("")));
        assert!(!FocusItem::subtype_is_focus(None));
    }

    #[test]
    fn parses_component_and_amount() {
        let (component, amount) = parse_custom_component("SMC:Bat Guano:5gp").expect("parsed");
        assert_eq!(component, "Bat Guano");
        assert_eq!(amount, "5gp");
    }

    #[test]
    fn ignores_names_without_the_prefix() {
        assert_eq!(parse_custom_component("Rope:Hemp:50ft"), None);
    }

    #[test]
    fn ignores_names_with_too_few_segments() {
        assert_eq!(parse_custom_component("SMC:Bat Guano"), None);
        assert_eq!(parse_custom_component("SMC"), None);
    }

    #[test]
    fn extra_segments_beyond_the_amount_are_ignored() {
        let (component, amount) =
            parse_custom_component("SMC:Diamond Dust:100gp:note").expect("parsed");
        assert_eq!(component, "Diamond Dust");
        assert_eq!(amount, "100gp");
    }

    #[test]
    fn focus_item_serializes_with_upstream_keys() {
        let focus = FocusItem {
            name: "Amulet".to_string(),
            item_type: "Gear".to_string(),
            sub_type: "Holy Symbol".to_string(),
            description: "A holy symbol on a chain".to_string(),
        };
        let json = serde_json::to_value(&focus).expect("serialize");
        assert_eq!(json["name"], "Amulet");
        assert_eq!(json["type"], "Gear");
        assert_eq!(json["subType"], "Holy Symbol");
        assert_eq!(json["description"], "A holy symbol on a chain");
    }
}
