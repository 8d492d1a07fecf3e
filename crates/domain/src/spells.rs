//! Spell component parsing.
//!
//! The upstream character service describes material components as free text
//! (e.g. "a pinch of bat guano and sulfur consumed by the casting"). The
//! tracker only needs three facts out of that text: are the components
//! consumed, do they carry a gold cost, and - when neither - will a
//! spellcasting focus stand in for them.

use serde::{Deserialize, Serialize};

/// Substring that marks components as consumed by the casting.
const CONSUME_TEXT: &str = "consume";

/// Substring that marks components as carrying a gold-piece cost.
const GP_COST_TEXT: &str = "gp";

/// Component facts derived from one spell's material component description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellComponentInfo {
    /// Spell display name.
    pub name: String,
    /// The component description text, verbatim; empty when the spell has none.
    pub components_description: String,
    /// True iff the description mentions consumption (case-insensitive).
    pub components_are_consumed: bool,
    /// True iff the description mentions a gp cost (case-insensitive).
    pub components_have_cost: bool,
    /// True iff a focus item satisfies the component requirement.
    pub focus_will_work: bool,
}

impl SpellComponentInfo {
    /// Parse a component description into its tracked facts.
    ///
    /// An absent or empty description means the spell needs nothing a focus
    /// could not provide: `{consumed: false, cost: false, focus_will_work: true}`.
    pub fn parse(name: impl Into<String>, description: Option<&str>) -> Self {
        let name = name.into();
        let description = description.unwrap_or_default();
        if description.is_empty() {
            return Self {
                name,
                components_description: String::new(),
                components_are_consumed: false,
                components_have_cost: false,
                focus_will_work: true,
            };
        }

        let lowered = description.to_lowercase();
        let consumed = lowered.contains(CONSUME_TEXT);
        let has_cost = lowered.contains(GP_COST_TEXT);
        Self {
            name,
            components_description: description.to_string(),
            components_are_consumed: consumed,
            components_have_cost: has_cost,
            focus_will_work: !consumed && !has_cost,
        }
    }
}
