//! Campaign metadata shared by all characters in a batch.

use serde::{Deserialize, Serialize};

/// Metadata about the campaign the fetched characters belong to.
///
/// Captured once per batch fetch, from the first character whose payload
/// carries a campaign object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub dm_username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_dm_username_in_camel_case() {
        let campaign = CampaignMetadata {
            name: "Curse of Strahd".to_string(),
            description: "Gothic horror".to_string(),
            dm_username: "barovian_dm".to_string(),
        };
        let json = serde_json::to_value(&campaign).expect("serialize");
        assert_eq!(json["dmUsername"], "barovian_dm");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let campaign: CampaignMetadata =
            serde_json::from_str(r#"{"name": "Lost Mine"}"#).expect("deserialize");
        assert_eq!(campaign.name, "Lost Mine");
        assert_eq!(campaign.description, "");
        assert_eq!(campaign.dm_username, "");
    }
}
