use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a character on the upstream character service.
///
/// Upstream ids are opaque strings (numeric today, but nothing here depends
/// on that). The only invariant is non-emptiness; ids come straight from
/// user input at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("character id cannot be empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CharacterId> for String {
    fn from(value: CharacterId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_empty_id() {
        let id = CharacterId::new("146993912").expect("valid id");
        assert_eq!(id.as_str(), "146993912");
        assert_eq!(id.to_string(), "146993912");
    }

    #[test]
    fn rejects_empty_id() {
        assert!(CharacterId::new("").is_err());
        assert!(CharacterId::new("   ").is_err());
    }

    #[test]
    fn serializes_transparently() {
        let id = CharacterId::new("42").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"42\"");
        let back: CharacterId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
