//! SpellTrackr domain types.
//!
//! Pure types and parsing rules for spell component tracking: no IO, no
//! transport. The engine crate owns everything that talks to the network or
//! the filesystem.

pub mod campaign;
pub mod character;
pub mod error;
pub mod ids;
pub mod items;
pub mod spells;

pub use campaign::CampaignMetadata;
pub use character::{CacheDocument, CharacterRecord, CustomComponentCounts, InventoryCounts};
pub use error::DomainError;
pub use ids::CharacterId;
pub use items::{parse_custom_component, FocusItem, SPELL_COMPONENT_PREFIX};
pub use spells::SpellComponentInfo;
