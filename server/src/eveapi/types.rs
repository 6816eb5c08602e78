//! Wire types for account API responses.
//!
//! Field names follow the API's camelCase convention; identifier fields
//! keep the service's `...ID` capitalization.

use serde::{Deserialize, Serialize};

/// Result of the key-info call: the granted access mask and the characters
/// associated with the key.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInfo {
    /// Raw access mask; bit *i* grants permission *i*.
    pub access_mask: u64,
    /// Characters the key exposes.
    pub characters: Vec<CharacterRef>,
}

/// One character associated with an API key.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRef {
    #[serde(rename = "characterID")]
    pub character_id: i64,
    #[serde(rename = "characterName")]
    pub character_name: String,
}

/// A character's own sheet: corporation, wallet, and owned skills.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSheet {
    #[serde(rename = "characterID")]
    pub character_id: i64,
    pub name: String,
    #[serde(rename = "corporationID")]
    pub corporation_id: i64,
    pub corporation_name: String,
    /// Wallet balance in ISK.
    pub balance: f64,
    /// Alliance name; absent when the corporation is unallied.
    #[serde(default)]
    pub alliance_name: Option<String>,
    /// Owned skills.
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
}

/// One trained skill on a character sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillRecord {
    #[serde(rename = "typeID")]
    pub type_id: i64,
    pub skillpoints: i64,
    pub level: i32,
}

/// Public character information record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInfo {
    #[serde(rename = "characterID")]
    pub character_id: i64,
    pub character_name: String,
    pub race: String,
    pub bloodline: String,
    pub corporation: String,
    /// Alliance name; absent when unallied.
    #[serde(default)]
    pub alliance: Option<String>,
    pub security_status: f64,
}

/// Public corporation record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporationSheet {
    #[serde(rename = "corporationID")]
    pub corporation_id: i64,
    pub corporation_name: String,
    pub ticker: String,
    pub ceo_name: String,
    pub member_count: i64,
    pub tax_rate: f64,
}

/// The full skill tree: every group and its constituent skills.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTree {
    pub skill_groups: Vec<SkillGroup>,
}

/// One group of skills in the tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    #[serde(rename = "groupID")]
    pub group_id: i64,
    pub group_name: String,
    pub skills: Vec<SkillType>,
}

/// A skill type: the identifier-to-name pair the detail view flattens.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillType {
    #[serde(rename = "typeID")]
    pub type_id: i64,
    pub type_name: String,
}

/// Account status record, shown when the mask permits.
///
/// Timestamps are unix seconds; the page layer renders them as calendar
/// date-times.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatus {
    pub paid_until: i64,
    pub create_date: i64,
    pub logon_count: i64,
    pub logon_minutes: i64,
}

/// Error record the API returns with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorRecord,
}

/// The error payload inside [`ApiErrorBody`].
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorRecord {
    pub code: u16,
    pub text: String,
}
