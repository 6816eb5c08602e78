//! View models assembled by the builders.

use std::collections::BTreeMap;

use crate::eveapi::{AccountStatus, CharacterInfo, CharacterSheet, CorporationSheet};

/// One row of the access table: a permission's display name and whether
/// the session's mask grants it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessEntry {
    pub name: &'static str,
    pub granted: bool,
}

/// Per-character summary for the character list page.
///
/// Derived fresh from the character sheet on every view request; never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSummary {
    /// Corporation display name.
    pub corporation: String,
    /// Wallet balance in ISK.
    pub balance: f64,
    /// Sum of skillpoints across all owned skills.
    pub total_skill_points: i64,
    /// Alliance name; omitted entirely when the sheet supplies none.
    pub alliance: Option<String>,
}

impl CharacterSummary {
    /// Shape a summary from a character sheet.
    ///
    /// The alliance field is set only when the sheet carries a non-empty
    /// textual value; no sentinel is ever synthesized.
    #[must_use]
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        Self {
            corporation: sheet.corporation_name.clone(),
            balance: sheet.balance,
            total_skill_points: sheet.skills.iter().map(|s| s.skillpoints).sum(),
            alliance: sheet
                .alliance_name
                .clone()
                .filter(|name| !name.is_empty()),
        }
    }
}

/// The character list view: access table, per-character summaries, and the
/// optional account status.
#[derive(Debug)]
pub struct CharacterListView {
    /// 27 `(name, granted)` rows in enumeration order.
    pub access: Vec<AccessEntry>,
    /// characterID → summary. Empty when the mask lacks Character Sheet.
    pub charinfo: BTreeMap<i64, CharacterSummary>,
    /// Present only when the mask permits the status fetch.
    pub status: Option<AccountStatus>,
}

/// The single-character detail view.
#[derive(Debug)]
pub struct CharacterDetailView {
    /// The character's own sheet.
    pub character: CharacterSheet,
    /// The owning corporation's public record.
    pub corp: CorporationSheet,
    /// typeID → typeName, flattened from the skill tree.
    pub skill_list: BTreeMap<i64, String>,
    /// Public character information record.
    pub charinfo: CharacterInfo,
}
