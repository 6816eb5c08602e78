//! View builders.
//!
//! Every gated remote call is guarded by a mask check; issuing a gated
//! call without the grant is a contract violation upstream, so the guards
//! here are the single source of truth for what a view may fetch.

use std::collections::BTreeMap;

use crate::access::{AccessMask, PERMISSION_NAMES};
use crate::eveapi::{AuthedSession, EveClient, EveError};

use super::models::{AccessEntry, CharacterDetailView, CharacterListView, CharacterSummary};

/// Build the display access table: every named permission paired with
/// whether the mask grants it, in enumeration order.
#[must_use]
pub fn access_table(mask: AccessMask) -> Vec<AccessEntry> {
    PERMISSION_NAMES
        .iter()
        .map(|&(flag, name)| AccessEntry {
            name,
            granted: mask.has(flag),
        })
        .collect()
}

/// Build the character list view for a session.
///
/// With the Character Sheet grant, fetches one sheet per character in the
/// session's character map; without it, `charinfo` stays empty and no
/// sheet call is issued. Account status rides on the character-information
/// grant (bit 23); the enumeration's "Account Status" name is display-only.
pub async fn build_character_list_view(
    characters: &BTreeMap<i64, String>,
    mask: AccessMask,
    auth: &AuthedSession,
) -> Result<CharacterListView, EveError> {
    let access = access_table(mask);

    let mut charinfo = BTreeMap::new();
    if mask.has(AccessMask::CHARACTER_SHEET) {
        for &character_id in characters.keys() {
            let sheet = auth.character_sheet(character_id).await?;
            charinfo.insert(character_id, CharacterSummary::from_sheet(&sheet));
        }
    }

    let status = if mask.has(AccessMask::CHARACTER_INFO) {
        Some(auth.account_status().await?)
    } else {
        None
    };

    Ok(CharacterListView {
        access,
        charinfo,
        status,
    })
}

/// Build the single-character detail view.
///
/// Precondition: the session's mask grants Character Sheet; the caller
/// redirects otherwise and never invokes this. The corporation record and
/// the skill tree are public and fetched through the service-level client;
/// the skill list is flattened from the tree's group→skill nesting on
/// every call.
pub async fn build_character_detail_view(
    character_id: i64,
    auth: &AuthedSession,
    service: &EveClient,
) -> Result<CharacterDetailView, EveError> {
    let charinfo = auth.character_info(character_id).await?;
    let character = auth.character_sheet(character_id).await?;
    let corp = service.corporation_sheet(character.corporation_id).await?;
    let tree = service.skill_tree().await?;

    let mut skill_list = BTreeMap::new();
    for group in &tree.skill_groups {
        for skill in &group.skills {
            skill_list.insert(skill.type_id, skill.type_name.clone());
        }
    }

    Ok(CharacterDetailView {
        character,
        corp,
        skill_list,
        charinfo,
    })
}
