//! Template contexts for the portal pages.
//!
//! All numeric and timestamp fields are pre-rendered here with the two
//! display transforms from [`crate::util`], so the templates stay plain
//! markup. Balances drop their fractional part before grouping.

use std::collections::BTreeMap;

use askama::Template;

use crate::eveapi::AccountStatus;
use crate::util::{format_timestamp, group_thousands};
use crate::views::{AccessEntry, CharacterDetailView, CharacterListView, CharacterSummary};

/// The credential form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    /// One-shot retry prompt shown above the form.
    pub flash: Option<&'static str>,
}

/// The character list page.
#[derive(Template)]
#[template(path = "characters.html")]
pub struct CharactersPage {
    pub access: Vec<AccessEntry>,
    pub characters: Vec<CharacterRow>,
    pub status: Option<StatusRow>,
}

/// One character row on the list page.
pub struct CharacterRow {
    pub character_id: i64,
    pub name: String,
    /// Absent when the mask lacks the Character Sheet grant.
    pub summary: Option<SummaryRow>,
}

/// Pre-rendered character summary cells.
pub struct SummaryRow {
    pub corporation: String,
    pub balance: String,
    pub total_skill_points: String,
    pub alliance: Option<String>,
}

/// Pre-rendered account status cells.
pub struct StatusRow {
    pub paid_until: String,
    pub create_date: String,
    pub logon_count: String,
    pub logon_minutes: String,
}

impl CharactersPage {
    /// Join the session's character names with the freshly built view.
    #[must_use]
    pub fn new(characters: &BTreeMap<i64, String>, view: CharacterListView) -> Self {
        let characters = characters
            .iter()
            .map(|(&character_id, name)| CharacterRow {
                character_id,
                name: name.clone(),
                summary: view.charinfo.get(&character_id).map(SummaryRow::new),
            })
            .collect();

        Self {
            access: view.access,
            characters,
            status: view.status.as_ref().map(StatusRow::new),
        }
    }
}

impl SummaryRow {
    fn new(summary: &CharacterSummary) -> Self {
        Self {
            corporation: summary.corporation.clone(),
            balance: group_thousands(summary.balance.trunc() as i64),
            total_skill_points: group_thousands(summary.total_skill_points),
            alliance: summary.alliance.clone(),
        }
    }
}

impl StatusRow {
    fn new(status: &AccountStatus) -> Self {
        Self {
            paid_until: format_timestamp(status.paid_until),
            create_date: format_timestamp(status.create_date),
            logon_count: group_thousands(status.logon_count),
            logon_minutes: group_thousands(status.logon_minutes),
        }
    }
}

/// The single-character detail page.
#[derive(Template)]
#[template(path = "character.html")]
pub struct CharacterPage {
    pub name: String,
    pub race: String,
    pub bloodline: String,
    pub security_status: String,
    pub corporation: String,
    pub ticker: String,
    pub ceo: String,
    pub member_count: String,
    pub tax_rate: String,
    pub alliance: Option<String>,
    pub balance: String,
    pub total_skill_points: String,
    pub skills: Vec<SkillRow>,
}

/// One trained skill on the detail page.
pub struct SkillRow {
    pub name: String,
    pub level: i32,
    pub skillpoints: String,
}

impl CharacterPage {
    /// Flatten a detail view into pre-rendered cells.
    #[must_use]
    pub fn new(view: CharacterDetailView) -> Self {
        let total_skill_points: i64 = view.character.skills.iter().map(|s| s.skillpoints).sum();

        let skills = view
            .character
            .skills
            .iter()
            .map(|skill| SkillRow {
                name: view
                    .skill_list
                    .get(&skill.type_id)
                    .cloned()
                    .unwrap_or_else(|| format!("Type {}", skill.type_id)),
                level: skill.level,
                skillpoints: group_thousands(skill.skillpoints),
            })
            .collect();

        Self {
            name: view.character.name,
            race: view.charinfo.race,
            bloodline: view.charinfo.bloodline,
            security_status: format!("{:.1}", view.charinfo.security_status),
            corporation: view.corp.corporation_name,
            ticker: view.corp.ticker,
            ceo: view.corp.ceo_name,
            member_count: group_thousands(view.corp.member_count),
            tax_rate: format!("{:.1}%", view.corp.tax_rate * 100.0),
            alliance: view
                .character
                .alliance_name
                .filter(|alliance| !alliance.is_empty()),
            balance: group_thousands(view.character.balance.trunc() as i64),
            total_skill_points: group_thousands(total_skill_points),
            skills,
        }
    }
}
