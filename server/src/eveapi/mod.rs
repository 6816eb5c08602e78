//! Account API client.
//!
//! Thin typed client for the remote account API. Two connection kinds:
//! - [`EveClient`]: service-level, not bound to any credential; public
//!   records (corporation sheets, the skill tree).
//! - [`AuthedSession`]: bound to one keyID/verification-code pair;
//!   credential-gated records (key info, character sheets, account status).
//!
//! Every GET consults the injected [`ResponseCache`] handler first and
//! stores successful bodies back with the configured TTL. Caching policy
//! beyond the TTL is the store's business, not the client's.

pub mod cache;
pub mod client;
pub mod error;
pub mod types;

pub use cache::{MemoryCache, ResponseCache};
pub use client::{AuthedSession, EveClient};
pub use error::EveError;
pub use types::{
    AccountStatus, CharacterInfo, CharacterRef, CharacterSheet, CorporationSheet, KeyInfo,
    SkillGroup, SkillRecord, SkillTree, SkillType,
};
