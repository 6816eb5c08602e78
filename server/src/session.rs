//! Per-requester session state.
//!
//! The session is the only mutable state in the system: a credential pair,
//! the access mask the key-info call granted it, and the key's character
//! set. All four fields are captured together at login and frozen until the
//! session is cleared. There is no refresh, renewal, or expiry path.
//!
//! Transport is one encrypted HTTP-only cookie (the jar's key comes from
//! configuration). An absent or undecodable cookie is simply Anonymous.

use std::collections::BTreeMap;

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use serde::{Deserialize, Serialize};

use crate::access::AccessMask;
use crate::eveapi::KeyInfo;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "kw_session";

/// An authenticated session record.
///
/// Constructed all-or-nothing by [`Session::establish`]; partial population
/// is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The submitted keyID.
    pub key_id: String,
    /// The submitted verification code.
    pub verification_code: String,
    /// Access mask granted to the key, frozen at login.
    pub access_mask: AccessMask,
    /// characterID → display name, frozen at login.
    pub characters: BTreeMap<i64, String>,
}

impl Session {
    /// Establish a session from a validated credential and its key-info
    /// response.
    #[must_use]
    pub fn establish(key_id: String, verification_code: String, info: &KeyInfo) -> Self {
        let characters = info
            .characters
            .iter()
            .map(|c| (c.character_id, c.character_name.clone()))
            .collect();

        Self {
            key_id,
            verification_code,
            access_mask: AccessMask::from_raw(info.access_mask),
            characters,
        }
    }

    /// Load the session from the cookie jar.
    ///
    /// Returns `None` for an absent or undecodable cookie; both mean
    /// Anonymous.
    #[must_use]
    pub fn load(jar: &PrivateCookieJar) -> Option<Self> {
        let cookie = jar.get(SESSION_COOKIE)?;
        serde_json::from_str(cookie.value()).ok()
    }

    /// Write the session into the jar, replacing any previous session.
    pub fn store(&self, jar: PrivateCookieJar) -> Result<PrivateCookieJar, serde_json::Error> {
        let payload = serde_json::to_string(self)?;
        let cookie = Cookie::build((SESSION_COOKIE, payload))
            .http_only(true)
            .same_site(SameSite::Lax)
            .path("/")
            .build();
        Ok(jar.add(cookie))
    }

    /// Discard any session, returning to Anonymous. Idempotent.
    #[must_use]
    pub fn clear(jar: PrivateCookieJar) -> PrivateCookieJar {
        jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
    }
}
