//! Account API connections.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use super::cache::ResponseCache;
use super::error::EveError;
use super::types::{
    AccountStatus, ApiErrorBody, CharacterInfo, CharacterSheet, CorporationSheet, KeyInfo,
    SkillTree,
};
use crate::config::Config;

/// Service-level connection to the account API.
///
/// Not bound to any credential; exposes public records and mints
/// credential-bound [`AuthedSession`]s. Constructed once at startup and
/// injected through application state.
#[derive(Clone)]
pub struct EveClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<dyn ResponseCache>,
    cache_ttl: Duration,
}

impl EveClient {
    /// Build a client from configuration with the given cache handler.
    pub fn new(config: &Config, cache: Arc<dyn ResponseCache>) -> Result<Self, EveError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(concat!("keywatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cache,
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
        })
    }

    /// Bind a keyID/verification-code pair, yielding an authenticated
    /// session. No remote call is made until an operation is invoked.
    #[must_use]
    pub fn auth(&self, key_id: &str, vcode: &str) -> AuthedSession {
        AuthedSession {
            client: self.clone(),
            key_id: key_id.to_string(),
            vcode: vcode.to_string(),
        }
    }

    /// Public corporation record.
    pub async fn corporation_sheet(
        &self,
        corporation_id: i64,
    ) -> Result<CorporationSheet, EveError> {
        self.get_json(
            "/corp/CorporationSheet",
            &[("corporationID", corporation_id.to_string())],
        )
        .await
    }

    /// The full skill tree (every group and its skills).
    pub async fn skill_tree(&self) -> Result<SkillTree, EveError> {
        self.get_json("/eve/SkillTree", &[]).await
    }

    /// GET a JSON record, consulting the cache handler first.
    ///
    /// Only successful bodies are cached; error responses are mapped and
    /// returned without touching the store.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, EveError> {
        let key = cache_key(path, query);
        if let Some(body) = self.cache.get(&key) {
            debug!(path, "api response served from cache");
            return Ok(serde_json::from_str(&body)?);
        }

        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(map_failure(status.as_u16(), &body));
        }

        let record = serde_json::from_str(&body)?;
        self.cache.put(key, body, self.cache_ttl);
        Ok(record)
    }
}

/// Credential-bound connection to the account API.
///
/// Holds the keyID/verification-code pair for the duration of a request;
/// all operations append the credential to the query string.
pub struct AuthedSession {
    client: EveClient,
    key_id: String,
    vcode: String,
}

impl AuthedSession {
    /// The key-info call: the key's access mask and character list.
    ///
    /// A rejected credential surfaces as [`EveError::InvalidKey`].
    pub async fn api_key_info(&self) -> Result<KeyInfo, EveError> {
        self.get_json("/account/ApiKeyInfo", &[]).await
    }

    /// Account status record. Gated: callers must check the mask first.
    pub async fn account_status(&self) -> Result<AccountStatus, EveError> {
        self.get_json("/account/AccountStatus", &[]).await
    }

    /// A character's own sheet. Gated: callers must check the mask first.
    pub async fn character_sheet(&self, character_id: i64) -> Result<CharacterSheet, EveError> {
        self.get_json(
            "/char/CharacterSheet",
            &[("characterID", character_id.to_string())],
        )
        .await
    }

    /// Public character information record.
    pub async fn character_info(&self, character_id: i64) -> Result<CharacterInfo, EveError> {
        self.get_json(
            "/eve/CharacterInfo",
            &[("characterID", character_id.to_string())],
        )
        .await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, EveError> {
        let mut credentialed: Vec<(&str, String)> = vec![
            ("keyID", self.key_id.clone()),
            ("vCode", self.vcode.clone()),
        ];
        credentialed.extend_from_slice(query);
        self.client.get_json(path, &credentialed).await
    }
}

/// Cache key: request path plus its canonical query string. Cached bodies
/// are credential-scoped because the credential is part of the query.
fn cache_key(path: &str, query: &[(&str, String)]) -> String {
    let mut key = String::from(path);
    for (name, value) in query {
        key.push_str(if key.contains('?') { "&" } else { "?" });
        key.push_str(name);
        key.push('=');
        key.push_str(value);
    }
    key
}

/// Map a non-success response to the error taxonomy.
///
/// 401/403 mean the key service rejected the credential; anything else is
/// surfaced as an API error with whatever text the body carried.
fn map_failure(status: u16, body: &str) -> EveError {
    if status == 401 || status == 403 {
        return EveError::InvalidKey;
    }
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map_or_else(|_| body.trim().to_string(), |parsed| parsed.error.text);
    EveError::Api { status, message }
}
