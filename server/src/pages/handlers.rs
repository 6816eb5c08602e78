//! Portal page handlers.
//!
//! Session lifecycle lives entirely here: credential submission moves
//! Anonymous → Authenticated, `/clear` moves back. Gated views redirect
//! instead of erroring when the requester is Anonymous or lacks the grant.

use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::PrivateCookieJar;
use serde::Deserialize;
use tracing::info;

use super::error::PageResult;
use super::templates::{CharacterPage, CharactersPage, IndexPage};
use crate::access::AccessMask;
use crate::api::AppState;
use crate::eveapi::EveError;
use crate::session::Session;
use crate::views;

/// Retry prompt when a field is empty at submission.
const MSG_MISSING_INPUT: &str = "Please provide a Key and verification code";

/// Retry prompt when the key service rejects the credential.
const MSG_INVALID_KEY: &str = "Invalid KeyID/vCode, please try another";

/// Credential submission form.
#[derive(Debug, Deserialize)]
pub struct SubmitKeyForm {
    /// The key's numeric identifier, as entered.
    pub key_id: String,
    /// The key's verification code, as entered.
    pub verification_code: String,
}

/// GET /: the credential form, or straight to the character list when a
/// session already exists.
#[tracing::instrument(skip_all)]
pub async fn index(jar: PrivateCookieJar) -> PageResult<Response> {
    if Session::load(&jar).is_some() {
        return Ok(Redirect::to("/characters").into_response());
    }
    Ok(Html(IndexPage { flash: None }.render()?).into_response())
}

/// POST /: submit a credential pair.
///
/// Empty input and rejected credentials re-render the form with a retry
/// prompt and leave the Anonymous state untouched. On success the session
/// is established all-or-nothing from the key-info response.
#[tracing::instrument(skip_all)]
pub async fn submit_key(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<SubmitKeyForm>,
) -> PageResult<Response> {
    let key_id = form.key_id.trim();
    let vcode = form.verification_code.trim();

    if key_id.is_empty() || vcode.is_empty() {
        let page = IndexPage {
            flash: Some(MSG_MISSING_INPUT),
        };
        return Ok(Html(page.render()?).into_response());
    }

    let auth = state.eve.auth(key_id, vcode);
    match auth.api_key_info().await {
        Ok(info) => {
            info!(characters = info.characters.len(), "key validated");
            let session = Session::establish(key_id.to_string(), vcode.to_string(), &info);
            let jar = session.store(jar)?;
            Ok((jar, Redirect::to("/characters")).into_response())
        }
        Err(EveError::InvalidKey | EveError::Api { .. }) => {
            let page = IndexPage {
                flash: Some(MSG_INVALID_KEY),
            };
            Ok(Html(page.render()?).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// GET /characters: the character list view.
#[tracing::instrument(skip_all)]
pub async fn character_list(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> PageResult<Response> {
    let Some(session) = Session::load(&jar) else {
        return Ok(Redirect::to("/").into_response());
    };

    let auth = state.eve.auth(&session.key_id, &session.verification_code);
    let view =
        views::build_character_list_view(&session.characters, session.access_mask, &auth).await?;
    let page = CharactersPage::new(&session.characters, view);
    Ok(Html(page.render()?).into_response())
}

/// GET /characters/{character_id}: single-character detail.
///
/// Requires the Character Sheet grant; without it the requester is sent
/// back to the list rather than served a partial page.
#[tracing::instrument(skip_all)]
pub async fn character_detail(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Path(character_id): Path<i64>,
) -> PageResult<Response> {
    let Some(session) = Session::load(&jar) else {
        return Ok(Redirect::to("/").into_response());
    };
    if !session.access_mask.has(AccessMask::CHARACTER_SHEET) {
        return Ok(Redirect::to("/characters").into_response());
    }

    let auth = state.eve.auth(&session.key_id, &session.verification_code);
    let view = views::build_character_detail_view(character_id, &auth, &state.eve).await?;
    let page = CharacterPage::new(view);
    Ok(Html(page.render()?).into_response())
}

/// GET /clear: discard the session and return to the form. Idempotent.
#[tracing::instrument(skip_all)]
pub async fn clear_session(jar: PrivateCookieJar) -> (PrivateCookieJar, Redirect) {
    (Session::clear(jar), Redirect::to("/"))
}
