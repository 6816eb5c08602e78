//! Page-level error type.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::eveapi::EveError;

/// Errors that escape a page handler.
///
/// Credential rejection and missing input never reach this type; they are
/// recovered into the retry prompt at the submission handler. Everything
/// here renders the generic failure page.
#[derive(Debug, Error)]
pub enum PageError {
    /// An account API call failed.
    #[error("api call failed: {0}")]
    Api(#[from] EveError),

    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Render(#[from] askama::Error),

    /// The session payload could not be encoded.
    #[error("session encoding failed: {0}")]
    Session(#[from] serde_json::Error),
}

/// The generic failure page. Deliberately static: the error path must not
/// depend on the template pipeline it may be reporting on.
const FAILURE_HTML: &str = r"<!doctype html>
<html lang='en'>
  <head><meta charset='utf-8'><title>Keywatch</title></head>
  <body>
    <h1>Something went wrong</h1>
    <p>The account API could not be reached or returned an unexpected
    response. Please try again in a moment.</p>
    <p><a href='/'>Back to the key form</a></p>
  </body>
</html>
";

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(FAILURE_HTML)).into_response()
    }
}

/// Result type for page handlers.
pub type PageResult<T> = Result<T, PageError>;
