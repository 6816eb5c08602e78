//! Account API error types.

use thiserror::Error;

/// Errors raised by account API calls.
///
/// View building never catches these; they propagate to the page layer,
/// which renders a generic failure page. The one exception is credential
/// submission, where [`EveError::InvalidKey`] and [`EveError::Api`] are
/// recovered into a retry prompt.
#[derive(Debug, Error)]
pub enum EveError {
    /// The key service rejected the keyID/verification-code pair.
    #[error("invalid keyID or verification code")]
    InvalidKey,

    /// The API returned an error record for an otherwise-valid request.
    #[error("api error {status}: {message}")]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// Error text from the response body.
        message: String,
    },

    /// Network or protocol failure before a response was obtained.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected record shape.
    #[error("malformed api response: {0}")]
    Decode(#[from] serde_json::Error),
}
