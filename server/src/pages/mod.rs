//! Portal pages.
//!
//! Server-rendered HTML surface: the credential form, the character list
//! (access table, per-character summary, optional account status), the
//! single-character detail view, and session clearing.

pub mod error;
pub mod handlers;
pub mod router;
pub mod templates;

pub use error::{PageError, PageResult};
pub use router::router;
