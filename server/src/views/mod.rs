//! View building.
//!
//! Turns a session's character set plus its access mask into the view
//! models the portal pages render, issuing only the remote calls the mask
//! permits. Remote errors are never caught here; they propagate to the
//! page layer.

pub mod builder;
pub mod models;

pub use builder::{access_table, build_character_detail_view, build_character_list_view};
pub use models::{AccessEntry, CharacterDetailView, CharacterListView, CharacterSummary};
