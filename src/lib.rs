//! Copydeck Core - Rust business logic for the phrase lookup-and-copy tool
//!
//! This library implements the suggestion engine (normalization + ranking)
//! and the catalog/result-log state model. Rendering, keyboard plumbing and
//! the actual clipboard/storage/file platform calls live behind the
//! collaborator traits in [`interface`].

pub mod catalog;
pub mod export;
pub mod interface;
pub mod normalize;
pub mod persist;
pub mod ranking;
pub mod result_log;
pub mod selection;
mod store;

pub use interface::*;
pub use store::PhraseStore;
