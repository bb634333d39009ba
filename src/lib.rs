//! In-memory repository of markdown posts.
//!
//! `postindex` loads a directory of front-matter documents, keeps the
//! published ones newest first, and builds category, tag, slug and full-text
//! indices over them in one pass. The result is immutable: queries never
//! mutate shared state and every list query hides documents scheduled after
//! the caller supplied `now`.

pub mod collection;
pub mod config;
pub mod document;
pub mod repository;
pub mod tokenize;
pub mod types;

pub use collection::{DocumentList, DocumentSet};
pub use config::{IndexConfig, Stemmer};
pub use document::{Document, DocumentError};
pub use repository::{BuildError, QueryError, Repository, RepositoryBuilder, SharedRepository};
pub use tokenize::{StemmingPipeline, TokenPipeline};
