//! Loaded, indexed and read-only set of published documents.
//!
//! A [`Repository`] is built once by [`RepositoryBuilder`] and never mutated,
//! so any number of threads may query it at once. Reloading means building a
//! new one and swapping it in through [`SharedRepository`].

pub mod builder;
mod index;
pub mod query;
pub mod shared;

use std::sync::Arc;

use crate::collection::DocumentList;
use crate::tokenize::StemmingPipeline;
use index::Indices;

pub use builder::{BuildError, LoadCause, RepositoryBuilder};
pub use query::QueryError;
pub use shared::SharedRepository;

#[derive(Debug)]
pub struct Repository<T = StemmingPipeline> {
    /// Published documents, newest first.
    documents: DocumentList,
    indices: Indices,
    pipeline: Arc<T>,
    fingerprint: String,
}

impl Repository {
    /// Load `dir` with the default configuration.
    pub fn load(dir: impl AsRef<std::path::Path>) -> Result<Self, BuildError> {
        RepositoryBuilder::default().load(dir.as_ref())
    }
}

impl<T> Repository<T> {
    /// Number of published documents, scheduled ones included.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Canonical list, unfiltered by visibility.
    pub fn documents(&self) -> &DocumentList {
        &self.documents
    }

    /// Hash of the config and every indexed document's content version.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.indices.category.keys().map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.indices.tag.keys().map(String::as_str)
    }
}
