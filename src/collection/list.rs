use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use crate::document::Document;

/// Ordered sequence of shared documents.
///
/// Every list the repository returns is sorted newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentList {
    inner: Vec<Arc<Document>>,
}

impl DocumentList {
    pub fn new() -> Self {
        DocumentList { inner: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DocumentList {
            inner: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, doc: Arc<Document>) {
        self.inner.push(doc);
    }

    /// Newest first. Stable: equal timestamps keep their insertion order.
    pub fn sort_by_recency(&mut self) {
        self.inner
            .sort_by(|a, b| b.published_at().cmp(&a.published_at()));
        debug_assert!(self.is_recency_sorted());
    }

    /// Entries not published after `now`, order preserved.
    pub fn visible_before(&self, now: DateTime<Utc>) -> DocumentList {
        self.inner
            .iter()
            .filter(|doc| doc.is_visible_at(now))
            .cloned()
            .collect()
    }

    pub fn is_recency_sorted(&self) -> bool {
        self.inner
            .windows(2)
            .all(|w| w[0].published_at() >= w[1].published_at())
    }

    pub fn titles(&self) -> Vec<&str> {
        self.inner.iter().map(|doc| doc.title.as_str()).collect()
    }

    pub fn into_vec(self) -> Vec<Arc<Document>> {
        self.inner
    }
}

impl Deref for DocumentList {
    type Target = [Arc<Document>];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl From<Vec<Arc<Document>>> for DocumentList {
    fn from(inner: Vec<Arc<Document>>) -> Self {
        DocumentList { inner }
    }
}

impl FromIterator<Arc<Document>> for DocumentList {
    fn from_iter<I: IntoIterator<Item = Arc<Document>>>(iter: I) -> Self {
        DocumentList {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DocumentList {
    type Item = Arc<Document>;
    type IntoIter = std::vec::IntoIter<Arc<Document>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a DocumentList {
    type Item = &'a Arc<Document>;
    type IntoIter = std::slice::Iter<'a, Arc<Document>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
