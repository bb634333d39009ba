use std::collections::HashMap;
use std::sync::Arc;

use super::list::DocumentList;
use crate::document::Document;
use crate::types::identifiers::DocumentId;

/// Documents keyed by id. Adding an id twice keeps the first entry.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    inner: HashMap<DocumentId, Arc<Document>>,
}

impl DocumentSet {
    pub fn new() -> Self {
        DocumentSet {
            inner: HashMap::new(),
        }
    }

    pub fn add(&mut self, doc: &Arc<Document>) {
        self.inner
            .entry(doc.id.clone())
            .or_insert_with(|| Arc::clone(doc));
    }

    pub fn union(&mut self, other: &DocumentSet) {
        for doc in other.inner.values() {
            self.add(doc);
        }
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.inner.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Members in no particular order; sort before presenting.
    pub fn values(&self) -> DocumentList {
        self.inner.values().cloned().collect()
    }
}
