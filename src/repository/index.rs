use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, warn};

use super::builder::BuildError;
use crate::collection::{DocumentList, DocumentSet};
use crate::document::Document;
use crate::tokenize::TokenPipeline;
use crate::types::identifiers::DocumentId;

/// Lookup structures derived from the canonical list. Immutable once built.
#[derive(Debug, Default)]
pub(crate) struct Indices {
    pub(crate) category: BTreeMap<String, DocumentList>,
    pub(crate) tag: BTreeMap<String, DocumentList>,
    pub(crate) search: HashMap<String, DocumentSet>,
    pub(crate) slug: HashMap<String, Arc<Document>>,
    /// Position in the canonical list; orders search results.
    pub(crate) position: HashMap<DocumentId, usize>,
}

impl Indices {
    /// Single pass over `documents`, which must already be newest first so
    /// every per-key list inherits that order.
    pub(crate) fn build<T>(documents: &DocumentList, pipeline: &T) -> Result<Self, BuildError>
    where
        T: TokenPipeline + ?Sized,
    {
        debug_assert!(documents.is_recency_sorted());

        let mut indices = Indices::default();
        for (position, doc) in documents.iter().enumerate() {
            if indices.position.insert(doc.id.clone(), position).is_some() {
                warn!(id = %doc.id, source = %doc.source, "duplicate document id");
                return Err(BuildError::DuplicateId { id: doc.id.clone() });
            }

            indices
                .category
                .entry(doc.category.clone())
                .or_default()
                .push(Arc::clone(doc));

            let mut seen = HashSet::new();
            for tag in doc.tags.iter().filter(|t| seen.insert(t.as_str())) {
                indices
                    .tag
                    .entry(tag.clone())
                    .or_default()
                    .push(Arc::clone(doc));
            }

            let plain = doc.plain_text();
            let mut fragments = vec![doc.title.as_str(), doc.description.as_str(), plain.as_str()];
            fragments.extend(doc.tags.iter().map(String::as_str));
            for token in pipeline.tokenize(&fragments) {
                indices.search.entry(token).or_default().add(doc);
            }

            if let Some(slug) = doc.canonical_slug() {
                match indices.slug.entry(slug.to_string()) {
                    Entry::Occupied(existing) => {
                        warn!(
                            slug,
                            first = %existing.get().id,
                            second = %doc.id,
                            "duplicate canonical slug"
                        );
                        return Err(BuildError::Conflict {
                            slug: slug.to_string(),
                            first: existing.get().id.clone(),
                            second: doc.id.clone(),
                        });
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(Arc::clone(doc));
                    }
                }
            }

            debug!(id = %doc.id, title = %doc.title, "indexed document");
        }

        Ok(indices)
    }
}
