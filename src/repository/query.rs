use std::sync::Arc;

use chrono::{DateTime, Month, Utc};
use thiserror::Error;

use super::Repository;
use crate::collection::{DocumentList, DocumentSet};
use crate::document::Document;
use crate::tokenize::TokenPipeline;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Nothing found for {lookup} {key:?}")]
    NotFound { lookup: &'static str, key: String },
}

impl QueryError {
    fn not_found(lookup: &'static str, key: impl Into<String>) -> Self {
        QueryError::NotFound {
            lookup,
            key: key.into(),
        }
    }
}

// Every list query filters by `now`, so scheduled documents stay hidden
// although they are indexed. Slug and permalink lookups do not filter.
impl<T: TokenPipeline> Repository<T> {
    pub fn find_by_tag(&self, tag: &str, now: DateTime<Utc>) -> Result<DocumentList, QueryError> {
        let found = self
            .indices
            .tag
            .get(tag)
            .map(|docs| docs.visible_before(now))
            .unwrap_or_default();
        non_empty(found, || QueryError::not_found("tag", tag))
    }

    pub fn find_by_category(
        &self,
        category: &str,
        now: DateTime<Utc>,
    ) -> Result<DocumentList, QueryError> {
        let found = self
            .indices
            .category
            .get(category)
            .map(|docs| docs.visible_before(now))
            .unwrap_or_default();
        non_empty(found, || QueryError::not_found("category", category))
    }

    /// Up to `limit` newest visible documents. A zero limit gives an empty list.
    pub fn find_latest(&self, limit: usize, now: DateTime<Utc>) -> DocumentList {
        self.documents
            .iter()
            .filter(|doc| doc.is_visible_at(now))
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn find_by_month(&self, year: i32, month: Month, now: DateTime<Utc>) -> DocumentList {
        self.documents
            .iter()
            .filter(|doc| doc.is_visible_at(now) && doc.in_year(year) && doc.in_month(month))
            .cloned()
            .collect()
    }

    /// Documents containing ANY token of `query`, newest first.
    pub fn search(&self, query: &str, now: DateTime<Utc>) -> Result<DocumentList, QueryError> {
        let mut found = DocumentSet::new();
        for token in self.pipeline.tokenize(&[query]) {
            if let Some(docs) = self.indices.search.get(&token) {
                found.union(docs);
            }
        }

        // Set order is arbitrary. Canonical position is newest first with
        // load order on ties.
        let mut docs = found.values().into_vec();
        docs.sort_by_key(|doc| self.indices.position.get(&doc.id).copied());
        let mut docs = DocumentList::from(docs);
        docs.sort_by_recency();

        non_empty(docs.visible_before(now), || QueryError::not_found("search", query))
    }

    pub fn find_by_slug(&self, slug: &str) -> Result<Arc<Document>, QueryError> {
        self.indices
            .slug
            .get(slug)
            .cloned()
            .ok_or_else(|| QueryError::not_found("slug", slug))
    }

    /// First document published in `year`/`month` carrying `slug` among any
    /// of its slugs. `_day` is accepted but not matched.
    pub fn find_by_permalink(
        &self,
        year: i32,
        month: Month,
        _day: u32,
        slug: &str,
    ) -> Result<Arc<Document>, QueryError> {
        self.documents
            .iter()
            .find(|doc| doc.in_year(year) && doc.in_month(month) && doc.has_slug(slug))
            .cloned()
            .ok_or_else(|| {
                QueryError::not_found(
                    "permalink",
                    format!("{year}/{:02}/{slug}", month.number_from_month()),
                )
            })
    }
}

fn non_empty(
    docs: DocumentList,
    err: impl FnOnce() -> QueryError,
) -> Result<DocumentList, QueryError> {
    if docs.is_empty() {
        Err(err())
    } else {
        Ok(docs)
    }
}
