use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, FixedOffset, Month, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::metadata::{split_front_matter, FrontMatter, Images};
use super::render;
use crate::types::identifiers::{DocumentId, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Missing or unterminated front matter")]
    MissingFrontMatter,
    #[error("Invalid front matter: {0}")]
    FrontMatter(#[from] serde_norway::Error),
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// One post: YAML header plus markdown body.
///
/// Built once at load time and never mutated afterwards; the repository hands
/// out shared references to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub version: DocumentVersion,
    pub source: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub body: String,
    pub published: bool,
    pub slugs: Vec<String>,
    pub tags: Vec<String>,
    /// Publish time with the offset it was written in.
    pub published_on: Option<DateTime<FixedOffset>>,
    pub images: Images,
}

impl Document {
    /// Parse raw file bytes into a Document.
    ///
    /// The version is the hash of the raw bytes, header included. An id is
    /// generated when the header does not carry one.
    pub fn ingest(source: impl Into<String>, raw_content: Vec<u8>) -> Result<Self, DocumentError> {
        let version = DocumentVersion::from_content(&raw_content);
        let content = String::from_utf8(raw_content)?;

        let (header, body) = split_front_matter(&content)?;
        let meta = FrontMatter::from_yaml(header)?;

        let id = match meta.id {
            Some(id) if !id.trim().is_empty() => DocumentId::new(id),
            _ => DocumentId::generate(),
        };

        Ok(Document {
            id,
            version,
            source: source.into(),
            title: meta.title,
            category: meta.category,
            description: meta.description,
            body: body.to_string(),
            published: meta.published,
            slugs: meta.slugs,
            tags: meta.tags,
            published_on: meta.published_on,
            images: meta.images,
        })
    }

    /// `slugs[0]`, the key for slug lookups.
    pub fn canonical_slug(&self) -> Option<&str> {
        self.slugs.first().map(String::as_str)
    }

    pub fn has_slug(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    /// Sort and visibility key. A missing timestamp is the earliest instant.
    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_on
            .map_or(DateTime::<Utc>::MIN_UTC, |t| t.with_timezone(&Utc))
    }

    /// Year of the date as written, not the UTC date.
    pub fn in_year(&self, year: i32) -> bool {
        self.published_on.is_some_and(|t| t.year() == year)
    }

    pub fn in_month(&self, month: Month) -> bool {
        self.published_on
            .is_some_and(|t| t.month() == month.number_from_month())
    }

    /// Not scheduled after `now`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.published_at() <= now
    }

    pub fn image(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.images.get(name)
    }

    pub fn html(&self) -> String {
        render::to_html(&self.body, &self.images)
    }

    pub fn plain_text(&self) -> String {
        render::to_plain_text(&self.body)
    }
}
