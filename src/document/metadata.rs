use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use super::document::DocumentError;

/// Image name -> attribute name -> value.
pub type Images = BTreeMap<String, BTreeMap<String, String>>;

/// Strongly shaped view of a post's YAML header.
///
/// Missing keys take their defaults and unknown keys are ignored, so an older
/// header never fails to decode just because a field was added.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub id: Option<String>,
    pub title: String,
    pub category: String,
    pub description: String,
    pub published: bool,
    pub slugs: Vec<String>,
    pub tags: Vec<String>,
    #[serde(
        rename = "publishedon",
        alias = "publishedOn",
        alias = "published_on",
        deserialize_with = "deserialize_timestamp"
    )]
    pub published_on: Option<DateTime<FixedOffset>>,
    pub images: Images,
}

impl FrontMatter {
    pub fn from_yaml(header: &str) -> Result<Self, DocumentError> {
        if header.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        Ok(serde_norway::from_str(header)?)
    }
}

/// Split `---` delimited front matter from the body.
///
/// Returns `(header, body)`; the body is trimmed. Content that does not open
/// with a delimiter line has no front matter.
pub fn split_front_matter(content: &str) -> Result<(&str, &str), DocumentError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut lines = content.split_inclusive('\n');
    let first = lines.next().ok_or(DocumentError::MissingFrontMatter)?;
    if first.trim_end() != "---" {
        return Err(DocumentError::MissingFrontMatter);
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        if line.trim_end() == "---" {
            let header = &content[header_start..offset];
            let body = &content[offset + line.len()..];
            return Ok((header, body.trim()));
        }
        offset += line.len();
    }

    Err(DocumentError::MissingFrontMatter)
}

/// Parse a publish timestamp.
///
/// Accepted, in order: RFC 3339, RFC 2822 (obsolete two digit years and zone
/// names included), `YYYY-MM-DD HH:MM[:SS]` and `YYYY-MM-DD`, the last two
/// read as UTC. The written offset is kept.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, DocumentError> {
    let raw = raw.trim();

    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(t);
    }
    if let Ok(t) = DateTime::parse_from_rfc2822(raw) {
        return Ok(t);
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(t.and_utc().fixed_offset());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(t) = d.and_hms_opt(0, 0, 0) {
            return Ok(t.and_utc().fixed_offset());
        }
    }

    Err(DocumentError::InvalidTimestamp(raw.to_string()))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => parse_timestamp(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
