use std::path::Path;

use serde::{Deserialize, Serialize};

// Serializable and comparable: the serialized form feeds the repository
// fingerprint, so any change here forces a full rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub version: String,
    pub stemmer: Stemmer,
    /// Tokens with fewer characters are not indexed or searched.
    pub min_token_chars: usize,
    /// File extensions to load, case-insensitive. Empty loads every file.
    pub extensions: Vec<String>,
}

impl IndexConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            stemmer: Stemmer::English,
            min_token_chars: 1,
            extensions: Vec::new(),
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Snowball stemmer applied after lowercasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stemmer {
    None,
    English,
    French,
    German,
    Spanish,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_extension_list_accepts_everything() {
        let config = IndexConfig::v0();
        assert!(config.accepts(Path::new("posts/a.md")));
        assert!(config.accepts(Path::new("posts/README")));
    }

    #[test]
    fn extension_filter_is_case_insensitive() {
        let config = IndexConfig {
            extensions: vec!["md".into(), ".markdown".into()],
            ..IndexConfig::v0()
        };
        assert!(config.accepts(Path::new("a.MD")));
        assert!(config.accepts(Path::new("b.markdown")));
        assert!(!config.accepts(Path::new("c.txt")));
        assert!(!config.accepts(Path::new("no_extension")));
    }

    #[test]
    fn config_round_trips_through_json() {
        let json = serde_json::to_string(&IndexConfig::v0()).unwrap();
        assert!(json.contains("\"stemmer\":\"english\""));
        let back: IndexConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IndexConfig::v0());
    }
}
