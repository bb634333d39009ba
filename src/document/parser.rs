use std::path::Path;

use super::document::{Document, DocumentError};

/// Turns the raw bytes of one source file into a Document.
pub trait DocumentParser {
    fn parse(&self, source: &Path, raw_content: Vec<u8>) -> Result<Document, DocumentError>;
}

/// YAML front matter followed by a markdown body.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrontMatterParser;

impl DocumentParser for FrontMatterParser {
    fn parse(&self, source: &Path, raw_content: Vec<u8>) -> Result<Document, DocumentError> {
        Document::ingest(source.display().to_string(), raw_content)
    }
}
