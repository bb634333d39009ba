pub mod document;
pub mod metadata;
pub mod parser;
pub mod render;

pub use crate::types::identifiers::{DocumentId, DocumentVersion};
pub use document::{Document, DocumentError};
pub use metadata::{parse_timestamp, FrontMatter, Images};
pub use parser::{DocumentParser, FrontMatterParser};
