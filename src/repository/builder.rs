use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::index::Indices;
use super::Repository;
use crate::collection::DocumentList;
use crate::config::IndexConfig;
use crate::document::{Document, DocumentError, DocumentParser, FrontMatterParser};
use crate::tokenize::{StemmingPipeline, TokenPipeline};
use crate::types::identifiers::DocumentId;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Source {} is not usable: {reason}", .path.display())]
    Configuration { path: PathBuf, reason: String },
    #[error("Failed loading {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadCause,
    },
    #[error("Duplicate canonical slug: {slug}")]
    Conflict {
        slug: String,
        first: DocumentId,
        second: DocumentId,
    },
    #[error("Duplicate document ID: {id}")]
    DuplicateId { id: DocumentId },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Underlying reason a file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadCause {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] DocumentError),
}

/// Loads a source directory into a fully indexed [`Repository`].
///
/// A build either returns a complete repository or an error; nothing partial
/// is ever handed out. The builder can be reused for reloads.
pub struct RepositoryBuilder<P = FrontMatterParser, T = StemmingPipeline> {
    config: IndexConfig,
    parser: P,
    pipeline: Arc<T>,
}

impl RepositoryBuilder {
    pub fn new(config: IndexConfig) -> Self {
        let pipeline = Arc::new(StemmingPipeline::from_config(&config));
        Self {
            config,
            parser: FrontMatterParser,
            pipeline,
        }
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new(IndexConfig::v0())
    }
}

impl<P, T> RepositoryBuilder<P, T>
where
    P: DocumentParser,
    T: TokenPipeline,
{
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn with_parser<Q: DocumentParser>(self, parser: Q) -> RepositoryBuilder<Q, T> {
        RepositoryBuilder {
            config: self.config,
            parser,
            pipeline: self.pipeline,
        }
    }

    pub fn with_pipeline<U: TokenPipeline>(self, pipeline: U) -> RepositoryBuilder<P, U> {
        RepositoryBuilder {
            config: self.config,
            parser: self.parser,
            pipeline: Arc::new(pipeline),
        }
    }

    /// Load every file under `dir` and index the published ones.
    pub fn load(&self, dir: &Path) -> Result<Repository<T>, BuildError> {
        let metadata = fs::metadata(dir).map_err(|e| BuildError::Configuration {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        if !metadata.is_dir() {
            return Err(BuildError::Configuration {
                path: dir.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }

        info!(dir = %dir.display(), "loading documents");
        let documents = self.preload(dir)?;
        self.build(documents)
    }

    // Sorted by file name so equal timestamps tie-break the same way on
    // every load.
    fn preload(&self, dir: &Path) -> Result<Vec<Document>, BuildError> {
        let mut documents = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| BuildError::Load {
                path: e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() || !self.config.accepts(entry.path()) {
                continue;
            }

            let path = entry.path();
            let raw = fs::read(path).map_err(|e| BuildError::Load {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
            let doc = self.parser.parse(path, raw).map_err(|e| BuildError::Load {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
            documents.push(doc);
        }
        Ok(documents)
    }

    /// Index already parsed documents; `documents` order breaks timestamp ties.
    pub fn build(&self, documents: Vec<Document>) -> Result<Repository<T>, BuildError> {
        let total = documents.len();

        // 1. Keep published only
        let mut published = DocumentList::with_capacity(total);
        for doc in documents {
            if doc.published {
                published.push(Arc::new(doc));
            } else {
                debug!(id = %doc.id, source = %doc.source, "skipping unpublished document");
            }
        }

        // 2. Canonical order, inherited by every per-key list
        published.sort_by_recency();

        // 3. Single indexing pass
        let indices = Indices::build(&published, self.pipeline.as_ref())?;

        let fingerprint = fingerprint(&self.config, &published)?;

        info!(
            loaded = total,
            published = published.len(),
            tokens = indices.search.len(),
            fingerprint = %fingerprint,
            "repository built"
        );

        Ok(Repository {
            documents: published,
            indices,
            pipeline: Arc::clone(&self.pipeline),
            fingerprint,
        })
    }
}

// Generated ids change from load to load, so only content versions are
// hashed: sha256(config_json + one version line per document, canonical order)
fn fingerprint(config: &IndexConfig, documents: &DocumentList) -> Result<String, BuildError> {
    let mut hasher = Sha256::new();
    hasher.update(serde_json::to_vec(config)?);
    for doc in documents {
        hasher.update(doc.version.as_str().as_bytes());
        hasher.update(b"\n");
    }
    Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
}
