use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::builder::{BuildError, RepositoryBuilder};
use super::Repository;
use crate::document::DocumentParser;
use crate::tokenize::{StemmingPipeline, TokenPipeline};

/// Swappable handle to the current repository.
///
/// Readers take a snapshot with [`current`](Self::current) and keep querying
/// it even while a replacement is swapped in; the old repository is dropped
/// when its last snapshot goes away.
#[derive(Debug)]
pub struct SharedRepository<T = StemmingPipeline> {
    current: RwLock<Arc<Repository<T>>>,
}

impl<T: TokenPipeline> SharedRepository<T> {
    pub fn new(repository: Repository<T>) -> Self {
        Self {
            current: RwLock::new(Arc::new(repository)),
        }
    }

    pub fn current(&self) -> Arc<Repository<T>> {
        // The guarded value is a plain Arc, so a poisoned lock is still sound.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Swap in `next`, returning the repository it replaced.
    pub fn replace(&self, next: Repository<T>) -> Arc<Repository<T>> {
        let next = Arc::new(next);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Build a fresh repository from `dir` and swap it in.
    ///
    /// The current repository stays in place when the build fails.
    pub fn reload<P: DocumentParser>(
        &self,
        builder: &RepositoryBuilder<P, T>,
        dir: &Path,
    ) -> Result<Arc<Repository<T>>, BuildError> {
        let next = builder.load(dir)?;
        let old = self.replace(next);
        info!(
            old = %old.fingerprint(),
            new = %self.current().fingerprint(),
            "repository swapped"
        );
        Ok(old)
    }
}
