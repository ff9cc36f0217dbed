use crate::error::Result;
use crate::models::Dataset;
use crate::readers::DatasetReader;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Where datasets come from; the cache calls this at most once per path
pub trait DatasetSource {
    fn load(&self, path: &Path) -> Result<Dataset>;
}

impl DatasetSource for DatasetReader {
    fn load(&self, path: &Path) -> Result<Dataset> {
        self.read_dataset(path)
    }
}

/// Memoizes loaded datasets by path for the lifetime of the process.
///
/// The first `load` for a path reads it through the source; every later call
/// hands back the same `Arc`. Entries are never invalidated. Failed loads are
/// not cached.
pub struct DatasetCache<S = DatasetReader> {
    source: S,
    entries: Mutex<HashMap<PathBuf, Arc<Dataset>>>,
}

impl<S: DatasetSource> DatasetCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn load(&self, path: &Path) -> Result<Arc<Dataset>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(dataset) = entries.get(path) {
            tracing::debug!(path = %path.display(), "Dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        tracing::debug!(path = %path.display(), "Dataset cache miss");
        let dataset = Arc::new(self.source.load(path)?);
        entries.insert(path.to_path_buf(), Arc::clone(&dataset));

        Ok(dataset)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static GLOBAL_CACHE: OnceLock<DatasetCache> = OnceLock::new();

/// The process-wide dataset cache, created on first use
pub fn global_cache() -> &'static DatasetCache {
    GLOBAL_CACHE.get_or_init(|| DatasetCache::new(DatasetReader::new()))
}

/// Load a dataset through the process-wide cache
pub fn load_dataset(path: &Path) -> Result<Arc<Dataset>> {
    global_cache().load(path)
}
