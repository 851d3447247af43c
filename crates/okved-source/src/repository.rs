use crate::json::parse_reference_json;
use crate::source::ReferenceSource;
use crate::{Result, SourceError};
use okved_core::{ReferenceEntry, ReferenceRepository};
use tracing::{debug, warn};

#[derive(Debug)]
enum CacheState {
    Unloaded,
    Loaded(Vec<ReferenceEntry>),
    Failed(String),
}

/// Loads the reference list from a source at most once per process.
///
/// A failed load is remembered: later calls return the same failure instead
/// of hitting the source again.
#[derive(Debug)]
pub struct CachedRepository<S> {
    source: S,
    state: CacheState,
}

impl<S: ReferenceSource> CachedRepository<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: CacheState::Unloaded,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, CacheState::Loaded(_))
    }

    /// Forces the initial load and returns the number of usable entries.
    pub fn preload(&mut self) -> Result<usize> {
        self.entries().map(<[ReferenceEntry]>::len)
    }

    pub fn entries(&mut self) -> Result<&[ReferenceEntry]> {
        if matches!(self.state, CacheState::Unloaded) {
            match self.load() {
                Ok(entries) => self.state = CacheState::Loaded(entries),
                Err(err) => {
                    warn!(source = self.source.source_name(), error = %err, "reference load failed");
                    self.state = CacheState::Failed(err.to_string());
                    return Err(err);
                }
            }
        }

        match &self.state {
            CacheState::Loaded(entries) => Ok(entries.as_slice()),
            CacheState::Failed(message) => Err(SourceError::PreviousFailure(message.clone())),
            CacheState::Unloaded => Err(SourceError::Unavailable(
                "reference list not loaded".to_string(),
            )),
        }
    }

    fn load(&self) -> Result<Vec<ReferenceEntry>> {
        let data = self.source.fetch_json()?;
        let parsed = parse_reference_json(&data)?;
        debug!(
            source = self.source.source_name(),
            count = parsed.entries.len(),
            skipped = parsed.skipped,
            "reference list loaded"
        );
        Ok(parsed.entries)
    }
}

impl<S: ReferenceSource> ReferenceRepository for CachedRepository<S> {
    type Error = SourceError;

    fn get_all(&mut self) -> Result<&[ReferenceEntry]> {
        self.entries()
    }
}
