use crate::source::{read_limited, ReferenceSource};
use crate::{Result, SourceError};
use std::fs::File;
use std::path::PathBuf;

/// Reference list stored in a local JSON file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    max_bytes: u64,
}

impl FileSource {
    pub fn new(path: PathBuf, max_bytes: u64) -> Self {
        Self { path, max_bytes }
    }
}

impl ReferenceSource for FileSource {
    fn source_name(&self) -> &'static str {
        "file"
    }

    fn fetch_json(&self) -> Result<String> {
        let read_err = |source: std::io::Error| SourceError::FileRead {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(read_err)?;
        let size = file.metadata().map_err(read_err)?.len();
        if size > self.max_bytes {
            return Err(SourceError::TooLarge {
                limit: self.max_bytes,
            });
        }
        read_limited(file, self.max_bytes)
    }
}
