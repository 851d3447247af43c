use crate::{Result, SourceError};
use std::io::Read;

pub trait ReferenceSource {
    fn source_name(&self) -> &'static str;
    fn fetch_json(&self) -> Result<String>;
}

/// Reads at most `limit` bytes; anything longer is rejected rather than truncated.
pub(crate) fn read_limited<R: Read>(reader: R, limit: u64) -> Result<String> {
    let mut buf = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > limit {
        return Err(SourceError::TooLarge { limit });
    }
    String::from_utf8(buf).map_err(|_| SourceError::InvalidUtf8)
}
