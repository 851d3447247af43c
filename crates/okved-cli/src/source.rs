use anyhow::Result;
use okved_config::{validate_reference_url, AppConfig};
use okved_source::{FileSource, HttpSource, ReferenceSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum SelectedSource {
    Http(HttpSource),
    File(FileSource),
}

impl SelectedSource {
    /// `--file` wins over `--url`, which wins over the configured URL.
    pub fn resolve(args: &SourceArgs, config: &AppConfig) -> Result<Self> {
        let reference = &config.reference;
        if let Some(path) = &args.file {
            debug!(path = %path.display(), "using reference file");
            return Ok(SelectedSource::File(FileSource::new(
                path.clone(),
                reference.max_bytes,
            )));
        }

        let url = match &args.url {
            Some(raw) => validate_reference_url(raw)?,
            None => reference.url.clone(),
        };
        debug!(url = %url, "using reference url");
        Ok(SelectedSource::Http(HttpSource::new(
            url,
            Duration::from_secs(reference.timeout_secs),
            reference.max_bytes,
        )))
    }
}

impl ReferenceSource for SelectedSource {
    fn source_name(&self) -> &'static str {
        match self {
            SelectedSource::Http(source) => source.source_name(),
            SelectedSource::File(source) => source.source_name(),
        }
    }

    fn fetch_json(&self) -> okved_source::Result<String> {
        match self {
            SelectedSource::Http(source) => source.fetch_json(),
            SelectedSource::File(source) => source.fetch_json(),
        }
    }
}
