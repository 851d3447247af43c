use crate::commands::{print_json, Context};
use crate::error::reference_unavailable;
use crate::source::SelectedSource;
use anyhow::Result;
use okved_source::{CachedRepository, ReferenceSource};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckReport {
    source: &'static str,
    entries: usize,
}

pub fn check(ctx: &Context<'_>) -> Result<()> {
    let source = SelectedSource::resolve(&ctx.source, ctx.config)?;
    let name = source.source_name();
    let mut repository = CachedRepository::new(source);
    let entries = repository.preload().map_err(reference_unavailable)?;

    if ctx.json {
        return print_json(&CheckReport {
            source: name,
            entries,
        });
    }

    println!("Reference list OK: {entries} usable entries ({name} source)");
    Ok(())
}
