use crate::{Result, SourceError};
use okved_core::ReferenceEntry;
use serde_json::{Map, Value};

#[derive(Debug, Clone)]
pub struct ParsedReference {
    pub entries: Vec<ReferenceEntry>,
    pub skipped: usize,
}

pub fn parse_reference_json(data: &str) -> Result<ParsedReference> {
    let value: Value = serde_json::from_str(data).map_err(SourceError::InvalidJson)?;
    let Value::Array(items) = value else {
        return Err(SourceError::NotAnArray);
    };

    let mut entries = Vec::with_capacity(items.len());
    let mut skipped = 0;
    for item in &items {
        let Value::Object(object) = item else {
            skipped += 1;
            continue;
        };
        let code = field_text(object, "code");
        let name = field_text(object, "name");
        match ReferenceEntry::new(&code, &name) {
            Ok(entry) => entries.push(entry),
            Err(_) => skipped += 1,
        }
    }

    if entries.is_empty() {
        return Err(SourceError::NoValidEntries);
    }

    Ok(ParsedReference { entries, skipped })
}

// Scalars become their text form; a missing key or null counts as blank.
fn field_text(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
