pub mod error;
pub mod file;
pub mod http;
pub mod json;
pub mod repository;
pub mod source;

pub use error::{Result, SourceError};
pub use file::FileSource;
pub use http::HttpSource;
pub use json::{parse_reference_json, ParsedReference};
pub use repository::CachedRepository;
pub use source::ReferenceSource;
