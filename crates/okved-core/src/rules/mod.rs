pub mod hash;
pub mod matcher;

pub use hash::fnv1a_64;
pub use matcher::{suffix_length, Matcher};
