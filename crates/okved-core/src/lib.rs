pub mod domain;
pub mod dto;
pub mod error;
pub mod game;
pub mod rules;

pub use domain::*;
pub use dto::*;
pub use error::{CoreError, ErrorKind, NormalizeError};
pub use game::{Game, ReferenceRepository};
pub use rules::*;
