use crate::domain::{normalize_phone, ReferenceEntry};
use crate::dto::{ErrorInfo, GameResult};
use crate::error::ErrorKind;
use crate::rules::Matcher;
use std::fmt;
use tracing::{debug, warn};

/// Supplies the reference list a round is matched against.
pub trait ReferenceRepository {
    type Error: fmt::Display;

    fn get_all(&mut self) -> Result<&[ReferenceEntry], Self::Error>;
}

impl<R: ReferenceRepository + ?Sized> ReferenceRepository for &mut R {
    type Error = R::Error;

    fn get_all(&mut self) -> Result<&[ReferenceEntry], Self::Error> {
        (**self).get_all()
    }
}

#[derive(Debug)]
pub struct Game<R> {
    repository: R,
}

impl<R: ReferenceRepository> Game<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn play(&mut self, raw_phone: &str) -> GameResult {
        let phone = match normalize_phone(raw_phone) {
            Ok(phone) => phone,
            Err(err) => return ErrorInfo::from(err).into(),
        };
        debug!(phone = %phone, "phone normalized");

        let entries = match self.repository.get_all() {
            Ok(entries) => entries,
            Err(err) => {
                warn!(error = %err, "reference list unavailable");
                return ErrorInfo::new(ErrorKind::ReferenceLoadFailed, err.to_string()).into();
            }
        };

        let matcher = match Matcher::new(entries) {
            Ok(matcher) => matcher,
            Err(_) => {
                return ErrorInfo::new(
                    ErrorKind::ReferenceEmpty,
                    "reference list is empty; the game cannot be played",
                )
                .into();
            }
        };

        let outcome = matcher.match_phone(&phone);
        debug!(
            code = %outcome.code,
            match_length = outcome.match_length,
            fallback = outcome.used_fallback,
            "reference entry selected"
        );
        outcome.into()
    }
}
