use crate::domain::{PhoneNumber, ReferenceEntry};
use crate::dto::MatchOutcome;
use crate::error::CoreError;
use crate::rules::hash::fnv1a_64;

/// Count of trailing characters shared by `left` and `right`, compared from the end.
pub fn suffix_length(left: &str, right: &str) -> usize {
    left.bytes()
        .rev()
        .zip(right.bytes().rev())
        .take_while(|(a, b)| a == b)
        .count()
}

#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    entry: &'a ReferenceEntry,
    match_length: usize,
    full_match: bool,
}

impl Candidate<'_> {
    fn rank(&self) -> (usize, bool) {
        (self.match_length, self.full_match)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    entries: &'a [ReferenceEntry],
}

impl<'a> Matcher<'a> {
    pub fn new(entries: &'a [ReferenceEntry]) -> Result<Self, CoreError> {
        if entries.is_empty() {
            return Err(CoreError::EmptyReferenceList);
        }
        Ok(Self { entries })
    }

    pub fn match_phone(&self, phone: &PhoneNumber) -> MatchOutcome {
        let phone_digits = phone.digits();
        match self.best_candidate(phone_digits) {
            Some(best) => MatchOutcome {
                normalized_phone: phone.clone(),
                code: best.entry.code().to_string(),
                name: best.entry.name().to_string(),
                match_length: best.match_length,
                used_fallback: false,
            },
            None => {
                let entry = self.fallback_entry(phone_digits);
                MatchOutcome {
                    normalized_phone: phone.clone(),
                    code: entry.code().to_string(),
                    name: entry.name().to_string(),
                    match_length: 0,
                    used_fallback: true,
                }
            }
        }
    }

    // Strictly-greater comparison keeps the first entry among equal ranks.
    fn best_candidate(&self, phone_digits: &str) -> Option<Candidate<'a>> {
        let mut best: Option<Candidate<'a>> = None;
        for entry in self.entries {
            let code_digits = entry.code_digits();
            if code_digits.is_empty() {
                continue;
            }
            let match_length = suffix_length(phone_digits, &code_digits);
            if match_length == 0 {
                continue;
            }
            let candidate = Candidate {
                entry,
                match_length,
                full_match: match_length == code_digits.len(),
            };
            match best {
                Some(current) if current.rank() >= candidate.rank() => {}
                _ => best = Some(candidate),
            }
        }
        best
    }

    fn fallback_entry(&self, phone_digits: &str) -> &'a ReferenceEntry {
        let len = self.entries.len() as u64;
        let index = (fnv1a_64(phone_digits) % len) as usize;
        &self.entries[index]
    }
}
