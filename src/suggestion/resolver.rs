use super::normalize::normalize;
use super::table::lookup;
use crate::error::SuggestError;

/// Resolve raw user input to its meal suggestion.
pub fn resolve(raw: &str) -> Result<&'static str, SuggestError> {
    let normalized = normalize(raw);

    if normalized.is_empty() {
        return Err(SuggestError::EmptyInput);
    }

    lookup(&normalized).ok_or(SuggestError::UnrecognizedTimeOfDay)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod resolver_tests;
