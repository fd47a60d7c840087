/// Trim surrounding whitespace and lowercase the raw input.
///
/// An empty result means the user entered nothing.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
