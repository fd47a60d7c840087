//! Tests for resolve

use super::*;
use crate::suggestion::TimeOfDay;
use proptest::prelude::*;

#[test]
fn test_resolve_afternoon() {
    assert_eq!(
        resolve("afternoon"),
        Ok("Lunch: Grilled chicken sandwich with side salad")
    );
}

#[test]
fn test_resolve_empty_input() {
    assert_eq!(resolve(""), Err(SuggestError::EmptyInput));
    assert_eq!(resolve("   "), Err(SuggestError::EmptyInput));
    assert_eq!(resolve("\t\n"), Err(SuggestError::EmptyInput));
}

#[test]
fn test_resolve_case_and_whitespace_invariance() {
    let expected = resolve("morning");
    assert!(expected.is_ok());
    assert_eq!(resolve("Morning"), expected);
    assert_eq!(resolve("  morning  "), expected);
    assert_eq!(resolve("MORNING"), expected);
}

#[test]
fn test_resolve_unrecognized() {
    assert_eq!(resolve("brunch"), Err(SuggestError::UnrecognizedTimeOfDay));
}

#[test]
fn test_resolve_requires_inner_spelling() {
    assert_eq!(
        resolve("afterdinner"),
        Err(SuggestError::UnrecognizedTimeOfDay)
    );
    assert_eq!(
        resolve("mid morning"),
        Err(SuggestError::UnrecognizedTimeOfDay)
    );
}

#[test]
fn test_resolve_after_dinner_with_padding() {
    assert_eq!(
        resolve("  After Dinner "),
        Ok("Dessert: Dark chocolate with strawberries")
    );
}

fn random_casing(text: &str, mask: &[bool]) -> String {
    text.chars()
        .zip(mask.iter().cycle())
        .map(|(ch, upper)| {
            if *upper {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

// Any casing of a known key, padded with whitespace, resolves to that key's
// suggestion.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_known_keys_resolve_in_any_casing(
        index in 0usize..6,
        mask in prop::collection::vec(any::<bool>(), 1..16),
        leading in "[ \t]{0,4}",
        trailing in "[ \t\n]{0,4}",
    ) {
        let time = TimeOfDay::ALL[index];
        let raw = format!("{}{}{}", leading, random_casing(time.key(), &mask), trailing);

        prop_assert_eq!(resolve(&raw), Ok(time.suggestion()));
    }

    #[test]
    fn prop_resolve_is_deterministic(raw in "[ a-zA-Z\\-]{0,20}") {
        prop_assert_eq!(resolve(&raw), resolve(&raw));
    }

    #[test]
    fn prop_unknown_words_are_unrecognized(word in "[a-z]{1,12}") {
        prop_assume!(TimeOfDay::from_key(&word).is_none());
        prop_assert_eq!(resolve(&word), Err(SuggestError::UnrecognizedTimeOfDay));
    }
}
