//! Property tests for slug normalization.

use areas_core::{canonicalize_name, slugify};
use proptest::prelude::*;

fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-'
}

proptest! {
    #[test]
    fn slugify_is_idempotent_on_slug_alphabet(input in "[a-z0-9-]{0,40}") {
        let once = slugify(&input);
        prop_assert_eq!(slugify(&once), once);
    }

    #[test]
    fn slugify_output_is_well_formed(input in "\\PC{0,60}") {
        let slug = slugify(&input);
        prop_assert!(slug.chars().all(is_slug_char), "bad char in {:?}", slug);
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn slugify_of_any_slug_is_stable(input in "\\PC{0,60}") {
        let slug = slugify(&input);
        prop_assert_eq!(slugify(&slug), slug.clone());
    }

    #[test]
    fn canonicalize_never_leaves_double_spaces(input in "[ a-zA-Z.\\t]{0,40}") {
        let name = canonicalize_name(&input);
        prop_assert!(!name.contains("  "));
        prop_assert_eq!(name.trim(), name.as_str());
    }

    #[test]
    fn canonicalize_then_slugify_matches_slugify(input in "[ a-zA-Z0-9.&()'-]{0,40}") {
        prop_assert_eq!(slugify(&canonicalize_name(&input)), slugify(&input));
    }
}
