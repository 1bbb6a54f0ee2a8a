//! Dealer slug utilities
//!
//! Канонический идентификатор дилера: lower-case, слова через дефис.
//! Ссылки на портал могут содержать сгенерированный суффикс из 6 символов
//! (`acme-motors-9f3d2a`), который отбрасывается при нормализации.

const GENERATED_SUFFIX_LEN: usize = 6;

/// Normalize a route segment into a dealer slug.
///
/// Lower-cases the input and strips a trailing `-xxxxxx` suffix made of
/// exactly six `[a-z0-9]` characters.
pub fn normalize_dealer_slug(raw: &str) -> String {
    let slug = raw.to_lowercase();
    match strip_generated_suffix(&slug) {
        Some(name) => name.to_string(),
        None => slug,
    }
}

fn strip_generated_suffix(slug: &str) -> Option<&str> {
    let split_at = slug.len().checked_sub(GENERATED_SUFFIX_LEN + 1)?;
    if !slug.is_char_boundary(split_at) {
        return None;
    }
    let (name, tail) = slug.split_at(split_at);
    let suffix = tail.strip_prefix('-')?;
    suffix
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        .then_some(name)
}

/// Derive a slug from a free-text dealer name.
///
/// Runs of characters outside `[a-z0-9]` collapse into a single hyphen,
/// leading and trailing hyphens are dropped.
pub fn slugify_dealer_name(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut pending_hyphen = false;

    for ch in lower.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

/// Human readable label for a slug: `north-coast` -> `North Coast`.
pub fn prettify_dealer_name(slug: &str) -> String {
    let spaced = slug.replace('-', " ");
    let mut pretty = String::with_capacity(spaced.len());
    let mut prev_is_word = false;

    for ch in spaced.trim().chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            pretty.push(ch.to_ascii_uppercase());
        } else {
            pretty.push(ch);
        }
        prev_is_word = is_word;
    }

    pretty
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_generated_suffix() {
        assert_eq!(normalize_dealer_slug("acme-motors-9f3d2a"), "acme-motors");
        assert_eq!(normalize_dealer_slug("ACME-Motors-9F3D2A"), "acme-motors");
    }

    #[test]
    fn test_normalize_keeps_other_slugs() {
        assert_eq!(normalize_dealer_slug(""), "");
        assert_eq!(normalize_dealer_slug("North-Coast"), "north-coast");
        // 5 и 7 символов: не суффикс
        assert_eq!(normalize_dealer_slug("dealer-abc12"), "dealer-abc12");
        assert_eq!(normalize_dealer_slug("dealer-abc1234"), "dealer-abc1234");
        assert_eq!(normalize_dealer_slug("dealer-ab_123"), "dealer-ab_123");
    }

    #[test]
    fn test_normalize_six_letter_last_word_is_a_suffix() {
        assert_eq!(normalize_dealer_slug("acme-motors"), "acme");
        assert_eq!(normalize_dealer_slug("-abcdef"), "");
    }

    #[test]
    fn test_normalize_non_ascii_tail() {
        assert_eq!(normalize_dealer_slug("dealer-abcdé"), "dealer-abcdé");
    }

    #[test]
    fn test_slugify_dealer_name() {
        assert_eq!(slugify_dealer_name("Acme Motors"), "acme-motors");
        assert_eq!(slugify_dealer_name("  St. George's -- Caravans! "), "st-george-s-caravans");
        assert_eq!(slugify_dealer_name("Gold Coast RV (QLD)"), "gold-coast-rv-qld");
        assert_eq!(slugify_dealer_name(""), "");
        assert_eq!(slugify_dealer_name("---"), "");
    }

    #[test]
    fn test_prettify_dealer_name() {
        assert_eq!(prettify_dealer_name("north-coast"), "North Coast");
        assert_eq!(prettify_dealer_name("-acme-"), "Acme");
        assert_eq!(prettify_dealer_name("rv-4x4-world"), "Rv 4x4 World");
        assert_eq!(prettify_dealer_name(""), "");
    }

    proptest! {
        #[test]
        fn prop_normalize_strips_exactly_the_suffix(
            name in "[a-z0-9-]{0,20}",
            suffix in "[a-z0-9]{6}",
        ) {
            let raw = format!("{name}-{suffix}");
            prop_assert_eq!(normalize_dealer_slug(&raw), name.clone());
            prop_assert_eq!(normalize_dealer_slug(&raw.to_uppercase()), name);
        }

        #[test]
        fn prop_normalize_without_suffix_only_lowercases(raw in "[A-Za-z ]{0,12}") {
            // no hyphen, so the suffix pattern can never match
            prop_assert_eq!(normalize_dealer_slug(&raw), raw.to_lowercase());
        }

        #[test]
        fn prop_slugify_is_idempotent(name in "\\PC{0,40}") {
            let once = slugify_dealer_name(&name);
            prop_assert_eq!(slugify_dealer_name(&once), once.clone());
        }

        #[test]
        fn prop_slugify_output_is_canonical(name in "\\PC{0,40}") {
            let slug = slugify_dealer_name(&name);
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
            prop_assert!(slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'));
        }
    }
}
