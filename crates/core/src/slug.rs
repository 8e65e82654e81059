//! URL slug derivation for titled content.
//!
//! Articles and galleries are addressed by a slug derived from their title.
//! The derivation transliterates Czech diacritics, lower-cases, collapses
//! every run of non-alphanumeric characters into a single hyphen, and trims
//! hyphens at both ends. The function is idempotent, so a slug that was
//! edited by hand in the admin form can be passed through it again safely.

/// Czech diacritics mapped to their ASCII base letters.
///
/// Applied after lower-casing, so only the lowercase forms are listed.
const DIACRITICS: &[(char, char)] = &[
    ('á', 'a'),
    ('č', 'c'),
    ('ď', 'd'),
    ('é', 'e'),
    ('ě', 'e'),
    ('í', 'i'),
    ('ň', 'n'),
    ('ó', 'o'),
    ('ř', 'r'),
    ('š', 's'),
    ('ť', 't'),
    ('ú', 'u'),
    ('ů', 'u'),
    ('ý', 'y'),
    ('ž', 'z'),
];

/// Convert a title into a URL-friendly slug.
///
/// Output matches `^[a-z0-9]+(-[a-z0-9]+)*$` for any input containing at
/// least one alphanumeric character; otherwise the result is empty and the
/// caller must treat the title as invalid.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        let c = DIACRITICS
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
            .unwrap_or(c);

        if c.is_ascii_alphanumeric() {
            // A hyphen is only emitted between alphanumeric runs, which
            // trims the ends and collapses interior runs in one pass.
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(slugify("Getting Started"), "getting-started");
    }

    #[test]
    fn czech_diacritics() {
        assert_eq!(slugify("Příliš žluťoučký kůň"), "prilis-zlutoucky-kun");
    }

    #[test]
    fn collapses_nonalnum_runs() {
        assert_eq!(slugify("How to: Use Galleries (v2)"), "how-to-use-galleries-v2");
        assert_eq!(slugify("foo---bar"), "foo-bar");
    }

    #[test]
    fn trims_separators() {
        assert_eq!(slugify("  --Hello World--  "), "hello-world");
    }

    #[test]
    fn idempotent() {
        for input in ["Příliš žluťoučký kůň", "Getting Started", "a  b   c", "-x-"] {
            let once = slugify(input);
            assert_eq!(slugify(&once), once, "slugify(slugify({input:?}))");
        }
    }

    #[test]
    fn output_shape() {
        for input in ["Getting Started!", "Čau, světe", "2024: a review", "_under_score_"] {
            let slug = slugify(input);
            assert!(!slug.is_empty());
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{slug}"
            );
            assert!(!slug.contains("--"), "{slug}");
        }
    }

    #[test]
    fn no_alphanumeric_input_is_empty() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }
}
