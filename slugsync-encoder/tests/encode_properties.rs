//! Property-based tests for the slug encoder.
//!
//! - Totality: any input encodes without panicking
//! - Fixed point: an encoder output re-encodes to itself
//! - Separator exclusivity: the unused separator never appears

use proptest::prelude::*;
use slugsync_encoder::encode;
use slugsync_types::{Separator, SlugOptions};

fn options_strategy() -> impl Strategy<Value = SlugOptions> {
    (
        prop_oneof![Just(Separator::Hyphen), Just(Separator::Underscore)],
        any::<bool>(),
    )
        .prop_map(|(separator, lowercase)| SlugOptions::new(separator, lowercase))
}

/// Free text without `:` so it never takes the URL branch.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 _/.!?,\\-\téüßЖжÅñ日]{0,60}").unwrap()
}

fn url_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("http"), Just("https"), Just("HTTPS")],
        prop::string::string_regex("[a-zA-Z0-9 ./:_?=\\-é]{1,40}").unwrap(),
    )
        .prop_map(|(scheme, rest)| format!("{scheme}://{rest}"))
}

proptest! {
    #[test]
    fn encode_is_total(s in any::<String>(), opts in options_strategy()) {
        let _ = encode(&s, opts);
    }

    #[test]
    fn text_output_is_fixed_point(s in text_strategy(), opts in options_strategy()) {
        let once = encode(&s, opts);
        let twice = encode(&once, opts);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn url_output_is_fixed_point(s in url_strategy(), opts in options_strategy()) {
        let once = encode(&s, opts);
        let twice = encode(&once, opts);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn hyphen_output_has_no_underscore(s in text_strategy(), lowercase in any::<bool>()) {
        let slug = encode(&s, SlugOptions::new(Separator::Hyphen, lowercase));
        prop_assert!(!slug.contains('_'));
        prop_assert!(!slug.contains("--"));
    }

    #[test]
    fn underscore_output_has_no_hyphen(s in text_strategy(), lowercase in any::<bool>()) {
        let slug = encode(&s, SlugOptions::new(Separator::Underscore, lowercase));
        prop_assert!(!slug.contains('-'));
        prop_assert!(!slug.contains("__"));
    }

    #[test]
    fn text_output_is_ascii_slug(s in text_strategy(), opts in options_strategy()) {
        let slug = encode(&s, opts);
        let sep = opts.separator.as_char();
        prop_assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == sep || c == '/'));
        if opts.lowercase {
            prop_assert!(!slug.chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
