use slugsync_encoder::{
    DEFAULT_EMPTY_MESSAGE, DEFAULT_FORMAT_MESSAGE, SlugRules, SlugViolation,
    default_format_message, encode,
};
use slugsync_types::{Separator, SlugConfig};
use std::collections::HashSet;

// ── Required ─────────────────────────────────────────────────────

#[test]
fn blank_required_slug_is_rejected_with_default_message() {
    let rules = SlugRules::default();
    let err = rules.validate("   ").unwrap_err();
    assert!(matches!(err, SlugViolation::Empty { .. }));
    assert_eq!(err.to_string(), DEFAULT_EMPTY_MESSAGE);
}

#[test]
fn blank_optional_slug_is_accepted() {
    let rules = SlugRules::from_config(&SlugConfig {
        required: false,
        ..Default::default()
    });
    assert!(rules.validate("").is_ok());
}

#[test]
fn custom_empty_message_is_used() {
    let rules = SlugRules::from_config(&SlugConfig {
        custom_empty_message: Some("fill me in".into()),
        ..Default::default()
    });
    assert_eq!(rules.validate("").unwrap_err().to_string(), "fill me in");
}

#[test]
fn blank_custom_message_falls_back_to_default() {
    let rules = SlugRules::from_config(&SlugConfig {
        custom_format_message: Some("  ".into()),
        ..Default::default()
    });
    assert_eq!(rules.format_message(), DEFAULT_FORMAT_MESSAGE);
}

// ── Format ───────────────────────────────────────────────────────

#[test]
fn well_formed_slugs_pass() {
    let rules = SlugRules::default();
    assert!(rules.validate("hello-world").is_ok());
    assert!(rules.validate("/blog/2024/").is_ok());
}

#[test]
fn uppercase_rejected_when_lowercase_required() {
    let rules = SlugRules::default();
    match rules.validate("Hello") {
        Err(SlugViolation::Format { offending, message }) => {
            assert_eq!(offending, 'H');
            assert_eq!(message, DEFAULT_FORMAT_MESSAGE);
        }
        other => panic!("expected format violation, got {other:?}"),
    }
}

#[test]
fn uppercase_allowed_when_case_kept() {
    let rules = SlugRules::from_config(&SlugConfig {
        lowercase: false,
        ..Default::default()
    });
    assert!(rules.validate("Hello-World").is_ok());
}

#[test]
fn wrong_separator_is_a_format_violation() {
    let rules = SlugRules::default();
    assert!(matches!(
        rules.validate("hello_world"),
        Err(SlugViolation::Format { offending: '_', .. })
    ));

    let rules = SlugRules::from_config(&SlugConfig {
        separator: Separator::Underscore,
        ..Default::default()
    });
    assert!(rules.validate("hello_world").is_ok());
    assert!(rules.validate("hello-world").is_err());
}

#[test]
fn default_format_message_names_active_separator() {
    let rules = SlugRules::from_config(&SlugConfig {
        separator: Separator::Underscore,
        ..Default::default()
    });
    let message =
        "Slug must contain only lowercase letters, numbers, underscores, and forward slashes.";
    assert_eq!(rules.format_message(), message);
    match rules.validate("hello-world") {
        Err(SlugViolation::Format { message: got, offending }) => {
            assert_eq!(offending, '-');
            assert_eq!(got, message);
        }
        other => panic!("expected format violation, got {other:?}"),
    }

    assert_eq!(
        default_format_message(Separator::Hyphen, true),
        DEFAULT_FORMAT_MESSAGE
    );
    assert_eq!(
        default_format_message(Separator::Hyphen, false),
        "Slug must contain only letters, numbers, hyphens, and forward slashes."
    );
}

#[test]
fn url_values_skip_format_rule() {
    let rules = SlugRules::default();
    assert!(rules.validate("https://example.com/a.html").is_ok());
}

#[test]
fn encoder_output_always_validates() {
    let config = SlugConfig::default();
    let rules = SlugRules::from_config(&config);
    for text in ["Привет Мир", "Café déjà vu", "/a/b/", "Hello, World!"] {
        let slug = encode(text, config.slug_options());
        assert!(rules.validate(&slug).is_ok(), "{slug:?}");
    }
}

// ── Duplicates ───────────────────────────────────────────────────

#[test]
fn duplicate_is_reported_when_not_allowed() {
    let rules = SlugRules::default();
    let known: HashSet<String> = ["taken".to_string()].into_iter().collect();
    assert!(matches!(
        rules.validate_unique("taken", &known),
        Err(SlugViolation::Duplicate { .. })
    ));
    assert!(rules.validate_unique("free", &known).is_ok());
}

#[test]
fn duplicate_is_accepted_when_allowed() {
    let rules = SlugRules::from_config(&SlugConfig {
        allow_duplicates: true,
        ..Default::default()
    });
    let known: HashSet<String> = ["taken".to_string()].into_iter().collect();
    assert!(rules.validate_unique("taken", &known).is_ok());
}
