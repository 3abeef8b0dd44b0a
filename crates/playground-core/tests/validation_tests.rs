mod common;

use common::{snippet, HOST};
use playground_core::errors::{ExError, ExErrorKind, PlaygroundError};
use playground_core::rules::validate_snippet;
use playground_core::Snippet;

// ===== VALIDATE_SNIPPET SUCCESS TESTS =====

#[test]
fn test_validate_accepts_complete_snippet() {
    assert!(validate_snippet(&snippet("c1", "Widget")).is_ok());
}

#[test]
fn test_validate_accepts_defaults_with_id() {
    let defaults = Snippet {
        id: "c1".to_string(),
        ..Snippet::defaults(HOST)
    };
    assert!(validate_snippet(&defaults).is_ok());
}

// ===== VALIDATE_SNIPPET FAILURE TESTS =====

#[test]
fn test_validate_rejects_empty_entity_first() {
    let err = validate_snippet(&Snippet::default()).unwrap_err();
    assert_eq!(err, PlaygroundError::EmptySnippet);
}

#[test]
fn test_validate_name_checked_before_id() {
    let err = validate_snippet(&snippet("", " \t ")).unwrap_err();
    assert!(matches!(err, PlaygroundError::EmptyName { .. }));
}

#[test]
fn test_validate_rejects_missing_id() {
    let err = validate_snippet(&snippet("", "Widget")).unwrap_err();
    assert_eq!(
        err,
        PlaygroundError::MissingId {
            name: "Widget".to_string()
        }
    );
}

#[test]
fn test_validation_errors_map_to_validation_kind() {
    for err in [
        PlaygroundError::EmptySnippet,
        validate_snippet(&snippet("c1", "")).unwrap_err(),
        validate_snippet(&snippet("", "x")).unwrap_err(),
    ] {
        assert!(err.is_validation());
        let ex: ExError = err.into();
        assert_eq!(ex.kind(), ExErrorKind::Validation);
        assert_eq!(ex.code(), "ERR_VALIDATION");
    }
}
