use playground_core::errors::{ExError, ExErrorKind, PlaygroundError};

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = PlaygroundError::SnippetNotFound {
        snippet_id: "unknown".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.entity_id(), Some("unknown"));
}

#[test]
fn test_already_exists_distinct_from_not_found() {
    let ex_err: ExError = PlaygroundError::AlreadyExists {
        snippet_id: "c1".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::AlreadyExists);
    assert_ne!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.op(), Some("store_add"));
}

#[test]
fn test_validation_errors_share_kind() {
    let errors = vec![
        PlaygroundError::EmptySnippet,
        PlaygroundError::EmptyName {
            snippet_id: "c1".to_string(),
        },
        PlaygroundError::MissingId {
            name: "Foo".to_string(),
        },
    ];

    for err in errors {
        assert!(err.is_validation());
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), ExErrorKind::Validation);
    }
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::Validation, "ERR_VALIDATION"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::AlreadyExists, "ERR_ALREADY_EXISTS"),
        (ExErrorKind::Parse, "ERR_PARSE"),
        (ExErrorKind::Fetch, "ERR_FETCH"),
        (ExErrorKind::Dispatch, "ERR_DISPATCH"),
        (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
        (ExErrorKind::Config, "ERR_CONFIG"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_yaml_error_becomes_parse() {
    let yaml_err = serde_yaml::from_str::<Vec<String>>("a: [").unwrap_err();
    let err: PlaygroundError = yaml_err.into();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Parse);
    assert!(ex_err.kind().is_resolution_failure());
}
