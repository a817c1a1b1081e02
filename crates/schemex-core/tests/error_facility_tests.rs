use schemex_core::errors::{ExError, ExErrorKind, SchemexError};
use schemex_core_types::RequestId;
use std::error::Error;

#[test]
fn test_version_not_found_verifiable_by_kind() {
    let err = SchemexError::VersionNotFound {
        version: "v9".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.code(), "ERR_NOT_FOUND");
    assert_eq!(ex_err.version(), Some("v9"));
    assert_eq!(ex_err.entity_name(), None);
}

#[test]
fn test_entity_not_found_carries_version_and_name() {
    let err = SchemexError::EntityNotFound {
        version: "v2".to_string(),
        name: "Ledger".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.version(), Some("v2"));
    assert_eq!(ex_err.entity_name(), Some("Ledger"));
}

#[test]
fn test_missing_field_distinct_from_invalid_entity() {
    let missing: ExError = SchemexError::MissingField {
        field: "Meta".to_string(),
    }
    .into();
    let invalid: ExError = SchemexError::InvalidEntity {
        reason: "Properties must be an object".to_string(),
    }
    .into();

    assert_eq!(missing.kind(), ExErrorKind::MissingField);
    assert_eq!(missing.code(), "ERR_MISSING_FIELD");
    assert!(missing.message().contains("Meta"));

    assert_eq!(invalid.kind(), ExErrorKind::InvalidEntity);
    assert_eq!(invalid.code(), "ERR_INVALID_ENTITY");
    assert_eq!(invalid.message(), "Properties must be an object");
    assert_ne!(missing.kind(), invalid.kind());
}

#[test]
fn test_caller_mistakes_map_to_invalid_input() {
    let same: ExError = SchemexError::SameVersion {
        version: "v1".to_string(),
    }
    .into();
    let bad_name: ExError = SchemexError::InvalidEntityName {
        name: "../etc".to_string(),
    }
    .into();

    assert_eq!(same.kind(), ExErrorKind::InvalidInput);
    assert_eq!(bad_name.kind(), ExErrorKind::InvalidInput);
    assert_eq!(bad_name.entity_name(), Some("../etc"));
}

#[test]
fn test_error_kind_code_mapping() {
    // Every kind has a stable, unique code
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidEntity, "ERR_INVALID_ENTITY"),
        (ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
        (ExErrorKind::InvalidIndex, "ERR_INVALID_INDEX"),
        (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Config, "ERR_CONFIG"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    let mut seen = std::collections::HashSet::new();
    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
        assert!(seen.insert(expected_code), "duplicate code {}", expected_code);
    }
}

#[test]
fn test_display_includes_code_op_and_context() {
    let err = ExError::from(SchemexError::EntityNotFound {
        version: "v3".to_string(),
        name: "Voucher".to_string(),
    })
    .with_op("fetch_entity");

    let rendered = err.to_string();
    assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
    assert!(rendered.contains("in operation 'fetch_entity'"));
    assert!(rendered.contains("(entity: Voucher)"));
    assert!(rendered.contains("(version: v3)"));
}

#[test]
fn test_source_chain_is_exposed() {
    let cause = ExError::new(ExErrorKind::Io).with_message("permission denied");
    let err = ExError::new(ExErrorKind::InvalidIndex)
        .with_message("index unreadable")
        .with_source(cause);

    assert_eq!(
        err.source_error().map(ExError::kind),
        Some(ExErrorKind::Io)
    );
    assert!(err.source().is_some());
    assert!(err.to_string().contains("caused by [ERR_IO]"));
}

#[test]
fn test_request_id_attached_by_builder() {
    let id = RequestId::from_string("req-42");
    let err = ExError::new(ExErrorKind::Internal).with_request_id(id.clone());
    assert_eq!(err.request_id(), Some(&id));
    assert!(err.trace_id().is_none());
}
