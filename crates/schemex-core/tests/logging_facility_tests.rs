#![allow(clippy::unwrap_used, clippy::expect_used)]

use schemex_core::errors::SchemexError;
use schemex_core::logging_facility::test_capture::{init_test_capture, CapturedEvent};
use schemex_core::model::Entity;
use schemex_core::reconcile::{reconcile_versions, ReconcileOptions};
use schemex_core::source::MemoryCorpus;
use schemex_core::{log_op_end, log_op_error, log_op_start};
use schemex_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ENTITY_NAME, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_FROM_VERSION, FIELD_REQUEST_ID, FIELD_TO_VERSION, FIELD_TRACE_ID,
};
use schemex_core_types::{RequestContext, RequestId, TraceId};

fn for_request<'a>(events: &'a [CapturedEvent], request_id: &str) -> Vec<&'a CapturedEvent> {
    events
        .iter()
        .filter(|e| {
            e.op.as_deref() == Some("reconcile_versions")
                && e.field(FIELD_REQUEST_ID) == Some(request_id)
        })
        .collect()
}

fn options(request_id: &str) -> ReconcileOptions {
    ReconcileOptions {
        context: RequestContext::with_request_id(RequestId::from_string(request_id)),
        ..Default::default()
    }
}

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42u64);

    let end_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = SchemexError::VersionNotFound {
        version: "v9".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10u64);

    let error_events: Vec<_> = capture
        .events_for_op(op_name)
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();

    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(error_events[0].level, tracing::Level::ERROR);
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, from_version = "v1", to_version = "v2");

    let events = capture.events_for_op(op_name);
    let start_event = events.first().expect("Should have start event");

    assert_eq!(start_event.field(FIELD_FROM_VERSION), Some("v1"));
    assert_eq!(start_event.field(FIELD_TO_VERSION), Some("v2"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_capture_count_events() {
    let capture = init_test_capture();
    let op1_name = "test_count_events_op1_unique_5";
    let op2_name = "test_count_events_op2_unique_5";

    log_op_start!(op1_name);
    log_op_start!(op2_name);
    log_op_end!(op1_name, duration_ms = 10u64);

    let mine = |e: &CapturedEvent| {
        e.op.as_deref() == Some(op1_name) || e.op.as_deref() == Some(op2_name)
    };
    let start_count = capture.count_events(|e| mine(e) && e.event.as_deref() == Some(EVENT_START));
    let end_count = capture.count_events(|e| mine(e) && e.event.as_deref() == Some(EVENT_END));

    assert_eq!(start_count, 2);
    assert_eq!(end_count, 1);
}

// ---------------------------------------------------------------------------
// reconcile_versions owns exactly one start and one terminal event
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_reconcile_versions_emits_start_and_end_with_counts() {
    let capture = init_test_capture();
    let request_id = "logging-reconcile-ok";

    let corpus = MemoryCorpus::new()
        .with_version("v1", [Entity::new("A"), Entity::new("B")])
        .with_version(
            "v2",
            [Entity::new("B").with_meta("Category", "Masters"), Entity::new("C")],
        );

    reconcile_versions(&corpus, "v1", "v2", &options(request_id))
        .await
        .unwrap();

    let events = capture.events();
    let mine = for_request(&events, request_id);

    let starts: Vec<_> = mine
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .collect();
    let ends: Vec<_> = mine
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(starts.len(), 1);
    assert_eq!(ends.len(), 1);
    assert_eq!(starts[0].field("from_version"), Some("v1"));
    assert_eq!(ends[0].field("added"), Some("1"));
    assert_eq!(ends[0].field("removed"), Some("1"));
    assert_eq!(ends[0].field("modified"), Some("1"));
    assert_eq!(ends[0].field("skipped"), Some("0"));
    assert!(ends[0].field("duration_ms").is_some());
}

#[tokio::test]
async fn test_reconcile_versions_failure_emits_end_error() {
    let capture = init_test_capture();
    let request_id = "logging-reconcile-err";

    let corpus = MemoryCorpus::new().with_version("v1", [Entity::new("A")]);

    let err = reconcile_versions(&corpus, "v1", "v7", &options(request_id))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "ERR_NOT_FOUND");

    let events = capture.events();
    let mine = for_request(&events, request_id);

    assert_eq!(
        mine.iter()
            .filter(|e| e.event.as_deref() == Some(EVENT_END))
            .count(),
        0
    );
    let error_event = mine
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");
    assert_eq!(error_event.field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(error_event.field(FIELD_ERR_KIND), Some("NotFound"));
}

#[tokio::test]
async fn test_skipped_entity_is_logged_with_code() {
    let capture = init_test_capture();
    let request_id = "logging-reconcile-skip";

    let corpus = MemoryCorpus::new()
        .with_index_entry("v1", ["Broken"])
        .with_index_entry("v2", ["Broken"])
        .with_document("v2", "Broken", Entity::new("Broken"));

    let comparison = reconcile_versions(&corpus, "v1", "v2", &options(request_id))
        .await
        .unwrap();
    assert_eq!(comparison.report.skipped.len(), 1);

    let skipped_events = capture.count_events(|e| {
        e.field(FIELD_REQUEST_ID) == Some(request_id)
            && e.field(FIELD_ENTITY_NAME) == Some("Broken")
            && e.field(FIELD_ERR_CODE) == Some("ERR_NOT_FOUND")
    });
    assert_eq!(skipped_events, 1);
}

#[tokio::test]
async fn test_trace_id_is_logged_on_lifecycle_and_skip_events() {
    let capture = init_test_capture();
    let request_id = "logging-reconcile-traced";

    let corpus = MemoryCorpus::new()
        .with_index_entry("v1", ["Broken"])
        .with_index_entry("v2", ["Broken"])
        .with_document("v2", "Broken", Entity::new("Broken"));
    let options = ReconcileOptions {
        context: RequestContext::with_request_id(RequestId::from_string(request_id))
            .with_trace_id(TraceId::from_string("trace-logged")),
        ..Default::default()
    };

    reconcile_versions(&corpus, "v1", "v2", &options).await.unwrap();

    let events = capture.events();
    let mine: Vec<&CapturedEvent> = events
        .iter()
        .filter(|e| e.field(FIELD_REQUEST_ID) == Some(request_id))
        .collect();

    for event in [EVENT_START, EVENT_END] {
        let lifecycle = mine
            .iter()
            .find(|e| e.event.as_deref() == Some(event))
            .expect("lifecycle event");
        assert_eq!(lifecycle.field(FIELD_TRACE_ID), Some("trace-logged"));
    }
    let skip = mine
        .iter()
        .find(|e| e.field(FIELD_ENTITY_NAME) == Some("Broken"))
        .expect("skip event");
    assert_eq!(skip.field(FIELD_TRACE_ID), Some("trace-logged"));
}

#[tokio::test]
async fn test_trace_id_is_logged_on_error_event() {
    let capture = init_test_capture();
    let request_id = "logging-reconcile-traced-err";

    let corpus = MemoryCorpus::new().with_version("v1", [Entity::new("A")]);
    let options = ReconcileOptions {
        context: RequestContext::with_request_id(RequestId::from_string(request_id))
            .with_trace_id(TraceId::from_string("trace-failed")),
        ..Default::default()
    };

    let err = reconcile_versions(&corpus, "v1", "v7", &options)
        .await
        .unwrap_err();
    assert_eq!(err.trace_id().map(|id| id.as_str()), Some("trace-failed"));

    let events = capture.events();
    let error_event = for_request(&events, request_id)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");
    assert_eq!(error_event.field(FIELD_TRACE_ID), Some("trace-failed"));
}

#[tokio::test]
async fn test_untraced_run_omits_trace_field() {
    let capture = init_test_capture();
    let request_id = "logging-reconcile-untraced";

    let corpus = MemoryCorpus::new()
        .with_version("v1", [Entity::new("A")])
        .with_version("v2", [Entity::new("A")]);

    reconcile_versions(&corpus, "v1", "v2", &options(request_id))
        .await
        .unwrap();

    let events = capture.events();
    let mine = for_request(&events, request_id);
    assert!(!mine.is_empty());
    assert!(mine.iter().all(|e| e.field(FIELD_TRACE_ID).is_none()));
}
