//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent between the
//! reconciler, the filesystem source and the CLI.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Corpus identifiers
pub const FIELD_ENTITY_NAME: &str = "entity_name";
pub const FIELD_FROM_VERSION: &str = "from_version";
pub const FIELD_TO_VERSION: &str = "to_version";

// Reconciliation counts
pub const FIELD_ADDED_COUNT: &str = "added";
pub const FIELD_REMOVED_COUNT: &str = "removed";
pub const FIELD_MODIFIED_COUNT: &str = "modified";
pub const FIELD_SKIPPED_COUNT: &str = "skipped";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
