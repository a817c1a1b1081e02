//! Structured logging facility for schemex
//!
//! - Single initialization point via `init(profile)`
//! - Lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! The layer that owns an operation (the reconciler for version
//! comparisons, the CLI for commands) emits start/end events; everything
//! below it uses plain `tracing::debug!`.
//!
//! ```rust
//! use schemex_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
