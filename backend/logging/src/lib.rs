//! Structured logging for Quill.
//!
//! Console output (human-readable or JSON) plus an optional rolling NDJSON
//! file, with `RUST_LOG` taking precedence over the configured level.

pub mod logger;

pub use logger::{LOG_FILE_PREFIX, LogFormat, init_logger};
