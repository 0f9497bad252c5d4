//! Environment variable overrides.
//!
//! Applied after the YAML file is loaded, so `QUILL_*` variables win over
//! file values. Unset or empty variables leave the file value untouched.

use std::collections::HashMap;
use std::path::PathBuf;

use quill_logging::LogFormat;
use quill_markdown::{DuplicateIds, UnterminatedFence};
use thiserror::Error;

use crate::schema::QuillConfig;

pub const LOG_LEVEL_VAR: &str = "QUILL_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "QUILL_LOG_FORMAT";
pub const LOG_DIR_VAR: &str = "QUILL_LOG_DIR";
pub const UNTERMINATED_FENCE_VAR: &str = "QUILL_UNTERMINATED_FENCE";
pub const DUPLICATE_IDS_VAR: &str = "QUILL_DUPLICATE_IDS";
pub const WORDS_PER_MINUTE_VAR: &str = "QUILL_WORDS_PER_MINUTE";
pub const EXCERPT_CHARS_VAR: &str = "QUILL_EXCERPT_CHARS";

/// Error returned for an override that cannot be parsed.
#[derive(Debug, Error)]
#[error("Invalid value {value:?} for {var}: expected {expected}")]
pub struct EnvOverrideError {
    pub var: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: QuillConfig) -> Result<QuillConfig, EnvOverrideError> {
    apply_env_overrides_with(config, &std::env::vars().collect())
}

/// Apply overrides from a provided map (useful for testing).
pub fn apply_env_overrides_with(
    mut config: QuillConfig,
    env: &HashMap<String, String>,
) -> Result<QuillConfig, EnvOverrideError> {
    let get = |var: &str| env.get(var).map(|v| v.trim()).filter(|v| !v.is_empty());

    if let Some(level) = get(LOG_LEVEL_VAR) {
        config.logging.level = level.to_string();
    }
    if let Some(value) = get(LOG_FORMAT_VAR) {
        config.logging.format = value
            .parse::<LogFormat>()
            .map_err(|_| invalid(LOG_FORMAT_VAR, value, "\"pretty\" or \"json\""))?;
    }
    if let Some(dir) = get(LOG_DIR_VAR) {
        config.logging.dir = Some(PathBuf::from(dir));
    }
    if let Some(value) = get(UNTERMINATED_FENCE_VAR) {
        config.markdown.unterminated_fence = match value.to_ascii_lowercase().as_str() {
            "discard" => UnterminatedFence::Discard,
            "flush" => UnterminatedFence::Flush,
            _ => return Err(invalid(UNTERMINATED_FENCE_VAR, value, "\"discard\" or \"flush\"")),
        };
    }
    if let Some(value) = get(DUPLICATE_IDS_VAR) {
        config.markdown.duplicate_ids = match value.to_ascii_lowercase().as_str() {
            "keep" => DuplicateIds::Keep,
            "suffix" => DuplicateIds::Suffix,
            _ => return Err(invalid(DUPLICATE_IDS_VAR, value, "\"keep\" or \"suffix\"")),
        };
    }
    if let Some(value) = get(WORDS_PER_MINUTE_VAR) {
        config.summary.words_per_minute = value
            .parse()
            .map_err(|_| invalid(WORDS_PER_MINUTE_VAR, value, "a non-negative integer"))?;
    }
    if let Some(value) = get(EXCERPT_CHARS_VAR) {
        config.summary.excerpt_chars = value
            .parse()
            .map_err(|_| invalid(EXCERPT_CHARS_VAR, value, "a non-negative integer"))?;
    }

    Ok(config)
}

fn invalid(var: &'static str, value: &str, expected: &'static str) -> EnvOverrideError {
    EnvOverrideError {
        var,
        value: value.to_string(),
        expected,
    }
}
