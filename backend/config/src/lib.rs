//! `quill-config` — runtime configuration for the Quill tools.
//!
//! Provides:
//! - Typed config schema with defaults for every field
//! - YAML read/write
//! - `QUILL_*` environment overrides
//! - Validation report (errors and warnings)

pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use env::{EnvOverrideError, apply_env_overrides, apply_env_overrides_with};
pub use io::{config_path, load_config, write_config};
pub use schema::{LoggingConfig, MarkdownSettings, QuillConfig, SummarySettings};
pub use validation::{ConfigValidationError, ValidationReport, validate};

use anyhow::{Context, Result};
use std::path::Path;

/// Load a config file, apply env overrides and validate it.
///
/// Validation problems are returned rather than logged, since the logger is
/// usually configured from the result.
pub async fn load_and_prepare(path: &Path) -> Result<(QuillConfig, ValidationReport)> {
    let config = load_config(path).await?;
    let config = apply_env_overrides(config).context("Failed to apply environment overrides")?;
    let report = validate(&config);
    Ok((config, report))
}
