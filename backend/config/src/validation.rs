//! Config validation with field paths and user-friendly messages.

use crate::schema::QuillConfig;
use thiserror::Error;

const KNOWN_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// Errors and warnings found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

pub fn validate(config: &QuillConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_summary(config, &mut report);
    validate_logging(config, &mut report);
    report
}

fn validate_summary(config: &QuillConfig, report: &mut ValidationReport) {
    let summary = &config.summary;
    if summary.words_per_minute == 0 {
        report.error("summary.wordsPerMinute", "Must be greater than zero");
    } else if summary.words_per_minute > 1000 {
        report.warn("summary.wordsPerMinute", "Unusually high reading speed");
    }
    if summary.excerpt_chars == 0 {
        report.warn("summary.excerptChars", "Excerpts will be empty");
    }
}

fn validate_logging(config: &QuillConfig, report: &mut ValidationReport) {
    let logging = &config.logging;
    let level = logging.level.trim();
    if level.is_empty() {
        report.error("logging.level", "Level cannot be empty");
    } else if !level.contains('=') && !KNOWN_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        report.warn(
            "logging.level",
            format!("Unknown level '{level}'; expected one of {}", KNOWN_LEVELS.join(", ")),
        );
    }
    if let Some(dir) = &logging.dir {
        if dir.is_file() {
            report.error("logging.dir", format!("{} is a file, not a directory", dir.display()));
        }
    }
}
