mod config_cmd;
mod input;
mod render_cmd;
mod summary_cmd;
mod terminal_output;
mod toc_cmd;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, warn};

use quill_config::ValidationReport;
use quill_markdown::{DuplicateIds, UnterminatedFence};

use config_cmd::ConfigCommands;
use input::STDIN;
use render_cmd::RenderFormat;
use summary_cmd::SummaryFormat;
use toc_cmd::TocFormat;

#[derive(Parser)]
#[command(name = "quill")]
#[command(about = "Quill — Markdown preview, table of contents and post summaries")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $QUILL_CONFIG or ~/.quill/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level or EnvFilter directive; RUST_LOG still takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a Markdown post
    Render {
        /// Markdown file, or `-` for stdin
        #[arg(default_value = STDIN)]
        input: String,
        #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
        /// Emit a trailing unclosed code fence instead of dropping it
        #[arg(long)]
        flush_unterminated: bool,
    },
    /// Print the table of contents
    Toc {
        /// Markdown file, or `-` for stdin
        #[arg(default_value = STDIN)]
        input: String,
        #[arg(short, long, value_enum, default_value_t = TocFormat::Tree)]
        format: TocFormat,
        /// Suffix repeated anchor ids (`a`, `a-1`, ...)
        #[arg(long)]
        unique_ids: bool,
    },
    /// Show title, slug, excerpt and reading time
    Summary {
        /// Markdown file, or `-` for stdin
        #[arg(default_value = STDIN)]
        input: String,
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },
    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(quill_config::config_path);
    let config_exists = config_path.exists();
    let (mut config, report) = quill_config::load_and_prepare(&config_path).await?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    quill_logging::init_logger(
        &config.logging.level,
        config.logging.format,
        config.logging.dir.as_deref(),
    )?;

    log_config(&config_path, config_exists, &report);

    match cli.command {
        Commands::Config(cmd) => {
            config_cmd::run(cmd, &config_path, &config, &report).await?;
        }
        _ if !report.is_valid() => {
            bail!(
                "Invalid configuration at {} (run `quill config validate`)",
                config_path.display()
            );
        }
        Commands::Render {
            input,
            format,
            flush_unterminated,
        } => {
            let mut options = config.parse_options();
            if flush_unterminated {
                options.unterminated_fence = UnterminatedFence::Flush;
            }
            render_cmd::run(&input, format, options).await?;
        }
        Commands::Toc {
            input,
            format,
            unique_ids,
        } => {
            let mut options = config.toc_options();
            if unique_ids {
                options.duplicate_ids = DuplicateIds::Suffix;
            }
            toc_cmd::run(&input, format, options).await?;
        }
        Commands::Summary { input, format } => {
            summary_cmd::run(&input, format, &config.summary_options()).await?;
        }
    }

    Ok(())
}

/// Reports the config outcome. Events emitted while loading predate the
/// subscriber, so this must run after `init_logger`.
fn log_config(path: &Path, exists: bool, report: &ValidationReport) {
    if exists {
        info!(path = %path.display(), "Using config file");
    } else {
        debug!(path = %path.display(), "No config file; using defaults");
    }
    for warning in &report.warnings {
        warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for err in &report.errors {
        error!(path = %err.path, message = %err.message, "Config error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use quill_config::ConfigValidationError;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_output(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn config_events_reach_installed_subscriber() {
        let report = ValidationReport {
            errors: vec![ConfigValidationError {
                path: "summary.wordsPerMinute".into(),
                message: "must be greater than 0".into(),
            }],
            warnings: vec![ConfigValidationError {
                path: "logging.level".into(),
                message: "unknown level".into(),
            }],
        };
        let out = captured_output(|| log_config(Path::new("/tmp/quill.yaml"), true, &report));
        assert!(out.contains("Using config file"));
        assert!(out.contains("/tmp/quill.yaml"));
        assert!(out.contains("Config warning"));
        assert!(out.contains("logging.level"));
        assert!(out.contains("Config error"));
        assert!(out.contains("summary.wordsPerMinute"));
    }

    #[test]
    fn missing_config_logged_at_debug() {
        let out = captured_output(|| {
            log_config(Path::new("/nowhere/config.yaml"), false, &ValidationReport::default())
        });
        assert!(out.contains("DEBUG"));
        assert!(out.contains("No config file; using defaults"));
        assert!(!out.contains("Config warning"));
    }
}
