//! Reads Markdown from a file path or stdin (`-`).

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;
use tracing::debug;

pub const STDIN: &str = "-";

pub async fn read_input(source: &str) -> Result<String> {
    let text = if source == STDIN {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read Markdown from stdin")?;
        buf
    } else {
        tokio::fs::read_to_string(source)
            .await
            .with_context(|| format!("Failed to read Markdown file: {source}"))?
    };
    debug!(source, bytes = text.len(), "Read input");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        std::fs::write(&path, "# Title\n").unwrap();
        let text = read_input(path.to_str().unwrap()).await.unwrap();
        assert_eq!(text, "# Title\n");
    }

    #[tokio::test]
    async fn missing_file_has_context() {
        let err = read_input("/definitely/not/here.md").await.unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }
}
