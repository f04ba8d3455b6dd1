//! 日志初始化
//!
//! stdout 属于终端界面，日志写入配置目录下的文件。库使用 `log` 门面，
//! `try_init` 会安装 `LogTracer`，把 `log` 记录桥接到 tracing。

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const FALLBACK_DIRECTIVE: &str = "info";

/// Build the filter from a directive string, falling back to `info`.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {directive:?} ({e}), using {FALLBACK_DIRECTIVE}");
        EnvFilter::new(FALLBACK_DIRECTIVE)
    })
}

/// 初始化全局日志订阅者，追加写入 `path`
pub fn init(directive: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(build_filter(directive))
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!("Logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_accepts_targets() {
        let filter = build_filter("warn,artwork_grid_core=debug");
        assert!(filter.to_string().contains("artwork_grid_core=debug"));
    }

    #[test]
    fn invalid_filter_falls_back() {
        assert_eq!(build_filter("artwork_grid=verbose").to_string(), FALLBACK_DIRECTIVE);
    }
}
