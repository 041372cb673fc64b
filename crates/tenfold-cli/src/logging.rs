use std::{fs::File, io, path::Path, sync::Arc};

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Where log events go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// The terminal is owned by the TUI and no log file was requested.
    Discard,
}

impl<'a> LogTarget<'a> {
    pub(crate) fn select(log_file: Option<&'a Path>, owns_terminal: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if owns_terminal => Self::Discard,
            None => Self::Stderr,
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default `warn` filter.
pub(crate) fn init(target: LogTarget<'_>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match target {
        LogTarget::Discard => return Ok(()),
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    result.map_err(|e| anyhow::anyhow!(e).context("Failed to install log subscriber"))
}
