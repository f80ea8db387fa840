//! Builds the chapter service and reader context from flags and environment

use anyhow::{Context, Result};
use qyn_reader_core::config::parse_timeout;
use qyn_reader_core::{
    ChapterService, HttpChapterService, MemoryChapterService, ReaderConfig, ReaderContext,
    ReaderId,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Connection flags shared by every subcommand
#[derive(Debug, Default)]
pub struct ConnectOptions {
    pub api_url: Option<String>,
    pub reader_id: Option<String>,
    pub timeout: Option<String>,
    pub fixture: Option<PathBuf>,
}

/// A service to read from and the reader it reads for
pub struct Connection {
    pub service: Arc<dyn ChapterService>,
    pub context: ReaderContext,
}

impl ConnectOptions {
    /// Environment config with flags applied on top
    pub fn config(&self) -> Result<ReaderConfig> {
        let mut config = ReaderConfig::from_env().context("Invalid environment configuration")?;

        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(reader) = &self.reader_id {
            config.reader_id = Some(ReaderId::parse(reader.as_str()).context("Invalid --reader-id")?);
        }
        if let Some(timeout) = &self.timeout {
            config.request_timeout = parse_timeout(timeout).context("Invalid --timeout")?;
        }

        Ok(config)
    }

    /// Connect to the API, or load the fixture file when one is given
    pub fn connect(&self) -> Result<Connection> {
        let config = self.config()?;

        let service: Arc<dyn ChapterService> = match &self.fixture {
            Some(path) => {
                debug!(path = %path.display(), "Using fixture chapters");
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read fixture: {}", path.display()))?;
                let service = MemoryChapterService::from_json(&json)
                    .with_context(|| format!("Failed to parse fixture: {}", path.display()))?;
                Arc::new(service)
            }
            None => {
                debug!(url = %config.api_base_url, "Using chapter API");
                Arc::new(
                    HttpChapterService::from_config(&config)
                        .context("Failed to create HTTP client")?,
                )
            }
        };

        Ok(Connection {
            service,
            context: config.reader_context(),
        })
    }
}
