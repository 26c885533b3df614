//! Application log collector.
//!
//! Reads a whole log file into memory, picks out INFO lines and parses
//! their memory fields into an ordered [`Series`].

mod filter;
mod parser;

pub use filter::{INFO_MARKER, LineFilter, filter_info_lines};
pub use parser::{LineFields, RecordParser};

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::Error;
use crate::series::{BuilderConfig, Series, SeriesBuilder};

/// Turns log files (or already-read log text) into sample series.
#[derive(Debug, Clone, Default)]
pub struct LogCollector {
    builder: SeriesBuilder,
}

impl LogCollector {
    pub fn new(config: &BuilderConfig) -> Self {
        Self {
            builder: SeriesBuilder::new(config),
        }
    }

    /// Reads `path` to text and builds its series.
    pub fn collect_file(&self, path: impl AsRef<Path>) -> Result<Series, Error> {
        let path = path.as_ref();
        let started = Instant::now();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        debug!("Read {} bytes from {}", text.len(), path.display());

        let series = self.collect_text(&text)?;
        info!(
            "Collected {} samples from {} in {:?}",
            series.len(),
            path.display(),
            started.elapsed()
        );
        Ok(series)
    }

    /// Builds the series for text that is already in memory.
    pub fn collect_text(&self, text: &str) -> Result<Series, Error> {
        self.builder.build(text)
    }
}
