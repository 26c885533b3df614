//! memplot - memory usage series from application logs.
//!
//! Provides:
//! - `collector` — INFO line filter, record parser, log file reader
//! - `series` — series builder, parse modes, consistency diagnostics
//! - `models` — memory samples and chart points
//! - `render` — JSON and text table output for chart points
//! - `fmt` — formatting helpers (bytes, time of day, percent)
//! - `util` — lenient integer parsing, time of day and day origin helpers

pub mod collector;
pub mod error;
pub mod fmt;
pub mod models;
pub mod render;
pub mod series;
pub mod util;

pub use error::{Error, ParseError};
pub use models::{ChartPoint, FALLBACK_SAMPLES, MemorySample};
pub use series::{BuilderConfig, ParseMode, Series, SeriesBuilder, build_series};
