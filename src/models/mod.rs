//! Data models shared by the parser, series builder and renderers.

mod sample;

pub use sample::{ChartPoint, FALLBACK_SAMPLES, MemorySample};
