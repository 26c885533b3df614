//! Log collection: turning application log text into memory samples.

pub mod log_collector;

pub use log_collector::{LineFilter, LogCollector, RecordParser, filter_info_lines};
