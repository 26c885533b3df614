//! Building ordered sample series from log text.
//!
//! [`SeriesBuilder`] runs the line filter and record parser over a whole log
//! text. By default the first bad line aborts the build; [`ParseMode::Lenient`]
//! skips bad lines and records them on the resulting [`Series`].

use std::str::FromStr;

use tracing::{debug, warn};

use crate::collector::log_collector::{INFO_MARKER, LineFilter, RecordParser};
use crate::error::{Error, ParseError};
use crate::models::{ChartPoint, FALLBACK_SAMPLES, MemorySample};

/// What to do when a single INFO line fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Abort the build with the first error.
    #[default]
    FailFast,
    /// Skip the line, keep going, report it on the series.
    Lenient,
}

impl FromStr for ParseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "strict" => Ok(ParseMode::FailFast),
            "lenient" | "skip" => Ok(ParseMode::Lenient),
            other => Err(Error::InvalidArgument(format!(
                "unknown parse mode '{}' (expected fail-fast or lenient)",
                other
            ))),
        }
    }
}

/// Series builder settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    pub mode: ParseMode,
    /// Substring identifying qualifying lines.
    pub marker: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::FailFast,
            marker: INFO_MARKER.to_string(),
        }
    }
}

/// A line dropped in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source text.
    pub line: usize,
    pub error: ParseError,
}

/// Aggregate figures over a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeriesSummary {
    pub count: usize,
    pub first_time: Option<u32>,
    pub last_time: Option<u32>,
    pub peak_used: Option<i64>,
    pub min_used: Option<i64>,
    pub peak_total: Option<i64>,
    /// Samples with used > total.
    pub anomalies: usize,
}

/// Ordered samples in source line order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    samples: Vec<MemorySample>,
    skipped: Vec<SkippedLine>,
}

impl Series {
    pub fn from_samples(samples: Vec<MemorySample>) -> Self {
        Self {
            samples,
            skipped: Vec::new(),
        }
    }

    /// The demo series used when no log is supplied.
    pub fn fallback() -> Self {
        Self::from_samples(FALLBACK_SAMPLES.to_vec())
    }

    pub fn samples(&self) -> &[MemorySample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<MemorySample> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Lines skipped in lenient mode (always empty in fail-fast mode).
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    /// `true` unless some sample has used memory above total memory.
    pub fn all_samples_consistent(&self) -> bool {
        self.samples.iter().all(MemorySample::is_consistent)
    }

    /// Samples violating used <= total, with their index in the series.
    pub fn anomalies(&self) -> impl Iterator<Item = (usize, &MemorySample)> {
        self.samples
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_consistent())
    }

    /// `true` when time of day never decreases along the series.
    pub fn is_time_ordered(&self) -> bool {
        self.samples
            .windows(2)
            .all(|w| w[0].time_of_day_seconds <= w[1].time_of_day_seconds)
    }

    pub fn summary(&self) -> SeriesSummary {
        let used = || self.samples.iter().map(|s| s.used_memory_bytes);
        SeriesSummary {
            count: self.samples.len(),
            first_time: self.samples.first().map(|s| s.time_of_day_seconds),
            last_time: self.samples.last().map(|s| s.time_of_day_seconds),
            peak_used: used().max(),
            min_used: used().min(),
            peak_total: self.samples.iter().map(|s| s.total_memory_bytes).max(),
            anomalies: self.anomalies().count(),
        }
    }

    /// Places every sample on an absolute axis starting at `day_origin_millis`.
    ///
    /// Fails with `InvalidArgument` if a timestamp would overflow `i64`.
    pub fn to_chart_points(&self, day_origin_millis: i64) -> Result<Vec<ChartPoint>, Error> {
        self.samples
            .iter()
            .map(|s| {
                s.to_chart_point(day_origin_millis).ok_or_else(|| {
                    Error::InvalidArgument(format!(
                        "day origin {} + {}s overflows the time axis",
                        day_origin_millis, s.time_of_day_seconds
                    ))
                })
            })
            .collect()
    }
}

/// Applies the record parser to every INFO line of a log text.
#[derive(Debug, Clone, Default)]
pub struct SeriesBuilder {
    mode: ParseMode,
    filter: LineFilter,
    parser: RecordParser,
}

impl SeriesBuilder {
    pub fn new(config: &BuilderConfig) -> Self {
        Self {
            mode: config.mode,
            filter: LineFilter::new(&config.marker),
            parser: RecordParser,
        }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Builds the series for `text`.
    ///
    /// Text without any INFO line yields an empty series, not an error.
    pub fn build(&self, text: &str) -> Result<Series, Error> {
        let mut series = Series::default();

        for (line, content) in self.filter.numbered_lines(text) {
            match self.parser.parse_line(content) {
                Ok(sample) => series.samples.push(sample),
                Err(error) => match self.mode {
                    ParseMode::FailFast => return Err(Error::Parse { line, source: error }),
                    ParseMode::Lenient => {
                        warn!("Skipping line {}: {}", line, error);
                        series.skipped.push(SkippedLine { line, error });
                    }
                },
            }
        }

        debug!(
            samples = series.samples.len(),
            skipped = series.skipped.len(),
            "Series built"
        );
        for (idx, sample) in series.anomalies() {
            warn!(
                "Sample {} at {}s: used {} exceeds total {}",
                idx,
                sample.time_of_day_seconds,
                sample.used_memory_bytes,
                sample.total_memory_bytes
            );
        }

        Ok(series)
    }
}

/// Builds a series from `text` with default settings (fail-fast, INFO marker).
pub fn build_series(text: &str) -> Result<Series, Error> {
    SeriesBuilder::default().build(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "\
2024-01-01 10:11:03 | INFO: heap stats 44203776 7796032
2024-01-01 10:11:50 | INFO: heap stats 44361152 16215216
";

    fn lenient() -> SeriesBuilder {
        SeriesBuilder::new(&BuilderConfig {
            mode: ParseMode::Lenient,
            ..BuilderConfig::default()
        })
    }

    #[test]
    fn test_scenario() {
        let series = build_series(SCENARIO).unwrap();
        assert_eq!(
            series.samples(),
            &[
                MemorySample::new(36663, 44203776, 36407744),
                MemorySample::new(36710, 44361152, 28145936),
            ]
        );
        // same spacing as the first two fallback samples
        let delta =
            series.samples()[1].time_of_day_seconds - series.samples()[0].time_of_day_seconds;
        assert_eq!(
            delta,
            FALLBACK_SAMPLES[1].time_of_day_seconds - FALLBACK_SAMPLES[0].time_of_day_seconds
        );
        assert!(series.all_samples_consistent());
        assert!(series.skipped().is_empty());
    }

    #[test]
    fn test_empty_text() {
        let series = build_series("").unwrap();
        assert!(series.is_empty());
        assert!(series.all_samples_consistent());
        assert!(series.is_time_ordered());
        assert_eq!(series.summary(), SeriesSummary::default());
    }

    #[test]
    fn test_no_info_lines_is_empty_series() {
        let series = build_series("10:00:00 | DEBUG: nothing 1 2\nrandom text").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let a = build_series(SCENARIO).unwrap();
        let b = build_series(SCENARIO).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fail_fast_reports_line_number() {
        let text = "\
2024-01-01 10:11:03 | INFO: heap stats 44203776 7796032
2024-01-01 debug | DEBUG: skipped
2024-01-01 12:34 | INFO: heap stats 1 1
2024-01-01 10:11:50 | INFO: heap stats 44361152 16215216
";
        let err = build_series(text).unwrap_err();
        assert_eq!(
            err,
            Error::Parse {
                line: 3,
                source: ParseError::MalformedTimestamp {
                    token: "12:34".to_string()
                }
            }
        );
    }

    #[test]
    fn test_lenient_skips_and_collects() {
        let text = "\
2024-01-01 10:11:03 | INFO: heap stats 44203776 7796032
2024-01-01 12:34 | INFO: heap stats 1 1
2024-01-01 10:11:50 | INFO: heap stats 44361152 oops
2024-01-01 10:11:55 | INFO: heap stats 44361152 16215216
";
        let series = lenient().build(text).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.samples()[1].time_of_day_seconds, 36715);

        let lines: Vec<usize> = series.skipped().iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 3]);
        assert!(matches!(
            series.skipped()[1].error,
            ParseError::MalformedNumber { field: "free memory", .. }
        ));
    }

    #[test]
    fn test_consistency_flag() {
        let text = "\
d 00:00:01 | INFO: x 100 40
d 00:00:02 | INFO: x 100 -20
d 00:00:03 | INFO: x 100 10
";
        let series = build_series(text).unwrap();
        assert!(!series.all_samples_consistent());

        let anomalies: Vec<usize> = series.anomalies().map(|(i, _)| i).collect();
        assert_eq!(anomalies, vec![1]);
        assert_eq!(series.summary().anomalies, 1);

        assert!(Series::fallback().all_samples_consistent());
    }

    #[test]
    fn test_order_preserved_not_sorted() {
        let text = "\
d 00:00:30 | INFO: x 100 40
d 00:00:10 | INFO: x 100 50
";
        let series = build_series(text).unwrap();
        assert_eq!(series.samples()[0].time_of_day_seconds, 30);
        assert_eq!(series.samples()[1].time_of_day_seconds, 10);
        assert!(!series.is_time_ordered());
    }

    #[test]
    fn test_summary() {
        let summary = Series::fallback().summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.first_time, Some(68663));
        assert_eq!(summary.last_time, Some(68740));
        assert_eq!(summary.peak_used, Some(37661760));
        assert_eq!(summary.min_used, Some(28145936));
        assert_eq!(summary.peak_total, Some(44361152));
        assert_eq!(summary.anomalies, 0);
    }

    #[test]
    fn test_chart_points() {
        let points = Series::fallback().to_chart_points(1_000).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].time, 1_000 + 68_740_000);
        assert_eq!(points[2].used_memory, 37661760);
    }

    #[test]
    fn test_chart_points_origin_near_max() {
        let err = Series::fallback()
            .to_chart_points(i64::MAX - 1_000)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(msg) if msg.contains("overflows")));

        assert_eq!(Series::default().to_chart_points(i64::MAX), Ok(Vec::new()));
    }

    #[test]
    fn test_custom_marker() {
        let builder = SeriesBuilder::new(&BuilderConfig {
            marker: " | MEM:".to_string(),
            ..BuilderConfig::default()
        });
        let text = "d 00:00:05 | MEM: 300 100\nd 00:00:06 | INFO: x 1 1";
        let series = builder.build(text).unwrap();
        assert_eq!(series.samples(), &[MemorySample::new(5, 300, 200)]);
    }

    #[test]
    fn test_parse_mode_from_str() {
        assert_eq!("fail-fast".parse::<ParseMode>().unwrap(), ParseMode::FailFast);
        assert_eq!("Strict".parse::<ParseMode>().unwrap(), ParseMode::FailFast);
        assert_eq!("lenient".parse::<ParseMode>().unwrap(), ParseMode::Lenient);
        assert_eq!("skip".parse::<ParseMode>().unwrap(), ParseMode::Lenient);
        assert!("maybe".parse::<ParseMode>().is_err());
        assert_eq!(ParseMode::default(), ParseMode::FailFast);
    }
}
