//! Memory usage samples extracted from INFO log lines.

use serde::{Deserialize, Serialize};

/// One point-in-time memory snapshot.
///
/// Source: a single INFO line of the application log.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
pub struct MemorySample {
    /// Seconds since local midnight.
    /// Source: `HH:MM:SS` token (second token of the line)
    #[serde(rename = "time")]
    pub time_of_day_seconds: u32,

    /// Total memory (bytes).
    /// Source: second-to-last token of the line
    #[serde(rename = "totalMemory")]
    pub total_memory_bytes: i64,

    /// Used memory (bytes), `total - free`.
    /// Note: not clamped, negative when free exceeds total
    #[serde(rename = "usedMemory")]
    pub used_memory_bytes: i64,
}

impl MemorySample {
    pub const fn new(
        time_of_day_seconds: u32,
        total_memory_bytes: i64,
        used_memory_bytes: i64,
    ) -> Self {
        Self {
            time_of_day_seconds,
            total_memory_bytes,
            used_memory_bytes,
        }
    }

    /// Builds a sample from the raw total/free pair found in a log line.
    /// The difference saturates at the `i64` bounds.
    pub fn from_total_free(time_of_day_seconds: u32, total: i64, free: i64) -> Self {
        Self::new(time_of_day_seconds, total, total.saturating_sub(free))
    }

    /// `false` when used memory exceeds total memory.
    pub fn is_consistent(&self) -> bool {
        self.used_memory_bytes <= self.total_memory_bytes
    }

    /// Used memory as a percentage of total, `None` when total is not positive.
    pub fn used_percent(&self) -> Option<f64> {
        used_percent(self.total_memory_bytes, self.used_memory_bytes)
    }

    /// Places the sample on an absolute time axis starting at `day_origin_millis`.
    ///
    /// Returns `None` if the resulting timestamp overflows `i64`.
    pub fn to_chart_point(&self, day_origin_millis: i64) -> Option<ChartPoint> {
        let offset = i64::from(self.time_of_day_seconds).checked_mul(1000)?;
        Some(ChartPoint {
            time: day_origin_millis.checked_add(offset)?,
            total_memory: self.total_memory_bytes,
            used_memory: self.used_memory_bytes,
        })
    }
}

/// Sample positioned on an absolute time axis, as consumed by chart renderers.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    /// Epoch milliseconds.
    pub time: i64,
    pub total_memory: i64,
    pub used_memory: i64,
}

impl ChartPoint {
    /// Used memory as a percentage of total, `None` when total is not positive.
    pub fn used_percent(&self) -> Option<f64> {
        used_percent(self.total_memory, self.used_memory)
    }
}

fn used_percent(total: i64, used: i64) -> Option<f64> {
    if total <= 0 {
        return None;
    }
    Some(used as f64 * 100.0 / total as f64)
}

/// Demo series shown when no log file is supplied.
pub const FALLBACK_SAMPLES: [MemorySample; 3] = [
    MemorySample::new(68663, 44203776, 36407744),
    MemorySample::new(68710, 44361152, 28145936),
    MemorySample::new(68740, 44361152, 37661760),
];
