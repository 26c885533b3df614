//! Formatting helpers for text output.
//!
//! Byte sizes follow the binary units used throughout (`KiB`, `MiB`, `GiB`).
//! Functions that differ between compact table columns and verbose output
//! are parameterized via [`FmtStyle`].

/// Controls compact (table columns) vs verbose (detail lines) output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FmtStyle {
    /// Compact: no spaces, short suffixes ("1.5G")
    Compact,
    /// Detail: spaces, full suffixes ("1.5 GiB")
    Detail,
}

/// Format byte count as human-readable size.
///
/// Compact: `"1.5G"`, `"100.3M"`, `"50.0K"`, `"512B"`
/// Detail:  `"1.5 GiB"`, `"100.3 MiB"`, `"50.0 KiB"`, `"512 B"`
///
/// Negative values (used memory can go below zero) keep a leading `-`.
pub fn format_bytes(bytes: i64, style: FmtStyle) -> String {
    let (g, m, k, b) = match style {
        FmtStyle::Compact => ("G", "M", "K", "B"),
        FmtStyle::Detail => (" GiB", " MiB", " KiB", " B"),
    };
    let sign = if bytes < 0 { "-" } else { "" };
    let abs = bytes.unsigned_abs();
    let f = abs as f64;
    if abs >= 1024 * 1024 * 1024 {
        format!("{}{:.1}{}", sign, f / (1024.0 * 1024.0 * 1024.0), g)
    } else if abs >= 1024 * 1024 {
        format!("{}{:.1}{}", sign, f / (1024.0 * 1024.0), m)
    } else if abs >= 1024 {
        format!("{}{:.1}{}", sign, f / 1024.0, k)
    } else {
        format!("{}{}{}", sign, abs, b)
    }
}

/// Format seconds since midnight as `HH:MM:SS`.
///
/// Hours are not wrapped, so values past one day print as `25:00:00`.
pub fn format_time_of_day(secs: u32) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Format `Option<f64>` percentage with one decimal, `"--"` for `None`.
pub fn format_percent(v: Option<f64>, width: usize) -> String {
    match v {
        Some(v) => format!("{:>width$.1}%", v, width = width.saturating_sub(1)),
        None => format!("{:>width$}", "--", width = width),
    }
}
