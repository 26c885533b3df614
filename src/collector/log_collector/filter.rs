//! Selection of INFO lines carrying memory snapshots.

/// Marker separating the line prefix from an informational message.
pub const INFO_MARKER: &str = " | INFO:";

/// Keeps only the lines that contain a marker substring.
///
/// Lines are split on `\n` only; a trailing `\r` stays on the line and is
/// removed later when tokens are trimmed.
#[derive(Debug, Clone)]
pub struct LineFilter {
    marker: String,
}

impl Default for LineFilter {
    fn default() -> Self {
        Self::new(INFO_MARKER)
    }
}

impl LineFilter {
    pub fn new(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Matching lines with their 1-based line numbers, in source order.
    pub fn numbered_lines<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, &'a str)> + 'a {
        text.split('\n')
            .enumerate()
            .filter(move |(_, line)| line.contains(self.marker.as_str()))
            .map(|(idx, line)| (idx + 1, line))
    }

    /// Matching lines in source order.
    pub fn filter<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split('\n')
            .filter(|line| line.contains(self.marker.as_str()))
            .collect()
    }
}

/// Returns the INFO lines of `text` in source order.
pub fn filter_info_lines(text: &str) -> Vec<&str> {
    LineFilter::default().filter(text)
}
