//! INFO line parser.
//!
//! Fields are located by position after splitting the line on single spaces:
//!
//! ```text
//! 2024-01-01 10:11:03 | INFO: heap stats 44203776 7796032
//! ^0         ^1                          ^len-2   ^len-1
//!            timestamp                   total    free
//! ```
//!
//! Splitting is on `' '` exactly, so a run of spaces produces empty tokens
//! and a trailing space leaves the last token empty.

use crate::error::ParseError;
use crate::models::MemorySample;
use crate::util::{parse_leading_int, parse_time_of_day};

/// The three load-bearing tokens of an INFO line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFields<'a> {
    /// `HH:MM:SS`, token 1.
    pub timestamp: &'a str,
    /// Total memory, second-to-last token.
    pub total: &'a str,
    /// Free memory, last token.
    pub free: &'a str,
}

impl<'a> LineFields<'a> {
    /// Splits `line` and picks out the timestamp, total and free tokens.
    pub fn split(line: &'a str) -> Result<Self, ParseError> {
        let tokens: Vec<&str> = line.split(' ').map(str::trim).collect();
        let n = tokens.len();
        if n < 2 {
            return Err(ParseError::MalformedLine { tokens: n });
        }

        Ok(Self {
            timestamp: tokens[1],
            total: tokens[n - 2],
            free: tokens[n - 1],
        })
    }
}

/// Turns one INFO line into a [`MemorySample`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser;

impl RecordParser {
    /// Parses a single line.
    ///
    /// Memory fields use the lenient leading-digit parse; used memory is
    /// `total - free` with no clamping.
    pub fn parse_line(&self, line: &str) -> Result<MemorySample, ParseError> {
        let fields = LineFields::split(line)?;

        let time = parse_time_of_day(fields.timestamp).ok_or_else(|| {
            ParseError::MalformedTimestamp {
                token: fields.timestamp.to_string(),
            }
        })?;
        let total = parse_number(fields.total, "total memory")?;
        let free = parse_number(fields.free, "free memory")?;

        Ok(MemorySample::from_total_free(time, total, free))
    }
}

fn parse_number(token: &str, field: &'static str) -> Result<i64, ParseError> {
    parse_leading_int(token).ok_or_else(|| ParseError::MalformedNumber {
        field,
        token: token.to_string(),
    })
}
