//! Output sinks for chart points.
//!
//! A [`Renderer`] receives the day origin and the points already placed on
//! the absolute time axis. Charting itself is left to whatever consumes the
//! JSON; the table renderer is for eyeballing a log in a terminal.

use std::io::Write;

use serde::Serialize;

use crate::error::Error;
use crate::fmt::{FmtStyle, format_bytes, format_percent, format_time_of_day};
use crate::models::ChartPoint;

/// Consumer of an ordered point sequence.
pub trait Renderer {
    fn render(&mut self, day_origin_millis: i64, points: &[ChartPoint]) -> Result<(), Error>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartPayload<'a> {
    day_origin: i64,
    points: &'a [ChartPoint],
}

/// Writes `{ "dayOrigin": ms, "points": [...] }` as pretty JSON.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn render(&mut self, day_origin_millis: i64, points: &[ChartPoint]) -> Result<(), Error> {
        let payload = ChartPayload {
            day_origin: day_origin_millis,
            points,
        };
        serde_json::to_writer_pretty(&mut self.out, &payload)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Writes a fixed-width table: time of day, total, used, used %.
pub struct TableRenderer<W: Write> {
    out: W,
}

impl<W: Write> TableRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TableRenderer<W> {
    fn render(&mut self, day_origin_millis: i64, points: &[ChartPoint]) -> Result<(), Error> {
        writeln!(self.out, "{:>8} {:>9} {:>9} {:>7}", "TIME", "TOTAL", "USED", "USED%")?;
        for p in points {
            let time = p
                .time
                .checked_sub(day_origin_millis)
                .and_then(|ms| u32::try_from(ms.div_euclid(1000)).ok())
                .map(format_time_of_day)
                .unwrap_or_else(|| "--".to_string());
            writeln!(
                self.out,
                "{:>8} {:>9} {:>9} {}",
                time,
                format_bytes(p.total_memory, FmtStyle::Compact),
                format_bytes(p.used_memory, FmtStyle::Compact),
                format_percent(p.used_percent(), 7)
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}
