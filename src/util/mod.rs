//! Utility modules for memplot.

mod number;
mod time_parser;

pub use number::{parse_leading_int, parse_leading_uint};
pub use time_parser::{
    TimeParseError, parse_day_origin, parse_day_origin_in, parse_time_of_day, start_of_day,
    start_of_local_day,
};
