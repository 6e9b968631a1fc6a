use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{Error, Result};

/// Timestamp layout used on the command line and in order rows.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map_err(|err| {
        Error::InvalidTimestamp {
            value: value.to_string(),
            reason: err.to_string(),
        }
    })
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Inclusive window order timestamps are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimestampWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidWindow {
                start: format_timestamp(&start),
                end: format_timestamp(&end),
            });
        }
        Ok(Self { start, end })
    }

    /// Window covering the `span` leading up to `end`.
    pub fn trailing(end: NaiveDateTime, span: TimeDelta) -> Self {
        Self {
            start: end - span,
            end,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Point at `fraction` of the way through the window, clamped to `[0, 1]`.
    pub fn at_fraction(&self, fraction: f64) -> NaiveDateTime {
        let fraction = fraction.clamp(0.0, 1.0);
        let span_ms = (self.end - self.start).num_milliseconds() as f64;
        self.start + TimeDelta::milliseconds((span_ms * fraction) as i64)
    }

    pub fn contains(&self, value: &NaiveDateTime) -> bool {
        *value >= self.start && *value <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(value: &str) -> NaiveDateTime {
        parse_timestamp(value).expect("parse timestamp")
    }

    #[test]
    fn parses_and_formats_round_trip() {
        let value = ts("2024-03-01 08:15:00");
        assert_eq!(format_timestamp(&value), "2024-03-01 08:15:00");
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(matches!(
            parse_timestamp("2024-03-01T08:15:00"),
            Err(Error::InvalidTimestamp { .. })
        ));
        assert!(parse_timestamp("2024-03-01").is_err());
    }

    #[test]
    fn rejects_inverted_window() {
        let result = TimestampWindow::new(ts("2024-03-02 00:00:00"), ts("2024-03-01 00:00:00"));
        assert!(matches!(result, Err(Error::InvalidWindow { .. })));
    }

    #[test]
    fn fraction_maps_into_window() {
        let window =
            TimestampWindow::new(ts("2024-03-01 00:00:00"), ts("2024-03-01 01:00:00")).expect("window");
        assert_eq!(window.at_fraction(0.0), window.start());
        assert_eq!(window.at_fraction(1.0), window.end());
        assert_eq!(format_timestamp(&window.at_fraction(0.5)), "2024-03-01 00:30:00");
        assert!(window.contains(&window.at_fraction(0.42)));
    }

    #[test]
    fn trailing_window_ends_at_anchor() {
        let end = ts("2024-03-01 12:00:00");
        let window = TimestampWindow::trailing(end, TimeDelta::minutes(5));
        assert_eq!(format_timestamp(&window.start()), "2024-03-01 11:55:00");
        assert_eq!(window.end(), end);
    }
}
