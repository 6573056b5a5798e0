//! Conversion between Unix timestamps and RFC 3339 date-times

use std::str::FromStr;

use jiff::Timestamp;

use crate::error::TransformError;

/// Precision of an epoch value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampUnit {
    #[default]
    Seconds,
    Milliseconds,
}

impl TimestampUnit {
    fn timestamp_of(self, epoch: i64) -> Result<Timestamp, TransformError> {
        let ts = match self {
            TimestampUnit::Seconds => Timestamp::from_second(epoch),
            TimestampUnit::Milliseconds => Timestamp::from_millisecond(epoch),
        };
        ts.map_err(|_| TransformError::InvalidTimestamp)
    }

    fn epoch_of(self, ts: Timestamp) -> i64 {
        match self {
            TimestampUnit::Seconds => ts.as_second(),
            TimestampUnit::Milliseconds => ts.as_millisecond(),
        }
    }
}

/// A source of the current time.
#[derive(Debug, Clone, Default)]
pub enum ClockSource {
    /// The system clock
    #[default]
    System,

    /// Always reports the same instant. Only for testing.
    Fixed(Timestamp),
}

impl ClockSource {
    pub fn now(&self) -> Timestamp {
        match self {
            ClockSource::System => Timestamp::now(),
            ClockSource::Fixed(ts) => *ts,
        }
    }
}

/// Render a Unix timestamp as an RFC 3339 UTC string, e.g. `2018-01-18T01:30:22Z`.
pub fn timestamp_to_datetime(epoch: i64, unit: TimestampUnit) -> Result<String, TransformError> {
    Ok(unit.timestamp_of(epoch)?.to_string())
}

/// Parse an RFC 3339 date-time (any offset) into a Unix timestamp. Precision finer
/// than `unit` is dropped.
pub fn datetime_to_timestamp(text: &str, unit: TimestampUnit) -> Result<i64, TransformError> {
    let ts = Timestamp::from_str(text.trim()).map_err(|_| TransformError::InvalidTimestamp)?;
    Ok(unit.epoch_of(ts))
}

/// The current time as a Unix timestamp.
pub fn now(clock: &ClockSource, unit: TimestampUnit) -> i64 {
    unit.epoch_of(clock.now())
}
