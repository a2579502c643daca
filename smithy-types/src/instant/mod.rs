/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A point in time as carried by service shapes, with the wire formats Smithy protocols use.

use chrono::{DateTime, Utc};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;
#[cfg(feature = "serde-deserialize")]
mod de;
#[cfg(feature = "serde-serialize")]
mod ser;

pub use format::DateTimeParseError;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Seconds since the Unix epoch plus a sub-second nanosecond component.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    /// Creates an instant at a whole number of seconds after the epoch.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates an instant from whole seconds and a fraction in `[0, 1)`.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * NANOS_PER_SECOND as f64) as u32,
        }
    }

    /// Creates an instant from whole seconds and nanoseconds.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates an instant from fractional epoch seconds, as found in JSON documents.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        let nanos = (rem * NANOS_PER_SECOND as f64) as u32;
        // tiny negative inputs leave `rem` rounded up to exactly 1.0
        if nanos >= NANOS_PER_SECOND {
            Instant::from_epoch_seconds(seconds + 1)
        } else {
            Instant::from_secs_and_nanos(seconds, nanos)
        }
    }

    /// Converts a `SystemTime`. Times before the epoch are clamped to the epoch.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(_) => Instant::from_epoch_seconds(0),
        }
    }

    /// Parses `s` according to `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub(crate) fn to_chrono(self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
    }

    /// Returns true if the instant has a sub-second component.
    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Seconds since the epoch, including the sub-second component.
    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Whole seconds since the epoch.
    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    /// Sub-second nanoseconds.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the instant. Instants outside the calendar range that `chrono` can represent
    /// fall back to epoch seconds.
    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => {
                format::date_time::format(self).unwrap_or_else(|| format::epoch_seconds::format(self))
            }
            Format::EpochSeconds => format::epoch_seconds::format(self),
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Instant::fmt(self, Format::DateTime))
    }
}

/// Wire formats for timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339, e.g. `2019-12-16T23:48:18Z`.
    DateTime,
    /// Seconds since the epoch, optionally fractional, e.g. `1576540098.52`.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn from_f64_splits_fraction() {
        let instant = Instant::from_f64(1576540098.5);
        assert_eq!(instant.epoch_seconds(), 1576540098);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
        assert!(instant.has_nanos());
    }

    #[test]
    fn from_f64_carries_rounded_fraction() {
        let instant = Instant::from_f64(-1e-17);
        assert_eq!(instant, Instant::from_epoch_seconds(0));
        assert_eq!(instant.to_string(), "1970-01-01T00:00:00Z");

        let instant = Instant::from_f64(-0.25);
        assert_eq!(instant, Instant::from_secs_and_nanos(-1, 750_000_000));
    }

    #[test]
    fn system_time_conversion() {
        let time = UNIX_EPOCH + Duration::new(1576540098, 7);
        let instant = Instant::from(time);
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 7));
        assert_eq!(
            Instant::from_system_time(UNIX_EPOCH - Duration::from_secs(10)),
            Instant::from_epoch_seconds(0)
        );
    }

    #[test]
    fn display_uses_date_time() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.to_string(), "2019-12-16T23:48:18Z");
    }

    #[test]
    fn out_of_range_falls_back_to_epoch_seconds() {
        let instant = Instant::from_epoch_seconds(i64::MAX);
        assert_eq!(instant.fmt(Format::DateTime), i64::MAX.to_string());
    }

    proptest! {
        #[test]
        fn date_time_roundtrip(secs in 0i64..253402300799, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::DateTime);
            prop_assert_eq!(Instant::from_str(&formatted, Format::DateTime), Ok(instant));
        }

        #[test]
        fn epoch_seconds_roundtrip(secs in -100_000_000_000i64..100_000_000_000, nanos in 0u32..1_000_000_000) {
            let instant = Instant::from_secs_and_nanos(secs, nanos);
            let formatted = instant.fmt(Format::EpochSeconds);
            prop_assert_eq!(Instant::from_str(&formatted, Format::EpochSeconds), Ok(instant));
        }
    }
}
