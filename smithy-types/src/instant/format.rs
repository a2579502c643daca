/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error as StdError;
use std::fmt;

/// Failure to parse a timestamp string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeParseError {
    /// The string does not have the shape of the requested format.
    Invalid(&'static str),
    /// A numeric component could not be parsed.
    IntParseError,
    /// The date is well formed but outside the representable range.
    OutOfRange,
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeParseError::Invalid(reason) => write!(f, "invalid timestamp: {}", reason),
            DateTimeParseError::IntParseError => f.write_str("invalid timestamp: bad number"),
            DateTimeParseError::OutOfRange => f.write_str("timestamp out of range"),
        }
    }
}

impl StdError for DateTimeParseError {}

pub(crate) mod date_time {
    use super::DateTimeParseError;
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat};

    pub(crate) fn format(instant: &Instant) -> Option<String> {
        let rfc3339 = instant
            .to_chrono()?
            .to_rfc3339_opts(SecondsFormat::AutoSi, true);
        let body = rfc3339.trim_end_matches('Z');
        // AutoSi pads fractions to 3, 6 or 9 digits
        let body = match body.find('.') {
            Some(_) => body.trim_end_matches('0').trim_end_matches('.'),
            None => body,
        };
        Some(format!("{}Z", body))
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let parsed = DateTime::parse_from_rfc3339(s.trim())
            .map_err(|_| DateTimeParseError::Invalid("not an RFC 3339 date"))?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

pub(crate) mod epoch_seconds {
    use super::DateTimeParseError;
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    pub(crate) fn format(instant: &Instant) -> String {
        let seconds = instant.epoch_seconds();
        let nanos = instant.subsec_nanos();
        if nanos == 0 {
            return seconds.to_string();
        }
        if seconds < 0 {
            // -6s + 0.7s renders as -5.3
            let whole = -(seconds + 1);
            format!("-{}.{}", whole, fraction(NANOS_PER_SECOND - nanos))
        } else {
            format!("{}.{}", seconds, fraction(nanos))
        }
    }

    fn fraction(nanos: u32) -> String {
        let padded = format!("{:0>9}", nanos);
        padded.trim_end_matches('0').to_owned()
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let s = s.trim();
        let negative = s.starts_with('-');
        let (whole, frac) = match s.find('.') {
            Some(idx) => (&s[..idx], &s[idx + 1..]),
            None => (s, ""),
        };
        let whole: i64 = whole
            .parse()
            .map_err(|_| DateTimeParseError::IntParseError)?;
        if frac.is_empty() {
            return Ok(Instant::from_epoch_seconds(whole));
        }
        if frac.len() > 9 {
            return Err(DateTimeParseError::Invalid("too much precision"));
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateTimeParseError::IntParseError);
        }
        let nanos: u32 = format!("{:0<9}", frac)
            .parse()
            .map_err(|_| DateTimeParseError::IntParseError)?;
        if nanos == 0 {
            return Ok(Instant::from_epoch_seconds(whole));
        }
        if negative {
            let seconds = whole
                .checked_sub(1)
                .ok_or(DateTimeParseError::OutOfRange)?;
            Ok(Instant::from_secs_and_nanos(seconds, NANOS_PER_SECOND - nanos))
        } else {
            Ok(Instant::from_secs_and_nanos(whole, nanos))
        }
    }
}

#[cfg(test)]
mod test {
    use super::{date_time, epoch_seconds, DateTimeParseError};
    use crate::Instant;

    #[test]
    fn date_time_trims_only_fractions() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(
            date_time::format(&instant).as_deref(),
            Some("2019-12-16T23:48:10Z")
        );
        let instant = Instant::from_secs_and_nanos(1576540090, 100_000_000);
        assert_eq!(
            date_time::format(&instant).as_deref(),
            Some("2019-12-16T23:48:10.1Z")
        );
    }

    #[test]
    fn date_time_parses_offsets() {
        assert_eq!(
            date_time::parse("2019-12-17T00:48:18+01:00"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert!(date_time::parse("yesterday").is_err());
    }

    #[test]
    fn epoch_seconds_negative_fraction() {
        let instant = Instant::from_secs_and_nanos(-6, 700_000_000);
        assert_eq!(epoch_seconds::format(&instant), "-5.3");
        assert_eq!(epoch_seconds::parse("-5.3"), Ok(instant));
        assert_eq!(
            epoch_seconds::parse("-0.7"),
            Ok(Instant::from_secs_and_nanos(-1, 300_000_000))
        );
    }

    #[test]
    fn epoch_seconds_errors() {
        assert_eq!(
            epoch_seconds::parse("12.1234567891"),
            Err(DateTimeParseError::Invalid("too much precision"))
        );
        assert_eq!(
            epoch_seconds::parse("abc"),
            Err(DateTimeParseError::IntParseError)
        );
        assert_eq!(epoch_seconds::parse("12."), Ok(Instant::from_epoch_seconds(12)));
    }
}
