/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{Format, Instant};
use serde::de::{Error, Visitor};
use std::fmt;

struct InstantVisitor;

impl<'de> Visitor<'de> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("epoch seconds or an RFC 3339 date")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        i64::try_from(v)
            .map(Instant::from_epoch_seconds)
            .map_err(|_| E::custom("epoch seconds out of range"))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if !v.is_finite() {
            return Err(E::custom("epoch seconds must be finite"));
        }
        Ok(Instant::from_f64(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: Error,
    {
        Instant::from_str(v, Format::EpochSeconds)
            .or_else(|_| Instant::from_str(v, Format::DateTime))
            .map_err(E::custom)
    }
}

impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(InstantVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::Instant;

    #[test]
    fn accepts_numbers_and_strings() {
        let expected = Instant::from_epoch_seconds(1576540098);
        assert_eq!(serde_json::from_str::<Instant>("1576540098").unwrap(), expected);
        assert_eq!(serde_json::from_str::<Instant>("1576540098.0").unwrap(), expected);
        assert_eq!(
            serde_json::from_str::<Instant>("\"2019-12-16T23:48:18Z\"").unwrap(),
            expected
        );
        assert_eq!(
            serde_json::from_str::<Instant>("\"1576540098\"").unwrap(),
            expected
        );
        assert_eq!(
            serde_json::from_str::<Instant>("1576540098.5").unwrap(),
            Instant::from_secs_and_nanos(1576540098, 500_000_000)
        );
    }

    #[test]
    fn tiny_negative_fraction_stays_in_range() {
        let instant = serde_json::from_str::<Instant>("-1e-17").unwrap();
        assert_eq!(instant, Instant::from_epoch_seconds(0));
        assert!(instant.subsec_nanos() < 1_000_000_000);
    }

    #[test]
    fn rejects_other_json() {
        assert!(serde_json::from_str::<Instant>("true").is_err());
        assert!(serde_json::from_str::<Instant>("\"last tuesday\"").is_err());
    }
}
