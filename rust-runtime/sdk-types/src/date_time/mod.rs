/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! DateTime type for representing timestamp members.
//!
//! The time inside of it can be read directly. It also holds the logic for parsing and formatting
//! timestamps in each of the three wire formats: epoch seconds, RFC-3339 date-time and HTTP-date.

use num_integer::div_mod_floor;
use std::error::Error as StdError;
use std::fmt;

mod format;

pub use self::format::{DateTimeFormatError, DateTimeParseError};

const MILLIS_PER_SECOND: i64 = 1000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const NANOS_PER_SECOND_U32: u32 = 1_000_000_000;

/// Instant in time represented as seconds and sub-second nanos since
/// the Unix epoch (January 1, 1970 at midnight UTC/GMT).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

impl DateTime {
    /// Creates a `DateTime` from a number of seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from a number of milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> DateTime {
        let (seconds, millis) = div_mod_floor(epoch_millis, MILLIS_PER_SECOND);
        DateTime::from_secs_and_nanos(seconds, millis as u32 * NANOS_PER_MILLI)
    }

    /// Creates a `DateTime` from a number of seconds and sub-second nanos since the Unix epoch.
    ///
    /// # Panics
    /// Panics if `subsecond_nanos` is one second or more.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= NANOS_PER_SECOND_U32 {
            panic!("{} is >= 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from an `f64` representing the number of seconds since the Unix epoch.
    ///
    /// The fraction is rounded to the nearest microsecond so that decimal inputs such as
    /// `1690000000.123` survive the trip through binary floating point.
    ///
    /// # Example
    /// ```
    /// # use sdk_types::DateTime;
    /// assert_eq!(
    ///     DateTime::from_secs_and_nanos(1, 500_000_000u32),
    ///     DateTime::from_secs_f64(1.5),
    /// );
    /// ```
    pub fn from_secs_f64(epoch_seconds: f64) -> Self {
        let floor = epoch_seconds.floor();
        let micros = ((epoch_seconds - floor) * 1_000_000_f64).round() as u32;
        let seconds = floor as i64;
        if micros >= 1_000_000 {
            DateTime::from_secs(seconds + 1)
        } else {
            DateTime::from_secs_and_nanos(seconds, micros * 1_000)
        }
    }

    /// Returns the `DateTime` value as an `f64` representing the seconds since the Unix epoch.
    ///
    /// _Note: This conversion will lose precision due to the nature of floating point numbers._
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    /// Parses a `DateTime` from a string using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    /// Returns true if sub-second nanos is greater than zero.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Returns the epoch seconds component of the `DateTime`.
    ///
    /// _Note: this does not include the sub-second nanos._
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second nanos component of the `DateTime`.
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Converts the `DateTime` to the number of milliseconds since the Unix epoch.
    pub fn to_millis(self) -> Result<i64, ConversionError> {
        let subsec_millis = i64::from(self.subsecond_nanos / NANOS_PER_MILLI);
        self.seconds
            .checked_mul(MILLIS_PER_SECOND)
            .and_then(|millis| millis.checked_add(subsec_millis))
            .ok_or(ConversionError(
                "DateTime value too large to fit into i64 epoch millis",
            ))
    }

    /// Read 1 date of `format` from `s`, expecting either `delim` or EOF.
    ///
    /// Enables parsing multiple dates from the same string, as in a header list.
    pub fn read(s: &str, format: Format, delim: char) -> Result<(Self, &str), DateTimeParseError> {
        let (inst, next) = match format {
            Format::DateTime => format::rfc3339::read(s)?,
            Format::HttpDate => format::http_date::read(s)?,
            Format::EpochSeconds => {
                let split_point = s.find(delim).unwrap_or(s.len());
                let (s, rest) = s.split_at(split_point);
                (Self::from_str(s, format)?, rest)
            }
        };
        if next.is_empty() {
            Ok((inst, next))
        } else if let Some(rest) = next.strip_prefix(delim) {
            Ok((inst, rest))
        } else {
            Err(DateTimeParseError::invalid("didn't find expected delimiter"))
        }
    }

    /// Formats the `DateTime` to a string using the given `format`.
    ///
    /// Returns an error if the given `DateTime` cannot be represented by the desired format.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
            Format::HttpDate => format::http_date::format(self),
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fmt(Format::DateTime) {
            Ok(date) => f.write_str(&date),
            Err(_) => write!(f, "{}", format::epoch_seconds::format(self)),
        }
    }
}

/// Failure to convert a `DateTime` to or from another type.
#[derive(Debug)]
#[non_exhaustive]
pub struct ConversionError(&'static str);

impl StdError for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats for representing a `DateTime` on the wire.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Format {
    /// RFC-3339 Date Time. If the date time has an offset, an error will be returned.
    DateTime,
    /// Date format used by the HTTP `Date` header, specified in RFC-7231.
    HttpDate,
    /// Number of seconds since the Unix epoch formatted as a floating point.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{DateTime, Format};
    use proptest::prelude::*;

    #[test]
    fn test_fmt() {
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18Z"
        );
        assert_eq!(date_time.fmt(Format::EpochSeconds).unwrap(), "1576540098");
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let date_time = DateTime::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:18.52Z"
        );
        assert_eq!(
            date_time.fmt(Format::EpochSeconds).unwrap(),
            "1576540098.52"
        );
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );
    }

    #[test]
    fn test_fmt_zero_seconds() {
        let date_time = DateTime::from_secs(1576540080);
        assert_eq!(
            date_time.fmt(Format::DateTime).unwrap(),
            "2019-12-16T23:48:00Z"
        );
        assert_eq!(
            date_time.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:00 GMT"
        );
    }

    #[test]
    fn display_uses_date_time_format() {
        assert_eq!(
            "2023-07-22T04:26:40Z",
            DateTime::from_secs(1690000000).to_string()
        );
    }

    #[test]
    fn from_secs_f64_rounds_to_micros() {
        assert_eq!(
            DateTime::from_secs_and_nanos(1690000000, 123_000_000),
            DateTime::from_secs_f64(1690000000.123)
        );
        assert_eq!(
            DateTime::from_secs_and_nanos(-2, 500_000_000),
            DateTime::from_secs_f64(-1.5)
        );
        assert_eq!(DateTime::from_secs(5), DateTime::from_secs_f64(4.9999999999));
    }

    #[test]
    fn millis() {
        let date_time = DateTime::from_millis(-1627680004123);
        assert_eq!(-1627680005, date_time.secs());
        assert_eq!(877_000_000, date_time.subsec_nanos());
        assert_eq!(-1627680004123, date_time.to_millis().unwrap());
        assert!(DateTime::from_secs(i64::MAX).to_millis().is_err());
    }

    #[test]
    fn test_read_single_http_date() {
        let s = "Mon, 16 Dec 2019 23:48:18 GMT";
        let (_, next) = DateTime::read(s, Format::HttpDate, ',').expect("valid");
        assert_eq!(next, "");
    }

    #[test]
    fn test_read_many_float() {
        let s = "1576540098.52,1576540098.53";
        let (first, next) = DateTime::read(s, Format::EpochSeconds, ',').expect("valid");
        assert_eq!(DateTime::from_secs_and_nanos(1576540098, 520_000_000), first);
        assert_eq!(next, "1576540098.53");
    }

    #[test]
    fn test_read_many_http_date() {
        let s = "Mon, 16 Dec 2019 23:48:18 GMT,Tue, 17 Dec 2019 23:48:18 GMT";
        let (_, next) = DateTime::read(s, Format::HttpDate, ',').expect("valid");
        assert_eq!(next, "Tue, 17 Dec 2019 23:48:18 GMT");
    }

    #[test]
    fn test_read_many_date_time() {
        let s = "2019-12-16T23:48:18Z,2019-12-17T23:48:18.5Z";
        let (_, next) = DateTime::read(s, Format::DateTime, ',').expect("valid");
        let (second, next) = DateTime::read(next, Format::DateTime, ',').expect("valid");
        assert_eq!(next, "");
        assert_eq!(DateTime::from_secs_and_nanos(1576626498, 500_000_000), second);
    }

    #[test]
    fn read_rejects_missing_delimiter() {
        assert!(DateTime::read("2019-12-16T23:48:18Z;x", Format::DateTime, ',').is_err());
    }

    proptest! {
        #[test]
        fn round_trip_every_format(secs in -2_000_000_000i64..32_000_000_000i64, millis in 0u32..1000) {
            let date_time = DateTime::from_secs_and_nanos(secs, millis * 1_000_000);
            for format in [Format::DateTime, Format::EpochSeconds] {
                let formatted = date_time.fmt(format).unwrap();
                prop_assert_eq!(date_time, DateTime::from_str(&formatted, format).unwrap(), "{}", formatted);
            }
            let whole = DateTime::from_secs(secs);
            let http_date = whole.fmt(Format::HttpDate).unwrap();
            prop_assert_eq!(whole, DateTime::from_str(&http_date, Format::HttpDate).unwrap(), "{}", http_date);
        }

        #[test]
        fn epoch_seconds_agrees_with_f64(secs in -2_000_000_000i64..2_000_000_000i64, millis in 0u32..1000) {
            let date_time = DateTime::from_secs_and_nanos(secs, millis * 1_000_000);
            prop_assert_eq!(date_time, DateTime::from_secs_f64(date_time.as_secs_f64()));
        }
    }
}
