/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

#[derive(Debug)]
pub(super) enum DateTimeParseErrorKind {
    /// The given date-time string was invalid.
    Invalid(Cow<'static, str>),
    /// Failed to parse an integer inside the given date-time string.
    IntParseError,
}

/// Error returned when a date-time fails to parse.
#[derive(Debug)]
pub struct DateTimeParseError {
    kind: DateTimeParseErrorKind,
}

impl DateTimeParseError {
    pub(super) fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: DateTimeParseErrorKind::Invalid(message.into()),
        }
    }

    fn int_parse() -> Self {
        Self {
            kind: DateTimeParseErrorKind::IntParseError,
        }
    }
}

impl StdError for DateTimeParseError {}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DateTimeParseErrorKind::*;
        match &self.kind {
            Invalid(msg) => write!(f, "invalid date-time: {msg}"),
            IntParseError => write!(f, "failed to parse int"),
        }
    }
}

/// Error returned when a date-time can't be represented in the requested format.
#[derive(Debug)]
pub struct DateTimeFormatError {
    message: Cow<'static, str>,
}

impl DateTimeFormatError {
    fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl StdError for DateTimeFormatError {}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to format date-time to string: {}",
            self.message
        )
    }
}

fn calendar(
    date_time: &crate::DateTime,
    format: &'static str,
) -> Result<time::OffsetDateTime, DateTimeFormatError> {
    let calendar = time::OffsetDateTime::from_unix_timestamp(date_time.secs()).map_err(|_| {
        DateTimeFormatError::new(format!(
            "{} seconds since the epoch is out of range for {format}",
            date_time.secs()
        ))
    })?;
    if !(0..=9999).contains(&calendar.year()) {
        return Err(DateTimeFormatError::new(format!(
            "year {} cannot be represented as {format}",
            calendar.year()
        )));
    }
    Ok(calendar)
}

fn push_two_digits(out: &mut String, value: u8) {
    out.push((b'0' + value / 10) as char);
    out.push((b'0' + value % 10) as char);
}

fn push_year(out: &mut String, year: i32) {
    let year = year as u32;
    out.push((b'0' + (year / 1000) as u8) as char);
    out.push((b'0' + (year / 100 % 10) as u8) as char);
    out.push((b'0' + (year / 10 % 10) as u8) as char);
    out.push((b'0' + (year % 10) as u8) as char);
}

/// Trimmed decimal digits of a sub-second fraction, e.g. `520_000_000` becomes `"52"`.
fn fraction_digits(subsecond_nanos: u32) -> String {
    let padded = format!("{subsecond_nanos:0>9}");
    padded.trim_end_matches('0').to_owned()
}

fn parse_fraction(digits: &str) -> Result<u32, DateTimeParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateTimeParseError::int_parse());
    }
    // Precision below a nanosecond is dropped.
    let significant = &digits[..digits.len().min(9)];
    let value: u32 = significant
        .parse()
        .map_err(|_| DateTimeParseError::int_parse())?;
    Ok(value * 10u32.pow(9 - significant.len() as u32))
}

pub(crate) mod epoch_seconds {
    use super::{fraction_digits, parse_fraction, DateTimeParseError, NANOS_PER_SECOND};
    use crate::DateTime;

    /// Formats a `DateTime` into the Smithy epoch seconds date-time format.
    pub(crate) fn format(date_time: &DateTime) -> String {
        if date_time.subsec_nanos() == 0 {
            return date_time.secs().to_string();
        }
        if date_time.secs() < 0 {
            // (-2, 0.25) is -1.75 seconds
            let whole = (date_time.secs() + 1).unsigned_abs();
            let fraction = fraction_digits(NANOS_PER_SECOND - date_time.subsec_nanos());
            format!("-{whole}.{fraction}")
        } else {
            let fraction = fraction_digits(date_time.subsec_nanos());
            format!("{}.{}", date_time.secs(), fraction)
        }
    }

    /// Parses the Smithy epoch seconds date-time format into a `DateTime`.
    pub(crate) fn parse(value: &str) -> Result<DateTime, DateTimeParseError> {
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateTimeParseError::invalid(
                "expected a whole number of seconds",
            ));
        }
        let whole: i64 = whole.parse().map_err(|_| DateTimeParseError::int_parse())?;
        let nanos = match fraction {
            Some(fraction) => parse_fraction(fraction)?,
            None => 0,
        };
        if !negative {
            Ok(DateTime::from_secs_and_nanos(whole, nanos))
        } else if nanos == 0 {
            Ok(DateTime::from_secs(-whole))
        } else {
            Ok(DateTime::from_secs_and_nanos(
                -whole - 1,
                NANOS_PER_SECOND - nanos,
            ))
        }
    }
}

pub(crate) mod http_date {
    use super::{calendar, push_two_digits, push_year, DateTimeFormatError, DateTimeParseError};
    use crate::DateTime;
    use std::str::FromStr;
    use time::{Date, Month, Weekday};

    /// Formats a `DateTime` as an IMF-fixdate, as used by the HTTP `Date` header.
    ///
    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    ///
    /// Sub-second precision is not written.
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let structured = calendar(date_time, "an HTTP date")?;
        let weekday = match structured.weekday() {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        };
        let month = match structured.month() {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        };
        let mut out = String::with_capacity(29);
        out.push_str(weekday);
        out.push_str(", ");
        push_two_digits(&mut out, structured.day());
        out.push(' ');
        out.push_str(month);
        out.push(' ');
        push_year(&mut out, structured.year());
        out.push(' ');
        push_two_digits(&mut out, structured.hour());
        out.push(':');
        push_two_digits(&mut out, structured.minute());
        out.push(':');
        push_two_digits(&mut out, structured.second());
        out.push_str(" GMT");
        Ok(out)
    }

    /// Parses an IMF-fixdate.
    ///
    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    /// Ok: "Mon, 16 Dec 2019 23:48:18.123 GMT"
    /// Not Ok: "Mon, 16 Dec 2019 23:48:18.1234 GMT"
    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        if !s.is_ascii() {
            return Err(DateTimeParseError::invalid("date-time must be ASCII"));
        }
        parse_imf_fixdate(s.trim().as_bytes())
    }

    /// Reads one IMF-fixdate from the front of `s`, returning the rest of the string.
    pub(crate) fn read(s: &str) -> Result<(DateTime, &str), DateTimeParseError> {
        if !s.is_ascii() {
            return Err(DateTimeParseError::invalid("date-time must be ASCII"));
        }
        let end = s
            .find(" GMT")
            .ok_or_else(|| DateTimeParseError::invalid("date-time is not terminated by GMT"))?
            + 4;
        let (date, rest) = s.split_at(end);
        Ok((parse_imf_fixdate(date.trim_start().as_bytes())?, rest))
    }

    fn parse_imf_fixdate(s: &[u8]) -> Result<DateTime, DateTimeParseError> {
        // Example: `Sun, 06 Nov 1994 08:49:37 GMT`
        if s.len() < 29
            || s.len() > 33
            || !s.ends_with(b" GMT")
            || s[16] != b' '
            || s[19] != b':'
            || s[22] != b':'
        {
            return Err(DateTimeParseError::invalid("incorrectly shaped string"));
        }
        let nanos: u32 = match &s[25] {
            b'.' => {
                let fraction_slice = &s[26..s.len() - 4];
                if fraction_slice.is_empty() {
                    return Err(DateTimeParseError::int_parse());
                }
                let fraction = std::str::from_utf8(fraction_slice)
                    .map_err(|_| DateTimeParseError::int_parse())?;
                super::parse_fraction(fraction)?
            }
            b' ' if s.len() == 29 => 0,
            _ => return Err(DateTimeParseError::invalid("incorrectly shaped string")),
        };
        match &s[..5] {
            b"Mon, " | b"Tue, " | b"Wed, " | b"Thu, " | b"Fri, " | b"Sat, " | b"Sun, " => {}
            _ => return Err(DateTimeParseError::invalid("invalid day")),
        }
        let month = match &s[7..12] {
            b" Jan " => Month::January,
            b" Feb " => Month::February,
            b" Mar " => Month::March,
            b" Apr " => Month::April,
            b" May " => Month::May,
            b" Jun " => Month::June,
            b" Jul " => Month::July,
            b" Aug " => Month::August,
            b" Sep " => Month::September,
            b" Oct " => Month::October,
            b" Nov " => Month::November,
            b" Dec " => Month::December,
            _ => return Err(DateTimeParseError::invalid("invalid month")),
        };
        let year: i32 = parse_slice(&s[12..16])?;
        let day: u8 = parse_slice(&s[5..7])?;
        let hour: u8 = parse_slice(&s[17..19])?;
        let minute: u8 = parse_slice(&s[20..22])?;
        let second: u8 = parse_slice(&s[23..25])?;
        let date = Date::from_calendar_date(year, month, day)
            .map_err(|_| DateTimeParseError::invalid("invalid date"))?;
        let utc = date
            .with_hms(hour, minute, second)
            .map_err(|_| DateTimeParseError::invalid("invalid time"))?
            .assume_utc();
        Ok(DateTime::from_secs_and_nanos(utc.unix_timestamp(), nanos))
    }

    fn parse_slice<T>(ascii_slice: &[u8]) -> Result<T, DateTimeParseError>
    where
        T: FromStr,
    {
        if !ascii_slice.iter().all(u8::is_ascii_digit) {
            return Err(DateTimeParseError::int_parse());
        }
        std::str::from_utf8(ascii_slice)
            .map_err(|_| DateTimeParseError::int_parse())?
            .parse::<T>()
            .map_err(|_| DateTimeParseError::int_parse())
    }
}

pub(crate) mod rfc3339 {
    use super::{
        calendar, fraction_digits, push_two_digits, push_year, DateTimeFormatError,
        DateTimeParseError,
    };
    use crate::DateTime;
    use time::format_description::well_known::Rfc3339;
    use time::OffsetDateTime;

    /// Parses a UTC RFC-3339 date-time. Offsets other than `Z` are rejected.
    ///
    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    /// Not Ok: "2019-12-16T23:48:18+02:00"
    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        if !s.ends_with('Z') && !s.ends_with('z') {
            return Err(DateTimeParseError::invalid(
                "smithy requires that all times are in UTC and end with Z",
            ));
        }
        let parsed = OffsetDateTime::parse(s, &Rfc3339)
            .map_err(|err| DateTimeParseError::invalid(format!("{err}")))?;
        Ok(DateTime::from_secs_and_nanos(
            parsed.unix_timestamp(),
            parsed.nanosecond(),
        ))
    }

    /// Reads one date-time from the front of `s`, returning the rest of the string.
    pub(crate) fn read(s: &str) -> Result<(DateTime, &str), DateTimeParseError> {
        let end = s
            .find(['Z', 'z'])
            .ok_or_else(|| DateTimeParseError::invalid("date-time is not terminated by Z"))?
            + 1;
        let (date, rest) = s.split_at(end);
        Ok((parse(date)?, rest))
    }

    /// Formats a `DateTime` as a UTC RFC-3339 date-time with trailing zeros trimmed from
    /// the fraction.
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let structured = calendar(date_time, "an RFC-3339 date-time")?;
        let mut out = String::with_capacity(30);
        push_year(&mut out, structured.year());
        out.push('-');
        push_two_digits(&mut out, structured.month() as u8);
        out.push('-');
        push_two_digits(&mut out, structured.day());
        out.push('T');
        push_two_digits(&mut out, structured.hour());
        out.push(':');
        push_two_digits(&mut out, structured.minute());
        out.push(':');
        push_two_digits(&mut out, structured.second());
        if date_time.has_subsec_nanos() {
            out.push('.');
            out.push_str(&fraction_digits(date_time.subsec_nanos()));
        }
        out.push('Z');
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::{epoch_seconds, http_date, rfc3339};
    use crate::DateTime;

    #[test]
    fn http_date_parse() {
        let basic_http_date = "Mon, 16 Dec 2019 23:48:18 GMT";
        let date_time = DateTime::from_secs(1576540098);
        assert_eq!(http_date::format(&date_time).unwrap(), basic_http_date);
        assert_eq!(http_date::parse(basic_http_date).unwrap(), date_time);
    }

    #[test]
    fn http_date_fractional() {
        assert_eq!(
            DateTime::from_secs(1576540098),
            http_date::parse("Mon, 16 Dec 2019 23:48:18.000 GMT").unwrap()
        );
        assert_eq!(
            DateTime::from_secs_and_nanos(1576540098, 120_000_000),
            http_date::parse("Mon, 16 Dec 2019 23:48:18.12 GMT").unwrap()
        );
        assert!(http_date::parse("Mon, 16 Dec 2019 23:48:18.1234 GMT").is_err());
        assert!(http_date::parse("Mon, 16 Dec 2019 23:48:18. GMT").is_err());
    }

    #[test]
    fn http_date_invalid() {
        assert!(http_date::parse("Mon, 16 Foo 2019 23:48:18 GMT").is_err());
        assert!(http_date::parse("Mon, 32 Dec 2019 23:48:18 GMT").is_err());
        assert!(http_date::parse("Mon, 16 Dec 2019 23:48:18 UTC").is_err());
        assert!(http_date::parse("Mon, 16 Dec 2019 23:48:18 GMT ").is_ok());
    }

    #[test]
    fn http_date_before_epoch() {
        let date_time = DateTime::from_secs(-1);
        let formatted = http_date::format(&date_time).unwrap();
        assert_eq!("Wed, 31 Dec 1969 23:59:59 GMT", formatted);
        assert_eq!(date_time, http_date::parse(&formatted).unwrap());
    }

    #[test]
    fn rfc3339_parse() {
        assert_eq!(
            DateTime::from_secs_and_nanos(1576540098, 520_000_000),
            rfc3339::parse("2019-12-16T23:48:18.52Z").unwrap()
        );
        assert!(rfc3339::parse("2019-12-16T23:48:18+02:00").is_err());
        assert!(rfc3339::parse("2019-13-16T23:48:18Z").is_err());
        assert!(rfc3339::parse("not a date").is_err());
    }

    #[test]
    fn rfc3339_format() {
        assert_eq!(
            "1969-12-31T23:59:59.75Z",
            rfc3339::format(&DateTime::from_secs_and_nanos(-1, 750_000_000)).unwrap()
        );
        assert_eq!(
            "2019-12-16T23:48:18.000000001Z",
            rfc3339::format(&DateTime::from_secs_and_nanos(1576540098, 1)).unwrap()
        );
        assert!(rfc3339::format(&DateTime::from_secs(i64::MAX)).is_err());
    }

    #[test]
    fn epoch_seconds_format() {
        assert_eq!("0", epoch_seconds::format(&DateTime::from_secs(0)));
        assert_eq!(
            "1690000000.5",
            epoch_seconds::format(&DateTime::from_secs_and_nanos(1690000000, 500_000_000))
        );
        assert_eq!(
            "-1.75",
            epoch_seconds::format(&DateTime::from_secs_and_nanos(-2, 250_000_000))
        );
        assert_eq!(
            "-0.5",
            epoch_seconds::format(&DateTime::from_secs_and_nanos(-1, 500_000_000))
        );
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(
            DateTime::from_secs_and_nanos(-1, 500_000_000),
            epoch_seconds::parse("-0.5").unwrap()
        );
        assert_eq!(
            DateTime::from_secs_and_nanos(1576540098, 520_000_000),
            epoch_seconds::parse("1576540098.52").unwrap()
        );
        assert_eq!(
            DateTime::from_secs(-12),
            epoch_seconds::parse("-12").unwrap()
        );
        assert!(epoch_seconds::parse("").is_err());
        assert!(epoch_seconds::parse("1.").is_err());
        assert!(epoch_seconds::parse("+1").is_err());
        assert!(epoch_seconds::parse("1e9").is_err());
    }
}
