/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt;

#[derive(Debug, PartialEq, Eq)]
enum EscapeErrorKind {
    ExpectedSurrogatePair(String),
    InvalidEscapeCharacter(char),
    InvalidSurrogatePair(u16, u16),
    InvalidUnicodeEscape(String),
    UnexpectedEndOfString,
}

/// Error unescaping a JSON string.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct EscapeError {
    kind: EscapeErrorKind,
}

impl std::error::Error for EscapeError {}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeErrorKind::*;
        match &self.kind {
            ExpectedSurrogatePair(low) => write!(
                f,
                "expected a UTF-16 surrogate pair, but got {low} as the low word"
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{chr}"),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid surrogate pair: \\u{high:04X}\\u{low:04X}")
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid JSON Unicode escape: \\u{escape}"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl From<EscapeErrorKind> for EscapeError {
    fn from(kind: EscapeErrorKind) -> Self {
        Self { kind }
    }
}

/// Escapes a string for embedding in a JSON string value.
pub(crate) fn escape_string(value: &str) -> Cow<'_, str> {
    match value
        .bytes()
        .position(|byte| matches!(byte, 0..=0x1F | b'"' | b'\\'))
    {
        Some(index) => Cow::Owned(escape_from(value, index)),
        None => Cow::Borrowed(value),
    }
}

fn escape_from(value: &str, index: usize) -> String {
    let (start, rest) = value.split_at(index);
    let mut escaped = String::with_capacity(value.len() + 8);
    escaped.push_str(start);
    for chr in rest.chars() {
        match chr {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{00}'..='\u{1F}' => escaped.push_str(&format!("\\u{:04x}", chr as u32)),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Unescapes a JSON-escaped string.
/// If there are no escape sequences, it directly returns the reference.
pub(crate) fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    match value.find('\\') {
        Some(index) => unescape_from(value, index).map(Cow::Owned),
        None => Ok(Cow::Borrowed(value)),
    }
}

fn unescape_from(value: &str, index: usize) -> Result<String, EscapeError> {
    let (start, mut rest) = value.split_at(index);
    let mut unescaped = String::with_capacity(value.len());
    unescaped.push_str(start);

    while let Some(next) = rest.find('\\') {
        unescaped.push_str(&rest[..next]);
        rest = &rest[next..];
        let escape = rest
            .as_bytes()
            .get(1)
            .copied()
            .ok_or(EscapeErrorKind::UnexpectedEndOfString)?;
        let consumed = match escape {
            b'u' => {
                let (chr, consumed) = read_unicode_escapes(rest)?;
                unescaped.push(chr);
                consumed
            }
            b'\\' | b'/' | b'"' => {
                unescaped.push(escape as char);
                2
            }
            b'b' => {
                unescaped.push('\u{08}');
                2
            }
            b'f' => {
                unescaped.push('\u{0C}');
                2
            }
            b'n' => {
                unescaped.push('\n');
                2
            }
            b'r' => {
                unescaped.push('\r');
                2
            }
            b't' => {
                unescaped.push('\t');
                2
            }
            _ => {
                let chr = rest[1..].chars().next().unwrap_or_default();
                return Err(EscapeErrorKind::InvalidEscapeCharacter(chr).into());
            }
        };
        rest = &rest[consumed..];
    }
    unescaped.push_str(rest);
    Ok(unescaped)
}

fn is_utf16_low_surrogate(codepoint: u16) -> bool {
    codepoint & 0xFC00 == 0xDC00
}

fn is_utf16_high_surrogate(codepoint: u16) -> bool {
    codepoint & 0xFC00 == 0xD800
}

/// Reads one `\uXXXX` escape from the front of `rest`.
fn read_codepoint(rest: &str) -> Result<u16, EscapeError> {
    let bytes = rest.as_bytes();
    if bytes.len() < 6 {
        return Err(EscapeErrorKind::UnexpectedEndOfString.into());
    }
    if &bytes[0..2] != b"\\u" {
        // The caller has already seen `\u` for the first word, so this is the low word
        return Err(EscapeErrorKind::ExpectedSurrogatePair(
            String::from_utf8_lossy(&bytes[0..6]).into(),
        )
        .into());
    }
    let digits = &bytes[2..6];
    // `u16::from_str_radix` would otherwise accept a leading `+`
    if !digits.iter().all(u8::is_ascii_hexdigit) {
        return Err(EscapeErrorKind::InvalidUnicodeEscape(
            String::from_utf8_lossy(digits).into(),
        )
        .into());
    }
    let digits = String::from_utf8_lossy(digits);
    u16::from_str_radix(&digits, 16)
        .map_err(|_| EscapeErrorKind::InvalidUnicodeEscape(digits.into_owned()).into())
}

/// Reads a `\uXXXX` escape, plus a second one when the first is the high half of a
/// surrogate pair. Returns the character and the number of bytes consumed.
fn read_unicode_escapes(rest: &str) -> Result<(char, usize), EscapeError> {
    let high = read_codepoint(rest)?;
    if is_utf16_high_surrogate(high) {
        let low = read_codepoint(&rest[6..])?;
        if !is_utf16_low_surrogate(low) {
            return Err(EscapeErrorKind::InvalidSurrogatePair(high, low).into());
        }
        let codepoint = 0x10000 + (high as u32 - 0xD800) * 0x400 + (low as u32 - 0xDC00);
        let chr = char::from_u32(codepoint)
            .ok_or(EscapeErrorKind::InvalidSurrogatePair(high, low))?;
        Ok((chr, 12))
    } else {
        let chr = char::from_u32(high as u32).ok_or_else(|| {
            EscapeErrorKind::InvalidUnicodeEscape(format!("{high:04X}"))
        })?;
        Ok((chr, 6))
    }
}
