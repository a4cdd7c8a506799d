/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::escape::EscapeError;
use sdk_types::TryFromNumberError;
use std::borrow::Cow;
use std::fmt;

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) enum DeserializeErrorKind {
    Custom(Cow<'static, str>),
    ExpectedLiteral(String),
    InvalidEscape(char),
    InvalidNumber,
    InvalidUtf8,
    NumberOutOfRange(TryFromNumberError),
    UnescapeFailed(EscapeError),
    UnexpectedControlCharacter(u8),
    UnexpectedEos,
    UnexpectedToken(char, &'static str),
}

/// Error deserializing JSON. Errors raised while tokenizing carry the byte offset of the
/// offending input.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct DeserializeError {
    kind: DeserializeErrorKind,
    offset: Option<usize>,
}

impl DeserializeError {
    pub(crate) fn new(kind: DeserializeErrorKind, offset: Option<usize>) -> Self {
        Self { kind, offset }
    }

    /// Returns a custom error without an offset.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(DeserializeErrorKind::Custom(message.into()), None)
    }

    /// Returns a custom error at the given offset.
    pub fn custom_at(message: impl Into<Cow<'static, str>>, offset: usize) -> Self {
        Self::new(DeserializeErrorKind::Custom(message.into()), Some(offset))
    }

    pub(crate) fn unexpected_eos() -> Self {
        Self::new(DeserializeErrorKind::UnexpectedEos, None)
    }

    /// Returns the byte offset into the input at which the error occurred, if known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl std::error::Error for DeserializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use DeserializeErrorKind::*;
        match &self.kind {
            UnescapeFailed(source) => Some(source),
            NumberOutOfRange(source) => Some(source),
            Custom(_)
            | ExpectedLiteral(_)
            | InvalidEscape(_)
            | InvalidNumber
            | InvalidUtf8
            | UnexpectedControlCharacter(_)
            | UnexpectedToken(..)
            | UnexpectedEos => None,
        }
    }
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use DeserializeErrorKind::*;
        if let Some(offset) = self.offset {
            write!(f, "Error at offset {offset}: ")?;
        }
        match &self.kind {
            Custom(msg) => write!(f, "failed to parse JSON: {msg}"),
            ExpectedLiteral(literal) => write!(f, "expected literal: {literal}"),
            InvalidEscape(escape) => write!(f, "invalid JSON escape: \\{escape}"),
            InvalidNumber => write!(f, "invalid number"),
            InvalidUtf8 => write!(f, "invalid UTF-8 codepoint in JSON stream"),
            NumberOutOfRange(_) => write!(f, "number is out of range for its target type"),
            UnescapeFailed(_) => write!(f, "failed to unescape JSON string"),
            UnexpectedControlCharacter(value) => write!(
                f,
                "encountered unescaped control character in string: 0x{value:X}"
            ),
            UnexpectedToken(token, expected) => {
                write!(f, "unexpected token '{token}'. Expected one of {expected}")
            }
            UnexpectedEos => write!(f, "unexpected end of stream"),
        }
    }
}

impl From<EscapeError> for DeserializeError {
    fn from(err: EscapeError) -> Self {
        Self::new(DeserializeErrorKind::UnescapeFailed(err), None)
    }
}

impl From<TryFromNumberError> for DeserializeError {
    fn from(err: TryFromNumberError) -> Self {
        Self::new(DeserializeErrorKind::NumberOutOfRange(err), None)
    }
}
