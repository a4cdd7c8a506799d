/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Streaming JSON tokenizer.

use crate::deserialize::error::DeserializeErrorKind as ErrorKind;
use sdk_types::Number;

mod error;
/// Tokens yielded by the tokenizer.
pub mod token;

pub use error::DeserializeError;
pub use token::{EscapedStr, Offset, Token};

/// JSON token parser as a Rust iterator
///
/// This parser will parse and yield exactly one [`Token`] per iterator `next()` call.
/// Validation is done on the fly, so it is possible for it to parse an invalid JSON document
/// until it gets to the first [`DeserializeError`].
///
/// JSON string values are left escaped in the [`Token::ValueString`] as an [`EscapedStr`],
/// which is a new type around a slice of original `input` bytes so that the caller can decide
/// when to unescape and allocate into a [`String`].
///
/// The parser *will* accept multiple valid JSON values. For example, `b"null true"` will
/// yield `ValueNull` and `ValueTrue`. It is the responsibility of the caller to handle this for
/// their use-case.
pub fn json_token_iter(input: &[u8]) -> JsonTokenIterator<'_> {
    JsonTokenIterator {
        input,
        index: 0,
        state_stack: vec![State::Initial],
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Initial,
    ArrayFirstValueOrEnd,
    ArrayNextValueOrEnd,
    ObjectFirstKeyOrEnd,
    ObjectNextKeyOrEnd,
    ObjectFieldValue,
}

/// Iterator over the tokens of a JSON document. See [`json_token_iter`].
#[derive(Debug)]
pub struct JsonTokenIterator<'a> {
    input: &'a [u8],
    index: usize,
    state_stack: Vec<State>,
}

impl<'a> JsonTokenIterator<'a> {
    fn peek_byte(&self) -> Option<u8> {
        self.input.get(self.index).copied()
    }

    fn peek_expect(&self) -> Result<u8, DeserializeError> {
        self.peek_byte().ok_or_else(DeserializeError::unexpected_eos)
    }

    fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += 1;
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        let next = self.peek_byte();
        self.advance();
        next
    }

    fn error_at(&self, offset: usize, kind: ErrorKind) -> DeserializeError {
        DeserializeError::new(kind, Some(offset))
    }

    fn error(&self, kind: ErrorKind) -> DeserializeError {
        self.error_at(self.index, kind)
    }

    fn discard_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek_byte() {
            self.advance();
        }
    }

    fn state(&self) -> State {
        self.state_stack.last().copied().unwrap_or(State::Initial)
    }

    fn replace_state(&mut self, state: State) {
        if let Some(top) = self.state_stack.last_mut() {
            *top = state;
        }
    }

    fn start_object(&mut self) -> Token<'a> {
        let offset = self.index;
        self.advance();
        self.state_stack.push(State::ObjectFirstKeyOrEnd);
        Token::StartObject {
            offset: Offset(offset),
        }
    }

    fn end_object(&mut self) -> Token<'a> {
        let offset = self.index;
        self.advance();
        self.state_stack.pop();
        Token::EndObject {
            offset: Offset(offset),
        }
    }

    fn start_array(&mut self) -> Token<'a> {
        let offset = self.index;
        self.advance();
        self.state_stack.push(State::ArrayFirstValueOrEnd);
        Token::StartArray {
            offset: Offset(offset),
        }
    }

    fn end_array(&mut self) -> Token<'a> {
        let offset = self.index;
        self.advance();
        self.state_stack.pop();
        Token::EndArray {
            offset: Offset(offset),
        }
    }

    fn read_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        let offset = self.index;
        match self.peek_expect()? {
            b'{' => Ok(self.start_object()),
            b'[' => Ok(self.start_array()),
            b'"' => self.read_string().map(|value| Token::ValueString {
                offset: Offset(offset),
                value,
            }),
            byte @ (b't' | b'f') => {
                let value = byte == b't';
                let literal: &'static [u8] = if value { b"true" } else { b"false" };
                self.expect_literal(literal)?;
                Ok(Token::ValueBool {
                    offset: Offset(offset),
                    value,
                })
            }
            b'n' => {
                self.expect_literal(b"null")?;
                Ok(Token::ValueNull {
                    offset: Offset(offset),
                })
            }
            b'-' | b'0'..=b'9' => self.read_number().map(|value| Token::ValueNumber {
                offset: Offset(offset),
                value,
            }),
            byte => Err(self.error(ErrorKind::UnexpectedToken(
                byte.into(),
                "'{', '[', '\"', 'true', 'false', 'null', number",
            ))),
        }
    }

    /// Reads a quoted string, leaving it escaped. The current byte must be `"`.
    fn read_string(&mut self) -> Result<EscapedStr<'a>, DeserializeError> {
        self.advance();
        let input = self.input;
        let start = self.index;
        loop {
            match self.peek_expect()? {
                b'"' => {
                    let value = std::str::from_utf8(&input[start..self.index])
                        .map_err(|_| self.error_at(start, ErrorKind::InvalidUtf8))?;
                    self.advance();
                    return Ok(EscapedStr::new(value));
                }
                b'\\' => {
                    self.advance();
                    match self.peek_expect()? {
                        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' | b'u' => {
                            self.advance()
                        }
                        byte => return Err(self.error(ErrorKind::InvalidEscape(byte.into()))),
                    }
                }
                byte @ 0x00..=0x1F => {
                    return Err(self.error(ErrorKind::UnexpectedControlCharacter(byte)))
                }
                _ => self.advance(),
            }
        }
    }

    fn expect_literal(&mut self, expected: &'static [u8]) -> Result<(), DeserializeError> {
        if self.input[self.index..].starts_with(expected) {
            self.index += expected.len();
            Ok(())
        } else {
            Err(self.error(ErrorKind::ExpectedLiteral(
                String::from_utf8_lossy(expected).into(),
            )))
        }
    }

    fn read_number(&mut self) -> Result<Number, DeserializeError> {
        let start = self.index;
        while let Some(b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9') = self.peek_byte() {
            self.advance();
        }
        let text = std::str::from_utf8(&self.input[start..self.index])
            .map_err(|_| self.error_at(start, ErrorKind::InvalidUtf8))?;
        let invalid = || DeserializeError::new(ErrorKind::InvalidNumber, Some(start));
        if text.contains(['.', 'e', 'E']) {
            return text.parse::<f64>().map(Number::Float).map_err(|_| invalid());
        }
        // Integers too large for 64 bits degrade to floats
        let parsed = if text.starts_with('-') {
            text.parse::<i64>().map(|value| {
                if value < 0 {
                    Number::NegInt(value)
                } else {
                    Number::PosInt(0)
                }
            })
        } else {
            text.parse::<u64>().map(Number::PosInt)
        };
        parsed
            .or_else(|_| text.parse::<f64>().map(Number::Float))
            .map_err(|_| invalid())
    }

    fn read_object_key(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.discard_whitespace();
        let offset = self.index;
        match self.peek_expect()? {
            b'"' => self.read_string().map(|key| Token::ObjectKey {
                offset: Offset(offset),
                key,
            }),
            byte => Err(self.error(ErrorKind::UnexpectedToken(byte.into(), "'\"'"))),
        }
    }

    fn state_array_first_value_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            _ => {
                self.replace_state(State::ArrayNextValueOrEnd);
                self.read_value()
            }
        }
    }

    fn state_array_next_value_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b']' => Ok(self.end_array()),
            b',' => {
                self.advance();
                self.read_value()
            }
            byte => Err(self.error(ErrorKind::UnexpectedToken(byte.into(), "']', ','"))),
        }
    }

    fn state_object_first_key_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            _ => {
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
        }
    }

    fn state_object_next_key_or_end(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.peek_expect()? {
            b'}' => Ok(self.end_object()),
            b',' => {
                self.advance();
                self.replace_state(State::ObjectFieldValue);
                self.read_object_key()
            }
            byte => Err(self.error(ErrorKind::UnexpectedToken(byte.into(), "'}', ','"))),
        }
    }

    fn state_object_field_value(&mut self) -> Result<Token<'a>, DeserializeError> {
        match self.next_byte() {
            Some(b':') => {
                self.replace_state(State::ObjectNextKeyOrEnd);
                self.read_value()
            }
            Some(byte) => Err(self.error_at(
                self.index - 1,
                ErrorKind::UnexpectedToken(byte.into(), "':'"),
            )),
            None => Err(DeserializeError::unexpected_eos()),
        }
    }
}

impl<'a> Iterator for JsonTokenIterator<'a> {
    type Item = Result<Token<'a>, DeserializeError>;

    fn next(&mut self) -> Option<Self::Item> {
        debug_assert!(self.index <= self.input.len());
        self.discard_whitespace();
        if self.index == self.input.len() {
            return if self.state_stack.len() > 1 {
                self.state_stack.truncate(1);
                Some(Err(DeserializeError::unexpected_eos()))
            } else {
                None
            };
        }
        let result = match self.state() {
            State::Initial => self.read_value(),
            State::ArrayFirstValueOrEnd => self.state_array_first_value_or_end(),
            State::ArrayNextValueOrEnd => self.state_array_next_value_or_end(),
            State::ObjectFirstKeyOrEnd => self.state_object_first_key_or_end(),
            State::ObjectNextKeyOrEnd => self.state_object_next_key_or_end(),
            State::ObjectFieldValue => self.state_object_field_value(),
        };
        if result.is_err() {
            // Stop yielding once the input is known to be malformed
            self.index = self.input.len();
            self.state_stack.truncate(1);
        }
        Some(result)
    }
}
