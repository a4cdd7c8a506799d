/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! String codec for HTTP bindings (headers, query params, URI labels).
//!
//! Lists are comma-separated. Blobs are base64 encoded. Timestamps use the member's
//! `timestampFormat`, falling back to the codec default: HTTP-date for headers and
//! RFC 3339 date-time for query strings and labels.

use crate::codec::Codec;
use crate::serde::{ShapeDeserializer, ShapeSerializer};
use crate::Schema;
use sdk_types::date_time::Format;
use sdk_types::primitive::{Encoder, Parse};
use sdk_types::{base64, Blob, DateTime};
use std::error::Error;
use std::fmt;

/// Error type for HTTP string serialization/deserialization.
#[derive(Debug)]
pub struct HttpStringCodecError {
    message: String,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl HttpStringCodecError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for HttpStringCodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP string codec error: {}", self.message)
    }
}

impl Error for HttpStringCodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

/// Serializer for converting Smithy types to strings (for HTTP headers, query params, labels).
#[derive(Debug)]
pub struct HttpStringSerializer {
    output: String,
    timestamp_format: Format,
}

impl HttpStringSerializer {
    /// Creates a serializer that formats timestamps without a declared format as `timestamp_format`.
    pub fn new(timestamp_format: Format) -> Self {
        Self {
            output: String::new(),
            timestamp_format,
        }
    }

    fn push(&mut self, value: &str) {
        if !self.output.is_empty() {
            self.output.push(',');
        }
        self.output.push_str(value);
    }
}

impl ShapeSerializer for HttpStringSerializer {
    type Output = String;
    type Error = HttpStringCodecError;

    fn finish(self) -> Result<Self::Output, Self::Error> {
        Ok(self.output)
    }

    fn write_struct<F>(&mut self, _schema: &Schema, _write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        Err(HttpStringCodecError::new(
            "structures cannot be serialized to strings",
        ))
    }

    fn write_list<F>(&mut self, _schema: &Schema, write_elements: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        write_elements(self)
    }

    fn write_map<F>(&mut self, _schema: &Schema, _write_entries: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        Err(HttpStringCodecError::new(
            "maps cannot be serialized to strings",
        ))
    }

    fn write_boolean(&mut self, _schema: &Schema, value: bool) -> Result<(), Self::Error> {
        self.push(Encoder::from(value).encode());
        Ok(())
    }

    fn write_byte(&mut self, _schema: &Schema, value: i8) -> Result<(), Self::Error> {
        self.push(Encoder::from(value).encode());
        Ok(())
    }

    fn write_short(&mut self, _schema: &Schema, value: i16) -> Result<(), Self::Error> {
        self.push(Encoder::from(value).encode());
        Ok(())
    }

    fn write_integer(&mut self, _schema: &Schema, value: i32) -> Result<(), Self::Error> {
        self.push(Encoder::from(value).encode());
        Ok(())
    }

    fn write_long(&mut self, _schema: &Schema, value: i64) -> Result<(), Self::Error> {
        self.push(Encoder::from(value).encode());
        Ok(())
    }

    fn write_float(&mut self, _schema: &Schema, value: f32) -> Result<(), Self::Error> {
        self.push(Encoder::from(value).encode());
        Ok(())
    }

    fn write_double(&mut self, _schema: &Schema, value: f64) -> Result<(), Self::Error> {
        self.push(Encoder::from(value).encode());
        Ok(())
    }

    fn write_string(&mut self, _schema: &Schema, value: &str) -> Result<(), Self::Error> {
        self.push(value);
        Ok(())
    }

    fn write_blob(&mut self, _schema: &Schema, value: &Blob) -> Result<(), Self::Error> {
        self.push(&base64::encode(value));
        Ok(())
    }

    fn write_timestamp(&mut self, schema: &Schema, value: &DateTime) -> Result<(), Self::Error> {
        let format = schema.timestamp_format().unwrap_or(self.timestamp_format);
        let formatted = value.fmt(format).map_err(|err| {
            HttpStringCodecError::new("failed to format timestamp").with_source(err)
        })?;
        self.push(&formatted);
        Ok(())
    }

    fn write_null(&mut self, _schema: &Schema) -> Result<(), Self::Error> {
        Err(HttpStringCodecError::new(
            "null cannot be serialized to strings",
        ))
    }
}

/// Deserializer for parsing Smithy types from comma-delimited strings.
///
/// Each scalar read consumes one value. Values may be double-quoted, in which case commas
/// inside the quotes are part of the value.
#[derive(Debug)]
pub struct HttpStringDeserializer<'a> {
    input: &'a str,
    timestamp_format: Format,
}

impl<'a> HttpStringDeserializer<'a> {
    /// Creates a deserializer that parses timestamps without a declared format as `timestamp_format`.
    pub fn new(input: &'a str, timestamp_format: Format) -> Self {
        Self {
            input,
            timestamp_format,
        }
    }

    /// Returns true once every value has been read.
    pub fn is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Returns the input that has not been read yet.
    pub fn remaining(&self) -> &'a str {
        self.input
    }

    fn next_value(&mut self, expected: &str) -> Result<String, HttpStringCodecError> {
        let input = self.input.trim_start();
        if input.is_empty() {
            return Err(HttpStringCodecError::new(format!("expected {expected} value")));
        }
        let (value, rest) = if let Some(quoted) = input.strip_prefix('"') {
            read_quoted(quoted)?
        } else {
            match input.find(',') {
                Some(idx) => (input[..idx].trim_end().to_string(), &input[idx..]),
                None => (input.trim_end().to_string(), ""),
            }
        };
        self.input = then_delim(rest)?;
        Ok(value)
    }

    fn parse_next<T: Parse>(&mut self, expected: &str) -> Result<T, HttpStringCodecError> {
        let value = self.next_value(expected)?;
        T::parse_smithy_primitive(&value).map_err(|err| {
            HttpStringCodecError::new(format!("invalid {expected}: {value}")).with_source(err)
        })
    }
}

fn read_quoted(input: &str) -> Result<(String, &str), HttpStringCodecError> {
    let mut value = String::new();
    let mut chars = input.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '"' => return Ok((value, &input[idx + 1..])),
            '\\' => match chars.next() {
                Some((_, escaped)) => value.push(escaped),
                None => break,
            },
            other => value.push(other),
        }
    }
    Err(HttpStringCodecError::new("unterminated quoted string"))
}

fn then_delim(rest: &str) -> Result<&str, HttpStringCodecError> {
    let rest = rest.trim_start();
    if rest.is_empty() {
        Ok(rest)
    } else if let Some(rest) = rest.strip_prefix(',') {
        Ok(rest)
    } else {
        Err(HttpStringCodecError::new("expected delimiter `,`"))
    }
}

impl ShapeDeserializer for HttpStringDeserializer<'_> {
    type Error = HttpStringCodecError;

    fn read_struct<T, F>(&mut self, _schema: &Schema, _state: T, _consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &'static Schema, &mut Self) -> Result<T, Self::Error>,
    {
        Err(HttpStringCodecError::new(
            "structures cannot be deserialized from strings",
        ))
    }

    fn read_list<T, F>(&mut self, _schema: &Schema, mut state: T, mut consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &mut Self) -> Result<T, Self::Error>,
    {
        while !self.is_empty() {
            state = consumer(state, self)?;
        }
        Ok(state)
    }

    fn read_map<T, F>(&mut self, _schema: &Schema, _state: T, _consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, String, &mut Self) -> Result<T, Self::Error>,
    {
        Err(HttpStringCodecError::new(
            "maps cannot be deserialized from strings",
        ))
    }

    fn read_boolean(&mut self, _schema: &Schema) -> Result<bool, Self::Error> {
        self.parse_next("boolean")
    }

    fn read_byte(&mut self, _schema: &Schema) -> Result<i8, Self::Error> {
        self.parse_next("byte")
    }

    fn read_short(&mut self, _schema: &Schema) -> Result<i16, Self::Error> {
        self.parse_next("short")
    }

    fn read_integer(&mut self, _schema: &Schema) -> Result<i32, Self::Error> {
        self.parse_next("integer")
    }

    fn read_long(&mut self, _schema: &Schema) -> Result<i64, Self::Error> {
        self.parse_next("long")
    }

    fn read_float(&mut self, _schema: &Schema) -> Result<f32, Self::Error> {
        self.parse_next("float")
    }

    fn read_double(&mut self, _schema: &Schema) -> Result<f64, Self::Error> {
        self.parse_next("double")
    }

    fn read_string(&mut self, _schema: &Schema) -> Result<String, Self::Error> {
        self.next_value("string")
    }

    fn read_blob(&mut self, _schema: &Schema) -> Result<Blob, Self::Error> {
        let value = self.next_value("blob")?;
        let decoded = base64::decode(&value)
            .map_err(|err| HttpStringCodecError::new("invalid base64").with_source(err))?;
        Ok(Blob::new(decoded))
    }

    fn read_timestamp(&mut self, schema: &Schema) -> Result<DateTime, Self::Error> {
        let format = schema.timestamp_format().unwrap_or(self.timestamp_format);
        let input = self.input.trim_start();
        if input.is_empty() {
            return Err(HttpStringCodecError::new("expected timestamp value"));
        }
        // HTTP dates contain a comma, so let the date parser find the delimiter
        let (value, rest) = DateTime::read(input, format, ',').map_err(|err| {
            HttpStringCodecError::new(format!("invalid timestamp: {input}")).with_source(err)
        })?;
        self.input = rest;
        Ok(value)
    }

    fn skip_unless_struct(&mut self) -> Result<bool, Self::Error> {
        self.next_value("value")?;
        Ok(false)
    }
}

/// HTTP string codec for serializing/deserializing to/from strings.
#[derive(Debug, Clone, Copy)]
pub struct HttpStringCodec {
    timestamp_format: Format,
}

impl HttpStringCodec {
    /// Codec for header values. Timestamps default to HTTP-date.
    pub fn header() -> Self {
        Self {
            timestamp_format: Format::HttpDate,
        }
    }

    /// Codec for query parameters and URI labels. Timestamps default to RFC 3339.
    pub fn query() -> Self {
        Self {
            timestamp_format: Format::DateTime,
        }
    }
}

impl Codec for HttpStringCodec {
    type Serializer = HttpStringSerializer;
    type Deserializer<'a> = HttpStringDeserializer<'a>;

    fn create_serializer(&self) -> Self::Serializer {
        HttpStringSerializer::new(self.timestamp_format)
    }

    fn create_deserializer<'a>(&'a self, input: &'a [u8]) -> Self::Deserializer<'a> {
        let input = std::str::from_utf8(input).unwrap_or_default();
        HttpStringDeserializer::new(input, self.timestamp_format)
    }
}
