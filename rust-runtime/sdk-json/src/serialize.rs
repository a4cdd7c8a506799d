/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Low level JSON writers.
//!
//! Floating point values that JSON cannot represent (`NaN`, `Infinity` and `-Infinity`)
//! are written as strings.

use crate::escape::escape_string;
use sdk_types::date_time::{DateTimeFormatError, Format};
use sdk_types::primitive::Encoder;
use sdk_types::{DateTime, Number};

/// Writes the members of a JSON object into a `String`.
#[derive(Debug)]
pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    /// Starts an object, writing the opening brace to `output`.
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes a null value with the given `key`.
    pub fn null(&mut self, key: &str) -> &mut Self {
        self.key(key);
        self.json.push_str("null");
        self
    }

    /// Writes the boolean `value` with the given `key`.
    pub fn boolean(&mut self, key: &str, value: bool) -> &mut Self {
        self.key(key);
        self.json.push_str(if value { "true" } else { "false" });
        self
    }

    /// Writes a string `value` with the given `key`.
    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        self.key(key);
        append_string(self.json, value);
        self
    }

    /// Writes a number `value` with the given `key`.
    pub fn number(&mut self, key: &str, value: Number) -> &mut Self {
        self.key(key);
        append_number(self.json, value);
        self
    }

    /// Writes a date-time `value` with the given `key` and `format`.
    pub fn date_time(
        &mut self,
        key: &str,
        date_time: &DateTime,
        format: Format,
    ) -> Result<&mut Self, DateTimeFormatError> {
        self.key(key);
        append_date_time(self.json, date_time, format)?;
        Ok(self)
    }

    /// Starts an array with the given `key`.
    pub fn start_array(&mut self, key: &str) -> JsonArrayWriter<'_> {
        self.key(key);
        JsonArrayWriter::new(self.json)
    }

    /// Starts an object with the given `key`.
    pub fn start_object(&mut self, key: &str) -> JsonObjectWriter<'_> {
        self.key(key);
        JsonObjectWriter::new(self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }

    fn key(&mut self, key: &str) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        append_string(self.json, key);
        self.json.push(':');
    }
}

/// Writes the elements of a JSON array into a `String`.
#[derive(Debug)]
pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    /// Starts an array, writing the opening bracket to `output`.
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes a null value to the array.
    pub fn null(&mut self) -> &mut Self {
        self.comma_delimit();
        self.json.push_str("null");
        self
    }

    /// Writes the boolean `value` to the array.
    pub fn boolean(&mut self, value: bool) -> &mut Self {
        self.comma_delimit();
        self.json.push_str(if value { "true" } else { "false" });
        self
    }

    /// Writes a string to the array.
    pub fn string(&mut self, value: &str) -> &mut Self {
        self.comma_delimit();
        append_string(self.json, value);
        self
    }

    /// Writes a number `value` to the array.
    pub fn number(&mut self, value: Number) -> &mut Self {
        self.comma_delimit();
        append_number(self.json, value);
        self
    }

    /// Writes a date-time `value` using `format` to the array.
    pub fn date_time(
        &mut self,
        date_time: &DateTime,
        format: Format,
    ) -> Result<&mut Self, DateTimeFormatError> {
        self.comma_delimit();
        append_date_time(self.json, date_time, format)?;
        Ok(self)
    }

    /// Starts a nested array inside of the array.
    pub fn start_array(&mut self) -> JsonArrayWriter<'_> {
        self.comma_delimit();
        JsonArrayWriter::new(self.json)
    }

    /// Starts a nested object inside of the array.
    pub fn start_object(&mut self) -> JsonObjectWriter<'_> {
        self.comma_delimit();
        JsonObjectWriter::new(self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }

    fn comma_delimit(&mut self) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
    }
}

pub(crate) fn append_string(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(&escape_string(value));
    json.push('"');
}

/// Epoch seconds are written as numbers, the other formats as strings.
pub(crate) fn append_date_time(
    json: &mut String,
    value: &DateTime,
    format: Format,
) -> Result<(), DateTimeFormatError> {
    let formatted = value.fmt(format)?;
    match format {
        Format::EpochSeconds => json.push_str(&formatted),
        _ => append_string(json, &formatted),
    }
    Ok(())
}

pub(crate) fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            // itoa::Buffer is a fixed-size stack allocation, so this is cheap
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) if value.is_finite() => {
            // ryu::Buffer is a fixed-size stack allocation, so this is cheap
            json.push_str(ryu::Buffer::new().format_finite(value));
        }
        Number::Float(value) => append_string(json, Encoder::from(value).encode()),
    }
}
