/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape serialization interfaces for the Smithy data model.

use crate::Schema;
use sdk_types::{Blob, DateTime};
use std::error::Error;

/// Serializes Smithy shapes to a serial format.
///
/// Every write takes the schema of the value being written. Inside a structure this is the
/// member schema, which carries the wire name and any wire-location or timestamp-format
/// overrides; inside a list it is the list's `member` schema.
///
/// Aggregates are written with a callback that writes the contents. Entries of a map are
/// written as a key (`write_string` with the key schema) followed by the value.
///
/// # Example
///
/// ```ignore
/// impl SerializableStruct for Channel {
///     fn schema() -> &'static Schema {
///         &CHANNEL
///     }
///
///     fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
///         if let Some(name) = &self.name {
///             ser.write_string(&CHANNEL_NAME, name)?;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait ShapeSerializer {
    /// The serialized output.
    type Output;

    /// The error type returned by serialization operations.
    type Error: Error;

    /// Consumes the serializer and returns what was written.
    fn finish(self) -> Result<Self::Output, Self::Error>;

    /// Writes a structure. `write_members` writes each set member.
    fn write_struct<F>(&mut self, schema: &Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a list. `write_elements` writes each element with the list's member schema.
    fn write_list<F>(&mut self, schema: &Schema, write_elements: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a map. `write_entries` writes each key followed by its value.
    fn write_map<F>(&mut self, schema: &Schema, write_entries: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>;

    /// Writes a boolean value.
    fn write_boolean(&mut self, schema: &Schema, value: bool) -> Result<(), Self::Error>;

    /// Writes a byte (i8) value.
    fn write_byte(&mut self, schema: &Schema, value: i8) -> Result<(), Self::Error>;

    /// Writes a short (i16) value.
    fn write_short(&mut self, schema: &Schema, value: i16) -> Result<(), Self::Error>;

    /// Writes an integer (i32) value.
    fn write_integer(&mut self, schema: &Schema, value: i32) -> Result<(), Self::Error>;

    /// Writes a long (i64) value.
    fn write_long(&mut self, schema: &Schema, value: i64) -> Result<(), Self::Error>;

    /// Writes a float (f32) value.
    fn write_float(&mut self, schema: &Schema, value: f32) -> Result<(), Self::Error>;

    /// Writes a double (f64) value.
    fn write_double(&mut self, schema: &Schema, value: f64) -> Result<(), Self::Error>;

    /// Writes a string value. Enum values are written as strings.
    fn write_string(&mut self, schema: &Schema, value: &str) -> Result<(), Self::Error>;

    /// Writes a blob value.
    fn write_blob(&mut self, schema: &Schema, value: &Blob) -> Result<(), Self::Error>;

    /// Writes a timestamp value.
    fn write_timestamp(&mut self, schema: &Schema, value: &DateTime) -> Result<(), Self::Error>;

    /// Writes an explicit null.
    fn write_null(&mut self, schema: &Schema) -> Result<(), Self::Error>;

    /// Writes a nested structure value.
    fn write_struct_value<T>(&mut self, schema: &Schema, value: &T) -> Result<(), Self::Error>
    where
        Self: Sized,
        T: SerializableStruct,
    {
        self.write_struct(schema, |ser| value.serialize_members(ser))
    }
}

/// A structure that can serialize itself with any [`ShapeSerializer`].
pub trait SerializableStruct {
    /// The schema of the structure.
    fn schema() -> &'static Schema;

    /// Writes each member that is set. Unset members are not written.
    fn serialize_members<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error>;

    /// Serializes this structure as a top-level value.
    fn serialize<S: ShapeSerializer>(&self, serializer: &mut S) -> Result<(), S::Error> {
        serializer.write_struct(Self::schema(), |ser| self.serialize_members(ser))
    }
}
