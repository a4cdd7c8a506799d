/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shape deserialization interfaces for the Smithy data model.

use crate::Schema;
use sdk_types::{Blob, DateTime};
use std::error::Error;

/// Deserializes Smithy shapes from a serial format.
///
/// The deserializer uses a consumer pattern for aggregate types (structures, lists, maps):
/// it calls the consumer once per member, element or entry, threading a state value (usually
/// a builder) through the calls. Unknown members and `null` values never reach the consumer.
///
/// # Example
///
/// ```ignore
/// let builder = deserializer.read_struct(&CHANNEL, Channel::builder(), |builder, member, de| {
///     Ok(match member.member_index() {
///         Some(0) => builder.name(de.read_string(member)?),
///         Some(1) => builder.created_timestamp(de.read_timestamp(member)?),
///         _ => builder,
///     })
/// })?;
/// let channel = builder.build();
/// ```
pub trait ShapeDeserializer {
    /// The error type returned by deserialization operations.
    type Error: Error;

    /// Reads a structure, calling `consumer` with the schema of each recognised member.
    fn read_struct<T, F>(&mut self, schema: &Schema, state: T, consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &'static Schema, &mut Self) -> Result<T, Self::Error>;

    /// Reads a list, calling `consumer` for each element.
    fn read_list<T, F>(&mut self, schema: &Schema, state: T, consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &mut Self) -> Result<T, Self::Error>;

    /// Reads a map, calling `consumer` with the key of each entry.
    fn read_map<T, F>(&mut self, schema: &Schema, state: T, consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, String, &mut Self) -> Result<T, Self::Error>;

    /// Reads a boolean value.
    fn read_boolean(&mut self, schema: &Schema) -> Result<bool, Self::Error>;

    /// Reads a byte (i8) value.
    fn read_byte(&mut self, schema: &Schema) -> Result<i8, Self::Error>;

    /// Reads a short (i16) value.
    fn read_short(&mut self, schema: &Schema) -> Result<i16, Self::Error>;

    /// Reads an integer (i32) value.
    fn read_integer(&mut self, schema: &Schema) -> Result<i32, Self::Error>;

    /// Reads a long (i64) value.
    fn read_long(&mut self, schema: &Schema) -> Result<i64, Self::Error>;

    /// Reads a float (f32) value.
    fn read_float(&mut self, schema: &Schema) -> Result<f32, Self::Error>;

    /// Reads a double (f64) value.
    fn read_double(&mut self, schema: &Schema) -> Result<f64, Self::Error>;

    /// Reads a string value.
    fn read_string(&mut self, schema: &Schema) -> Result<String, Self::Error>;

    /// Reads a blob (byte array) value.
    fn read_blob(&mut self, schema: &Schema) -> Result<Blob, Self::Error>;

    /// Reads a timestamp value.
    fn read_timestamp(&mut self, schema: &Schema) -> Result<DateTime, Self::Error>;

    /// Returns true if the next value can be read as a structure. Otherwise the value is
    /// skipped and false is returned.
    fn skip_unless_struct(&mut self) -> Result<bool, Self::Error>;

    /// Reads a string and converts it to the enum `E`.
    ///
    /// The conversion never fails: values the enum doesn't know are kept by `E` as is.
    fn read_enum<E>(&mut self, schema: &Schema) -> Result<E, Self::Error>
    where
        E: for<'a> From<&'a str>,
    {
        let value = self.read_string(schema)?;
        Ok(E::from(value.as_str()))
    }

    /// Reads a nested structure.
    fn read_struct_value<T>(&mut self) -> Result<T, Self::Error>
    where
        Self: Sized,
        T: DeserializableStruct,
    {
        T::deserialize(self)
    }

    /// Reads a nested optional structure. A value that isn't a structure yields `None`.
    fn read_optional_struct<T>(&mut self) -> Result<Option<T>, Self::Error>
    where
        Self: Sized,
        T: DeserializableStruct,
    {
        if self.skip_unless_struct()? {
            T::deserialize(self).map(Some)
        } else {
            Ok(None)
        }
    }
}

/// A structure that can be created by any [`ShapeDeserializer`].
pub trait DeserializableStruct: Sized {
    /// The schema of the structure.
    fn schema() -> &'static Schema;

    /// Reads the structure from `deserializer`.
    fn deserialize<D: ShapeDeserializer>(deserializer: &mut D) -> Result<Self, D::Error>;
}
