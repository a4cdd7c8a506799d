/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Codec trait for creating shape serializers and deserializers.
//!
//! A codec represents a specific serialization format (e.g., JSON, or the plain strings used
//! in headers and query strings) and creates serializers and deserializers for that format.

pub mod http_string;

use crate::serde::{ShapeDeserializer, ShapeSerializer};

/// A codec for a specific serialization format.
///
/// Deserializers borrow their input, so the deserializer type is generic over the input
/// lifetime.
///
/// # Examples
///
/// ```
/// use sdk_schema::codec::http_string::HttpStringCodec;
/// use sdk_schema::codec::Codec;
/// use sdk_schema::prelude::INTEGER;
/// use sdk_schema::serde::{ShapeDeserializer, ShapeSerializer};
///
/// let codec = HttpStringCodec::query();
/// let mut ser = codec.create_serializer();
/// ser.write_integer(&INTEGER, 7).unwrap();
/// let output = ser.finish().unwrap();
///
/// let mut de = codec.create_deserializer(output.as_bytes());
/// assert_eq!(7, de.read_integer(&INTEGER).unwrap());
/// ```
pub trait Codec {
    /// The serializer type for this codec.
    type Serializer: ShapeSerializer;

    /// The deserializer type for this codec.
    type Deserializer<'a>: ShapeDeserializer
    where
        Self: 'a;

    /// Creates a new serializer for this codec.
    fn create_serializer(&self) -> Self::Serializer;

    /// Creates a new deserializer for this codec reading from `input`.
    fn create_deserializer<'a>(&'a self, input: &'a [u8]) -> Self::Deserializer<'a>;
}
