/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON codec implementation for schema-based serialization.

use sdk_schema::codec::Codec;
use sdk_types::date_time::Format as TimestampFormat;

mod deserializer;
mod serializer;

pub use deserializer::JsonDeserializer;
pub use serializer::{JsonSerializer, JsonSerializerError};

/// Configuration for JSON codec behavior.
#[derive(Debug, Clone)]
pub struct JsonCodecSettings {
    /// Whether to use the @jsonName trait for member names.
    pub use_json_name: bool,
    /// Default timestamp format to use when not specified by @timestampFormat trait.
    pub default_timestamp_format: TimestampFormat,
}

impl Default for JsonCodecSettings {
    fn default() -> Self {
        Self {
            use_json_name: true,
            default_timestamp_format: TimestampFormat::EpochSeconds,
        }
    }
}

impl JsonCodecSettings {
    /// Settings for the AWS JSON 1.0 and 1.1 protocols, which ignore `@jsonName`.
    pub fn aws_json() -> Self {
        Self {
            use_json_name: false,
            ..Default::default()
        }
    }

    /// Settings for the REST-JSON protocol.
    pub fn rest_json() -> Self {
        Self::default()
    }
}

/// JSON codec for schema-based serialization and deserialization.
///
/// This codec implements the Smithy JSON protocol serialization rules,
/// with configurable behavior for different protocol variants (e.g., AWS JSON RPC vs REST JSON).
///
/// # Examples
///
/// ```
/// use sdk_json::codec::{JsonCodec, JsonCodecSettings};
/// use sdk_schema::codec::Codec;
/// use sdk_schema::prelude::STRING;
/// use sdk_schema::serde::{ShapeDeserializer, ShapeSerializer};
///
/// // AWS JSON RPC style: no jsonName, epoch-seconds timestamps
/// let codec = JsonCodec::new(JsonCodecSettings::aws_json());
///
/// let mut ser = codec.create_serializer();
/// ser.write_string(&STRING, "hello").unwrap();
/// let output = ser.finish().unwrap();
/// assert_eq!(b"\"hello\"", output.as_slice());
///
/// let mut de = codec.create_deserializer(&output);
/// assert_eq!("hello", de.read_string(&STRING).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    settings: JsonCodecSettings,
}

impl JsonCodec {
    /// Creates a new JSON codec with the given settings.
    pub fn new(settings: JsonCodecSettings) -> Self {
        Self { settings }
    }

    /// Returns the codec settings.
    pub fn settings(&self) -> &JsonCodecSettings {
        &self.settings
    }
}

impl Codec for JsonCodec {
    type Serializer = JsonSerializer;
    type Deserializer<'a> = JsonDeserializer<'a>;

    fn create_serializer(&self) -> Self::Serializer {
        JsonSerializer::new(self.settings.clone())
    }

    fn create_deserializer<'a>(&'a self, input: &'a [u8]) -> Self::Deserializer<'a> {
        JsonDeserializer::new(input, self.settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = JsonCodecSettings::default();
        assert!(settings.use_json_name);
        assert_eq!(
            settings.default_timestamp_format,
            TimestampFormat::EpochSeconds
        );
        assert!(!JsonCodecSettings::aws_json().use_json_name);
    }

    #[test]
    fn test_codec_creation() {
        let codec = JsonCodec::default();
        let _serializer = codec.create_serializer();
        let _deserializer = codec.create_deserializer(b"{}");
        assert!(codec.settings().use_json_name);
    }
}
