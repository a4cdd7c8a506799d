/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON serializer implementation.

use crate::codec::JsonCodecSettings;
use crate::serialize::{append_date_time, append_number, append_string};
use sdk_schema::serde::ShapeSerializer;
use sdk_schema::{Schema, ShapeId};
use sdk_types::date_time::{DateTimeFormatError, Format as TimestampFormat};
use sdk_types::primitive::Encoder;
use sdk_types::{base64, Blob, DateTime, Number};
use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
enum JsonSerializerErrorKind {
    InvalidMapKey(ShapeId),
    MissingMapValue,
    TimestampFormat(DateTimeFormatError),
    UnbalancedContainer,
}

/// Error type for JSON serialization.
#[derive(Debug)]
pub struct JsonSerializerError {
    kind: JsonSerializerErrorKind,
}

impl From<JsonSerializerErrorKind> for JsonSerializerError {
    fn from(kind: JsonSerializerErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for JsonSerializerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use JsonSerializerErrorKind::*;
        match &self.kind {
            InvalidMapKey(shape_id) => {
                write!(f, "map keys must be strings, but a {shape_id} was written")
            }
            MissingMapValue => write!(f, "map entry was closed without a value"),
            TimestampFormat(_) => write!(f, "failed to format timestamp"),
            UnbalancedContainer => write!(f, "JSON containers were not closed in order"),
        }
    }
}

impl StdError for JsonSerializerError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            JsonSerializerErrorKind::TimestampFormat(source) => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    Struct { started: bool },
    List { started: bool },
    Map { started: bool, expecting_key: bool },
}

/// Position of the value about to be written.
#[derive(Debug, PartialEq, Eq)]
enum Slot {
    Value,
    MapKey,
}

/// JSON serializer that implements the [`ShapeSerializer`] trait.
///
/// Members of a structure are written under their wire name, taken from the member schema
/// passed to each write. Besides the closure-based [`ShapeSerializer`] methods, containers
/// can be opened and closed explicitly with the `begin_*`/`end_*` methods.
#[derive(Debug)]
pub struct JsonSerializer {
    output: String,
    settings: JsonCodecSettings,
    stack: Vec<Container>,
}

impl JsonSerializer {
    /// Creates a new JSON serializer with the given settings.
    pub fn new(settings: JsonCodecSettings) -> Self {
        Self {
            output: String::new(),
            settings,
            stack: Vec::new(),
        }
    }

    /// Returns the codec settings.
    pub fn settings(&self) -> &JsonCodecSettings {
        &self.settings
    }

    /// Returns the number of containers that are currently open.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Opens a JSON object for the structure described by `schema`.
    pub fn begin_struct(&mut self, schema: &Schema) -> Result<(), JsonSerializerError> {
        self.begin_value(schema)?;
        self.output.push('{');
        self.stack.push(Container::Struct { started: false });
        Ok(())
    }

    /// Closes the object opened by [`JsonSerializer::begin_struct`].
    pub fn end_struct(&mut self) -> Result<(), JsonSerializerError> {
        match self.stack.pop() {
            Some(Container::Struct { .. }) => {
                self.output.push('}');
                Ok(())
            }
            _ => Err(JsonSerializerErrorKind::UnbalancedContainer.into()),
        }
    }

    /// Opens a JSON array for the list described by `schema`.
    pub fn begin_list(&mut self, schema: &Schema) -> Result<(), JsonSerializerError> {
        self.begin_value(schema)?;
        self.output.push('[');
        self.stack.push(Container::List { started: false });
        Ok(())
    }

    /// Closes the array opened by [`JsonSerializer::begin_list`].
    pub fn end_list(&mut self) -> Result<(), JsonSerializerError> {
        match self.stack.pop() {
            Some(Container::List { .. }) => {
                self.output.push(']');
                Ok(())
            }
            _ => Err(JsonSerializerErrorKind::UnbalancedContainer.into()),
        }
    }

    /// Opens a JSON object for the map described by `schema`.
    pub fn begin_map(&mut self, schema: &Schema) -> Result<(), JsonSerializerError> {
        self.begin_value(schema)?;
        self.output.push('{');
        self.stack.push(Container::Map {
            started: false,
            expecting_key: true,
        });
        Ok(())
    }

    /// Closes the object opened by [`JsonSerializer::begin_map`].
    pub fn end_map(&mut self) -> Result<(), JsonSerializerError> {
        match self.stack.pop() {
            Some(Container::Map {
                expecting_key: true,
                ..
            }) => {
                self.output.push('}');
                Ok(())
            }
            Some(Container::Map { .. }) => Err(JsonSerializerErrorKind::MissingMapValue.into()),
            _ => Err(JsonSerializerErrorKind::UnbalancedContainer.into()),
        }
    }

    /// Writes the separator and, inside a structure, the key that precede a value.
    fn begin_value(&mut self, schema: &Schema) -> Result<(), JsonSerializerError> {
        match self.begin_slot(schema) {
            Slot::Value => Ok(()),
            Slot::MapKey => Err(JsonSerializerErrorKind::InvalidMapKey(*schema.shape_id()).into()),
        }
    }

    fn begin_slot(&mut self, schema: &Schema) -> Slot {
        let use_json_name = self.settings.use_json_name;
        match self.stack.last_mut() {
            None => Slot::Value,
            Some(Container::Struct { started }) => {
                if *started {
                    self.output.push(',');
                }
                *started = true;
                append_string(&mut self.output, schema.wire_name(use_json_name));
                self.output.push(':');
                Slot::Value
            }
            Some(Container::List { started }) => {
                if *started {
                    self.output.push(',');
                }
                *started = true;
                Slot::Value
            }
            Some(Container::Map {
                started,
                expecting_key,
            }) => {
                if *expecting_key {
                    if *started {
                        self.output.push(',');
                    }
                    *started = true;
                    *expecting_key = false;
                    Slot::MapKey
                } else {
                    *expecting_key = true;
                    Slot::Value
                }
            }
        }
    }

    fn timestamp_format(&self, schema: &Schema) -> TimestampFormat {
        schema
            .timestamp_format()
            .unwrap_or(self.settings.default_timestamp_format)
    }

    fn write_number(&mut self, schema: &Schema, value: Number) -> Result<(), JsonSerializerError> {
        self.begin_value(schema)?;
        append_number(&mut self.output, value);
        Ok(())
    }
}

impl ShapeSerializer for JsonSerializer {
    type Output = Vec<u8>;
    type Error = JsonSerializerError;

    fn finish(self) -> Result<Self::Output, Self::Error> {
        if !self.stack.is_empty() {
            return Err(JsonSerializerErrorKind::UnbalancedContainer.into());
        }
        Ok(self.output.into_bytes())
    }

    fn write_struct<F>(&mut self, schema: &Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.begin_struct(schema)?;
        write_members(self)?;
        self.end_struct()
    }

    fn write_list<F>(&mut self, schema: &Schema, write_elements: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.begin_list(schema)?;
        write_elements(self)?;
        self.end_list()
    }

    fn write_map<F>(&mut self, schema: &Schema, write_entries: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.begin_map(schema)?;
        write_entries(self)?;
        self.end_map()
    }

    fn write_boolean(&mut self, schema: &Schema, value: bool) -> Result<(), Self::Error> {
        self.begin_value(schema)?;
        self.output.push_str(if value { "true" } else { "false" });
        Ok(())
    }

    fn write_byte(&mut self, schema: &Schema, value: i8) -> Result<(), Self::Error> {
        self.write_number(schema, Number::from(i64::from(value)))
    }

    fn write_short(&mut self, schema: &Schema, value: i16) -> Result<(), Self::Error> {
        self.write_number(schema, Number::from(i64::from(value)))
    }

    fn write_integer(&mut self, schema: &Schema, value: i32) -> Result<(), Self::Error> {
        self.write_number(schema, Number::from(i64::from(value)))
    }

    fn write_long(&mut self, schema: &Schema, value: i64) -> Result<(), Self::Error> {
        self.write_number(schema, Number::from(value))
    }

    fn write_float(&mut self, schema: &Schema, value: f32) -> Result<(), Self::Error> {
        self.begin_value(schema)?;
        if value.is_finite() {
            // Formatted as f32 so that 0.1f32 isn't written as 0.10000000149011612
            self.output
                .push_str(ryu::Buffer::new().format_finite(value));
        } else {
            append_string(&mut self.output, Encoder::from(value).encode());
        }
        Ok(())
    }

    fn write_double(&mut self, schema: &Schema, value: f64) -> Result<(), Self::Error> {
        self.write_number(schema, Number::Float(value))
    }

    fn write_string(&mut self, schema: &Schema, value: &str) -> Result<(), Self::Error> {
        let slot = self.begin_slot(schema);
        append_string(&mut self.output, value);
        if slot == Slot::MapKey {
            self.output.push(':');
        }
        Ok(())
    }

    fn write_blob(&mut self, schema: &Schema, value: &Blob) -> Result<(), Self::Error> {
        self.begin_value(schema)?;
        append_string(&mut self.output, &base64::encode(value));
        Ok(())
    }

    fn write_timestamp(&mut self, schema: &Schema, value: &DateTime) -> Result<(), Self::Error> {
        let format = self.timestamp_format(schema);
        self.begin_value(schema)?;
        append_date_time(&mut self.output, value, format)
            .map_err(|err| JsonSerializerErrorKind::TimestampFormat(err).into())
    }

    fn write_null(&mut self, schema: &Schema) -> Result<(), Self::Error> {
        self.begin_value(schema)?;
        self.output.push_str("null");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdk_schema::prelude::*;
    use sdk_schema::serde::SerializableStruct;

    static TAGS: Schema = Schema::map(ShapeId::from_static("test#Tags"), &TAGS_KEY, &TAGS_VALUE);
    static TAGS_KEY: Schema = Schema::member(ShapeId::from_static("test#Tags$key"), "key", 0, &STRING);
    static TAGS_VALUE: Schema =
        Schema::member(ShapeId::from_static("test#Tags$value"), "value", 1, &STRING);
    static NAMES: Schema = Schema::list(ShapeId::from_static("test#Names"), &NAMES_MEMBER);
    static NAMES_MEMBER: Schema =
        Schema::member(ShapeId::from_static("test#Names$member"), "member", 0, &STRING);

    static ITEM: Schema = Schema::structure(ShapeId::from_static("test#Item"), &ITEM_MEMBERS);
    static ITEM_MEMBERS: [&Schema; 5] = [
        &ITEM_NAME,
        &ITEM_COUNT,
        &ITEM_CREATED,
        &ITEM_NAMES,
        &ITEM_TAGS,
    ];
    static ITEM_NAME: Schema =
        Schema::member(ShapeId::from_static("test#Item$Name"), "Name", 0, &STRING)
            .with_json_name("name");
    static ITEM_COUNT: Schema =
        Schema::member(ShapeId::from_static("test#Item$Count"), "Count", 1, &INTEGER);
    static ITEM_CREATED: Schema = Schema::member(
        ShapeId::from_static("test#Item$Created"),
        "Created",
        2,
        &TIMESTAMP,
    );
    static ITEM_NAMES: Schema =
        Schema::member(ShapeId::from_static("test#Item$Names"), "Names", 3, &NAMES);
    static ITEM_TAGS: Schema =
        Schema::member(ShapeId::from_static("test#Item$Tags"), "Tags", 4, &TAGS);

    #[derive(Default)]
    struct Item {
        name: Option<String>,
        count: Option<i32>,
        created: Option<DateTime>,
        names: Option<Vec<String>>,
        tags: Option<Vec<(String, String)>>,
    }

    impl SerializableStruct for Item {
        fn schema() -> &'static Schema {
            &ITEM
        }

        fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
            if let Some(name) = &self.name {
                ser.write_string(&ITEM_NAME, name)?;
            }
            if let Some(count) = self.count {
                ser.write_integer(&ITEM_COUNT, count)?;
            }
            if let Some(created) = &self.created {
                ser.write_timestamp(&ITEM_CREATED, created)?;
            }
            if let Some(names) = &self.names {
                ser.write_list(&ITEM_NAMES, |ser| {
                    for name in names {
                        ser.write_string(&NAMES_MEMBER, name)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(tags) = &self.tags {
                ser.write_map(&ITEM_TAGS, |ser| {
                    for (key, value) in tags {
                        ser.write_string(&TAGS_KEY, key)?;
                        ser.write_string(&TAGS_VALUE, value)?;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        }
    }

    fn to_string(settings: JsonCodecSettings, item: &Item) -> String {
        let mut ser = JsonSerializer::new(settings);
        item.serialize(&mut ser).unwrap();
        String::from_utf8(ser.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_write_scalars() {
        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.write_boolean(&BOOLEAN, true).unwrap();
        assert_eq!("true", String::from_utf8(ser.finish().unwrap()).unwrap());

        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.write_string(&STRING, "he said \"hi\"").unwrap();
        assert_eq!(
            r#""he said \"hi\"""#,
            String::from_utf8(ser.finish().unwrap()).unwrap()
        );

        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.write_integer(&INTEGER, -42).unwrap();
        assert_eq!("-42", String::from_utf8(ser.finish().unwrap()).unwrap());

        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.write_float(&FLOAT, 0.1).unwrap();
        assert_eq!("0.1", String::from_utf8(ser.finish().unwrap()).unwrap());
    }

    #[test]
    fn test_write_special_floats() {
        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.write_list(&NAMES, |ser| {
            ser.write_double(&DOUBLE, f64::NAN)?;
            ser.write_double(&DOUBLE, f64::INFINITY)?;
            ser.write_float(&FLOAT, f32::NEG_INFINITY)
        })
        .unwrap();
        assert_eq!(
            r#"["NaN","Infinity","-Infinity"]"#,
            String::from_utf8(ser.finish().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_write_blob() {
        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.write_blob(&BLOB, &Blob::new("hello")).unwrap();
        assert_eq!(
            r#""aGVsbG8=""#,
            String::from_utf8(ser.finish().unwrap()).unwrap()
        );
    }

    #[test]
    fn test_struct_skips_unset_members() {
        let item = Item {
            count: Some(5),
            ..Default::default()
        };
        assert_eq!(
            r#"{"Count":5}"#,
            to_string(JsonCodecSettings::default(), &item)
        );
        assert_eq!("{}", to_string(JsonCodecSettings::default(), &Item::default()));
    }

    #[test]
    fn test_struct_all_members() {
        let item = Item {
            name: Some("thing".into()),
            count: Some(1),
            created: Some(DateTime::from_secs_f64(1576540098.5)),
            names: Some(vec!["a".into(), "b".into()]),
            tags: Some(vec![("k1".into(), "v1".into()), ("k2".into(), "v2".into())]),
        };
        assert_eq!(
            r#"{"name":"thing","Count":1,"Created":1576540098.5,"Names":["a","b"],"Tags":{"k1":"v1","k2":"v2"}}"#,
            to_string(JsonCodecSettings::default(), &item)
        );
        // AWS JSON protocols ignore jsonName
        let output = to_string(JsonCodecSettings::aws_json(), &item);
        assert!(output.starts_with(r#"{"Name":"thing","#));
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!("v2", parsed["Tags"]["k2"]);
    }

    #[test]
    fn test_timestamp_format_override() {
        let settings = JsonCodecSettings {
            default_timestamp_format: TimestampFormat::DateTime,
            ..Default::default()
        };
        let item = Item {
            created: Some(DateTime::from_secs(1576540098)),
            ..Default::default()
        };
        assert_eq!(
            r#"{"Created":"2019-12-16T23:48:18Z"}"#,
            to_string(settings, &item)
        );
    }

    #[test]
    fn test_map_keys_must_be_strings() {
        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        let err = ser
            .write_map(&TAGS, |ser| ser.write_integer(&INTEGER, 5))
            .unwrap_err();
        assert_eq!(
            "map keys must be strings, but a smithy.api#Integer was written",
            err.to_string()
        );
    }

    #[test]
    fn test_stepping_api() {
        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.begin_struct(&ITEM).unwrap();
        assert_eq!(1, ser.depth());
        ser.write_integer(&ITEM_COUNT, 3).unwrap();
        ser.begin_list(&ITEM_NAMES).unwrap();
        ser.write_string(&NAMES_MEMBER, "x").unwrap();
        ser.end_list().unwrap();
        assert!(ser.end_map().is_err());
    }

    #[test]
    fn test_unbalanced_finish() {
        let mut ser = JsonSerializer::new(JsonCodecSettings::default());
        ser.begin_struct(&ITEM).unwrap();
        assert!(ser.finish().is_err());
    }
}
