/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON deserializer implementation.

use crate::codec::JsonCodecSettings;
use crate::deserialize::token::{expect_start_array, expect_start_object, skip_value};
use crate::deserialize::{json_token_iter, DeserializeError, JsonTokenIterator, Offset, Token};
use sdk_schema::serde::ShapeDeserializer;
use sdk_schema::Schema;
use sdk_types::date_time::Format as TimestampFormat;
use sdk_types::primitive::Parse;
use sdk_types::{base64, Blob, DateTime, Number};
use std::borrow::Cow;
use std::iter::Peekable;

/// JSON deserializer that implements the [`ShapeDeserializer`] trait.
///
/// Object keys are matched against member wire names exactly. Keys that don't name a member
/// are skipped along with their value, and `null` values are treated as absent.
///
/// Besides the consumer-based [`ShapeDeserializer`] methods, aggregates can be walked with
/// the stepping methods ([`begin_struct`](JsonDeserializer::begin_struct) and
/// [`next_member`](JsonDeserializer::next_member), and their list and map counterparts).
#[derive(Debug)]
pub struct JsonDeserializer<'a> {
    input: &'a [u8],
    tokens: Peekable<JsonTokenIterator<'a>>,
    settings: JsonCodecSettings,
}

impl<'a> JsonDeserializer<'a> {
    /// Creates a new JSON deserializer with the given settings.
    pub fn new(input: &'a [u8], settings: JsonCodecSettings) -> Self {
        Self {
            input,
            tokens: json_token_iter(input).peekable(),
            settings,
        }
    }

    /// Returns the codec settings.
    pub fn settings(&self) -> &JsonCodecSettings {
        &self.settings
    }

    /// Fails if there are tokens left after the top-level value.
    pub fn finish(mut self) -> Result<(), DeserializeError> {
        match self.tokens.next() {
            None => Ok(()),
            Some(Err(err)) => Err(err),
            Some(Ok(token)) => Err(token.error(Cow::Borrowed(
                "found more JSON tokens after completing parsing",
            ))),
        }
    }

    fn next_token(&mut self) -> Result<Token<'a>, DeserializeError> {
        self.tokens
            .next()
            .unwrap_or_else(|| Err(DeserializeError::custom("unexpected end of input")))
    }

    fn peek_token(&mut self) -> Result<Option<Token<'a>>, DeserializeError> {
        if matches!(self.tokens.peek(), Some(Err(_))) {
            return self.next_token().map(Some);
        }
        Ok(self
            .tokens
            .peek()
            .and_then(|token| token.as_ref().ok())
            .cloned())
    }

    /// Consumes the next token if it is `null`.
    fn skip_null(&mut self) -> Result<bool, DeserializeError> {
        if let Some(Token::ValueNull { .. }) = self.peek_token()? {
            self.next_token()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Consumes the start of an object.
    pub fn begin_struct(&mut self) -> Result<(), DeserializeError> {
        expect_start_object(self.tokens.next())
    }

    /// Advances to the next member of the structure described by `schema` and returns its
    /// member schema, or `None` at the end of the object.
    ///
    /// Unknown keys and members whose value is `null` are skipped.
    pub fn next_member(
        &mut self,
        schema: &Schema,
    ) -> Result<Option<&'static Schema>, DeserializeError> {
        loop {
            match self.next_token()? {
                Token::EndObject { .. } => return Ok(None),
                Token::ObjectKey { key, .. } => {
                    let key = key.to_unescaped()?;
                    if self.skip_null()? {
                        continue;
                    }
                    match schema.member_by_wire_name(&key, self.settings.use_json_name) {
                        Some(member) => return Ok(Some(member)),
                        None => {
                            tracing::trace!(shape_id = %schema.shape_id(), key = %key, "skipping unknown member");
                            skip_value(&mut self.tokens)?;
                        }
                    }
                }
                other => {
                    return Err(other.error(Cow::Borrowed("expected object key or end of object")))
                }
            }
        }
    }

    /// Consumes the start of an array.
    pub fn begin_list(&mut self) -> Result<(), DeserializeError> {
        expect_start_array(self.tokens.next())
    }

    /// Returns true if the array has another non-null element. Consumes the end of the array
    /// otherwise.
    pub fn has_next_element(&mut self) -> Result<bool, DeserializeError> {
        loop {
            match self.peek_token()? {
                Some(Token::EndArray { .. }) => {
                    self.next_token()?;
                    return Ok(false);
                }
                Some(Token::ValueNull { .. }) => {
                    self.next_token()?;
                }
                Some(_) => return Ok(true),
                None => return Err(DeserializeError::custom("unexpected end of input")),
            }
        }
    }

    /// Consumes the start of an object that represents a map.
    pub fn begin_map(&mut self) -> Result<(), DeserializeError> {
        expect_start_object(self.tokens.next())
    }

    /// Advances to the next map entry with a non-null value and returns its key, or `None`
    /// at the end of the object.
    pub fn next_entry(&mut self) -> Result<Option<String>, DeserializeError> {
        loop {
            match self.next_token()? {
                Token::EndObject { .. } => return Ok(None),
                Token::ObjectKey { key, .. } => {
                    let key = key.to_unescaped()?.into_owned();
                    if !self.skip_null()? {
                        return Ok(Some(key));
                    }
                }
                other => {
                    return Err(other.error(Cow::Borrowed("expected object key or end of object")))
                }
            }
        }
    }

    /// Skips the next value, including everything nested inside of it.
    pub fn skip_value(&mut self) -> Result<(), DeserializeError> {
        skip_value(&mut self.tokens)
    }

    /// Source text of the number token starting at `offset`.
    fn number_text(&self, offset: Offset) -> Option<&'a str> {
        let rest = self.input.get(offset.0..)?;
        let len = rest
            .iter()
            .take_while(|b| matches!(b, b'-' | b'+' | b'.' | b'e' | b'E' | b'0'..=b'9'))
            .count();
        std::str::from_utf8(&rest[..len]).ok()
    }

    fn read_number(&mut self) -> Result<Number, DeserializeError> {
        match self.next_token()? {
            Token::ValueNumber { value, .. } => Ok(value),
            other => Err(other.error(Cow::Borrowed("expected number"))),
        }
    }

    /// Floats may also be one of the strings `NaN`, `Infinity` or `-Infinity`.
    fn read_float_value(&mut self) -> Result<f64, DeserializeError> {
        match self.next_token()? {
            Token::ValueNumber { value, .. } => Ok(value.to_f64_lossy()),
            Token::ValueString { value, offset } => match value.as_escaped_str() {
                special @ ("NaN" | "Infinity" | "-Infinity") => f64::parse_smithy_primitive(special)
                    .map_err(|_| offset.error(Cow::Borrowed("expected number"))),
                _ => Err(offset.error(Cow::Borrowed(
                    "only `Infinity`, `-Infinity`, `NaN` can represent a float as a string",
                ))),
            },
            other => Err(other.error(Cow::Borrowed("expected number"))),
        }
    }

    fn timestamp_format(&self, schema: &Schema) -> TimestampFormat {
        schema
            .timestamp_format()
            .unwrap_or(self.settings.default_timestamp_format)
    }
}

impl ShapeDeserializer for JsonDeserializer<'_> {
    type Error = DeserializeError;

    fn read_struct<T, F>(&mut self, schema: &Schema, state: T, mut consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &'static Schema, &mut Self) -> Result<T, Self::Error>,
    {
        self.begin_struct()?;
        let mut state = state;
        while let Some(member) = self.next_member(schema)? {
            state = consumer(state, member, self)?;
        }
        Ok(state)
    }

    fn read_list<T, F>(&mut self, _schema: &Schema, state: T, mut consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &mut Self) -> Result<T, Self::Error>,
    {
        self.begin_list()?;
        let mut state = state;
        while self.has_next_element()? {
            state = consumer(state, self)?;
        }
        Ok(state)
    }

    fn read_map<T, F>(&mut self, _schema: &Schema, state: T, mut consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, String, &mut Self) -> Result<T, Self::Error>,
    {
        self.begin_map()?;
        let mut state = state;
        while let Some(key) = self.next_entry()? {
            state = consumer(state, key, self)?;
        }
        Ok(state)
    }

    fn read_boolean(&mut self, _schema: &Schema) -> Result<bool, Self::Error> {
        match self.next_token()? {
            Token::ValueBool { value, .. } => Ok(value),
            other => Err(other.error(Cow::Borrowed("expected boolean"))),
        }
    }

    fn read_byte(&mut self, _schema: &Schema) -> Result<i8, Self::Error> {
        Ok(i8::try_from(self.read_number()?)?)
    }

    fn read_short(&mut self, _schema: &Schema) -> Result<i16, Self::Error> {
        Ok(i16::try_from(self.read_number()?)?)
    }

    fn read_integer(&mut self, _schema: &Schema) -> Result<i32, Self::Error> {
        Ok(i32::try_from(self.read_number()?)?)
    }

    fn read_long(&mut self, _schema: &Schema) -> Result<i64, Self::Error> {
        Ok(i64::try_from(self.read_number()?)?)
    }

    fn read_float(&mut self, _schema: &Schema) -> Result<f32, Self::Error> {
        self.read_float_value().map(|value| value as f32)
    }

    fn read_double(&mut self, _schema: &Schema) -> Result<f64, Self::Error> {
        self.read_float_value()
    }

    fn read_string(&mut self, _schema: &Schema) -> Result<String, Self::Error> {
        match self.next_token()? {
            Token::ValueString { value, .. } => Ok(value.to_unescaped()?.into_owned()),
            other => Err(other.error(Cow::Borrowed("expected string"))),
        }
    }

    fn read_blob(&mut self, _schema: &Schema) -> Result<Blob, Self::Error> {
        match self.next_token()? {
            Token::ValueString { value, offset } => base64::decode(value.to_unescaped()?)
                .map(Blob::new)
                .map_err(|err| offset.error(format!("failed to decode base64: {err}").into())),
            other => Err(other.error(Cow::Borrowed("expected base64 encoded string"))),
        }
    }

    fn read_timestamp(&mut self, schema: &Schema) -> Result<DateTime, Self::Error> {
        let format = self.timestamp_format(schema);
        match self.next_token()? {
            Token::ValueNumber { value, offset } => Ok(match value {
                Number::PosInt(secs) => DateTime::from_secs(secs.min(i64::MAX as u64) as i64),
                Number::NegInt(secs) => DateTime::from_secs(secs),
                // Plain decimals keep nanosecond precision
                Number::Float(secs) => match self.number_text(offset) {
                    Some(text) if !text.contains(['e', 'E']) => {
                        DateTime::from_str(text, TimestampFormat::EpochSeconds)
                            .unwrap_or_else(|_| DateTime::from_secs_f64(secs))
                    }
                    _ => DateTime::from_secs_f64(secs),
                },
            }),
            Token::ValueString { value, offset } => {
                DateTime::from_str(&value.to_unescaped()?, format).map_err(|err| {
                    offset.error(format!("failed to parse timestamp: {err}").into())
                })
            }
            other => Err(other.error(Cow::Borrowed("expected timestamp"))),
        }
    }

    fn skip_unless_struct(&mut self) -> Result<bool, Self::Error> {
        match self.peek_token()? {
            Some(Token::StartObject { .. }) => Ok(true),
            Some(_) => {
                skip_value(&mut self.tokens)?;
                Ok(false)
            }
            None => Err(DeserializeError::custom("unexpected end of input")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdk_schema::prelude::*;
    use sdk_schema::serde::DeserializableStruct;
    use sdk_schema::ShapeId;
    use sdk_types::UnknownVariantValue;

    static INNER: Schema = Schema::structure(ShapeId::from_static("test#Inner"), &INNER_MEMBERS);
    static INNER_MEMBERS: [&Schema; 1] = [&INNER_VALUE];
    static INNER_VALUE: Schema =
        Schema::member(ShapeId::from_static("test#Inner$Value"), "Value", 0, &STRING);

    static COLOR: Schema =
        Schema::enumeration(ShapeId::from_static("test#Color"), &["RED", "GREEN"]);

    static OUTER: Schema = Schema::structure(ShapeId::from_static("test#Outer"), &OUTER_MEMBERS);
    static OUTER_MEMBERS: [&Schema; 6] = [
        &OUTER_NAME,
        &OUTER_INNER,
        &OUTER_SIZES,
        &OUTER_ATTRS,
        &OUTER_COLOR,
        &OUTER_CREATED,
    ];
    static OUTER_NAME: Schema =
        Schema::member(ShapeId::from_static("test#Outer$Name"), "Name", 0, &STRING);
    static OUTER_INNER: Schema =
        Schema::member(ShapeId::from_static("test#Outer$Inner"), "Inner", 1, &INNER);
    static OUTER_SIZES: Schema =
        Schema::member(ShapeId::from_static("test#Outer$Sizes"), "Sizes", 2, &SIZES);
    static OUTER_ATTRS: Schema =
        Schema::member(ShapeId::from_static("test#Outer$Attrs"), "Attrs", 3, &ATTRS);
    static OUTER_COLOR: Schema =
        Schema::member(ShapeId::from_static("test#Outer$Color"), "Color", 4, &COLOR);
    static OUTER_CREATED: Schema = Schema::member(
        ShapeId::from_static("test#Outer$Created"),
        "Created",
        5,
        &TIMESTAMP,
    );

    static SIZES: Schema = Schema::list(ShapeId::from_static("test#Sizes"), &SIZES_MEMBER);
    static SIZES_MEMBER: Schema =
        Schema::member(ShapeId::from_static("test#Sizes$member"), "member", 0, &INTEGER);
    static ATTRS: Schema = Schema::map(ShapeId::from_static("test#Attrs"), &ATTRS_KEY, &ATTRS_VALUE);
    static ATTRS_KEY: Schema =
        Schema::member(ShapeId::from_static("test#Attrs$key"), "key", 0, &STRING);
    static ATTRS_VALUE: Schema =
        Schema::member(ShapeId::from_static("test#Attrs$value"), "value", 1, &DOUBLE);

    #[derive(Debug, PartialEq)]
    enum Color {
        Red,
        Green,
        Unknown(UnknownVariantValue),
    }

    impl From<&str> for Color {
        fn from(value: &str) -> Self {
            match value {
                "RED" => Color::Red,
                "GREEN" => Color::Green,
                other => Color::Unknown(UnknownVariantValue::new(other)),
            }
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Inner {
        value: Option<String>,
    }

    impl DeserializableStruct for Inner {
        fn schema() -> &'static Schema {
            &INNER
        }

        fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
            de.read_struct(&INNER, Inner::default(), |mut inner, member, de| {
                if member.member_index() == Some(0) {
                    inner.value = Some(de.read_string(member)?);
                }
                Ok(inner)
            })
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Outer {
        name: Option<String>,
        inner: Option<Inner>,
        sizes: Option<Vec<i32>>,
        attrs: Option<Vec<(String, f64)>>,
        color: Option<Color>,
        created: Option<DateTime>,
    }

    impl DeserializableStruct for Outer {
        fn schema() -> &'static Schema {
            &OUTER
        }

        fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
            de.read_struct(&OUTER, Outer::default(), |mut outer, member, de| {
                match member.member_index() {
                    Some(0) => outer.name = Some(de.read_string(member)?),
                    Some(1) => outer.inner = de.read_optional_struct()?,
                    Some(2) => {
                        outer.sizes = Some(de.read_list(member, Vec::new(), |mut sizes, de| {
                            sizes.push(de.read_integer(&SIZES_MEMBER)?);
                            Ok(sizes)
                        })?)
                    }
                    Some(3) => {
                        outer.attrs = Some(de.read_map(member, Vec::new(), |mut attrs, key, de| {
                            attrs.push((key, de.read_double(&ATTRS_VALUE)?));
                            Ok(attrs)
                        })?)
                    }
                    Some(4) => outer.color = Some(de.read_enum(member)?),
                    Some(5) => outer.created = Some(de.read_timestamp(member)?),
                    _ => {}
                }
                Ok(outer)
            })
        }
    }

    fn deserializer(input: &[u8]) -> JsonDeserializer<'_> {
        JsonDeserializer::new(input, JsonCodecSettings::default())
    }

    #[test]
    fn test_read_scalars() {
        assert!(deserializer(b"true").read_boolean(&BOOLEAN).unwrap());
        assert_eq!(-5, deserializer(b"-5").read_byte(&BYTE).unwrap());
        assert_eq!(70000, deserializer(b"70000").read_integer(&INTEGER).unwrap());
        assert_eq!(1.5, deserializer(b"1.5").read_double(&DOUBLE).unwrap());
        assert_eq!(
            "a\nb",
            deserializer(br#""a\nb""#).read_string(&STRING).unwrap()
        );
        assert_eq!(
            Blob::new("hello"),
            deserializer(br#""aGVsbG8=""#).read_blob(&BLOB).unwrap()
        );
    }

    #[test]
    fn test_read_special_floats() {
        assert!(deserializer(br#""NaN""#)
            .read_double(&DOUBLE)
            .unwrap()
            .is_nan());
        assert_eq!(
            f64::INFINITY,
            deserializer(br#""Infinity""#).read_double(&DOUBLE).unwrap()
        );
        assert_eq!(
            f32::NEG_INFINITY,
            deserializer(br#""-Infinity""#).read_float(&FLOAT).unwrap()
        );
        assert!(deserializer(br#""five""#).read_double(&DOUBLE).is_err());
    }

    #[test]
    fn test_number_out_of_range() {
        let err = deserializer(b"300").read_byte(&BYTE).unwrap_err();
        assert_eq!(
            "number is out of range for its target type",
            err.to_string()
        );
        assert!(deserializer(b"1.5").read_integer(&INTEGER).is_err());
    }

    #[test]
    fn test_read_timestamps() {
        assert_eq!(
            DateTime::from_secs(1576540098),
            deserializer(b"1576540098").read_timestamp(&TIMESTAMP).unwrap()
        );
        assert_eq!(
            DateTime::from_secs_and_nanos(1576540098, 500_000_000),
            deserializer(b"1576540098.5").read_timestamp(&TIMESTAMP).unwrap()
        );
        assert_eq!(
            DateTime::from_secs_and_nanos(1690000000, 123_456_789),
            deserializer(b"1690000000.123456789").read_timestamp(&TIMESTAMP).unwrap()
        );
        assert_eq!(
            DateTime::from_secs_and_nanos(-2, 750_000_000),
            deserializer(b"-1.25").read_timestamp(&TIMESTAMP).unwrap()
        );
        assert_eq!(
            DateTime::from_secs(1500),
            deserializer(b"1.5e3").read_timestamp(&TIMESTAMP).unwrap()
        );
        let settings = JsonCodecSettings {
            default_timestamp_format: TimestampFormat::DateTime,
            ..Default::default()
        };
        assert_eq!(
            DateTime::from_secs(1576540098),
            JsonDeserializer::new(br#""2019-12-16T23:48:18Z""#, settings)
                .read_timestamp(&TIMESTAMP)
                .unwrap()
        );
    }

    #[test]
    fn test_read_nested_struct() {
        let input = br#"{
            "Name": "outer",
            "Inner": {"Value": "inner", "Extra": [1, {"a": null}]},
            "Sizes": [1, null, 3],
            "Attrs": {"x": 1.5, "y": null, "z": "Infinity"},
            "Color": "GREEN",
            "Created": 5
        }"#;
        let mut de = deserializer(input);
        let outer = Outer::deserialize(&mut de).unwrap();
        de.finish().unwrap();
        assert_eq!(
            Outer {
                name: Some("outer".into()),
                inner: Some(Inner {
                    value: Some("inner".into())
                }),
                sizes: Some(vec![1, 3]),
                attrs: Some(vec![("x".into(), 1.5), ("z".into(), f64::INFINITY)]),
                color: Some(Color::Green),
                created: Some(DateTime::from_secs(5)),
            },
            outer
        );
    }

    #[test]
    fn test_unknown_and_null_members_are_absent() {
        let input = br#"{"Unknown": {"Name": "nope"}, "Name": null, "Inner": "not a struct"}"#;
        let outer = Outer::deserialize(&mut deserializer(input)).unwrap();
        assert_eq!(Outer::default(), outer);
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let outer = Outer::deserialize(&mut deserializer(br#"{"name": "lower"}"#)).unwrap();
        assert_eq!(None, outer.name);
    }

    #[test]
    fn test_unknown_enum_value() {
        let outer = Outer::deserialize(&mut deserializer(br#"{"Color": "BLUE", "Name": "x"}"#))
            .unwrap();
        assert_eq!(
            Some(Color::Unknown(UnknownVariantValue::new("BLUE"))),
            outer.color
        );
        assert_eq!(Some("x"), outer.name.as_deref());
    }

    #[test]
    fn test_malformed_json() {
        let err = Outer::deserialize(&mut deserializer(br#"{"Name": "x" "Color": 1}"#))
            .unwrap_err();
        assert_eq!(Some(13), err.offset());
        assert!(Outer::deserialize(&mut deserializer(b"[]")).is_err());
        assert!(Outer::deserialize(&mut deserializer(br#"{"Name": "x""#)).is_err());
    }

    #[test]
    fn test_trailing_tokens() {
        let mut de = deserializer(b"{} {}");
        Outer::deserialize(&mut de).unwrap();
        assert!(de.finish().is_err());
    }
}
