/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Marshalling operation inputs into HTTP requests.

use crate::body::SdkBody;
use crate::error::BuildError;
use crate::header::quote_header_value;
use crate::label::{expand_template, ExpandedUri};
use crate::operation::OperationSchema;
use crate::protocol::{ProtocolSettings, X_AMZ_TARGET};
use crate::query::QueryWriter;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use sdk_json::codec::JsonSerializer;
use sdk_schema::codec::http_string::{HttpStringCodec, HttpStringCodecError, HttpStringSerializer};
use sdk_schema::codec::Codec;
use sdk_schema::serde::{SerializableStruct, ShapeSerializer};
use sdk_schema::{HttpBinding, Schema};
use sdk_types::{Blob, DateTime};
use std::borrow::Cow;

fn location(binding: HttpBinding) -> &'static str {
    match binding {
        HttpBinding::Body => "body",
        HttpBinding::Label | HttpBinding::GreedyLabel => "URI",
        HttpBinding::Query(_) => "query string",
        HttpBinding::Header(_) => "headers",
        HttpBinding::ResponseCode => "status code",
    }
}

/// A top-level member that is written to a label, a query parameter or a header.
#[derive(Debug)]
struct BoundValue {
    member: &'static str,
    binding: HttpBinding,
    is_list: bool,
    value: HttpStringSerializer,
}

impl BoundValue {
    fn new(schema: &Schema, binding: HttpBinding, is_list: bool) -> Self {
        let codec = match binding {
            HttpBinding::Header(_) => HttpStringCodec::header(),
            _ => HttpStringCodec::query(),
        };
        Self {
            member: schema.member_name().unwrap_or_default(),
            binding,
            is_list,
            value: codec.create_serializer(),
        }
    }

    fn error(&self, source: HttpStringCodecError) -> BuildError {
        BuildError::InvalidField {
            member: self.member,
            location: location(self.binding),
            source,
        }
    }
}

/// Where the value being written goes.
enum Target {
    Body,
    Bound,
}

/// The parts of a request produced by [`HttpRequestSerializer`].
#[derive(Debug, Default)]
pub struct SerializedRequest {
    labels: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    headers: Vec<(&'static str, String)>,
    body: Option<Vec<u8>>,
}

impl SerializedRequest {
    /// Label values keyed by member name.
    pub fn labels(&self) -> &[(&'static str, String)] {
        &self.labels
    }

    /// Query parameters in the order they were written, not yet percent encoded.
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Headers in the order they were written.
    pub fn headers(&self) -> &[(&'static str, String)] {
        &self.headers
    }

    /// The JSON body, or `None` if the request has no body.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(header, _)| header.eq_ignore_ascii_case(name))
    }
}

/// Serializes an operation input into the parts of an HTTP request.
///
/// Members of the input structure are routed by their [`HttpBinding`]: body members go to the
/// JSON body, the others are converted to strings for the URI, the query string or the
/// headers. Lists bound outside the body are comma-joined. When the protocol doesn't bind
/// HTTP locations, everything is written to the body.
#[derive(Debug)]
pub struct HttpRequestSerializer {
    body: JsonSerializer,
    binds_http: bool,
    body_members: usize,
    bound: Option<BoundValue>,
    request: SerializedRequest,
}

impl HttpRequestSerializer {
    /// Creates a serializer for requests of the given protocol.
    pub fn new(protocol: &ProtocolSettings) -> Self {
        Self {
            body: JsonSerializer::new(protocol.json_codec_settings()),
            binds_http: protocol.protocol().binds_http(),
            body_members: 0,
            bound: None,
            request: SerializedRequest::default(),
        }
    }

    /// Top-level members sit at depth 1, inside the input structure.
    fn is_top_level(&self) -> bool {
        self.body.depth() == 1
    }

    fn target(&mut self, schema: &Schema) -> Target {
        if self.bound.is_some() {
            return Target::Bound;
        }
        if self.is_top_level() {
            let binding = schema.http_binding();
            if self.binds_http && binding != HttpBinding::Body {
                self.bound = Some(BoundValue::new(schema, binding, false));
                return Target::Bound;
            }
            self.body_members += 1;
        }
        Target::Body
    }

    fn write_bound<F>(&mut self, write: F) -> Result<(), BuildError>
    where
        F: FnOnce(&mut HttpStringSerializer) -> Result<(), HttpStringCodecError>,
    {
        if let Some(bound) = self.bound.as_mut() {
            if let Err(source) = write(&mut bound.value) {
                return Err(bound.error(source));
            }
        }
        Ok(())
    }

    /// Completes a scalar bound outside of the body. Elements of bound lists are completed
    /// with their list.
    fn end_scalar(&mut self) -> Result<(), BuildError> {
        if matches!(&self.bound, Some(bound) if !bound.is_list) {
            self.flush_bound()
        } else {
            Ok(())
        }
    }

    fn flush_bound(&mut self) -> Result<(), BuildError> {
        let Some(BoundValue {
            member,
            binding,
            is_list,
            value,
        }) = self.bound.take()
        else {
            return Ok(());
        };
        let value = value.finish().map_err(|source| BuildError::InvalidField {
            member,
            location: location(binding),
            source,
        })?;
        match binding {
            HttpBinding::Label | HttpBinding::GreedyLabel => {
                self.request.labels.push((member, value))
            }
            // an empty list has nothing to send
            HttpBinding::Query(_) | HttpBinding::Header(_) if is_list && value.is_empty() => {}
            HttpBinding::Query(name) => self.request.query.push((name, value)),
            HttpBinding::Header(name) => self.request.headers.push((name, value)),
            HttpBinding::Body | HttpBinding::ResponseCode => {}
        }
        Ok(())
    }

    /// Structures and maps can only be written to the body.
    fn begin_aggregate(&mut self, schema: &Schema) -> Result<(), BuildError> {
        if let Some(bound) = &self.bound {
            return Err(BuildError::UnsupportedBinding {
                member: bound.member,
                location: location(bound.binding),
            });
        }
        if self.is_top_level() {
            let binding = schema.http_binding();
            if self.binds_http && binding != HttpBinding::Body {
                return Err(BuildError::UnsupportedBinding {
                    member: schema.member_name().unwrap_or_default(),
                    location: location(binding),
                });
            }
            self.body_members += 1;
        }
        Ok(())
    }
}

macro_rules! write_scalar {
    ($self:ident, $method:ident, $schema:ident, $value:expr) => {{
        match $self.target($schema) {
            Target::Body => $self.body.$method($schema, $value)?,
            Target::Bound => $self.write_bound(|ser| ser.$method($schema, $value))?,
        }
        $self.end_scalar()
    }};
}

impl ShapeSerializer for HttpRequestSerializer {
    type Output = SerializedRequest;
    type Error = BuildError;

    fn finish(mut self) -> Result<Self::Output, Self::Error> {
        self.flush_bound()?;
        let has_body = !self.binds_http || self.body_members > 0;
        let body = self.body.finish()?;
        let mut request = self.request;
        if has_body {
            request.body = Some(body);
        }
        Ok(request)
    }

    fn write_struct<F>(&mut self, schema: &Schema, write_members: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.begin_aggregate(schema)?;
        self.body.begin_struct(schema)?;
        write_members(self)?;
        self.body.end_struct()?;
        Ok(())
    }

    fn write_list<F>(&mut self, schema: &Schema, write_elements: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        if self.bound.is_none() && self.is_top_level() {
            let binding = schema.http_binding();
            if self.binds_http && binding != HttpBinding::Body {
                self.bound = Some(BoundValue::new(schema, binding, true));
                write_elements(self)?;
                return self.flush_bound();
            }
        }
        self.begin_aggregate(schema)?;
        self.body.begin_list(schema)?;
        write_elements(self)?;
        self.body.end_list()?;
        Ok(())
    }

    fn write_map<F>(&mut self, schema: &Schema, write_entries: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        self.begin_aggregate(schema)?;
        self.body.begin_map(schema)?;
        write_entries(self)?;
        self.body.end_map()?;
        Ok(())
    }

    fn write_boolean(&mut self, schema: &Schema, value: bool) -> Result<(), Self::Error> {
        write_scalar!(self, write_boolean, schema, value)
    }

    fn write_byte(&mut self, schema: &Schema, value: i8) -> Result<(), Self::Error> {
        write_scalar!(self, write_byte, schema, value)
    }

    fn write_short(&mut self, schema: &Schema, value: i16) -> Result<(), Self::Error> {
        write_scalar!(self, write_short, schema, value)
    }

    fn write_integer(&mut self, schema: &Schema, value: i32) -> Result<(), Self::Error> {
        write_scalar!(self, write_integer, schema, value)
    }

    fn write_long(&mut self, schema: &Schema, value: i64) -> Result<(), Self::Error> {
        write_scalar!(self, write_long, schema, value)
    }

    fn write_float(&mut self, schema: &Schema, value: f32) -> Result<(), Self::Error> {
        write_scalar!(self, write_float, schema, value)
    }

    fn write_double(&mut self, schema: &Schema, value: f64) -> Result<(), Self::Error> {
        write_scalar!(self, write_double, schema, value)
    }

    fn write_string(&mut self, schema: &Schema, value: &str) -> Result<(), Self::Error> {
        match self.target(schema) {
            Target::Body => self.body.write_string(schema, value)?,
            Target::Bound => {
                let in_header_list = matches!(
                    &self.bound,
                    Some(BoundValue { is_list: true, binding: HttpBinding::Header(_), .. })
                );
                let value = if in_header_list {
                    quote_header_value(value)
                } else {
                    Cow::Borrowed(value)
                };
                self.write_bound(|ser| ser.write_string(schema, &value))?
            }
        }
        self.end_scalar()
    }

    fn write_blob(&mut self, schema: &Schema, value: &Blob) -> Result<(), Self::Error> {
        write_scalar!(self, write_blob, schema, value)
    }

    fn write_timestamp(&mut self, schema: &Schema, value: &DateTime) -> Result<(), Self::Error> {
        write_scalar!(self, write_timestamp, schema, value)
    }

    fn write_null(&mut self, schema: &Schema) -> Result<(), Self::Error> {
        match self.target(schema) {
            Target::Body => self.body.write_null(schema)?,
            Target::Bound => self.write_bound(|ser| ser.write_null(schema))?,
        }
        self.end_scalar()
    }
}

/// Marshals `input` into an HTTP request for `operation`.
///
/// The request URI is relative: it holds the expanded path and the query string. The endpoint
/// is joined on by the client. The path is also attached to the request as an [`ExpandedUri`]
/// extension, which keeps the raw label values next to the encoded ones. Any failure is returned
/// before anything is sent.
pub fn serialize_request<T: SerializableStruct>(
    input: &T,
    operation: &OperationSchema,
    protocol: &ProtocolSettings,
) -> Result<http::Request<SdkBody>, BuildError> {
    let mut serializer = HttpRequestSerializer::new(protocol);
    input.serialize(&mut serializer)?;
    let serialized = serializer.finish()?;

    let uri = expand_template(operation.http().uri(), serialized.labels())?;
    let mut path_and_query = QueryWriter::new(uri.encoded());
    for (name, value) in serialized.query() {
        path_and_query.insert(name, value);
    }

    let mut builder = http::Request::builder()
        .method(operation.http().method())
        .uri(path_and_query.build());
    for (name, value) in serialized.headers() {
        builder = builder.header(*name, value.as_str());
    }
    if let Some(target) = protocol.target(operation) {
        builder = builder.header(X_AMZ_TARGET, target);
    }
    let body = match &serialized.body {
        Some(body) => {
            if !serialized.has_header(CONTENT_TYPE.as_str()) {
                builder = builder.header(CONTENT_TYPE, protocol.content_type());
            }
            SdkBody::from(body.clone())
        }
        None => SdkBody::empty(),
    };
    builder = builder.header(CONTENT_LENGTH, body.content_length().to_string());

    let mut request = builder.body(body)?;
    request.extensions_mut().insert::<ExpandedUri>(uri);
    tracing::debug!(
        operation = operation.name(),
        method = %request.method(),
        uri = %request.uri(),
        "serialized request"
    );
    Ok(request)
}

#[cfg(test)]
mod test {
    use super::{serialize_request, HttpRequestSerializer};
    use crate::error::BuildError;
    use crate::label::ExpandedUri;
    use crate::operation::{HttpTrait, OperationSchema};
    use crate::protocol::ProtocolSettings;
    use sdk_schema::prelude::*;
    use sdk_schema::serde::{SerializableStruct, ShapeSerializer};
    use sdk_schema::{HttpBinding, Schema, ShapeId};
    use sdk_types::DateTime;

    static STRING_LIST: Schema =
        Schema::list(ShapeId::from_static("test#StringList"), &STRING_LIST_MEMBER);
    static STRING_LIST_MEMBER: Schema = Schema::member(
        ShapeId::from_static("test#StringList$member"),
        "member",
        0,
        &STRING,
    );

    static INPUT: Schema = Schema::structure(ShapeId::from_static("test#SendInput"), &INPUT_MEMBERS);
    static INPUT_MEMBERS: [&Schema; 7] = [
        &CHANNEL_ARN,
        &MAX_RESULTS,
        &TYPES,
        &SINCE,
        &BEARER,
        &TAGS,
        &CONTENT,
    ];
    static CHANNEL_ARN: Schema = Schema::member(
        ShapeId::from_static("test#SendInput$ChannelArn"),
        "ChannelArn",
        0,
        &STRING,
    )
    .with_http_binding(HttpBinding::Label);
    static MAX_RESULTS: Schema = Schema::member(
        ShapeId::from_static("test#SendInput$MaxResults"),
        "MaxResults",
        1,
        &INTEGER,
    )
    .with_http_binding(HttpBinding::Query("max-results"));
    static TYPES: Schema = Schema::member(
        ShapeId::from_static("test#SendInput$Types"),
        "Types",
        2,
        &STRING_LIST,
    )
    .with_http_binding(HttpBinding::Query("types"));
    static SINCE: Schema = Schema::member(
        ShapeId::from_static("test#SendInput$Since"),
        "Since",
        3,
        &TIMESTAMP,
    )
    .with_http_binding(HttpBinding::Header("x-since"));
    static BEARER: Schema = Schema::member(
        ShapeId::from_static("test#SendInput$ChimeBearer"),
        "ChimeBearer",
        4,
        &STRING,
    )
    .with_http_binding(HttpBinding::Header("x-amz-chime-bearer"));
    static TAGS: Schema = Schema::member(
        ShapeId::from_static("test#SendInput$Tags"),
        "Tags",
        5,
        &STRING_LIST,
    )
    .with_http_binding(HttpBinding::Header("x-tags"));
    static CONTENT: Schema = Schema::member(
        ShapeId::from_static("test#SendInput$Content"),
        "Content",
        6,
        &STRING,
    );

    static SEND: OperationSchema = OperationSchema::new("Test", "Send", &INPUT, &UNIT)
        .with_http(HttpTrait::new("POST", "/channels/{ChannelArn}/messages"));
    static SEND_RPC: OperationSchema = OperationSchema::new("Test", "Send", &INPUT, &UNIT);

    #[derive(Debug, Default)]
    struct SendInput {
        channel_arn: Option<String>,
        max_results: Option<i32>,
        types: Option<Vec<String>>,
        since: Option<DateTime>,
        chime_bearer: Option<String>,
        tags: Option<Vec<String>>,
        content: Option<String>,
    }

    fn write_strings<S: ShapeSerializer>(
        ser: &mut S,
        schema: &Schema,
        values: &[String],
    ) -> Result<(), S::Error> {
        ser.write_list(schema, |ser| {
            for value in values {
                ser.write_string(&STRING_LIST_MEMBER, value)?;
            }
            Ok(())
        })
    }

    impl SerializableStruct for SendInput {
        fn schema() -> &'static Schema {
            &INPUT
        }

        fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
            if let Some(value) = &self.channel_arn {
                ser.write_string(&CHANNEL_ARN, value)?;
            }
            if let Some(value) = self.max_results {
                ser.write_integer(&MAX_RESULTS, value)?;
            }
            if let Some(values) = &self.types {
                write_strings(ser, &TYPES, values)?;
            }
            if let Some(value) = &self.since {
                ser.write_timestamp(&SINCE, value)?;
            }
            if let Some(value) = &self.chime_bearer {
                ser.write_string(&BEARER, value)?;
            }
            if let Some(values) = &self.tags {
                write_strings(ser, &TAGS, values)?;
            }
            if let Some(value) = &self.content {
                ser.write_string(&CONTENT, value)?;
            }
            Ok(())
        }
    }

    fn full_input() -> SendInput {
        SendInput {
            channel_arn: Some("arn:a/b".into()),
            max_results: Some(10),
            types: Some(vec!["a".into(), "b".into()]),
            since: Some(DateTime::from_secs(1576540098)),
            chime_bearer: Some("arn:user".into()),
            tags: Some(vec!["plain".into(), "a,b".into()]),
            content: Some("hi".into()),
        }
    }

    #[test]
    fn rest_json_request() {
        let request =
            serialize_request(&full_input(), &SEND, &ProtocolSettings::rest_json()).unwrap();
        assert_eq!(http::Method::POST, request.method());
        assert_eq!(
            "/channels/arn%3Aa%2Fb/messages?max-results=10&types=a%2Cb",
            request.uri().to_string()
        );
        let path = request.extensions().get::<ExpandedUri>().unwrap();
        assert_eq!("/channels/arn:a/b/messages", path.raw());
        assert_eq!("/channels/arn%3Aa%2Fb/messages", path.encoded());
        let headers = request.headers();
        assert_eq!("Mon, 16 Dec 2019 23:48:18 GMT", headers["x-since"]);
        assert_eq!("arn:user", headers["x-amz-chime-bearer"]);
        assert_eq!("plain,\"a,b\"", headers["x-tags"]);
        assert_eq!("application/json", headers["content-type"]);
        assert_eq!("16", headers["content-length"]);
        assert!(headers.get("x-amz-target").is_none());
        assert_eq!(Some(&br#"{"Content":"hi"}"#[..]), request.body().bytes());
    }

    #[test]
    fn no_body_members_means_no_body() {
        let input = SendInput {
            channel_arn: Some("arn".into()),
            ..Default::default()
        };
        let request = serialize_request(&input, &SEND, &ProtocolSettings::rest_json()).unwrap();
        assert_eq!("/channels/arn/messages", request.uri().to_string());
        assert_eq!(None, request.body().bytes());
        assert!(request.headers().get("content-type").is_none());
        assert_eq!("0", request.headers()["content-length"]);
    }

    #[test]
    fn missing_label_is_a_construction_failure() {
        let input = SendInput {
            content: Some("hi".into()),
            ..Default::default()
        };
        let err = serialize_request(&input, &SEND, &ProtocolSettings::rest_json()).unwrap_err();
        assert!(matches!(err, BuildError::MissingLabel(ref label) if label == "ChannelArn"));
    }

    #[test]
    fn aws_json_ignores_bindings() {
        let input = full_input();
        let protocol = ProtocolSettings::aws_json_1_1("Test_20200101");
        let request = serialize_request(&input, &SEND_RPC, &protocol).unwrap();
        assert_eq!("/", request.uri().to_string());
        assert_eq!("Test_20200101.Send", request.headers()["x-amz-target"]);
        assert_eq!(
            "application/x-amz-json-1.1",
            request.headers()["content-type"]
        );
        let body: serde_json::Value =
            serde_json::from_slice(request.body().bytes().unwrap()).unwrap();
        assert_eq!(
            serde_json::json!({
                "ChannelArn": "arn:a/b",
                "MaxResults": 10,
                "Types": ["a", "b"],
                "Since": 1576540098,
                "ChimeBearer": "arn:user",
                "Tags": ["plain", "a,b"],
                "Content": "hi"
            }),
            body
        );
    }

    #[test]
    fn aws_json_empty_input_has_empty_object_body() {
        let protocol = ProtocolSettings::aws_json_1_0("Test_20200101");
        let request = serialize_request(&SendInput::default(), &SEND_RPC, &protocol).unwrap();
        assert_eq!(Some(&b"{}"[..]), request.body().bytes());
        assert_eq!("2", request.headers()["content-length"]);
    }

    #[test]
    fn empty_lists_outside_the_body_are_omitted() {
        let input = SendInput {
            channel_arn: Some("arn".into()),
            types: Some(vec![]),
            tags: Some(vec![]),
            ..Default::default()
        };
        let mut ser = HttpRequestSerializer::new(&ProtocolSettings::rest_json());
        input.serialize(&mut ser).unwrap();
        let serialized = ser.finish().unwrap();
        assert!(serialized.query().is_empty());
        assert!(serialized.headers().is_empty());
        assert_eq!(&[("ChannelArn", "arn".to_string())], serialized.labels());
        assert_eq!(None, serialized.body());
    }

    static NESTED_INPUT: Schema =
        Schema::structure(ShapeId::from_static("test#NestedInput"), &NESTED_MEMBERS);
    static NESTED_MEMBERS: [&Schema; 1] = [&NESTED_HEADER];
    static NESTED_HEADER: Schema = Schema::member(
        ShapeId::from_static("test#NestedInput$Inner"),
        "Inner",
        0,
        &INPUT,
    )
    .with_http_binding(HttpBinding::Header("x-inner"));

    struct NestedInput(SendInput);

    impl SerializableStruct for NestedInput {
        fn schema() -> &'static Schema {
            &NESTED_INPUT
        }

        fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
            ser.write_struct_value(&NESTED_HEADER, &self.0)
        }
    }

    #[test]
    fn structures_cannot_be_bound_to_headers() {
        let mut ser = HttpRequestSerializer::new(&ProtocolSettings::rest_json());
        let err = NestedInput(SendInput::default())
            .serialize(&mut ser)
            .unwrap_err();
        assert_eq!(
            "member `Inner` cannot be bound to the headers; only scalars and lists of scalars can",
            err.to_string()
        );
    }
}
