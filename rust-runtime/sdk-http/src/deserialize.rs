/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Unmarshalling HTTP responses into operation outputs.

use crate::body::SdkBody;
use crate::error::ResponseError;
use crate::header::read_joined;
use crate::protocol::ProtocolSettings;
use http::HeaderMap;
use sdk_json::codec::JsonDeserializer;
use sdk_schema::codec::http_string::{HttpStringCodecError, HttpStringDeserializer};
use sdk_schema::serde::{DeserializableStruct, ShapeDeserializer};
use sdk_schema::{HttpBinding, Schema, ShapeType};
use sdk_types::date_time::Format;
use sdk_types::{Blob, DateTime};

/// The value of a header bound to the member being read.
#[derive(Debug)]
struct HeaderInput {
    name: &'static str,
    value: String,
    position: usize,
    is_list: bool,
}

impl HeaderInput {
    fn read<T, F>(&mut self, read: F) -> Result<T, ResponseError>
    where
        F: FnOnce(&mut HttpStringDeserializer<'_>) -> Result<T, HttpStringCodecError>,
    {
        let mut de = HttpStringDeserializer::new(&self.value[self.position..], Format::HttpDate);
        let result = read(&mut de);
        let position = self.value.len() - de.remaining().len();
        self.position = position;
        result.map_err(|source| ResponseError::Header {
            header: self.name,
            source,
        })
    }

    /// The whole value. Commas only separate list elements.
    fn take_string(&mut self) -> String {
        let value = self.value[self.position..].trim().to_string();
        self.position = self.value.len();
        value
    }

    fn is_exhausted(&self) -> bool {
        self.value[self.position..].trim().is_empty()
    }
}

#[derive(Debug)]
enum Pending {
    Header(HeaderInput),
    Status,
}

/// Deserializes an operation output from an HTTP response.
///
/// Top-level members bound to headers or to the status code are read from the response
/// metadata first, then body members are read from the JSON body. Body keys that name a
/// member bound elsewhere are ignored. When the protocol doesn't bind HTTP locations every
/// member is read from the body.
#[derive(Debug)]
pub struct HttpResponseDeserializer<'a> {
    body: JsonDeserializer<'a>,
    headers: &'a HeaderMap,
    status: u16,
    binds_http: bool,
    depth: usize,
    pending: Option<Pending>,
}

impl<'a> HttpResponseDeserializer<'a> {
    /// Creates a deserializer over the parts of a response. An empty body reads as `{}`.
    pub fn new(
        body: &'a [u8],
        headers: &'a HeaderMap,
        status: u16,
        protocol: &ProtocolSettings,
    ) -> Self {
        let body: &'a [u8] = if body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            body
        };
        Self {
            body: JsonDeserializer::new(body, protocol.json_codec_settings()),
            headers,
            status,
            binds_http: protocol.protocol().binds_http(),
            depth: 0,
            pending: None,
        }
    }

    /// Fails if the body has content after the output structure.
    pub fn finish(self) -> Result<(), ResponseError> {
        Ok(self.body.finish()?)
    }

    fn check_not_pending(&self) -> Result<(), ResponseError> {
        match &self.pending {
            None => Ok(()),
            Some(Pending::Header(header)) => Err(ResponseError::UnsupportedBinding(header.name)),
            Some(Pending::Status) => Err(ResponseError::StatusCode),
        }
    }

    /// Feeds the members bound to headers and to the status code to `consumer`.
    fn read_http_bound<T, F>(
        &mut self,
        schema: &Schema,
        mut state: T,
        consumer: &mut F,
    ) -> Result<T, ResponseError>
    where
        F: FnMut(T, &'static Schema, &mut Self) -> Result<T, ResponseError>,
    {
        for member in schema.members().iter().copied() {
            self.pending = match member.http_binding() {
                HttpBinding::Header(name) => match read_joined(self.headers, name)? {
                    Some(value) if !value.trim().is_empty() => Some(Pending::Header(HeaderInput {
                        name,
                        value,
                        position: 0,
                        is_list: member.target_type() == ShapeType::List,
                    })),
                    _ => None,
                },
                HttpBinding::ResponseCode => Some(Pending::Status),
                _ => None,
            };
            if self.pending.is_some() {
                state = consumer(state, member, self)?;
                self.pending = None;
            }
        }
        Ok(state)
    }
}

macro_rules! read_scalar {
    ($self:ident, $method:ident, $schema:ident) => {
        match &mut $self.pending {
            None => Ok($self.body.$method($schema)?),
            Some(Pending::Header(header)) => header.read(|de| de.$method($schema)),
            Some(Pending::Status) => Err(ResponseError::StatusCode),
        }
    };
}

impl ShapeDeserializer for HttpResponseDeserializer<'_> {
    type Error = ResponseError;

    fn read_struct<T, F>(&mut self, schema: &Schema, state: T, mut consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &'static Schema, &mut Self) -> Result<T, Self::Error>,
    {
        self.check_not_pending()?;
        let top_level = self.depth == 0 && self.binds_http;
        let mut state = state;
        if top_level {
            state = self.read_http_bound(schema, state, &mut consumer)?;
        }

        self.depth += 1;
        self.body.begin_struct()?;
        while let Some(member) = self.body.next_member(schema)? {
            if top_level && member.http_binding() != HttpBinding::Body {
                self.body.skip_value()?;
                continue;
            }
            state = consumer(state, member, self)?;
        }
        self.depth -= 1;
        Ok(state)
    }

    fn read_list<T, F>(&mut self, _schema: &Schema, state: T, mut consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, &mut Self) -> Result<T, Self::Error>,
    {
        let from_header = match &self.pending {
            None => false,
            Some(Pending::Header(header)) if header.is_list => true,
            Some(Pending::Header(header)) => {
                return Err(ResponseError::UnsupportedBinding(header.name))
            }
            Some(Pending::Status) => return Err(ResponseError::StatusCode),
        };

        let mut state = state;
        if from_header {
            while matches!(&self.pending, Some(Pending::Header(header)) if !header.is_exhausted()) {
                state = consumer(state, self)?;
            }
        } else {
            self.depth += 1;
            self.body.begin_list()?;
            while self.body.has_next_element()? {
                state = consumer(state, self)?;
            }
            self.depth -= 1;
        }
        Ok(state)
    }

    fn read_map<T, F>(&mut self, _schema: &Schema, state: T, mut consumer: F) -> Result<T, Self::Error>
    where
        F: FnMut(T, String, &mut Self) -> Result<T, Self::Error>,
    {
        self.check_not_pending()?;
        let mut state = state;
        self.depth += 1;
        self.body.begin_map()?;
        while let Some(key) = self.body.next_entry()? {
            state = consumer(state, key, self)?;
        }
        self.depth -= 1;
        Ok(state)
    }

    fn read_boolean(&mut self, schema: &Schema) -> Result<bool, Self::Error> {
        read_scalar!(self, read_boolean, schema)
    }

    fn read_byte(&mut self, schema: &Schema) -> Result<i8, Self::Error> {
        read_scalar!(self, read_byte, schema)
    }

    fn read_short(&mut self, schema: &Schema) -> Result<i16, Self::Error> {
        read_scalar!(self, read_short, schema)
    }

    fn read_integer(&mut self, schema: &Schema) -> Result<i32, Self::Error> {
        if let Some(Pending::Status) = self.pending {
            return Ok(i32::from(self.status));
        }
        read_scalar!(self, read_integer, schema)
    }

    fn read_long(&mut self, schema: &Schema) -> Result<i64, Self::Error> {
        read_scalar!(self, read_long, schema)
    }

    fn read_float(&mut self, schema: &Schema) -> Result<f32, Self::Error> {
        read_scalar!(self, read_float, schema)
    }

    fn read_double(&mut self, schema: &Schema) -> Result<f64, Self::Error> {
        read_scalar!(self, read_double, schema)
    }

    fn read_string(&mut self, schema: &Schema) -> Result<String, Self::Error> {
        if let Some(Pending::Header(header)) = &mut self.pending {
            if !header.is_list {
                return Ok(header.take_string());
            }
        }
        read_scalar!(self, read_string, schema)
    }

    fn read_blob(&mut self, schema: &Schema) -> Result<Blob, Self::Error> {
        read_scalar!(self, read_blob, schema)
    }

    fn read_timestamp(&mut self, schema: &Schema) -> Result<DateTime, Self::Error> {
        read_scalar!(self, read_timestamp, schema)
    }

    fn skip_unless_struct(&mut self) -> Result<bool, Self::Error> {
        self.check_not_pending()?;
        Ok(self.body.skip_unless_struct()?)
    }
}

/// Unmarshals the output `T` from a successful response.
pub fn deserialize_response<T: DeserializableStruct>(
    response: &http::Response<SdkBody>,
    protocol: &ProtocolSettings,
) -> Result<T, ResponseError> {
    let body = response.body().bytes().unwrap_or_default();
    let mut de = HttpResponseDeserializer::new(
        body,
        response.headers(),
        response.status().as_u16(),
        protocol,
    );
    let output = T::deserialize(&mut de)?;
    de.finish()?;
    Ok(output)
}

#[cfg(test)]
mod test {
    use super::deserialize_response;
    use crate::body::SdkBody;
    use crate::error::ResponseError;
    use crate::protocol::ProtocolSettings;
    use sdk_schema::prelude::*;
    use sdk_schema::serde::{DeserializableStruct, ShapeDeserializer};
    use sdk_schema::{HttpBinding, Schema, ShapeId};
    use sdk_types::DateTime;

    static INTEGER_LIST: Schema =
        Schema::list(ShapeId::from_static("test#IntegerList"), &INTEGER_LIST_MEMBER);
    static INTEGER_LIST_MEMBER: Schema = Schema::member(
        ShapeId::from_static("test#IntegerList$member"),
        "member",
        0,
        &INTEGER,
    );
    static TIMESTAMP_LIST: Schema =
        Schema::list(ShapeId::from_static("test#TimestampList"), &TIMESTAMP_LIST_MEMBER);
    static TIMESTAMP_LIST_MEMBER: Schema = Schema::member(
        ShapeId::from_static("test#TimestampList$member"),
        "member",
        0,
        &TIMESTAMP,
    );

    static OUTPUT: Schema = Schema::structure(ShapeId::from_static("test#Output"), &OUTPUT_MEMBERS);
    static OUTPUT_MEMBERS: [&Schema; 6] = [
        &REQUEST_ID,
        &SINCE,
        &SIZES,
        &STATUS,
        &NAME,
        &DATES,
    ];
    static REQUEST_ID: Schema = Schema::member(
        ShapeId::from_static("test#Output$RequestId"),
        "RequestId",
        0,
        &STRING,
    )
    .with_http_binding(HttpBinding::Header("x-request-id"));
    static SINCE: Schema = Schema::member(
        ShapeId::from_static("test#Output$Since"),
        "Since",
        1,
        &TIMESTAMP,
    )
    .with_http_binding(HttpBinding::Header("x-since"));
    static SIZES: Schema = Schema::member(
        ShapeId::from_static("test#Output$Sizes"),
        "Sizes",
        2,
        &INTEGER_LIST,
    )
    .with_http_binding(HttpBinding::Header("x-sizes"));
    static STATUS: Schema = Schema::member(
        ShapeId::from_static("test#Output$Status"),
        "Status",
        3,
        &INTEGER,
    )
    .with_http_binding(HttpBinding::ResponseCode);
    static NAME: Schema =
        Schema::member(ShapeId::from_static("test#Output$Name"), "Name", 4, &STRING);
    static DATES: Schema = Schema::member(
        ShapeId::from_static("test#Output$Dates"),
        "Dates",
        5,
        &TIMESTAMP_LIST,
    )
    .with_http_binding(HttpBinding::Header("x-dates"));

    #[derive(Debug, Default, PartialEq)]
    struct Output {
        request_id: Option<String>,
        since: Option<DateTime>,
        sizes: Option<Vec<i32>>,
        status: Option<i32>,
        name: Option<String>,
        dates: Option<Vec<DateTime>>,
    }

    impl DeserializableStruct for Output {
        fn schema() -> &'static Schema {
            &OUTPUT
        }

        fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
            de.read_struct(&OUTPUT, Output::default(), |mut out, member, de| {
                match member.member_index() {
                    Some(0) => out.request_id = Some(de.read_string(member)?),
                    Some(1) => out.since = Some(de.read_timestamp(member)?),
                    Some(2) => {
                        out.sizes = Some(de.read_list(member, Vec::new(), |mut sizes, de| {
                            sizes.push(de.read_integer(&INTEGER_LIST_MEMBER)?);
                            Ok(sizes)
                        })?)
                    }
                    Some(3) => out.status = Some(de.read_integer(member)?),
                    Some(4) => out.name = Some(de.read_string(member)?),
                    Some(5) => {
                        out.dates = Some(de.read_list(member, Vec::new(), |mut dates, de| {
                            dates.push(de.read_timestamp(&TIMESTAMP_LIST_MEMBER)?);
                            Ok(dates)
                        })?)
                    }
                    _ => {}
                }
                Ok(out)
            })
        }
    }

    fn http_response(status: u16, headers: &[(&str, &str)], body: &str) -> http::Response<SdkBody> {
        let mut builder = http::Response::builder().status(status);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(SdkBody::from(body)).unwrap()
    }

    #[test]
    fn reads_headers_status_and_body() {
        let response = http_response(
            201,
            &[
                ("x-request-id", "abc, def"),
                ("x-since", "Mon, 16 Dec 2019 23:48:18 GMT"),
                ("x-sizes", "1, 2"),
                ("x-sizes", "3"),
                (
                    "x-dates",
                    "Mon, 16 Dec 2019 23:48:18 GMT, Tue, 17 Dec 2019 23:48:18 GMT",
                ),
            ],
            r#"{"Name":"n","RequestId":"ignored","Unknown":{"a":[1, null]}}"#,
        );
        let output: Output = deserialize_response(&response, &ProtocolSettings::rest_json()).unwrap();
        assert_eq!(
            Output {
                request_id: Some("abc, def".into()),
                since: Some(DateTime::from_secs(1576540098)),
                sizes: Some(vec![1, 2, 3]),
                status: Some(201),
                name: Some("n".into()),
                dates: Some(vec![
                    DateTime::from_secs(1576540098),
                    DateTime::from_secs(1576540098 + 86400)
                ]),
            },
            output
        );
    }

    #[test]
    fn empty_body_reads_as_empty_object() {
        let response = http_response(200, &[], "");
        let output: Output = deserialize_response(&response, &ProtocolSettings::rest_json()).unwrap();
        assert_eq!(
            Output {
                status: Some(200),
                ..Default::default()
            },
            output
        );
    }

    #[test]
    fn aws_json_reads_everything_from_the_body() {
        let response = http_response(
            200,
            &[("x-request-id", "from-header")],
            r#"{"RequestId":"from-body","Sizes":[4,5],"Since":1576540098}"#,
        );
        let protocol = ProtocolSettings::aws_json_1_1("Test_20200101");
        let output: Output = deserialize_response(&response, &protocol).unwrap();
        assert_eq!(
            Output {
                request_id: Some("from-body".into()),
                since: Some(DateTime::from_secs(1576540098)),
                sizes: Some(vec![4, 5]),
                ..Default::default()
            },
            output
        );
    }

    #[test]
    fn invalid_header_value() {
        let response = http_response(200, &[("x-sizes", "1, two")], "{}");
        let err = deserialize_response::<Output>(&response, &ProtocolSettings::rest_json())
            .unwrap_err();
        assert!(matches!(err, ResponseError::Header { header: "x-sizes", .. }));
    }

    #[test]
    fn malformed_body() {
        let response = http_response(200, &[], r#"{"Name": }"#);
        let err = deserialize_response::<Output>(&response, &ProtocolSettings::rest_json())
            .unwrap_err();
        assert!(matches!(err, ResponseError::Json(_)));

        let response = http_response(200, &[], r#"{"Name": "n"} {}"#);
        assert!(deserialize_response::<Output>(&response, &ProtocolSettings::rest_json()).is_err());
    }
}
