/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! A protocol-agnostic client that marshals an input, sends it, and unmarshals the result.

use crate::body::SdkBody;
use crate::config::Config;
use crate::deserialize::deserialize_response;
use crate::error::BuildError;
use crate::error_registry::ErrorRegistry;
use crate::operation::OperationSchema;
use crate::protocol::ProtocolSettings;
use crate::result::SdkError;
use crate::serialize::serialize_request;
use http::Uri;
use sdk_schema::serde::{DeserializableStruct, SerializableStruct};
use sdk_types::error::Unhandled;
use std::error::Error;
use std::fmt::Debug;

/// Boxed error returned by connectors.
pub type BoxError = Box<dyn Error + Send + Sync>;

/// Sends an HTTP request and returns the response.
///
/// The request URI is absolute. Implementations must not retry: every call is a single attempt.
pub trait HttpConnector: Send + Sync + Debug {
    /// Sends `request`.
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<SdkBody>, BoxError>;
}

impl<C: HttpConnector + ?Sized> HttpConnector for Box<C> {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<SdkBody>, BoxError> {
        (**self).call(request)
    }
}

impl<C: HttpConnector + ?Sized> HttpConnector for std::sync::Arc<C> {
    fn call(&self, request: http::Request<SdkBody>) -> Result<http::Response<SdkBody>, BoxError> {
        (**self).call(request)
    }
}

/// Invokes operations over a connector.
///
/// Service crates wrap a `Client` and call [`Client::invoke`] with the schema, input type,
/// output type, and error registry of each operation.
#[derive(Debug)]
pub struct Client<C> {
    connector: C,
    endpoint_url: Option<String>,
    protocol: ProtocolSettings,
}

impl<C: HttpConnector> Client<C> {
    /// Creates a client. The protocol from `config` overrides `default_protocol`.
    pub fn new(connector: C, config: &Config, default_protocol: ProtocolSettings) -> Self {
        Self {
            connector,
            endpoint_url: config.endpoint_url().map(str::to_owned),
            protocol: config.protocol().cloned().unwrap_or(default_protocol),
        }
    }

    /// The connector requests are sent with.
    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// The protocol requests are marshalled with.
    pub fn protocol(&self) -> &ProtocolSettings {
        &self.protocol
    }

    /// Marshals `input`, sends it, and unmarshals the output or the error.
    ///
    /// Successful (2xx) responses and responses with the status code modeled for the
    /// operation are read as `O`. Any other status is dispatched through `errors`.
    pub fn invoke<I, O, E>(
        &self,
        operation: &OperationSchema,
        input: &I,
        errors: &ErrorRegistry<E>,
    ) -> Result<O, SdkError<E>>
    where
        I: SerializableStruct,
        O: DeserializableStruct,
        E: From<Unhandled>,
    {
        let request = self
            .build_request(operation, input)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        tracing::debug!(
            service = operation.service(),
            operation = operation.name(),
            uri = %request.uri(),
            "sending request"
        );
        let response = self
            .connector
            .call(request)
            .map_err(SdkError::DispatchFailure)?;
        let status = response.status();
        tracing::debug!(
            operation = operation.name(),
            status = status.as_u16(),
            "received response"
        );
        if status.is_success() || status.as_u16() == operation.http().code() {
            match deserialize_response::<O>(&response, &self.protocol) {
                Ok(output) => Ok(output),
                Err(err) => Err(SdkError::ResponseError {
                    raw: response,
                    err: err.into(),
                }),
            }
        } else {
            let err = errors.dispatch(&response, &self.protocol);
            Err(SdkError::ServiceError { raw: response, err })
        }
    }

    fn build_request<I: SerializableStruct>(
        &self,
        operation: &OperationSchema,
        input: &I,
    ) -> Result<http::Request<SdkBody>, BuildError> {
        let mut request = serialize_request(input, operation, &self.protocol)?;
        let endpoint = self
            .endpoint_url
            .as_deref()
            .ok_or(BuildError::MissingEndpoint)?;
        let path_and_query = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let uri = format!("{}{}", endpoint.trim_end_matches('/'), path_and_query);
        *request.uri_mut() = uri
            .parse::<Uri>()
            .map_err(|source| BuildError::InvalidUri { uri, source })?;
        Ok(request)
    }
}

#[cfg(test)]
mod test {
    use super::{BoxError, Client, HttpConnector};
    use crate::body::SdkBody;
    use crate::config::Config;
    use crate::error_registry::ErrorRegistry;
    use crate::operation::{HttpTrait, OperationSchema};
    use crate::protocol::ProtocolSettings;
    use crate::result::SdkError;
    use crate::test_connection::TestConnection;
    use sdk_schema::prelude::*;
    use sdk_schema::serde::{
        DeserializableStruct, SerializableStruct, ShapeDeserializer, ShapeSerializer,
    };
    use sdk_schema::{HttpBinding, Schema, ShapeId};
    use sdk_types::error::{ProvideErrorMetadata, Unhandled};

    static GET_INPUT: Schema =
        Schema::structure(ShapeId::from_static("test#GetInput"), &GET_INPUT_MEMBERS);
    static GET_INPUT_MEMBERS: [&Schema; 2] = [&GET_INPUT_ID, &GET_INPUT_VERBOSE];
    static GET_INPUT_ID: Schema =
        Schema::member(ShapeId::from_static("test#GetInput$Id"), "Id", 0, &STRING)
            .with_http_binding(HttpBinding::Label);
    static GET_INPUT_VERBOSE: Schema = Schema::member(
        ShapeId::from_static("test#GetInput$Verbose"),
        "Verbose",
        1,
        &BOOLEAN,
    )
    .with_http_binding(HttpBinding::Query("verbose"));

    static GET_OUTPUT: Schema =
        Schema::structure(ShapeId::from_static("test#GetOutput"), &GET_OUTPUT_MEMBERS);
    static GET_OUTPUT_MEMBERS: [&Schema; 1] = [&GET_OUTPUT_NAME];
    static GET_OUTPUT_NAME: Schema = Schema::member(
        ShapeId::from_static("test#GetOutput$Name"),
        "Name",
        0,
        &STRING,
    );

    static GET: OperationSchema = OperationSchema::new("Test", "Get", &GET_INPUT, &GET_OUTPUT)
        .with_http(HttpTrait::new("GET", "/items/{Id}"));

    struct GetInput {
        id: Option<String>,
        verbose: Option<bool>,
    }

    impl SerializableStruct for GetInput {
        fn schema() -> &'static Schema {
            &GET_INPUT
        }

        fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
            if let Some(id) = &self.id {
                ser.write_string(&GET_INPUT_ID, id)?;
            }
            if let Some(verbose) = self.verbose {
                ser.write_boolean(&GET_INPUT_VERBOSE, verbose)?;
            }
            Ok(())
        }
    }

    #[derive(Debug, Default)]
    struct GetOutput {
        name: Option<String>,
    }

    impl DeserializableStruct for GetOutput {
        fn schema() -> &'static Schema {
            &GET_OUTPUT
        }

        fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
            de.read_struct(&GET_OUTPUT, Self::default(), |mut out, member, de| {
                if member.member_index() == Some(0) {
                    out.name = Some(de.read_string(member)?);
                }
                Ok(out)
            })
        }
    }

    fn registry() -> ErrorRegistry<Unhandled> {
        ErrorRegistry::builder().build()
    }

    fn client(conn: TestConnection) -> Client<TestConnection> {
        let config = Config::builder()
            .endpoint_url("https://example.amazonaws.com/")
            .build();
        Client::new(conn, &config, ProtocolSettings::rest_json())
    }

    fn input() -> GetInput {
        GetInput {
            id: Some("a b".into()),
            verbose: Some(true),
        }
    }

    #[test]
    fn successful_invocation() {
        let conn = TestConnection::new(vec![(
            http::Request::builder()
                .uri("https://example.amazonaws.com/items/a%20b?verbose=true")
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from(r#"{"Name":"item"}"#))
                .unwrap(),
        )]);
        let client = client(conn.clone());
        let output: GetOutput = client.invoke(&GET, &input(), &registry()).unwrap();
        assert_eq!(Some("item"), output.name.as_deref());
        conn.assert_requests_match(&[]);
        assert_eq!(http::Method::GET, conn.requests()[0].actual.method());
    }

    #[test]
    fn modeled_status_code_is_a_success() {
        static MOVED: OperationSchema =
            OperationSchema::new("Test", "Moved", &GET_INPUT, &GET_OUTPUT)
                .with_http(HttpTrait::new("GET", "/items/{Id}").with_code(304));
        let conn = TestConnection::new(vec![
            (
                http::Request::builder().body(SdkBody::empty()).unwrap(),
                http::Response::builder()
                    .status(304)
                    .body(SdkBody::from(r#"{"Name":"cached"}"#))
                    .unwrap(),
            ),
            (
                http::Request::builder().body(SdkBody::empty()).unwrap(),
                http::Response::builder()
                    .status(304)
                    .body(SdkBody::from(r#"{"Name":"cached"}"#))
                    .unwrap(),
            ),
        ]);
        let client = client(conn);
        let output: GetOutput = client.invoke(&MOVED, &input(), &registry()).unwrap();
        assert_eq!(Some("cached"), output.name.as_deref());

        let err = client
            .invoke::<_, GetOutput, _>(&GET, &input(), &registry())
            .unwrap_err();
        assert!(matches!(err, SdkError::ServiceError { .. }), "{:?}", err);
    }

    #[test]
    fn error_responses_are_dispatched() {
        let conn = TestConnection::new(vec![(
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(404)
                .header("x-amzn-ErrorType", "NotFoundException")
                .body(SdkBody::from(r#"{"message":"no such item"}"#))
                .unwrap(),
        )]);
        let err = client(conn)
            .invoke::<_, GetOutput, _>(&GET, &input(), &registry())
            .unwrap_err();
        let raw_status = err.raw_response().map(|raw| raw.status().as_u16());
        assert_eq!(Some(404), raw_status);
        let err = err.into_service_error().expect("service error");
        assert_eq!(Some("NotFoundException"), err.code());
        assert_eq!(Some("no such item"), err.message());
    }

    #[test]
    fn unparseable_output_is_a_response_error() {
        let conn = TestConnection::new(vec![(
            http::Request::builder().body(SdkBody::empty()).unwrap(),
            http::Response::builder()
                .status(200)
                .body(SdkBody::from("not json"))
                .unwrap(),
        )]);
        let err = client(conn)
            .invoke::<_, GetOutput, _>(&GET, &input(), &registry())
            .unwrap_err();
        assert!(matches!(err, SdkError::ResponseError { .. }), "{:?}", err);
    }

    #[test]
    fn construction_failures_are_not_sent() {
        let conn = TestConnection::new(vec![]);
        let missing_label = GetInput {
            id: None,
            verbose: None,
        };
        let err = client(conn.clone())
            .invoke::<_, GetOutput, _>(&GET, &missing_label, &registry())
            .unwrap_err();
        assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
        assert!(conn.requests().is_empty());

        let no_endpoint = Client::new(
            conn.clone(),
            &Config::builder().build(),
            ProtocolSettings::rest_json(),
        );
        let err = no_endpoint
            .invoke::<_, GetOutput, _>(&GET, &input(), &registry())
            .unwrap_err();
        assert_eq!(
            "no endpoint was configured",
            std::error::Error::source(&err).unwrap().to_string()
        );
        assert!(conn.requests().is_empty());
    }

    #[derive(Debug)]
    struct Offline;

    impl HttpConnector for Offline {
        fn call(
            &self,
            _request: http::Request<SdkBody>,
        ) -> Result<http::Response<SdkBody>, BoxError> {
            Err("connection refused".into())
        }
    }

    #[test]
    fn dispatch_failure() {
        let config = Config::builder().endpoint_url("http://localhost:1").build();
        let client = Client::new(Box::new(Offline), &config, ProtocolSettings::rest_json());
        let err = client
            .invoke::<_, GetOutput, _>(&GET, &input(), &registry())
            .unwrap_err();
        assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
    }
}
