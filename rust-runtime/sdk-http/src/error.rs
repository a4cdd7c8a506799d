/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors raised while building requests and parsing responses.

use sdk_json::codec::JsonSerializerError;
use sdk_json::deserialize::DeserializeError;
use sdk_schema::codec::http_string::HttpStringCodecError;
use thiserror::Error;

/// Failure to turn an operation input into an HTTP request.
///
/// A request that fails to build is never sent.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A URI label was not set or was set to an empty string.
    #[error("label `{0}` is missing or empty; it is required to build the request URI")]
    MissingLabel(String),
    /// The operation's URI template could not be parsed.
    #[error("invalid URI template `{0}`")]
    InvalidUriTemplate(&'static str),
    /// The JSON body could not be written.
    #[error("failed to serialize the request body")]
    Serialization(#[from] JsonSerializerError),
    /// A value bound to a label, query parameter or header could not be converted to a string.
    #[error("member `{member}` could not be written to the {location}")]
    InvalidField {
        /// Name of the member
        member: &'static str,
        /// Where the member is bound
        location: &'static str,
        /// Underlying conversion error
        source: HttpStringCodecError,
    },
    /// A structure or map was bound to a label, query parameter or header.
    #[error("member `{member}` cannot be bound to the {location}; only scalars and lists of scalars can")]
    UnsupportedBinding {
        /// Name of the member
        member: &'static str,
        /// Where the member is bound
        location: &'static str,
    },
    /// No endpoint was configured for the client.
    #[error("no endpoint was configured")]
    MissingEndpoint,
    /// The endpoint joined with the request path is not a valid URI.
    #[error("invalid request URI `{uri}`")]
    InvalidUri {
        /// The rejected URI
        uri: String,
        /// Parse error
        source: http::uri::InvalidUri,
    },
    /// The `http` crate rejected the request, for example because of an invalid header value.
    #[error("failed to construct the HTTP request")]
    InvalidRequest(#[from] http::Error),
}

/// Failure to parse an HTTP response into an operation output or a typed exception.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The body is not valid JSON or doesn't match the expected shape.
    #[error("failed to parse the response body")]
    Json(#[from] DeserializeError),
    /// A header bound to a member could not be parsed.
    #[error("failed to parse header `{header}`")]
    Header {
        /// Name of the header
        header: &'static str,
        /// Underlying parse error
        source: HttpStringCodecError,
    },
    /// A header bound to a member is not valid UTF-8.
    #[error("header `{0}` is not valid UTF-8")]
    HeaderEncoding(&'static str),
    /// A member bound to the status code has an unsupported type.
    #[error("the HTTP status code can only be read as an integer")]
    StatusCode,
    /// A structure or map was bound to a header.
    #[error("header `{0}` can only be read as a scalar or a list of scalars")]
    UnsupportedBinding(&'static str),
}
