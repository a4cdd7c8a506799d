/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Dispatching error responses to typed exceptions.

use crate::body::SdkBody;
use crate::deserialize::deserialize_response;
use crate::error::ResponseError;
use crate::header::read_first;
use crate::protocol::ProtocolSettings;
use sdk_json::json_errors::{parse_error_metadata, sanitize_error_code};
use sdk_schema::serde::DeserializableStruct;
use sdk_types::error::Unhandled;
use sdk_types::ErrorMetadata;
use std::fmt;

/// Header carrying the error code of a REST-JSON error response.
pub const X_AMZN_ERROR_TYPE: &str = "x-amzn-errortype";

/// Header carrying the id the service assigned to the request.
pub const X_AMZN_REQUEST_ID: &str = "x-amzn-requestid";

type ErrorFactory<E> = Box<
    dyn Fn(&http::Response<SdkBody>, &ProtocolSettings, ErrorMetadata) -> Result<E, ResponseError>
        + Send
        + Sync,
>;

struct Entry<E> {
    code: &'static str,
    factory: ErrorFactory<E>,
}

/// Maps error codes to the typed exceptions of a service.
///
/// Codes are matched in registration order after being stripped of a namespace prefix and a
/// URL suffix. Responses whose code isn't registered, or whose body doesn't parse as the
/// registered exception, become the `Unhandled` variant of `E`.
pub struct ErrorRegistry<E> {
    entries: Vec<Entry<E>>,
}

impl<E> fmt::Debug for ErrorRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRegistry")
            .field("codes", &self.codes().collect::<Vec<_>>())
            .finish()
    }
}

impl<E> ErrorRegistry<E> {
    /// Returns a builder for an `ErrorRegistry`.
    pub fn builder() -> Builder<E> {
        Builder {
            entries: Vec::new(),
        }
    }

    /// The registered codes, in matching order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.code)
    }
}

impl<E> ErrorRegistry<E>
where
    E: From<Unhandled>,
{
    /// Converts an error response into `E`. This never fails: anything that can't be matched
    /// to a modeled exception is returned as unhandled.
    pub fn dispatch(&self, response: &http::Response<SdkBody>, protocol: &ProtocolSettings) -> E {
        let status = response.status().as_u16();
        let meta = error_metadata(response);
        let entry = meta
            .code()
            .and_then(|code| self.entries.iter().find(|entry| entry.code == code));
        let Some(entry) = entry else {
            tracing::debug!(code = ?meta.code(), status, "no modeled error matches the response");
            return E::from(Unhandled::new(meta, Some(status)));
        };
        match (entry.factory)(response, protocol, meta.clone()) {
            Ok(err) => {
                tracing::debug!(code = entry.code, status, "matched modeled error");
                err
            }
            Err(source) => {
                tracing::warn!(
                    code = entry.code,
                    status,
                    error = %source,
                    "failed to parse modeled error, returning it as unhandled"
                );
                E::from(Unhandled::new(meta, Some(status)).with_source(source))
            }
        }
    }
}

/// Builder for [`ErrorRegistry`].
pub struct Builder<E> {
    entries: Vec<Entry<E>>,
}

impl<E> fmt::Debug for Builder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field(
                "codes",
                &self.entries.iter().map(|e| e.code).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<E: 'static> Builder<E> {
    /// Registers the exception `T` for `code`. `into_error` wraps the parsed exception and the
    /// error metadata of the response into `E`.
    pub fn register<T>(mut self, code: &'static str, into_error: fn(T, ErrorMetadata) -> E) -> Self
    where
        T: DeserializableStruct + 'static,
    {
        self.entries.push(Entry {
            code,
            factory: Box::new(move |response, protocol, meta| {
                let parsed: T = deserialize_response(response, protocol)?;
                Ok(into_error(parsed, meta))
            }),
        });
        self
    }

    /// Builds the registry.
    pub fn build(self) -> ErrorRegistry<E> {
        ErrorRegistry {
            entries: self.entries,
        }
    }
}

/// Reads the code, message and request id of an error response.
///
/// The code comes from the `x-amzn-ErrorType` header when present, from the body otherwise.
/// A body that can't be parsed only loses its code and message.
pub fn error_metadata(response: &http::Response<SdkBody>) -> ErrorMetadata {
    let body = response.body().bytes().unwrap_or_default();
    let mut builder = match parse_error_metadata(body) {
        Ok(builder) => builder,
        Err(err) => {
            tracing::warn!(error = %err, "failed to parse error metadata from the response body");
            ErrorMetadata::builder()
        }
    };
    if let Some(code) = read_first(response.headers(), X_AMZN_ERROR_TYPE) {
        builder = builder.code(sanitize_error_code(code));
    }
    if let Some(request_id) = read_first(response.headers(), X_AMZN_REQUEST_ID) {
        builder = builder.request_id(request_id);
    }
    builder.build()
}
