/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Results of invoking an operation.

use crate::body::SdkBody;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Failing Sdk Result
///
/// `E` is the error enum of the operation, with one variant per modeled exception and an
/// `Unhandled` variant for everything else.
#[derive(Debug)]
pub enum SdkError<E, B = SdkBody> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(BoxError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the body was not valid JSON)
    ResponseError {
        /// The raw response
        raw: http::Response<B>,
        /// Why the response couldn't be parsed
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError {
        /// The raw response
        raw: http::Response<B>,
        /// The service error
        err: E,
    },
}

impl<E, B> SdkError<E, B> {
    /// Returns the service error, if the service responded with one.
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Converts into the service error, if the service responded with one.
    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Returns the raw response, if one was received.
    pub fn raw_response(&self) -> Option<&http::Response<B>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E, B> Display for SdkError<E, B>
where
    E: Error,
    B: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(_) => write!(f, "failed to construct request"),
            SdkError::DispatchFailure(_) => write!(f, "dispatch failure"),
            SdkError::ResponseError { .. } => write!(f, "response error"),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E, B> Error for SdkError<E, B>
where
    E: Error + 'static,
    B: Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err)
            | SdkError::DispatchFailure(err)
            | SdkError::ResponseError { err, .. } => Some(err.as_ref()),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkError;
    use crate::body::SdkBody;
    use sdk_types::error::Unhandled;
    use sdk_types::ErrorMetadata;
    use std::error::Error;

    #[test]
    fn display_and_source() {
        let err: SdkError<Unhandled> = SdkError::ConstructionFailure("label missing".into());
        assert_eq!("failed to construct request", err.to_string());
        assert_eq!("label missing", err.source().unwrap().to_string());
        assert!(err.service_error().is_none());
        assert!(err.raw_response().is_none());
    }

    #[test]
    fn service_error() {
        let raw = http::Response::builder()
            .status(400)
            .body(SdkBody::empty())
            .unwrap();
        let meta = ErrorMetadata::builder().code("Oops").build();
        let err = SdkError::ServiceError {
            raw,
            err: Unhandled::new(meta, Some(400)),
        };
        assert_eq!("service error: unhandled error (Oops) [HTTP 400]", err.to_string());
        assert_eq!(400, err.raw_response().unwrap().status().as_u16());
        assert_eq!(Some(400), err.into_service_error().unwrap().status());
    }
}
