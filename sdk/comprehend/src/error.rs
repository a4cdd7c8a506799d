/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by the service.

use crate::model::InvalidRequestReason;
use sdk_http::error_registry::ErrorRegistry;
use sdk_types::error::{ErrorMetadata, ProvideErrorMetadata, Unhandled};
use std::fmt;
use std::sync::LazyLock;

macro_rules! exception {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            #[allow(missing_docs)]
            pub message: Option<String>,
            pub(crate) meta: ErrorMetadata,
        }

        impl $name {
            /// Returns the error message.
            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                if let Some(inner) = &self.message {
                    write!(f, ": {}", inner)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $name {}

        impl ProvideErrorMetadata for $name {
            fn meta(&self) -> &ErrorMetadata {
                &self.meta
            }
        }
    };
}

exception!(
    /// The size of the input text exceeds the limit. Use a smaller document.
    TextSizeLimitExceededException
);
exception!(
    /// The number of documents in the request exceeds the limit of 25.
    BatchSizeLimitExceededException
);
exception!(
    /// An internal server error occurred. Retry your request.
    InternalServerException
);

/// The request is invalid.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvalidRequestException {
    #[allow(missing_docs)]
    pub message: Option<String>,
    /// Why the request was rejected.
    pub reason: Option<InvalidRequestReason>,
    pub(crate) meta: ErrorMetadata,
}

impl InvalidRequestException {
    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for InvalidRequestException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InvalidRequestException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}

impl std::error::Error for InvalidRequestException {}

impl ProvideErrorMetadata for InvalidRequestException {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}

/// All possible error types for this service.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    #[allow(missing_docs)]
    BatchSizeLimitExceededException(BatchSizeLimitExceededException),
    #[allow(missing_docs)]
    InternalServerException(InternalServerException),
    #[allow(missing_docs)]
    InvalidRequestException(InvalidRequestException),
    #[allow(missing_docs)]
    TextSizeLimitExceededException(TextSizeLimitExceededException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown
    /// error code).
    Unhandled(Unhandled),
}

impl Error {
    /// Returns `true` if the error kind is `Error::BatchSizeLimitExceededException`.
    pub fn is_batch_size_limit_exceeded_exception(&self) -> bool {
        matches!(self, Error::BatchSizeLimitExceededException(_))
    }
    /// Returns `true` if the error kind is `Error::InternalServerException`.
    pub fn is_internal_server_exception(&self) -> bool {
        matches!(self, Error::InternalServerException(_))
    }
    /// Returns `true` if the error kind is `Error::InvalidRequestException`.
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(self, Error::InvalidRequestException(_))
    }
    /// Returns `true` if the error kind is `Error::TextSizeLimitExceededException`.
    pub fn is_text_size_limit_exceeded_exception(&self) -> bool {
        matches!(self, Error::TextSizeLimitExceededException(_))
    }
    /// Returns `true` if the error code wasn't modeled.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Error::Unhandled(_))
    }

    fn inner(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Error::BatchSizeLimitExceededException(inner) => inner,
            Error::InternalServerException(inner) => inner,
            Error::InvalidRequestException(inner) => inner,
            Error::TextSizeLimitExceededException(inner) => inner,
            Error::Unhandled(inner) => inner,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Unhandled(inner) => std::error::Error::source(inner),
            _ => Some(self.inner()),
        }
    }
}

impl ProvideErrorMetadata for Error {
    fn meta(&self) -> &ErrorMetadata {
        match self {
            Error::BatchSizeLimitExceededException(inner) => inner.meta(),
            Error::InternalServerException(inner) => inner.meta(),
            Error::InvalidRequestException(inner) => inner.meta(),
            Error::TextSizeLimitExceededException(inner) => inner.meta(),
            Error::Unhandled(inner) => inner.meta(),
        }
    }
}

impl From<Unhandled> for Error {
    fn from(unhandled: Unhandled) -> Self {
        Error::Unhandled(unhandled)
    }
}

pub(crate) static ERRORS: LazyLock<ErrorRegistry<Error>> = LazyLock::new(|| {
    ErrorRegistry::builder()
        .register(
            "BatchSizeLimitExceededException",
            |mut e: BatchSizeLimitExceededException, meta| {
                e.meta = meta;
                Error::BatchSizeLimitExceededException(e)
            },
        )
        .register(
            "InternalServerException",
            |mut e: InternalServerException, meta| {
                e.meta = meta;
                Error::InternalServerException(e)
            },
        )
        .register(
            "InvalidRequestException",
            |mut e: InvalidRequestException, meta| {
                e.meta = meta;
                Error::InvalidRequestException(e)
            },
        )
        .register(
            "TextSizeLimitExceededException",
            |mut e: TextSizeLimitExceededException, meta| {
                e.meta = meta;
                Error::TextSizeLimitExceededException(e)
            },
        )
        .build()
});

#[cfg(test)]
mod test {
    use super::{Error, TextSizeLimitExceededException, ERRORS};
    use sdk_types::error::{ErrorMetadata, ProvideErrorMetadata};

    #[test]
    fn every_exception_is_registered() {
        assert_eq!(
            vec![
                "BatchSizeLimitExceededException",
                "InternalServerException",
                "InvalidRequestException",
                "TextSizeLimitExceededException",
            ],
            ERRORS.codes().collect::<Vec<_>>()
        );
    }

    #[test]
    fn source_is_the_exception() {
        let err = Error::TextSizeLimitExceededException(TextSizeLimitExceededException {
            message: Some("too long".into()),
            meta: ErrorMetadata::builder()
                .code("TextSizeLimitExceededException")
                .message("too long")
                .build(),
        });
        assert_eq!("TextSizeLimitExceededException: too long", err.to_string());
        assert_eq!(Some("too long"), err.message());
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(err.to_string(), source.to_string());
    }
}
