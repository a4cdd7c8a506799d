/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors returned by the service.

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
            /// The message.
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
    /// Request processing failed because of an error or failure with the service.
    InternalServiceException
);
exception!(
    /// One or more of the specified parameters are not valid.
    InvalidParameterException
);
exception!(
    /// The request is not valid.
    InvalidRequestException
);
exception!(
    /// The specified resource was not found.
    ResourceNotFoundException
);
exception!(
    /// The throttling limit has been exceeded.
    ThrottlingException
);

/// All possible error types for this service.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    #[allow(missing_docs)]
    InternalServiceException(InternalServiceException),
    #[allow(missing_docs)]
    InvalidParameterException(InvalidParameterException),
    #[allow(missing_docs)]
    InvalidRequestException(InvalidRequestException),
    #[allow(missing_docs)]
    ResourceNotFoundException(ResourceNotFoundException),
    #[allow(missing_docs)]
    ThrottlingException(ThrottlingException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown
    /// error code).
    Unhandled(Unhandled),
}

impl Error {
    /// Returns `true` if the error kind is `Error::InternalServiceException`.
    pub fn is_internal_service_exception(&self) -> bool {
        matches!(self, Error::InternalServiceException(_))
    }
    /// Returns `true` if the error kind is `Error::InvalidParameterException`.
    pub fn is_invalid_parameter_exception(&self) -> bool {
        matches!(self, Error::InvalidParameterException(_))
    }
    /// Returns `true` if the error kind is `Error::InvalidRequestException`.
    pub fn is_invalid_request_exception(&self) -> bool {
        matches!(self, Error::InvalidRequestException(_))
    }
    /// Returns `true` if the error kind is `Error::ResourceNotFoundException`.
    pub fn is_resource_not_found_exception(&self) -> bool {
        matches!(self, Error::ResourceNotFoundException(_))
    }
    /// Returns `true` if the error kind is `Error::ThrottlingException`.
    pub fn is_throttling_exception(&self) -> bool {
        matches!(self, Error::ThrottlingException(_))
    }
    /// Returns `true` if the error code wasn't modeled.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Error::Unhandled(_))
    }

    fn inner(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Error::InternalServiceException(inner) => inner,
            Error::InvalidParameterException(inner) => inner,
            Error::InvalidRequestException(inner) => inner,
            Error::ResourceNotFoundException(inner) => inner,
            Error::ThrottlingException(inner) => inner,
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
            Error::InternalServiceException(inner) => inner.meta(),
            Error::InvalidParameterException(inner) => inner.meta(),
            Error::InvalidRequestException(inner) => inner.meta(),
            Error::ResourceNotFoundException(inner) => inner.meta(),
            Error::ThrottlingException(inner) => inner.meta(),
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
            "InternalServiceException",
            |mut e: InternalServiceException, meta| {
                e.meta = meta;
                Error::InternalServiceException(e)
            },
        )
        .register(
            "InvalidParameterException",
            |mut e: InvalidParameterException, meta| {
                e.meta = meta;
                Error::InvalidParameterException(e)
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
            "ResourceNotFoundException",
            |mut e: ResourceNotFoundException, meta| {
                e.meta = meta;
                Error::ResourceNotFoundException(e)
            },
        )
        .register("ThrottlingException", |mut e: ThrottlingException, meta| {
            e.meta = meta;
            Error::ThrottlingException(e)
        })
        .build()
});
