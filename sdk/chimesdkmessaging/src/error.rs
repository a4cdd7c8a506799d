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
            #[allow(missing_docs)]
            pub code: Option<String>,
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
    /// The input parameters don't match the service's restrictions.
    BadRequestException
);
exception!(
    /// The client is permanently forbidden from making the request.
    ForbiddenException
);
exception!(
    /// One or more of the resources in the request does not exist in the system.
    NotFoundException
);
exception!(
    /// The request exceeds the resource limit.
    ResourceLimitExceededException
);
exception!(
    /// The service encountered an unexpected error.
    ServiceFailureException
);

/// The client exceeded its request rate limit.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThrottledClientException {
    #[allow(missing_docs)]
    pub code: Option<String>,
    #[allow(missing_docs)]
    pub message: Option<String>,
    /// Seconds to wait before retrying, from the `Retry-After` header.
    pub retry_after_seconds: Option<i32>,
    pub(crate) meta: ErrorMetadata,
}

impl ThrottledClientException {
    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ThrottledClientException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThrottledClientException")?;
        if let Some(inner) = &self.message {
            write!(f, ": {}", inner)?;
        }
        Ok(())
    }
}

impl std::error::Error for ThrottledClientException {}

impl ProvideErrorMetadata for ThrottledClientException {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}

/// All possible error types for this service.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    #[allow(missing_docs)]
    BadRequestException(BadRequestException),
    #[allow(missing_docs)]
    ForbiddenException(ForbiddenException),
    #[allow(missing_docs)]
    NotFoundException(NotFoundException),
    #[allow(missing_docs)]
    ResourceLimitExceededException(ResourceLimitExceededException),
    #[allow(missing_docs)]
    ServiceFailureException(ServiceFailureException),
    #[allow(missing_docs)]
    ThrottledClientException(ThrottledClientException),
    /// An unexpected error occurred (e.g., invalid JSON returned by the service or an unknown
    /// error code).
    Unhandled(Unhandled),
}

impl Error {
    /// Returns `true` if the error kind is `Error::BadRequestException`.
    pub fn is_bad_request_exception(&self) -> bool {
        matches!(self, Error::BadRequestException(_))
    }
    /// Returns `true` if the error kind is `Error::ForbiddenException`.
    pub fn is_forbidden_exception(&self) -> bool {
        matches!(self, Error::ForbiddenException(_))
    }
    /// Returns `true` if the error kind is `Error::NotFoundException`.
    pub fn is_not_found_exception(&self) -> bool {
        matches!(self, Error::NotFoundException(_))
    }
    /// Returns `true` if the error kind is `Error::ResourceLimitExceededException`.
    pub fn is_resource_limit_exceeded_exception(&self) -> bool {
        matches!(self, Error::ResourceLimitExceededException(_))
    }
    /// Returns `true` if the error kind is `Error::ServiceFailureException`.
    pub fn is_service_failure_exception(&self) -> bool {
        matches!(self, Error::ServiceFailureException(_))
    }
    /// Returns `true` if the error kind is `Error::ThrottledClientException`.
    pub fn is_throttled_client_exception(&self) -> bool {
        matches!(self, Error::ThrottledClientException(_))
    }
    /// Returns `true` if the error code wasn't modeled.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Error::Unhandled(_))
    }

    fn inner(&self) -> &(dyn std::error::Error + 'static) {
        match self {
            Error::BadRequestException(inner) => inner,
            Error::ForbiddenException(inner) => inner,
            Error::NotFoundException(inner) => inner,
            Error::ResourceLimitExceededException(inner) => inner,
            Error::ServiceFailureException(inner) => inner,
            Error::ThrottledClientException(inner) => inner,
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
            Error::BadRequestException(inner) => inner.meta(),
            Error::ForbiddenException(inner) => inner.meta(),
            Error::NotFoundException(inner) => inner.meta(),
            Error::ResourceLimitExceededException(inner) => inner.meta(),
            Error::ServiceFailureException(inner) => inner.meta(),
            Error::ThrottledClientException(inner) => inner.meta(),
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
        .register("BadRequestException", |mut e: BadRequestException, meta| {
            e.meta = meta;
            Error::BadRequestException(e)
        })
        .register("ForbiddenException", |mut e: ForbiddenException, meta| {
            e.meta = meta;
            Error::ForbiddenException(e)
        })
        .register("NotFoundException", |mut e: NotFoundException, meta| {
            e.meta = meta;
            Error::NotFoundException(e)
        })
        .register(
            "ResourceLimitExceededException",
            |mut e: ResourceLimitExceededException, meta| {
                e.meta = meta;
                Error::ResourceLimitExceededException(e)
            },
        )
        .register(
            "ServiceFailureException",
            |mut e: ServiceFailureException, meta| {
                e.meta = meta;
                Error::ServiceFailureException(e)
            },
        )
        .register(
            "ThrottledClientException",
            |mut e: ThrottledClientException, meta| {
                e.meta = meta;
                Error::ThrottledClientException(e)
            },
        )
        .build()
});
