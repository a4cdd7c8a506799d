/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! HTTP plumbing for the JSON protocols.
//!
//! [`serialize::serialize_request`] marshals an operation input into an `http::Request`,
//! routing members to the URI path, query string, headers, or JSON body according to their
//! bindings. [`deserialize::deserialize_response`] does the reverse for outputs and modeled
//! exceptions, and [`error_registry::ErrorRegistry`] picks the exception that an error response
//! carries. [`client::Client`] ties these together over an [`client::HttpConnector`].

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod body;
pub mod client;
pub mod config;
pub mod deserialize;
pub mod error;
pub mod error_registry;
pub mod header;
pub mod label;
pub mod operation;
pub mod protocol;
pub mod query;
pub mod result;
pub mod serialize;

#[cfg(any(test, feature = "test-util"))]
pub mod test_connection;
