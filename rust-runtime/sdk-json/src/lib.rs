/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON support for the AWS JSON protocols: a token streaming parser, JSON writers,
//! a schema-driven [`codec::JsonCodec`], and parsing of error metadata from JSON error bodies.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod codec;
pub mod deserialize;
mod escape;
pub mod json_errors;
pub mod serialize;

pub use escape::EscapeError;
