/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client for Amazon Chime SDK Messaging, spoken over the REST-JSON protocol.
//!
//! Every operation takes its input by reference and returns its output or an
//! [`SdkError`] wrapping the service [`Error`](crate::error::Error).

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

mod client;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
mod protocol_serde;
mod shapes;

pub use client::Client;
pub use error::Error;
pub use sdk_http::config::Config;
pub use sdk_http::result::SdkError;
pub use shapes::shape_registry;
