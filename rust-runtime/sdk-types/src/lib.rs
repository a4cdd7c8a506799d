/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Protocol-agnostic value types shared by the marshalling runtime and generated models.

#![allow(clippy::derive_partial_eq_without_eq)]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod base64;
pub mod date_time;
pub mod error;
pub mod primitive;

mod blob;
mod number;
mod unknown_variant;

pub use blob::Blob;
pub use date_time::DateTime;
pub use error::{ErrorMetadata, TryFromNumberError, UnknownVariantError};
pub use number::Number;
pub use unknown_variant::UnknownVariantValue;
