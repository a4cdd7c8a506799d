/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Utilities for writing and reading header values

use crate::error::ResponseError;
use http::HeaderMap;
use std::borrow::Cow;

/// Quotes a header list element if it contains a delimiter or a quote.
///
/// Elements without either are returned unchanged.
pub fn quote_header_value<'a>(value: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
    let value = value.into();
    if value.is_empty() || value.contains([',', '"']) || value.trim() != value {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            if c == '"' || c == '\\' {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        Cow::Owned(quoted)
    } else {
        value
    }
}

/// Reads every value of the header `key`, joined with `,`.
///
/// Returns `None` when the header is absent.
pub fn read_joined(
    headers: &HeaderMap,
    key: &'static str,
) -> Result<Option<String>, ResponseError> {
    let mut joined: Option<String> = None;
    for value in headers.get_all(key).iter() {
        let value = value
            .to_str()
            .map_err(|_| ResponseError::HeaderEncoding(key))?;
        match joined.as_mut() {
            Some(joined) => {
                joined.push(',');
                joined.push_str(value);
            }
            None => joined = Some(value.to_string()),
        }
    }
    Ok(joined)
}

/// Reads the first value of the header `key` as a string.
pub fn read_first<'a>(headers: &'a HeaderMap, key: &str) -> Option<&'a str> {
    headers.get(key).and_then(|value| value.to_str().ok())
}
