/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Error metadata parsing for JSON error bodies.

use crate::deserialize::token::{expect_start_object, expect_string_or_null, skip_value};
use crate::deserialize::{json_token_iter, DeserializeError, Token};
use sdk_types::error::{Builder as ErrorMetadataBuilder, ErrorMetadata};
use std::borrow::Cow;

/// Reduces an error discriminator to the bare error name.
///
/// Services may qualify the name with a namespace (`aws.protocoltests#FooError`) or append a
/// URL (`FooError:http://internal.amazon.com/...`). Both are removed.
pub fn sanitize_error_code(error_code: &str) -> &str {
    // Trim a trailing URL from the error code, beginning with a `:`
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };

    // Trim a prefixing namespace from the error code, beginning with a `#`
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

/// Reads the error code and message out of a JSON error body.
///
/// The code comes from `__type` or `code`, the message from `message`, `Message` or
/// `errorMessage`. Other keys are ignored. An empty body yields an empty builder.
pub fn parse_error_metadata(payload: &[u8]) -> Result<ErrorMetadataBuilder, DeserializeError> {
    let mut builder = ErrorMetadata::builder();
    if payload.iter().all(u8::is_ascii_whitespace) {
        return Ok(builder);
    }

    let mut tokens = json_token_iter(payload).peekable();
    expect_start_object(tokens.next())?;
    loop {
        match tokens.next().transpose()? {
            Some(Token::EndObject { .. }) => break,
            Some(Token::ObjectKey { key, .. }) => match key.to_unescaped()?.as_ref() {
                "__type" | "code" => {
                    if let Some(code) = expect_string_or_null(tokens.next())? {
                        // `__type` wins over `code` when a body carries both
                        if builder.get_code().is_none() || key.as_escaped_str() == "__type" {
                            builder = builder.code(sanitize_error_code(&code));
                        }
                    }
                }
                "message" | "Message" | "errorMessage" => {
                    if let Some(message) = expect_string_or_null(tokens.next())? {
                        builder = builder.message(message);
                    }
                }
                _ => skip_value(&mut tokens)?,
            },
            Some(other) => {
                return Err(other.error(Cow::Borrowed("expected object key or end of object")))
            }
            None => return Err(DeserializeError::custom("unexpected end of error body")),
        }
    }
    Ok(builder)
}

#[cfg(test)]
mod test {
    use super::{parse_error_metadata, sanitize_error_code};

    #[test]
    fn error_metadata() {
        let meta = parse_error_metadata(br#"{ "__type": "FooError", "message": "Go to foo" }"#)
            .unwrap()
            .build();
        assert_eq!(Some("FooError"), meta.code());
        assert_eq!(Some("Go to foo"), meta.message());
    }

    #[test]
    fn error_type_variants() {
        let meta = parse_error_metadata(br#"{"code": "FooError", "Message": "upper"}"#)
            .unwrap()
            .build();
        assert_eq!(Some("FooError"), meta.code());
        assert_eq!(Some("upper"), meta.message());

        let meta = parse_error_metadata(
            br#"{"code": "Ignored", "__type": "aws.protocoltests#BarError", "errorMessage": "lower"}"#,
        )
        .unwrap()
        .build();
        assert_eq!(Some("BarError"), meta.code());
        assert_eq!(Some("lower"), meta.message());
    }

    #[test]
    fn unknown_keys_and_nulls() {
        let meta = parse_error_metadata(
            br#"{"Extra": {"nested": [1, 2]}, "__type": null, "message": "m", "Reason": "r"}"#,
        )
        .unwrap()
        .build();
        assert_eq!(None, meta.code());
        assert_eq!(Some("m"), meta.message());
    }

    #[test]
    fn empty_body() {
        let meta = parse_error_metadata(b"").unwrap().build();
        assert_eq!(None, meta.code());
        assert_eq!(None, meta.message());
        assert!(parse_error_metadata(b"  \n").is_ok());
    }

    #[test]
    fn malformed_body() {
        assert!(parse_error_metadata(b"<html>").is_err());
        assert!(parse_error_metadata(br#"{"__type": 5}"#).is_err());
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(sanitize_error_code(":"), "");
        assert_eq!(sanitize_error_code("FooError"), "FooError");
        assert_eq!(
            sanitize_error_code("FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code(""), "");
    }
}
