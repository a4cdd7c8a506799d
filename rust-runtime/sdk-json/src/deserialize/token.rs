/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::deserialize::error::DeserializeError as Error;
use crate::escape::{unescape_string, EscapeError};
use sdk_types::Number;
use std::borrow::Cow;

/// New-type around `&str` that indicates the string is an escaped JSON string.
/// Provides functions for retrieving the string in either form.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct EscapedStr<'a>(&'a str);

impl<'a> EscapedStr<'a> {
    /// Wraps a string that is still JSON escaped.
    pub fn new(value: &'a str) -> EscapedStr<'a> {
        EscapedStr(value)
    }

    /// Returns the escaped string value
    pub fn as_escaped_str(&self) -> &'a str {
        self.0
    }

    /// Unescapes the string and returns it.
    /// If the string doesn't need unescaping, it will be returned directly.
    pub fn to_unescaped(&self) -> Result<Cow<'a, str>, EscapeError> {
        unescape_string(self.0)
    }
}

/// Represents the location of a token
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Offset(pub usize);

impl Offset {
    /// Creates a custom error from the offset
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        Error::custom_at(msg, self.0)
    }
}

/// Enum representing the different JSON tokens that can be returned by
/// [`json_token_iter`](crate::deserialize::json_token_iter).
#[allow(missing_docs)]
#[derive(Debug, PartialEq, Clone)]
pub enum Token<'a> {
    StartArray { offset: Offset },
    EndArray { offset: Offset },
    ObjectKey { offset: Offset, key: EscapedStr<'a> },
    StartObject { offset: Offset },
    EndObject { offset: Offset },
    ValueBool { offset: Offset, value: bool },
    ValueNull { offset: Offset },
    ValueNumber { offset: Offset, value: Number },
    ValueString { offset: Offset, value: EscapedStr<'a> },
}

impl Token<'_> {
    /// Returns the offset of the token in the input.
    pub fn offset(&self) -> Offset {
        use Token::*;
        *match self {
            StartArray { offset } => offset,
            EndArray { offset } => offset,
            ObjectKey { offset, .. } => offset,
            StartObject { offset } => offset,
            EndObject { offset } => offset,
            ValueBool { offset, .. } => offset,
            ValueNull { offset } => offset,
            ValueNumber { offset, .. } => offset,
            ValueString { offset, .. } => offset,
        }
    }

    /// Builds an error from the token's offset
    pub fn error(&self, msg: Cow<'static, str>) -> Error {
        self.offset().error(msg)
    }
}

macro_rules! expect_fn {
    ($name:ident, $typ:ident, $doc:literal) => {
        #[doc = $doc]
        pub fn $name(token_result: Option<Result<Token<'_>, Error>>) -> Result<(), Error> {
            match token_result.transpose()? {
                Some(Token::$typ { .. }) => Ok(()),
                Some(token) => {
                    Err(token.error(Cow::Borrowed(concat!("expected ", stringify!($typ)))))
                }
                None => Err(Error::custom(concat!("expected ", stringify!($typ)))),
            }
        }
    };
}

expect_fn!(
    expect_start_object,
    StartObject,
    "Expects a [`Token::StartObject`] token."
);
expect_fn!(
    expect_start_array,
    StartArray,
    "Expects a [`Token::StartArray`] token."
);

/// Expects a string or null token. If the value was a string, its **unescaped** value will be returned.
pub fn expect_string_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<String>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueString { value, .. }) => Ok(Some(value.to_unescaped()?.into_owned())),
        Some(token) => Err(token.error(Cow::Borrowed("expected null or string value"))),
        None => Err(Error::custom("expected null or string value")),
    }
}

/// Expects a number or null token, and if its a number, returns it.
pub fn expect_number_or_null(
    token: Option<Result<Token<'_>, Error>>,
) -> Result<Option<Number>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueNumber { value, .. }) => Ok(Some(value)),
        Some(token) => Err(token.error(Cow::Borrowed("expected null or number value"))),
        None => Err(Error::custom("expected null or number value")),
    }
}

/// Expects a boolean or null token, and if its a boolean, returns it.
pub fn expect_bool_or_null(token: Option<Result<Token<'_>, Error>>) -> Result<Option<bool>, Error> {
    match token.transpose()? {
        Some(Token::ValueNull { .. }) => Ok(None),
        Some(Token::ValueBool { value, .. }) => Ok(Some(value)),
        Some(token) => Err(token.error(Cow::Borrowed("expected null or boolean value"))),
        None => Err(Error::custom("expected null or boolean value")),
    }
}

/// Skips an entire value in the token stream. Errors if it isn't a value.
pub fn skip_value<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    skip_inner(0, tokens)
}

/// Assumes a start object/array token was already consumed and skips tokens until
/// until its corresponding end object/array token is found.
pub fn skip_to_end<'a>(
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    skip_inner(1, tokens)
}

fn skip_inner<'a>(
    depth: isize,
    tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>,
) -> Result<(), Error> {
    loop {
        match tokens.next().transpose()? {
            Some(Token::StartObject { .. }) | Some(Token::StartArray { .. }) => {
                skip_inner(depth + 1, tokens)?;
                if depth == 0 {
                    break;
                }
            }
            Some(Token::EndObject { .. }) | Some(Token::EndArray { .. }) => {
                debug_assert!(depth > 0);
                break;
            }
            Some(Token::ValueNull { .. })
            | Some(Token::ValueBool { .. })
            | Some(Token::ValueNumber { .. })
            | Some(Token::ValueString { .. }) => {
                if depth == 0 {
                    break;
                }
            }
            Some(Token::ObjectKey { .. }) => {}
            None => return Err(Error::unexpected_eos()),
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::deserialize::json_token_iter;

    pub(crate) fn start_object<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::StartObject {
            offset: Offset(offset),
        }))
    }

    pub(crate) fn value_bool<'a>(offset: usize, boolean: bool) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueBool {
            offset: Offset(offset),
            value: boolean,
        }))
    }

    pub(crate) fn value_number<'a>(
        offset: usize,
        number: Number,
    ) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueNumber {
            offset: Offset(offset),
            value: number,
        }))
    }

    pub(crate) fn value_null<'a>(offset: usize) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueNull {
            offset: Offset(offset),
        }))
    }

    pub(crate) fn value_string<'a>(
        offset: usize,
        string: &'a str,
    ) -> Option<Result<Token<'a>, Error>> {
        Some(Ok(Token::ValueString {
            offset: Offset(offset),
            value: EscapedStr::new(string),
        }))
    }

    fn next_is_true<'a>(tokens: &mut impl Iterator<Item = Result<Token<'a>, Error>>) -> bool {
        matches!(tokens.next(), Some(Ok(Token::ValueBool { value: true, .. })))
    }

    #[test]
    fn skip_simple_value() {
        let mut tokens = json_token_iter(b"null true");
        skip_value(&mut tokens).unwrap();
        assert!(next_is_true(&mut tokens));
    }

    #[test]
    fn skip_array() {
        let mut tokens = json_token_iter(b"[1, 2, 3, 4] true");
        skip_value(&mut tokens).unwrap();
        assert!(next_is_true(&mut tokens));
    }

    #[test]
    fn skip_object() {
        let mut tokens = json_token_iter(b"{\"one\": 5, \"two\": 3} true");
        skip_value(&mut tokens).unwrap();
        assert!(next_is_true(&mut tokens));
    }

    #[test]
    fn skip_to_end_of_object() {
        let mut tokens = json_token_iter(br#"{"one": {"two": [3]}, "four": 4} true"#);
        expect_start_object(tokens.next()).unwrap();
        skip_to_end(&mut tokens).unwrap();
        assert!(next_is_true(&mut tokens));
    }

    #[test]
    fn mismatched_braces() {
        // The token iterator rejects these, so skipping doesn't need to
        let err = skip_value(&mut json_token_iter(br#"[{"foo": 5]}"#)).unwrap_err();
        assert_eq!(Some(10), err.offset());
        assert_eq!(
            "Error at offset 10: unexpected token ']'. Expected one of '}', ','",
            err.to_string()
        );
        let err = skip_value(&mut json_token_iter(br#"[5,6}"#)).unwrap_err();
        assert_eq!(
            "Error at offset 4: unexpected token '}'. Expected one of ']', ','",
            err.to_string()
        );
    }

    #[test]
    fn truncated_value() {
        let err = skip_value(&mut json_token_iter(br#"{"foo": [1, 2"#)).unwrap_err();
        assert_eq!("unexpected end of stream", err.to_string());
    }

    #[test]
    fn skip_nested() {
        let mut tokens = json_token_iter(
            br#"
            {"struct": {"foo": 5, "bar": 11, "arr": [1, 2, 3, {}, 5, []]},
             "arr": [[], [[]], [{"arr":[]}]],
             "simple": "foo"}
            true
        "#,
        );
        skip_value(&mut tokens).unwrap();
        assert!(next_is_true(&mut tokens));
    }

    #[test]
    fn test_expect_start_object() {
        assert_eq!(
            "Error at offset 2: failed to parse JSON: expected StartObject",
            expect_start_object(value_bool(2, true))
                .unwrap_err()
                .to_string()
        );
        assert!(expect_start_object(start_object(0)).is_ok());
        assert!(expect_start_array(None).is_err());
    }

    #[test]
    fn test_expect_string_or_null() {
        assert_eq!(None, expect_string_or_null(value_null(0)).unwrap());
        assert_eq!(
            Some("test\n".to_string()),
            expect_string_or_null(value_string(0, "test\\n")).unwrap()
        );
        assert!(expect_string_or_null(value_bool(0, true)).is_err());
    }

    #[test]
    fn test_expect_number_or_null() {
        assert_eq!(None, expect_number_or_null(value_null(0)).unwrap());
        assert_eq!(
            Some(Number::PosInt(5)),
            expect_number_or_null(value_number(0, Number::PosInt(5))).unwrap()
        );
        assert!(expect_number_or_null(value_bool(0, true)).is_err());
        assert_eq!(
            Some(false),
            expect_bool_or_null(value_bool(0, false)).unwrap()
        );
    }
}
