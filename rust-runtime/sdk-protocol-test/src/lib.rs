/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Functions that validate marshalled HTTP requests against the expectations of a protocol test:
//! query parameters, headers, and a body compared by media type.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use http::{Request, Uri};
use pretty_assertions::Comparison;
use std::collections::HashSet;
use thiserror::Error;

/// A protocol test expectation that wasn't met.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    /// An expected `key=value` pair is not in the query string.
    #[error("missing query param: expected `{expected}`, found {found:?}")]
    MissingQueryParam {
        /// The expected pair
        expected: String,
        /// Every pair of the query string
        found: Vec<String>,
    },
    /// A query parameter that must be absent is present.
    #[error("forbidden query param present: `{expected}`")]
    ForbiddenQueryParam {
        /// The forbidden key
        expected: String,
    },
    /// A query parameter that must be present is absent.
    #[error("required query param missing: `{expected}`")]
    RequiredQueryParam {
        /// The required key
        expected: String,
    },
    /// A header doesn't have the expected value.
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        /// Header name
        key: String,
        /// Expected value
        expected: String,
        /// Actual value, with repeated headers joined by `, `
        found: String,
    },
    /// An expected header is absent.
    #[error("missing required header: `{expected}`")]
    MissingHeader {
        /// Header name
        expected: String,
    },
    /// The body doesn't match the expected body.
    #[error("body did not match. {comparison}\n == hint:\n{hint}")]
    BodyDidNotMatch {
        /// Rendered comparison of the two bodies
        comparison: String,
        /// Description of the first difference
        hint: String,
    },
    /// The body could not be parsed as the expected media type.
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat {
        /// The expected media type
        expected: String,
        /// The parse error
        found: String,
    },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

/// How a body is compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaType {
    /// Bodies are parsed and compared as JSON documents, ignoring formatting and key order.
    Json,
    /// Bodies are compared byte for byte.
    Other(String),
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        if inp.as_ref().contains("json") {
            MediaType::Json
        } else {
            MediaType::Other(inp.as_ref().to_string())
        }
    }
}

#[derive(Eq, PartialEq, Hash)]
struct QueryParam<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> QueryParam<'a> {
    fn parse(s: &'a str) -> Self {
        match s.split_once('=') {
            Some((key, value)) => QueryParam {
                key,
                value: Some(value),
            },
            None => QueryParam {
                key: s,
                value: None,
            },
        }
    }
}

fn extract_params(uri: &Uri) -> HashSet<&str> {
    uri.query()
        .unwrap_or_default()
        .split('&')
        .filter(|param| !param.is_empty())
        .collect()
}

/// Checks that each of `expected_params` (in `key=value` form) is in the query string.
pub fn validate_query_string<B>(
    request: &Request<B>,
    expected_params: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_params = extract_params(request.uri());
    for param in expected_params {
        if !actual_params.contains(param) {
            return Err(ProtocolTestFailure::MissingQueryParam {
                expected: param.to_string(),
                found: actual_params.iter().map(|s| s.to_string()).collect(),
            });
        }
    }
    Ok(())
}

fn query_keys<B>(request: &Request<B>) -> HashSet<&str> {
    extract_params(request.uri())
        .iter()
        .map(|param| QueryParam::parse(param).key)
        .collect()
}

/// Checks that none of `forbid_keys` is a key of the query string.
pub fn forbid_query_params<B>(
    request: &Request<B>,
    forbid_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request);
    for key in forbid_keys {
        if actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::ForbiddenQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks that each of `require_keys` is a key of the query string.
pub fn require_query_params<B>(
    request: &Request<B>,
    require_keys: &[&str],
) -> Result<(), ProtocolTestFailure> {
    let actual_keys = query_keys(request);
    for key in require_keys {
        if !actual_keys.contains(*key) {
            return Err(ProtocolTestFailure::RequiredQueryParam {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks header values. Repeated headers are joined with `, ` before being compared.
pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| String::from_utf8_lossy(hv.as_bytes()))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

/// Compares a body to the expected body.
///
/// JSON bodies are compared structurally. An empty expected body matches an empty body only.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let actual_body = actual_body.as_ref();
    match (media_type, std::str::from_utf8(actual_body)) {
        (MediaType::Json, Ok(actual)) if !expected_body.is_empty() => {
            try_json_eq(actual, expected_body)
        }
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (_, Ok(actual)) => {
            if actual == expected_body {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: pretty_comparison(expected_body, actual),
                    hint: String::new(),
                })
            }
        }
        (_, Err(_)) => {
            if actual_body == expected_body.as_bytes() {
                Ok(())
            } else {
                Err(ProtocolTestFailure::BodyDidNotMatch {
                    comparison: pretty_comparison(expected_body, &String::from_utf8_lossy(actual_body)),
                    hint: "the body is not valid UTF-8".to_owned(),
                })
            }
        }
    }
}

fn try_json_eq(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{} (expected body)", e),
        })?;
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("{}: {}", e, actual),
        })?;
    let config = Config::new(CompareMode::Strict);
    assert_json_matches_no_panic(&actual_json, &expected_json, config).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            comparison: pretty_comparison(
                &serde_json::to_string_pretty(&expected_json).unwrap_or_default(),
                &serde_json::to_string_pretty(&actual_json).unwrap_or_default(),
            ),
            hint,
        }
    })
}

fn pretty_comparison(expected: &str, actual: &str) -> String {
    format!(
        "{}",
        Comparison::new(&PrettyStr(expected), &PrettyStr(actual))
    )
}

#[derive(PartialEq)]
struct PrettyStr<'a>(&'a str);

impl std::fmt::Debug for PrettyStr<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        forbid_query_params, require_query_params, validate_body, validate_headers,
        validate_query_string, MediaType, ProtocolTestFailure,
    };
    use http::Request;

    #[test]
    fn test_validate_empty_query_string() {
        let request = Request::builder().uri("/foo").body(()).unwrap();
        validate_query_string(&request, &[]).expect("no required params should pass");
        validate_query_string(&request, &["a"])
            .err()
            .expect("no params provided");
    }

    #[test]
    fn test_validate_query_string() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        validate_query_string(&request, &["a=b"]).expect("a=b is in the query string");
        validate_query_string(&request, &["c", "a=b"])
            .expect("both params are in the query string");
        validate_query_string(&request, &["a=b", "c", "d=efg", "hello=a%20b"])
            .expect("all params are in the query string");

        validate_query_string(&request, &["a"]).expect_err("no parameter should match");
        validate_query_string(&request, &["a=bc"]).expect_err("no parameter should match");
        validate_query_string(&request, &["hell=a%20"]).expect_err("no parameter should match");
    }

    #[test]
    fn test_forbid_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        forbid_query_params(&request, &["a"]).expect_err("a is a query param");
        forbid_query_params(&request, &["not_included"]).expect("query param not included");
        forbid_query_params(&request, &["a=b"]).expect("should be matching against keys");
        forbid_query_params(&request, &["c"]).expect_err("c is a query param");
    }

    #[test]
    fn test_require_query_param() {
        let request = Request::builder()
            .uri("/foo?a=b&c&d=efg&hello=a%20b")
            .body(())
            .unwrap();
        require_query_params(&request, &["a"]).expect("a is a query param");
        require_query_params(&request, &["not_included"]).expect_err("query param not included");
        require_query_params(&request, &["a=b"]).expect_err("should be matching against keys");
        require_query_params(&request, &["c"]).expect("c is a query param");
    }

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"abc": 5 }"#;
        let actual = r#"   {"abc":   5 }"#;
        validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect("inputs matched as JSON");

        let expected = r#"{"ChannelArn": "arn", "Tags": ["a", "b"]}"#;
        let actual = r#"{"Tags":["a","b"],"ChannelArn":"arn"}"#;
        validate_body(actual.as_bytes(), expected, MediaType::from("application/json"))
            .expect("key order is ignored");

        let actual = r#"{"Tags":["b","a"],"ChannelArn":"arn"}"#;
        let err = validate_body(actual.as_bytes(), expected, MediaType::Json)
            .expect_err("list order matters");
        assert!(matches!(err, ProtocolTestFailure::BodyDidNotMatch { .. }));

        let err = validate_body(b"{", expected, MediaType::Json).expect_err("invalid json");
        assert!(matches!(err, ProtocolTestFailure::InvalidBodyFormat { .. }));
    }

    #[test]
    fn test_validate_non_json_body() {
        let expected = r#"asdf"#;
        let actual = r#"asdf "#;
        validate_body(actual.as_bytes(), expected, MediaType::from("something/else"))
            .expect_err("bodies do not match");

        validate_body(expected.as_bytes(), expected, MediaType::from("something/else"))
            .expect("inputs matched exactly");
        validate_body(b"", "", MediaType::Json).expect("empty bodies match");
    }
}
