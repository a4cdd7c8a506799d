/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Connector that replays canned responses and records requests, for testing.

use crate::body::SdkBody;
use crate::client::{BoxError, HttpConnector};
use http::header::{HeaderName, CONTENT_TYPE};
use sdk_protocol_test::{assert_ok, validate_body, validate_headers, MediaType};
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};

type ConnectVec = Vec<(http::Request<SdkBody>, http::Response<SdkBody>)>;

/// A request that was sent, next to the request the test expected.
#[derive(Debug)]
pub struct ValidateRequest {
    /// The request the test expected
    pub expected: http::Request<SdkBody>,
    /// The request that was sent
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Panics unless the sent request has the expected URI, headers and body.
    ///
    /// Only headers present on the expected request are checked, minus `ignore_headers`.
    /// Bodies are compared as JSON when the sent request has a JSON content type.
    #[track_caller]
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        let expected_headers = expected
            .headers()
            .iter()
            .filter(|(name, _)| !ignore_headers.contains(name))
            .map(|(name, value)| {
                (
                    name.as_str(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect::<Vec<_>>();
        let expected_headers = expected_headers
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect::<Vec<_>>();
        assert_ok(validate_headers(actual, &expected_headers));

        let media_type = actual
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(MediaType::from)
            .unwrap_or_else(|| MediaType::Other("unknown".to_string()));
        let expected_body = std::str::from_utf8(expected.body().bytes().unwrap_or_default());
        match expected_body {
            Ok(expected_body) => assert_ok(validate_body(
                actual.body().bytes().unwrap_or_default(),
                expected_body,
                media_type,
            )),
            Err(_) => assert_eq!(expected.body().bytes(), actual.body().bytes()),
        }
        assert_eq!(expected.uri(), actual.uri());
    }
}

/// Test connection that replies with a preloaded series of responses and records each request
/// for later examination.
///
/// ```rust
/// use sdk_http::body::SdkBody;
/// use sdk_http::test_connection::TestConnection;
///
/// let events = vec![(
///     http::Request::new(SdkBody::from("request body")),
///     http::Response::builder()
///         .status(200)
///         .body(SdkBody::from("response body"))
///         .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// assert!(conn.requests().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TestConnection {
    data: Arc<Mutex<ConnectVec>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl TestConnection {
    /// Creates a connection replying with the responses of `data`, in order.
    pub fn new(mut data: ConnectVec) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    /// The requests sent so far.
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Panics unless every preloaded response was used and every request matched.
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining_requests = lock(&self.data).len();
        let actual_requests = self.requests().len();
        assert_eq!(
            remaining_requests, 0,
            "Expected {} additional requests ({} were made)",
            remaining_requests, actual_requests
        );
    }
}

// a test that panicked while holding the lock shouldn't hide the data from other assertions
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl HttpConnector for TestConnection {
    fn call(&self, actual: http::Request<SdkBody>) -> Result<http::Response<SdkBody>, BoxError> {
        let next = lock(&self.data).pop();
        match next {
            Some((expected, response)) => {
                lock(&self.requests).push(ValidateRequest { expected, actual });
                Ok(response)
            }
            None => Err("No more data".into()),
        }
    }
}
