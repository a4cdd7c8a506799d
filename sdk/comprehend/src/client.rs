/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client for Amazon Comprehend.

use crate::error::{Error, ERRORS};
use crate::input::{BatchDetectDominantLanguageInput, DetectDominantLanguageInput};
use crate::operation;
use crate::output::{BatchDetectDominantLanguageOutput, DetectDominantLanguageOutput};
use sdk_http::client::HttpConnector;
use sdk_http::config::Config;
use sdk_http::protocol::ProtocolSettings;
use sdk_http::result::SdkError;
use std::sync::LazyLock;

const TARGET_PREFIX: &str = "Comprehend_20171127";

/// Client for Amazon Comprehend.
///
/// Requests are marshalled with the AWS JSON 1.1 protocol and sent through `C`.
///
/// ```rust
/// use sdk_comprehend::{Client, Config};
/// use sdk_http::test_connection::TestConnection;
///
/// let config = Config::builder()
///     .endpoint_url("https://comprehend.us-east-1.amazonaws.com")
///     .build();
/// let client = Client::from_conf_conn(config, TestConnection::new(vec![]));
/// ```
#[derive(Debug)]
pub struct Client<C> {
    inner: sdk_http::client::Client<C>,
}

impl<C: HttpConnector> Client<C> {
    /// Creates a client sending requests through `conn`.
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        if let Err(err) = crate::shapes::shape_registry() {
            tracing::warn!(error = %err, "shape registry of the service is inconsistent");
        }
        LazyLock::force(&ERRORS);
        Self {
            inner: sdk_http::client::Client::new(
                conn,
                &conf,
                ProtocolSettings::aws_json_1_1(TARGET_PREFIX),
            ),
        }
    }

    /// Returns the connector requests are sent through.
    pub fn conn(&self) -> &C {
        self.inner.connector()
    }

    /// Determines the dominant language of the input text.
    pub fn detect_dominant_language(
        &self,
        input: &DetectDominantLanguageInput,
    ) -> Result<DetectDominantLanguageOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::DETECT_DOMINANT_LANGUAGE, input, &ERRORS)
    }

    /// Determines the dominant language of the input text for a batch of documents.
    pub fn batch_detect_dominant_language(
        &self,
        input: &BatchDetectDominantLanguageInput,
    ) -> Result<BatchDetectDominantLanguageOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::BATCH_DETECT_DOMINANT_LANGUAGE, input, &ERRORS)
    }
}
