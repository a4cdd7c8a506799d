/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The JSON protocols spoken by services and their settings.

use crate::operation::OperationSchema;
use sdk_json::codec::JsonCodecSettings;
use std::borrow::Cow;

/// Header naming the operation of an AWS JSON request.
pub const X_AMZ_TARGET: &str = "x-amz-target";

/// A JSON based wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// `awsJson1_0`: every operation is a `POST /` named by `X-Amz-Target`.
    AwsJson1_0,
    /// `awsJson1_1`: as 1.0, with a different content type.
    AwsJson1_1,
    /// `restJson1`: operations are routed by method and URI, members may be bound to the URI,
    /// the query string and headers.
    RestJson1,
}

impl Protocol {
    /// Whether members are bound to HTTP locations through their `HttpBinding`.
    ///
    /// AWS JSON protocols put every member in the body.
    pub fn binds_http(&self) -> bool {
        matches!(self, Protocol::RestJson1)
    }

    /// The content type a request body is sent with.
    pub fn default_content_type(&self) -> &'static str {
        match self {
            Protocol::AwsJson1_0 => "application/x-amz-json-1.0",
            Protocol::AwsJson1_1 => "application/x-amz-json-1.1",
            Protocol::RestJson1 => "application/json",
        }
    }
}

/// Protocol settings of a service client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolSettings {
    protocol: Protocol,
    content_type: Cow<'static, str>,
    target_prefix: Option<Cow<'static, str>>,
}

impl ProtocolSettings {
    /// AWS JSON 1.0 with the given target prefix, such as `DynamoDB_20120810`.
    pub fn aws_json_1_0(target_prefix: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Protocol::AwsJson1_0).with_target_prefix(target_prefix)
    }

    /// AWS JSON 1.1 with the given target prefix, such as `Comprehend_20171127`.
    pub fn aws_json_1_1(target_prefix: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Protocol::AwsJson1_1).with_target_prefix(target_prefix)
    }

    /// REST-JSON.
    pub fn rest_json() -> Self {
        Self::new(Protocol::RestJson1)
    }

    fn new(protocol: Protocol) -> Self {
        Self {
            protocol,
            content_type: Cow::Borrowed(protocol.default_content_type()),
            target_prefix: None,
        }
    }

    /// Overrides the content type of request bodies.
    pub fn with_content_type(mut self, content_type: impl Into<Cow<'static, str>>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Sets the prefix of the `X-Amz-Target` header.
    pub fn with_target_prefix(mut self, target_prefix: impl Into<Cow<'static, str>>) -> Self {
        self.target_prefix = Some(target_prefix.into());
        self
    }

    /// The wire protocol.
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Content type of request bodies.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Prefix of the `X-Amz-Target` header, for AWS JSON protocols.
    pub fn target_prefix(&self) -> Option<&str> {
        self.target_prefix.as_deref()
    }

    /// Settings for the JSON codec used for bodies.
    pub fn json_codec_settings(&self) -> JsonCodecSettings {
        match self.protocol {
            Protocol::AwsJson1_0 | Protocol::AwsJson1_1 => JsonCodecSettings::aws_json(),
            Protocol::RestJson1 => JsonCodecSettings::rest_json(),
        }
    }

    /// Value of the `X-Amz-Target` header for `operation`: `<prefix>.<operation name>`.
    ///
    /// REST-JSON requests don't carry the header.
    pub fn target(&self, operation: &OperationSchema) -> Option<String> {
        if self.protocol.binds_http() {
            return None;
        }
        Some(match &self.target_prefix {
            Some(prefix) => format!("{}.{}", prefix, operation.name()),
            None => operation.name().to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::{Protocol, ProtocolSettings};
    use crate::operation::OperationSchema;
    use sdk_schema::prelude::UNIT;

    static OPERATION: OperationSchema = OperationSchema::new("Comprehend", "DetectDominantLanguage", &UNIT, &UNIT);

    #[test]
    fn aws_json_target() {
        let settings = ProtocolSettings::aws_json_1_1("Comprehend_20171127");
        assert_eq!(Protocol::AwsJson1_1, settings.protocol());
        assert_eq!("application/x-amz-json-1.1", settings.content_type());
        assert_eq!(
            Some("Comprehend_20171127.DetectDominantLanguage".to_string()),
            settings.target(&OPERATION)
        );
        assert!(!settings.json_codec_settings().use_json_name);
    }

    #[test]
    fn aws_json_1_0_content_type() {
        let settings = ProtocolSettings::aws_json_1_0("DynamoDB_20120810");
        assert_eq!("application/x-amz-json-1.0", settings.content_type());
        let settings = settings.with_content_type("application/json");
        assert_eq!("application/json", settings.content_type());
    }

    #[test]
    fn rest_json_has_no_target() {
        let settings = ProtocolSettings::rest_json();
        assert_eq!(None, settings.target(&OPERATION));
        assert!(settings.protocol().binds_http());
        assert!(settings.json_codec_settings().use_json_name);
    }
}
