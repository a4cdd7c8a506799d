/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptions of operations.

use sdk_schema::Schema;

/// The `@http` trait of an operation: method, URI template and success code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTrait {
    method: &'static str,
    uri: &'static str,
    code: u16,
}

impl HttpTrait {
    /// Creates an `@http` trait with the default success code of 200.
    pub const fn new(method: &'static str, uri: &'static str) -> Self {
        Self {
            method,
            uri,
            code: 200,
        }
    }

    /// Sets the success code.
    pub const fn with_code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    /// HTTP method, such as `POST`.
    pub fn method(&self) -> &'static str {
        self.method
    }

    /// URI template, such as `/channels/{ChannelArn}/messages`.
    pub fn uri(&self) -> &'static str {
        self.uri
    }

    /// Status code of a successful response.
    pub fn code(&self) -> u16 {
        self.code
    }
}

/// Everything the runtime needs to know about an operation.
#[derive(Debug)]
pub struct OperationSchema {
    service: &'static str,
    name: &'static str,
    http: HttpTrait,
    input: &'static Schema,
    output: &'static Schema,
}

impl OperationSchema {
    /// Creates an operation that is sent as `POST /`, which is how AWS JSON operations are sent.
    pub const fn new(
        service: &'static str,
        name: &'static str,
        input: &'static Schema,
        output: &'static Schema,
    ) -> Self {
        Self {
            service,
            name,
            http: HttpTrait::new("POST", "/"),
            input,
            output,
        }
    }

    /// Sets the `@http` trait.
    pub const fn with_http(mut self, http: HttpTrait) -> Self {
        self.http = http;
        self
    }

    /// Name of the service, such as `ChimeSDKMessaging`.
    pub fn service(&self) -> &'static str {
        self.service
    }

    /// Name of the operation, such as `SendChannelMessage`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The `@http` trait, `POST /` unless set.
    pub fn http(&self) -> &HttpTrait {
        &self.http
    }

    /// Schema of the input structure.
    pub fn input(&self) -> &'static Schema {
        self.input
    }

    /// Schema of the output structure.
    pub fn output(&self) -> &'static Schema {
        self.output
    }
}

#[cfg(test)]
mod test {
    use super::{HttpTrait, OperationSchema};
    use sdk_schema::prelude::UNIT;

    static DESCRIBE: OperationSchema =
        OperationSchema::new("Connect", "DescribeContactFlow", &UNIT, &UNIT).with_http(
            HttpTrait::new("GET", "/contact-flows/{InstanceId}/{ContactFlowId}"),
        );

    static DETECT: OperationSchema = OperationSchema::new("Comprehend", "DetectDominantLanguage", &UNIT, &UNIT);

    #[test]
    fn http_trait() {
        assert_eq!("GET", DESCRIBE.http().method());
        assert_eq!("/contact-flows/{InstanceId}/{ContactFlowId}", DESCRIBE.http().uri());
        assert_eq!(200, DESCRIBE.http().code());
        assert_eq!(204, HttpTrait::new("DELETE", "/").with_code(204).code());
    }

    #[test]
    fn rpc_operations_post_to_root() {
        assert_eq!("POST", DETECT.http().method());
        assert_eq!("/", DETECT.http().uri());
        assert_eq!("Comprehend", DETECT.service());
        assert_eq!("DetectDominantLanguage", DETECT.name());
    }
}
