/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptions of the operations of the service.

use crate::shapes::*;
use sdk_http::operation::{HttpTrait, OperationSchema};

const SERVICE: &str = "AmazonConnectService";

/// Updates the metadata of a contact flow: its name, description and state.
pub static UPDATE_CONTACT_FLOW_METADATA: OperationSchema = OperationSchema::new(
    SERVICE,
    "UpdateContactFlowMetadata",
    &UPDATE_CONTACT_FLOW_METADATA_INPUT,
    &UPDATE_CONTACT_FLOW_METADATA_OUTPUT,
)
.with_http(HttpTrait::new(
    "POST",
    "/contact-flows/{InstanceId}/{ContactFlowId}/metadata",
));

/// Describes a contact flow.
pub static DESCRIBE_CONTACT_FLOW: OperationSchema = OperationSchema::new(
    SERVICE,
    "DescribeContactFlow",
    &DESCRIBE_CONTACT_FLOW_INPUT,
    &DESCRIBE_CONTACT_FLOW_OUTPUT,
)
.with_http(HttpTrait::new(
    "GET",
    "/contact-flows/{InstanceId}/{ContactFlowId}",
));
