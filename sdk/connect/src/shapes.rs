/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptors of every shape of the service.

use sdk_schema::prelude::STRING;
use sdk_schema::{HttpBinding, RegistryError, Schema, ShapeId, ShapeRegistry};
use std::sync::LazyLock;

macro_rules! id {
    ($name:literal) => {
        ShapeId::from_static(concat!("com.amazonaws.connect#", $name))
    };
}

pub(crate) static CONTACT_FLOW_STATE: Schema =
    Schema::enumeration(id!("ContactFlowState"), &["ACTIVE", "ARCHIVED"]);

// ContactFlow

pub(crate) static CONTACT_FLOW: Schema = Schema::structure(id!("ContactFlow"), &CONTACT_FLOW_MEMBERS);
static CONTACT_FLOW_MEMBERS: [&Schema; 6] = [
    &CONTACT_FLOW_ARN,
    &CONTACT_FLOW_ID,
    &CONTACT_FLOW_NAME,
    &CONTACT_FLOW_STATE_MEMBER,
    &CONTACT_FLOW_DESCRIPTION,
    &CONTACT_FLOW_CONTENT,
];
pub(crate) static CONTACT_FLOW_ARN: Schema = Schema::member(id!("ContactFlow$Arn"), "Arn", 0, &STRING);
pub(crate) static CONTACT_FLOW_ID: Schema = Schema::member(id!("ContactFlow$Id"), "Id", 1, &STRING);
pub(crate) static CONTACT_FLOW_NAME: Schema =
    Schema::member(id!("ContactFlow$Name"), "Name", 2, &STRING);
pub(crate) static CONTACT_FLOW_STATE_MEMBER: Schema =
    Schema::member(id!("ContactFlow$State"), "State", 3, &CONTACT_FLOW_STATE);
pub(crate) static CONTACT_FLOW_DESCRIPTION: Schema = Schema::member(
    id!("ContactFlow$Description"),
    "Description",
    4,
    &STRING,
);
pub(crate) static CONTACT_FLOW_CONTENT: Schema =
    Schema::member(id!("ContactFlow$Content"), "Content", 5, &STRING);

// UpdateContactFlowMetadata

pub(crate) static UPDATE_CONTACT_FLOW_METADATA_INPUT: Schema = Schema::structure(
    id!("UpdateContactFlowMetadataRequest"),
    &UPDATE_CONTACT_FLOW_METADATA_INPUT_MEMBERS,
);
static UPDATE_CONTACT_FLOW_METADATA_INPUT_MEMBERS: [&Schema; 5] = [
    &UPDATE_CONTACT_FLOW_METADATA_INPUT_INSTANCE_ID,
    &UPDATE_CONTACT_FLOW_METADATA_INPUT_CONTACT_FLOW_ID,
    &UPDATE_CONTACT_FLOW_METADATA_INPUT_NAME,
    &UPDATE_CONTACT_FLOW_METADATA_INPUT_DESCRIPTION,
    &UPDATE_CONTACT_FLOW_METADATA_INPUT_CONTACT_FLOW_STATE,
];
pub(crate) static UPDATE_CONTACT_FLOW_METADATA_INPUT_INSTANCE_ID: Schema = Schema::member(
    id!("UpdateContactFlowMetadataRequest$InstanceId"),
    "InstanceId",
    0,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static UPDATE_CONTACT_FLOW_METADATA_INPUT_CONTACT_FLOW_ID: Schema = Schema::member(
    id!("UpdateContactFlowMetadataRequest$ContactFlowId"),
    "ContactFlowId",
    1,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static UPDATE_CONTACT_FLOW_METADATA_INPUT_NAME: Schema = Schema::member(
    id!("UpdateContactFlowMetadataRequest$Name"),
    "Name",
    2,
    &STRING,
);
pub(crate) static UPDATE_CONTACT_FLOW_METADATA_INPUT_DESCRIPTION: Schema = Schema::member(
    id!("UpdateContactFlowMetadataRequest$Description"),
    "Description",
    3,
    &STRING,
);
pub(crate) static UPDATE_CONTACT_FLOW_METADATA_INPUT_CONTACT_FLOW_STATE: Schema = Schema::member(
    id!("UpdateContactFlowMetadataRequest$ContactFlowState"),
    "ContactFlowState",
    4,
    &CONTACT_FLOW_STATE,
);

pub(crate) static UPDATE_CONTACT_FLOW_METADATA_OUTPUT: Schema =
    Schema::structure(id!("UpdateContactFlowMetadataResponse"), &[]);

// DescribeContactFlow

pub(crate) static DESCRIBE_CONTACT_FLOW_INPUT: Schema = Schema::structure(
    id!("DescribeContactFlowRequest"),
    &DESCRIBE_CONTACT_FLOW_INPUT_MEMBERS,
);
static DESCRIBE_CONTACT_FLOW_INPUT_MEMBERS: [&Schema; 2] = [
    &DESCRIBE_CONTACT_FLOW_INPUT_INSTANCE_ID,
    &DESCRIBE_CONTACT_FLOW_INPUT_CONTACT_FLOW_ID,
];
pub(crate) static DESCRIBE_CONTACT_FLOW_INPUT_INSTANCE_ID: Schema = Schema::member(
    id!("DescribeContactFlowRequest$InstanceId"),
    "InstanceId",
    0,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static DESCRIBE_CONTACT_FLOW_INPUT_CONTACT_FLOW_ID: Schema = Schema::member(
    id!("DescribeContactFlowRequest$ContactFlowId"),
    "ContactFlowId",
    1,
    &STRING,
)
.with_http_binding(HttpBinding::Label);

pub(crate) static DESCRIBE_CONTACT_FLOW_OUTPUT: Schema = Schema::structure(
    id!("DescribeContactFlowResponse"),
    &DESCRIBE_CONTACT_FLOW_OUTPUT_MEMBERS,
);
static DESCRIBE_CONTACT_FLOW_OUTPUT_MEMBERS: [&Schema; 1] = [&DESCRIBE_CONTACT_FLOW_OUTPUT_CONTACT_FLOW];
pub(crate) static DESCRIBE_CONTACT_FLOW_OUTPUT_CONTACT_FLOW: Schema = Schema::member(
    id!("DescribeContactFlowResponse$ContactFlow"),
    "ContactFlow",
    0,
    &CONTACT_FLOW,
);

// errors

macro_rules! exception_schema {
    ($schema:ident, $members:ident, $message:ident, $name:literal) => {
        pub(crate) static $schema: Schema = Schema::structure(id!($name), &$members);
        static $members: [&Schema; 1] = [&$message];
        pub(crate) static $message: Schema = Schema::member(
            ShapeId::from_static(concat!("com.amazonaws.connect#", $name, "$Message")),
            "Message",
            0,
            &STRING,
        );
    };
}

exception_schema!(
    INTERNAL_SERVICE_EXCEPTION,
    INTERNAL_SERVICE_EXCEPTION_MEMBERS,
    INTERNAL_SERVICE_EXCEPTION_MESSAGE,
    "InternalServiceException"
);
exception_schema!(
    INVALID_PARAMETER_EXCEPTION,
    INVALID_PARAMETER_EXCEPTION_MEMBERS,
    INVALID_PARAMETER_EXCEPTION_MESSAGE,
    "InvalidParameterException"
);
exception_schema!(
    INVALID_REQUEST_EXCEPTION,
    INVALID_REQUEST_EXCEPTION_MEMBERS,
    INVALID_REQUEST_EXCEPTION_MESSAGE,
    "InvalidRequestException"
);
exception_schema!(
    RESOURCE_NOT_FOUND_EXCEPTION,
    RESOURCE_NOT_FOUND_EXCEPTION_MEMBERS,
    RESOURCE_NOT_FOUND_EXCEPTION_MESSAGE,
    "ResourceNotFoundException"
);
exception_schema!(
    THROTTLING_EXCEPTION,
    THROTTLING_EXCEPTION_MEMBERS,
    THROTTLING_EXCEPTION_MESSAGE,
    "ThrottlingException"
);

static ROOTS: [&Schema; 9] = [
    &UPDATE_CONTACT_FLOW_METADATA_INPUT,
    &UPDATE_CONTACT_FLOW_METADATA_OUTPUT,
    &DESCRIBE_CONTACT_FLOW_INPUT,
    &DESCRIBE_CONTACT_FLOW_OUTPUT,
    &INTERNAL_SERVICE_EXCEPTION,
    &INVALID_PARAMETER_EXCEPTION,
    &INVALID_REQUEST_EXCEPTION,
    &RESOURCE_NOT_FOUND_EXCEPTION,
    &THROTTLING_EXCEPTION,
];

static REGISTRY: LazyLock<Result<ShapeRegistry, RegistryError>> =
    LazyLock::new(|| ShapeRegistry::builder().roots(ROOTS).build());

/// Every shape of the service, keyed by shape ID.
pub fn shape_registry() -> Result<&'static ShapeRegistry, RegistryError> {
    LazyLock::force(&REGISTRY).as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod test {
    use super::shape_registry;

    #[test]
    fn registry_builds() {
        let registry = shape_registry().unwrap();
        let state = registry.get("com.amazonaws.connect#ContactFlowState").unwrap();
        assert_eq!(&["ACTIVE", "ARCHIVED"], state.enum_values());
        assert_eq!(
            Some(0),
            registry
                .members("com.amazonaws.connect#UpdateContactFlowMetadataResponse")
                .map(|members| members.len())
        );
    }
}
