/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptors of every shape of the service.

use sdk_schema::prelude::{BOOLEAN, INTEGER, STRING, TIMESTAMP};
use sdk_schema::{HttpBinding, RegistryError, Schema, ShapeId, ShapeRegistry};
use std::sync::LazyLock;

macro_rules! id {
    ($name:literal) => {
        ShapeId::from_static(concat!("com.amazonaws.chimesdkmessaging#", $name))
    };
}

const CHIME_BEARER: HttpBinding = HttpBinding::Header("x-amz-chime-bearer");

// enums

pub(crate) static CHANNEL_MESSAGE_TYPE: Schema =
    Schema::enumeration(id!("ChannelMessageType"), &["STANDARD", "CONTROL"]);
pub(crate) static CHANNEL_MESSAGE_PERSISTENCE_TYPE: Schema = Schema::enumeration(
    id!("ChannelMessagePersistenceType"),
    &["PERSISTENT", "NON_PERSISTENT"],
);
pub(crate) static CHANNEL_MEMBERSHIP_TYPE: Schema =
    Schema::enumeration(id!("ChannelMembershipType"), &["DEFAULT", "HIDDEN"]);
pub(crate) static CHANNEL_MODE: Schema =
    Schema::enumeration(id!("ChannelMode"), &["UNRESTRICTED", "RESTRICTED"]);
pub(crate) static CHANNEL_PRIVACY: Schema =
    Schema::enumeration(id!("ChannelPrivacy"), &["PUBLIC", "PRIVATE"]);

// Identity

pub(crate) static IDENTITY: Schema = Schema::structure(id!("Identity"), &IDENTITY_MEMBERS);
static IDENTITY_MEMBERS: [&Schema; 2] = [&IDENTITY_ARN, &IDENTITY_NAME];
pub(crate) static IDENTITY_ARN: Schema = Schema::member(id!("Identity$Arn"), "Arn", 0, &STRING);
pub(crate) static IDENTITY_NAME: Schema = Schema::member(id!("Identity$Name"), "Name", 1, &STRING);

// MessageAttributeValue and MessageAttributeMap

pub(crate) static MESSAGE_ATTRIBUTE_STRING_VALUES: Schema = Schema::list(
    id!("MessageAttributeStringValues"),
    &MESSAGE_ATTRIBUTE_STRING_VALUES_MEMBER,
);
pub(crate) static MESSAGE_ATTRIBUTE_STRING_VALUES_MEMBER: Schema = Schema::member(
    id!("MessageAttributeStringValues$member"),
    "member",
    0,
    &STRING,
);

pub(crate) static MESSAGE_ATTRIBUTE_VALUE: Schema =
    Schema::structure(id!("MessageAttributeValue"), &MESSAGE_ATTRIBUTE_VALUE_MEMBERS);
static MESSAGE_ATTRIBUTE_VALUE_MEMBERS: [&Schema; 1] = [&MESSAGE_ATTRIBUTE_VALUE_STRING_VALUES];
pub(crate) static MESSAGE_ATTRIBUTE_VALUE_STRING_VALUES: Schema = Schema::member(
    id!("MessageAttributeValue$StringValues"),
    "StringValues",
    0,
    &MESSAGE_ATTRIBUTE_STRING_VALUES,
);

pub(crate) static MESSAGE_ATTRIBUTE_MAP: Schema = Schema::map(
    id!("MessageAttributeMap"),
    &MESSAGE_ATTRIBUTE_MAP_KEY,
    &MESSAGE_ATTRIBUTE_MAP_VALUE,
);
pub(crate) static MESSAGE_ATTRIBUTE_MAP_KEY: Schema =
    Schema::member(id!("MessageAttributeMap$key"), "key", 0, &STRING);
pub(crate) static MESSAGE_ATTRIBUTE_MAP_VALUE: Schema = Schema::member(
    id!("MessageAttributeMap$value"),
    "value",
    1,
    &MESSAGE_ATTRIBUTE_VALUE,
);

// ChannelMessage

pub(crate) static CHANNEL_MESSAGE: Schema =
    Schema::structure(id!("ChannelMessage"), &CHANNEL_MESSAGE_MEMBERS);
static CHANNEL_MESSAGE_MEMBERS: [&Schema; 12] = [
    &CHANNEL_MESSAGE_CHANNEL_ARN,
    &CHANNEL_MESSAGE_MESSAGE_ID,
    &CHANNEL_MESSAGE_CONTENT,
    &CHANNEL_MESSAGE_METADATA,
    &CHANNEL_MESSAGE_TYPE_MEMBER,
    &CHANNEL_MESSAGE_CREATED_TIMESTAMP,
    &CHANNEL_MESSAGE_LAST_EDITED_TIMESTAMP,
    &CHANNEL_MESSAGE_LAST_UPDATED_TIMESTAMP,
    &CHANNEL_MESSAGE_SENDER,
    &CHANNEL_MESSAGE_REDACTED,
    &CHANNEL_MESSAGE_PERSISTENCE,
    &CHANNEL_MESSAGE_MESSAGE_ATTRIBUTES,
];
pub(crate) static CHANNEL_MESSAGE_CHANNEL_ARN: Schema =
    Schema::member(id!("ChannelMessage$ChannelArn"), "ChannelArn", 0, &STRING);
pub(crate) static CHANNEL_MESSAGE_MESSAGE_ID: Schema =
    Schema::member(id!("ChannelMessage$MessageId"), "MessageId", 1, &STRING);
pub(crate) static CHANNEL_MESSAGE_CONTENT: Schema =
    Schema::member(id!("ChannelMessage$Content"), "Content", 2, &STRING);
pub(crate) static CHANNEL_MESSAGE_METADATA: Schema =
    Schema::member(id!("ChannelMessage$Metadata"), "Metadata", 3, &STRING);
pub(crate) static CHANNEL_MESSAGE_TYPE_MEMBER: Schema = Schema::member(
    id!("ChannelMessage$Type"),
    "Type",
    4,
    &CHANNEL_MESSAGE_TYPE,
);
pub(crate) static CHANNEL_MESSAGE_CREATED_TIMESTAMP: Schema = Schema::member(
    id!("ChannelMessage$CreatedTimestamp"),
    "CreatedTimestamp",
    5,
    &TIMESTAMP,
);
pub(crate) static CHANNEL_MESSAGE_LAST_EDITED_TIMESTAMP: Schema = Schema::member(
    id!("ChannelMessage$LastEditedTimestamp"),
    "LastEditedTimestamp",
    6,
    &TIMESTAMP,
);
pub(crate) static CHANNEL_MESSAGE_LAST_UPDATED_TIMESTAMP: Schema = Schema::member(
    id!("ChannelMessage$LastUpdatedTimestamp"),
    "LastUpdatedTimestamp",
    7,
    &TIMESTAMP,
);
pub(crate) static CHANNEL_MESSAGE_SENDER: Schema =
    Schema::member(id!("ChannelMessage$Sender"), "Sender", 8, &IDENTITY);
pub(crate) static CHANNEL_MESSAGE_REDACTED: Schema =
    Schema::member(id!("ChannelMessage$Redacted"), "Redacted", 9, &BOOLEAN);
pub(crate) static CHANNEL_MESSAGE_PERSISTENCE: Schema = Schema::member(
    id!("ChannelMessage$Persistence"),
    "Persistence",
    10,
    &CHANNEL_MESSAGE_PERSISTENCE_TYPE,
);
pub(crate) static CHANNEL_MESSAGE_MESSAGE_ATTRIBUTES: Schema = Schema::member(
    id!("ChannelMessage$MessageAttributes"),
    "MessageAttributes",
    11,
    &MESSAGE_ATTRIBUTE_MAP,
);

// ChannelMessageCallback

pub(crate) static CHANNEL_MESSAGE_CALLBACK: Schema =
    Schema::structure(id!("ChannelMessageCallback"), &CHANNEL_MESSAGE_CALLBACK_MEMBERS);
static CHANNEL_MESSAGE_CALLBACK_MEMBERS: [&Schema; 3] = [
    &CHANNEL_MESSAGE_CALLBACK_MESSAGE_ID,
    &CHANNEL_MESSAGE_CALLBACK_CONTENT,
    &CHANNEL_MESSAGE_CALLBACK_METADATA,
];
pub(crate) static CHANNEL_MESSAGE_CALLBACK_MESSAGE_ID: Schema = Schema::member(
    id!("ChannelMessageCallback$MessageId"),
    "MessageId",
    0,
    &STRING,
);
pub(crate) static CHANNEL_MESSAGE_CALLBACK_CONTENT: Schema = Schema::member(
    id!("ChannelMessageCallback$Content"),
    "Content",
    1,
    &STRING,
);
pub(crate) static CHANNEL_MESSAGE_CALLBACK_METADATA: Schema = Schema::member(
    id!("ChannelMessageCallback$Metadata"),
    "Metadata",
    2,
    &STRING,
);

// ChannelMembershipSummary and ChannelMembershipSummaryList

pub(crate) static CHANNEL_MEMBERSHIP_SUMMARY: Schema = Schema::structure(
    id!("ChannelMembershipSummary"),
    &CHANNEL_MEMBERSHIP_SUMMARY_MEMBERS,
);
static CHANNEL_MEMBERSHIP_SUMMARY_MEMBERS: [&Schema; 1] = [&CHANNEL_MEMBERSHIP_SUMMARY_MEMBER];
pub(crate) static CHANNEL_MEMBERSHIP_SUMMARY_MEMBER: Schema = Schema::member(
    id!("ChannelMembershipSummary$Member"),
    "Member",
    0,
    &IDENTITY,
);

pub(crate) static CHANNEL_MEMBERSHIP_SUMMARY_LIST: Schema = Schema::list(
    id!("ChannelMembershipSummaryList"),
    &CHANNEL_MEMBERSHIP_SUMMARY_LIST_MEMBER,
);
pub(crate) static CHANNEL_MEMBERSHIP_SUMMARY_LIST_MEMBER: Schema = Schema::member(
    id!("ChannelMembershipSummaryList$member"),
    "member",
    0,
    &CHANNEL_MEMBERSHIP_SUMMARY,
);

// ChannelSummary

pub(crate) static CHANNEL_SUMMARY: Schema =
    Schema::structure(id!("ChannelSummary"), &CHANNEL_SUMMARY_MEMBERS);
static CHANNEL_SUMMARY_MEMBERS: [&Schema; 6] = [
    &CHANNEL_SUMMARY_NAME,
    &CHANNEL_SUMMARY_CHANNEL_ARN,
    &CHANNEL_SUMMARY_MODE,
    &CHANNEL_SUMMARY_PRIVACY,
    &CHANNEL_SUMMARY_METADATA,
    &CHANNEL_SUMMARY_LAST_MESSAGE_TIMESTAMP,
];
pub(crate) static CHANNEL_SUMMARY_NAME: Schema =
    Schema::member(id!("ChannelSummary$Name"), "Name", 0, &STRING);
pub(crate) static CHANNEL_SUMMARY_CHANNEL_ARN: Schema =
    Schema::member(id!("ChannelSummary$ChannelArn"), "ChannelArn", 1, &STRING);
pub(crate) static CHANNEL_SUMMARY_MODE: Schema =
    Schema::member(id!("ChannelSummary$Mode"), "Mode", 2, &CHANNEL_MODE);
pub(crate) static CHANNEL_SUMMARY_PRIVACY: Schema =
    Schema::member(id!("ChannelSummary$Privacy"), "Privacy", 3, &CHANNEL_PRIVACY);
pub(crate) static CHANNEL_SUMMARY_METADATA: Schema =
    Schema::member(id!("ChannelSummary$Metadata"), "Metadata", 4, &STRING);
pub(crate) static CHANNEL_SUMMARY_LAST_MESSAGE_TIMESTAMP: Schema = Schema::member(
    id!("ChannelSummary$LastMessageTimestamp"),
    "LastMessageTimestamp",
    5,
    &TIMESTAMP,
);

// AppInstanceUserMembershipSummary

pub(crate) static APP_INSTANCE_USER_MEMBERSHIP_SUMMARY: Schema = Schema::structure(
    id!("AppInstanceUserMembershipSummary"),
    &APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_MEMBERS,
);
static APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_MEMBERS: [&Schema; 3] = [
    &APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_TYPE,
    &APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_READ_MARKER_TIMESTAMP,
    &APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_SUB_CHANNEL_ID,
];
pub(crate) static APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_TYPE: Schema = Schema::member(
    id!("AppInstanceUserMembershipSummary$Type"),
    "Type",
    0,
    &CHANNEL_MEMBERSHIP_TYPE,
);
pub(crate) static APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_READ_MARKER_TIMESTAMP: Schema =
    Schema::member(
        id!("AppInstanceUserMembershipSummary$ReadMarkerTimestamp"),
        "ReadMarkerTimestamp",
        1,
        &TIMESTAMP,
    );
pub(crate) static APP_INSTANCE_USER_MEMBERSHIP_SUMMARY_SUB_CHANNEL_ID: Schema = Schema::member(
    id!("AppInstanceUserMembershipSummary$SubChannelId"),
    "SubChannelId",
    2,
    &STRING,
);

// ChannelMembershipForAppInstanceUserSummary

pub(crate) static CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY: Schema = Schema::structure(
    id!("ChannelMembershipForAppInstanceUserSummary"),
    &CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY_MEMBERS,
);
static CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY_MEMBERS: [&Schema; 2] = [
    &CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY_CHANNEL_SUMMARY,
    &CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY_APP_INSTANCE_USER_MEMBERSHIP_SUMMARY,
];
pub(crate) static CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY_CHANNEL_SUMMARY: Schema =
    Schema::member(
        id!("ChannelMembershipForAppInstanceUserSummary$ChannelSummary"),
        "ChannelSummary",
        0,
        &CHANNEL_SUMMARY,
    );
pub(crate) static CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY_APP_INSTANCE_USER_MEMBERSHIP_SUMMARY: Schema =
    Schema::member(
        id!("ChannelMembershipForAppInstanceUserSummary$AppInstanceUserMembershipSummary"),
        "AppInstanceUserMembershipSummary",
        1,
        &APP_INSTANCE_USER_MEMBERSHIP_SUMMARY,
    );

// SendChannelMessage

pub(crate) static SEND_CHANNEL_MESSAGE_INPUT: Schema = Schema::structure(
    id!("SendChannelMessageRequest"),
    &SEND_CHANNEL_MESSAGE_INPUT_MEMBERS,
);
static SEND_CHANNEL_MESSAGE_INPUT_MEMBERS: [&Schema; 8] = [
    &SEND_CHANNEL_MESSAGE_INPUT_CHANNEL_ARN,
    &SEND_CHANNEL_MESSAGE_INPUT_CONTENT,
    &SEND_CHANNEL_MESSAGE_INPUT_TYPE,
    &SEND_CHANNEL_MESSAGE_INPUT_PERSISTENCE,
    &SEND_CHANNEL_MESSAGE_INPUT_METADATA,
    &SEND_CHANNEL_MESSAGE_INPUT_CLIENT_REQUEST_TOKEN,
    &SEND_CHANNEL_MESSAGE_INPUT_CHIME_BEARER,
    &SEND_CHANNEL_MESSAGE_INPUT_MESSAGE_ATTRIBUTES,
];
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("SendChannelMessageRequest$ChannelArn"),
    "ChannelArn",
    0,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_CONTENT: Schema = Schema::member(
    id!("SendChannelMessageRequest$Content"),
    "Content",
    1,
    &STRING,
);
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_TYPE: Schema = Schema::member(
    id!("SendChannelMessageRequest$Type"),
    "Type",
    2,
    &CHANNEL_MESSAGE_TYPE,
);
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_PERSISTENCE: Schema = Schema::member(
    id!("SendChannelMessageRequest$Persistence"),
    "Persistence",
    3,
    &CHANNEL_MESSAGE_PERSISTENCE_TYPE,
);
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_METADATA: Schema = Schema::member(
    id!("SendChannelMessageRequest$Metadata"),
    "Metadata",
    4,
    &STRING,
);
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_CLIENT_REQUEST_TOKEN: Schema = Schema::member(
    id!("SendChannelMessageRequest$ClientRequestToken"),
    "ClientRequestToken",
    5,
    &STRING,
);
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_CHIME_BEARER: Schema = Schema::member(
    id!("SendChannelMessageRequest$ChimeBearer"),
    "ChimeBearer",
    6,
    &STRING,
)
.with_http_binding(CHIME_BEARER);
pub(crate) static SEND_CHANNEL_MESSAGE_INPUT_MESSAGE_ATTRIBUTES: Schema = Schema::member(
    id!("SendChannelMessageRequest$MessageAttributes"),
    "MessageAttributes",
    7,
    &MESSAGE_ATTRIBUTE_MAP,
);

pub(crate) static SEND_CHANNEL_MESSAGE_OUTPUT: Schema = Schema::structure(
    id!("SendChannelMessageResponse"),
    &SEND_CHANNEL_MESSAGE_OUTPUT_MEMBERS,
);
static SEND_CHANNEL_MESSAGE_OUTPUT_MEMBERS: [&Schema; 2] = [
    &SEND_CHANNEL_MESSAGE_OUTPUT_CHANNEL_ARN,
    &SEND_CHANNEL_MESSAGE_OUTPUT_MESSAGE_ID,
];
pub(crate) static SEND_CHANNEL_MESSAGE_OUTPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("SendChannelMessageResponse$ChannelArn"),
    "ChannelArn",
    0,
    &STRING,
);
pub(crate) static SEND_CHANNEL_MESSAGE_OUTPUT_MESSAGE_ID: Schema = Schema::member(
    id!("SendChannelMessageResponse$MessageId"),
    "MessageId",
    1,
    &STRING,
);

// GetChannelMessage

pub(crate) static GET_CHANNEL_MESSAGE_INPUT: Schema = Schema::structure(
    id!("GetChannelMessageRequest"),
    &GET_CHANNEL_MESSAGE_INPUT_MEMBERS,
);
static GET_CHANNEL_MESSAGE_INPUT_MEMBERS: [&Schema; 4] = [
    &GET_CHANNEL_MESSAGE_INPUT_CHANNEL_ARN,
    &GET_CHANNEL_MESSAGE_INPUT_MESSAGE_ID,
    &GET_CHANNEL_MESSAGE_INPUT_CHIME_BEARER,
    &GET_CHANNEL_MESSAGE_INPUT_SUB_CHANNEL_ID,
];
pub(crate) static GET_CHANNEL_MESSAGE_INPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("GetChannelMessageRequest$ChannelArn"),
    "ChannelArn",
    0,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static GET_CHANNEL_MESSAGE_INPUT_MESSAGE_ID: Schema = Schema::member(
    id!("GetChannelMessageRequest$MessageId"),
    "MessageId",
    1,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static GET_CHANNEL_MESSAGE_INPUT_CHIME_BEARER: Schema = Schema::member(
    id!("GetChannelMessageRequest$ChimeBearer"),
    "ChimeBearer",
    2,
    &STRING,
)
.with_http_binding(CHIME_BEARER);
pub(crate) static GET_CHANNEL_MESSAGE_INPUT_SUB_CHANNEL_ID: Schema = Schema::member(
    id!("GetChannelMessageRequest$SubChannelId"),
    "SubChannelId",
    3,
    &STRING,
)
.with_http_binding(HttpBinding::Query("sub-channel-id"));

pub(crate) static GET_CHANNEL_MESSAGE_OUTPUT: Schema = Schema::structure(
    id!("GetChannelMessageResponse"),
    &GET_CHANNEL_MESSAGE_OUTPUT_MEMBERS,
);
static GET_CHANNEL_MESSAGE_OUTPUT_MEMBERS: [&Schema; 2] = [
    &GET_CHANNEL_MESSAGE_OUTPUT_CHANNEL_ARN,
    &GET_CHANNEL_MESSAGE_OUTPUT_CHANNEL_MESSAGE,
];
pub(crate) static GET_CHANNEL_MESSAGE_OUTPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("GetChannelMessageResponse$ChannelArn"),
    "ChannelArn",
    0,
    &STRING,
);
pub(crate) static GET_CHANNEL_MESSAGE_OUTPUT_CHANNEL_MESSAGE: Schema = Schema::member(
    id!("GetChannelMessageResponse$ChannelMessage"),
    "ChannelMessage",
    1,
    &CHANNEL_MESSAGE,
);

// ChannelFlowCallback

pub(crate) static CHANNEL_FLOW_CALLBACK_INPUT: Schema = Schema::structure(
    id!("ChannelFlowCallbackRequest"),
    &CHANNEL_FLOW_CALLBACK_INPUT_MEMBERS,
);
static CHANNEL_FLOW_CALLBACK_INPUT_MEMBERS: [&Schema; 4] = [
    &CHANNEL_FLOW_CALLBACK_INPUT_CALLBACK_ID,
    &CHANNEL_FLOW_CALLBACK_INPUT_CHANNEL_ARN,
    &CHANNEL_FLOW_CALLBACK_INPUT_DELETE_RESOURCE,
    &CHANNEL_FLOW_CALLBACK_INPUT_CHANNEL_MESSAGE,
];
pub(crate) static CHANNEL_FLOW_CALLBACK_INPUT_CALLBACK_ID: Schema = Schema::member(
    id!("ChannelFlowCallbackRequest$CallbackId"),
    "CallbackId",
    0,
    &STRING,
);
pub(crate) static CHANNEL_FLOW_CALLBACK_INPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("ChannelFlowCallbackRequest$ChannelArn"),
    "ChannelArn",
    1,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static CHANNEL_FLOW_CALLBACK_INPUT_DELETE_RESOURCE: Schema = Schema::member(
    id!("ChannelFlowCallbackRequest$DeleteResource"),
    "DeleteResource",
    2,
    &BOOLEAN,
);
pub(crate) static CHANNEL_FLOW_CALLBACK_INPUT_CHANNEL_MESSAGE: Schema = Schema::member(
    id!("ChannelFlowCallbackRequest$ChannelMessage"),
    "ChannelMessage",
    3,
    &CHANNEL_MESSAGE_CALLBACK,
);

pub(crate) static CHANNEL_FLOW_CALLBACK_OUTPUT: Schema = Schema::structure(
    id!("ChannelFlowCallbackResponse"),
    &CHANNEL_FLOW_CALLBACK_OUTPUT_MEMBERS,
);
static CHANNEL_FLOW_CALLBACK_OUTPUT_MEMBERS: [&Schema; 2] = [
    &CHANNEL_FLOW_CALLBACK_OUTPUT_CHANNEL_ARN,
    &CHANNEL_FLOW_CALLBACK_OUTPUT_CALLBACK_ID,
];
pub(crate) static CHANNEL_FLOW_CALLBACK_OUTPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("ChannelFlowCallbackResponse$ChannelArn"),
    "ChannelArn",
    0,
    &STRING,
);
pub(crate) static CHANNEL_FLOW_CALLBACK_OUTPUT_CALLBACK_ID: Schema = Schema::member(
    id!("ChannelFlowCallbackResponse$CallbackId"),
    "CallbackId",
    1,
    &STRING,
);

// ListChannelMemberships

pub(crate) static LIST_CHANNEL_MEMBERSHIPS_INPUT: Schema = Schema::structure(
    id!("ListChannelMembershipsRequest"),
    &LIST_CHANNEL_MEMBERSHIPS_INPUT_MEMBERS,
);
static LIST_CHANNEL_MEMBERSHIPS_INPUT_MEMBERS: [&Schema; 5] = [
    &LIST_CHANNEL_MEMBERSHIPS_INPUT_CHANNEL_ARN,
    &LIST_CHANNEL_MEMBERSHIPS_INPUT_TYPE,
    &LIST_CHANNEL_MEMBERSHIPS_INPUT_MAX_RESULTS,
    &LIST_CHANNEL_MEMBERSHIPS_INPUT_NEXT_TOKEN,
    &LIST_CHANNEL_MEMBERSHIPS_INPUT_CHIME_BEARER,
];
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_INPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("ListChannelMembershipsRequest$ChannelArn"),
    "ChannelArn",
    0,
    &STRING,
)
.with_http_binding(HttpBinding::Label);
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_INPUT_TYPE: Schema = Schema::member(
    id!("ListChannelMembershipsRequest$Type"),
    "Type",
    1,
    &CHANNEL_MEMBERSHIP_TYPE,
)
.with_http_binding(HttpBinding::Query("type"));
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_INPUT_MAX_RESULTS: Schema = Schema::member(
    id!("ListChannelMembershipsRequest$MaxResults"),
    "MaxResults",
    2,
    &INTEGER,
)
.with_http_binding(HttpBinding::Query("max-results"));
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_INPUT_NEXT_TOKEN: Schema = Schema::member(
    id!("ListChannelMembershipsRequest$NextToken"),
    "NextToken",
    3,
    &STRING,
)
.with_http_binding(HttpBinding::Query("next-token"));
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_INPUT_CHIME_BEARER: Schema = Schema::member(
    id!("ListChannelMembershipsRequest$ChimeBearer"),
    "ChimeBearer",
    4,
    &STRING,
)
.with_http_binding(CHIME_BEARER);

pub(crate) static LIST_CHANNEL_MEMBERSHIPS_OUTPUT: Schema = Schema::structure(
    id!("ListChannelMembershipsResponse"),
    &LIST_CHANNEL_MEMBERSHIPS_OUTPUT_MEMBERS,
);
static LIST_CHANNEL_MEMBERSHIPS_OUTPUT_MEMBERS: [&Schema; 3] = [
    &LIST_CHANNEL_MEMBERSHIPS_OUTPUT_CHANNEL_ARN,
    &LIST_CHANNEL_MEMBERSHIPS_OUTPUT_CHANNEL_MEMBERSHIPS,
    &LIST_CHANNEL_MEMBERSHIPS_OUTPUT_NEXT_TOKEN,
];
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_OUTPUT_CHANNEL_ARN: Schema = Schema::member(
    id!("ListChannelMembershipsResponse$ChannelArn"),
    "ChannelArn",
    0,
    &STRING,
);
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_OUTPUT_CHANNEL_MEMBERSHIPS: Schema = Schema::member(
    id!("ListChannelMembershipsResponse$ChannelMemberships"),
    "ChannelMemberships",
    1,
    &CHANNEL_MEMBERSHIP_SUMMARY_LIST,
);
pub(crate) static LIST_CHANNEL_MEMBERSHIPS_OUTPUT_NEXT_TOKEN: Schema = Schema::member(
    id!("ListChannelMembershipsResponse$NextToken"),
    "NextToken",
    2,
    &STRING,
);

// DescribeChannelMembershipForAppInstanceUser

pub(crate) static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT: Schema =
    Schema::structure(
        id!("DescribeChannelMembershipForAppInstanceUserRequest"),
        &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_MEMBERS,
    );
static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_MEMBERS: [&Schema; 3] = [
    &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_CHANNEL_ARN,
    &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_APP_INSTANCE_USER_ARN,
    &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_CHIME_BEARER,
];
pub(crate) static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_CHANNEL_ARN: Schema =
    Schema::member(
        id!("DescribeChannelMembershipForAppInstanceUserRequest$ChannelArn"),
        "ChannelArn",
        0,
        &STRING,
    )
    .with_http_binding(HttpBinding::Label);
pub(crate) static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_APP_INSTANCE_USER_ARN: Schema =
    Schema::member(
        id!("DescribeChannelMembershipForAppInstanceUserRequest$AppInstanceUserArn"),
        "AppInstanceUserArn",
        1,
        &STRING,
    )
    .with_http_binding(HttpBinding::Query("app-instance-user-arn"));
pub(crate) static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_CHIME_BEARER: Schema =
    Schema::member(
        id!("DescribeChannelMembershipForAppInstanceUserRequest$ChimeBearer"),
        "ChimeBearer",
        2,
        &STRING,
    )
    .with_http_binding(CHIME_BEARER);

pub(crate) static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT: Schema =
    Schema::structure(
        id!("DescribeChannelMembershipForAppInstanceUserResponse"),
        &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT_MEMBERS,
    );
static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT_MEMBERS: [&Schema; 1] =
    [&DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT_CHANNEL_MEMBERSHIP];
pub(crate) static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT_CHANNEL_MEMBERSHIP: Schema =
    Schema::member(
        id!("DescribeChannelMembershipForAppInstanceUserResponse$ChannelMembership"),
        "ChannelMembership",
        0,
        &CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY,
    );

// errors

macro_rules! exception_schema {
    ($schema:ident, $members:ident, $code:ident, $message:ident, $name:literal) => {
        pub(crate) static $schema: Schema = Schema::structure(id!($name), &$members);
        static $members: [&Schema; 2] = [&$code, &$message];
        pub(crate) static $code: Schema = Schema::member(
            ShapeId::from_static(concat!("com.amazonaws.chimesdkmessaging#", $name, "$Code")),
            "Code",
            0,
            &STRING,
        );
        pub(crate) static $message: Schema = Schema::member(
            ShapeId::from_static(concat!("com.amazonaws.chimesdkmessaging#", $name, "$Message")),
            "Message",
            1,
            &STRING,
        );
    };
}

exception_schema!(
    BAD_REQUEST_EXCEPTION,
    BAD_REQUEST_EXCEPTION_MEMBERS,
    BAD_REQUEST_EXCEPTION_CODE,
    BAD_REQUEST_EXCEPTION_MESSAGE,
    "BadRequestException"
);
exception_schema!(
    FORBIDDEN_EXCEPTION,
    FORBIDDEN_EXCEPTION_MEMBERS,
    FORBIDDEN_EXCEPTION_CODE,
    FORBIDDEN_EXCEPTION_MESSAGE,
    "ForbiddenException"
);
exception_schema!(
    NOT_FOUND_EXCEPTION,
    NOT_FOUND_EXCEPTION_MEMBERS,
    NOT_FOUND_EXCEPTION_CODE,
    NOT_FOUND_EXCEPTION_MESSAGE,
    "NotFoundException"
);
exception_schema!(
    RESOURCE_LIMIT_EXCEEDED_EXCEPTION,
    RESOURCE_LIMIT_EXCEEDED_EXCEPTION_MEMBERS,
    RESOURCE_LIMIT_EXCEEDED_EXCEPTION_CODE,
    RESOURCE_LIMIT_EXCEEDED_EXCEPTION_MESSAGE,
    "ResourceLimitExceededException"
);
exception_schema!(
    SERVICE_FAILURE_EXCEPTION,
    SERVICE_FAILURE_EXCEPTION_MEMBERS,
    SERVICE_FAILURE_EXCEPTION_CODE,
    SERVICE_FAILURE_EXCEPTION_MESSAGE,
    "ServiceFailureException"
);

pub(crate) static THROTTLED_CLIENT_EXCEPTION: Schema = Schema::structure(
    id!("ThrottledClientException"),
    &THROTTLED_CLIENT_EXCEPTION_MEMBERS,
);
static THROTTLED_CLIENT_EXCEPTION_MEMBERS: [&Schema; 3] = [
    &THROTTLED_CLIENT_EXCEPTION_CODE,
    &THROTTLED_CLIENT_EXCEPTION_MESSAGE,
    &THROTTLED_CLIENT_EXCEPTION_RETRY_AFTER_SECONDS,
];
pub(crate) static THROTTLED_CLIENT_EXCEPTION_CODE: Schema = Schema::member(
    id!("ThrottledClientException$Code"),
    "Code",
    0,
    &STRING,
);
pub(crate) static THROTTLED_CLIENT_EXCEPTION_MESSAGE: Schema = Schema::member(
    id!("ThrottledClientException$Message"),
    "Message",
    1,
    &STRING,
);
pub(crate) static THROTTLED_CLIENT_EXCEPTION_RETRY_AFTER_SECONDS: Schema = Schema::member(
    id!("ThrottledClientException$RetryAfterSeconds"),
    "RetryAfterSeconds",
    2,
    &INTEGER,
)
.with_http_binding(HttpBinding::Header("Retry-After"));

static ROOTS: [&Schema; 16] = [
    &SEND_CHANNEL_MESSAGE_INPUT,
    &SEND_CHANNEL_MESSAGE_OUTPUT,
    &GET_CHANNEL_MESSAGE_INPUT,
    &GET_CHANNEL_MESSAGE_OUTPUT,
    &CHANNEL_FLOW_CALLBACK_INPUT,
    &CHANNEL_FLOW_CALLBACK_OUTPUT,
    &LIST_CHANNEL_MEMBERSHIPS_INPUT,
    &LIST_CHANNEL_MEMBERSHIPS_OUTPUT,
    &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT,
    &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT,
    &BAD_REQUEST_EXCEPTION,
    &FORBIDDEN_EXCEPTION,
    &NOT_FOUND_EXCEPTION,
    &RESOURCE_LIMIT_EXCEEDED_EXCEPTION,
    &SERVICE_FAILURE_EXCEPTION,
    &THROTTLED_CLIENT_EXCEPTION,
];

static REGISTRY: LazyLock<Result<ShapeRegistry, RegistryError>> =
    LazyLock::new(|| ShapeRegistry::builder().roots(ROOTS).build());

/// Every shape of the service, keyed by shape ID.
///
/// The registry is built on first use. Building fails only if the descriptors are inconsistent.
pub fn shape_registry() -> Result<&'static ShapeRegistry, RegistryError> {
    LazyLock::force(&REGISTRY).as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod test {
    use super::shape_registry;

    #[test]
    fn registry_builds() {
        let registry = shape_registry().expect("descriptors are consistent");
        let members = registry
            .members("com.amazonaws.chimesdkmessaging#AppInstanceUserMembershipSummary")
            .unwrap();
        let names: Vec<_> = members.iter().map(|m| m.wire_name(true)).collect();
        assert_eq!(vec!["Type", "ReadMarkerTimestamp", "SubChannelId"], names);
        assert!(registry.contains("com.amazonaws.chimesdkmessaging#MessageAttributeMap$value"));
        assert!(registry.contains("smithy.api#String"));
    }
}
