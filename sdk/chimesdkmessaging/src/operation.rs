/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Static descriptions of the operations of the service.

use crate::shapes::*;
use sdk_http::operation::{HttpTrait, OperationSchema};

const SERVICE: &str = "ChimeSDKMessaging";

/// Sends a message to a particular channel that the member is a part of.
pub static SEND_CHANNEL_MESSAGE: OperationSchema = OperationSchema::new(
    SERVICE,
    "SendChannelMessage",
    &SEND_CHANNEL_MESSAGE_INPUT,
    &SEND_CHANNEL_MESSAGE_OUTPUT,
)
.with_http(HttpTrait::new("POST", "/channels/{ChannelArn}/messages").with_code(201));

/// Gets the full details of a channel message.
pub static GET_CHANNEL_MESSAGE: OperationSchema = OperationSchema::new(
    SERVICE,
    "GetChannelMessage",
    &GET_CHANNEL_MESSAGE_INPUT,
    &GET_CHANNEL_MESSAGE_OUTPUT,
)
.with_http(HttpTrait::new(
    "GET",
    "/channels/{ChannelArn}/messages/{MessageId}",
));

/// Calls back the service after a channel flow processor handled a message.
pub static CHANNEL_FLOW_CALLBACK: OperationSchema = OperationSchema::new(
    SERVICE,
    "ChannelFlowCallback",
    &CHANNEL_FLOW_CALLBACK_INPUT,
    &CHANNEL_FLOW_CALLBACK_OUTPUT,
)
.with_http(HttpTrait::new(
    "POST",
    "/channels/{ChannelArn}?operation=channel-flow-callback",
));

/// Lists all channel memberships in a channel.
pub static LIST_CHANNEL_MEMBERSHIPS: OperationSchema = OperationSchema::new(
    SERVICE,
    "ListChannelMemberships",
    &LIST_CHANNEL_MEMBERSHIPS_INPUT,
    &LIST_CHANNEL_MEMBERSHIPS_OUTPUT,
)
.with_http(HttpTrait::new("GET", "/channels/{ChannelArn}/memberships"));

/// Returns the details of a channel based on the membership of the specified `AppInstanceUser`.
pub static DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER: OperationSchema =
    OperationSchema::new(
        SERVICE,
        "DescribeChannelMembershipForAppInstanceUser",
        &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT,
        &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT,
    )
    .with_http(HttpTrait::new(
        "GET",
        "/channels/{ChannelArn}?scope=app-instance-user-membership",
    ));
