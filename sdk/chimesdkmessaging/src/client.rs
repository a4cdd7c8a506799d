/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Client for Amazon Chime SDK Messaging.

use crate::error::{Error, ERRORS};
use crate::input::{
    ChannelFlowCallbackInput, DescribeChannelMembershipForAppInstanceUserInput,
    GetChannelMessageInput, ListChannelMembershipsInput, SendChannelMessageInput,
};
use crate::operation;
use crate::output::{
    ChannelFlowCallbackOutput, DescribeChannelMembershipForAppInstanceUserOutput,
    GetChannelMessageOutput, ListChannelMembershipsOutput, SendChannelMessageOutput,
};
use sdk_http::client::HttpConnector;
use sdk_http::config::Config;
use sdk_http::protocol::ProtocolSettings;
use sdk_http::result::SdkError;
use std::sync::LazyLock;

/// Client for Amazon Chime SDK Messaging.
///
/// Requests are marshalled with the REST-JSON protocol and sent through `C`.
///
/// ```rust
/// use sdk_chimesdkmessaging::{Client, Config};
/// use sdk_http::test_connection::TestConnection;
///
/// let config = Config::builder()
///     .endpoint_url("https://messaging-chime.us-east-1.amazonaws.com")
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
            inner: sdk_http::client::Client::new(conn, &conf, ProtocolSettings::rest_json()),
        }
    }

    /// Returns the connector requests are sent through.
    pub fn conn(&self) -> &C {
        self.inner.connector()
    }

    /// Sends a message to a particular channel that the member is a part of.
    pub fn send_channel_message(
        &self,
        input: &SendChannelMessageInput,
    ) -> Result<SendChannelMessageOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::SEND_CHANNEL_MESSAGE, input, &ERRORS)
    }

    /// Gets the full details of a channel message.
    pub fn get_channel_message(
        &self,
        input: &GetChannelMessageInput,
    ) -> Result<GetChannelMessageOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::GET_CHANNEL_MESSAGE, input, &ERRORS)
    }

    /// Calls back the service after a channel flow processor handled a message.
    pub fn channel_flow_callback(
        &self,
        input: &ChannelFlowCallbackInput,
    ) -> Result<ChannelFlowCallbackOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::CHANNEL_FLOW_CALLBACK, input, &ERRORS)
    }

    /// Lists all channel memberships in a channel.
    pub fn list_channel_memberships(
        &self,
        input: &ListChannelMembershipsInput,
    ) -> Result<ListChannelMembershipsOutput, SdkError<Error>> {
        self.inner
            .invoke(&operation::LIST_CHANNEL_MEMBERSHIPS, input, &ERRORS)
    }

    /// Returns the details of a channel based on the membership of the specified
    /// `AppInstanceUser`.
    pub fn describe_channel_membership_for_app_instance_user(
        &self,
        input: &DescribeChannelMembershipForAppInstanceUserInput,
    ) -> Result<DescribeChannelMembershipForAppInstanceUserOutput, SdkError<Error>> {
        self.inner.invoke(
            &operation::DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER,
            input,
            &ERRORS,
        )
    }
}
