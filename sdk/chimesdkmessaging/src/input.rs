/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.

use crate::model::{
    ChannelMembershipType, ChannelMessageCallback, ChannelMessagePersistenceType,
    ChannelMessageType, MessageAttributeValue,
};
use std::collections::BTreeMap;

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendChannelMessageInput {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The content of the message.
    pub content: Option<String>,
    /// The type of message, `CONTROL` or `STANDARD`.
    pub r#type: Option<ChannelMessageType>,
    /// Whether the message is persisted on the back end. Required.
    pub persistence: Option<ChannelMessagePersistenceType>,
    /// The optional metadata for each message.
    pub metadata: Option<String>,
    /// The idempotency token for each client request.
    pub client_request_token: Option<String>,
    /// The `AppInstanceUserArn` of the user that makes the API call.
    pub chime_bearer: Option<String>,
    /// The attributes for the message, used for message filtering.
    pub message_attributes: Option<BTreeMap<String, MessageAttributeValue>>,
}

impl SendChannelMessageInput {
    /// Creates a new builder-style object to manufacture [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
    pub fn builder() -> crate::input::send_channel_message_input::Builder {
        crate::input::send_channel_message_input::Builder::default()
    }
}

/// See [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
pub mod send_channel_message_input {
    use crate::model::{ChannelMessagePersistenceType, ChannelMessageType, MessageAttributeValue};
    use std::collections::BTreeMap;

    /// A builder for [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) content: Option<String>,
        pub(crate) r#type: Option<ChannelMessageType>,
        pub(crate) persistence: Option<ChannelMessagePersistenceType>,
        pub(crate) metadata: Option<String>,
        pub(crate) client_request_token: Option<String>,
        pub(crate) chime_bearer: Option<String>,
        pub(crate) message_attributes: Option<BTreeMap<String, MessageAttributeValue>>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_arn(mut self, input: Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn content(mut self, input: impl Into<String>) -> Self {
            self.content = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_content(mut self, input: Option<String>) -> Self {
            self.content = input;
            self
        }
        #[allow(missing_docs)]
        pub fn r#type(mut self, input: ChannelMessageType) -> Self {
            self.r#type = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_type(mut self, input: Option<ChannelMessageType>) -> Self {
            self.r#type = input;
            self
        }
        #[allow(missing_docs)]
        pub fn persistence(mut self, input: ChannelMessagePersistenceType) -> Self {
            self.persistence = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_persistence(mut self, input: Option<ChannelMessagePersistenceType>) -> Self {
            self.persistence = input;
            self
        }
        #[allow(missing_docs)]
        pub fn metadata(mut self, input: impl Into<String>) -> Self {
            self.metadata = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_metadata(mut self, input: Option<String>) -> Self {
            self.metadata = input;
            self
        }
        #[allow(missing_docs)]
        pub fn client_request_token(mut self, input: impl Into<String>) -> Self {
            self.client_request_token = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_client_request_token(mut self, input: Option<String>) -> Self {
            self.client_request_token = input;
            self
        }
        #[allow(missing_docs)]
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_chime_bearer(mut self, input: Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Adds a key-value pair to `message_attributes`.
        pub fn message_attributes(
            mut self,
            k: impl Into<String>,
            v: MessageAttributeValue,
        ) -> Self {
            self.message_attributes
                .get_or_insert_with(BTreeMap::new)
                .insert(k.into(), v);
            self
        }
        #[allow(missing_docs)]
        pub fn set_message_attributes(
            mut self,
            input: Option<BTreeMap<String, MessageAttributeValue>>,
        ) -> Self {
            self.message_attributes = input;
            self
        }
        /// Consumes the builder and constructs a [`SendChannelMessageInput`](crate::input::SendChannelMessageInput)
        pub fn build(self) -> crate::input::SendChannelMessageInput {
            crate::input::SendChannelMessageInput {
                channel_arn: self.channel_arn,
                content: self.content,
                r#type: self.r#type,
                persistence: self.persistence,
                metadata: self.metadata,
                client_request_token: self.client_request_token,
                chime_bearer: self.chime_bearer,
                message_attributes: self.message_attributes,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetChannelMessageInput {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The ID of the message.
    pub message_id: Option<String>,
    /// The `AppInstanceUserArn` of the user that makes the API call.
    pub chime_bearer: Option<String>,
    /// The ID of the SubChannel in the request. Only required when getting messages in a
    /// SubChannel that the user belongs to.
    pub sub_channel_id: Option<String>,
}

impl GetChannelMessageInput {
    /// Creates a new builder-style object to manufacture [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
    pub fn builder() -> crate::input::get_channel_message_input::Builder {
        crate::input::get_channel_message_input::Builder::default()
    }
}

/// See [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
pub mod get_channel_message_input {
    /// A builder for [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) message_id: Option<String>,
        pub(crate) chime_bearer: Option<String>,
        pub(crate) sub_channel_id: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_arn(mut self, input: Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn message_id(mut self, input: impl Into<String>) -> Self {
            self.message_id = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_message_id(mut self, input: Option<String>) -> Self {
            self.message_id = input;
            self
        }
        #[allow(missing_docs)]
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_chime_bearer(mut self, input: Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        #[allow(missing_docs)]
        pub fn sub_channel_id(mut self, input: impl Into<String>) -> Self {
            self.sub_channel_id = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_sub_channel_id(mut self, input: Option<String>) -> Self {
            self.sub_channel_id = input;
            self
        }
        /// Consumes the builder and constructs a [`GetChannelMessageInput`](crate::input::GetChannelMessageInput)
        pub fn build(self) -> crate::input::GetChannelMessageInput {
            crate::input::GetChannelMessageInput {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
                chime_bearer: self.chime_bearer,
                sub_channel_id: self.sub_channel_id,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelFlowCallbackInput {
    /// The identifier passed to the processor by the service when invoked. Use the
    /// identifier to call back the service.
    pub callback_id: Option<String>,
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// When a processor determines that a message needs to be dropped, set to `true`.
    pub delete_resource: Option<bool>,
    /// Stores information about the processed message.
    pub channel_message: Option<ChannelMessageCallback>,
}

impl ChannelFlowCallbackInput {
    /// Creates a new builder-style object to manufacture [`ChannelFlowCallbackInput`](crate::input::ChannelFlowCallbackInput)
    pub fn builder() -> crate::input::channel_flow_callback_input::Builder {
        crate::input::channel_flow_callback_input::Builder::default()
    }
}

/// See [`ChannelFlowCallbackInput`](crate::input::ChannelFlowCallbackInput)
pub mod channel_flow_callback_input {
    use crate::model::ChannelMessageCallback;

    /// A builder for [`ChannelFlowCallbackInput`](crate::input::ChannelFlowCallbackInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) callback_id: Option<String>,
        pub(crate) channel_arn: Option<String>,
        pub(crate) delete_resource: Option<bool>,
        pub(crate) channel_message: Option<ChannelMessageCallback>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn callback_id(mut self, input: impl Into<String>) -> Self {
            self.callback_id = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_callback_id(mut self, input: Option<String>) -> Self {
            self.callback_id = input;
            self
        }
        #[allow(missing_docs)]
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_arn(mut self, input: Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn delete_resource(mut self, input: bool) -> Self {
            self.delete_resource = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_delete_resource(mut self, input: Option<bool>) -> Self {
            self.delete_resource = input;
            self
        }
        #[allow(missing_docs)]
        pub fn channel_message(mut self, input: ChannelMessageCallback) -> Self {
            self.channel_message = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_message(mut self, input: Option<ChannelMessageCallback>) -> Self {
            self.channel_message = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelFlowCallbackInput`](crate::input::ChannelFlowCallbackInput)
        pub fn build(self) -> crate::input::ChannelFlowCallbackInput {
            crate::input::ChannelFlowCallbackInput {
                callback_id: self.callback_id,
                channel_arn: self.channel_arn,
                delete_resource: self.delete_resource,
                channel_message: self.channel_message,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListChannelMembershipsInput {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The membership type of a user, `DEFAULT` or `HIDDEN`.
    pub r#type: Option<ChannelMembershipType>,
    /// The maximum number of channel memberships that you want returned.
    pub max_results: Option<i32>,
    /// The token passed by previous API calls until all requested channel memberships are
    /// returned.
    pub next_token: Option<String>,
    /// The `AppInstanceUserArn` of the user that makes the API call.
    pub chime_bearer: Option<String>,
}

impl ListChannelMembershipsInput {
    /// Creates a new builder-style object to manufacture [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
    pub fn builder() -> crate::input::list_channel_memberships_input::Builder {
        crate::input::list_channel_memberships_input::Builder::default()
    }
}

/// See [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
pub mod list_channel_memberships_input {
    use crate::model::ChannelMembershipType;

    /// A builder for [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) r#type: Option<ChannelMembershipType>,
        pub(crate) max_results: Option<i32>,
        pub(crate) next_token: Option<String>,
        pub(crate) chime_bearer: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_arn(mut self, input: Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn r#type(mut self, input: ChannelMembershipType) -> Self {
            self.r#type = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_type(mut self, input: Option<ChannelMembershipType>) -> Self {
            self.r#type = input;
            self
        }
        #[allow(missing_docs)]
        pub fn max_results(mut self, input: i32) -> Self {
            self.max_results = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_max_results(mut self, input: Option<i32>) -> Self {
            self.max_results = input;
            self
        }
        #[allow(missing_docs)]
        pub fn next_token(mut self, input: impl Into<String>) -> Self {
            self.next_token = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_next_token(mut self, input: Option<String>) -> Self {
            self.next_token = input;
            self
        }
        #[allow(missing_docs)]
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_chime_bearer(mut self, input: Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`ListChannelMembershipsInput`](crate::input::ListChannelMembershipsInput)
        pub fn build(self) -> crate::input::ListChannelMembershipsInput {
            crate::input::ListChannelMembershipsInput {
                channel_arn: self.channel_arn,
                r#type: self.r#type,
                max_results: self.max_results,
                next_token: self.next_token,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeChannelMembershipForAppInstanceUserInput {
    /// The ARN of the channel to which the user belongs.
    pub channel_arn: Option<String>,
    /// The ARN of the user in a channel.
    pub app_instance_user_arn: Option<String>,
    /// The `AppInstanceUserArn` of the user that makes the API call.
    pub chime_bearer: Option<String>,
}

impl DescribeChannelMembershipForAppInstanceUserInput {
    /// Creates a new builder-style object to manufacture [`DescribeChannelMembershipForAppInstanceUserInput`](crate::input::DescribeChannelMembershipForAppInstanceUserInput)
    pub fn builder() -> crate::input::describe_channel_membership_for_app_instance_user_input::Builder
    {
        crate::input::describe_channel_membership_for_app_instance_user_input::Builder::default()
    }
}

/// See [`DescribeChannelMembershipForAppInstanceUserInput`](crate::input::DescribeChannelMembershipForAppInstanceUserInput)
pub mod describe_channel_membership_for_app_instance_user_input {
    /// A builder for [`DescribeChannelMembershipForAppInstanceUserInput`](crate::input::DescribeChannelMembershipForAppInstanceUserInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) app_instance_user_arn: Option<String>,
        pub(crate) chime_bearer: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn channel_arn(mut self, input: impl Into<String>) -> Self {
            self.channel_arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_arn(mut self, input: Option<String>) -> Self {
            self.channel_arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn app_instance_user_arn(mut self, input: impl Into<String>) -> Self {
            self.app_instance_user_arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_app_instance_user_arn(mut self, input: Option<String>) -> Self {
            self.app_instance_user_arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn chime_bearer(mut self, input: impl Into<String>) -> Self {
            self.chime_bearer = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_chime_bearer(mut self, input: Option<String>) -> Self {
            self.chime_bearer = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeChannelMembershipForAppInstanceUserInput`](crate::input::DescribeChannelMembershipForAppInstanceUserInput)
        pub fn build(self) -> crate::input::DescribeChannelMembershipForAppInstanceUserInput {
            crate::input::DescribeChannelMembershipForAppInstanceUserInput {
                channel_arn: self.channel_arn,
                app_instance_user_arn: self.app_instance_user_arn,
                chime_bearer: self.chime_bearer,
            }
        }
    }
}
