/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::{
    ChannelMembershipForAppInstanceUserSummary, ChannelMembershipSummary, ChannelMessage,
};

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SendChannelMessageOutput {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The ID string assigned to each message.
    pub message_id: Option<String>,
}

impl SendChannelMessageOutput {
    /// Creates a new builder-style object to manufacture [`SendChannelMessageOutput`](crate::output::SendChannelMessageOutput)
    pub fn builder() -> crate::output::send_channel_message_output::Builder {
        crate::output::send_channel_message_output::Builder::default()
    }
}

/// See [`SendChannelMessageOutput`](crate::output::SendChannelMessageOutput)
pub mod send_channel_message_output {
    /// A builder for [`SendChannelMessageOutput`](crate::output::SendChannelMessageOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) message_id: Option<String>,
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
        /// Consumes the builder and constructs a [`SendChannelMessageOutput`](crate::output::SendChannelMessageOutput)
        pub fn build(self) -> crate::output::SendChannelMessageOutput {
            crate::output::SendChannelMessageOutput {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetChannelMessageOutput {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The details of and content in the message.
    pub channel_message: Option<ChannelMessage>,
}

impl GetChannelMessageOutput {
    /// Creates a new builder-style object to manufacture [`GetChannelMessageOutput`](crate::output::GetChannelMessageOutput)
    pub fn builder() -> crate::output::get_channel_message_output::Builder {
        crate::output::get_channel_message_output::Builder::default()
    }
}

/// See [`GetChannelMessageOutput`](crate::output::GetChannelMessageOutput)
pub mod get_channel_message_output {
    use crate::model::ChannelMessage;

    /// A builder for [`GetChannelMessageOutput`](crate::output::GetChannelMessageOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) channel_message: Option<ChannelMessage>,
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
        pub fn channel_message(mut self, input: ChannelMessage) -> Self {
            self.channel_message = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_message(mut self, input: Option<ChannelMessage>) -> Self {
            self.channel_message = input;
            self
        }
        /// Consumes the builder and constructs a [`GetChannelMessageOutput`](crate::output::GetChannelMessageOutput)
        pub fn build(self) -> crate::output::GetChannelMessageOutput {
            crate::output::GetChannelMessageOutput {
                channel_arn: self.channel_arn,
                channel_message: self.channel_message,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelFlowCallbackOutput {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The call back ID passed in the request.
    pub callback_id: Option<String>,
}

impl ChannelFlowCallbackOutput {
    /// Creates a new builder-style object to manufacture [`ChannelFlowCallbackOutput`](crate::output::ChannelFlowCallbackOutput)
    pub fn builder() -> crate::output::channel_flow_callback_output::Builder {
        crate::output::channel_flow_callback_output::Builder::default()
    }
}

/// See [`ChannelFlowCallbackOutput`](crate::output::ChannelFlowCallbackOutput)
pub mod channel_flow_callback_output {
    /// A builder for [`ChannelFlowCallbackOutput`](crate::output::ChannelFlowCallbackOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) callback_id: Option<String>,
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
        pub fn callback_id(mut self, input: impl Into<String>) -> Self {
            self.callback_id = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_callback_id(mut self, input: Option<String>) -> Self {
            self.callback_id = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelFlowCallbackOutput`](crate::output::ChannelFlowCallbackOutput)
        pub fn build(self) -> crate::output::ChannelFlowCallbackOutput {
            crate::output::ChannelFlowCallbackOutput {
                channel_arn: self.channel_arn,
                callback_id: self.callback_id,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListChannelMembershipsOutput {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The information for the requested channel memberships.
    pub channel_memberships: Option<Vec<ChannelMembershipSummary>>,
    /// The token passed by previous API calls until all requested channel memberships are
    /// returned.
    pub next_token: Option<String>,
}

impl ListChannelMembershipsOutput {
    /// Creates a new builder-style object to manufacture [`ListChannelMembershipsOutput`](crate::output::ListChannelMembershipsOutput)
    pub fn builder() -> crate::output::list_channel_memberships_output::Builder {
        crate::output::list_channel_memberships_output::Builder::default()
    }
}

/// See [`ListChannelMembershipsOutput`](crate::output::ListChannelMembershipsOutput)
pub mod list_channel_memberships_output {
    use crate::model::ChannelMembershipSummary;

    /// A builder for [`ListChannelMembershipsOutput`](crate::output::ListChannelMembershipsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) channel_memberships: Option<Vec<ChannelMembershipSummary>>,
        pub(crate) next_token: Option<String>,
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
        /// Appends an item to `channel_memberships`.
        pub fn channel_memberships(mut self, input: ChannelMembershipSummary) -> Self {
            self.channel_memberships
                .get_or_insert_with(Vec::new)
                .push(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_memberships(
            mut self,
            input: Option<Vec<ChannelMembershipSummary>>,
        ) -> Self {
            self.channel_memberships = input;
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
        /// Consumes the builder and constructs a [`ListChannelMembershipsOutput`](crate::output::ListChannelMembershipsOutput)
        pub fn build(self) -> crate::output::ListChannelMembershipsOutput {
            crate::output::ListChannelMembershipsOutput {
                channel_arn: self.channel_arn,
                channel_memberships: self.channel_memberships,
                next_token: self.next_token,
            }
        }
    }
}

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeChannelMembershipForAppInstanceUserOutput {
    /// The channel to which a user belongs.
    pub channel_membership: Option<ChannelMembershipForAppInstanceUserSummary>,
}

impl DescribeChannelMembershipForAppInstanceUserOutput {
    /// Creates a new builder-style object to manufacture [`DescribeChannelMembershipForAppInstanceUserOutput`](crate::output::DescribeChannelMembershipForAppInstanceUserOutput)
    pub fn builder(
    ) -> crate::output::describe_channel_membership_for_app_instance_user_output::Builder {
        crate::output::describe_channel_membership_for_app_instance_user_output::Builder::default()
    }
}

/// See [`DescribeChannelMembershipForAppInstanceUserOutput`](crate::output::DescribeChannelMembershipForAppInstanceUserOutput)
pub mod describe_channel_membership_for_app_instance_user_output {
    use crate::model::ChannelMembershipForAppInstanceUserSummary;

    /// A builder for [`DescribeChannelMembershipForAppInstanceUserOutput`](crate::output::DescribeChannelMembershipForAppInstanceUserOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_membership: Option<ChannelMembershipForAppInstanceUserSummary>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn channel_membership(mut self, input: ChannelMembershipForAppInstanceUserSummary) -> Self {
            self.channel_membership = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_membership(
            mut self,
            input: Option<ChannelMembershipForAppInstanceUserSummary>,
        ) -> Self {
            self.channel_membership = input;
            self
        }
        /// Consumes the builder and constructs a [`DescribeChannelMembershipForAppInstanceUserOutput`](crate::output::DescribeChannelMembershipForAppInstanceUserOutput)
        pub fn build(self) -> crate::output::DescribeChannelMembershipForAppInstanceUserOutput {
            crate::output::DescribeChannelMembershipForAppInstanceUserOutput {
                channel_membership: self.channel_membership,
            }
        }
    }
}
