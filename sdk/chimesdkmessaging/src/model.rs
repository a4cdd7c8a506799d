/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types shared by the inputs and outputs of the service.

use crate::shapes;
use sdk_types::{DateTime, UnknownVariantError, UnknownVariantValue};
use std::collections::BTreeMap;
use std::str::FromStr;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $schema:path, { $($(#[$variant_meta:meta])* $variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        ///
        /// Values added to the service after this client was built are kept in the
        /// `Unknown` variant. Use [`FromStr`] to reject them instead.
        #[non_exhaustive]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($(#[$variant_meta])* $variant,)+
            /// A value this client doesn't know.
            Unknown(UnknownVariantValue),
        }

        impl $name {
            /// Returns the wire value of this variant.
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)+
                    $name::Unknown(value) => value.as_str(),
                }
            }

            /// Returns every wire value of the enum.
            pub fn values() -> &'static [&'static str] {
                $schema.enum_values()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                match s {
                    $($value => $name::$variant,)+
                    other => $name::Unknown(UnknownVariantValue::new(other)),
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match $name::from(s) {
                    $name::Unknown(value) => Err(UnknownVariantError::new(
                        stringify!($name),
                        value.as_str(),
                        Self::values(),
                    )),
                    known => Ok(known),
                }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(
    /// Whether a message is a standard message or a control message.
    ChannelMessageType, shapes::CHANNEL_MESSAGE_TYPE, {
        #[allow(missing_docs)]
        Standard => "STANDARD",
        #[allow(missing_docs)]
        Control => "CONTROL",
    }
);

string_enum!(
    /// Whether a message is persisted.
    ChannelMessagePersistenceType, shapes::CHANNEL_MESSAGE_PERSISTENCE_TYPE, {
        #[allow(missing_docs)]
        Persistent => "PERSISTENT",
        #[allow(missing_docs)]
        NonPersistent => "NON_PERSISTENT",
    }
);

string_enum!(
    /// Visibility of a channel membership.
    ChannelMembershipType, shapes::CHANNEL_MEMBERSHIP_TYPE, {
        #[allow(missing_docs)]
        Default => "DEFAULT",
        #[allow(missing_docs)]
        Hidden => "HIDDEN",
    }
);

string_enum!(
    /// Whether members can be added by anyone or only by moderators.
    ChannelMode, shapes::CHANNEL_MODE, {
        #[allow(missing_docs)]
        Unrestricted => "UNRESTRICTED",
        #[allow(missing_docs)]
        Restricted => "RESTRICTED",
    }
);

string_enum!(
    /// Whether a channel is discoverable.
    ChannelPrivacy, shapes::CHANNEL_PRIVACY, {
        #[allow(missing_docs)]
        Public => "PUBLIC",
        #[allow(missing_docs)]
        Private => "PRIVATE",
    }
);

/// The details of a user or bot.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Identity {
    /// The ARN in an Identity.
    pub arn: Option<String>,
    /// The name in an Identity.
    pub name: Option<String>,
}

impl Identity {
    /// Creates a new builder-style object to manufacture [`Identity`](crate::model::Identity)
    pub fn builder() -> crate::model::identity::Builder {
        crate::model::identity::Builder::default()
    }
}

/// See [`Identity`](crate::model::Identity)
pub mod identity {
    /// A builder for [`Identity`](crate::model::Identity)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) arn: Option<String>,
        pub(crate) name: Option<String>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn arn(mut self, input: impl Into<String>) -> Self {
            self.arn = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_arn(mut self, input: Option<String>) -> Self {
            self.arn = input;
            self
        }
        #[allow(missing_docs)]
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
            self
        }
        /// Consumes the builder and constructs a [`Identity`](crate::model::Identity)
        pub fn build(self) -> crate::model::Identity {
            crate::model::Identity {
                arn: self.arn,
                name: self.name,
            }
        }
    }
}

/// A list of message attribute values.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageAttributeValue {
    /// The strings in a message attribute value.
    pub string_values: Option<Vec<String>>,
}

impl MessageAttributeValue {
    /// Creates a new builder-style object to manufacture [`MessageAttributeValue`](crate::model::MessageAttributeValue)
    pub fn builder() -> crate::model::message_attribute_value::Builder {
        crate::model::message_attribute_value::Builder::default()
    }
}

/// See [`MessageAttributeValue`](crate::model::MessageAttributeValue)
pub mod message_attribute_value {
    /// A builder for [`MessageAttributeValue`](crate::model::MessageAttributeValue)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) string_values: Option<Vec<String>>,
    }

    impl Builder {
        /// Appends an item to `string_values`.
        pub fn string_values(mut self, input: impl Into<String>) -> Self {
            self.string_values
                .get_or_insert_with(Vec::new)
                .push(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_string_values(mut self, input: Option<Vec<String>>) -> Self {
            self.string_values = input;
            self
        }
        /// Consumes the builder and constructs a [`MessageAttributeValue`](crate::model::MessageAttributeValue)
        pub fn build(self) -> crate::model::MessageAttributeValue {
            crate::model::MessageAttributeValue {
                string_values: self.string_values,
            }
        }
    }
}

/// The details of a message in a channel.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMessage {
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The ID of a message.
    pub message_id: Option<String>,
    /// The content of the message.
    pub content: Option<String>,
    /// The message metadata.
    pub metadata: Option<String>,
    /// The message type.
    pub r#type: Option<ChannelMessageType>,
    /// The time at which the message was created.
    pub created_timestamp: Option<DateTime>,
    /// The time at which a message was edited.
    pub last_edited_timestamp: Option<DateTime>,
    /// The time at which a message was updated.
    pub last_updated_timestamp: Option<DateTime>,
    /// The message sender.
    pub sender: Option<Identity>,
    /// Hides the content of a message.
    pub redacted: Option<bool>,
    /// The persistence setting for a channel message.
    pub persistence: Option<ChannelMessagePersistenceType>,
    /// The attributes for the message, used for message filtering.
    pub message_attributes: Option<BTreeMap<String, MessageAttributeValue>>,
}

impl ChannelMessage {
    /// Creates a new builder-style object to manufacture [`ChannelMessage`](crate::model::ChannelMessage)
    pub fn builder() -> crate::model::channel_message::Builder {
        crate::model::channel_message::Builder::default()
    }
}

/// See [`ChannelMessage`](crate::model::ChannelMessage)
pub mod channel_message {
    use super::{ChannelMessagePersistenceType, ChannelMessageType, Identity, MessageAttributeValue};
    use sdk_types::DateTime;
    use std::collections::BTreeMap;

    /// A builder for [`ChannelMessage`](crate::model::ChannelMessage)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_arn: Option<String>,
        pub(crate) message_id: Option<String>,
        pub(crate) content: Option<String>,
        pub(crate) metadata: Option<String>,
        pub(crate) r#type: Option<ChannelMessageType>,
        pub(crate) created_timestamp: Option<DateTime>,
        pub(crate) last_edited_timestamp: Option<DateTime>,
        pub(crate) last_updated_timestamp: Option<DateTime>,
        pub(crate) sender: Option<Identity>,
        pub(crate) redacted: Option<bool>,
        pub(crate) persistence: Option<ChannelMessagePersistenceType>,
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
        pub fn created_timestamp(mut self, input: DateTime) -> Self {
            self.created_timestamp = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_created_timestamp(mut self, input: Option<DateTime>) -> Self {
            self.created_timestamp = input;
            self
        }
        #[allow(missing_docs)]
        pub fn last_edited_timestamp(mut self, input: DateTime) -> Self {
            self.last_edited_timestamp = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_last_edited_timestamp(mut self, input: Option<DateTime>) -> Self {
            self.last_edited_timestamp = input;
            self
        }
        #[allow(missing_docs)]
        pub fn last_updated_timestamp(mut self, input: DateTime) -> Self {
            self.last_updated_timestamp = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_last_updated_timestamp(mut self, input: Option<DateTime>) -> Self {
            self.last_updated_timestamp = input;
            self
        }
        #[allow(missing_docs)]
        pub fn sender(mut self, input: Identity) -> Self {
            self.sender = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_sender(mut self, input: Option<Identity>) -> Self {
            self.sender = input;
            self
        }
        #[allow(missing_docs)]
        pub fn redacted(mut self, input: bool) -> Self {
            self.redacted = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_redacted(mut self, input: Option<bool>) -> Self {
            self.redacted = input;
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
        /// Consumes the builder and constructs a [`ChannelMessage`](crate::model::ChannelMessage)
        pub fn build(self) -> crate::model::ChannelMessage {
            crate::model::ChannelMessage {
                channel_arn: self.channel_arn,
                message_id: self.message_id,
                content: self.content,
                metadata: self.metadata,
                r#type: self.r#type,
                created_timestamp: self.created_timestamp,
                last_edited_timestamp: self.last_edited_timestamp,
                last_updated_timestamp: self.last_updated_timestamp,
                sender: self.sender,
                redacted: self.redacted,
                persistence: self.persistence,
                message_attributes: self.message_attributes,
            }
        }
    }
}

/// Stores information about a callback.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMessageCallback {
    /// The message ID.
    pub message_id: Option<String>,
    /// The message content.
    pub content: Option<String>,
    /// The message metadata.
    pub metadata: Option<String>,
}

impl ChannelMessageCallback {
    /// Creates a new builder-style object to manufacture [`ChannelMessageCallback`](crate::model::ChannelMessageCallback)
    pub fn builder() -> crate::model::channel_message_callback::Builder {
        crate::model::channel_message_callback::Builder::default()
    }
}

/// See [`ChannelMessageCallback`](crate::model::ChannelMessageCallback)
pub mod channel_message_callback {
    /// A builder for [`ChannelMessageCallback`](crate::model::ChannelMessageCallback)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) message_id: Option<String>,
        pub(crate) content: Option<String>,
        pub(crate) metadata: Option<String>,
    }

    impl Builder {
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
        pub fn metadata(mut self, input: impl Into<String>) -> Self {
            self.metadata = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_metadata(mut self, input: Option<String>) -> Self {
            self.metadata = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelMessageCallback`](crate::model::ChannelMessageCallback)
        pub fn build(self) -> crate::model::ChannelMessageCallback {
            crate::model::ChannelMessageCallback {
                message_id: self.message_id,
                content: self.content,
                metadata: self.metadata,
            }
        }
    }
}

/// Summary of the details of a channel membership.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMembershipSummary {
    /// A member's summary data.
    pub member: Option<Identity>,
}

impl ChannelMembershipSummary {
    /// Creates a new builder-style object to manufacture [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
    pub fn builder() -> crate::model::channel_membership_summary::Builder {
        crate::model::channel_membership_summary::Builder::default()
    }
}

/// See [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
pub mod channel_membership_summary {
    use super::Identity;

    /// A builder for [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) member: Option<Identity>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn member(mut self, input: Identity) -> Self {
            self.member = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_member(mut self, input: Option<Identity>) -> Self {
            self.member = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelMembershipSummary`](crate::model::ChannelMembershipSummary)
        pub fn build(self) -> crate::model::ChannelMembershipSummary {
            crate::model::ChannelMembershipSummary {
                member: self.member,
            }
        }
    }
}

/// Summary of the details of a channel.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelSummary {
    /// The name of the channel.
    pub name: Option<String>,
    /// The ARN of the channel.
    pub channel_arn: Option<String>,
    /// The mode of the channel.
    pub mode: Option<ChannelMode>,
    /// The privacy setting of the channel.
    pub privacy: Option<ChannelPrivacy>,
    /// The metadata of the channel.
    pub metadata: Option<String>,
    /// The time at which the last persistent message in a channel was sent.
    pub last_message_timestamp: Option<DateTime>,
}

impl ChannelSummary {
    /// Creates a new builder-style object to manufacture [`ChannelSummary`](crate::model::ChannelSummary)
    pub fn builder() -> crate::model::channel_summary::Builder {
        crate::model::channel_summary::Builder::default()
    }
}

/// See [`ChannelSummary`](crate::model::ChannelSummary)
pub mod channel_summary {
    use super::{ChannelMode, ChannelPrivacy};
    use sdk_types::DateTime;

    /// A builder for [`ChannelSummary`](crate::model::ChannelSummary)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) name: Option<String>,
        pub(crate) channel_arn: Option<String>,
        pub(crate) mode: Option<ChannelMode>,
        pub(crate) privacy: Option<ChannelPrivacy>,
        pub(crate) metadata: Option<String>,
        pub(crate) last_message_timestamp: Option<DateTime>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn name(mut self, input: impl Into<String>) -> Self {
            self.name = Some(input.into());
            self
        }
        #[allow(missing_docs)]
        pub fn set_name(mut self, input: Option<String>) -> Self {
            self.name = input;
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
        pub fn mode(mut self, input: ChannelMode) -> Self {
            self.mode = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_mode(mut self, input: Option<ChannelMode>) -> Self {
            self.mode = input;
            self
        }
        #[allow(missing_docs)]
        pub fn privacy(mut self, input: ChannelPrivacy) -> Self {
            self.privacy = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_privacy(mut self, input: Option<ChannelPrivacy>) -> Self {
            self.privacy = input;
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
        pub fn last_message_timestamp(mut self, input: DateTime) -> Self {
            self.last_message_timestamp = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_last_message_timestamp(mut self, input: Option<DateTime>) -> Self {
            self.last_message_timestamp = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelSummary`](crate::model::ChannelSummary)
        pub fn build(self) -> crate::model::ChannelSummary {
            crate::model::ChannelSummary {
                name: self.name,
                channel_arn: self.channel_arn,
                mode: self.mode,
                privacy: self.privacy,
                metadata: self.metadata,
                last_message_timestamp: self.last_message_timestamp,
            }
        }
    }
}

/// Summary of the membership details of an `AppInstanceUser`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppInstanceUserMembershipSummary {
    /// The type of `ChannelMembership`.
    pub r#type: Option<ChannelMembershipType>,
    /// The time at which an `AppInstanceUser` last marked a channel as read.
    pub read_marker_timestamp: Option<DateTime>,
    /// The ID of the SubChannel that the `AppInstanceUser` is a member of.
    pub sub_channel_id: Option<String>,
}

impl AppInstanceUserMembershipSummary {
    /// Creates a new builder-style object to manufacture [`AppInstanceUserMembershipSummary`](crate::model::AppInstanceUserMembershipSummary)
    pub fn builder() -> crate::model::app_instance_user_membership_summary::Builder {
        crate::model::app_instance_user_membership_summary::Builder::default()
    }
}

/// See [`AppInstanceUserMembershipSummary`](crate::model::AppInstanceUserMembershipSummary)
pub mod app_instance_user_membership_summary {
    use super::ChannelMembershipType;
    use sdk_types::DateTime;

    /// A builder for [`AppInstanceUserMembershipSummary`](crate::model::AppInstanceUserMembershipSummary)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) r#type: Option<ChannelMembershipType>,
        pub(crate) read_marker_timestamp: Option<DateTime>,
        pub(crate) sub_channel_id: Option<String>,
    }

    impl Builder {
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
        pub fn read_marker_timestamp(mut self, input: DateTime) -> Self {
            self.read_marker_timestamp = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_read_marker_timestamp(mut self, input: Option<DateTime>) -> Self {
            self.read_marker_timestamp = input;
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
        /// Consumes the builder and constructs a [`AppInstanceUserMembershipSummary`](crate::model::AppInstanceUserMembershipSummary)
        pub fn build(self) -> crate::model::AppInstanceUserMembershipSummary {
            crate::model::AppInstanceUserMembershipSummary {
                r#type: self.r#type,
                read_marker_timestamp: self.read_marker_timestamp,
                sub_channel_id: self.sub_channel_id,
            }
        }
    }
}

/// Summary of the channel membership details of an `AppInstanceUser`.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelMembershipForAppInstanceUserSummary {
    /// Summary of the details of a channel.
    pub channel_summary: Option<ChannelSummary>,
    /// Returns the channel membership data for an `AppInstance`.
    pub app_instance_user_membership_summary: Option<AppInstanceUserMembershipSummary>,
}

impl ChannelMembershipForAppInstanceUserSummary {
    /// Creates a new builder-style object to manufacture [`ChannelMembershipForAppInstanceUserSummary`](crate::model::ChannelMembershipForAppInstanceUserSummary)
    pub fn builder() -> crate::model::channel_membership_for_app_instance_user_summary::Builder {
        crate::model::channel_membership_for_app_instance_user_summary::Builder::default()
    }
}

/// See [`ChannelMembershipForAppInstanceUserSummary`](crate::model::ChannelMembershipForAppInstanceUserSummary)
pub mod channel_membership_for_app_instance_user_summary {
    use super::{AppInstanceUserMembershipSummary, ChannelSummary};

    /// A builder for [`ChannelMembershipForAppInstanceUserSummary`](crate::model::ChannelMembershipForAppInstanceUserSummary)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        pub(crate) channel_summary: Option<ChannelSummary>,
        pub(crate) app_instance_user_membership_summary: Option<AppInstanceUserMembershipSummary>,
    }

    impl Builder {
        #[allow(missing_docs)]
        pub fn channel_summary(mut self, input: ChannelSummary) -> Self {
            self.channel_summary = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_channel_summary(mut self, input: Option<ChannelSummary>) -> Self {
            self.channel_summary = input;
            self
        }
        #[allow(missing_docs)]
        pub fn app_instance_user_membership_summary(
            mut self,
            input: AppInstanceUserMembershipSummary,
        ) -> Self {
            self.app_instance_user_membership_summary = Some(input);
            self
        }
        #[allow(missing_docs)]
        pub fn set_app_instance_user_membership_summary(
            mut self,
            input: Option<AppInstanceUserMembershipSummary>,
        ) -> Self {
            self.app_instance_user_membership_summary = input;
            self
        }
        /// Consumes the builder and constructs a [`ChannelMembershipForAppInstanceUserSummary`](crate::model::ChannelMembershipForAppInstanceUserSummary)
        pub fn build(self) -> crate::model::ChannelMembershipForAppInstanceUserSummary {
            crate::model::ChannelMembershipForAppInstanceUserSummary {
                channel_summary: self.channel_summary,
                app_instance_user_membership_summary: self.app_instance_user_membership_summary,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::{ChannelMembershipType, ChannelMessage, ChannelMessageType, MessageAttributeValue};

    #[test]
    fn enum_values() {
        assert_eq!(Ok(ChannelMessageType::Control), "CONTROL".parse());
        assert_eq!("STANDARD", ChannelMessageType::Standard.as_str());
        assert_eq!(&["DEFAULT", "HIDDEN"], ChannelMembershipType::values());
        let creator = ChannelMembershipType::from("CREATOR");
        assert!(matches!(creator, ChannelMembershipType::Unknown(_)));
        assert_eq!("CREATOR", creator.as_str());
        let err = "control".parse::<ChannelMessageType>().unwrap_err();
        assert_eq!(
            "invalid enum value `control` for ChannelMessageType; expected one of: STANDARD, CONTROL",
            err.to_string()
        );
    }

    #[test]
    fn builders_set_fields() {
        let message = ChannelMessage::builder()
            .content("hi")
            .r#type(ChannelMessageType::Standard)
            .message_attributes(
                "color",
                MessageAttributeValue::builder()
                    .string_values("red")
                    .string_values("blue")
                    .build(),
            )
            .build();
        assert_eq!(Some("hi"), message.content.as_deref());
        let color = &message.message_attributes.as_ref().unwrap()["color"];
        assert_eq!(
            Some(vec!["red".to_string(), "blue".to_string()]),
            color.string_values
        );
        assert_eq!(ChannelMessage::default(), ChannelMessage::builder().build());
    }
}
