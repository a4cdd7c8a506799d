/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error::{
    BadRequestException, ForbiddenException, NotFoundException, ResourceLimitExceededException,
    ServiceFailureException, ThrottledClientException,
};
use crate::input::{
    ChannelFlowCallbackInput, DescribeChannelMembershipForAppInstanceUserInput,
    GetChannelMessageInput, ListChannelMembershipsInput, SendChannelMessageInput,
};
use crate::model::{
    AppInstanceUserMembershipSummary, ChannelMembershipForAppInstanceUserSummary,
    ChannelMembershipSummary, ChannelMessage, ChannelMessageCallback, ChannelSummary, Identity,
    MessageAttributeValue,
};
use crate::output::{
    ChannelFlowCallbackOutput, DescribeChannelMembershipForAppInstanceUserOutput,
    GetChannelMessageOutput, ListChannelMembershipsOutput, SendChannelMessageOutput,
};
use crate::shapes::*;
use sdk_schema::serde::{
    DeserializableStruct, SerializableStruct, ShapeDeserializer, ShapeSerializer,
};
use sdk_schema::Schema;
use std::collections::BTreeMap;

fn write_message_attributes<S: ShapeSerializer>(
    ser: &mut S,
    member: &Schema,
    attributes: &BTreeMap<String, MessageAttributeValue>,
) -> Result<(), S::Error> {
    ser.write_map(member, |ser| {
        for (key, value) in attributes {
            ser.write_string(&MESSAGE_ATTRIBUTE_MAP_KEY, key)?;
            ser.write_struct_value(&MESSAGE_ATTRIBUTE_MAP_VALUE, value)?;
        }
        Ok(())
    })
}

fn read_message_attributes<D: ShapeDeserializer>(
    de: &mut D,
    member: &Schema,
) -> Result<BTreeMap<String, MessageAttributeValue>, D::Error> {
    de.read_map(member, BTreeMap::new(), |mut map, key, de| {
        if let Some(value) = de.read_optional_struct()? {
            map.insert(key, value);
        }
        Ok(map)
    })
}

// model

impl SerializableStruct for Identity {
    fn schema() -> &'static Schema {
        &IDENTITY
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.arn {
            ser.write_string(&IDENTITY_ARN, var)?;
        }
        if let Some(var) = &self.name {
            ser.write_string(&IDENTITY_NAME, var)?;
        }
        Ok(())
    }
}

impl DeserializableStruct for Identity {
    fn schema() -> &'static Schema {
        &IDENTITY
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(&IDENTITY, Identity::builder(), |builder, member, de| {
            Ok(match member.member_index() {
                Some(0) => builder.arn(de.read_string(member)?),
                Some(1) => builder.name(de.read_string(member)?),
                _ => builder,
            })
        })?;
        Ok(builder.build())
    }
}

impl SerializableStruct for MessageAttributeValue {
    fn schema() -> &'static Schema {
        &MESSAGE_ATTRIBUTE_VALUE
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.string_values {
            ser.write_list(&MESSAGE_ATTRIBUTE_VALUE_STRING_VALUES, |ser| {
                for item in var {
                    ser.write_string(&MESSAGE_ATTRIBUTE_STRING_VALUES_MEMBER, item)?;
                }
                Ok(())
            })?;
        }
        Ok(())
    }
}

impl DeserializableStruct for MessageAttributeValue {
    fn schema() -> &'static Schema {
        &MESSAGE_ATTRIBUTE_VALUE
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &MESSAGE_ATTRIBUTE_VALUE,
            MessageAttributeValue::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_string_values(Some(de.read_list(
                        member,
                        Vec::new(),
                        |mut values, de| {
                            values.push(de.read_string(&MESSAGE_ATTRIBUTE_STRING_VALUES_MEMBER)?);
                            Ok(values)
                        },
                    )?)),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for ChannelMessage {
    fn schema() -> &'static Schema {
        &CHANNEL_MESSAGE
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.channel_arn {
            ser.write_string(&CHANNEL_MESSAGE_CHANNEL_ARN, var)?;
        }
        if let Some(var) = &self.message_id {
            ser.write_string(&CHANNEL_MESSAGE_MESSAGE_ID, var)?;
        }
        if let Some(var) = &self.content {
            ser.write_string(&CHANNEL_MESSAGE_CONTENT, var)?;
        }
        if let Some(var) = &self.metadata {
            ser.write_string(&CHANNEL_MESSAGE_METADATA, var)?;
        }
        if let Some(var) = &self.r#type {
            ser.write_string(&CHANNEL_MESSAGE_TYPE_MEMBER, var.as_str())?;
        }
        if let Some(var) = &self.created_timestamp {
            ser.write_timestamp(&CHANNEL_MESSAGE_CREATED_TIMESTAMP, var)?;
        }
        if let Some(var) = &self.last_edited_timestamp {
            ser.write_timestamp(&CHANNEL_MESSAGE_LAST_EDITED_TIMESTAMP, var)?;
        }
        if let Some(var) = &self.last_updated_timestamp {
            ser.write_timestamp(&CHANNEL_MESSAGE_LAST_UPDATED_TIMESTAMP, var)?;
        }
        if let Some(var) = &self.sender {
            ser.write_struct_value(&CHANNEL_MESSAGE_SENDER, var)?;
        }
        if let Some(var) = self.redacted {
            ser.write_boolean(&CHANNEL_MESSAGE_REDACTED, var)?;
        }
        if let Some(var) = &self.persistence {
            ser.write_string(&CHANNEL_MESSAGE_PERSISTENCE, var.as_str())?;
        }
        if let Some(var) = &self.message_attributes {
            write_message_attributes(ser, &CHANNEL_MESSAGE_MESSAGE_ATTRIBUTES, var)?;
        }
        Ok(())
    }
}

impl DeserializableStruct for ChannelMessage {
    fn schema() -> &'static Schema {
        &CHANNEL_MESSAGE
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &CHANNEL_MESSAGE,
            ChannelMessage::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.channel_arn(de.read_string(member)?),
                    Some(1) => builder.message_id(de.read_string(member)?),
                    Some(2) => builder.content(de.read_string(member)?),
                    Some(3) => builder.metadata(de.read_string(member)?),
                    Some(4) => builder.r#type(de.read_enum(member)?),
                    Some(5) => builder.created_timestamp(de.read_timestamp(member)?),
                    Some(6) => builder.last_edited_timestamp(de.read_timestamp(member)?),
                    Some(7) => builder.last_updated_timestamp(de.read_timestamp(member)?),
                    Some(8) => builder.set_sender(de.read_optional_struct()?),
                    Some(9) => builder.redacted(de.read_boolean(member)?),
                    Some(10) => builder.persistence(de.read_enum(member)?),
                    Some(11) => {
                        builder.set_message_attributes(Some(read_message_attributes(de, member)?))
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl SerializableStruct for ChannelMessageCallback {
    fn schema() -> &'static Schema {
        &CHANNEL_MESSAGE_CALLBACK
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.message_id {
            ser.write_string(&CHANNEL_MESSAGE_CALLBACK_MESSAGE_ID, var)?;
        }
        if let Some(var) = &self.content {
            ser.write_string(&CHANNEL_MESSAGE_CALLBACK_CONTENT, var)?;
        }
        if let Some(var) = &self.metadata {
            ser.write_string(&CHANNEL_MESSAGE_CALLBACK_METADATA, var)?;
        }
        Ok(())
    }
}

impl DeserializableStruct for ChannelMembershipSummary {
    fn schema() -> &'static Schema {
        &CHANNEL_MEMBERSHIP_SUMMARY
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &CHANNEL_MEMBERSHIP_SUMMARY,
            ChannelMembershipSummary::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_member(de.read_optional_struct()?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for ChannelSummary {
    fn schema() -> &'static Schema {
        &CHANNEL_SUMMARY
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &CHANNEL_SUMMARY,
            ChannelSummary::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.name(de.read_string(member)?),
                    Some(1) => builder.channel_arn(de.read_string(member)?),
                    Some(2) => builder.mode(de.read_enum(member)?),
                    Some(3) => builder.privacy(de.read_enum(member)?),
                    Some(4) => builder.metadata(de.read_string(member)?),
                    Some(5) => builder.last_message_timestamp(de.read_timestamp(member)?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for AppInstanceUserMembershipSummary {
    fn schema() -> &'static Schema {
        &APP_INSTANCE_USER_MEMBERSHIP_SUMMARY
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &APP_INSTANCE_USER_MEMBERSHIP_SUMMARY,
            AppInstanceUserMembershipSummary::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.r#type(de.read_enum(member)?),
                    Some(1) => builder.read_marker_timestamp(de.read_timestamp(member)?),
                    Some(2) => builder.sub_channel_id(de.read_string(member)?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for ChannelMembershipForAppInstanceUserSummary {
    fn schema() -> &'static Schema {
        &CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_SUMMARY,
            ChannelMembershipForAppInstanceUserSummary::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_channel_summary(de.read_optional_struct()?),
                    Some(1) => {
                        builder.set_app_instance_user_membership_summary(de.read_optional_struct()?)
                    }
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

// operation inputs

impl SerializableStruct for SendChannelMessageInput {
    fn schema() -> &'static Schema {
        &SEND_CHANNEL_MESSAGE_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.channel_arn {
            ser.write_string(&SEND_CHANNEL_MESSAGE_INPUT_CHANNEL_ARN, var)?;
        }
        if let Some(var) = &self.content {
            ser.write_string(&SEND_CHANNEL_MESSAGE_INPUT_CONTENT, var)?;
        }
        if let Some(var) = &self.r#type {
            ser.write_string(&SEND_CHANNEL_MESSAGE_INPUT_TYPE, var.as_str())?;
        }
        if let Some(var) = &self.persistence {
            ser.write_string(&SEND_CHANNEL_MESSAGE_INPUT_PERSISTENCE, var.as_str())?;
        }
        if let Some(var) = &self.metadata {
            ser.write_string(&SEND_CHANNEL_MESSAGE_INPUT_METADATA, var)?;
        }
        if let Some(var) = &self.client_request_token {
            ser.write_string(&SEND_CHANNEL_MESSAGE_INPUT_CLIENT_REQUEST_TOKEN, var)?;
        }
        if let Some(var) = &self.chime_bearer {
            ser.write_string(&SEND_CHANNEL_MESSAGE_INPUT_CHIME_BEARER, var)?;
        }
        if let Some(var) = &self.message_attributes {
            write_message_attributes(ser, &SEND_CHANNEL_MESSAGE_INPUT_MESSAGE_ATTRIBUTES, var)?;
        }
        Ok(())
    }
}

impl SerializableStruct for GetChannelMessageInput {
    fn schema() -> &'static Schema {
        &GET_CHANNEL_MESSAGE_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.channel_arn {
            ser.write_string(&GET_CHANNEL_MESSAGE_INPUT_CHANNEL_ARN, var)?;
        }
        if let Some(var) = &self.message_id {
            ser.write_string(&GET_CHANNEL_MESSAGE_INPUT_MESSAGE_ID, var)?;
        }
        if let Some(var) = &self.chime_bearer {
            ser.write_string(&GET_CHANNEL_MESSAGE_INPUT_CHIME_BEARER, var)?;
        }
        if let Some(var) = &self.sub_channel_id {
            ser.write_string(&GET_CHANNEL_MESSAGE_INPUT_SUB_CHANNEL_ID, var)?;
        }
        Ok(())
    }
}

impl SerializableStruct for ChannelFlowCallbackInput {
    fn schema() -> &'static Schema {
        &CHANNEL_FLOW_CALLBACK_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.callback_id {
            ser.write_string(&CHANNEL_FLOW_CALLBACK_INPUT_CALLBACK_ID, var)?;
        }
        if let Some(var) = &self.channel_arn {
            ser.write_string(&CHANNEL_FLOW_CALLBACK_INPUT_CHANNEL_ARN, var)?;
        }
        if let Some(var) = self.delete_resource {
            ser.write_boolean(&CHANNEL_FLOW_CALLBACK_INPUT_DELETE_RESOURCE, var)?;
        }
        if let Some(var) = &self.channel_message {
            ser.write_struct_value(&CHANNEL_FLOW_CALLBACK_INPUT_CHANNEL_MESSAGE, var)?;
        }
        Ok(())
    }
}

impl SerializableStruct for ListChannelMembershipsInput {
    fn schema() -> &'static Schema {
        &LIST_CHANNEL_MEMBERSHIPS_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.channel_arn {
            ser.write_string(&LIST_CHANNEL_MEMBERSHIPS_INPUT_CHANNEL_ARN, var)?;
        }
        if let Some(var) = &self.r#type {
            ser.write_string(&LIST_CHANNEL_MEMBERSHIPS_INPUT_TYPE, var.as_str())?;
        }
        if let Some(var) = self.max_results {
            ser.write_integer(&LIST_CHANNEL_MEMBERSHIPS_INPUT_MAX_RESULTS, var)?;
        }
        if let Some(var) = &self.next_token {
            ser.write_string(&LIST_CHANNEL_MEMBERSHIPS_INPUT_NEXT_TOKEN, var)?;
        }
        if let Some(var) = &self.chime_bearer {
            ser.write_string(&LIST_CHANNEL_MEMBERSHIPS_INPUT_CHIME_BEARER, var)?;
        }
        Ok(())
    }
}

impl SerializableStruct for DescribeChannelMembershipForAppInstanceUserInput {
    fn schema() -> &'static Schema {
        &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT
    }

    fn serialize_members<S: ShapeSerializer>(&self, ser: &mut S) -> Result<(), S::Error> {
        if let Some(var) = &self.channel_arn {
            ser.write_string(
                &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_CHANNEL_ARN,
                var,
            )?;
        }
        if let Some(var) = &self.app_instance_user_arn {
            ser.write_string(
                &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_APP_INSTANCE_USER_ARN,
                var,
            )?;
        }
        if let Some(var) = &self.chime_bearer {
            ser.write_string(
                &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_INPUT_CHIME_BEARER,
                var,
            )?;
        }
        Ok(())
    }
}

// operation outputs

impl DeserializableStruct for SendChannelMessageOutput {
    fn schema() -> &'static Schema {
        &SEND_CHANNEL_MESSAGE_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &SEND_CHANNEL_MESSAGE_OUTPUT,
            SendChannelMessageOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.channel_arn(de.read_string(member)?),
                    Some(1) => builder.message_id(de.read_string(member)?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for GetChannelMessageOutput {
    fn schema() -> &'static Schema {
        &GET_CHANNEL_MESSAGE_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &GET_CHANNEL_MESSAGE_OUTPUT,
            GetChannelMessageOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.channel_arn(de.read_string(member)?),
                    Some(1) => builder.set_channel_message(de.read_optional_struct()?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for ChannelFlowCallbackOutput {
    fn schema() -> &'static Schema {
        &CHANNEL_FLOW_CALLBACK_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &CHANNEL_FLOW_CALLBACK_OUTPUT,
            ChannelFlowCallbackOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.channel_arn(de.read_string(member)?),
                    Some(1) => builder.callback_id(de.read_string(member)?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for ListChannelMembershipsOutput {
    fn schema() -> &'static Schema {
        &LIST_CHANNEL_MEMBERSHIPS_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &LIST_CHANNEL_MEMBERSHIPS_OUTPUT,
            ListChannelMembershipsOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.channel_arn(de.read_string(member)?),
                    Some(1) => builder.set_channel_memberships(Some(de.read_list(
                        member,
                        Vec::new(),
                        |mut memberships, de| {
                            if let Some(summary) = de.read_optional_struct()? {
                                memberships.push(summary);
                            }
                            Ok(memberships)
                        },
                    )?)),
                    Some(2) => builder.next_token(de.read_string(member)?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

impl DeserializableStruct for DescribeChannelMembershipForAppInstanceUserOutput {
    fn schema() -> &'static Schema {
        &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        let builder = de.read_struct(
            &DESCRIBE_CHANNEL_MEMBERSHIP_FOR_APP_INSTANCE_USER_OUTPUT,
            DescribeChannelMembershipForAppInstanceUserOutput::builder(),
            |builder, member, de| {
                Ok(match member.member_index() {
                    Some(0) => builder.set_channel_membership(de.read_optional_struct()?),
                    _ => builder,
                })
            },
        )?;
        Ok(builder.build())
    }
}

// errors

macro_rules! deserialize_exception {
    ($ty:ident, $schema:ident) => {
        impl DeserializableStruct for $ty {
            fn schema() -> &'static Schema {
                &$schema
            }

            fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
                de.read_struct(&$schema, $ty::default(), |mut err, member, de| {
                    match member.member_index() {
                        Some(0) => err.code = Some(de.read_string(member)?),
                        Some(1) => err.message = Some(de.read_string(member)?),
                        _ => {}
                    }
                    Ok(err)
                })
            }
        }
    };
}

deserialize_exception!(BadRequestException, BAD_REQUEST_EXCEPTION);
deserialize_exception!(ForbiddenException, FORBIDDEN_EXCEPTION);
deserialize_exception!(NotFoundException, NOT_FOUND_EXCEPTION);
deserialize_exception!(ResourceLimitExceededException, RESOURCE_LIMIT_EXCEEDED_EXCEPTION);
deserialize_exception!(ServiceFailureException, SERVICE_FAILURE_EXCEPTION);

impl DeserializableStruct for ThrottledClientException {
    fn schema() -> &'static Schema {
        &THROTTLED_CLIENT_EXCEPTION
    }

    fn deserialize<D: ShapeDeserializer>(de: &mut D) -> Result<Self, D::Error> {
        de.read_struct(
            &THROTTLED_CLIENT_EXCEPTION,
            ThrottledClientException::default(),
            |mut err, member, de| {
                match member.member_index() {
                    Some(0) => err.code = Some(de.read_string(member)?),
                    Some(1) => err.message = Some(de.read_string(member)?),
                    Some(2) => err.retry_after_seconds = Some(de.read_integer(member)?),
                    _ => {}
                }
                Ok(err)
            },
        )
    }
}
