/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use sdk_chimesdkmessaging::input::{
    ChannelFlowCallbackInput, DescribeChannelMembershipForAppInstanceUserInput,
    GetChannelMessageInput, ListChannelMembershipsInput, SendChannelMessageInput,
};
use sdk_chimesdkmessaging::model::{
    ChannelMembershipType, ChannelMessageCallback, ChannelMessagePersistenceType,
    ChannelMessageType, ChannelMode, MessageAttributeValue,
};
use sdk_chimesdkmessaging::{Client, Config, Error, SdkError};
use sdk_http::body::SdkBody;
use sdk_http::label::ExpandedUri;
use sdk_http::test_connection::TestConnection;
use sdk_types::error::ProvideErrorMetadata;
use sdk_types::DateTime;

const ENDPOINT: &str = "https://messaging-chime.us-east-1.amazonaws.com";
const CHANNEL_ARN: &str = "arn:aws:chime:us-east-1:111122223333:app-instance/a1/channel/c+1";
const ENCODED_CHANNEL_ARN: &str =
    "arn%3Aaws%3Achime%3Aus-east-1%3A111122223333%3Aapp-instance%2Fa1%2Fchannel%2Fc%2B1";
const BEARER: &str = "arn:aws:chime:us-east-1:111122223333:app-instance/a1/user/u1";

fn client(conn: TestConnection) -> Client<TestConnection> {
    let config = Config::builder().endpoint_url(ENDPOINT).build();
    Client::from_conf_conn(config, conn)
}

fn response(status: u16, body: &str) -> http::Response<SdkBody> {
    http::Response::builder()
        .status(status)
        .body(SdkBody::from(body))
        .unwrap()
}

fn error_response(status: u16, code: &str, body: &str) -> http::Response<SdkBody> {
    http::Response::builder()
        .status(status)
        .header("x-amzn-ErrorType", code)
        .header("x-amzn-RequestId", "req-1")
        .body(SdkBody::from(body))
        .unwrap()
}

#[test]
fn send_channel_message() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!("{}/channels/{}/messages", ENDPOINT, ENCODED_CHANNEL_ARN))
            .header("x-amz-chime-bearer", BEARER)
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{
                    "Content": "hello",
                    "Type": "STANDARD",
                    "Persistence": "PERSISTENT",
                    "ClientRequestToken": "token-1",
                    "MessageAttributes": {"topic": {"StringValues": ["news", "sports"]}}
                }"#,
            ))
            .unwrap(),
        response(201, r#"{"ChannelArn":"arn:channel","MessageId":"m-1"}"#),
    )]);
    let input = SendChannelMessageInput::builder()
        .channel_arn(CHANNEL_ARN)
        .content("hello")
        .r#type(ChannelMessageType::Standard)
        .persistence(ChannelMessagePersistenceType::Persistent)
        .client_request_token("token-1")
        .chime_bearer(BEARER)
        .message_attributes(
            "topic",
            MessageAttributeValue::builder()
                .string_values("news")
                .string_values("sports")
                .build(),
        )
        .build();
    let output = client(conn.clone()).send_channel_message(&input).unwrap();
    assert_eq!(Some("m-1"), output.message_id.as_deref());
    assert_eq!(Some("arn:channel"), output.channel_arn.as_deref());
    conn.assert_requests_match(&[]);
    assert_eq!(http::Method::POST, conn.requests()[0].actual.method());
}

#[test]
fn get_channel_message() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!(
                "{}/channels/{}/messages/m-1?sub-channel-id=sub%201",
                ENDPOINT, ENCODED_CHANNEL_ARN
            ))
            .header("x-amz-chime-bearer", BEARER)
            .body(SdkBody::empty())
            .unwrap(),
        response(
            200,
            r#"{
                "ChannelArn": "arn:channel",
                "ChannelMessage": {
                    "MessageId": "m-1",
                    "Content": "hello",
                    "Type": "CONTROL",
                    "CreatedTimestamp": 1690000000.25,
                    "Sender": {"Arn": "arn:user", "Name": "Ana"},
                    "Redacted": false,
                    "Status": {"Value": "SENT"}
                }
            }"#,
        ),
    )]);
    let input = GetChannelMessageInput::builder()
        .channel_arn(CHANNEL_ARN)
        .message_id("m-1")
        .chime_bearer(BEARER)
        .sub_channel_id("sub 1")
        .build();
    let output = client(conn.clone()).get_channel_message(&input).unwrap();
    conn.assert_requests_match(&[]);
    {
        let requests = conn.requests();
        let path = requests[0]
            .actual
            .extensions()
            .get::<ExpandedUri>()
            .expect("expanded path is attached");
        assert_eq!(format!("/channels/{}/messages/m-1", CHANNEL_ARN), path.raw());
        assert_eq!(
            format!("/channels/{}/messages/m-1", ENCODED_CHANNEL_ARN),
            path.encoded()
        );
    }
    let message = output.channel_message.expect("message is set");
    assert_eq!(Some("hello"), message.content.as_deref());
    assert_eq!(Some(ChannelMessageType::Control), message.r#type);
    assert_eq!(
        Some(DateTime::from_secs_and_nanos(1_690_000_000, 250_000_000)),
        message.created_timestamp
    );
    assert_eq!(
        Some("Ana"),
        message.sender.as_ref().and_then(|s| s.name.as_deref())
    );
    assert_eq!(Some(false), message.redacted);
}

#[test]
fn channel_flow_callback_only_sends_body_members() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!(
                "{}/channels/{}?operation=channel-flow-callback",
                ENDPOINT, ENCODED_CHANNEL_ARN
            ))
            .body(SdkBody::from(r#"{"CallbackId":"cb-1"}"#))
            .unwrap(),
        response(200, r#"{"ChannelArn":"arn:channel","CallbackId":"cb-1"}"#),
    )]);
    let input = ChannelFlowCallbackInput::builder()
        .callback_id("cb-1")
        .channel_arn(CHANNEL_ARN)
        .build();
    let output = client(conn.clone()).channel_flow_callback(&input).unwrap();
    assert_eq!(Some("cb-1"), output.callback_id.as_deref());
    conn.assert_requests_match(&[]);
}

#[test]
fn channel_flow_callback_with_message() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!(
                "{}/channels/{}?operation=channel-flow-callback",
                ENDPOINT, ENCODED_CHANNEL_ARN
            ))
            .body(SdkBody::from(
                r#"{"CallbackId":"cb-1","DeleteResource":true,"ChannelMessage":{"MessageId":"m-1","Content":"redacted"}}"#,
            ))
            .unwrap(),
        response(200, "{}"),
    )]);
    let input = ChannelFlowCallbackInput::builder()
        .callback_id("cb-1")
        .channel_arn(CHANNEL_ARN)
        .delete_resource(true)
        .channel_message(
            ChannelMessageCallback::builder()
                .message_id("m-1")
                .content("redacted")
                .build(),
        )
        .build();
    client(conn.clone()).channel_flow_callback(&input).unwrap();
    conn.assert_requests_match(&[]);
}

#[test]
fn missing_label_is_a_construction_failure() {
    let conn = TestConnection::new(vec![]);
    let input = ChannelFlowCallbackInput::builder().callback_id("cb-1").build();
    let err = client(conn.clone())
        .channel_flow_callback(&input)
        .unwrap_err();
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}

#[test]
fn list_channel_memberships() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!(
                "{}/channels/{}/memberships?type=HIDDEN&max-results=2&next-token=abc%3D%3D",
                ENDPOINT, ENCODED_CHANNEL_ARN
            ))
            .header("x-amz-chime-bearer", BEARER)
            .body(SdkBody::empty())
            .unwrap(),
        response(
            200,
            r#"{
                "ChannelArn": "arn:channel",
                "ChannelMemberships": [
                    {"Member": {"Arn": "arn:user:1", "Name": "One"}},
                    {"Member": {"Arn": "arn:user:2"}}
                ],
                "NextToken": "def"
            }"#,
        ),
    )]);
    let input = ListChannelMembershipsInput::builder()
        .channel_arn(CHANNEL_ARN)
        .r#type(ChannelMembershipType::Hidden)
        .max_results(2)
        .next_token("abc==")
        .chime_bearer(BEARER)
        .build();
    let output = client(conn.clone()).list_channel_memberships(&input).unwrap();
    conn.assert_requests_match(&[]);
    let members = output
        .channel_memberships
        .unwrap()
        .into_iter()
        .map(|m| m.member.and_then(|i| i.arn).unwrap())
        .collect::<Vec<_>>();
    assert_eq!(vec!["arn:user:1", "arn:user:2"], members);
    assert_eq!(Some("def"), output.next_token.as_deref());
}

#[test]
fn describe_channel_membership_tolerates_unknown_members() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!(
                "{}/channels/{}?scope=app-instance-user-membership&app-instance-user-arn={}",
                ENDPOINT,
                ENCODED_CHANNEL_ARN,
                "arn%3Auser"
            ))
            .header("x-amz-chime-bearer", BEARER)
            .body(SdkBody::empty())
            .unwrap(),
        response(
            200,
            r#"{
                "ChannelMembership": {
                    "ChannelSummary": {"Name": "general", "Mode": "RESTRICTED", "LastMessageTimestamp": 1690000100},
                    "AppInstanceUserMembershipSummary": {
                        "Type": "DEFAULT",
                        "ReadMarkerTimestamp": 1690000000,
                        "UnknownField": "x"
                    }
                },
                "Unmodeled": [1, 2, 3]
            }"#,
        ),
    )]);
    let input = DescribeChannelMembershipForAppInstanceUserInput::builder()
        .channel_arn(CHANNEL_ARN)
        .app_instance_user_arn("arn:user")
        .chime_bearer(BEARER)
        .build();
    let output = client(conn.clone())
        .describe_channel_membership_for_app_instance_user(&input)
        .unwrap();
    conn.assert_requests_match(&[]);
    let membership = output.channel_membership.unwrap();
    let channel = membership.channel_summary.unwrap();
    assert_eq!(Some("general"), channel.name.as_deref());
    assert_eq!(Some(ChannelMode::Restricted), channel.mode);
    let summary = membership.app_instance_user_membership_summary.unwrap();
    assert_eq!(Some(ChannelMembershipType::Default), summary.r#type);
    assert_eq!(
        Some(DateTime::from_secs(1_690_000_000)),
        summary.read_marker_timestamp
    );
    assert_eq!(None, summary.sub_channel_id);
}

#[test]
fn unknown_enum_value_in_response_is_kept() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        response(
            200,
            r#"{"ChannelMembership":{"AppInstanceUserMembershipSummary":{
                "Type":"CREATOR","ReadMarkerTimestamp":1690000000,"UnknownField":"x"}}}"#,
        ),
    )]);
    let input = DescribeChannelMembershipForAppInstanceUserInput::builder()
        .channel_arn(CHANNEL_ARN)
        .app_instance_user_arn("arn:user")
        .build();
    let output = client(conn)
        .describe_channel_membership_for_app_instance_user(&input)
        .unwrap();
    let summary = output
        .channel_membership
        .and_then(|membership| membership.app_instance_user_membership_summary)
        .unwrap();
    let r#type = summary.r#type.unwrap();
    assert!(matches!(r#type, ChannelMembershipType::Unknown(_)));
    assert_eq!("CREATOR", r#type.as_str());
    assert_eq!(
        Some(DateTime::from_secs(1_690_000_000)),
        summary.read_marker_timestamp
    );
    let err = r#type.as_str().parse::<ChannelMembershipType>().unwrap_err();
    assert!(err.to_string().contains("invalid enum value `CREATOR`"));
}

#[test]
fn resource_limit_exceeded() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        error_response(
            400,
            "ResourceLimitExceededException:http://internal.amazon.com/coral/com.amazonaws.chimesdkmessaging/",
            r#"{"Code":"ResourceLimitExceeded","Message":"too many channels"}"#,
        ),
    )]);
    let input = SendChannelMessageInput::builder()
        .channel_arn(CHANNEL_ARN)
        .content("hello")
        .build();
    let err = client(conn).send_channel_message(&input).unwrap_err();
    let err = err.into_service_error().expect("service error");
    assert!(err.is_resource_limit_exceeded_exception(), "{:?}", err);
    assert_eq!(Some("ResourceLimitExceededException"), err.code());
    assert_eq!(Some("too many channels"), err.message());
    assert_eq!(Some("req-1"), err.request_id());
    match err {
        Error::ResourceLimitExceededException(inner) => {
            assert_eq!(Some("ResourceLimitExceeded"), inner.code.as_deref());
            assert_eq!(
                "ResourceLimitExceededException: too many channels",
                inner.to_string()
            );
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn throttled_client_reads_retry_after() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(429)
            .header("x-amzn-ErrorType", "ThrottledClientException")
            .header("Retry-After", "5")
            .body(SdkBody::from(r#"{"Code":"Throttled","Message":"slow down"}"#))
            .unwrap(),
    )]);
    let input = GetChannelMessageInput::builder()
        .channel_arn(CHANNEL_ARN)
        .message_id("m-1")
        .build();
    let err = client(conn).get_channel_message(&input).unwrap_err();
    match err.into_service_error() {
        Some(Error::ThrottledClientException(inner)) => {
            assert_eq!(Some(5), inner.retry_after_seconds);
            assert_eq!(Some("slow down"), inner.message());
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn unknown_error_code_is_unhandled() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        error_response(
            409,
            "ConflictException",
            r#"{"Code":"Conflict","Message":"already exists"}"#,
        ),
    )]);
    let input = GetChannelMessageInput::builder()
        .channel_arn(CHANNEL_ARN)
        .message_id("m-1")
        .build();
    let err = client(conn).get_channel_message(&input).unwrap_err();
    let raw_status = err.raw_response().map(|raw| raw.status().as_u16());
    assert_eq!(Some(409), raw_status);
    let err = err.into_service_error().expect("service error");
    assert!(err.is_unhandled());
    assert_eq!(Some("ConflictException"), err.code());
    assert_eq!(Some("already exists"), err.message());
}

#[test]
fn shape_registry_is_consistent() {
    let registry = sdk_chimesdkmessaging::shape_registry().unwrap();
    let shapes = registry
        .iter()
        .map(|schema| schema.shape_id().as_str().to_string())
        .collect::<Vec<_>>();
    for id in [
        "com.amazonaws.chimesdkmessaging#ChannelMessage",
        "com.amazonaws.chimesdkmessaging#ThrottledClientException",
        "com.amazonaws.chimesdkmessaging#ChannelMembershipType",
    ] {
        assert!(shapes.iter().any(|shape| shape == id), "{} is missing", id);
    }
}
