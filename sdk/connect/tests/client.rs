/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use proptest::prelude::*;
use sdk_connect::input::{DescribeContactFlowInput, UpdateContactFlowMetadataInput};
use sdk_connect::model::ContactFlowState;
use sdk_connect::{Client, Config, SdkError};
use sdk_http::body::SdkBody;
use sdk_http::test_connection::TestConnection;
use sdk_types::error::ProvideErrorMetadata;

const ENDPOINT: &str = "https://connect.us-west-2.amazonaws.com";
const INSTANCE_ID: &str = "a1b2c3d4-5678-90ab-cdef-EXAMPLE11111";

fn client(conn: TestConnection) -> Client<TestConnection> {
    let config = Config::builder().endpoint_url(ENDPOINT).build();
    Client::from_conf_conn(config, conn)
}

#[test]
fn update_contact_flow_metadata() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!(
                "{}/contact-flows/{}/cf%2F1/metadata",
                ENDPOINT, INSTANCE_ID
            ))
            .header("content-type", "application/json")
            .body(SdkBody::from(
                r#"{"Name": "Inbound", "Description": "main line", "ContactFlowState": "ARCHIVED"}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(SdkBody::empty())
            .unwrap(),
    )]);
    let input = UpdateContactFlowMetadataInput::builder()
        .instance_id(INSTANCE_ID)
        .contact_flow_id("cf/1")
        .name("Inbound")
        .description("main line")
        .contact_flow_state(ContactFlowState::Archived)
        .build();
    client(conn.clone())
        .update_contact_flow_metadata(&input)
        .unwrap();
    conn.assert_requests_match(&[]);
    assert_eq!(http::Method::POST, conn.requests()[0].actual.method());
}

#[test]
fn missing_contact_flow_id_is_a_construction_failure() {
    let conn = TestConnection::new(vec![]);
    let input = UpdateContactFlowMetadataInput::builder()
        .instance_id(INSTANCE_ID)
        .contact_flow_state(ContactFlowState::Active)
        .build();
    let err = client(conn.clone())
        .update_contact_flow_metadata(&input)
        .unwrap_err();
    assert!(
        matches!(err, SdkError::ConstructionFailure(_)),
        "{:?}",
        err
    );
    assert!(conn.requests().is_empty());
}

#[test]
fn describe_contact_flow() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .uri(format!("{}/contact-flows/{}/cf-1", ENDPOINT, INSTANCE_ID))
            .body(SdkBody::empty())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(SdkBody::from(
                r#"{"ContactFlow": {
                    "Arn": "arn:aws:connect:us-west-2:111122223333:instance/i/contact-flow/cf-1",
                    "Id": "cf-1",
                    "Name": "Inbound",
                    "State": "ACTIVE",
                    "Content": "{\"Version\":\"2019-10-30\"}",
                    "Tags": {"team": "support"}
                }}"#,
            ))
            .unwrap(),
    )]);
    let input = DescribeContactFlowInput::builder()
        .instance_id(INSTANCE_ID)
        .contact_flow_id("cf-1")
        .build();
    let output = client(conn.clone()).describe_contact_flow(&input).unwrap();
    conn.assert_requests_match(&[]);
    let flow = output.contact_flow.unwrap();
    assert_eq!(Some(ContactFlowState::Active), flow.state);
    assert_eq!(Some("Inbound"), flow.name.as_deref());
    assert_eq!(Some(r#"{"Version":"2019-10-30"}"#), flow.content.as_deref());
    assert_eq!(None, flow.description);
}

#[test]
fn resource_not_found() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(404)
            .header("x-amzn-ErrorType", "ResourceNotFoundException")
            .body(SdkBody::from(r#"{"Message":"Contact flow not found"}"#))
            .unwrap(),
    )]);
    let input = DescribeContactFlowInput::builder()
        .instance_id(INSTANCE_ID)
        .contact_flow_id("missing")
        .build();
    let err = client(conn)
        .describe_contact_flow(&input)
        .unwrap_err()
        .into_service_error()
        .expect("service error");
    assert!(err.is_resource_not_found_exception(), "{:?}", err);
    assert_eq!(Some("Contact flow not found"), err.message());
    assert_eq!(
        "ResourceNotFoundException: Contact flow not found",
        err.to_string()
    );
}

#[test]
fn throttling_is_dispatched_from_the_body_code() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(429)
            .body(SdkBody::from(
                r#"{"__type":"ThrottlingException","message":"Rate exceeded"}"#,
            ))
            .unwrap(),
    )]);
    let input = UpdateContactFlowMetadataInput::builder()
        .instance_id(INSTANCE_ID)
        .contact_flow_id("cf-1")
        .name("x")
        .build();
    let err = client(conn)
        .update_contact_flow_metadata(&input)
        .unwrap_err()
        .into_service_error()
        .expect("service error");
    assert!(err.is_throttling_exception(), "{:?}", err);
    assert_eq!(Some("Rate exceeded"), err.message());
}

fn known_state() -> impl Strategy<Value = ContactFlowState> {
    prop_oneof![
        Just(ContactFlowState::Active),
        Just(ContactFlowState::Archived)
    ]
}

proptest! {
    #[test]
    fn known_states_round_trip(state in known_state()) {
        let wire = state.as_str().to_string();
        prop_assert_eq!(Ok(state.clone()), wire.parse::<ContactFlowState>());
        prop_assert_eq!(state, ContactFlowState::from(wire.as_str()));
    }

    #[test]
    fn unknown_states_fail_to_parse(value in "[A-Z_]{1,12}") {
        prop_assume!(value != "ACTIVE" && value != "ARCHIVED");
        let err = value.parse::<ContactFlowState>().unwrap_err();
        let expected = format!("invalid enum value `{}` for ContactFlowState", value);
        prop_assert!(err.to_string().starts_with(&expected));
        let kept = ContactFlowState::from(value.as_str());
        prop_assert_eq!(value.as_str(), kept.as_str());
    }
}
